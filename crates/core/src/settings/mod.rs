mod fx_settings;

pub use fx_settings::{
    FxSettings, ENV_BASE_CURRENCY, ENV_LOCALE, ENV_QUOTE_BASE_URL, ENV_QUOTE_TIMEOUT_SECS,
};
