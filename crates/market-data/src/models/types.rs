use std::borrow::Cow;

/// Provider identifier - mostly static constants
pub type ProviderId = Cow<'static, str>;

/// Currency code (ISO 4217) as used for rate table keys
pub type CurrencyCode = String;

/// The currency every cross rate is mediated through.
pub const USD: &str = "USD";
