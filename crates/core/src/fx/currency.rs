//! Static catalog of currencies offered by the converter.

use serde::Serialize;

/// A currency the converter can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub flag: &'static str,
}

/// Supported currencies, in display order.
pub const CURRENCIES: &[Currency] = &[
    Currency {
        code: "ARS",
        name: "Argentine Peso",
        symbol: "$",
        flag: "🇦🇷",
    },
    Currency {
        code: "USD",
        name: "US Dollar",
        symbol: "$",
        flag: "🇺🇸",
    },
    Currency {
        code: "EUR",
        name: "Euro",
        symbol: "€",
        flag: "🇪🇺",
    },
    Currency {
        code: "CLP",
        name: "Chilean Peso",
        symbol: "$",
        flag: "🇨🇱",
    },
    Currency {
        code: "BRL",
        name: "Brazilian Real",
        symbol: "R$",
        flag: "🇧🇷",
    },
];

/// Looks up a currency by its exact code.
pub fn currency_by_code(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|currency| currency.code == code)
}

/// Display symbol for `code`, or the code itself when it is not in the catalog.
pub fn symbol_for(code: &str) -> &str {
    currency_by_code(code).map_or(code, |currency| currency.symbol)
}
