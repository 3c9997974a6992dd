//! Supported currencies and their default display conventions.
//!
//! The list is fixed at compile time. Order only matters for how selection
//! lists enumerate it.
use crate::settings::{
    CurrencySettings,
    SymbolPosition::{self, After, Before},
};

/// One selectable currency: a full [`CurrencySettings`] plus a display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub position: SymbolPosition,
    pub locale: &'static str,
}

impl CatalogEntry {
    const fn new(
        code: &'static str,
        symbol: &'static str,
        name: &'static str,
        position: SymbolPosition,
        locale: &'static str,
    ) -> Self {
        Self {
            code,
            symbol,
            name,
            position,
            locale,
        }
    }

    /// Settings value to hand to the store when this entry is picked.
    #[must_use]
    pub fn settings(&self) -> CurrencySettings {
        CurrencySettings::new(self.code, self.symbol, self.position, self.locale)
    }
}

impl From<&CatalogEntry> for CurrencySettings {
    fn from(entry: &CatalogEntry) -> Self {
        entry.settings()
    }
}

pub static CATALOG: [CatalogEntry; 18] = [
    CatalogEntry::new("USD", "$", "US Dollar", Before, "en-US"),
    CatalogEntry::new("EUR", "€", "Euro", After, "de-DE"),
    CatalogEntry::new("GBP", "£", "British Pound", Before, "en-GB"),
    CatalogEntry::new("JPY", "¥", "Japanese Yen", Before, "ja-JP"),
    CatalogEntry::new("CAD", "CA$", "Canadian Dollar", Before, "en-CA"),
    CatalogEntry::new("AUD", "A$", "Australian Dollar", Before, "en-AU"),
    CatalogEntry::new("CHF", "CHF", "Swiss Franc", Before, "de-CH"),
    CatalogEntry::new("CNY", "¥", "Chinese Yuan", Before, "zh-CN"),
    CatalogEntry::new("INR", "₹", "Indian Rupee", Before, "en-IN"),
    CatalogEntry::new("BRL", "R$", "Brazilian Real", Before, "pt-BR"),
    CatalogEntry::new("MXN", "MX$", "Mexican Peso", Before, "es-MX"),
    CatalogEntry::new("ZAR", "R", "South African Rand", Before, "en-ZA"),
    CatalogEntry::new("KRW", "₩", "South Korean Won", Before, "ko-KR"),
    CatalogEntry::new("SEK", "kr", "Swedish Krona", After, "sv-SE"),
    CatalogEntry::new("NOK", "kr", "Norwegian Krone", After, "nb-NO"),
    CatalogEntry::new("DKK", "kr", "Danish Krone", After, "da-DK"),
    CatalogEntry::new("PLN", "zł", "Polish Złoty", After, "pl-PL"),
    CatalogEntry::new("RUB", "₽", "Russian Ruble", After, "ru-RU"),
];

/// Iterates the catalog in display order.
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter()
}

/// Case-insensitive lookup by currency code.
#[must_use]
pub fn find(code: &str) -> Option<&'static CatalogEntry> {
    let code = code.trim();
    CATALOG
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(code))
}
