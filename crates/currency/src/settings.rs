use serde::{Deserialize, Serialize};

use crate::{CurrencyError, error::Result};

/// Where the currency symbol goes relative to the number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `$5.00`
    #[default]
    Before,
    /// `5,00 kr`
    After,
}

impl SymbolPosition {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SymbolPosition::Before => "before",
            SymbolPosition::After => "after",
        }
    }
}

impl core::fmt::Display for SymbolPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active display configuration for money amounts.
///
/// A value is always replaced as a whole; there is no field-level update
/// path on the store.
///
/// Serialized form (the persisted record):
///
/// ```json
/// {"code":"USD","symbol":"$","position":"before","locale":"en-US"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// Three-letter currency code, e.g. `USD`.
    pub code: String,
    /// Display glyph, e.g. `$`, `CA$`, `kr`.
    pub symbol: String,
    pub position: SymbolPosition,
    /// Locale identifier driving digit grouping and the decimal mark.
    pub locale: String,
}

impl CurrencySettings {
    pub fn new(
        code: impl Into<String>,
        symbol: impl Into<String>,
        position: SymbolPosition,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            position,
            locale: locale.into(),
        }
    }

    /// Checks the structural invariants: non-empty code, symbol and locale.
    ///
    /// The code is not checked against the catalog or for case, so custom
    /// settings such as `usd` are kept as given.
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(CurrencyError::InvalidSettings("empty code".to_string()));
        }
        if self.symbol.trim().is_empty() {
            return Err(CurrencyError::InvalidSettings(format!(
                "empty symbol for {}",
                self.code
            )));
        }
        if self.locale.trim().is_empty() {
            return Err(CurrencyError::InvalidSettings(format!(
                "empty locale for {}",
                self.code
            )));
        }
        Ok(())
    }
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self::new("USD", "$", SymbolPosition::Before, "en-US")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_usd() {
        let settings = CurrencySettings::default();
        assert_eq!(settings.code, "USD");
        assert_eq!(settings.symbol, "$");
        assert_eq!(settings.position, SymbolPosition::Before);
        assert_eq!(settings.locale, "en-US");
    }

    #[test]
    fn serializes_position_lowercase() {
        let json = serde_json::to_string(&CurrencySettings::default()).unwrap();
        assert_eq!(
            json,
            r#"{"code":"USD","symbol":"$","position":"before","locale":"en-US"}"#
        );
    }

    #[test]
    fn rejects_unknown_position() {
        let raw = r#"{"code":"USD","symbol":"$","position":"middle","locale":"en-US"}"#;
        assert!(serde_json::from_str::<CurrencySettings>(raw).is_err());
    }

    #[test]
    fn validate_checks_fields() {
        assert!(CurrencySettings::default().validate().is_ok());

        let lower = CurrencySettings::new("usd", "$", SymbolPosition::Before, "en-US");
        assert!(lower.validate().is_ok());

        let no_code = CurrencySettings::new(" ", "$", SymbolPosition::Before, "en-US");
        assert_eq!(
            no_code.validate().unwrap_err(),
            CurrencyError::InvalidSettings("empty code".to_string())
        );

        let no_symbol = CurrencySettings::new("USD", " ", SymbolPosition::Before, "en-US");
        assert!(no_symbol.validate().is_err());

        let no_locale = CurrencySettings::new("USD", "$", SymbolPosition::After, "");
        assert!(no_locale.validate().is_err());
    }
}
