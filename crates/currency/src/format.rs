use crate::{
    locale,
    settings::{CurrencySettings, SymbolPosition},
};

/// Sign marker for negative amounts (U+2212 MINUS SIGN).
pub const MINUS: char = '\u{2212}';

/// Renders an amount given in minor units (cents) for display.
///
/// The magnitude always carries exactly two fraction digits, grouped per
/// `settings.locale` (see [`crate::locale`] for how unknown identifiers are
/// resolved). Negative amounts get a leading [`MINUS`]; zero has no sign.
///
/// ```rust
/// use currency::{CurrencySettings, SymbolPosition, format};
///
/// let usd = CurrencySettings::default();
/// assert_eq!(format(-500, &usd), "−$5.00");
///
/// let eur = CurrencySettings::new("EUR", "€", SymbolPosition::After, "de-DE");
/// assert_eq!(format(123_456, &eur), "1.234,56 €");
/// ```
#[must_use]
pub fn format(amount_minor_units: i64, settings: &CurrencySettings) -> String {
    let sign = if amount_minor_units < 0 {
        MINUS.to_string()
    } else {
        String::new()
    };
    let number = format_number(amount_minor_units.unsigned_abs(), &settings.locale);

    match settings.position {
        SymbolPosition::Before => format!("{sign}{}{number}", settings.symbol),
        SymbolPosition::After => format!("{sign}{number} {}", settings.symbol),
    }
}

/// Formats an unsigned minor-unit magnitude as a fixed two-decimal number.
#[must_use]
pub fn format_number(magnitude_minor_units: u64, locale: &str) -> String {
    let conventions = locale::conventions(locale);
    let major = magnitude_minor_units / 100;
    let minor = magnitude_minor_units % 100;
    format!(
        "{}{}{minor:02}",
        conventions.group(&major.to_string()),
        conventions.decimal_separator
    )
}
