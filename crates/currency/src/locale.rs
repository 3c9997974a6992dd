//! Numeric conventions per locale identifier.
//!
//! Only grouping and decimal marks matter here: the currency symbol and sign
//! are placed by [`crate::format()`]. Values follow CLDR for every catalog
//! locale plus a handful of common neighbours.
//!
//! Resolution of an identifier is a fixed three-step policy:
//!
//! 1. exact tag match (case-insensitive, `_` accepted for `-`),
//! 2. first entry with the same language subtag,
//! 3. `en-US`.
//!
//! Unknown or malformed identifiers are never rejected.

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

/// How integer digits are split into groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: `1,234,567`.
    Thousands,
    /// Three, then twos: `12,34,567`.
    Indian,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberConventions {
    pub tag: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub grouping: Grouping,
    /// Grouping only kicks in when the leading group would hold at least
    /// this many digits (`pl-PL` prints `1000,00` but `10 000,00`).
    pub min_grouping_digits: usize,
}

impl NumberConventions {
    const fn new(
        tag: &'static str,
        group_separator: &'static str,
        decimal_separator: &'static str,
    ) -> Self {
        Self {
            tag,
            group_separator,
            decimal_separator,
            grouping: Grouping::Thousands,
            min_grouping_digits: 1,
        }
    }

    const fn indian(mut self) -> Self {
        self.grouping = Grouping::Indian;
        self
    }

    const fn min_grouping(mut self, digits: usize) -> Self {
        self.min_grouping_digits = digits;
        self
    }

    fn language(&self) -> &'static str {
        language_of(self.tag)
    }

    /// Inserts group separators into a string of ASCII digits.
    #[must_use]
    pub fn group(&self, digits: &str) -> String {
        if digits.len() < 3 + self.min_grouping_digits {
            return digits.to_string();
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let step = match self.grouping {
            Grouping::Thousands => 3,
            Grouping::Indian => 2,
        };
        let mut rest = head;
        while rest.len() > step {
            let (left, right) = rest.split_at(rest.len() - step);
            groups.push(right);
            rest = left;
        }
        groups.push(rest);
        groups.reverse();
        groups.push(tail);
        groups.join(self.group_separator)
    }
}

// Order matters for the language fallback: the first tag of a language wins.
static CONVENTIONS: &[NumberConventions] = &[
    NumberConventions::new("en-US", ",", "."),
    NumberConventions::new("en-GB", ",", "."),
    NumberConventions::new("en-CA", ",", "."),
    NumberConventions::new("en-AU", ",", "."),
    NumberConventions::new("en-IN", ",", ".").indian(),
    NumberConventions::new("en-ZA", NBSP, ","),
    NumberConventions::new("de-DE", ".", ","),
    NumberConventions::new("de-AT", NBSP, ","),
    NumberConventions::new("de-CH", "’", "."),
    NumberConventions::new("fr-FR", NNBSP, ","),
    NumberConventions::new("it-IT", ".", ","),
    NumberConventions::new("nl-NL", ".", ","),
    NumberConventions::new("es-ES", ".", ",").min_grouping(2),
    NumberConventions::new("es-MX", ",", "."),
    NumberConventions::new("pt-BR", ".", ","),
    NumberConventions::new("pt-PT", NBSP, ",").min_grouping(2),
    NumberConventions::new("ja-JP", ",", "."),
    NumberConventions::new("zh-CN", ",", "."),
    NumberConventions::new("ko-KR", ",", "."),
    NumberConventions::new("hi-IN", ",", ".").indian(),
    NumberConventions::new("sv-SE", NBSP, ","),
    NumberConventions::new("nb-NO", NBSP, ","),
    NumberConventions::new("da-DK", ".", ","),
    NumberConventions::new("fi-FI", NBSP, ","),
    NumberConventions::new("pl-PL", NBSP, ",").min_grouping(2),
    NumberConventions::new("ru-RU", NBSP, ","),
];

fn language_of(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

/// Conventions used when nothing else matches.
#[must_use]
pub fn fallback() -> &'static NumberConventions {
    &CONVENTIONS[0]
}

/// Resolves a locale identifier to its numeric conventions.
#[must_use]
pub fn conventions(locale: &str) -> &'static NumberConventions {
    let tag = locale.trim().replace('_', "-");
    if let Some(exact) = CONVENTIONS.iter().find(|c| c.tag.eq_ignore_ascii_case(&tag)) {
        return exact;
    }

    // `no` is the macrolanguage for Norwegian Bokmål.
    let language = match language_of(&tag) {
        lang if lang.eq_ignore_ascii_case("no") => "nb",
        lang => lang,
    };
    CONVENTIONS
        .iter()
        .find(|c| c.language().eq_ignore_ascii_case(language))
        .unwrap_or_else(fallback)
}
