//! Errors raised by the currency crate.
//!
//! Most failures never reach the caller: [`CurrencyStore`] recovers from
//! storage problems by falling back to the default settings. The variants
//! below are returned by the storage primitives and by catalog selection.
//!
//! [`CurrencyStore`]: crate::CurrencyStore
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CurrencyError>;

#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

impl PartialEq for CurrencyError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            (Self::UnknownCurrency(a), Self::UnknownCurrency(b)) => a == b,
            (Self::InvalidSettings(a), Self::InvalidSettings(b)) => a == b,
            _ => false,
        }
    }
}
