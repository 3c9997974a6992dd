//! Currency display settings for Spent.
//!
//! - [`CurrencyStore`] owns the active [`CurrencySettings`], notifies
//!   observers and persists every change through a [`KeyValueStorage`].
//! - [`catalog`] lists the supported currencies.
//! - [`format`] renders an amount of minor units for display.
//!
//! ```rust
//! use currency::{CurrencyStore, NoopStorage, format};
//!
//! let mut store = CurrencyStore::initialize(Box::new(NoopStorage));
//! store.select("EUR").unwrap();
//! assert_eq!(format(-123_456, store.get()), "−1.234,56 €");
//! ```
pub use catalog::{CATALOG, CatalogEntry};
pub use error::{CurrencyError, Result};
pub use format::{MINUS, format, format_number};
pub use settings::{CurrencySettings, SymbolPosition};
pub use storage::{DEFAULT_STATE_PATH, FileStorage, KeyValueStorage, NoopStorage};
pub use store::{CurrencyStore, STORAGE_KEY, SubscriptionId};

pub mod catalog;
mod error;
mod format;
pub mod locale;
mod settings;
pub mod storage;
mod store;
