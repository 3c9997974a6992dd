use crate::{
    CurrencyError, catalog,
    error::Result,
    settings::CurrencySettings,
    storage::KeyValueStorage,
};

/// Key of the persisted settings record.
pub const STORAGE_KEY: &str = "spent_currency";

/// Handle returned by [`CurrencyStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&CurrencySettings)>;

/// Owner of the active [`CurrencySettings`].
///
/// Build one per process with [`CurrencyStore::initialize`] and pass it by
/// reference to whatever needs it. Every [`set`](Self::set) notifies the
/// observers in subscription order and then writes the value to storage.
pub struct CurrencyStore {
    current: CurrencySettings,
    storage: Box<dyn KeyValueStorage>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl CurrencyStore {
    /// Loads the persisted settings, or the default when there are none.
    ///
    /// Never fails: unreadable or malformed records are logged and ignored.
    pub fn initialize(storage: Box<dyn KeyValueStorage>) -> Self {
        let current = load(storage.as_ref());
        Self {
            current,
            storage,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// The active settings.
    #[must_use]
    pub fn get(&self) -> &CurrencySettings {
        &self.current
    }

    /// Replaces the active settings.
    ///
    /// Values failing [`CurrencySettings::validate`] are rejected and leave
    /// the store untouched.
    /// Persistence is best effort: a failed write is logged and the
    /// in-memory value stays updated.
    pub fn set(&mut self, value: CurrencySettings) -> Result<()> {
        value.validate()?;
        self.current = value;
        for (_, observer) in &mut self.observers {
            observer(&self.current);
        }
        self.persist();
        Ok(())
    }

    /// Picks a catalog entry by code and makes it active.
    pub fn select(&mut self, code: &str) -> Result<&CurrencySettings> {
        let entry =
            catalog::find(code).ok_or_else(|| CurrencyError::UnknownCurrency(code.to_string()))?;
        self.set(entry.into())?;
        Ok(&self.current)
    }

    /// Registers an observer. It is called right away with the current value
    /// and then after every [`set`](Self::set).
    pub fn subscribe<F>(&mut self, mut observer: F) -> SubscriptionId
    where
        F: FnMut(&CurrencySettings) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        observer(&self.current);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// `false` when settings will be lost on exit.
    #[must_use]
    pub fn is_durable(&self) -> bool {
        self.storage.is_durable()
    }

    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.current) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!("failed to serialize currency settings: {err}");
                return;
            }
        };
        match self.storage.write(STORAGE_KEY, &payload) {
            Ok(()) => tracing::debug!("persisted currency settings ({})", self.current.code),
            Err(err) => tracing::warn!("failed to persist currency settings: {err}"),
        }
    }
}

impl std::fmt::Debug for CurrencyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyStore")
            .field("current", &self.current)
            .field("durable", &self.storage.is_durable())
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn load(storage: &dyn KeyValueStorage) -> CurrencySettings {
    let raw = match storage.read(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("no stored currency settings, using default");
            return CurrencySettings::default();
        }
        Err(err) => {
            tracing::warn!("failed to read stored currency settings: {err}");
            return CurrencySettings::default();
        }
    };

    let parsed = serde_json::from_str::<CurrencySettings>(&raw)
        .map_err(CurrencyError::from)
        .and_then(|settings| settings.validate().map(|()| settings));
    match parsed {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("failed to parse stored currency settings: {err}");
            CurrencySettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    use super::*;
    use crate::{SymbolPosition, storage::NoopStorage};

    /// Shared in-process map, so a second store can see what the first wrote.
    #[derive(Clone, Default)]
    struct MemoryStorage {
        entries: Rc<RefCell<HashMap<String, String>>>,
        writes: Rc<RefCell<Vec<String>>>,
        fail_writes: bool,
    }

    impl KeyValueStorage for MemoryStorage {
        fn read(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn write(&mut self, key: &str, value: &str) -> Result<()> {
            if self.fail_writes {
                return Err(std::io::Error::other("disk full").into());
            }
            self.writes.borrow_mut().push(value.to_string());
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn is_durable(&self) -> bool {
            true
        }
    }

    fn sek() -> CurrencySettings {
        CurrencySettings::new("SEK", "kr", SymbolPosition::After, "sv-SE")
    }

    #[test]
    fn starts_with_default_when_empty() {
        let store = CurrencyStore::initialize(Box::new(MemoryStorage::default()));
        assert_eq!(store.get(), &CurrencySettings::default());
    }

    #[test]
    fn corrupt_or_invalid_record_yields_default() {
        for raw in ["{oops", r#"{"code":"","symbol":"$","position":"before","locale":"en-US"}"#] {
            let storage = MemoryStorage::default();
            storage
                .entries
                .borrow_mut()
                .insert(STORAGE_KEY.to_string(), raw.to_string());
            let store = CurrencyStore::initialize(Box::new(storage));
            assert_eq!(store.get(), &CurrencySettings::default());
        }
    }

    #[test]
    fn set_survives_restart() {
        let storage = MemoryStorage::default();
        let mut store = CurrencyStore::initialize(Box::new(storage.clone()));
        store.set(sek()).unwrap();

        let restarted = CurrencyStore::initialize(Box::new(storage));
        assert_eq!(restarted.get(), &sek());
    }

    #[test]
    fn initialize_does_not_write() {
        let storage = MemoryStorage::default();
        let _store = CurrencyStore::initialize(Box::new(storage.clone()));
        assert!(storage.writes.borrow().is_empty());
    }

    #[test]
    fn writes_follow_set_order() {
        let storage = MemoryStorage::default();
        let mut store = CurrencyStore::initialize(Box::new(storage.clone()));
        store.set(sek()).unwrap();
        store.set(CurrencySettings::default()).unwrap();

        let codes: Vec<String> = storage
            .writes
            .borrow()
            .iter()
            .map(|raw| serde_json::from_str::<CurrencySettings>(raw).unwrap().code)
            .collect();
        assert_eq!(codes, vec!["SEK", "USD"]);
    }

    #[test]
    fn failed_write_keeps_new_value() {
        let storage = MemoryStorage {
            fail_writes: true,
            ..MemoryStorage::default()
        };
        let mut store = CurrencyStore::initialize(Box::new(storage));
        store.set(sek()).unwrap();
        assert_eq!(store.get(), &sek());
    }

    #[test]
    fn observers_see_current_value_then_updates_in_order() {
        let mut store = CurrencyStore::initialize(Box::new(NoopStorage));
        let log = Rc::new(RefCell::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            store.subscribe(move |settings| {
                log.borrow_mut().push(format!("{name}:{}", settings.code));
            });
        }
        log.borrow_mut().clear();

        store.set(sek()).unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["first:SEK", "second:SEK", "third:SEK"]
        );
    }

    #[test]
    fn subscribe_fires_immediately() {
        let mut store = CurrencyStore::initialize(Box::new(NoopStorage));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |settings| sink.borrow_mut().push(settings.clone()));
        assert_eq!(*seen.borrow(), vec![CurrencySettings::default()]);
    }

    #[test]
    fn unsubscribe_only_removes_one_observer() {
        let mut store = CurrencyStore::initialize(Box::new(NoopStorage));
        let hits = Rc::new(RefCell::new((0, 0)));

        let a = Rc::clone(&hits);
        let first = store.subscribe(move |_| a.borrow_mut().0 += 1);
        let b = Rc::clone(&hits);
        store.subscribe(move |_| b.borrow_mut().1 += 1);

        assert!(store.unsubscribe(first));
        assert!(!store.unsubscribe(first));
        store.set(sek()).unwrap();

        assert_eq!(*hits.borrow(), (1, 2));
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn select_uses_catalog() {
        let mut store = CurrencyStore::initialize(Box::new(NoopStorage));
        assert_eq!(store.select("eur").unwrap().symbol, "€");
        assert_eq!(
            store.select("XYZ").unwrap_err(),
            CurrencyError::UnknownCurrency("XYZ".to_string())
        );
        assert_eq!(store.get().code, "EUR");
    }

    #[test]
    fn custom_lowercase_code_survives_restart() {
        let storage = MemoryStorage::default();
        let custom = CurrencySettings::new("usd", "$", SymbolPosition::Before, "en-US");
        let mut store = CurrencyStore::initialize(Box::new(storage.clone()));
        store.set(custom.clone()).unwrap();

        let restarted = CurrencyStore::initialize(Box::new(storage));
        assert_eq!(restarted.get(), &custom);
    }

    #[test]
    fn set_rejects_empty_fields_without_side_effects() {
        let storage = MemoryStorage::default();
        let mut store = CurrencyStore::initialize(Box::new(storage.clone()));
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        let empty = CurrencySettings::new("", "", SymbolPosition::After, "");
        assert!(matches!(
            store.set(empty),
            Err(CurrencyError::InvalidSettings(_))
        ));

        assert_eq!(store.get(), &CurrencySettings::default());
        assert_eq!(*seen.borrow(), 1);
        assert!(storage.writes.borrow().is_empty());
    }
}
