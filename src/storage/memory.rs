use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::calls::{Call, CallLog, Op};
use crate::global;
use crate::storage::Storage;
use crate::value::StorageValue;

#[derive(Debug, Default)]
struct Inner {
    // Keys enumerate in BTreeMap order, which is what `key(index)` indexes into
    store: BTreeMap<String, String>,

    // Every contract call made against this store
    calls: CallLog,
}

/// In-memory stand-in for the browser key/value store.
///
/// Cloning is cheap and yields a handle to the *same* store and call log,
/// which is how a test keeps inspecting a double it has installed with
/// [`install_as_global`](Self::install_as_global). Use
/// [`new`](Self::new) for an isolated store.
///
/// Contract calls (`get_item`, `set_item`, `remove_item`, `clear`, `key`)
/// are recorded. `len` and the harness helpers below are not.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `entries`, without recording any calls.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let storage = Self::new();
        storage.set_store(entries);
        storage
    }

    /// Returns a copy of the whole store.
    pub fn get_store(&self) -> BTreeMap<String, String> {
        self.inner.borrow().store.clone()
    }

    /// Replaces the whole store with a copy of `data`.
    pub fn set_store<I, K, V>(&self, data: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store: BTreeMap<String, String> = data
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        log::debug!("Replacing store contents with {} entries", store.len());

        self.inner.borrow_mut().store = store;
    }

    /// Every recorded call, oldest first
    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.iter().cloned().collect()
    }

    /// Recorded calls of a single kind, oldest first
    pub fn calls_to(&self, op: Op) -> Vec<Call> {
        self.inner.borrow().calls.filter(op).cloned().collect()
    }

    pub fn call_count(&self, op: Op) -> usize {
        self.inner.borrow().calls.count(op)
    }

    /// Forgets every recorded call. Stored data is left alone.
    pub fn reset_recorded_invocations(&self) {
        self.inner.borrow_mut().calls.reset();
    }

    /// Clears stored data and recorded calls. This is the between-tests reset.
    pub fn reset_all(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.store.clear();
        inner.calls.reset();
    }

    /// Binds this store as the one application code sees through
    /// [`global::storage`], replacing any previous binding.
    pub fn install_as_global(&self) {
        if global::install(Rc::new(self.clone())).is_some() {
            log::debug!("Replaced previously installed storage");
        }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.record(Call::GetItem(key.to_owned()));
        inner.store.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: StorageValue) {
        let value = value.into_string();
        let mut inner = self.inner.borrow_mut();
        inner
            .calls
            .record(Call::SetItem(key.to_owned(), value.clone()));
        inner.store.insert(key.to_owned(), value);
    }

    fn remove_item(&self, key: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.record(Call::RemoveItem(key.to_owned()));
        inner.store.remove(key);
    }

    fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.record(Call::Clear);
        inner.store.clear();
    }

    fn key(&self, index: usize) -> Option<String> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.record(Call::Key(index));
        inner.store.keys().nth(index).cloned()
    }

    fn len(&self) -> usize {
        self.inner.borrow().store.len()
    }
}
