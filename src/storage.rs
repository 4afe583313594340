use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::value::StorageValue;

mod memory;

pub use memory::MemoryStorage;

/// The browser key/value store contract.
///
/// Application code is written against `dyn Storage` and obtains the
/// instance from [`global::storage`](crate::global::storage).
pub trait Storage {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores the string form of `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: StorageValue);

    /// Removes `key`. Removing a missing key is a no-op.
    fn remove_item(&self, key: &str);

    fn clear(&self);

    /// Returns the name of the key at `index`, or `None` if out of range.
    fn key(&self, index: usize) -> Option<String>;

    /// Number of keys currently stored
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// JSON helpers layered on top of the raw string contract.
///
/// Everything here goes through [`Storage::get_item`] and
/// [`Storage::set_item`], so there is only ever one representation in the
/// store: JSON text.
pub trait StorageExt: Storage {
    /// Writes every entry as JSON text via `set_item`.
    fn populate<I, K>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        for (key, value) in entries {
            self.set_item(key.as_ref(), value.to_string().into());
        }
    }

    /// Reads `key` and parses it as JSON.
    ///
    /// Text that is not valid JSON is returned as `Value::String` unchanged.
    fn read_parsed(&self, key: &str) -> Option<Value> {
        let raw = self.get_item(key)?;

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("Value for {} is not JSON ({}), returning raw text", key, e);
                Some(Value::String(raw))
            }
        }
    }

    /// Reads `key` and deserializes it into `T`.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_item(key) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serializes `value` to JSON and stores it under `key`.
    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let buf = serde_json::to_string(value)?;
        self.set_item(key, buf.into());
        Ok(())
    }
}

impl<S: Storage + ?Sized> StorageExt for S {}
