use std::{collections::BTreeMap, sync::Mutex};

use super::kv::{KvError, KvStore};

/// Volatile store for tests and `--dry-run` invocations.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `keys` that exist in `source` into a new store.
    pub fn snapshot<K: AsRef<[u8]>>(
        source: &dyn KvStore,
        keys: impl IntoIterator<Item = K>,
    ) -> Result<Self, KvError> {
        let store = Self::new();
        for key in keys {
            if let Some(value) = source.get(key.as_ref())? {
                store.put(key.as_ref(), &value)?;
            }
        }
        Ok(store)
    }

    fn with_entries<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<Vec<u8>, Vec<u8>>) -> T,
    ) -> Result<T, KvError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| KvError::Storage("memory store lock poisoned".to_string()))?;
        Ok(f(&mut guard))
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KvError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), KvError> {
        self.with_entries(|entries| {
            entries.insert(key.to_vec(), value.to_vec());
        })
    }

    fn delete(&self, key: &[u8]) -> Result<(), KvError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }

    fn flush(&self) -> Result<(), KvError> {
        Ok(())
    }
}
