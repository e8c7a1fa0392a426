//! Process-local key/value store.

use std::collections::HashMap;
use std::sync::RwLock;

use invoice_core::error::{InvoiceError, Result};
use invoice_core::storage::KeyValueStore;

/// A [`KeyValueStore`] that lives only as long as the process.
///
/// Used by embedders that do not need durability, and in tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned(key: &str) -> InvoiceError {
        InvoiceError::storage_unavailable(key, "in-memory store lock poisoned")
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(|_| Self::poisoned(key))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| Self::poisoned(key))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| Self::poisoned(key))?;
        values.remove(key);
        Ok(())
    }
}
