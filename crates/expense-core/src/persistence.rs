//! Load/save boundary between the ledger and a [`KeyValueStore`].

use expense_domain::Ledger;

use crate::{storage::KeyValueStore, CoreError};

/// Key the ledger is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "expenses";

/// Reads and writes the whole ledger under a single store key.
pub struct PersistenceBridge {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl PersistenceBridge {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn with_default_key(store: Box<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the raw serialized ledger, or `None` when nothing was saved yet.
    pub fn load(&self) -> Result<Option<String>, CoreError> {
        let value = self.store.get(&self.key)?;
        tracing::debug!(
            key = %self.key,
            present = value.is_some(),
            "loaded persisted ledger"
        );
        Ok(value)
    }

    /// Serializes the full ledger and overwrites the stored value.
    pub fn save(&self, ledger: &Ledger) -> Result<(), CoreError> {
        let payload = serialize_ledger(ledger)?;
        self.store.set(&self.key, &payload)?;
        tracing::debug!(key = %self.key, records = ledger.len(), "saved ledger");
        Ok(())
    }
}

/// Encodes the ledger as a JSON array of records.
pub fn serialize_ledger(ledger: &Ledger) -> Result<String, CoreError> {
    Ok(serde_json::to_string(ledger)?)
}

/// Decodes a JSON array of records into a ledger.
pub fn deserialize_ledger(data: &str) -> Result<Ledger, CoreError> {
    Ok(serde_json::from_str(data)?)
}
