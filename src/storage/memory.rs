//! In-memory classifier store for testing and short-lived sessions.

use std::collections::HashMap;

use log::debug;
use parking_lot::RwLock;

use crate::classifier::ClassifierRecord;
use crate::error::{Result, SpellRankError};
use crate::storage::{ClassifierStore, validate_key};

/// Keeps classifier records in a map.
#[derive(Debug, Default)]
pub struct MemoryClassifierStore {
    records: RwLock<HashMap<String, ClassifierRecord>>,
}

impl MemoryClassifierStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryClassifierStore {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl ClassifierStore for MemoryClassifierStore {
    fn load(&self, key: &str) -> Result<ClassifierRecord> {
        self.records
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| SpellRankError::not_found(key))
    }

    fn save(&self, key: &str, record: &ClassifierRecord) -> Result<()> {
        validate_key(key)?;
        debug!(
            "storing classifier '{key}' ({} classes) in memory",
            record.classes.len()
        );
        self.records.write().insert(key.to_string(), record.clone());
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.records.read().contains_key(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.records.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.records.read().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
