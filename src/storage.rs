//! Persistence of trained classifiers.
//!
//! Classifiers are stored as [`ClassifierRecord`]s under a string key. File
//! and memory backends implement the same [`ClassifierStore`] trait so a
//! session can be wired to either.
//!
//! # Example
//!
//! ```
//! use spellrank::classifier::Classifier;
//! use spellrank::storage::{ClassifierStore, DEFAULT_CLASSIFIER_KEY};
//! use spellrank::storage::memory::MemoryClassifierStore;
//!
//! # fn main() -> spellrank::error::Result<()> {
//! let store = MemoryClassifierStore::new();
//! let mut classifier = Classifier::new();
//! classifier.train(&[("correct", vec![vec!["similar"]])]);
//!
//! classifier.save_to(&store, DEFAULT_CLASSIFIER_KEY)?;
//! let restored = Classifier::load_from(&store, DEFAULT_CLASSIFIER_KEY)?;
//! assert_eq!(restored, classifier);
//! # Ok(())
//! # }
//! ```

use crate::classifier::ClassifierRecord;
use crate::error::{Result, SpellRankError};

pub mod file;
pub mod memory;

/// Key of the current classifier revision.
pub const DEFAULT_CLASSIFIER_KEY: &str = "classifier-1";

/// A backend that can load and save classifier records.
pub trait ClassifierStore: Send + Sync + std::fmt::Debug {
    /// Load the record stored under `key`.
    fn load(&self, key: &str) -> Result<ClassifierRecord>;

    /// Store `record` under `key`, replacing any previous record.
    fn save(&self, key: &str, record: &ClassifierRecord) -> Result<()>;

    /// Check if a record exists.
    fn exists(&self, key: &str) -> bool;

    /// Delete a record. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;

    /// List stored keys, sorted.
    fn keys(&self) -> Result<Vec<String>>;
}

/// Keys are used as file names, so they are restricted to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(SpellRankError::storage(format!(
            "invalid classifier key '{key}'"
        )))
    }
}
