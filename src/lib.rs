//! # spellrank
//!
//! Ranks dictionary words as likely corrections for a misspelled word with a
//! naive Bayesian classifier.
//!
//! ## Features
//!
//! - Unsmoothed categorical naive Bayes with ordered, accumulative training
//! - Phonetic, edit distance and first-letter similarity features
//! - Frequency-weighted ranking of every dictionary candidate
//! - Cyclic navigation over flagged words with per-word result caching
//! - JSON persistence of trained classifiers

pub mod classifier;
pub mod cli;
pub mod error;
pub mod spelling;
pub mod storage;

pub mod prelude {
    pub use crate::classifier::{Classifier, Prediction};
    pub use crate::error::{Result, SpellRankError};
    pub use crate::spelling::{
        CorrectionEntry, CorrectionRanker, CorrectionSession, CorrectorConfig, Dictionary,
        FrequencyModel, Word, ZipfFrequency,
    };
    pub use crate::storage::ClassifierStore;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
