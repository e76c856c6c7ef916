//! Spelling correction ranking for spellrank.
//!
//! This module turns a trained [`Classifier`](crate::classifier::Classifier)
//! into a correction engine: it extracts similarity features between a
//! flagged word and dictionary candidates, ranks the candidates, and lets a
//! front end cycle through a session's flagged words with cached results.

pub mod cache;
pub mod config;
pub mod corrector;
pub mod cyclic;
pub mod dictionary;
pub mod features;
pub mod frequency;
pub mod levenshtein;
pub mod phonetic;
pub mod ranker;
pub mod types;

// Re-export commonly used types
pub use cache::{CacheStats, CorrectionCache};
pub use config::CorrectorConfig;
pub use corrector::CorrectionSession;
pub use cyclic::CyclicList;
pub use dictionary::{Dictionary, DictionaryEntry};
pub use features::{FeatureExtractor, Property, properties_of};
pub use frequency::{FrequencyModel, ZipfFrequency};
pub use levenshtein::{levenshtein_distance, levenshtein_distance_threshold};
pub use phonetic::refined_soundex;
pub use ranker::CorrectionRanker;
pub use types::{Correction, CorrectionEntry, Word};
