//! Flagged words and their ranked corrections.

use serde::{Deserialize, Serialize};

/// A flagged word and where it sits in the text buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    /// The word text.
    pub value: String,
    /// Start offset in the buffer.
    pub start: usize,
    /// End offset in the buffer (exclusive).
    pub end: usize,
}

impl Word {
    /// Create a new word record.
    pub fn new<S: Into<String>>(value: S, start: usize, end: usize) -> Self {
        Word {
            value: value.into(),
            start,
            end,
        }
    }
}

/// A candidate correction and the classifier's probability for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// Probability that the candidate is the intended word.
    pub probability: f64,
    /// The dictionary word.
    pub candidate: String,
}

/// Ranked corrections for one flagged word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionEntry {
    /// The word the corrections are for.
    pub word: Word,
    /// Corrections, most probable first; ties keep dictionary order.
    pub corrections: Vec<Correction>,
}

impl CorrectionEntry {
    /// Whether any correction was found.
    pub fn has_corrections(&self) -> bool {
        !self.corrections.is_empty()
    }

    /// The most probable correction.
    pub fn best(&self) -> Option<&Correction> {
        self.corrections.first()
    }

    /// At most `limit` candidate words, most probable first.
    pub fn top(&self, limit: usize) -> Vec<&str> {
        self.corrections
            .iter()
            .take(limit)
            .map(|c| c.candidate.as_str())
            .collect()
    }
}
