//! Configuration for correction ranking.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellRankError};
use crate::spelling::features::DEFAULT_SIMILARITY_THRESHOLD;

/// Configuration for the correction ranker and session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Classifier outcome meaning "candidate is a plausible correction".
    pub correct_label: String,
    /// Classifier outcome meaning "candidate is not a correction".
    pub incorrect_label: String,
    /// Edit distance below which a candidate is tagged `similar`.
    pub similarity_threshold: usize,
    /// Number of corrections a front end should display per word.
    pub max_displayed: usize,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            correct_label: "correct".to_string(),
            incorrect_label: "incorrect".to_string(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            max_displayed: 10,
        }
    }
}

impl CorrectorConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CorrectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.correct_label.is_empty() || self.incorrect_label.is_empty() {
            return Err(SpellRankError::invalid_config(
                "class labels must be non-empty",
            ));
        }
        if self.correct_label == self.incorrect_label {
            return Err(SpellRankError::invalid_config(format!(
                "correct and incorrect labels must differ, both are '{}'",
                self.correct_label
            )));
        }
        Ok(())
    }
}
