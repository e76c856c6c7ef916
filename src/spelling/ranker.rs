//! Classifier-driven ranking of correction candidates.
//!
//! For a flagged word the ranker scans the whole dictionary. Every candidate is
//! turned into similarity features, weighted by how common the candidate is,
//! and classified; candidates classified as correct are kept and sorted by
//! probability.

use log::{debug, warn};
use rayon::prelude::*;

use crate::classifier::{Assumptions, Classifier};
use crate::error::{Result, SpellRankError};
use crate::spelling::config::CorrectorConfig;
use crate::spelling::dictionary::{Dictionary, DictionaryEntry};
use crate::spelling::features::FeatureExtractor;
use crate::spelling::frequency::FrequencyModel;
use crate::spelling::phonetic::refined_soundex;
use crate::spelling::types::{Correction, CorrectionEntry, Word};

/// Ranks dictionary candidates as corrections for a flagged word.
#[derive(Debug, Clone)]
pub struct CorrectionRanker {
    extractor: FeatureExtractor,
    correct_label: String,
    incorrect_label: String,
}

impl CorrectionRanker {
    /// Create a ranker using the default configuration.
    pub fn new() -> Self {
        Self::from_config(&CorrectorConfig::default())
    }

    /// Create a ranker from a configuration.
    pub fn from_config(config: &CorrectorConfig) -> Self {
        CorrectionRanker {
            extractor: FeatureExtractor::with_threshold(config.similarity_threshold),
            correct_label: config.correct_label.clone(),
            incorrect_label: config.incorrect_label.clone(),
        }
    }

    /// Rank every dictionary word as a correction for `word`.
    ///
    /// A candidate of rank `r` is classified with the assumptions
    /// `{correct: 1 - w, incorrect: w}` where `w = frequency.frequency_of(r)`.
    /// Only candidates predicted as correct are returned, sorted by descending
    /// probability with ties kept in dictionary order.
    pub fn rank<F>(
        &self,
        word: &Word,
        classifier: &Classifier,
        dictionary: &Dictionary,
        frequency: &F,
    ) -> Result<CorrectionEntry>
    where
        F: FrequencyModel + ?Sized,
    {
        check_word(word)?;
        let word_code = refined_soundex(&word.value);
        let mut assumptions = self.assumptions();

        let mut corrections = Vec::new();
        for (candidate, entry) in dictionary.iter() {
            if let Some(correction) = self.score_candidate(
                &word.value,
                &word_code,
                candidate,
                entry,
                classifier,
                frequency,
                &mut assumptions,
            )? {
                corrections.push(correction);
            }
        }

        Ok(self.finish(word, dictionary, corrections))
    }

    /// Same result as [`CorrectionRanker::rank`], scanning the dictionary on
    /// the rayon thread pool.
    pub fn rank_parallel<F>(
        &self,
        word: &Word,
        classifier: &Classifier,
        dictionary: &Dictionary,
        frequency: &F,
    ) -> Result<CorrectionEntry>
    where
        F: FrequencyModel + Sync + ?Sized,
    {
        check_word(word)?;
        let word_code = refined_soundex(&word.value);

        let scored: Vec<Option<Correction>> = dictionary
            .entries()
            .par_iter()
            .map_init(
                || self.assumptions(),
                |assumptions, (candidate, entry)| {
                    self.score_candidate(
                        &word.value,
                        &word_code,
                        candidate,
                        entry,
                        classifier,
                        frequency,
                        assumptions,
                    )
                },
            )
            .collect::<Result<_>>()?;

        let corrections = scored.into_iter().flatten().collect();
        Ok(self.finish(word, dictionary, corrections))
    }

    fn assumptions(&self) -> Assumptions {
        Assumptions::from([
            (self.correct_label.clone(), 1.0),
            (self.incorrect_label.clone(), 1.0),
        ])
    }

    #[allow(clippy::too_many_arguments)]
    fn score_candidate<F>(
        &self,
        word: &str,
        word_code: &str,
        candidate: &str,
        entry: &DictionaryEntry,
        classifier: &Classifier,
        frequency: &F,
        assumptions: &mut Assumptions,
    ) -> Result<Option<Correction>>
    where
        F: FrequencyModel + ?Sized,
    {
        let properties =
            self.extractor
                .properties_of(word, word_code, candidate, &entry.phonetic_code)?;

        let weight = frequency.frequency_of(entry.rank)?;
        if !(0.0..=1.0).contains(&weight) {
            warn!(
                "frequency weight {weight} for '{candidate}' (rank {}) is outside [0, 1]",
                entry.rank
            );
        }
        for (label, value) in [
            (&self.correct_label, 1.0 - weight),
            (&self.incorrect_label, weight),
        ] {
            if let Some(slot) = assumptions.get_mut(label.as_str()) {
                *slot = value;
            }
        }

        let prediction = classifier.classify_with(&properties, assumptions);
        Ok(prediction
            .is(&self.correct_label)
            .then(|| Correction {
                probability: prediction.probability,
                candidate: candidate.to_string(),
            }))
    }

    fn finish(
        &self,
        word: &Word,
        dictionary: &Dictionary,
        mut corrections: Vec<Correction>,
    ) -> CorrectionEntry {
        // Stable: equal probabilities keep dictionary order.
        corrections.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        debug!(
            "ranked '{}' against {} dictionary words: {} corrections",
            word.value,
            dictionary.len(),
            corrections.len()
        );

        CorrectionEntry {
            word: word.clone(),
            corrections,
        }
    }
}

impl Default for CorrectionRanker {
    fn default() -> Self {
        Self::new()
    }
}

fn check_word(word: &Word) -> Result<()> {
    if word.value.is_empty() {
        return Err(SpellRankError::invalid_argument(
            "cannot rank corrections for an empty word",
        ));
    }
    Ok(())
}
