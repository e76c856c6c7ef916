//! Categorical similarity features between a word and a dictionary candidate.
//!
//! Every (word, candidate) pair yields three tags: whether they sound alike,
//! whether they are within a small edit distance, and whether they start with
//! the same character. The tags are the feature keys the correction
//! classifier is trained on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellRankError};
use crate::spelling::levenshtein::is_within_distance;
use crate::spelling::phonetic::refined_soundex;

/// Default edit distance below which two words count as `similar`.
pub const DEFAULT_SIMILARITY_THRESHOLD: usize = 3;

/// A similarity tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Phonetic codes are equal.
    SoundsSimilar,
    /// Phonetic codes differ.
    SoundsDissimilar,
    /// Edit distance is below the similarity threshold.
    Similar,
    /// Edit distance is at or above the similarity threshold.
    Dissimilar,
    /// First characters are equal (case-sensitive).
    StartsSame,
    /// First characters differ.
    DifferentStart,
}

impl Property {
    /// The feature key used by the classifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::SoundsSimilar => "sounds_similar",
            Property::SoundsDissimilar => "sounds_dissimilar",
            Property::Similar => "similar",
            Property::Dissimilar => "dissimilar",
            Property::StartsSame => "starts_same",
            Property::DifferentStart => "different_start",
        }
    }
}

impl AsRef<str> for Property {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives [`Property`] tags for (word, candidate) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureExtractor {
    similarity_threshold: usize,
}

impl FeatureExtractor {
    /// Create an extractor with the default similarity threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SIMILARITY_THRESHOLD)
    }

    /// Create an extractor where `similar` means edit distance < `similarity_threshold`.
    pub fn with_threshold(similarity_threshold: usize) -> Self {
        FeatureExtractor {
            similarity_threshold,
        }
    }

    /// Tags for a pair whose phonetic codes are already known.
    ///
    /// Both words must be non-empty.
    pub fn properties_of(
        &self,
        word: &str,
        word_code: &str,
        candidate: &str,
        candidate_code: &str,
    ) -> Result<[Property; 3]> {
        let (Some(word_start), Some(candidate_start)) =
            (word.chars().next(), candidate.chars().next())
        else {
            return Err(SpellRankError::invalid_argument(format!(
                "cannot compare '{word}' with '{candidate}': both words must be non-empty"
            )));
        };

        // An empty code means the word has no letters to compare.
        let sound = if !word_code.is_empty() && word_code == candidate_code {
            Property::SoundsSimilar
        } else {
            Property::SoundsDissimilar
        };
        let distance = if is_within_distance(word, candidate, self.similarity_threshold) {
            Property::Similar
        } else {
            Property::Dissimilar
        };
        let start = if word_start == candidate_start {
            Property::StartsSame
        } else {
            Property::DifferentStart
        };

        Ok([sound, distance, start])
    }

    /// Tags for a pair, computing both phonetic codes.
    pub fn extract(&self, word: &str, candidate: &str) -> Result<[Property; 3]> {
        self.properties_of(
            word,
            &refined_soundex(word),
            candidate,
            &refined_soundex(candidate),
        )
    }

    /// Edit distance threshold in use.
    pub fn similarity_threshold(&self) -> usize {
        self.similarity_threshold
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Tags for a pair using the default extractor.
pub fn properties_of(word: &str, candidate: &str) -> Result<[Property; 3]> {
    FeatureExtractor::new().extract(word, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_candidate() {
        let tags = properties_of("helo", "hello").unwrap();
        assert_eq!(
            tags,
            [Property::SoundsSimilar, Property::Similar, Property::StartsSame]
        );
    }

    #[test]
    fn test_distant_candidate() {
        let tags = properties_of("helo", "world").unwrap();
        assert_eq!(
            tags,
            [
                Property::SoundsDissimilar,
                Property::Dissimilar,
                Property::DifferentStart
            ]
        );
    }

    #[test]
    fn test_distance_boundary() {
        // kitten -> sitting is exactly 3 edits: not below the threshold.
        let tags = properties_of("kitten", "sitting").unwrap();
        assert_eq!(tags[1], Property::Dissimilar);

        let tags = properties_of("kitten", "sittin").unwrap();
        assert_eq!(tags[1], Property::Similar);
    }

    #[test]
    fn test_start_is_case_sensitive() {
        let tags = properties_of("Hello", "hello").unwrap();
        assert_eq!(tags[2], Property::DifferentStart);
        // Phonetic codes ignore case.
        assert_eq!(tags[0], Property::SoundsSimilar);
    }

    #[test]
    fn test_precomputed_codes_are_used() {
        let extractor = FeatureExtractor::new();
        let tags = extractor.properties_of("cat", "x1", "cot", "x1").unwrap();
        assert_eq!(tags[0], Property::SoundsSimilar);
        let tags = extractor.properties_of("cat", "x1", "cat", "x2").unwrap();
        assert_eq!(tags[0], Property::SoundsDissimilar);
    }

    #[test]
    fn test_accented_pair_sounds_similar() {
        let tags = properties_of("café", "cafe").unwrap();
        assert_eq!(
            tags,
            [Property::SoundsSimilar, Property::Similar, Property::StartsSame]
        );
    }

    #[test]
    fn test_cyrillic_pair_is_compared_by_sound() {
        let tags = properties_of("мир", "дом").unwrap();
        assert_eq!(tags[0], Property::SoundsDissimilar);

        let tags = properties_of("мир", "мiр").unwrap();
        assert_eq!(tags[0], Property::SoundsSimilar);
    }

    #[test]
    fn test_words_without_letters_never_sound_similar() {
        let tags = properties_of("123", "456").unwrap();
        assert_eq!(tags[0], Property::SoundsDissimilar);

        let extractor = FeatureExtractor::new();
        let tags = extractor.properties_of("12", "", "34", "").unwrap();
        assert_eq!(tags[0], Property::SoundsDissimilar);
    }

    #[test]
    fn test_custom_threshold() {
        let extractor = FeatureExtractor::with_threshold(1);
        let tags = extractor.extract("helo", "hello").unwrap();
        assert_eq!(tags[1], Property::Dissimilar);
        let tags = extractor.extract("hello", "hello").unwrap();
        assert_eq!(tags[1], Property::Similar);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            properties_of("", "hello"),
            Err(SpellRankError::InvalidArgument(_))
        ));
        assert!(matches!(
            properties_of("hello", ""),
            Err(SpellRankError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(Property::SoundsSimilar.as_str(), "sounds_similar");
        assert_eq!(Property::DifferentStart.to_string(), "different_start");
        assert_eq!(
            serde_json::to_string(&Property::StartsSame).unwrap(),
            "\"starts_same\""
        );
    }
}
