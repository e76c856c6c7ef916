//! Correction session: cyclic navigation over flagged words with cached
//! rankings.
//!
//! A front end hands the session the words currently flagged in its text
//! (via [`CorrectionSession::update`]) and then steps through them with
//! [`CorrectionSession::next`] and [`CorrectionSession::prev`]. Each step
//! returns the word and its ranked corrections. Rankings are memoized by word
//! text for the lifetime of the session, so revisiting a word, even after the
//! text was edited and the list rebuilt, never rescans the dictionary.

use log::debug;

use crate::classifier::Classifier;
use crate::error::{Result, SpellRankError};
use crate::spelling::cache::{CacheStats, CorrectionCache};
use crate::spelling::config::CorrectorConfig;
use crate::spelling::cyclic::CyclicList;
use crate::spelling::dictionary::Dictionary;
use crate::spelling::frequency::FrequencyModel;
use crate::spelling::ranker::CorrectionRanker;
use crate::spelling::types::{CorrectionEntry, Word};

/// Session orchestrator owning the classifier, the flagged words and the
/// correction cache.
pub struct CorrectionSession<F> {
    classifier: Classifier,
    dictionary: Dictionary,
    frequency: F,
    ranker: CorrectionRanker,
    config: CorrectorConfig,
    words: CyclicList<Word>,
    cache: CorrectionCache,
}

impl<F: FrequencyModel> CorrectionSession<F> {
    /// Create a session with the default configuration and no flagged words.
    pub fn new(classifier: Classifier, dictionary: Dictionary, frequency: F) -> Self {
        let config = CorrectorConfig::default();
        CorrectionSession {
            classifier,
            dictionary,
            frequency,
            ranker: CorrectionRanker::from_config(&config),
            config,
            words: CyclicList::default(),
            cache: CorrectionCache::new(),
        }
    }

    /// Create a session with a custom configuration.
    pub fn with_config(
        classifier: Classifier,
        dictionary: Dictionary,
        frequency: F,
        config: CorrectorConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(CorrectionSession {
            classifier,
            dictionary,
            frequency,
            ranker: CorrectionRanker::from_config(&config),
            config,
            words: CyclicList::default(),
            cache: CorrectionCache::new(),
        })
    }

    /// Replace the flagged words and unset the position.
    ///
    /// Cached rankings are kept.
    pub fn update(&mut self, words: Vec<Word>) {
        debug!(
            "correction session updated with {} flagged words ({} cached rankings)",
            words.len(),
            self.cache.len()
        );
        self.words = CyclicList::new(words);
    }

    /// Move to the next flagged word and return its corrections.
    ///
    /// Starts at the first word after an update and wraps around at the end.
    pub fn next(&mut self) -> Result<&CorrectionEntry> {
        let word = self
            .words
            .advance()
            .cloned()
            .ok_or(SpellRankError::EmptyNavigator)?;
        self.visit(word)
    }

    /// Move to the previous flagged word and return its corrections.
    ///
    /// Starts at the last word after an update and wraps around at the start.
    pub fn prev(&mut self) -> Result<&CorrectionEntry> {
        let word = self
            .words
            .retreat()
            .cloned()
            .ok_or(SpellRankError::EmptyNavigator)?;
        self.visit(word)
    }

    fn visit(&mut self, word: Word) -> Result<&CorrectionEntry> {
        self.cache.get_or_try_insert_with(word, |word| {
            self.ranker
                .rank(word, &self.classifier, &self.dictionary, &self.frequency)
        })
    }

    /// Whether there are no flagged words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The flagged word under the cursor.
    pub fn current(&self) -> Option<&Word> {
        self.words.current()
    }

    /// Flagged words in navigation order.
    pub fn words(&self) -> &[Word] {
        self.words.items()
    }

    /// Cached ranking for a word text, if it was visited.
    pub fn cached(&self, word: &str) -> Option<&CorrectionEntry> {
        self.cache.get(word)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Forget every cached ranking.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn classifier() -> Classifier {
        let mut classifier = Classifier::new();
        classifier.train(&[
            (
                "correct",
                vec![
                    vec!["sounds_similar", "similar", "starts_same"],
                    vec!["sounds_dissimilar", "similar", "starts_same"],
                    vec!["sounds_similar", "similar", "different_start"],
                ],
            ),
            (
                "incorrect",
                vec![
                    vec!["sounds_dissimilar", "dissimilar", "different_start"],
                    vec!["sounds_dissimilar", "dissimilar", "starts_same"],
                    vec!["sounds_similar", "dissimilar", "different_start"],
                ],
            ),
        ]);
        classifier
    }

    /// A frequency model that counts how often it is consulted.
    fn counting() -> (Rc<Cell<usize>>, impl Fn(usize) -> Result<f64>) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let model = move |_rank: usize| -> Result<f64> {
            counter.set(counter.get() + 1);
            Ok(0.2)
        };
        (calls, model)
    }

    fn session() -> (Rc<Cell<usize>>, CorrectionSession<impl Fn(usize) -> Result<f64>>) {
        let dictionary = Dictionary::from_words(["hello", "world", "help", "cat"]);
        let (calls, frequency) = counting();
        (calls, CorrectionSession::new(classifier(), dictionary, frequency))
    }

    #[test]
    fn test_empty_session_errors() {
        let (_, mut session) = session();
        assert!(session.is_empty());
        assert!(matches!(session.next(), Err(SpellRankError::EmptyNavigator)));
        assert!(matches!(session.prev(), Err(SpellRankError::EmptyNavigator)));
    }

    #[test]
    fn test_next_and_prev_start_at_ends() {
        let (_, mut session) = session();
        session.update(vec![
            Word::new("helo", 0, 4),
            Word::new("wrld", 5, 9),
            Word::new("cta", 10, 13),
        ]);

        assert_eq!(session.next().unwrap().word.value, "helo");
        session.update(session.words().to_vec());
        assert_eq!(session.prev().unwrap().word.value, "cta");
    }

    #[test]
    fn test_single_word_is_ranked_once() {
        let (calls, mut session) = session();
        session.update(vec![Word::new("helo", 0, 4)]);

        let first = session.next().unwrap().clone();
        let scans = calls.get();
        assert_eq!(scans, 4);

        let second = session.next().unwrap().clone();
        let third = session.prev().unwrap().clone();
        assert_eq!(calls.get(), scans);
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(session.cache_stats(), CacheStats { hits: 2, misses: 1 });
    }

    #[test]
    fn test_offsets_refresh_after_update() {
        let (calls, mut session) = session();
        session.update(vec![Word::new("helo", 0, 4)]);
        let corrections = session.next().unwrap().corrections.clone();
        let scans = calls.get();

        // The text was edited: the same word now sits further right.
        session.update(vec![Word::new("wrld", 0, 4), Word::new("helo", 12, 16)]);
        session.next().unwrap();
        let entry = session.next().unwrap();

        assert_eq!(entry.word, Word::new("helo", 12, 16));
        assert_eq!(entry.corrections, corrections);
        // Only "wrld" needed a new scan.
        assert_eq!(calls.get(), scans * 2);
    }

    #[test]
    fn test_update_keeps_cache() {
        let (_, mut session) = session();
        session.update(vec![Word::new("helo", 0, 4)]);
        session.next().unwrap();

        session.update(Vec::new());
        assert!(session.is_empty());
        assert!(session.current().is_none());
        assert!(session.cached("helo").is_some());

        session.clear_cache();
        assert!(session.cached("helo").is_none());
    }

    #[test]
    fn test_failed_ranking_is_not_cached() {
        let failing = |_rank: usize| -> Result<f64> { Err(SpellRankError::storage("offline")) };
        let dictionary = Dictionary::from_words(["hello"]);
        let mut session = CorrectionSession::new(classifier(), dictionary, failing);
        session.update(vec![Word::new("helo", 0, 4)]);

        assert!(session.next().is_err());
        assert!(session.cached("helo").is_none());
        assert_eq!(session.cache_stats(), CacheStats::default());
    }

    #[test]
    fn test_with_config_validates() {
        let config = CorrectorConfig {
            correct_label: String::new(),
            ..Default::default()
        };
        let (_, frequency) = counting();
        let result = CorrectionSession::with_config(
            classifier(),
            Dictionary::new(),
            frequency,
            config,
        );
        assert!(result.is_err());
    }
}
