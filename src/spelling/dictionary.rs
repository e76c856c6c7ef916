//! Ordered candidate dictionary.
//!
//! Each entry maps a word to its frequency rank and its phonetic code.
//! Iteration order is insertion order; the ranker relies on it to break ties
//! between equally probable corrections.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::error::{Result, SpellRankError};
use crate::spelling::phonetic::refined_soundex;

/// Metadata stored for each dictionary word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Position in the frequency table (0 = most frequent).
    pub rank: usize,
    /// Phonetic code of the word.
    pub phonetic_code: String,
}

/// Dictionary of correction candidates, in a fixed iteration order.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<(String, DictionaryEntry)>,
    positions: AHashMap<String, usize>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            entries: Vec::new(),
            positions: AHashMap::new(),
        }
    }

    /// Build a dictionary from words listed most frequent first.
    ///
    /// A word's rank is its position in the list. Blank lines are skipped and
    /// repeated words keep their first rank.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        let mut rank = 0;
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || dictionary.contains(word) {
                continue;
            }
            let code = refined_soundex(word);
            dictionary.push(word.to_string(), rank, code);
            rank += 1;
        }
        dictionary
    }

    /// Load a dictionary from a text file with one word per line, most
    /// frequent first.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut words = Vec::new();
        for line in reader.lines() {
            words.push(line?);
        }

        let dictionary = Self::from_words(words);
        debug!(
            "loaded {} dictionary words from {}",
            dictionary.len(),
            path.as_ref().display()
        );
        Ok(dictionary)
    }

    /// Insert or replace a word.
    ///
    /// A replaced word keeps its iteration position.
    pub fn insert<W, C>(&mut self, word: W, rank: usize, phonetic_code: C) -> Result<()>
    where
        W: Into<String>,
        C: Into<String>,
    {
        let word = word.into();
        if word.is_empty() {
            return Err(SpellRankError::invalid_argument(
                "dictionary words must be non-empty",
            ));
        }

        let entry = DictionaryEntry {
            rank,
            phonetic_code: phonetic_code.into(),
        };
        match self.positions.get(&word) {
            Some(&position) => self.entries[position].1 = entry,
            None => self.push(word, entry.rank, entry.phonetic_code),
        }
        Ok(())
    }

    fn push(&mut self, word: String, rank: usize, phonetic_code: String) {
        self.positions.insert(word.clone(), self.entries.len());
        self.entries.push((word, DictionaryEntry { rank, phonetic_code }));
    }

    /// Whether the word is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// Metadata of a word.
    pub fn get(&self, word: &str) -> Option<&DictionaryEntry> {
        self.positions.get(word).map(|&i| &self.entries[i].1)
    }

    /// Entries in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DictionaryEntry)> {
        self.entries.iter().map(|(word, entry)| (word.as_str(), entry))
    }

    /// Entries as a slice, in iteration order.
    pub fn entries(&self) -> &[(String, DictionaryEntry)] {
        &self.entries
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_from_words_assigns_ranks_in_order() {
        let dictionary = Dictionary::from_words(["the", "of", "and", "of", ""]);

        assert_eq!(dictionary.len(), 3);
        let words: Vec<&str> = dictionary.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["the", "of", "and"]);
        assert_eq!(dictionary.get("and").unwrap().rank, 2);
        assert_eq!(dictionary.get("the").unwrap().phonetic_code, "t60");
        assert!(!dictionary.contains("missing"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut dictionary = Dictionary::from_words(["alpha", "beta"]);
        dictionary.insert("alpha", 7, "custom").unwrap();
        dictionary.insert("gamma", 2, "g0").unwrap();

        let words: Vec<&str> = dictionary.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
        assert_eq!(dictionary.get("alpha").unwrap().rank, 7);
        assert_eq!(dictionary.get("alpha").unwrap().phonetic_code, "custom");
    }

    #[test]
    fn test_insert_rejects_empty_word() {
        let mut dictionary = Dictionary::new();
        assert!(dictionary.insert("", 0, "").is_err());
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hello").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  world  ").unwrap();
        file.flush().unwrap();

        let dictionary = Dictionary::load_from_file(file.path()).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("world").unwrap().rank, 1);
    }
}
