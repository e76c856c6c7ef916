//! Common types for classification.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Per-class multipliers applied to a class's probability before comparison.
///
/// Classes without an entry are weighted by `1.0`.
pub type Assumptions = HashMap<String, f64>;

/// Outcome of a classification: the winning probability and class label.
///
/// `class` is `None` when no registered class scored above zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction<'a> {
    /// Probability of the winning class (after assumption weighting).
    pub probability: f64,
    /// Label of the winning class.
    pub class: Option<&'a str>,
}

impl<'a> Prediction<'a> {
    /// The "nothing matched" sentinel, `(0, None)`.
    pub fn none() -> Self {
        Prediction {
            probability: 0.0,
            class: None,
        }
    }

    /// Whether the prediction names the given class.
    pub fn is(&self, class: &str) -> bool {
        self.class == Some(class)
    }
}

/// One labelled training sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Class label.
    pub class: String,
    /// Features observed in the sample.
    pub features: Vec<String>,
}

/// Load training samples from a JSON array of `{"class", "features"}` objects.
pub fn load_training_data<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingSample>> {
    let content = std::fs::read_to_string(path)?;
    let samples: Vec<TrainingSample> = serde_json::from_str(&content)?;
    Ok(samples)
}

/// Group samples by class, in order of first appearance.
pub fn group_samples(samples: Vec<TrainingSample>) -> Vec<(String, Vec<Vec<String>>)> {
    group_by_class(samples, |sample| (sample.class, sample.features))
}

/// Group rows into ordered `(class, samples)` pairs using `split`.
///
/// Classes appear in order of first occurrence, and samples keep their row
/// order within a class.
pub fn group_by_class<I, F>(rows: I, split: F) -> Vec<(String, Vec<Vec<String>>)>
where
    I: IntoIterator,
    F: Fn(I::Item) -> (String, Vec<String>),
{
    let mut grouped: Vec<(String, Vec<Vec<String>>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let (class, features) = split(row);
        match positions.get(&class) {
            Some(&index) => grouped[index].1.push(features),
            None => {
                positions.insert(class.clone(), grouped.len());
                grouped.push((class, vec![features]));
            }
        }
    }

    grouped
}

/// Default row splitter: the first element is the class, the rest are features.
///
/// An empty row yields an empty class label with no features.
pub fn split_first(row: Vec<String>) -> (String, Vec<String>) {
    let mut items = row.into_iter();
    let class = items.next().unwrap_or_default();
    (class, items.collect())
}
