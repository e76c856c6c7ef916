//! Per-class probability model.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Probability model of a single class.
///
/// Holds the class prior and, for every feature seen in the class's training
/// samples, the fraction of those samples that contain it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    class: String,
    class_probability: f64,
    property_probability: HashMap<String, f64>,
}

impl ClassModel {
    /// Create an untrained model with the given prior.
    pub fn new<S: Into<String>>(class: S, class_probability: f64) -> Self {
        ClassModel {
            class: class.into(),
            class_probability,
            property_probability: HashMap::new(),
        }
    }

    /// Create a model from already computed feature probabilities.
    pub fn with_properties<S: Into<String>>(
        class: S,
        class_probability: f64,
        property_probability: HashMap<String, f64>,
    ) -> Self {
        ClassModel {
            class: class.into(),
            class_probability,
            property_probability,
        }
    }

    /// Estimate feature probabilities from the class's samples.
    ///
    /// Each sample is a feature set: a feature listed twice in one sample
    /// counts once.
    pub fn train<F: AsRef<str>>(&mut self, samples: &[Vec<F>]) {
        if samples.is_empty() {
            return;
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for sample in samples {
            let unique: HashSet<&str> = sample.iter().map(|f| f.as_ref()).collect();
            for feature in unique {
                *counts.entry(feature).or_insert(0) += 1;
            }
        }

        let sample_count = samples.len() as f64;
        for (feature, count) in counts {
            self.property_probability
                .insert(feature.to_string(), count as f64 / sample_count);
        }
    }

    /// Probability of this class given the observed features.
    ///
    /// `prior * product(P(feature | class))`, where unseen features count as 0.
    pub fn probability<F: AsRef<str>>(&self, features: &[F]) -> f64 {
        features
            .iter()
            .fold(self.class_probability, |probability, feature| {
                probability * self.property_probability(feature.as_ref())
            })
    }

    /// Conditional probability of one feature, 0 if never seen.
    pub fn property_probability(&self, feature: &str) -> f64 {
        self.property_probability
            .get(feature)
            .copied()
            .unwrap_or(0.0)
    }

    /// The prior and the full feature table.
    pub fn summarize(&self) -> (f64, &HashMap<String, f64>) {
        (self.class_probability, &self.property_probability)
    }

    /// Class label.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Prior probability of the class.
    pub fn class_probability(&self) -> f64 {
        self.class_probability
    }

    /// Feature table.
    pub fn properties(&self) -> &HashMap<String, f64> {
        &self.property_probability
    }
}

impl fmt::Display for ClassModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut properties: Vec<_> = self.property_probability.iter().collect();
        properties.sort_by(|a, b| a.0.cmp(b.0));
        write!(f, "ClassModel({}, {}, {{", self.class, self.class_probability)?;
        for (i, (feature, probability)) in properties.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{feature}: {probability}")?;
        }
        write!(f, "}})")
    }
}
