//! Ordered naive Bayesian classifier.

use std::fmt;

use log::{debug, info};

use crate::classifier::class_model::ClassModel;
use crate::classifier::record::ClassifierRecord;
use crate::classifier::types::{Assumptions, Prediction};
use crate::error::Result;
use crate::storage::ClassifierStore;

/// General purpose Bayesian classifier.
///
/// Class models are kept in registration order. That order decides ties:
/// on equal probability the earlier registered class wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classifier {
    classes: Vec<ClassModel>,
}

impl Classifier {
    /// Create a classifier with no classes.
    pub fn new() -> Self {
        Classifier {
            classes: Vec::new(),
        }
    }

    /// Create a classifier from existing class models, keeping their order.
    pub fn from_models(classes: Vec<ClassModel>) -> Self {
        Classifier { classes }
    }

    /// Train one class model per entry of `dataset` and append them.
    ///
    /// Priors are each class's share of the samples in this call. Models
    /// from earlier calls are kept; use [`Classifier::reset`] first for a
    /// fresh training.
    pub fn train<L, F>(&mut self, dataset: &[(L, Vec<Vec<F>>)])
    where
        L: AsRef<str>,
        F: AsRef<str>,
    {
        let total: usize = dataset.iter().map(|(_, samples)| samples.len()).sum();

        for (class, samples) in dataset {
            let prior = if total == 0 {
                0.0
            } else {
                samples.len() as f64 / total as f64
            };
            let mut model = ClassModel::new(class.as_ref(), prior);
            model.train(samples);
            debug!(
                "trained class '{}' on {} samples (prior {prior})",
                model.class(),
                samples.len()
            );
            self.classes.push(model);
        }

        info!(
            "trained {} classes from {total} samples, {} classes registered",
            dataset.len(),
            self.classes.len()
        );
    }

    /// Classify features without assumption weights.
    pub fn classify<F: AsRef<str>>(&self, features: &[F]) -> Prediction<'_> {
        self.classify_with(features, &Assumptions::new())
    }

    /// Classify features, multiplying each class's probability by its
    /// assumption weight (default 1).
    ///
    /// Returns the first class whose probability is strictly greater than
    /// every earlier one, or `(0, None)` when nothing scores above zero.
    pub fn classify_with<F: AsRef<str>>(
        &self,
        features: &[F],
        assumptions: &Assumptions,
    ) -> Prediction<'_> {
        let mut best = Prediction::none();

        for model in &self.classes {
            let weight = assumptions.get(model.class()).copied().unwrap_or(1.0);
            let probability = model.probability(features) * weight;
            if probability > best.probability {
                best = Prediction {
                    probability,
                    class: Some(model.class()),
                };
            }
        }

        best
    }

    /// Drop every registered class.
    pub fn reset(&mut self) {
        self.classes.clear();
    }

    /// Registered class models in order.
    pub fn classes(&self) -> &[ClassModel] {
        &self.classes
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no class is registered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Convert to the persisted record shape.
    pub fn to_record(&self) -> ClassifierRecord {
        ClassifierRecord::from_models(&self.classes)
    }

    /// Rebuild a classifier from a persisted record.
    pub fn from_record(record: ClassifierRecord) -> Result<Self> {
        Ok(Classifier {
            classes: record.into_models()?,
        })
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    /// Parse a classifier from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: ClassifierRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }

    /// Load the classifier stored under `key`.
    pub fn load_from(store: &dyn ClassifierStore, key: &str) -> Result<Self> {
        Self::from_record(store.load(key)?)
    }

    /// Save the classifier under `key`.
    pub fn save_to(&self, store: &dyn ClassifierStore, key: &str) -> Result<()> {
        store.save(key, &self.to_record())
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Classifier([")?;
        for (i, model) in self.classes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{model}")?;
        }
        write!(f, "])")
    }
}
