//! Naive Bayesian classifier.
//!
//! This module provides a general purpose categorical classifier:
//! - `ClassModel`: prior and per-feature conditional probabilities of one class
//! - `Classifier`: ordered collection of class models with training and
//!   classification
//! - `ClassifierRecord`: the persisted shape of a trained classifier
//!
//! No smoothing is applied: a feature never seen for a class drives that
//! class's probability to exactly zero.
//!
//! # Example
//!
//! ```
//! use spellrank::classifier::Classifier;
//!
//! let mut classifier = Classifier::new();
//! classifier.train(&[
//!     ("banana", vec![vec!["long", "yellow"], vec!["long", "sweet"]]),
//!     ("apple", vec![vec!["round", "red"]]),
//! ]);
//!
//! let prediction = classifier.classify(&["long"]);
//! assert_eq!(prediction.class, Some("banana"));
//! ```

mod class_model;
mod naive_bayes;
mod record;
mod types;

// Public exports
pub use class_model::ClassModel;
pub use naive_bayes::Classifier;
pub use record::{ClassRecord, ClassifierRecord};
pub use types::{
    Assumptions, Prediction, TrainingSample, group_by_class, group_samples, load_training_data,
    split_first,
};
