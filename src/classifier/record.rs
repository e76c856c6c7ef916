//! Persisted representation of a trained classifier.
//!
//! The record shape is
//! `{"classes": [{"class", "class_probability", "properties": {feature: p}}]}`.
//! Class order is preserved; feature tables are written in sorted key order so
//! the same classifier always serializes to the same text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classifier::class_model::ClassModel;
use crate::error::{Result, SpellRankError};

/// One class of a persisted classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Class label.
    pub class: String,
    /// Prior probability of the class.
    pub class_probability: f64,
    /// Feature tag to conditional probability.
    pub properties: BTreeMap<String, f64>,
}

/// A persisted classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierRecord {
    /// Class models in registration order.
    pub classes: Vec<ClassRecord>,
}

impl ClassifierRecord {
    /// Build a record from class models.
    pub fn from_models(models: &[ClassModel]) -> Self {
        let classes = models
            .iter()
            .map(|model| {
                let (class_probability, properties) = model.summarize();
                ClassRecord {
                    class: model.class().to_string(),
                    class_probability,
                    properties: properties
                        .iter()
                        .map(|(feature, p)| (feature.clone(), *p))
                        .collect(),
                }
            })
            .collect();

        ClassifierRecord { classes }
    }

    /// Validate the record and turn it into class models.
    ///
    /// Values are taken as stored, so anything [`ClassifierRecord::from_models`]
    /// produced loads back unchanged. Only non-finite numbers are rejected.
    pub fn into_models(self) -> Result<Vec<ClassModel>> {
        self.classes
            .into_iter()
            .map(|record| {
                check_finite(&record.class, "class_probability", record.class_probability)?;
                for (feature, p) in &record.properties {
                    check_finite(&record.class, feature, *p)?;
                }
                Ok(ClassModel::with_properties(
                    record.class,
                    record.class_probability,
                    record.properties.into_iter().collect(),
                ))
            })
            .collect()
    }
}

fn check_finite(class: &str, field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpellRankError::deserialization(format!(
            "class '{class}': '{field}' = {value} is not a finite number"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;

    const JSON_REP: &str = r#"{"classes":[{"class":"class","class_probability":1.0,"properties":{"1":1.0,"2":1.0,"3":1.0}}]}"#;

    #[test]
    fn test_serialize_shape() {
        let mut model = ClassModel::new("class", 1.0);
        model.train(&[vec!["1", "2", "3"]]);
        let classifier = Classifier::from_models(vec![model]);

        assert_eq!(classifier.to_json().unwrap(), JSON_REP);
    }

    #[test]
    fn test_parse_and_reserialize() {
        let classifier = Classifier::from_json(JSON_REP).unwrap();
        assert_eq!(classifier.len(), 1);
        assert_eq!(classifier.classes()[0].class(), "class");
        assert_eq!(classifier.to_json().unwrap(), JSON_REP);
    }

    #[test]
    fn test_integer_probabilities_are_accepted() {
        let json = r#"{"classes":[{"class":"fruit","class_probability":1,"properties":{"fruit":0.5,"banana":1}}]}"#;
        let classifier = Classifier::from_json(json).unwrap();
        let model = &classifier.classes()[0];
        assert_eq!(model.class_probability(), 1.0);
        assert_eq!(model.property_probability("fruit"), 0.5);
        assert_eq!(model.property_probability("banana"), 1.0);
    }

    #[test]
    fn test_missing_field_fails() {
        let json = r#"{"classes":[{"class":"fruit","properties":{}}]}"#;
        let err = Classifier::from_json(json).unwrap_err();
        assert!(matches!(err, SpellRankError::Json(_)));
    }

    #[test]
    fn test_non_numeric_probability_fails() {
        let json = r#"{"classes":[{"class":"fruit","class_probability":1,"properties":{"a":"high"}}]}"#;
        let err = Classifier::from_json(json).unwrap_err();
        assert!(matches!(err, SpellRankError::Json(_)));
    }

    #[test]
    fn test_hand_built_model_round_trips() {
        let model = ClassModel::with_properties(
            "x",
            2.0,
            [("f".to_string(), 0.5)].into_iter().collect(),
        );
        let classifier = Classifier::from_models(vec![model]);

        let json = classifier.to_json().unwrap();
        let restored = Classifier::from_json(&json).unwrap();
        assert_eq!(restored, classifier);
        assert_eq!(restored.classes()[0].class_probability(), 2.0);
    }

    #[test]
    fn test_non_finite_probability_fails() {
        let record = ClassifierRecord {
            classes: vec![ClassRecord {
                class: "fruit".to_string(),
                class_probability: 0.5,
                properties: BTreeMap::from([("ripe".to_string(), f64::NAN)]),
            }],
        };
        let err = Classifier::from_record(record).unwrap_err();
        assert!(matches!(err, SpellRankError::Deserialization(_)));

        let json = r#"{"classes":[{"class":"fruit","class_probability":null,"properties":{}}]}"#;
        assert!(matches!(
            Classifier::from_json(json),
            Err(SpellRankError::Json(_))
        ));
    }

    #[test]
    fn test_class_order_preserved() {
        let record = ClassifierRecord {
            classes: vec![
                ClassRecord {
                    class: "z".to_string(),
                    class_probability: 0.5,
                    properties: BTreeMap::new(),
                },
                ClassRecord {
                    class: "a".to_string(),
                    class_probability: 0.5,
                    properties: BTreeMap::new(),
                },
            ],
        };
        let classifier = Classifier::from_record(record.clone()).unwrap();
        assert_eq!(classifier.to_record(), record);
    }
}
