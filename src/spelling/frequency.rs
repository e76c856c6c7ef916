//! Word frequency weights.
//!
//! The ranker turns a candidate's frequency rank into a weight in `[0, 1]`
//! and feeds it to the classifier as an assumption.

use crate::error::{Result, SpellRankError};

/// Maps a frequency rank to a weight, expected in `[0, 1]` and
/// non-increasing in the rank.
pub trait FrequencyModel {
    /// Weight of the word at `rank` (0 = most frequent).
    fn frequency_of(&self, rank: usize) -> Result<f64>;
}

impl<F> FrequencyModel for F
where
    F: Fn(usize) -> Result<f64>,
{
    fn frequency_of(&self, rank: usize) -> Result<f64> {
        self(rank)
    }
}

/// Zipf-law weights: `1 / (rank + 1)^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZipfFrequency {
    exponent: f64,
}

impl ZipfFrequency {
    /// Classic Zipf distribution with exponent 1.
    pub fn new() -> Self {
        ZipfFrequency { exponent: 1.0 }
    }

    /// Zipf distribution with a custom, non-negative exponent.
    pub fn with_exponent(exponent: f64) -> Result<Self> {
        if !exponent.is_finite() || exponent < 0.0 {
            return Err(SpellRankError::invalid_config(format!(
                "zipf exponent must be finite and non-negative, got {exponent}"
            )));
        }
        Ok(ZipfFrequency { exponent })
    }
}

impl Default for ZipfFrequency {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyModel for ZipfFrequency {
    fn frequency_of(&self, rank: usize) -> Result<f64> {
        Ok((rank as f64 + 1.0).powf(-self.exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zipf_weights() {
        let zipf = ZipfFrequency::new();
        assert!((zipf.frequency_of(0).unwrap() - 1.0).abs() < 1e-12);
        assert!((zipf.frequency_of(1).unwrap() - 0.5).abs() < 1e-12);
        assert!((zipf.frequency_of(3).unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_zipf_is_non_increasing() {
        let zipf = ZipfFrequency::with_exponent(0.7).unwrap();
        let weights: Vec<f64> = (0..50).map(|r| zipf.frequency_of(r).unwrap()).collect();
        assert!(weights.windows(2).all(|w| w[0] >= w[1]));
        assert!(weights.iter().all(|w| (0.0..=1.0).contains(w)));
    }

    #[test]
    fn test_invalid_exponent() {
        assert!(ZipfFrequency::with_exponent(-1.0).is_err());
        assert!(ZipfFrequency::with_exponent(f64::NAN).is_err());
    }

    #[test]
    fn test_closure_model() {
        let model = |rank: usize| -> Result<f64> { Ok(if rank < 10 { 0.9 } else { 0.1 }) };
        assert_eq!(model.frequency_of(3).unwrap(), 0.9);
        assert_eq!(model.frequency_of(30).unwrap(), 0.1);
    }
}
