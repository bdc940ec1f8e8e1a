//! Linear multiclass cover classifier.
//!
//! The fitted model is one affine score per class over the full 54-column
//! row (standardized numerics plus raw indicators); prediction is the
//! argmax class code. Scores are compared, never exponentiated, so the
//! result is exact and deterministic.

use serde::{Deserialize, Serialize};

use crate::error::{EcotypeError, Result};
use crate::features::FeatureRow;
use crate::schema::COLUMN_COUNT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverClassifier {
    /// One weight row per class, each `COLUMN_COUNT` wide, in schema order.
    weights: Vec<Vec<f64>>,
    /// One intercept per class.
    intercepts: Vec<f64>,
}

impl CoverClassifier {
    pub fn new(weights: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Result<Self> {
        let classifier = Self { weights, intercepts };
        classifier.validate()?;
        Ok(classifier)
    }

    pub fn n_classes(&self) -> usize {
        self.weights.len()
    }

    /// Check every weight row and the intercept vector against the schema.
    /// Called at artifact load; inference itself is infallible afterwards.
    pub fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(EcotypeError::SchemaMismatch {
                what: "classifier weight rows",
                expected: 1,
                actual: 0,
            });
        }
        for row in &self.weights {
            if row.len() != COLUMN_COUNT {
                return Err(EcotypeError::SchemaMismatch {
                    what: "classifier weight row",
                    expected: COLUMN_COUNT,
                    actual: row.len(),
                });
            }
        }
        if self.intercepts.len() != self.weights.len() {
            return Err(EcotypeError::SchemaMismatch {
                what: "classifier intercepts",
                expected: self.weights.len(),
                actual: self.intercepts.len(),
            });
        }
        Ok(())
    }

    /// Class code with the highest affine score. Ties break toward the
    /// lowest code, so equal-score inputs are still deterministic.
    pub fn predict(&self, row: &FeatureRow) -> usize {
        let mut best_code = 0;
        let mut best_score = self.score(0, row);
        for code in 1..self.n_classes() {
            let score = self.score(code, row);
            if score > best_score {
                best_code = code;
                best_score = score;
            }
        }
        best_code
    }

    fn score(&self, code: usize, row: &FeatureRow) -> f64 {
        let dot: f64 = self.weights[code]
            .iter()
            .zip(row.values().iter())
            .map(|(w, v)| w * v)
            .sum();
        dot + self.intercepts[code]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{assemble, CartographicInputs};
    use crate::schema::{SoilType, WildernessArea};

    /// Three classes keyed off single columns: class 0 scores elevation,
    /// class 1 scores slope, class 2 scores the Rawah indicator.
    fn fixture() -> CoverClassifier {
        let mut weights = vec![vec![0.0; COLUMN_COUNT]; 3];
        weights[0][0] = 1.0;
        weights[1][2] = 1.0;
        weights[2][WildernessArea::Rawah.column_index()] = 1.0;
        CoverClassifier::new(weights, vec![0.0, 0.0, 0.0]).unwrap()
    }

    fn row_with(elevation: f64, slope: f64) -> FeatureRow {
        let inputs = CartographicInputs {
            elevation,
            slope,
            ..CartographicInputs::default()
        };
        assemble(&inputs, WildernessArea::Neota, SoilType::Type10)
    }

    #[test]
    fn argmax_follows_the_dominant_column() {
        let classifier = fixture();
        assert_eq!(classifier.predict(&row_with(100.0, 5.0)), 0);
        assert_eq!(classifier.predict(&row_with(3.0, 80.0)), 1);
    }

    #[test]
    fn indicator_columns_contribute_to_scores() {
        let classifier = fixture();
        let inputs = CartographicInputs {
            elevation: 0.0,
            slope: 0.0,
            ..CartographicInputs::default()
        };
        let row = assemble(&inputs, WildernessArea::Rawah, SoilType::Type10);
        assert_eq!(classifier.predict(&row), 2);
    }

    #[test]
    fn ties_break_toward_the_lowest_class_code() {
        let weights = vec![vec![0.0; COLUMN_COUNT]; 4];
        let classifier = CoverClassifier::new(weights, vec![7.0, 7.0, 7.0, 7.0]).unwrap();
        let row = row_with(2500.0, 10.0);
        assert_eq!(classifier.predict(&row), 0);
    }

    #[test]
    fn intercepts_shift_the_decision() {
        let weights = vec![vec![0.0; COLUMN_COUNT]; 2];
        let classifier = CoverClassifier::new(weights, vec![0.0, 0.5]).unwrap();
        assert_eq!(classifier.predict(&row_with(2500.0, 10.0)), 1);
    }

    #[test]
    fn short_weight_row_fails_validation() {
        let weights = vec![vec![0.0; COLUMN_COUNT - 1]];
        let err = CoverClassifier::new(weights, vec![0.0]).unwrap_err();
        assert!(matches!(err, EcotypeError::SchemaMismatch { .. }));
    }

    #[test]
    fn intercept_count_must_match_class_count() {
        let weights = vec![vec![0.0; COLUMN_COUNT]; 2];
        let err = CoverClassifier::new(weights, vec![0.0]).unwrap_err();
        assert!(matches!(
            err,
            EcotypeError::SchemaMismatch { expected: 2, actual: 1, .. }
        ));
    }
}
