//! Mean imputation over the numeric block.

use serde::{Deserialize, Serialize};

use crate::error::{EcotypeError, Result};
use crate::schema::NUMERIC_WIDTH;

/// Fills missing (NaN) numeric values with per-column statistics fixed at
/// training time. A fully-populated row passes through unchanged, but the
/// transform is still applied on every prediction: the scaler downstream
/// was fit on imputed data and the transform order must match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeanImputer {
    /// Training-time mean of each numeric column, in schema order.
    statistics: Vec<f64>,
}

impl MeanImputer {
    pub fn new(statistics: Vec<f64>) -> Result<Self> {
        let imputer = Self { statistics };
        imputer.validate()?;
        Ok(imputer)
    }

    pub fn statistics(&self) -> &[f64] {
        &self.statistics
    }

    /// Check the fitted parameter width against the schema. Called at
    /// artifact load so a mismatch is fatal at startup, not at inference.
    pub fn validate(&self) -> Result<()> {
        if self.statistics.len() != NUMERIC_WIDTH {
            return Err(EcotypeError::SchemaMismatch {
                what: "imputer statistics",
                expected: NUMERIC_WIDTH,
                actual: self.statistics.len(),
            });
        }
        Ok(())
    }

    /// Replace NaN slots in the numeric block with the fitted statistics.
    pub fn transform_numeric(&self, numeric: &mut [f64]) -> Result<()> {
        if numeric.len() != self.statistics.len() {
            return Err(EcotypeError::SchemaMismatch {
                what: "imputer input",
                expected: self.statistics.len(),
                actual: numeric.len(),
            });
        }
        for (value, &statistic) in numeric.iter_mut().zip(&self.statistics) {
            if value.is_nan() {
                *value = statistic;
            }
        }
        Ok(())
    }
}
