//! Standardization of the numeric block.

use serde::{Deserialize, Serialize};

use crate::error::{EcotypeError, Result};
use crate::schema::NUMERIC_WIDTH;

/// Standardizes each numeric column with parameters fixed at training time:
/// z = (x − mean) / scale. A zero scale (constant training column) divides
/// by 1.0 instead, matching the upstream fitting convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Training-time mean of each numeric column, in schema order.
    mean: Vec<f64>,
    /// Training-time standard deviation of each numeric column.
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Check both fitted parameter vectors against the schema width.
    pub fn validate(&self) -> Result<()> {
        if self.mean.len() != NUMERIC_WIDTH {
            return Err(EcotypeError::SchemaMismatch {
                what: "scaler mean",
                expected: NUMERIC_WIDTH,
                actual: self.mean.len(),
            });
        }
        if self.scale.len() != NUMERIC_WIDTH {
            return Err(EcotypeError::SchemaMismatch {
                what: "scaler scale",
                expected: NUMERIC_WIDTH,
                actual: self.scale.len(),
            });
        }
        Ok(())
    }

    /// Standardize the numeric block in place.
    pub fn transform_numeric(&self, numeric: &mut [f64]) -> Result<()> {
        if numeric.len() != self.mean.len() {
            return Err(EcotypeError::SchemaMismatch {
                what: "scaler input",
                expected: self.mean.len(),
                actual: numeric.len(),
            });
        }
        for (i, value) in numeric.iter_mut().enumerate() {
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            *value = (*value - self.mean[i]) / scale;
        }
        Ok(())
    }
}
