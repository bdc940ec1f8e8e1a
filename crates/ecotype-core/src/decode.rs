//! Inverse decoding of classifier output codes.

use serde::{Deserialize, Serialize};

use crate::error::{EcotypeError, Result};

/// Fitted mapping from class codes back to human-readable cover-type
/// labels. The order is fixed at training time; code `i` decodes to
/// `classes[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetEncoder {
    classes: Vec<String>,
}

impl TargetEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self> {
        let encoder = Self { classes };
        encoder.validate()?;
        Ok(encoder)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// A decoder with no classes cannot decode anything; reject at load.
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(EcotypeError::SchemaMismatch {
                what: "target encoder classes",
                expected: 1,
                actual: 0,
            });
        }
        Ok(())
    }

    /// Decode a class code to its cover-type label. An out-of-range code
    /// means the classifier and decoder artifacts disagree; surfaced as an
    /// inference error, never a fabricated label.
    pub fn decode(&self, code: usize) -> Result<&str> {
        self.classes
            .get(code)
            .map(String::as_str)
            .ok_or(EcotypeError::UnknownClassCode {
                code,
                n_classes: self.classes.len(),
            })
    }
}
