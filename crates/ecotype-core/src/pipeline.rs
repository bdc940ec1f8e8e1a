//! The prediction pipeline: impute → scale → classify → decode.
//!
//! One linear pass per request, no branching state. The artifact set is
//! shared read-only; the row is cloned so the caller's copy keeps its raw
//! values.

use std::path::Path;

use tracing::debug;

use crate::artifacts::ArtifactSet;
use crate::error::Result;
use crate::features::FeatureRow;

pub struct CoverPredictor {
    artifacts: ArtifactSet,
}

impl CoverPredictor {
    pub fn new(artifacts: ArtifactSet) -> Self {
        Self { artifacts }
    }

    /// Load the artifact set from `dir` and build a predictor. Fatal on any
    /// missing or invalid artifact.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self::new(ArtifactSet::load(dir)?))
    }

    pub fn artifacts(&self) -> &ArtifactSet {
        &self.artifacts
    }

    /// Run one assembled row through the fitted transforms and classifier.
    /// Deterministic: identical rows yield identical labels.
    pub fn predict(&self, row: &FeatureRow) -> Result<String> {
        let mut row = row.clone();

        // Imputation runs even on fully-populated rows: the scaler was fit
        // on imputed data, so the transform order must match training.
        self.artifacts.imputer.transform_numeric(row.numeric_mut())?;
        self.artifacts.scaler.transform_numeric(row.numeric_mut())?;

        let code = self.artifacts.classifier.predict(&row);
        let label = self.artifacts.target_encoder.decode(code)?;

        debug!(code, label, "prediction complete");
        Ok(label.to_string())
    }
}
