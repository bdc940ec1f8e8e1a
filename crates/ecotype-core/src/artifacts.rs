//! Artifact set loading and saving.
//!
//! The four fitted artifacts live as JSON files with fixed names inside one
//! directory (by default the working directory). They are loaded once at
//! startup, validated against the schema, and treated as immutable for the
//! life of the process. Any missing, unreadable, malformed, or
//! wrong-version file is fatal at load time, never deferred to the first
//! prediction.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::decode::TargetEncoder;
use crate::error::{EcotypeError, Result};
use crate::model::CoverClassifier;
use crate::preprocess::{MeanImputer, StandardScaler};

/// Fixed artifact file names.
pub const MODEL_FILE: &str = "best_model.json";
pub const IMPUTER_FILE: &str = "num_imputer.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const TARGET_ENCODER_FILE: &str = "target_encoder.json";

/// On-disk artifact schema version. Bump on any breaking layout change.
pub const ARTIFACT_SCHEMA_VERSION: u32 = 1;

#[derive(Deserialize)]
struct Envelope<T> {
    schema_version: u32,
    #[serde(flatten)]
    payload: T,
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T: Serialize> {
    schema_version: u32,
    #[serde(flatten)]
    payload: &'a T,
}

/// The complete fitted artifact set. Constructed once before the serving
/// loop and shared read-only with every prediction.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub classifier: CoverClassifier,
    pub imputer: MeanImputer,
    pub scaler: StandardScaler,
    pub target_encoder: TargetEncoder,
}

impl ArtifactSet {
    /// Load and validate all four artifacts from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let classifier: CoverClassifier = load_artifact(&dir.join(MODEL_FILE))?;
        let imputer: MeanImputer = load_artifact(&dir.join(IMPUTER_FILE))?;
        let scaler: StandardScaler = load_artifact(&dir.join(SCALER_FILE))?;
        let target_encoder: TargetEncoder = load_artifact(&dir.join(TARGET_ENCODER_FILE))?;

        classifier.validate()?;
        imputer.validate()?;
        scaler.validate()?;
        target_encoder.validate()?;

        info!(
            dir = %dir.display(),
            classes = target_encoder.classes().len(),
            "artifact set loaded"
        );

        Ok(Self {
            classifier,
            imputer,
            scaler,
            target_encoder,
        })
    }

    /// Write all four artifacts into `dir` (which must exist).
    pub fn save(&self, dir: &Path) -> Result<()> {
        save_artifact(&dir.join(MODEL_FILE), &self.classifier)?;
        save_artifact(&dir.join(IMPUTER_FILE), &self.imputer)?;
        save_artifact(&dir.join(SCALER_FILE), &self.scaler)?;
        save_artifact(&dir.join(TARGET_ENCODER_FILE), &self.target_encoder)?;
        Ok(())
    }
}

fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).map_err(|source| EcotypeError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })?;
    let envelope: Envelope<T> =
        serde_json::from_slice(&bytes).map_err(|source| EcotypeError::ArtifactFormat {
            path: path.to_path_buf(),
            source,
        })?;
    if envelope.schema_version != ARTIFACT_SCHEMA_VERSION {
        return Err(EcotypeError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: envelope.schema_version,
            supported: ARTIFACT_SCHEMA_VERSION,
        });
    }
    Ok(envelope.payload)
}

fn save_artifact<T: Serialize>(path: &Path, payload: &T) -> Result<()> {
    let envelope = EnvelopeRef {
        schema_version: ARTIFACT_SCHEMA_VERSION,
        payload,
    };
    let json = serde_json::to_vec_pretty(&envelope).map_err(|source| {
        EcotypeError::ArtifactFormat {
            path: path.to_path_buf(),
            source,
        }
    })?;
    fs::write(path, json).map_err(|source| EcotypeError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{COLUMN_COUNT, NUMERIC_WIDTH};

    fn fixture_set() -> ArtifactSet {
        ArtifactSet {
            classifier: CoverClassifier::new(
                vec![vec![0.0; COLUMN_COUNT]; 2],
                vec![0.0, 1.0],
            )
            .unwrap(),
            imputer: MeanImputer::new(vec![5.0; NUMERIC_WIDTH]).unwrap(),
            scaler: StandardScaler::new(vec![0.0; NUMERIC_WIDTH], vec![1.0; NUMERIC_WIDTH])
                .unwrap(),
            target_encoder: TargetEncoder::new(vec![
                "Spruce/Fir".to_string(),
                "Aspen".to_string(),
            ])
            .unwrap(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        fixture_set().save(dir.path()).unwrap();

        let loaded = ArtifactSet::load(dir.path()).unwrap();
        assert_eq!(loaded.classifier.n_classes(), 2);
        assert_eq!(loaded.imputer.statistics(), &[5.0; NUMERIC_WIDTH]);
        assert_eq!(loaded.target_encoder.classes().len(), 2);
    }

    #[test]
    fn missing_artifact_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let set = fixture_set();
        set.save(dir.path()).unwrap();
        fs::remove_file(dir.path().join(SCALER_FILE)).unwrap();

        let err = ArtifactSet::load(dir.path()).unwrap_err();
        match err {
            EcotypeError::ArtifactIo { path, .. } => {
                assert!(path.ends_with(SCALER_FILE), "error names the missing file");
            }
            other => panic!("expected ArtifactIo, got {other:?}"),
        }
    }

    #[test]
    fn malformed_artifact_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fixture_set().save(dir.path()).unwrap();
        fs::write(dir.path().join(MODEL_FILE), b"not json").unwrap();

        let err = ArtifactSet::load(dir.path()).unwrap_err();
        assert!(matches!(err, EcotypeError::ArtifactFormat { .. }));
    }

    #[test]
    fn future_schema_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fixture_set().save(dir.path()).unwrap();
        let path = dir.path().join(IMPUTER_FILE);
        let text = fs::read_to_string(&path).unwrap();
        fs::write(&path, text.replace("\"schema_version\": 1", "\"schema_version\": 99")).unwrap();

        let err = ArtifactSet::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            EcotypeError::UnsupportedVersion { found: 99, supported: 1, .. }
        ));
    }

    #[test]
    fn wrong_width_artifact_fails_at_load_not_inference() {
        let dir = tempfile::tempdir().unwrap();
        fixture_set().save(dir.path()).unwrap();
        // Hand-write an imputer with nine statistics.
        fs::write(
            dir.path().join(IMPUTER_FILE),
            format!(
                "{{\"schema_version\": {ARTIFACT_SCHEMA_VERSION}, \"statistics\": [0,0,0,0,0,0,0,0,0]}}"
            ),
        )
        .unwrap();

        let err = ArtifactSet::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            EcotypeError::SchemaMismatch { expected: 10, actual: 9, .. }
        ));
    }
}
