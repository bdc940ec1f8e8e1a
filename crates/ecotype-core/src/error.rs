//! Error types for the cover type pipeline.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EcotypeError>;

#[derive(Debug, Error)]
pub enum EcotypeError {
    /// A wilderness label outside the closed four-label training set.
    #[error("unknown wilderness area label {0:?}")]
    UnknownWildernessArea(String),

    /// A soil type label outside the closed forty-label training set.
    #[error("unknown soil type label {0:?}")]
    UnknownSoilType(String),

    /// An artifact file is missing or unreadable. Fatal at startup.
    #[error("cannot read artifact {}: {source}", path.display())]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact file exists but does not parse.
    #[error("malformed artifact {}: {source}", path.display())]
    ArtifactFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An artifact was written by an incompatible pipeline version.
    #[error("artifact {} has schema version {found}, supported version is {supported}", path.display())]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },

    /// A fitted parameter block does not match the training-time schema width.
    #[error("{what}: expected {expected} columns, got {actual}")]
    SchemaMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The classifier emitted a class code the target encoder cannot decode.
    #[error("class code {code} is out of range ({n_classes} classes known)")]
    UnknownClassCode { code: usize, n_classes: usize },
}
