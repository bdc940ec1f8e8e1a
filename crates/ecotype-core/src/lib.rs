//! EcoType core: forest cover type prediction from cartographic
//! measurements.
//!
//! The library owns the one non-trivial piece of logic in the system:
//! reconstructing the training-time feature vector from a sparse set of
//! user selections, then replaying the fitted transform chain. The fitted
//! artifacts themselves (classifier, imputer, scaler, target decoder) are
//! opaque inputs produced upstream; they are loaded once at startup and
//! never mutated.
//!
//! # Modules
//!
//! - [`schema`]: the fixed 54-column training-time schema and the closed
//!   categorical domains
//! - [`features`]: feature row assembly from user selections
//! - [`preprocess`]: fitted imputation and standardization transforms
//! - [`model`]: linear multiclass classifier inference
//! - [`decode`]: class code → cover-type label decoding
//! - [`artifacts`]: versioned artifact set loading and saving
//! - [`pipeline`]: the impute → scale → classify → decode pass

pub mod artifacts;
pub mod decode;
pub mod error;
pub mod features;
pub mod model;
pub mod pipeline;
pub mod preprocess;
pub mod schema;

pub use artifacts::ArtifactSet;
pub use error::{EcotypeError, Result};
pub use features::{assemble, assemble_from_labels, CartographicInputs, FeatureRow};
pub use pipeline::CoverPredictor;
pub use schema::{SoilType, WildernessArea};
