//! Fitted preprocessing transforms for the numeric block.
//!
//! Both transforms carry parameters fixed at training time and are applied
//! in a fixed order: imputation, then standardization. Indicator columns
//! are never touched. Fitting itself happens upstream; this module only
//! replays the fitted transforms.

mod imputer;
mod scaler;

pub use imputer::MeanImputer;
pub use scaler::StandardScaler;
