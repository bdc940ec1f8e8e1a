//! Feature row assembly: user selections → the fixed 54-column vector.
//!
//! A row is built fresh per prediction and discarded after use. The two
//! one-hot indicator groups are exclusive by construction: every indicator
//! slot starts at zero and exactly one wilderness and one soil slot is set.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::{self, SoilType, WildernessArea, COLUMN_COUNT, NUMERIC_WIDTH};

/// The ten continuous cartographic measurements collected from the form.
/// Defaults are the form's initial values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartographicInputs {
    /// Metres above sea level, 0-5000.
    pub elevation: f64,
    /// Azimuth in degrees, 0-360.
    pub aspect: f64,
    /// Degrees, 0-90.
    pub slope: f64,
    /// Metres to the nearest surface water feature, 0-10000.
    pub horizontal_distance_to_hydrology: f64,
    /// Metres above (positive) or below the nearest surface water,
    /// -1000-10000.
    pub vertical_distance_to_hydrology: f64,
    /// Metres to the nearest roadway, 0-10000.
    pub horizontal_distance_to_roadways: f64,
    /// Illumination index at 09:00 on the summer solstice, 0-255.
    pub hillshade_9am: f64,
    /// Illumination index at noon, 0-255.
    pub hillshade_noon: f64,
    /// Illumination index at 15:00, 0-255.
    pub hillshade_3pm: f64,
    /// Metres to the nearest historic wildfire ignition point, 0-10000.
    pub horizontal_distance_to_fire_points: f64,
}

impl Default for CartographicInputs {
    fn default() -> Self {
        Self {
            elevation: 2500.0,
            aspect: 90.0,
            slope: 10.0,
            horizontal_distance_to_hydrology: 200.0,
            vertical_distance_to_hydrology: 50.0,
            horizontal_distance_to_roadways: 500.0,
            hillshade_9am: 200.0,
            hillshade_noon: 220.0,
            hillshade_3pm: 180.0,
            horizontal_distance_to_fire_points: 1000.0,
        }
    }
}

/// One fully-assembled row in schema order: ten numerics followed by the
/// wilderness and soil indicator blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: [f64; COLUMN_COUNT],
}

impl FeatureRow {
    /// All 54 values in schema order.
    pub fn values(&self) -> &[f64; COLUMN_COUNT] {
        &self.values
    }

    /// The continuous block (columns `0..NUMERIC_WIDTH`), the only part the
    /// imputer and scaler are allowed to touch.
    pub fn numeric(&self) -> &[f64] {
        &self.values[..NUMERIC_WIDTH]
    }

    pub fn numeric_mut(&mut self) -> &mut [f64] {
        &mut self.values[..NUMERIC_WIDTH]
    }

    /// Value addressed by training-time column name; `None` for names
    /// outside the schema.
    pub fn get(&self, column: &str) -> Option<f64> {
        schema::column_index(column).map(|i| self.values[i])
    }
}

/// Assemble a feature row from validated selections. Pure; the typed
/// arguments make a malformed indicator group unrepresentable.
pub fn assemble(
    inputs: &CartographicInputs,
    wilderness: WildernessArea,
    soil: SoilType,
) -> FeatureRow {
    let mut values = [0.0; COLUMN_COUNT];

    values[0] = inputs.elevation;
    values[1] = inputs.aspect;
    values[2] = inputs.slope;
    values[3] = inputs.horizontal_distance_to_hydrology;
    values[4] = inputs.vertical_distance_to_hydrology;
    values[5] = inputs.horizontal_distance_to_roadways;
    values[6] = inputs.hillshade_9am;
    values[7] = inputs.hillshade_noon;
    values[8] = inputs.hillshade_3pm;
    values[9] = inputs.horizontal_distance_to_fire_points;

    values[wilderness.column_index()] = 1.0;
    values[soil.column_index()] = 1.0;

    FeatureRow { values }
}

/// String-boundary variant of [`assemble`]: parses the two categorical
/// labels and rejects anything outside their closed sets.
pub fn assemble_from_labels(
    inputs: &CartographicInputs,
    wilderness_label: &str,
    soil_label: &str,
) -> Result<FeatureRow> {
    let wilderness = WildernessArea::from_label(wilderness_label)?;
    let soil = SoilType::from_label(soil_label)?;
    Ok(assemble(inputs, wilderness, soil))
}
