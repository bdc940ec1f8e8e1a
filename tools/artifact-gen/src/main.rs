//! Writes a demonstration artifact set so the predict tool runs end to end
//! without the upstream training pipeline.
//!
//! The imputer and scaler carry the published Covertype per-column summary
//! statistics; the classifier is a handcrafted linear model over the
//! standardized features with an elevation-driven ecological gradient.
//! This is a loadable fixture, not a trained model.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ecotype_core::artifacts::ArtifactSet;
use ecotype_core::decode::TargetEncoder;
use ecotype_core::model::CoverClassifier;
use ecotype_core::preprocess::{MeanImputer, StandardScaler};
use ecotype_core::schema::{SoilType, WildernessArea, COLUMN_COUNT};

#[derive(Parser, Debug)]
#[command(name = "artifact-gen", about = "Write a demonstration cover-type artifact set")]
struct Args {
    /// Output directory for the four artifact files.
    #[arg(short, long, default_value = "data")]
    output: PathBuf,
}

/// Covertype per-column means, in schema order.
const NUMERIC_MEANS: [f64; 10] = [
    2959.37, 155.65, 14.10, 269.43, 46.42, 2350.15, 212.15, 223.32, 142.53, 1980.29,
];

/// Covertype per-column standard deviations, in schema order.
const NUMERIC_STDS: [f64; 10] = [
    279.98, 111.91, 7.49, 212.55, 58.30, 1559.25, 26.77, 19.77, 38.27, 1324.19,
];

/// Cover-type labels in code order (lexicographic, the label-encoder
/// fitting convention).
const CLASSES: [&str; 7] = [
    "Aspen",
    "Cottonwood/Willow",
    "Douglas-fir",
    "Krummholz",
    "Lodgepole Pine",
    "Ponderosa Pine",
    "Spruce/Fir",
];

// Class codes in CLASSES order.
const ASPEN: usize = 0;
const COTTONWOOD_WILLOW: usize = 1;
const DOUGLAS_FIR: usize = 2;
const KRUMMHOLZ: usize = 3;
const LODGEPOLE_PINE: usize = 4;
const PONDEROSA_PINE: usize = 5;
const SPRUCE_FIR: usize = 6;

// Numeric column indices used by the demo weights.
const ELEVATION: usize = 0;
const SLOPE: usize = 2;
const H_DIST_HYDROLOGY: usize = 3;
const V_DIST_HYDROLOGY: usize = 4;

fn demo_classifier() -> ecotype_core::Result<CoverClassifier> {
    let mut w = vec![vec![0.0; COLUMN_COUNT]; CLASSES.len()];
    let mut b = vec![0.0; CLASSES.len()];

    // Elevation gradient: riparian cottonwood at the bottom of the range,
    // krummholz at the treeline.
    w[ASPEN][ELEVATION] = -0.2;
    w[ASPEN][H_DIST_HYDROLOGY] = -0.2;
    b[ASPEN] = -0.2;

    w[COTTONWOOD_WILLOW][ELEVATION] = -1.8;
    w[COTTONWOOD_WILLOW][H_DIST_HYDROLOGY] = -0.8;
    w[COTTONWOOD_WILLOW][V_DIST_HYDROLOGY] = -0.3;
    b[COTTONWOOD_WILLOW] = -1.8;

    w[DOUGLAS_FIR][ELEVATION] = -0.9;
    w[DOUGLAS_FIR][SLOPE] = 0.2;

    w[KRUMMHOLZ][ELEVATION] = 2.0;
    b[KRUMMHOLZ] = -1.5;

    w[LODGEPOLE_PINE][ELEVATION] = 0.2;
    b[LODGEPOLE_PINE] = 0.6;

    w[PONDEROSA_PINE][ELEVATION] = -1.4;
    w[PONDEROSA_PINE][SLOPE] = 0.1;
    b[PONDEROSA_PINE] = -0.3;

    w[SPRUCE_FIR][ELEVATION] = 1.2;

    // Area effects: Neota sits highest of the four areas, Cache la Poudre
    // lowest.
    let neota = WildernessArea::Neota.column_index();
    w[KRUMMHOLZ][neota] = 0.3;
    w[SPRUCE_FIR][neota] = 0.2;

    let cache_la_poudre = WildernessArea::CacheLaPoudre.column_index();
    w[COTTONWOOD_WILLOW][cache_la_poudre] = 0.4;
    w[PONDEROSA_PINE][cache_la_poudre] = 0.3;

    for area in [WildernessArea::Rawah, WildernessArea::ComanchePeak] {
        w[LODGEPOLE_PINE][area.column_index()] = 0.2;
    }

    // Soil effects: the lowest survey codes are lower-montane soils, the
    // highest are alpine talus.
    for soil in &SoilType::ALL[..6] {
        w[PONDEROSA_PINE][soil.column_index()] = 0.2;
    }
    for soil in &SoilType::ALL[34..] {
        w[KRUMMHOLZ][soil.column_index()] = 0.3;
    }

    CoverClassifier::new(w, b)
}

fn demo_set() -> Result<ArtifactSet> {
    Ok(ArtifactSet {
        classifier: demo_classifier()?,
        imputer: MeanImputer::new(NUMERIC_MEANS.to_vec())?,
        scaler: StandardScaler::new(NUMERIC_MEANS.to_vec(), NUMERIC_STDS.to_vec())?,
        target_encoder: TargetEncoder::new(CLASSES.iter().map(|c| c.to_string()).collect())?,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;
    demo_set()?.save(&args.output)?;

    println!("Wrote artifact set to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use ecotype_core::{assemble, CartographicInputs, CoverPredictor};

    use super::*;

    #[test]
    fn demo_set_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        demo_set().unwrap().save(dir.path()).unwrap();

        let loaded = ArtifactSet::load(dir.path()).unwrap();
        assert_eq!(loaded.classifier.n_classes(), CLASSES.len());
        assert_eq!(loaded.target_encoder.classes().len(), CLASSES.len());
        assert_eq!(loaded.scaler.mean(), &NUMERIC_MEANS[..]);
    }

    #[test]
    fn treeline_elevation_predicts_krummholz() {
        let predictor = CoverPredictor::new(demo_set().unwrap());
        let inputs = CartographicInputs {
            elevation: 3800.0,
            ..CartographicInputs::default()
        };
        let row = assemble(&inputs, WildernessArea::Neota, SoilType::Type38);
        assert_eq!(predictor.predict(&row).unwrap(), "Krummholz");
    }

    #[test]
    fn low_riparian_site_predicts_cottonwood_willow() {
        let predictor = CoverPredictor::new(demo_set().unwrap());
        let inputs = CartographicInputs {
            elevation: 2000.0,
            horizontal_distance_to_hydrology: 30.0,
            vertical_distance_to_hydrology: 0.0,
            ..CartographicInputs::default()
        };
        let row = assemble(&inputs, WildernessArea::CacheLaPoudre, SoilType::Type2);
        assert_eq!(predictor.predict(&row).unwrap(), "Cottonwood/Willow");
    }

    #[test]
    fn mean_elevation_predicts_the_dominant_lodgepole() {
        let predictor = CoverPredictor::new(demo_set().unwrap());
        let inputs = CartographicInputs {
            elevation: 2959.0,
            ..CartographicInputs::default()
        };
        let row = assemble(&inputs, WildernessArea::Rawah, SoilType::Type10);
        assert_eq!(predictor.predict(&row).unwrap(), "Lodgepole Pine");
    }
}
