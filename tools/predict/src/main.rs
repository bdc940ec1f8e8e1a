//! Interactive prediction form: bounded cartographic measurements in, one
//! cover-type label out.
//!
//! Field bounds and defaults mirror the training-time collection form;
//! range enforcement happens here, at the input boundary, not in the
//! assembler.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ecotype_core::{assemble_from_labels, CartographicInputs, CoverPredictor};

#[derive(Parser, Debug)]
#[command(name = "predict", about = "Predict forest cover type from cartographic measurements")]
struct Args {
    /// Elevation in metres.
    #[arg(long, default_value_t = 2500, value_parser = clap::value_parser!(i64).range(0..=5000))]
    elevation: i64,

    /// Aspect in degrees azimuth.
    #[arg(long, default_value_t = 90, value_parser = clap::value_parser!(i64).range(0..=360))]
    aspect: i64,

    /// Slope in degrees.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i64).range(0..=90))]
    slope: i64,

    /// Horizontal distance to the nearest surface water, metres.
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(i64).range(0..=10_000))]
    h_dist_hydrology: i64,

    /// Vertical distance to the nearest surface water, metres.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(i64).range(-1000..=10_000))]
    v_dist_hydrology: i64,

    /// Horizontal distance to the nearest roadway, metres.
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(i64).range(0..=10_000))]
    h_dist_roadways: i64,

    /// Horizontal distance to the nearest wildfire ignition point, metres.
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(i64).range(0..=10_000))]
    h_dist_fire_points: i64,

    /// Hillshade index at 09:00 on the summer solstice.
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(i64).range(0..=255))]
    hillshade_9am: i64,

    /// Hillshade index at noon.
    #[arg(long, default_value_t = 220, value_parser = clap::value_parser!(i64).range(0..=255))]
    hillshade_noon: i64,

    /// Hillshade index at 15:00.
    #[arg(long, default_value_t = 180, value_parser = clap::value_parser!(i64).range(0..=255))]
    hillshade_3pm: i64,

    /// Wilderness area designation (Wilderness_Area_1..4).
    #[arg(long, default_value = "Wilderness_Area_1")]
    wilderness: String,

    /// Soil type designation (Soil_Type_1..40).
    #[arg(long, default_value = "Soil_Type_1")]
    soil: String,

    /// Directory holding the fitted artifact files.
    #[arg(long, default_value = ".")]
    artifact_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let predictor = CoverPredictor::load(&args.artifact_dir)
        .with_context(|| format!("loading artifact set from {}", args.artifact_dir.display()))?;

    let inputs = CartographicInputs {
        elevation: args.elevation as f64,
        aspect: args.aspect as f64,
        slope: args.slope as f64,
        horizontal_distance_to_hydrology: args.h_dist_hydrology as f64,
        vertical_distance_to_hydrology: args.v_dist_hydrology as f64,
        horizontal_distance_to_roadways: args.h_dist_roadways as f64,
        hillshade_9am: args.hillshade_9am as f64,
        hillshade_noon: args.hillshade_noon as f64,
        hillshade_3pm: args.hillshade_3pm as f64,
        horizontal_distance_to_fire_points: args.h_dist_fire_points as f64,
    };

    let row = assemble_from_labels(&inputs, &args.wilderness, &args.soil)?;
    let label = predictor.predict(&row)?;

    println!("Predicted Forest Cover Type: {label}");
    Ok(())
}
