//! Training-time column schema.
//!
//! The fitted pipeline expects exactly 54 columns in a fixed order: ten
//! continuous cartographic measurements, four wilderness-area indicators,
//! forty soil-type indicators. The numeric block is addressed by explicit
//! indices (columns `0..NUMERIC_WIDTH`), never inferred from runtime types.

use serde::{Deserialize, Serialize};

use crate::error::{EcotypeError, Result};

/// Total number of columns the fitted pipeline expects.
pub const COLUMN_COUNT: usize = 54;

/// Width of the continuous numeric block (columns `0..NUMERIC_WIDTH`).
pub const NUMERIC_WIDTH: usize = 10;

/// Index of the first wilderness indicator column.
pub const WILDERNESS_OFFSET: usize = NUMERIC_WIDTH;

/// Index of the first soil indicator column.
pub const SOIL_OFFSET: usize = WILDERNESS_OFFSET + WildernessArea::ALL.len();

/// The ten continuous columns, in schema order.
pub const NUMERIC_COLUMNS: [&str; NUMERIC_WIDTH] = [
    "Elevation",
    "Aspect",
    "Slope",
    "Horizontal_Distance_To_Hydrology",
    "Vertical_Distance_To_Hydrology",
    "Horizontal_Distance_To_Roadways",
    "Hillshade_9am",
    "Hillshade_Noon",
    "Hillshade_3pm",
    "Horizontal_Distance_To_Fire_Points",
];

/// Schema index for a column name, if the name is part of the schema.
pub fn column_index(name: &str) -> Option<usize> {
    if let Some(i) = NUMERIC_COLUMNS.iter().position(|&c| c == name) {
        return Some(i);
    }
    if let Some(w) = WildernessArea::ALL.iter().find(|w| w.label() == name) {
        return Some(w.column_index());
    }
    SoilType::ALL
        .iter()
        .find(|s| s.label() == name)
        .map(|s| s.column_index())
}

// ── Wilderness areas ──────────────────────────────────────────────────────────

/// Wilderness area selection. Closed set of the four Roosevelt National
/// Forest areas the pipeline was trained on; indicator columns
/// `Wilderness_Area_1..4` in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildernessArea {
    Rawah,
    Neota,
    ComanchePeak,
    CacheLaPoudre,
}

impl WildernessArea {
    pub const ALL: [WildernessArea; 4] = [
        WildernessArea::Rawah,
        WildernessArea::Neota,
        WildernessArea::ComanchePeak,
        WildernessArea::CacheLaPoudre,
    ];

    /// Training-time column label.
    pub fn label(self) -> &'static str {
        match self {
            WildernessArea::Rawah => "Wilderness_Area_1",
            WildernessArea::Neota => "Wilderness_Area_2",
            WildernessArea::ComanchePeak => "Wilderness_Area_3",
            WildernessArea::CacheLaPoudre => "Wilderness_Area_4",
        }
    }

    /// Index of this area's indicator column in the full schema.
    pub fn column_index(self) -> usize {
        WILDERNESS_OFFSET + self as usize
    }

    /// Parse a training-time label. The label set is closed; anything else
    /// is an invalid-argument error, never a silently empty indicator group.
    pub fn from_label(label: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|w| w.label() == label)
            .ok_or_else(|| EcotypeError::UnknownWildernessArea(label.to_string()))
    }
}

// ── Soil types ────────────────────────────────────────────────────────────────

/// Soil type selection. Closed set of the forty USFS ELU soil designations,
/// indicator columns `Soil_Type_1..40`; discriminants are the survey codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SoilType {
    Type1 = 1,
    Type2 = 2,
    Type3 = 3,
    Type4 = 4,
    Type5 = 5,
    Type6 = 6,
    Type7 = 7,
    Type8 = 8,
    Type9 = 9,
    Type10 = 10,
    Type11 = 11,
    Type12 = 12,
    Type13 = 13,
    Type14 = 14,
    Type15 = 15,
    Type16 = 16,
    Type17 = 17,
    Type18 = 18,
    Type19 = 19,
    Type20 = 20,
    Type21 = 21,
    Type22 = 22,
    Type23 = 23,
    Type24 = 24,
    Type25 = 25,
    Type26 = 26,
    Type27 = 27,
    Type28 = 28,
    Type29 = 29,
    Type30 = 30,
    Type31 = 31,
    Type32 = 32,
    Type33 = 33,
    Type34 = 34,
    Type35 = 35,
    Type36 = 36,
    Type37 = 37,
    Type38 = 38,
    Type39 = 39,
    Type40 = 40,
}

const SOIL_LABELS: [&str; 40] = [
    "Soil_Type_1",
    "Soil_Type_2",
    "Soil_Type_3",
    "Soil_Type_4",
    "Soil_Type_5",
    "Soil_Type_6",
    "Soil_Type_7",
    "Soil_Type_8",
    "Soil_Type_9",
    "Soil_Type_10",
    "Soil_Type_11",
    "Soil_Type_12",
    "Soil_Type_13",
    "Soil_Type_14",
    "Soil_Type_15",
    "Soil_Type_16",
    "Soil_Type_17",
    "Soil_Type_18",
    "Soil_Type_19",
    "Soil_Type_20",
    "Soil_Type_21",
    "Soil_Type_22",
    "Soil_Type_23",
    "Soil_Type_24",
    "Soil_Type_25",
    "Soil_Type_26",
    "Soil_Type_27",
    "Soil_Type_28",
    "Soil_Type_29",
    "Soil_Type_30",
    "Soil_Type_31",
    "Soil_Type_32",
    "Soil_Type_33",
    "Soil_Type_34",
    "Soil_Type_35",
    "Soil_Type_36",
    "Soil_Type_37",
    "Soil_Type_38",
    "Soil_Type_39",
    "Soil_Type_40",
];

impl SoilType {
    pub const ALL: [SoilType; 40] = [
        SoilType::Type1,
        SoilType::Type2,
        SoilType::Type3,
        SoilType::Type4,
        SoilType::Type5,
        SoilType::Type6,
        SoilType::Type7,
        SoilType::Type8,
        SoilType::Type9,
        SoilType::Type10,
        SoilType::Type11,
        SoilType::Type12,
        SoilType::Type13,
        SoilType::Type14,
        SoilType::Type15,
        SoilType::Type16,
        SoilType::Type17,
        SoilType::Type18,
        SoilType::Type19,
        SoilType::Type20,
        SoilType::Type21,
        SoilType::Type22,
        SoilType::Type23,
        SoilType::Type24,
        SoilType::Type25,
        SoilType::Type26,
        SoilType::Type27,
        SoilType::Type28,
        SoilType::Type29,
        SoilType::Type30,
        SoilType::Type31,
        SoilType::Type32,
        SoilType::Type33,
        SoilType::Type34,
        SoilType::Type35,
        SoilType::Type36,
        SoilType::Type37,
        SoilType::Type38,
        SoilType::Type39,
        SoilType::Type40,
    ];

    /// Soil survey code, 1..=40.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Training-time column label.
    pub fn label(self) -> &'static str {
        SOIL_LABELS[self as usize - 1]
    }

    /// Index of this soil type's indicator column in the full schema.
    pub fn column_index(self) -> usize {
        SOIL_OFFSET + self as usize - 1
    }

    /// Parse a training-time label; unknown labels fail loudly.
    pub fn from_label(label: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.label() == label)
            .ok_or_else(|| EcotypeError::UnknownSoilType(label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_width_accounts_for_every_block() {
        assert_eq!(
            NUMERIC_WIDTH + WildernessArea::ALL.len() + SoilType::ALL.len(),
            COLUMN_COUNT
        );
    }

    #[test]
    fn column_indices_are_distinct_and_in_range() {
        let mut seen = [false; COLUMN_COUNT];
        for name in NUMERIC_COLUMNS {
            let i = column_index(name).expect("numeric column must resolve");
            assert!(!seen[i], "duplicate index {i} for {name}");
            seen[i] = true;
        }
        for w in WildernessArea::ALL {
            let i = w.column_index();
            assert!(!seen[i], "duplicate index {i} for {}", w.label());
            seen[i] = true;
        }
        for s in SoilType::ALL {
            let i = s.column_index();
            assert!(!seen[i], "duplicate index {i} for {}", s.label());
            seen[i] = true;
        }
        assert!(seen.iter().all(|&b| b), "every schema index must be covered");
    }

    #[test]
    fn wilderness_labels_round_trip() {
        for w in WildernessArea::ALL {
            assert_eq!(WildernessArea::from_label(w.label()).unwrap(), w);
        }
    }

    #[test]
    fn soil_labels_round_trip() {
        for s in SoilType::ALL {
            assert_eq!(SoilType::from_label(s.label()).unwrap(), s);
            assert_eq!(s.label(), format!("Soil_Type_{}", s.code()));
        }
    }

    #[test]
    fn unknown_wilderness_label_is_rejected() {
        let err = WildernessArea::from_label("Wilderness_Area_5").unwrap_err();
        assert!(matches!(err, EcotypeError::UnknownWildernessArea(_)));
    }

    #[test]
    fn unknown_soil_label_is_rejected() {
        for bad in ["Soil_Type_0", "Soil_Type_41", "Soil_Type", "granite"] {
            let err = SoilType::from_label(bad).unwrap_err();
            assert!(matches!(err, EcotypeError::UnknownSoilType(_)), "{bad}");
        }
    }

    #[test]
    fn column_index_rejects_names_outside_schema() {
        assert_eq!(column_index("Cover_Type"), None);
        assert_eq!(column_index("elevation"), None);
    }
}
