//! Elevation → colour banding for terrain maps.
//!
//! This is one example policy; the renderer accepts any `Fn(f32, f32) -> Rgb`.

use serde::{Deserialize, Serialize};

pub type Rgb = [u8; 3];

// ── Band thresholds ──────────────────────────────────────────────────────────

const ABYSS_MAX: f32 = 0.05;
const WATER_MAX: f32 = 0.3;
const SHORE_MAX: f32 = 0.525;
const LOWLAND_MAX: f32 = 0.65;
/// Detail values above this pick the darker highland green.
const FOREST_DETAIL: f32 = 0.45;

/// Terrain band a composed elevation value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainBand {
    Abyss,
    Water,
    Shore,
    Lowland,
    Highland,
}

impl TerrainBand {
    /// All bands from lowest to highest.
    pub const ALL: [TerrainBand; 5] = [
        TerrainBand::Abyss,
        TerrainBand::Water,
        TerrainBand::Shore,
        TerrainBand::Lowland,
        TerrainBand::Highland,
    ];

    /// Position of this band in `ALL`.
    pub fn index(self) -> usize {
        match self {
            TerrainBand::Abyss => 0,
            TerrainBand::Water => 1,
            TerrainBand::Shore => 2,
            TerrainBand::Lowland => 3,
            TerrainBand::Highland => 4,
        }
    }
}

pub fn band(value: f32) -> TerrainBand {
    if value < ABYSS_MAX {
        TerrainBand::Abyss
    } else if value < WATER_MAX {
        TerrainBand::Water
    } else if value < SHORE_MAX {
        TerrainBand::Shore
    } else if value < LOWLAND_MAX {
        TerrainBand::Lowland
    } else {
        TerrainBand::Highland
    }
}

/// Colour for an elevation `value`; `detail` only matters in the highlands.
pub fn classify(value: f32, detail: f32) -> Rgb {
    match band(value) {
        TerrainBand::Abyss => [0, 0, 0],
        TerrainBand::Water => {
            // Deeper water is darker.
            let gradient = (value - ABYSS_MAX) / (WATER_MAX - ABYSS_MAX);
            [0, 0, channel(gradient * 220.0)]
        }
        TerrainBand::Shore => {
            // Steep fifth-power ramp from blue to sand; saturates well before
            // the top of the band.
            let gradient = ((value - WATER_MAX) / 0.15).powi(5);
            [channel(gradient * 255.0), channel(gradient * 248.0), 220]
        }
        TerrainBand::Lowland => [10, 150, 10],
        TerrainBand::Highland => {
            if detail > FOREST_DETAIL {
                [28, 82, 36]
            } else {
                [10, 140, 10]
            }
        }
    }
}

/// Floor to an 8-bit channel; `as` saturates out-of-range values.
#[inline]
fn channel(v: f32) -> u8 {
    v.floor() as u8
}
