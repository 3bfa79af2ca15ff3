//! Tile kinds and height classification.

use serde::{Deserialize, Serialize};

/// Blended heights below this are water.
pub const WATER_LEVEL: f64 = 0.5;

/// Blended heights below this (and at or above [`WATER_LEVEL`]) are sand.
pub const SAND_LEVEL: f64 = WATER_LEVEL + 0.1;

/// Terrain classification of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileKind {
    Grass = 0,
    Sand = 1,
    Water = 2,
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TileKind::Grass => "grass",
            TileKind::Sand => "sand",
            TileKind::Water => "water",
        };
        f.write_str(name)
    }
}

/// One generated tile. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    /// The blended height the kind was classified from.
    pub height: f64,
}

/// Partition a blended height into exactly three bands.
///
/// Comparisons are strict: a height of exactly [`WATER_LEVEL`] is sand.
#[must_use]
pub fn classify(height: f64) -> TileKind {
    if height < WATER_LEVEL {
        TileKind::Water
    } else if height < SAND_LEVEL {
        TileKind::Sand
    } else {
        TileKind::Grass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_level_tie_is_sand() {
        assert_eq!(classify(0.5), TileKind::Sand);
    }

    #[test]
    fn test_bands() {
        assert_eq!(classify(-1.0), TileKind::Water);
        assert_eq!(classify(0.499_999), TileKind::Water);
        assert_eq!(classify(0.55), TileKind::Sand);
        assert_eq!(classify(SAND_LEVEL), TileKind::Grass);
        assert_eq!(classify(3.0), TileKind::Grass);
    }

    #[test]
    fn test_sand_level_constant() {
        assert!((SAND_LEVEL - 0.6).abs() < 1e-12);
    }
}
