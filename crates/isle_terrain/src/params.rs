//! World generation parameters.
//!
//! These are the only persisted part of a world: the tile grid is fully
//! reproducible from them.

use serde::{Deserialize, Serialize};

use crate::error::TerrainError;
use crate::noise_map::Octave;

/// The reference octave stack: large landmasses with fine detail on top.
pub const REFERENCE_OCTAVES: [Octave; 5] = [
    Octave::new(0.02, 0.6),
    Octave::new(0.05, 0.3),
    Octave::new(0.1, 0.07),
    Octave::new(0.2, 0.02),
    Octave::new(0.4, 0.01),
];

/// Redistribution exponent applied to the octave sum.
pub const REFERENCE_HEIGHT_EXPONENT: f64 = 0.8;

/// Exponent of the radial island falloff.
pub const REFERENCE_ISLAND_EXPONENT: f64 = 2.0;

/// Everything [`generate`](crate::generate) needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldParams {
    pub seed: u32,
    /// Tiles per side. Zero or negative produces an empty grid.
    pub map_size: i32,
    /// World-unit edge length of one tile.
    pub tile_size: u32,
    pub octaves: Vec<Octave>,
    pub height_exponent: f64,
    pub island_exponent: f64,
}

impl WorldParams {
    /// Reference parameters for the given seed and dimensions.
    #[must_use]
    pub fn new(seed: u32, map_size: i32, tile_size: u32) -> Self {
        Self {
            seed,
            map_size,
            tile_size,
            octaves: REFERENCE_OCTAVES.to_vec(),
            height_exponent: REFERENCE_HEIGHT_EXPONENT,
            island_exponent: REFERENCE_ISLAND_EXPONENT,
        }
    }

    /// Override the octave stack.
    #[must_use]
    pub fn with_octaves(mut self, octaves: impl Into<Vec<Octave>>) -> Self {
        self.octaves = octaves.into();
        self
    }

    /// Override the redistribution exponent.
    #[must_use]
    pub fn with_height_exponent(mut self, exponent: f64) -> Self {
        self.height_exponent = exponent;
        self
    }

    /// Override the island falloff exponent.
    #[must_use]
    pub fn with_island_exponent(mut self, exponent: f64) -> Self {
        self.island_exponent = exponent;
        self
    }

    /// Centre of the map in world units.
    #[must_use]
    pub fn world_centre(&self) -> f64 {
        let extent = i64::from(self.tile_size) * i64::from(self.map_size.max(0));
        (extent / 2) as f64
    }

    /// Encode to MessagePack.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::Encode`] if serialisation fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TerrainError> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    /// Decode from MessagePack.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::Decode`] if the bytes are not a valid encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TerrainError> {
        Ok(rmp_serde::from_slice(bytes)?)
    }
}

impl Default for WorldParams {
    fn default() -> Self {
        Self::new(12345, 1000, 16)
    }
}
