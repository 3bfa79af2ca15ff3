//! Tilemap batching.
//!
//! The tilemap never changes after load, so its draws are computed once and
//! replayed to the sink every frame.

use isle_math::DVec2;
use isle_terrain::{TileKind, Tilemap};

use crate::assets::{SpriteHandle, SpriteNames, Spritesheet};
use crate::draw::DrawSink;
use crate::error::AssetError;

/// Sprite used for each tile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSprites {
    pub grass: SpriteHandle,
    pub sand: SpriteHandle,
    pub water: SpriteHandle,
}

impl TileSprites {
    /// Resolve the tile sprites by name.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::UnknownSprite`] for the first missing name.
    pub fn resolve(sheet: &Spritesheet, names: &SpriteNames) -> Result<Self, AssetError> {
        Ok(Self {
            grass: sheet.get(&names.grass)?,
            sand: sheet.get(&names.sand)?,
            water: sheet.get(&names.water)?,
        })
    }

    /// Sprite drawn for tiles of `kind`.
    #[must_use]
    pub fn for_kind(&self, kind: TileKind) -> SpriteHandle {
        match kind {
            TileKind::Grass => self.grass,
            TileKind::Sand => self.sand,
            TileKind::Water => self.water,
        }
    }
}

/// Precomputed tile draws, in world units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileBatch {
    draws: Vec<(SpriteHandle, DVec2)>,
}

impl TileBatch {
    /// One draw per tile, placed at `(x * tile_size, y * tile_size)`.
    #[must_use]
    pub fn build(tilemap: &Tilemap, sprites: &TileSprites) -> Self {
        let tile_size = f64::from(tilemap.tile_size());
        let draws = tilemap
            .iter()
            .map(|(x, y, tile)| {
                let position = DVec2::new(x as f64 * tile_size, y as f64 * tile_size);
                (sprites.for_kind(tile.kind), position)
            })
            .collect();
        Self { draws }
    }

    /// Number of tile draws per frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    /// Returns `true` for an empty tilemap.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Replay every tile draw.
    pub fn draw(&self, sink: &mut impl DrawSink) {
        for &(sprite, position) in &self.draws {
            sink.draw(sprite, position);
        }
    }
}

#[cfg(test)]
mod tests {
    use isle_terrain::Tile;

    use super::*;
    use crate::draw::DrawLog;

    fn sprites() -> TileSprites {
        TileSprites {
            grass: SpriteHandle(0),
            sand: SpriteHandle(1),
            water: SpriteHandle(2),
        }
    }

    #[test]
    fn test_batch_places_tiles_on_grid() {
        let tile = |kind| Tile { kind, height: 0.0 };
        let map = Tilemap::new(
            2,
            16,
            vec![
                tile(TileKind::Water),
                tile(TileKind::Sand),
                tile(TileKind::Grass),
                tile(TileKind::Water),
            ],
        );
        let batch = TileBatch::build(&map, &sprites());
        assert_eq!(batch.len(), 4);

        let mut log = DrawLog::default();
        batch.draw(&mut log);
        assert_eq!(
            log.draws,
            vec![
                (SpriteHandle(2), DVec2::new(0.0, 0.0)),
                (SpriteHandle(1), DVec2::new(0.0, 16.0)),
                (SpriteHandle(0), DVec2::new(16.0, 0.0)),
                (SpriteHandle(2), DVec2::new(16.0, 16.0)),
            ]
        );
    }

    #[test]
    fn test_resolve_reports_missing_tile_sprite() {
        let sheet = Spritesheet::from_json(
            r#"{ "ImageName": "x.png", "Frames": {
                "grass.png": { "Frame": { "X": 0, "Y": 0, "W": 1, "H": 1 } } } }"#,
        )
        .unwrap();
        let err = TileSprites::resolve(&sheet, &SpriteNames::default()).unwrap_err();
        assert!(matches!(err, AssetError::UnknownSprite(ref name) if name == "sand.png"));
    }
}
