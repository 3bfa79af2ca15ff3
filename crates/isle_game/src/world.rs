//! World loading: terrain, tile batch and player entities.

use isle_component::{Engine, Id};
use isle_math::Transform;
use isle_terrain::{Tilemap, WorldParams, generate};
use tracing::{info, warn};

use crate::assets::{SpriteHandle, SpriteNames, Spritesheet};
use crate::components::{Input, Keybinds, Sprite};
use crate::error::AssetError;
use crate::tile_batch::{TileBatch, TileSprites};

/// Everything produced at load time.
#[derive(Debug)]
pub struct LoadedWorld {
    pub tilemap: Tilemap,
    pub tiles: TileBatch,
    /// The WASD player first, the arrow-key player second.
    pub players: [Id; 2],
}

/// Create a controllable, drawable entity.
pub fn spawn_player(
    engine: &mut Engine,
    at: Transform,
    sprite: SpriteHandle,
    keybinds: Keybinds,
) -> Id {
    let id = engine.new_id();
    engine.write(id, at);
    engine.write(id, Input::default());
    engine.write(id, Sprite(sprite));
    engine.write(id, keybinds);
    id
}

/// Generate the terrain, batch it, and spawn both players at the map
/// centre.
///
/// Every sprite name is resolved before anything is written to `engine`.
///
/// # Errors
///
/// Returns [`AssetError::UnknownSprite`] if a configured sprite name is
/// missing from the sheet.
pub fn load_world(
    engine: &mut Engine,
    params: &WorldParams,
    sheet: &Spritesheet,
    names: &SpriteNames,
) -> Result<LoadedWorld, AssetError> {
    let tile_sprites = TileSprites::resolve(sheet, names)?;
    let first = sheet.get(&names.first_player)?;
    let second = sheet.get(&names.second_player)?;
    warn_on_tile_frame_mismatch(sheet, &tile_sprites, params.tile_size);

    let tilemap = generate(params);
    let tiles = TileBatch::build(&tilemap, &tile_sprites);

    let centre = params.world_centre();
    let spawn = Transform::new(centre, centre);
    let players = [
        spawn_player(engine, spawn, first, Keybinds::WASD),
        spawn_player(engine, spawn, second, Keybinds::ARROWS),
    ];

    info!(
        map_size = params.map_size,
        tile_size = params.tile_size,
        tiles = tiles.len(),
        spawn_x = centre,
        spawn_y = centre,
        "world loaded"
    );

    Ok(LoadedWorld {
        tilemap,
        tiles,
        players,
    })
}

/// Tiles are laid out `tile_size` apart; frames of another size leave gaps
/// or overlap.
fn warn_on_tile_frame_mismatch(sheet: &Spritesheet, sprites: &TileSprites, tile_size: u32) {
    let expected = f64::from(tile_size);
    for handle in [sprites.grass, sprites.sand, sprites.water] {
        let Some(rect) = sheet.rect(handle) else {
            continue;
        };
        if rect.w != expected || rect.h != expected {
            warn!(
                sprite = handle.0,
                w = rect.w,
                h = rect.h,
                tile_size,
                "tile frame does not match tile size"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::tests::MANIFEST;

    #[test]
    fn test_load_world_spawns_players_at_centre() {
        let mut engine = Engine::new();
        let sheet = Spritesheet::from_json(MANIFEST).unwrap();
        let params = WorldParams::new(12345, 40, 16);

        let world = load_world(&mut engine, &params, &sheet, &SpriteNames::default()).unwrap();

        assert_eq!(world.tiles.len(), 40 * 40);
        assert_eq!(world.tilemap.width(), 40);
        for id in world.players {
            assert_eq!(engine.read::<Transform>(id), Some(Transform::new(320.0, 320.0)));
            assert_eq!(engine.read::<Input>(id), Some(Input::default()));
        }
        assert_eq!(engine.read::<Keybinds>(world.players[0]), Some(Keybinds::WASD));
        assert_eq!(
            engine.read::<Keybinds>(world.players[1]),
            Some(Keybinds::ARROWS)
        );
        assert_eq!(
            engine.read::<Sprite>(world.players[0]),
            Some(Sprite(sheet.get("purple.png").unwrap()))
        );
    }

    #[test]
    fn test_missing_player_sprite_writes_nothing() {
        let mut engine = Engine::new();
        let sheet = Spritesheet::from_json(MANIFEST).unwrap();
        let names = SpriteNames {
            second_player: "blue.png".to_string(),
            ..SpriteNames::default()
        };

        let result = load_world(&mut engine, &WorldParams::new(1, 8, 16), &sheet, &names);

        assert!(matches!(result, Err(AssetError::UnknownSprite(_))));
        assert_eq!(engine.entity_count(), 0);
    }
}
