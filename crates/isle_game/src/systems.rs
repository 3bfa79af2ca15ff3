//! Gameplay systems.
//!
//! The free functions do the work against the registry; the `*_system`
//! constructors wrap them as named [`System`]s with their peripherals
//! captured. Peripherals are shared between systems of one loop through
//! `Rc<RefCell<_>>`: the loop is single-threaded and no borrow outlives a
//! single update.

use std::cell::RefCell;
use std::rc::Rc;

use isle_component::Engine;
use isle_math::{DVec2, Transform};
use isle_system::{ShutdownSignal, System, SystemGroup};
use tracing::info;

use crate::components::{Input, Keybinds, Sprite};
use crate::draw::DrawSink;
use crate::input::{Button, InputSource};
use crate::tile_batch::TileBatch;

/// World units moved per frame per active direction.
pub const MOVE_STEP: f64 = 2.0;

/// Write a fresh [`Input`] for every entity holding [`Keybinds`].
///
/// All four directions start released and are then polled, so nothing
/// carries over from the previous frame. An entity with bindings but no
/// `Input` yet gets one.
pub fn capture_input(engine: &mut Engine, source: &impl InputSource) {
    engine.each::<Keybinds>(|engine, id, keybinds| {
        let input = Input {
            up: source.is_pressed(keybinds.up),
            down: source.is_pressed(keybinds.down),
            left: source.is_pressed(keybinds.left),
            right: source.is_pressed(keybinds.right),
        };
        engine.write(id, input);
    });
}

/// Step the [`Transform`] of every entity holding [`Input`].
///
/// Entities without a transform are skipped. Diagonals are not normalized.
pub fn apply_movement(engine: &mut Engine) {
    engine.each::<Input>(|engine, id, input| {
        let Some(transform) = engine.read::<Transform>(id) else {
            return;
        };

        let mut step = DVec2::ZERO;
        if input.left {
            step.x -= MOVE_STEP;
        }
        if input.right {
            step.x += MOVE_STEP;
        }
        if input.up {
            step.y += MOVE_STEP;
        }
        if input.down {
            step.y -= MOVE_STEP;
        }

        engine.write(id, transform.translated(step));
    });
}

/// Draw every entity holding both a [`Sprite`] and a [`Transform`].
pub fn draw_sprites(engine: &Engine, sink: &mut impl DrawSink) {
    for (id, Sprite(handle)) in engine.iter::<Sprite>() {
        let Some(transform) = engine.read::<Transform>(id) else {
            continue;
        };
        sink.draw(*handle, transform.position);
    }
}

/// Wraps [`capture_input`] as the `CaptureInput` system.
pub fn capture_input_system<I: InputSource + 'static>(source: Rc<RefCell<I>>) -> System {
    System::new("CaptureInput", move |engine, _| {
        capture_input(engine, &*source.borrow());
    })
}

/// Sets `signal` on the frame Escape goes down.
pub fn quit_system<I: InputSource + 'static>(
    source: Rc<RefCell<I>>,
    signal: ShutdownSignal,
) -> System {
    System::new("ExitGame", move |_, _| {
        if source.borrow().was_just_pressed(Button::Escape) {
            info!("quit requested");
            signal.set();
        }
    })
}

/// Wraps [`apply_movement`] as the `HandleInput` system.
pub fn movement_system() -> System {
    System::new("HandleInput", |engine, _| apply_movement(engine))
}

/// The physics group: movement only.
#[must_use]
pub fn physics_group() -> SystemGroup {
    SystemGroup::new("physics", vec![movement_system()])
}

/// Clears the sink before any draw of the frame.
pub fn clear_system<D: DrawSink + 'static>(sink: Rc<RefCell<D>>) -> System {
    System::new("Clear", move |_, _| sink.borrow_mut().clear())
}

/// Draws the tile batch, then sprites on top.
pub fn draw_system<D: DrawSink + 'static>(sink: Rc<RefCell<D>>, tiles: TileBatch) -> System {
    System::new("Draw", move |engine, _| {
        let mut sink = sink.borrow_mut();
        tiles.draw(&mut *sink);
        draw_sprites(engine, &mut *sink);
    })
}

/// Presents the frame once everything is drawn.
pub fn present_system<D: DrawSink + 'static>(sink: Rc<RefCell<D>>) -> System {
    System::new("Present", move |_, _| sink.borrow_mut().present())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use isle_component::Id;
    use isle_math::DVec2;
    use isle_system::{GameLoop, LoopConfig};

    use super::*;
    use crate::assets::SpriteHandle;
    use crate::draw::DrawLog;
    use crate::input::{KeyboardState, ScriptedInput};

    fn mover(engine: &mut Engine, x: f64, y: f64, input: Input) -> Id {
        let id = engine.new_id();
        engine.write(id, Transform::new(x, y));
        engine.write(id, input);
        id
    }

    #[test]
    fn test_left_moves_one_step() {
        let mut engine = Engine::new();
        let id = mover(
            &mut engine,
            10.0,
            20.0,
            Input {
                left: true,
                ..Input::default()
            },
        );
        apply_movement(&mut engine);
        assert_eq!(engine.read::<Transform>(id), Some(Transform::new(8.0, 20.0)));
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let mut engine = Engine::new();
        let id = mover(
            &mut engine,
            10.0,
            20.0,
            Input {
                left: true,
                up: true,
                ..Input::default()
            },
        );
        apply_movement(&mut engine);
        assert_eq!(
            engine.read::<Transform>(id),
            Some(Transform::new(10.0 - MOVE_STEP, 20.0 + MOVE_STEP))
        );
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut engine = Engine::new();
        let input = Input {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        let id = mover(&mut engine, 1.0, 1.0, input);
        apply_movement(&mut engine);
        assert_eq!(engine.read::<Transform>(id), Some(Transform::new(1.0, 1.0)));
    }

    #[test]
    fn test_movement_skips_entity_without_transform() {
        let mut engine = Engine::new();
        let id = engine.new_id();
        engine.write(
            id,
            Input {
                right: true,
                ..Input::default()
            },
        );
        apply_movement(&mut engine);
        assert_eq!(engine.read::<Transform>(id), None);
    }

    #[test]
    fn test_capture_input_overwrites_previous_frame() {
        let mut engine = Engine::new();
        let id = engine.new_id();
        engine.write(id, Keybinds::WASD);
        engine.write(
            id,
            Input {
                up: true,
                down: true,
                left: true,
                right: true,
            },
        );

        let mut keys = KeyboardState::new();
        keys.begin_frame([Button::D]);
        capture_input(&mut engine, &keys);

        assert_eq!(
            engine.read::<Input>(id),
            Some(Input {
                right: true,
                ..Input::default()
            })
        );
    }

    #[test]
    fn test_capture_input_adds_input_to_keybinds_only_entity() {
        let mut engine = Engine::new();
        let id = engine.new_id();
        engine.write(id, Keybinds::WASD);
        assert_eq!(engine.read::<Input>(id), None);

        let mut keys = KeyboardState::new();
        keys.begin_frame([Button::W]);
        capture_input(&mut engine, &keys);

        assert_eq!(
            engine.read::<Input>(id),
            Some(Input {
                up: true,
                ..Input::default()
            })
        );
    }

    #[test]
    fn test_capture_input_uses_each_entitys_bindings() {
        let mut engine = Engine::new();
        let wasd = engine.new_id();
        engine.write(wasd, Keybinds::WASD);
        let arrows = engine.new_id();
        engine.write(arrows, Keybinds::ARROWS);
        let unbound = engine.new_id();

        let mut keys = KeyboardState::new();
        keys.begin_frame([Button::W, Button::Left]);
        capture_input(&mut engine, &keys);

        assert_eq!(
            engine.read::<Input>(wasd),
            Some(Input {
                up: true,
                ..Input::default()
            })
        );
        assert_eq!(
            engine.read::<Input>(arrows),
            Some(Input {
                left: true,
                ..Input::default()
            })
        );
        assert_eq!(engine.read::<Input>(unbound), None);
    }

    #[test]
    fn test_draw_sprites_skips_entities_without_transform() {
        let mut engine = Engine::new();
        let placed = engine.new_id();
        engine.write(placed, Sprite(SpriteHandle(3)));
        engine.write(placed, Transform::new(4.0, 5.0));
        let floating = engine.new_id();
        engine.write(floating, Sprite(SpriteHandle(7)));

        let mut log = DrawLog::default();
        draw_sprites(&engine, &mut log);

        assert_eq!(log.draws, vec![(SpriteHandle(3), DVec2::new(4.0, 5.0))]);
    }

    #[test]
    fn test_frame_renders_current_frame_position() {
        let mut engine = Engine::new();
        let player = engine.new_id();
        engine.write(player, Transform::new(0.0, 0.0));
        engine.write(player, Input::default());
        engine.write(player, Keybinds::ARROWS);
        engine.write(player, Sprite(SpriteHandle(1)));

        let input = Rc::new(RefCell::new(ScriptedInput::new([
            vec![Button::Right],
            vec![Button::Right, Button::Up],
        ])));
        let sink = Rc::new(RefCell::new(DrawLog::default()));
        let signal = ShutdownSignal::new();

        let poll = {
            let input = Rc::clone(&input);
            System::new("PollInput", move |_, _| input.borrow_mut().advance())
        };
        let groups = vec![
            SystemGroup::new(
                "input",
                vec![
                    poll,
                    quit_system(Rc::clone(&input), signal.clone()),
                    clear_system(Rc::clone(&sink)),
                    capture_input_system(Rc::clone(&input)),
                ],
            ),
            physics_group(),
            SystemGroup::new(
                "render",
                vec![
                    draw_system(Rc::clone(&sink), TileBatch::default()),
                    present_system(Rc::clone(&sink)),
                ],
            ),
        ];
        let mut game_loop = GameLoop::new(groups, signal, LoopConfig::default());

        game_loop.tick(&mut engine, Duration::ZERO);
        assert_eq!(
            sink.borrow().draws,
            vec![(SpriteHandle(1), DVec2::new(MOVE_STEP, 0.0))]
        );

        game_loop.tick(&mut engine, Duration::ZERO);
        assert_eq!(
            sink.borrow().draws,
            vec![(SpriteHandle(1), DVec2::new(2.0 * MOVE_STEP, MOVE_STEP))]
        );
        assert_eq!(sink.borrow().frames_presented, 2);
    }

    #[test]
    fn test_escape_stops_loop_once() {
        let input = Rc::new(RefCell::new(ScriptedInput::new([
            vec![],
            vec![],
            vec![Button::Escape],
        ])));
        let signal = ShutdownSignal::new();
        let poll = {
            let input = Rc::clone(&input);
            System::new("PollInput", move |_, _| input.borrow_mut().advance())
        };
        let groups = vec![SystemGroup::new(
            "input",
            vec![poll, quit_system(Rc::clone(&input), signal.clone())],
        )];

        let mut game_loop = GameLoop::new(groups, signal, LoopConfig::default());
        assert_eq!(game_loop.run(&mut Engine::new()), 3);
    }
}
