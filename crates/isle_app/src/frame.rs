//! Frame wiring for the headless client.
//!
//! Three groups run every frame, in this order:
//!
//! 1. `input`: poll the device, check for quit, clear the sink, capture
//!    per-entity input.
//! 2. `physics`: movement.
//! 3. `render`: tiles, sprites, present.

use std::cell::RefCell;
use std::rc::Rc;

use isle_game::systems::{
    capture_input_system, clear_system, draw_system, physics_group, present_system, quit_system,
};
use isle_game::{Button, DrawSink, ScriptedInput, TileBatch};
use isle_system::{ShutdownSignal, System, SystemGroup};

/// Frames each leg of the demo walk lasts.
const LEG_FRAMES: usize = 30;

/// A short walk for both players, then Escape.
///
/// The WASD player traces a square; the arrow player walks the same square
/// mirrored.
#[must_use]
pub fn demo_script() -> ScriptedInput {
    let legs = [
        [Button::W, Button::Left],
        [Button::D, Button::Down],
        [Button::S, Button::Right],
        [Button::A, Button::Up],
    ];
    let mut frames: Vec<Vec<Button>> = legs
        .iter()
        .flat_map(|leg| std::iter::repeat_n(leg.to_vec(), LEG_FRAMES))
        .collect();
    frames.push(vec![Button::Escape]);
    ScriptedInput::new(frames)
}

fn poll_system(input: Rc<RefCell<ScriptedInput>>) -> System {
    System::new("PollInput", move |_, _| input.borrow_mut().advance())
}

/// Build the client's system groups.
pub fn build_groups<D: DrawSink + 'static>(
    input: Rc<RefCell<ScriptedInput>>,
    sink: Rc<RefCell<D>>,
    tiles: TileBatch,
    signal: ShutdownSignal,
) -> Vec<SystemGroup> {
    vec![
        SystemGroup::new(
            "input",
            vec![
                poll_system(Rc::clone(&input)),
                quit_system(Rc::clone(&input), signal),
                clear_system(Rc::clone(&sink)),
                capture_input_system(input),
            ],
        ),
        physics_group(),
        SystemGroup::new(
            "render",
            vec![draw_system(Rc::clone(&sink), tiles), present_system(sink)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use isle_component::Engine;
    use isle_game::{DrawLog, Keybinds, Sprite, SpriteHandle};
    use isle_math::Transform;
    use isle_system::{GameLoop, LoopConfig};

    use super::*;

    #[test]
    fn test_group_order() {
        let groups = build_groups(
            Rc::new(RefCell::new(ScriptedInput::default())),
            Rc::new(RefCell::new(DrawLog::default())),
            TileBatch::default(),
            ShutdownSignal::new(),
        );
        let names: Vec<_> = groups.iter().map(|g| g.name().to_string()).collect();
        assert_eq!(names, ["input", "physics", "render"]);

        let input: Vec<_> = groups[0].system_names().collect();
        assert_eq!(input, ["PollInput", "ExitGame", "Clear", "CaptureInput"]);
        let render: Vec<_> = groups[2].system_names().collect();
        assert_eq!(render, ["Draw", "Present"]);
    }

    #[test]
    fn test_demo_walks_a_square_then_quits() {
        let mut engine = Engine::new();
        let mut spawn = |keybinds: Keybinds| {
            let id = engine.new_id();
            engine.write(id, Transform::new(100.0, 100.0));
            engine.write(id, keybinds);
            engine.write(id, Sprite(SpriteHandle(0)));
            id
        };
        let wasd = spawn(Keybinds::WASD);
        let arrows = spawn(Keybinds::ARROWS);

        let sink = Rc::new(RefCell::new(DrawLog::default()));
        let signal = ShutdownSignal::new();
        let groups = build_groups(
            Rc::new(RefCell::new(demo_script())),
            Rc::clone(&sink),
            TileBatch::default(),
            signal.clone(),
        );
        let mut game_loop = GameLoop::new(groups, signal, LoopConfig::default());

        let frames = game_loop.run(&mut engine);

        assert_eq!(frames, 4 * LEG_FRAMES as u64 + 1);
        assert_eq!(sink.borrow().frames_presented, frames);
        for id in [wasd, arrows] {
            assert_eq!(
                engine.read::<Transform>(id),
                Some(Transform::new(100.0, 100.0))
            );
        }
    }
}
