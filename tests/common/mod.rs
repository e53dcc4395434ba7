use std::collections::VecDeque;

use gomoku::framework::{EventSource, InputEvent, MouseButton};
use gomoku::gomoku::{Coord, SIDE};

/// Replays one batch of events per frame and quits when the script is exhausted.
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self { frames: frames.into() }
    }
}

impl EventSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

/// Left click in the middle of a board cell
pub fn click_cell((row, col): Coord) -> InputEvent {
    let half = (SIDE / 2) as i32;
    InputEvent::MouseDown {
        button: MouseButton::Left,
        x: col as i32 * SIDE as i32 + half,
        y: row as i32 * SIDE as i32 + half,
    }
}

pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
