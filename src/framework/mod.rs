//! Minimal event-driven game loop: input routing, frame pacing and a retained
//! drawing surface, with an eframe window as the default front end.

pub mod app;
pub mod canvas;
pub mod context;
pub mod game_loop;
pub mod input;

pub use app::run_windowed;
pub use canvas::{rgb_from_hex, Canvas, Primitive};
pub use context::GameContext;
pub use game_loop::{EventSource, FrameClock, Game, GameLoop, LoopControl, DEFAULT_FPS};
pub use input::{Direction, InputEvent, InputRouter, Key, MouseButton, FULLSCREEN_KEY};
