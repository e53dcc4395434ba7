use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::framework::context::GameContext;
use crate::framework::game_loop::LoopControl;

pub use egui::Key;

/// Toggles the display mode; handled by the framework itself.
pub const FULLSCREEN_KEY: Key = Key::F11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
}

impl From<egui::PointerButton> for MouseButton {
    fn from(button: egui::PointerButton) -> Self {
        match button {
            egui::PointerButton::Primary => MouseButton::Left,
            egui::PointerButton::Secondary => MouseButton::Right,
            egui::PointerButton::Middle => MouseButton::Middle,
            egui::PointerButton::Extra1 => MouseButton::Back,
            egui::PointerButton::Extra2 => MouseButton::Forward,
        }
    }
}

/// Raw input as delivered by the window; coordinates are surface pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    MouseDown { button: MouseButton, x: i32, y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn from_key(key: Key) -> Option<Direction> {
        match key {
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowDown => Some(Direction::Down),
            Key::ArrowLeft => Some(Direction::Left),
            Key::ArrowRight => Some(Direction::Right),
            _ => None,
        }
    }

    /// (row, column) step
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

pub type KeyHandler<G> = Rc<dyn Fn(&mut G, &mut GameContext, Key)>;
pub type ClickHandler<G> = Rc<dyn Fn(&mut G, &mut GameContext, i32, i32)>;

/// One handler per key (or button); binding again replaces the previous handler.
pub struct InputRouter<G> {
    key_down: FxHashMap<Key, KeyHandler<G>>,
    key_up: FxHashMap<Key, KeyHandler<G>>,
    clicks: FxHashMap<MouseButton, ClickHandler<G>>,
}

impl<G> Default for InputRouter<G> {
    fn default() -> Self {
        Self {
            key_down: FxHashMap::default(),
            key_up: FxHashMap::default(),
            clicks: FxHashMap::default(),
        }
    }
}

impl<G> InputRouter<G> {
    pub fn new() -> Self { Self::default() }

    pub fn bind_key(
        &mut self,
        key: Key,
        handler: impl Fn(&mut G, &mut GameContext, Key) + 'static,
    ) {
        self.key_down.insert(key, Rc::new(handler));
    }

    pub fn bind_keys(
        &mut self,
        keys: &[Key],
        handler: impl Fn(&mut G, &mut GameContext, Key) + 'static,
    ) {
        let handler: KeyHandler<G> = Rc::new(handler);
        for key in keys {
            self.key_down.insert(*key, Rc::clone(&handler));
        }
    }

    pub fn bind_key_up(
        &mut self,
        key: Key,
        handler: impl Fn(&mut G, &mut GameContext, Key) + 'static,
    ) {
        self.key_up.insert(key, Rc::new(handler));
    }

    pub fn bind_keys_up(
        &mut self,
        keys: &[Key],
        handler: impl Fn(&mut G, &mut GameContext, Key) + 'static,
    ) {
        let handler: KeyHandler<G> = Rc::new(handler);
        for key in keys {
            self.key_up.insert(*key, Rc::clone(&handler));
        }
    }

    pub fn bind_click(
        &mut self,
        button: MouseButton,
        handler: impl Fn(&mut G, &mut GameContext, i32, i32) + 'static,
    ) {
        self.clicks.insert(button, Rc::new(handler));
    }

    /// Invokes the handler bound to the event, if any. Unbound input is ignored.
    pub fn dispatch(
        &self,
        event: InputEvent,
        game: &mut G,
        ctx: &mut GameContext,
    ) -> LoopControl {
        match event {
            InputEvent::Quit => return LoopControl::Exit,
            InputEvent::KeyDown(key) => {
                if let Some(handler) = self.key_down.get(&key) {
                    handler(game, ctx, key);
                }
                if key == FULLSCREEN_KEY {
                    ctx.toggle_fullscreen();
                }
            }
            InputEvent::KeyUp(key) => {
                if let Some(handler) = self.key_up.get(&key) {
                    handler(game, ctx, key);
                }
            }
            InputEvent::MouseDown { button, x, y } => match self.clicks.get(&button) {
                Some(handler) => handler(game, ctx, x, y),
                None => log::trace!("no handler for {button:?} click at {x}/{y}"),
            },
        }
        LoopControl::Continue
    }
}
