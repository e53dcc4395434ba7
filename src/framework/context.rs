use egui::{Align2, Color32, Rect, Vec2};

use crate::framework::canvas::Canvas;

const SCORE_FONT_SIZE: f32 = 130.0;

/// Framework state shared by the loop, the input handlers and the game hooks.
///
/// Created once at startup and owned by the [`GameLoop`](super::GameLoop).
/// Window title and display mode are requests here; the front end applies them.
#[derive(Debug)]
pub struct GameContext {
    title: String,
    canvas: Canvas,
    fullscreen: bool,
    paused: bool,
    score: u32,
}

impl GameContext {
    pub fn new(
        title: impl Into<String>,
        size: Vec2,
    ) -> Self {
        Self {
            title: title.into(),
            canvas: Canvas::new(size),
            fullscreen: false,
            paused: false,
            score: 0,
        }
    }

    pub fn title(&self) -> &str { &self.title }

    pub fn set_title(
        &mut self,
        title: impl Into<String>,
    ) {
        self.title = title.into();
    }

    pub fn size(&self) -> Vec2 { self.canvas.size() }

    pub fn canvas(&self) -> &Canvas { &self.canvas }

    pub fn canvas_mut(&mut self) -> &mut Canvas { &mut self.canvas }

    pub fn is_fullscreen(&self) -> bool { self.fullscreen }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        log::debug!("fullscreen: {}", self.fullscreen);
    }

    /// Advisory only: the loop keeps calling update/draw while paused.
    pub fn is_paused(&self) -> bool { self.paused }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("paused: {}", self.paused);
    }

    pub fn score(&self) -> u32 { self.score }

    pub fn set_score(
        &mut self,
        score: u32,
    ) {
        self.score = score;
    }

    /// Renders the score in big letters, centered on the canvas unless a target `rect` is given.
    pub fn draw_score(
        &mut self,
        color: Color32,
        rect: Option<Rect>,
    ) {
        let (pos, anchor) = match rect {
            Some(rect) => (rect.min, Align2::LEFT_TOP),
            None => (self.canvas.rect().center(), Align2::CENTER_CENTER),
        };
        let text = self.score.to_string();
        self.canvas.text(text, pos, anchor, SCORE_FONT_SIZE, color);
    }
}
