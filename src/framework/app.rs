use eframe::glow;
use egui::{Context, Event, Id, LayerId, Order, Pos2};

use crate::framework::game_loop::{Game, GameLoop, LoopControl};
use crate::framework::input::InputEvent;

/// Drives a [`GameLoop`] from the eframe event loop, one loop frame per egui frame.
pub struct WindowedLoop<G: Game> {
    game_loop: GameLoop<G>,
    applied_title: String,
    applied_fullscreen: bool,
}

impl<G: Game> WindowedLoop<G> {
    pub fn new(game_loop: GameLoop<G>) -> Self {
        let applied_title = game_loop.context().title().to_owned();
        Self {
            game_loop,
            applied_title,
            applied_fullscreen: false,
        }
    }

    fn read_input(
        &self,
        ctx: &Context,
        origin: Pos2,
    ) -> Vec<InputEvent> {
        ctx.input(|i| i.events.iter().filter_map(|e| translate_event(e, origin)).collect())
    }

    fn apply_display_requests(
        &mut self,
        frame: &mut eframe::Frame,
    ) {
        let game_ctx = self.game_loop.context();
        if game_ctx.title() != self.applied_title {
            self.applied_title = game_ctx.title().to_owned();
            frame.set_window_title(&self.applied_title);
        }
        if game_ctx.is_fullscreen() != self.applied_fullscreen {
            self.applied_fullscreen = game_ctx.is_fullscreen();
            frame.set_fullscreen(self.applied_fullscreen);
        }
    }
}

fn translate_event(
    event: &Event,
    origin: Pos2,
) -> Option<InputEvent> {
    match event {
        Event::Key { repeat: true, .. } => None,
        Event::Key { key, pressed: true, .. } => Some(InputEvent::KeyDown(*key)),
        Event::Key { key, pressed: false, .. } => Some(InputEvent::KeyUp(*key)),
        Event::PointerButton { pos, button, pressed: true, .. } => Some(InputEvent::MouseDown {
            button: (*button).into(),
            x: (pos.x - origin.x).floor() as i32,
            y: (pos.y - origin.y).floor() as i32,
        }),
        _ => None,
    }
}

impl<G: Game> eframe::App for WindowedLoop<G> {
    fn update(
        &mut self,
        ctx: &Context,
        frame: &mut eframe::Frame,
    ) {
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        let events = self.read_input(ctx, painter.clip_rect().min);

        if self.game_loop.run_frame(events) == LoopControl::Exit {
            frame.close();
            return;
        }

        self.apply_display_requests(frame);
        self.game_loop.context().canvas().paint(&painter);
        ctx.request_repaint();
    }

    fn on_exit(
        &mut self,
        _: Option<&glow::Context>,
    ) {
        log::info!("window closed");
    }
}

/// Opens a window sized after the loop's canvas and runs the loop until it quits.
pub fn run_windowed<G: Game + 'static>(game_loop: GameLoop<G>) -> eframe::Result<()> {
    let title = game_loop.context().title().to_owned();
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(game_loop.context().size()),
        resizable: false,
        ..Default::default()
    };
    eframe::run_native(&title, native_options, Box::new(move |_cc| Box::new(WindowedLoop::new(game_loop))))
}
