//! Bare framework sample: echoes input to the log and shows a score counter.

use anyhow::anyhow;
use egui::{Color32, Vec2};

use gomoku::framework::{rgb_from_hex, run_windowed, Direction, Game, GameContext, GameLoop, Key, MouseButton, DEFAULT_FPS};
use gomoku::util::init_logging;

const BACKGROUND_COLOR: u32 = 0x012456;

struct InputEcho;

impl Game for InputEcho {
    fn draw(
        &mut self,
        ctx: &mut GameContext,
        _now_ms: u64,
    ) {
        ctx.canvas_mut().fill(rgb_from_hex(BACKGROUND_COLOR));
        let color = if ctx.is_paused() { Color32::GRAY } else { Color32::WHITE };
        ctx.draw_score(color, None);
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let ctx = GameContext::new("input echo", Vec2::new(640.0, 480.0));
    let mut game_loop = GameLoop::new(InputEcho, ctx, DEFAULT_FPS);
    game_loop.bind_key(Key::Space, |_, ctx, _| {
        log::info!("press space");
        ctx.set_score(ctx.score() + 1);
    });
    game_loop.bind_key(Key::Enter, |_, _, _| log::info!("press enter"));
    game_loop.bind_keys(&[Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight], |_, _, key| {
        if let Some(direction) = Direction::from_key(key) {
            log::info!("{direction:?} {:?}", direction.offset());
        }
    });
    game_loop.bind_key_up(Key::Enter, |_, _, _| log::info!("release enter"));
    game_loop.bind_pause(Key::P);
    game_loop.bind_click(MouseButton::Left, |_, _, x, y| log::info!("click {x} {y}"));

    run_windowed(game_loop).map_err(|e| anyhow!("failed to open the window: {e}"))
}
