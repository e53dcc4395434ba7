use std::thread;
use std::time::{Duration, Instant};

use crate::framework::context::GameContext;
use crate::framework::input::{InputEvent, InputRouter, Key, MouseButton};

pub const DEFAULT_FPS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Game specific behavior plugged into the [`GameLoop`].
///
/// Both hooks run once per frame, `update` first. `now_ms` counts milliseconds since the loop was created.
pub trait Game {
    fn update(
        &mut self,
        _ctx: &mut GameContext,
        _now_ms: u64,
    ) {}

    fn draw(
        &mut self,
        _ctx: &mut GameContext,
        _now_ms: u64,
    ) {}
}

pub trait EventSource {
    /// All events which arrived since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Best-effort frame pacing
#[derive(Debug)]
pub struct FrameClock {
    started: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self { started: now, last_tick: now }
    }

    /// Sleeps until `1s / fps` have passed since the previous tick (`fps == 0` = no limit).
    /// Returns the time between the previous tick and this one.
    pub fn tick(
        &mut self,
        fps: u32,
    ) -> Duration {
        if fps > 0 {
            let budget = Duration::from_secs(1) / fps;
            let spent = self.last_tick.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }
        let now = Instant::now();
        let frame_time = now - self.last_tick;
        self.last_tick = now;
        frame_time
    }

    pub fn ticks_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl Default for FrameClock {
    fn default() -> Self { Self::new() }
}

pub struct GameLoop<G: Game> {
    game: G,
    ctx: GameContext,
    router: InputRouter<G>,
    clock: FrameClock,
    fps: u32,
}

impl<G: Game> GameLoop<G> {
    pub fn new(
        game: G,
        ctx: GameContext,
        fps: u32,
    ) -> Self {
        Self {
            game,
            ctx,
            router: InputRouter::new(),
            clock: FrameClock::new(),
            fps,
        }
    }

    pub fn game(&self) -> &G { &self.game }

    pub fn game_mut(&mut self) -> &mut G { &mut self.game }

    pub fn context(&self) -> &GameContext { &self.ctx }

    pub fn context_mut(&mut self) -> &mut GameContext { &mut self.ctx }

    pub fn rate(&self) -> u32 { self.fps }

    pub fn set_rate(
        &mut self,
        fps: u32,
    ) {
        self.fps = fps;
    }

    pub fn bind_key(
        &mut self,
        key: Key,
        handler: impl Fn(&mut G, &mut GameContext, Key) + 'static,
    ) {
        self.router.bind_key(key, handler);
    }

    pub fn bind_keys(
        &mut self,
        keys: &[Key],
        handler: impl Fn(&mut G, &mut GameContext, Key) + 'static,
    ) {
        self.router.bind_keys(keys, handler);
    }

    pub fn bind_key_up(
        &mut self,
        key: Key,
        handler: impl Fn(&mut G, &mut GameContext, Key) + 'static,
    ) {
        self.router.bind_key_up(key, handler);
    }

    pub fn bind_keys_up(
        &mut self,
        keys: &[Key],
        handler: impl Fn(&mut G, &mut GameContext, Key) + 'static,
    ) {
        self.router.bind_keys_up(keys, handler);
    }

    pub fn bind_click(
        &mut self,
        button: MouseButton,
        handler: impl Fn(&mut G, &mut GameContext, i32, i32) + 'static,
    ) {
        self.router.bind_click(button, handler);
    }

    /// `key` toggles the pause flag of the context. The loop itself keeps running.
    pub fn bind_pause(
        &mut self,
        key: Key,
    ) {
        self.router.bind_key(key, |_, ctx, _| ctx.toggle_pause());
    }

    pub fn handle_input(
        &mut self,
        event: InputEvent,
    ) -> LoopControl {
        self.router.dispatch(event, &mut self.game, &mut self.ctx)
    }

    /// One loop iteration: dispatch input, wait for the frame budget, update, draw.
    /// A quit event ends the iteration right away.
    pub fn run_frame(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> LoopControl {
        for event in events {
            if self.handle_input(event) == LoopControl::Exit {
                log::info!("quit");
                return LoopControl::Exit;
            }
        }
        self.clock.tick(self.fps);

        self.game.update(&mut self.ctx, self.clock.ticks_ms());
        self.game.draw(&mut self.ctx, self.clock.ticks_ms());
        LoopControl::Continue
    }

    pub fn run(
        &mut self,
        source: &mut impl EventSource,
    ) {
        while self.run_frame(source.poll_events()) == LoopControl::Continue {}
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::time::Duration;

    use egui::Vec2;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, u64)>,
        paused_updates: usize,
        clicks: usize,
    }

    impl Game for Recorder {
        fn update(
            &mut self,
            ctx: &mut GameContext,
            now_ms: u64,
        ) {
            if ctx.is_paused() {
                self.paused_updates += 1;
            }
            self.calls.push(("update", now_ms));
        }

        fn draw(
            &mut self,
            _ctx: &mut GameContext,
            now_ms: u64,
        ) {
            self.calls.push(("draw", now_ms));
        }
    }

    struct Frames(VecDeque<Vec<InputEvent>>);

    impl EventSource for Frames {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            self.0.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
        }
    }

    fn recording_loop() -> GameLoop<Recorder> {
        GameLoop::new(Recorder::default(), GameContext::new("recorder", Vec2::splat(10.0)), 0)
    }

    #[test]
    fn update_runs_before_draw() {
        let mut game_loop = recording_loop();
        assert_eq!(game_loop.run_frame([]), LoopControl::Continue);
        assert_eq!(game_loop.run_frame([]), LoopControl::Continue);

        let calls = &game_loop.game().calls;
        let names: Vec<_> = calls.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["update", "draw", "update", "draw"]);
        assert!(calls.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn quit_skips_update_and_draw() {
        let mut game_loop = recording_loop();
        game_loop.bind_click(MouseButton::Left, |game, _, _, _| game.clicks += 1);

        let control = game_loop.run_frame([
            InputEvent::MouseDown { button: MouseButton::Left, x: 0, y: 0 },
            InputEvent::Quit,
            InputEvent::MouseDown { button: MouseButton::Left, x: 0, y: 0 },
        ]);

        assert_eq!(control, LoopControl::Exit);
        assert_eq!(game_loop.game().clicks, 1);
        assert!(game_loop.game().calls.is_empty());
    }

    #[test]
    fn run_until_quit() {
        let mut game_loop = recording_loop();
        let mut source = Frames(VecDeque::from(vec![vec![], vec![], vec![]]));
        game_loop.run(&mut source);

        assert_eq!(game_loop.game().calls.len(), 6);
    }

    #[test]
    fn pause_is_advisory() {
        let mut game_loop = recording_loop();
        game_loop.bind_pause(Key::P);

        game_loop.run_frame([InputEvent::KeyDown(Key::P)]);
        assert!(game_loop.context().is_paused());
        game_loop.run_frame([]);
        game_loop.run_frame([InputEvent::KeyDown(Key::P)]);

        assert!(!game_loop.context().is_paused());
        assert_eq!(game_loop.game().paused_updates, 2);
        assert_eq!(game_loop.game().calls.len(), 6);
    }

    #[test]
    fn rate_can_change_at_runtime() {
        let mut game_loop = recording_loop();
        assert_eq!(game_loop.rate(), 0);
        game_loop.set_rate(DEFAULT_FPS);
        assert_eq!(game_loop.rate(), DEFAULT_FPS);
    }

    #[test]
    fn clock_caps_frame_rate() {
        let mut clock = FrameClock::new();
        clock.tick(0);
        let frame_time = clock.tick(50);
        assert!(frame_time >= Duration::from_millis(20), "frame time {frame_time:?}");
    }
}
