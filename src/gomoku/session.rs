use egui::{Color32, Pos2};

use crate::framework::{rgb_from_hex, Game, GameContext, GameLoop, MouseButton};

use super::board::{Board, BoardGeometry, Coord, Player, ROWS, SIDE};
use super::win_detector::{find_win_line, WinLine};

pub const TITLE: &str = "Gomoku";
pub const FPS: u32 = 15;

const BOARD_COLOR: u32 = 0x8B5742;
const GRID_COLOR: Color32 = Color32::BLACK;
const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(100, 255, 255);
const CENTER_POINT_RADIUS: f32 = 4.0;
const STONE_RADIUS: f32 = (SIDE / 2 - 2) as f32;
/// time between two highlighted stones of the winning line
const HIGHLIGHT_STEP_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Ended,
}

#[derive(Debug)]
struct Highlight {
    revealed: usize,
    next_at_ms: Option<u64>,
}

/// Two players take turns (Black first) until one of them has five in a row.
#[derive(Debug)]
pub struct GomokuSession {
    board: Board,
    geometry: BoardGeometry,
    turn: Player,
    ended: bool,
    win_line: Option<WinLine>,
    highlight: Option<Highlight>,
}

impl GomokuSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            geometry: BoardGeometry::default(),
            turn: Player::Black,
            ended: false,
            win_line: None,
            highlight: None,
        }
    }

    /// Window-ready loop: board drawn, left click places a stone.
    pub fn create_loop() -> GameLoop<GomokuSession> {
        let session = GomokuSession::new();
        let mut ctx = GameContext::new(TITLE, session.geometry.canvas_size());
        session.draw_board(&mut ctx);

        let mut game_loop = GameLoop::new(session, ctx, FPS);
        game_loop.bind_click(MouseButton::Left, |session, ctx, x, y| session.click(ctx, x, y));
        game_loop
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn turn(&self) -> Player { self.turn }

    pub fn state(&self) -> SessionState {
        match self.ended {
            true => SessionState::Ended,
            false => SessionState::InProgress,
        }
    }

    pub fn is_ended(&self) -> bool { self.ended }

    pub fn win_line(&self) -> Option<&WinLine> { self.win_line.as_ref() }

    pub fn winner(&self) -> Option<Player> { self.win_line.as_ref().map(|line| line.player) }

    /// Clicks outside the board or on occupied cells, and any click after the end, are ignored.
    pub fn click(
        &mut self,
        ctx: &mut GameContext,
        x: i32,
        y: i32,
    ) {
        if self.ended {
            return;
        }
        match self.geometry.cell_at(x, y) {
            Some((row, col)) => {
                self.place_at(ctx, row, col);
            }
            None => log::debug!("click at {x}/{y} is off the board"),
        }
    }

    /// Puts a stone of the current player at (row, col). Returns false if the move was ignored.
    pub fn place_at(
        &mut self,
        ctx: &mut GameContext,
        row: usize,
        col: usize,
    ) -> bool {
        if self.ended || !self.board.place_at(row, col, self.turn) {
            return false;
        }
        log::debug!("{} at {row}/{col}", self.turn);
        self.draw_stone(ctx, player_color(self.turn), (row, col));
        self.turn = self.turn.opponent();

        if let Some(line) = find_win_line(&self.board) {
            self.finish(ctx, line);
        } else if self.board.is_full() {
            log::info!("board is full without a winner");
        }
        true
    }

    fn finish(
        &mut self,
        ctx: &mut GameContext,
        line: WinLine,
    ) {
        log::info!("{} wins with {:?}", line.player, line.cells);
        ctx.set_title(format!("{TITLE} ---- {} wins!", line.player));
        self.ended = true;
        self.win_line = Some(line);
        self.highlight = Some(Highlight { revealed: 0, next_at_ms: None });
    }

    fn draw_board(
        &self,
        ctx: &mut GameContext,
    ) {
        let canvas = ctx.canvas_mut();
        canvas.fill(rgb_from_hex(BOARD_COLOR));

        let half = SIDE as f32 / 2.0;
        let far = (ROWS as u32 * SIDE) as f32 - half;
        for i in 0..ROWS {
            let pos = self.geometry.cell_center((i, i));
            canvas.line(Pos2::new(pos.x, half), Pos2::new(pos.x, far), GRID_COLOR);
            canvas.line(Pos2::new(half, pos.y), Pos2::new(far, pos.y), GRID_COLOR);
        }
        let center = self.geometry.cell_center((ROWS / 2, ROWS / 2));
        canvas.circle(center, CENTER_POINT_RADIUS, GRID_COLOR);
    }

    fn draw_stone(
        &self,
        ctx: &mut GameContext,
        color: Color32,
        coord: Coord,
    ) {
        ctx.canvas_mut().circle(self.geometry.cell_center(coord), STONE_RADIUS, color);
    }
}

impl Default for GomokuSession {
    fn default() -> Self { Self::new() }
}

impl Game for GomokuSession {
    /// Reveals the winning line one stone at a time.
    fn update(
        &mut self,
        ctx: &mut GameContext,
        now_ms: u64,
    ) {
        let (Some(highlight), Some(line)) = (self.highlight.as_mut(), self.win_line.as_ref()) else {
            return;
        };
        if highlight.next_at_ms.is_some_and(|at| now_ms < at) {
            return;
        }
        let coord = line.cells[highlight.revealed];
        ctx.canvas_mut().circle(self.geometry.cell_center(coord), STONE_RADIUS, HIGHLIGHT_COLOR);
        highlight.revealed += 1;
        highlight.next_at_ms = Some(now_ms + HIGHLIGHT_STEP_MS);
        if highlight.revealed == line.cells.len() {
            self.highlight = None;
        }
    }
}

fn player_color(player: Player) -> Color32 {
    match player {
        Player::Black => Color32::BLACK,
        Player::White => Color32::WHITE,
    }
}
