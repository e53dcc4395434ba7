//! Gomoku: two players alternately place stones on a 17x17 board; five in a row wins.

mod board;
mod session;
mod win_detector;

pub use board::{Board, BoardGeometry, Cell, Coord, Player, ROWS, SIDE};
pub use session::{GomokuSession, SessionState, FPS, TITLE};
pub use win_detector::{find_win_line, WinLine, DIRECTIONS, WIN_LENGTH};
