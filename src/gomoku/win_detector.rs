use itertools::iproduct;

use super::board::{Board, Cell, Coord, Player, ROWS};

pub const WIN_LENGTH: usize = 5;

/// (row, column) steps: down, right, down-right, down-left.
/// Only one half of each axis is walked; the other half is covered by scanning every cell as origin.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLine {
    pub player: Player,
    /// in walking order, starting at the scan origin
    pub cells: Vec<Coord>,
}

/// First run of at least [`WIN_LENGTH`] stones in row-major origin order, then [`DIRECTIONS`] order.
pub fn find_win_line(board: &Board) -> Option<WinLine> {
    iproduct!(0..ROWS, 0..ROWS).find_map(|origin| win_line_from(board, origin))
}

fn win_line_from(
    board: &Board,
    origin: Coord,
) -> Option<WinLine> {
    let player = Player::from_cell(board.cell(origin))?;
    DIRECTIONS
        .iter()
        .map(|direction| run_from(board, origin, *direction, player.cell()))
        .find(|run| run.len() >= WIN_LENGTH)
        .map(|cells| WinLine { player, cells })
}

fn run_from(
    board: &Board,
    (row, col): Coord,
    (d_row, d_col): (isize, isize),
    cell: Cell,
) -> Vec<Coord> {
    let mut run = vec![];
    let mut pos = Some((row, col));
    while let Some((row, col)) = pos {
        if board.get(row, col) != Some(cell) {
            break;
        }
        run.push((row, col));
        pos = row.checked_add_signed(d_row).zip(col.checked_add_signed(d_col));
    }
    run
}
