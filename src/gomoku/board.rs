use std::fmt::{Display, Formatter};

use egui::{Pos2, Vec2};

/// Board side length (cells)
pub const ROWS: usize = 17;
/// Cell edge length (pixels)
pub const SIDE: u32 = 30;

/// (row, column)
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

impl Display for Player {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Stones never leave the board once placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; ROWS]; ROWS],
}

impl Board {
    pub fn new() -> Self {
        Self { cells: [[Cell::Empty; ROWS]; ROWS] }
    }

    /// None if (row, col) is off the board
    pub fn get(
        &self,
        row: usize,
        col: usize,
    ) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn cell(
        &self,
        (row, col): Coord,
    ) -> Cell {
        self.get(row, col).unwrap_or(Cell::Empty)
    }

    /// Places a stone on an empty cell. Occupied or off-board targets leave the board untouched.
    pub fn place_at(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) if *cell == Cell::Empty => {
                *cell = player.cell();
                true
            }
            _ => false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| *c != Cell::Empty)
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| **c != Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self { Self::new() }
}

/// Mapping between board cells and canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub rows: usize,
    pub side: u32,
}

impl BoardGeometry {
    pub const fn new(
        rows: usize,
        side: u32,
    ) -> Self {
        Self { rows, side }
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::splat((self.rows as u32 * self.side) as f32)
    }

    /// row = y div side, col = x div side; None outside of the board
    pub fn cell_at(
        &self,
        x: i32,
        y: i32,
    ) -> Option<Coord> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let (row, col) = ((y / self.side) as usize, (x / self.side) as usize);
        (row < self.rows && col < self.rows).then_some((row, col))
    }

    pub fn cell_center(
        &self,
        (row, col): Coord,
    ) -> Pos2 {
        let half = self.side as f32 / 2.0;
        Pos2::new(
            col as f32 * self.side as f32 + half,
            row as f32 * self.side as f32 + half,
        )
    }
}

impl Default for BoardGeometry {
    fn default() -> Self { Self::new(ROWS, SIDE) }
}

#[cfg(test)]
mod tests {
    use egui::{Pos2, Vec2};
    use rstest::rstest;

    use super::*;

    #[test]
    fn occupied_cell_is_kept() {
        let mut board = Board::new();
        assert!(board.place_at(3, 4, Player::Black));
        let before = board.clone();

        assert!(!board.place_at(3, 4, Player::White));
        assert!(!board.place_at(3, 4, Player::Black));
        assert_eq!(board, before);
        assert_eq!(board.cell((3, 4)), Cell::Black);
    }

    #[rstest]
    #[case(ROWS, 0)]
    #[case(0, ROWS)]
    #[case(usize::MAX, usize::MAX)]
    fn off_board_placement_is_ignored(#[case] row: usize, #[case] col: usize) {
        let mut board = Board::new();
        assert!(!board.place_at(row, col, Player::Black));
        assert_eq!(board, Board::new());
        assert_eq!(board.get(row, col), None);
    }

    #[test]
    fn full_board() {
        let mut board = Board::new();
        let mut player = Player::Black;
        for row in 0..ROWS {
            for col in 0..ROWS {
                assert!(!board.is_full());
                board.place_at(row, col, player);
                player = player.opponent();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.stone_count(), ROWS * ROWS);
    }

    #[test]
    fn players() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::from_cell(Player::White.cell()), Some(Player::White));
        assert_eq!(Player::from_cell(Cell::Empty), None);
        assert_eq!(Player::Black.to_string(), "Black");
    }

    #[rstest]
    #[case(0, 0, Some((0, 0)))]
    #[case(29, 29, Some((0, 0)))]
    #[case(30, 0, Some((0, 1)))]
    #[case(45, 75, Some((2, 1)))]
    #[case(509, 509, Some((16, 16)))]
    #[case(510, 100, None)]
    #[case(100, 510, None)]
    #[case(- 1, 100, None)]
    #[case(100, - 30, None)]
    fn pixel_to_cell(#[case] x: i32, #[case] y: i32, #[case] expected: Option<Coord>) {
        assert_eq!(BoardGeometry::default().cell_at(x, y), expected);
    }

    #[test]
    fn geometry() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.canvas_size(), Vec2::splat(510.0));
        assert_eq!(geometry.cell_center((0, 0)), Pos2::new(15.0, 15.0));
        assert_eq!(geometry.cell_center((2, 1)), Pos2::new(45.0, 75.0));
    }
}
