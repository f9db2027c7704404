use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::winner;

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character drawn for this player's pieces.
    pub fn marker(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum IllegalMove {
    #[error("column {column} is out of bounds")]
    OutOfRange { column: usize },
    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Grid plus the side to move. Row 0 is the floor; columns are stored
/// 0-based while every move-taking method speaks 1-based columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; HEIGHT]; WIDTH],
    current: Player,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; HEIGHT]; WIDTH],
            current: Player::X,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn toggle_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Cell at 0-based `(column, row)`. Panics outside the grid.
    pub fn cell_at(&self, column: usize, row: usize) -> Cell {
        self.cells[column][row]
    }

    /// Predicate for input retry loops: never panics, and the `0`
    /// "nothing chosen yet" sentinel is simply illegal.
    pub fn is_legal(&self, column: usize) -> bool {
        self.check(column).is_ok()
    }

    /// Drops the current player's piece into `column` and returns the row
    /// it landed on. The caller is expected to have checked
    /// [`Board::is_legal`]; an illegal column places nothing.
    pub fn apply_move(&mut self, column: usize) -> Option<usize> {
        let idx = column.checked_sub(1).filter(|&c| c < WIDTH)?;
        let player = self.current;
        let row = self.cells[idx].iter().position(|cell| cell.is_empty())?;
        self.cells[idx][row] = Cell::Taken(player);
        debug!(?player, column, row, "piece placed");
        Some(row)
    }

    pub fn try_apply_move(&mut self, column: usize) -> Result<usize, IllegalMove> {
        if let Err(err) = self.check(column) {
            trace!(%err, "move rejected");
            return Err(err);
        }
        // legality was just checked, so a row is always found
        self.apply_move(column).ok_or(IllegalMove::ColumnFull { column })
    }

    pub fn find_winner(&self) -> Option<Player> {
        winner::find_winner(self)
    }

    /// Number of pieces stacked in the 1-based `column`; `None` off the board.
    pub fn column_height(&self, column: usize) -> Option<usize> {
        let idx = column.checked_sub(1).filter(|&c| c < WIDTH)?;
        let height = self.cells[idx]
            .iter()
            .take_while(|cell| !cell.is_empty())
            .count();
        Some(height)
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|col| !self.cells[col][HEIGHT - 1].is_empty())
    }

    /// Legal 1-based columns, ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        (1..=WIDTH).filter(|&col| self.is_legal(col)).collect()
    }

    fn check(&self, column: usize) -> Result<(), IllegalMove> {
        if !(1..=WIDTH).contains(&column) {
            return Err(IllegalMove::OutOfRange { column });
        }
        if !self.cells[column - 1][HEIGHT - 1].is_empty() {
            return Err(IllegalMove::ColumnFull { column });
        }
        Ok(())
    }

    /// Writes a cell directly, ignoring gravity. Test boards only.
    #[cfg(test)]
    pub(crate) fn set(&mut self, column: usize, row: usize, cell: Cell) {
        self.cells[column][row] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_gravity(board: &Board) {
        for col in 0..WIDTH {
            for row in 1..HEIGHT {
                if !board.cell_at(col, row).is_empty() {
                    assert!(
                        !board.cell_at(col, row - 1).is_empty(),
                        "floating piece at ({col}, {row})"
                    );
                }
            }
        }
    }

    #[test]
    fn reset_board_accepts_every_column() {
        let mut board = Board::new();
        board.apply_move(2);
        board.toggle_player();
        board.reset();
        for col in 1..=WIDTH {
            assert!(board.is_legal(col), "column {col} should be legal");
        }
        assert_eq!(board.current_player(), Player::X);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn out_of_range_columns_are_illegal() {
        let board = Board::new();
        assert!(!board.is_legal(0));
        assert!(!board.is_legal(WIDTH + 1));
        assert!(!board.is_legal(usize::MAX));
    }

    #[test]
    fn filling_a_column_makes_it_illegal() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            assert!(board.is_legal(5));
            board.apply_move(5);
            board.toggle_player();
        }
        assert!(!board.is_legal(5));
        assert_eq!(board.column_height(5), Some(HEIGHT));
        assert_eq!(board.column_height(4), Some(0));
        assert_eq!(board.legal_moves(), vec![1, 2, 3, 4, 6, 7]);
    }

    #[test]
    fn pieces_stack_from_the_floor() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(3), Some(0));
        board.toggle_player();
        assert_eq!(board.apply_move(3), Some(1));
        assert_eq!(board.cell_at(2, 0), Cell::Taken(Player::X));
        assert_eq!(board.cell_at(2, 1), Cell::Taken(Player::O));
        assert_eq!(board.cell_at(2, 2), Cell::Empty);
    }

    #[test]
    fn apply_move_does_not_toggle() {
        let mut board = Board::new();
        board.apply_move(1);
        assert_eq!(board.current_player(), Player::X);
    }

    #[test]
    fn apply_move_on_illegal_column_places_nothing() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(0), None);
        assert_eq!(board.apply_move(WIDTH + 1), None);
        for _ in 0..HEIGHT {
            board.apply_move(1);
        }
        let before = board.clone();
        assert_eq!(board.apply_move(1), None);
        assert_eq!(board, before);
    }

    #[test]
    fn gravity_holds_over_a_move_sequence() {
        let mut board = Board::new();
        let moves = [4, 4, 1, 7, 7, 7, 2, 3, 4, 5, 6, 4, 4, 4, 1, 2];
        for col in moves {
            if board.is_legal(col) {
                board.apply_move(col);
                board.toggle_player();
            }
            assert_gravity(&board);
        }
    }

    #[test]
    fn column_height_is_one_based_and_never_panics() {
        let mut board = Board::new();
        board.apply_move(1);
        board.apply_move(1);
        board.apply_move(WIDTH);
        assert_eq!(board.column_height(1), Some(2));
        assert_eq!(board.column_height(WIDTH), Some(1));
        assert_eq!(board.column_height(0), None);
        assert_eq!(board.column_height(WIDTH + 1), None);
        assert_eq!(board.column_height(usize::MAX), None);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut board = Board::new();
        board.toggle_player();
        assert_eq!(board.current_player(), Player::O);
        board.toggle_player();
        assert_eq!(board.current_player(), Player::X);
    }

    #[test]
    fn try_apply_move_names_the_reason() {
        let mut board = Board::new();
        assert_eq!(
            board.try_apply_move(0),
            Err(IllegalMove::OutOfRange { column: 0 })
        );
        for row in 0..HEIGHT {
            assert_eq!(board.try_apply_move(6), Ok(row));
        }
        assert_eq!(
            board.try_apply_move(6),
            Err(IllegalMove::ColumnFull { column: 6 })
        );
    }

    #[test]
    fn full_board_has_no_legal_moves() {
        let mut board = Board::new();
        for col in 1..=WIDTH {
            for _ in 0..HEIGHT {
                board.apply_move(col);
            }
        }
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn illegal_move_messages() {
        assert_eq!(
            IllegalMove::OutOfRange { column: 9 }.to_string(),
            "column 9 is out of bounds"
        );
        assert_eq!(
            IllegalMove::ColumnFull { column: 3 }.to_string(),
            "column 3 is full"
        );
    }
}
