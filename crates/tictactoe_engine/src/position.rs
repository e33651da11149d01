//! Board positions and keyboard-style cursor movement.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Moves one step in `direction`, wrapping within the same row or column.
    ///
    /// Right from the last column lands on the first column of the same row,
    /// down from the last row lands on the first row of the same column.
    #[instrument]
    pub fn step(self, direction: Direction) -> Position {
        let (row, col) = (self.row(), self.col());
        let (row, col) = match direction {
            Direction::Right => (row, (col + 1) % 3),
            Direction::Left => (row, (col + 2) % 3),
            Direction::Down => ((row + 1) % 3, col),
            Direction::Up => ((row + 2) % 3, col),
        };
        Self::ALL[row * 3 + col]
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    fn at(index: usize) -> Position {
        Position::from_index(index).unwrap()
    }

    #[test]
    fn test_index_round_trips_through_all() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_right_wraps_within_row() {
        assert_eq!(at(2).step(Direction::Right), at(0));
        assert_eq!(at(5).step(Direction::Right), at(3));
        assert_eq!(at(3).step(Direction::Right), at(4));
    }

    #[test]
    fn test_left_wraps_within_row() {
        assert_eq!(at(0).step(Direction::Left), at(2));
        assert_eq!(at(6).step(Direction::Left), at(8));
        assert_eq!(at(4).step(Direction::Left), at(3));
    }

    #[test]
    fn test_down_wraps_within_column() {
        assert_eq!(at(8).step(Direction::Down), at(2));
        assert_eq!(at(6).step(Direction::Down), at(0));
        assert_eq!(at(1).step(Direction::Down), at(4));
    }

    #[test]
    fn test_up_wraps_within_column() {
        assert_eq!(at(0).step(Direction::Up), at(6));
        assert_eq!(at(2).step(Direction::Up), at(8));
        assert_eq!(at(7).step(Direction::Up), at(4));
    }

    #[test]
    fn test_three_steps_return_home() {
        for pos in Position::ALL {
            for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
                let back = pos.step(dir).step(dir).step(dir);
                assert_eq!(back, pos, "{pos} stepping {dir:?} three times");
            }
        }
    }

    #[test]
    fn test_valid_moves_skips_occupied() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let moves = Position::valid_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Position::Center));
    }
}
