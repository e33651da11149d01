//! A single game of tic-tac-toe: board, player to move, and status.

use super::error::IllegalMove;
use super::rules::{find_winning_line, is_full};
use super::status::GameStatus;
use super::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// Complete state of one game.
///
/// Sessions only change through [`Session::place`], which returns a new
/// session and leaves the original untouched, so a rejected move is a
/// no-op by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) active_player: Player,
    pub(crate) status: GameStatus,
}

impl Session {
    /// Creates a fresh session: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    ///
    /// After the game ends this stays on the player who made the final move.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Places the active player's mark at cell `index` (0-8).
    ///
    /// Preconditions are checked in order: the game is still in progress,
    /// the index is on the board, the square is empty.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition as an [`IllegalMove`].
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn place(&self, index: usize) -> Result<Session, IllegalMove> {
        if self.status.is_over() {
            debug!("Rejecting move on finished game");
            return Err(IllegalMove::GameOver);
        }

        let pos = Position::from_index(index).ok_or(IllegalMove::OutOfBounds(index))?;

        if !self.board.is_empty(pos) {
            debug!(%pos, "Rejecting move on occupied square");
            return Err(IllegalMove::Occupied(pos));
        }

        let mut next = self.clone();
        next.board.set(pos, Square::Occupied(self.active_player));

        if let Some(line) = find_winning_line(&next.board) {
            next.status = GameStatus::Won {
                winner: self.active_player,
                line,
            };
        } else if is_full(&next.board) {
            next.status = GameStatus::Drawn;
        } else {
            next.active_player = self.active_player.opponent();
        }

        #[cfg(debug_assertions)]
        {
            use super::invariants::{InvariantSet, SessionInvariants};
            debug_assert_eq!(SessionInvariants::check_all(&next), Ok(()));
        }

        debug!(%pos, status = ?next.status, "Move applied");
        Ok(next)
    }

    /// Returns the empty positions, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
