//! Status agrees with the board.

use super::Invariant;
use crate::rules::{find_winning_line, is_full};
use crate::{GameStatus, Session, Square};

/// Invariant: the session status is exactly what the rules derive from the board.
///
/// InProgress iff no line and a free square, Won iff a line (owned by the
/// recorded winner), Drawn iff full with no line.
pub struct StatusConsistentInvariant;

impl Invariant<Session> for StatusConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        match (session.status(), find_winning_line(board)) {
            (GameStatus::Won { winner, line }, Some(found)) => {
                *line == found && board.get(found[0]) == Square::Occupied(*winner)
            }
            (GameStatus::Drawn, None) => is_full(board),
            (GameStatus::InProgress, None) => !is_full(board),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Status must match the winning line and fullness of the board"
    }
}
