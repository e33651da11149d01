//! Players alternate, X first.

use super::Invariant;
use crate::{GameStatus, Player, Session};

/// Invariant: X has played as often as O, or exactly once more.
///
/// While the game is in progress the player to move is X iff the counts are
/// equal. Once the game ends the active player is whoever made the final
/// move, since the turn does not pass on it.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);
        if x != o && x != o + 1 {
            return false;
        }

        let last_mover = if x > o { Player::X } else { Player::O };
        match session.status() {
            GameStatus::InProgress => session.active_player() == last_mover.opponent(),
            GameStatus::Won { winner, .. } => {
                *winner == last_mover && session.active_player() == last_mover
            }
            GameStatus::Drawn => x == o + 1 && session.active_player() == last_mover,
        }
    }

    fn description() -> &'static str {
        "X and O must alternate starting with X"
    }
}
