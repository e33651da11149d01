//! Running tally of finished games.

use super::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Wins per player and draws, for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    x: u32,
    o: u32,
    draws: u32,
}

impl Score {
    /// Creates a score from explicit counts.
    pub fn new(x: u32, o: u32, draws: u32) -> Self {
        Self { x, o, draws }
    }

    /// Games won by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Games won by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Returns the score with `outcome` counted once.
    #[instrument]
    pub fn record(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(Player::X) => Self {
                x: self.x.saturating_add(1),
                ..self
            },
            Outcome::Winner(Player::O) => Self {
                o: self.o.saturating_add(1),
                ..self
            },
            Outcome::Draw => Self {
                draws: self.draws.saturating_add(1),
                ..self
            },
        }
    }

    /// Returns a zeroed score.
    #[instrument]
    pub fn reset(self) -> Self {
        Self::default()
    }
}
