//! Recoverable error types raised by the engine and its collaborators.

use super::Position;
use derive_more::{Display, Error};

/// A move the session refuses to apply.
///
/// Always recoverable: the session it was attempted on is left untouched,
/// and front ends simply ignore the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}

/// The audio collaborator could not produce a cue.
#[derive(Debug, Clone, Display, Error)]
#[display("Audio unavailable: {}", reason)]
pub struct AudioUnavailable {
    /// Why the cue could not be played.
    pub reason: String,
}

impl AudioUnavailable {
    /// Creates a new audio error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
