//! Audio cues and the collaborator that plays them.

use super::error::AudioUnavailable;
use tracing::instrument;

/// A discrete sound signal fired on a game transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Cue {
    /// A legal move was made.
    Move,
    /// The move completed a line.
    Win,
    /// The move filled the board without a line.
    Draw,
}

/// Plays cues. Implementations may fail; the controller logs and moves on.
pub trait CueSink {
    /// Plays `cue` synchronously.
    fn play(&mut self, cue: Cue) -> Result<(), AudioUnavailable>;
}

/// A sink that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCues;

impl CueSink for SilentCues {
    #[instrument(skip(self))]
    fn play(&mut self, _cue: Cue) -> Result<(), AudioUnavailable> {
        Ok(())
    }
}
