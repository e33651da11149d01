//! Audio collaborator backed by the terminal bell.

use std::io::{IsTerminal, Write};
use tictactoe_engine::{AudioUnavailable, Cue, CueSink};
use tracing::{instrument, trace};

/// Rings the terminal bell: once for a move, twice for a draw, three times for a win.
#[derive(Debug, Clone, Copy)]
pub struct TerminalBell {
    available: bool,
}

impl TerminalBell {
    /// Creates a bell that rings only when stdout is a terminal.
    #[instrument]
    pub fn new() -> Self {
        Self {
            available: std::io::stdout().is_terminal(),
        }
    }

    fn rings(cue: Cue) -> usize {
        match cue {
            Cue::Move => 1,
            Cue::Draw => 2,
            Cue::Win => 3,
        }
    }
}

impl CueSink for TerminalBell {
    #[instrument(skip(self))]
    fn play(&mut self, cue: Cue) -> Result<(), AudioUnavailable> {
        if !self.available {
            return Err(AudioUnavailable::new("stdout is not a terminal"));
        }

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&b"\x07".repeat(Self::rings(cue)))
            .and_then(|()| stdout.flush())
            .map_err(|e| AudioUnavailable::new(e.to_string()))?;
        trace!("Bell rung");
        Ok(())
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}
