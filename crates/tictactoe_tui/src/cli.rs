//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal, with a running score
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with score tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Start with sound cues muted
    #[arg(long)]
    pub muted: bool,

    /// File that receives tracing output (the terminal is busy drawing)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}
