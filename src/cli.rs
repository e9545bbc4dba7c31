//! Command-line interface for strictly_mastermind.

use clap::{Parser, Subcommand};
use strictly_mastermind::Difficulty;

/// Strictly Mastermind - crack the hidden four-peg code
#[derive(Parser, Debug)]
#[command(name = "strictly_mastermind")]
#[command(about = "Code-breaking game with saved progress and statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "strictly_mastermind.toml")]
    pub config: std::path::PathBuf,

    /// Database file (overrides the config file)
    #[arg(long)]
    pub db_path: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new game
    New {
        /// Number of colors in play (6, 7 or 8); also saved as the default
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Submit a guess of four color ids
    Guess {
        /// Color ids, e.g. `red blue green yellow`
        #[arg(num_args = 4, required = true)]
        colors: Vec<String>,
    },

    /// Set or clear one peg of the row being composed
    Draft {
        /// Peg position (0-3)
        position: usize,

        /// Color id; omit to clear the peg
        color: Option<String>,
    },

    /// Submit the row being composed
    Submit,

    /// Show the board
    Show {
        /// Reveal the secret even while the game is in progress
        #[arg(long)]
        reveal: bool,
    },

    /// Save the difficulty for future games
    Difficulty {
        /// Number of colors in play (6, 7 or 8)
        difficulty: Difficulty,
    },

    /// Start over at the current difficulty
    Reset,

    /// Delete the saved game and start over
    Clear,

    /// Show statistics
    Stats,

    /// Zero the statistics
    ResetStats,

    /// List the colors in play
    Colors,
}
