//! Command-line interface for the Tumblin Dice tracker.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tumblin Dice - multiplayer dice-scoring session tracker
#[derive(Parser, Debug)]
#[command(name = "tumblin_dice")]
#[command(about = "Track dice scores across games, rounds, and zones", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "tumblin_dice.toml")]
    pub config: PathBuf,

    /// Override the data directory holding the session file
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List all tracked games
    Games,

    /// Create a new game
    New,

    /// Select a game by id
    Select {
        /// Game id as shown by `games`
        game_id: String,
    },

    /// Rename the selected game
    Rename {
        /// The new name
        name: String,
    },

    /// Delete the selected game
    Remove,

    /// Manage the selected game's roster
    Player {
        /// Roster operation to run
        #[command(subcommand)]
        command: PlayerCommand,
    },

    /// Manage the selected game's rounds
    Round {
        /// Round operation to run
        #[command(subcommand)]
        command: RoundCommand,
    },

    /// Move the navigation focus
    Focus {
        /// Focus target
        #[command(subcommand)]
        command: FocusCommand,
    },

    /// Replace the focused player's dice for a zone
    Score {
        /// Zone name: malus, x1, x2, x3 or x4
        zone: String,

        /// Dice pip values (1-6)
        dice: Vec<u8>,
    },

    /// Show the scoreboard and standings of the selected game
    Show,
}

/// Roster operations on the selected game
#[derive(Subcommand, Debug)]
pub enum PlayerCommand {
    /// Add a player
    Add {
        /// Display name; defaults to "Player N"
        #[arg(long)]
        name: Option<String>,
    },

    /// Rename the player at the given roster index
    Rename {
        /// Roster index, starting at 0
        player_index: usize,

        /// The new name
        name: String,
    },

    /// Recolor the player at the given roster index
    Color {
        /// Roster index, starting at 0
        player_index: usize,

        /// Display color as #rrggbb
        color: String,
    },

    /// Remove the player at the given roster index
    Remove {
        /// Roster index, starting at 0
        player_index: usize,
    },
}

/// Round operations on the selected game
#[derive(Subcommand, Debug)]
pub enum RoundCommand {
    /// Add a round and focus it
    Add,

    /// Remove the currently open round
    Remove,
}

/// Navigation focus targets
#[derive(Subcommand, Debug)]
pub enum FocusCommand {
    /// Clear the selection entirely
    Home,

    /// Open the roster view of the selected game
    Players,

    /// Open a round
    Round {
        /// Round index, starting at 0
        round_index: usize,
    },

    /// Focus a player inside the open round
    Player {
        /// Roster index, starting at 0
        player_index: usize,
    },

    /// Toggle zone focus for the focused player
    Zone {
        /// Zone name: malus, x1, x2, x3 or x4
        zone: String,
    },
}
