//! Pure domain logic for the Tumblin Dice score tracker.
//!
//! This crate owns the data model (zones, dice, games, rounds, players),
//! the selection state machine that tracks where the user currently is
//! inside a game, the command reducer that mutates session state, and the
//! score-aggregation functions.
//!
//! No I/O and no randomness live here: nondeterministic inputs reach the
//! reducer pre-resolved inside a [`Command`], so every state transition is
//! reproducible.
//!
//! # Example
//!
//! ```
//! use tumblin_core::{Command, SessionState};
//!
//! let state = SessionState::default();
//! let state = state.apply(&Command::AddGame { id: "a1b2c3d4e5".into() });
//! assert_eq!(state.games[0].name, "Game 1");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod dice;
mod game;
mod score;
mod selection;
mod state;
mod zone;

pub use command::Command;
pub use dice::{Dice, InvalidDice};
pub use game::{Game, Player, PlayerResult, Round, ZoneResult};
pub use score::{
    ScoreError, Standing, player_score, print_score, result_score, result_sum, score_series,
    standings, zone_score,
};
pub use selection::{GameFocus, PlayerFocus, RoundFocus, Selection};
pub use state::SessionState;
pub use zone::{MULT_SYMBOL, Zone};
