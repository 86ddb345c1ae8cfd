//! Tumblin Dice - session tracking for a multiplayer dice-scoring game.
//!
//! Players accumulate dice across rounds, each result placed in one of five
//! scoring zones with a fixed multiplier. This crate wires the pure domain
//! logic of [`tumblin_core`] into an application:
//!
//! - **Store**: [`SessionStore`], the injectable state container that owns
//!   the session, hands out immutable snapshots, and notifies observers.
//! - **Persistence**: the [`SessionBackend`] key-value adapter with file
//!   and in-memory implementations; every accepted mutation persists the
//!   full snapshot.
//! - **Ids**: the [`IdSource`] collaborator minting game ids and player
//!   colors.
//! - **CLI**: a thin front end that drives the store one command per
//!   invocation.
//!
//! # Example
//!
//! ```
//! use tumblin_dice::{MemoryBackend, SequentialIdSource, SessionStore};
//!
//! let mut store = SessionStore::open(
//!     Box::new(MemoryBackend::new()),
//!     Box::new(SequentialIdSource::new()),
//! );
//! store.add_game();
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.games.len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod error;
mod ids;
mod persist;
mod report;
mod store;

// Crate-level exports - CLI
pub use cli::{Cli, CliCommand, FocusCommand, PlayerCommand, RoundCommand};

// Crate-level exports - Configuration
pub use config::SessionConfig;

// Crate-level exports - Errors
pub use error::{ConfigError, PersistError};

// Crate-level exports - Id generation
pub use ids::{IdSource, RandomIdSource, SequentialIdSource};

// Crate-level exports - Persistence
pub use persist::{
    FileBackend, MemoryBackend, SESSION_KEY, SessionBackend, decode_session, encode_session,
};

// Crate-level exports - Reports
pub use report::{games_list, player_sheet, scoreboard, standings_report};

// Crate-level exports - Store
pub use store::{SessionStore, StoreObserver};
