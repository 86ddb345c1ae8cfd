//! The session store: state container, snapshots, and change notification.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use tumblin_core::{Command, SessionState, Zone, ZoneResult};

use crate::ids::IdSource;
use crate::persist::{SESSION_KEY, SessionBackend, decode_session, encode_session};

/// Observer notified after every accepted mutation.
pub trait StoreObserver {
    /// Called with the snapshot produced by the mutation.
    fn state_changed(&self, state: &Arc<SessionState>);
}

/// Authoritative owner of the session state.
///
/// Collaborators call the mutation methods below; each call resolves fresh
/// ids and colors, applies the pure reducer, swaps in the new snapshot,
/// persists it, and notifies observers. Readers hold [`Arc`] snapshots, so
/// a reader never observes a half-applied mutation.
///
/// The store is an explicitly constructed, injectable container: the
/// application wires a single instance at its entry point, and nothing in
/// this crate assumes global access.
pub struct SessionStore {
    state: Arc<SessionState>,
    backend: Box<dyn SessionBackend>,
    ids: Box<dyn IdSource>,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl SessionStore {
    /// Opens a store over `backend`, rehydrating the persisted session.
    ///
    /// A missing or unparseable payload starts the session empty: losing a
    /// corrupt save beats failing startup.
    #[instrument(skip(backend, ids))]
    pub fn open(backend: Box<dyn SessionBackend>, ids: Box<dyn IdSource>) -> Self {
        let state = match backend.read(SESSION_KEY) {
            Ok(Some(payload)) => match decode_session(&payload) {
                Ok(state) => {
                    info!(games = state.games.len(), "Session rehydrated");
                    state
                }
                Err(e) => {
                    warn!(error = %e, "Persisted session unparseable, starting empty");
                    SessionState::default()
                }
            },
            Ok(None) => {
                info!("No persisted session, starting empty");
                SessionState::default()
            }
            Err(e) => {
                warn!(error = %e, "Persisted session unreadable, starting empty");
                SessionState::default()
            }
        };
        Self {
            state: Arc::new(state),
            backend,
            ids,
            observers: Vec::new(),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<SessionState> {
        Arc::clone(&self.state)
    }

    /// Registers an observer notified after every accepted mutation.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// Applies a command, persists the new snapshot, notifies observers.
    #[instrument(skip(self))]
    fn commit(&mut self, command: Command) {
        // Readers keep the previous snapshot alive through their Arc.
        self.state = Arc::new(self.state.apply(&command));
        match encode_session(&self.state) {
            Ok(payload) => {
                // Fire-and-forget: the mutation stands even if the write fails.
                if let Err(e) = self.backend.write(SESSION_KEY, &payload) {
                    warn!(error = %e, "Failed to persist session");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize session"),
        }
        for observer in &self.observers {
            observer.state_changed(&self.state);
        }
    }

    /// Appends a new game with a fresh id; does not select it.
    #[instrument(skip(self))]
    pub fn add_game(&mut self) {
        let id = self.ids.next_game_id();
        debug!(game_id = %id, "Adding game");
        self.commit(Command::AddGame { id });
    }

    /// Renames the selected game.
    pub fn rename_game(&mut self, name: String) {
        self.commit(Command::RenameGame { name });
    }

    /// Deletes the selected game and clears the selection.
    pub fn remove_game(&mut self) {
        self.commit(Command::RemoveGame);
    }

    /// Appends a player to the selected game, back-filling every round.
    ///
    /// Without a name the player is called `"Player N"`; the display color
    /// is minted from the id collaborator.
    #[instrument(skip(self))]
    pub fn add_player(&mut self, name: Option<String>) {
        let color = self.ids.next_player_color();
        self.commit(Command::AddPlayer { name, color });
    }

    /// Renames the player at `player_index`.
    pub fn rename_player(&mut self, player_index: usize, name: String) {
        self.commit(Command::RenamePlayer { player_index, name });
    }

    /// Recolors the player at `player_index`.
    pub fn set_player_color(&mut self, player_index: usize, color: String) {
        self.commit(Command::SetPlayerColor {
            player_index,
            color,
        });
    }

    /// Removes the player at `player_index` and its result in every round.
    pub fn remove_player(&mut self, player_index: usize) {
        self.commit(Command::RemovePlayer { player_index });
    }

    /// Appends a round to the selected game and focuses it.
    pub fn add_round(&mut self) {
        self.commit(Command::AddRound);
    }

    /// Removes the currently open round.
    pub fn remove_round(&mut self) {
        self.commit(Command::RemoveRound);
    }

    /// Replaces the focused player's result for `zone`.
    pub fn set_zone_result(&mut self, zone: Zone, result: ZoneResult) {
        self.commit(Command::SetZoneResult { zone, result });
    }

    /// Clears the selection.
    pub fn select_home(&mut self) {
        self.commit(Command::SelectHome);
    }

    /// Selects a game by id, resetting any nested focus.
    pub fn select_game(&mut self, game_id: String) {
        self.commit(Command::SelectGame { game_id });
    }

    /// Opens the roster view of the selected game.
    pub fn select_players(&mut self) {
        self.commit(Command::SelectPlayers);
    }

    /// Opens a round, clearing any focused player.
    pub fn select_round(&mut self, round_index: usize) {
        self.commit(Command::SelectRound { round_index });
    }

    /// Focuses a player inside the open round.
    pub fn select_player(&mut self, player_index: usize) {
        self.commit(Command::SelectPlayer { player_index });
    }

    /// Toggles zone focus for the focused player.
    pub fn select_zone(&mut self, zone: Zone) {
        self.commit(Command::SelectZone { zone });
    }
}
