//! Commands accepted by the session reducer.

use serde::{Deserialize, Serialize};

use crate::{Zone, ZoneResult};

/// A mutation accepted by [`crate::SessionState::apply`].
///
/// Commands carry only plain data. Nondeterministic inputs (fresh game ids,
/// player colors) are resolved by the caller before reduction, so applying
/// the same command to the same state always yields the same result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Appends a new empty game under the given id; does not select it.
    AddGame {
        /// Fresh opaque id supplied by the id collaborator.
        id: String,
    },
    /// Renames the selected game.
    RenameGame {
        /// The new display name.
        name: String,
    },
    /// Deletes the selected game and clears the selection.
    RemoveGame,
    /// Appends a player to the selected game and back-fills every round.
    AddPlayer {
        /// Display name; defaults to `"Player N"` when absent.
        name: Option<String>,
        /// Display color supplied by the id collaborator.
        color: String,
    },
    /// Renames the player at `player_index`.
    RenamePlayer {
        /// Index into the selected game's roster.
        player_index: usize,
        /// The new display name.
        name: String,
    },
    /// Recolors the player at `player_index`.
    SetPlayerColor {
        /// Index into the selected game's roster.
        player_index: usize,
        /// The new display color.
        color: String,
    },
    /// Removes the player at `player_index` and its result in every round.
    RemovePlayer {
        /// Index into the selected game's roster.
        player_index: usize,
    },
    /// Appends a round to the selected game and focuses it.
    AddRound,
    /// Removes the currently open round.
    RemoveRound,
    /// Replaces the focused player's result for one zone.
    SetZoneResult {
        /// The zone to overwrite.
        zone: Zone,
        /// The replacement dice list.
        result: ZoneResult,
    },
    /// Clears the selection.
    SelectHome,
    /// Selects a game by id, resetting any nested focus.
    SelectGame {
        /// Id of the game to select.
        game_id: String,
    },
    /// Opens the roster view of the selected game.
    SelectPlayers,
    /// Opens a round, clearing any focused player.
    SelectRound {
        /// Index of the round to open.
        round_index: usize,
    },
    /// Focuses a player inside the open round.
    SelectPlayer {
        /// Index of the player to focus.
        player_index: usize,
    },
    /// Toggles zone focus for the focused player.
    SelectZone {
        /// The zone to focus, or to clear when already focused.
        zone: Zone,
    },
}
