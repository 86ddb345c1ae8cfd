//! The navigational focus path: game → round → player → zone.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::Zone;

/// The currently focused game and the drill-down inside it.
///
/// Indices held here are not re-validated when the referenced entity is
/// removed by a structural edit other than whole-game removal; a stale
/// index must resolve to "nothing found" downstream, never a crash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Selection {
    /// Id of the selected game.
    pub game_id: String,
    /// Focus inside the game; `None` is the game's root view.
    #[new(default)]
    pub focus: Option<GameFocus>,
}

/// Focus inside a selected game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameFocus {
    /// The roster view is open.
    Players,
    /// A specific round is open.
    Round(RoundFocus),
}

/// Focus on one round, optionally drilled into a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct RoundFocus {
    /// Index into the game's round list.
    pub round_index: usize,
    /// Focused player within the round, if any.
    #[new(default)]
    pub player: Option<PlayerFocus>,
}

/// Focus on one player, optionally drilled into a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct PlayerFocus {
    /// Index into the game's roster.
    pub player_index: usize,
    /// Focused zone, if any.
    #[new(default)]
    pub zone: Option<Zone>,
}

impl Selection {
    /// Returns the round focus if a round is open.
    pub fn round(&self) -> Option<&RoundFocus> {
        match &self.focus {
            Some(GameFocus::Round(round)) => Some(round),
            _ => None,
        }
    }

    /// Mutable variant of [`Selection::round`].
    pub(crate) fn round_mut(&mut self) -> Option<&mut RoundFocus> {
        match &mut self.focus {
            Some(GameFocus::Round(round)) => Some(round),
            _ => None,
        }
    }

    /// Returns the focused player if a round is open and a player focused.
    pub fn player(&self) -> Option<&PlayerFocus> {
        self.round().and_then(|round| round.player.as_ref())
    }

    /// Returns the focused zone if the drill-down reaches one.
    pub fn zone(&self) -> Option<Zone> {
        self.player().and_then(|player| player.zone)
    }
}
