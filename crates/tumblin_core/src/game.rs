//! Games, players, rounds, and per-zone dice results.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::{Dice, Zone};

/// Ordered dice placed in one zone.
///
/// Insertion order matters only for display and removal-by-position;
/// scoring uses the sum.
pub type ZoneResult = Vec<Dice>;

/// A participant in a game.
///
/// Identity is positional: a player is addressed by its index in
/// [`Game::players`], so removing a player shifts the identity of every
/// later one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Display color as a `#rrggbb` hex string.
    pub color: String,
}

/// One player's dice for one round, one result list per zone.
///
/// All five zones are structurally present; an unused zone is simply empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    /// Dice in the malus zone.
    pub malus: ZoneResult,
    /// Dice in the ×1 zone.
    pub x1: ZoneResult,
    /// Dice in the ×2 zone.
    pub x2: ZoneResult,
    /// Dice in the ×3 zone.
    pub x3: ZoneResult,
    /// Dice in the ×4 zone.
    pub x4: ZoneResult,
}

impl PlayerResult {
    /// Returns the result list for the given zone.
    pub fn zone(&self, zone: Zone) -> &ZoneResult {
        match zone {
            Zone::Malus => &self.malus,
            Zone::X1 => &self.x1,
            Zone::X2 => &self.x2,
            Zone::X3 => &self.x3,
            Zone::X4 => &self.x4,
        }
    }

    /// Returns the mutable result list for the given zone.
    pub fn zone_mut(&mut self, zone: Zone) -> &mut ZoneResult {
        match zone {
            Zone::Malus => &mut self.malus,
            Zone::X1 => &mut self.x1,
            Zone::X2 => &mut self.x2,
            Zone::X3 => &mut self.x3,
            Zone::X4 => &mut self.x4,
        }
    }
}

/// One full pass of the game across all players.
///
/// `results` is index-aligned with the owning game's player list; the
/// reducer keeps `results.len() == players.len()` for every round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Per-player results, one per roster entry, in roster order.
    pub results: Vec<PlayerResult>,
}

impl Round {
    /// Creates a round with one empty result per player.
    pub fn with_players(count: usize) -> Self {
        Self {
            results: vec![PlayerResult::default(); count],
        }
    }
}

/// A tracked game: roster plus recorded rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Game {
    /// Opaque unique identifier, generated once at creation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Roster; player identity is the index into this list.
    #[new(default)]
    pub players: Vec<Player>,
    /// Recorded rounds, oldest first.
    #[new(default)]
    pub rounds: Vec<Round>,
}
