//! The session state and its pure command reducer.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    Command, Game, GameFocus, Player, PlayerFocus, PlayerResult, Round, RoundFocus, Selection,
    Zone, ZoneResult,
};

/// Complete session state: every tracked game plus the current selection.
///
/// This is the unit of snapshotting and persistence. Mutation goes through
/// [`SessionState::apply`], which leaves `self` untouched and returns the
/// successor state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// All tracked games, in creation order.
    pub games: Vec<Game>,
    /// Navigational focus, if any.
    pub selected: Option<Selection>,
}

impl SessionState {
    /// Applies a command and returns the successor state.
    ///
    /// Mutations whose target cannot be resolved (a missing selection, an
    /// out-of-range index) are dropped as stale commands: the successor
    /// equals the current state. Pure lookups that must instead fail loudly
    /// live in [`crate::score`](crate::player_score).
    #[instrument(skip(self), fields(games = self.games.len()))]
    pub fn apply(&self, command: &Command) -> SessionState {
        let mut next = self.clone();
        match command {
            Command::AddGame { id } => next.add_game(id),
            Command::RenameGame { name } => next.rename_game(name),
            Command::RemoveGame => next.remove_game(),
            Command::AddPlayer { name, color } => next.add_player(name.as_deref(), color),
            Command::RenamePlayer { player_index, name } => {
                next.rename_player(*player_index, name);
            }
            Command::SetPlayerColor {
                player_index,
                color,
            } => next.set_player_color(*player_index, color),
            Command::RemovePlayer { player_index } => next.remove_player(*player_index),
            Command::AddRound => next.add_round(),
            Command::RemoveRound => next.remove_round(),
            Command::SetZoneResult { zone, result } => next.set_zone_result(*zone, result),
            Command::SelectHome => next.select_home(),
            Command::SelectGame { game_id } => next.select_game(game_id),
            Command::SelectPlayers => next.select_players(),
            Command::SelectRound { round_index } => next.select_round(*round_index),
            Command::SelectPlayer { player_index } => next.select_player(*player_index),
            Command::SelectZone { zone } => next.select_zone(*zone),
        }
        next
    }

    /// Looks up a game by id.
    pub fn game(&self, game_id: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.id == game_id)
    }

    /// Returns the selected game, if the selection resolves to one.
    pub fn selected_game(&self) -> Option<&Game> {
        let selection = self.selected.as_ref()?;
        self.game(&selection.game_id)
    }

    fn selected_game_mut(&mut self) -> Option<&mut Game> {
        let game_id = self.selected.as_ref()?.game_id.clone();
        self.games.iter_mut().find(|game| game.id == game_id)
    }

    fn add_game(&mut self, id: &str) {
        let name = format!("Game {}", self.games.len() + 1);
        debug!(game_id = %id, name = %name, "Appending game");
        self.games.push(Game::new(id.to_string(), name));
    }

    fn rename_game(&mut self, name: &str) {
        if let Some(game) = self.selected_game_mut() {
            game.name = name.to_string();
        }
    }

    fn remove_game(&mut self) {
        let Some(selection) = self.selected.as_ref() else {
            return;
        };
        let game_id = selection.game_id.clone();
        if let Some(index) = self.games.iter().position(|game| game.id == game_id) {
            debug!(game_id = %game_id, "Removing game");
            self.games.remove(index);
            self.selected = None;
        }
    }

    fn add_player(&mut self, name: Option<&str>, color: &str) {
        let Some(game) = self.selected_game_mut() else {
            return;
        };
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| format!("Player {}", game.players.len() + 1));
        game.players.push(Player::new(name, color.to_string()));
        // Keep every round index-aligned with the grown roster.
        for round in &mut game.rounds {
            round.results.push(PlayerResult::default());
        }
    }

    fn rename_player(&mut self, player_index: usize, name: &str) {
        if let Some(game) = self.selected_game_mut()
            && let Some(player) = game.players.get_mut(player_index)
        {
            player.name = name.to_string();
        }
    }

    fn set_player_color(&mut self, player_index: usize, color: &str) {
        if let Some(game) = self.selected_game_mut()
            && let Some(player) = game.players.get_mut(player_index)
        {
            player.color = color.to_string();
        }
    }

    fn remove_player(&mut self, player_index: usize) {
        let Some(game) = self.selected_game_mut() else {
            return;
        };
        if player_index >= game.players.len() {
            return;
        }
        game.players.remove(player_index);
        for round in &mut game.rounds {
            if player_index < round.results.len() {
                round.results.remove(player_index);
            }
        }
    }

    fn add_round(&mut self) {
        let Some(game) = self.selected_game_mut() else {
            return;
        };
        game.rounds.push(Round::with_players(game.players.len()));
        let round_index = game.rounds.len() - 1;
        // Creating a round always re-focuses the view onto it.
        if let Some(selection) = self.selected.as_mut() {
            selection.focus = Some(GameFocus::Round(RoundFocus::new(round_index)));
        }
    }

    fn remove_round(&mut self) {
        let Some(selection) = self.selected.as_ref() else {
            return;
        };
        let Some(round_focus) = selection.round() else {
            return;
        };
        let round_index = round_focus.round_index;
        let game_id = selection.game_id.clone();
        let Some(game) = self.games.iter_mut().find(|game| game.id == game_id) else {
            return;
        };
        if round_index < game.rounds.len() {
            game.rounds.remove(round_index);
        }
        let remaining = game.rounds.len();
        let Some(selection) = self.selected.as_mut() else {
            return;
        };
        if remaining == 0 {
            // No last round left to point at; fall back to the game root.
            selection.focus = None;
        } else if let Some(round_focus) = selection.round_mut() {
            round_focus.round_index = remaining - 1;
        }
    }

    fn set_zone_result(&mut self, zone: Zone, result: &ZoneResult) {
        let Some(selection) = self.selected.as_ref() else {
            return;
        };
        let Some(round_focus) = selection.round() else {
            return;
        };
        let Some(player_focus) = round_focus.player.as_ref() else {
            return;
        };
        let round_index = round_focus.round_index;
        let player_index = player_focus.player_index;
        let game_id = selection.game_id.clone();
        let Some(game) = self.games.iter_mut().find(|game| game.id == game_id) else {
            return;
        };
        let Some(round) = game.rounds.get_mut(round_index) else {
            return;
        };
        let Some(player_result) = round.results.get_mut(player_index) else {
            return;
        };
        *player_result.zone_mut(zone) = result.clone();
    }

    fn select_home(&mut self) {
        self.selected = None;
    }

    fn select_game(&mut self, game_id: &str) {
        // Switching games always resets the nested focus.
        self.selected = Some(Selection::new(game_id.to_string()));
    }

    fn select_players(&mut self) {
        if let Some(selection) = self.selected.as_mut() {
            selection.focus = Some(GameFocus::Players);
        }
    }

    fn select_round(&mut self, round_index: usize) {
        if let Some(selection) = self.selected.as_mut() {
            // Opening a round always clears any focused player.
            selection.focus = Some(GameFocus::Round(RoundFocus::new(round_index)));
        }
    }

    fn select_player(&mut self, player_index: usize) {
        if let Some(selection) = self.selected.as_mut()
            && let Some(round_focus) = selection.round_mut()
        {
            round_focus.player = Some(PlayerFocus::new(player_index));
        }
    }

    fn select_zone(&mut self, zone: Zone) {
        if let Some(selection) = self.selected.as_mut()
            && let Some(round_focus) = selection.round_mut()
            && let Some(player_focus) = round_focus.player.as_mut()
        {
            // Re-selecting the focused zone clears it.
            player_focus.zone = if player_focus.zone == Some(zone) {
                None
            } else {
                Some(zone)
            };
        }
    }
}
