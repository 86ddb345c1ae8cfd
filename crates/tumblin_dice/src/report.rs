//! Plain-text score reports for the CLI.

use strum::IntoEnumIterator;

use tumblin_core::{
    Game, ScoreError, SessionState, Zone, player_score, print_score, result_score, result_sum,
    standings, zone_score,
};

/// Lists every tracked game, one line per game, marking the selected one.
pub fn games_list(state: &SessionState) -> String {
    if state.games.is_empty() {
        return "No games yet. Create one with `new`.\n".to_string();
    }
    let selected_id = state.selected.as_ref().map(|s| s.game_id.as_str());
    let mut out = String::new();
    for game in &state.games {
        let marker = if Some(game.id.as_str()) == selected_id {
            '*'
        } else {
            ' '
        };
        out.push_str(&format!(
            "{} {}  {}  ({} players, {} rounds)\n",
            marker,
            game.id,
            game.name,
            game.players.len(),
            game.rounds.len(),
        ));
    }
    out
}

/// Renders the per-round score table with running totals.
///
/// # Errors
///
/// Returns [`ScoreError`] if a round is missing a player's result.
pub fn scoreboard(game: &Game) -> Result<String, ScoreError> {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", game.name, game.id));
    if game.players.is_empty() {
        out.push_str("No players yet.\n");
        return Ok(out);
    }

    out.push_str(&format!("{:<8}", "Round"));
    for player in &game.players {
        out.push_str(&format!("{:>10}", player.name));
    }
    out.push('\n');

    for (round_index, round) in game.rounds.iter().enumerate() {
        out.push_str(&format!("{:<8}", format!("#{}", round_index + 1)));
        for player_index in 0..game.players.len() {
            let result =
                round
                    .results
                    .get(player_index)
                    .ok_or(ScoreError::PlayerOutOfRange {
                        player_index,
                        player_count: round.results.len(),
                    })?;
            out.push_str(&format!("{:>10}", print_score(result_score(result))));
        }
        out.push('\n');
    }

    out.push_str(&format!("{:<8}", "Total"));
    for player_index in 0..game.players.len() {
        let total = player_score(game, player_index, None)?;
        out.push_str(&format!("{:>10}", total));
    }
    out.push('\n');
    Ok(out)
}

/// Renders the leaderboard, highest total first.
///
/// # Errors
///
/// Returns [`ScoreError`] if a round is missing a player's result.
pub fn standings_report(game: &Game) -> Result<String, ScoreError> {
    let mut out = String::new();
    for (rank, standing) in standings(game)?.iter().enumerate() {
        let name = game
            .players
            .get(standing.player_index)
            .map(|player| player.name.as_str())
            .unwrap_or("?");
        out.push_str(&format!(
            "{}. {}  {}\n",
            rank + 1,
            name,
            print_score(standing.score)
        ));
    }
    Ok(out)
}

/// Renders one player's zone sheet for one round.
///
/// # Errors
///
/// Returns [`ScoreError`] if the round or player index resolves to nothing.
pub fn player_sheet(
    game: &Game,
    round_index: usize,
    player_index: usize,
) -> Result<String, ScoreError> {
    let round = game
        .rounds
        .get(round_index)
        .ok_or(ScoreError::RoundOutOfRange {
            round_index,
            round_count: game.rounds.len(),
        })?;
    let player = game
        .players
        .get(player_index)
        .ok_or(ScoreError::PlayerOutOfRange {
            player_index,
            player_count: game.players.len(),
        })?;
    let result = round
        .results
        .get(player_index)
        .ok_or(ScoreError::PlayerOutOfRange {
            player_index,
            player_count: round.results.len(),
        })?;

    let mut out = String::new();
    out.push_str(&format!(
        "Round {} - {} ({})\n",
        round_index + 1,
        player.name,
        print_score(result_score(result))
    ));
    for zone in Zone::iter() {
        let dice = result.zone(zone);
        let pips: Vec<String> = dice.iter().map(|d| d.pips().to_string()).collect();
        out.push_str(&format!(
            "  {:<4} [{}] sum {} -> {}\n",
            zone.label(),
            pips.join(" "),
            result_sum(dice),
            print_score(zone_score(zone, dice))
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumblin_core::{Dice, Player, PlayerResult, Round};

    fn sample_game() -> Game {
        let mut game = Game::new("a1b2c3d4e5".into(), "Game 1".into());
        game.players.push(Player::new("Alice".into(), "#ff0000".into()));
        game.players.push(Player::new("Bob".into(), "#00ff00".into()));
        let mut result = PlayerResult::default();
        result.x2 = vec![Dice::Five, Dice::Six];
        result.malus = vec![Dice::Three, Dice::Four];
        game.rounds.push(Round {
            results: vec![result, PlayerResult::default()],
        });
        game
    }

    #[test]
    fn test_scoreboard_contains_round_scores_and_totals() {
        let game = sample_game();
        let board = scoreboard(&game).expect("aligned game");
        assert!(board.contains("+15"));
        assert!(board.contains("Total"));
        assert!(board.contains("Alice"));
    }

    #[test]
    fn test_standings_report_ranks_by_total() {
        let game = sample_game();
        let report = standings_report(&game).expect("aligned game");
        assert!(report.starts_with("1. Alice"));
        assert!(report.contains("2. Bob"));
    }

    #[test]
    fn test_player_sheet_lists_all_zones() {
        let game = sample_game();
        let sheet = player_sheet(&game, 0, 0).expect("valid indices");
        for zone in Zone::iter() {
            assert!(sheet.contains(&zone.label()));
        }
        assert!(sheet.contains("+22"));
        assert!(sheet.contains("-7"));
    }
}
