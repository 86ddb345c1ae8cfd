//! Pure score aggregation over the data model.
//!
//! Scores are never stored; every figure is recomputed from the dice lists.

use derive_more::{Display, Error};
use derive_new::new;
use strum::IntoEnumIterator;

use crate::{Game, PlayerResult, Zone, ZoneResult};

/// Error raised by score lookups given an index that resolves to nothing.
///
/// Aggregation fails loudly here: silently returning 0 for a missing player
/// would corrupt displayed totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ScoreError {
    /// The player index does not resolve to a roster entry or result.
    #[display("player index {player_index} out of range ({player_count} players)")]
    PlayerOutOfRange {
        /// The rejected index.
        player_index: usize,
        /// Number of players actually present.
        player_count: usize,
    },
    /// The round bound does not resolve to a recorded round.
    #[display("round index {round_index} out of range ({round_count} rounds)")]
    RoundOutOfRange {
        /// The rejected index.
        round_index: usize,
        /// Number of rounds actually present.
        round_count: usize,
    },
}

/// Sums the pip values of a zone's dice. Empty results sum to 0.
pub fn result_sum(result: &ZoneResult) -> i32 {
    result.iter().map(|dice| i32::from(dice.pips())).sum()
}

/// Scores one zone: the dice sum scaled by the zone's multiplier.
pub fn zone_score(zone: Zone, result: &ZoneResult) -> i32 {
    result_sum(result) * zone.multiplier()
}

/// Scores one player's round: the zone scores summed over all five zones.
///
/// Depends only on the multiset of dice per zone, never on insertion order.
pub fn result_score(result: &PlayerResult) -> i32 {
    Zone::iter()
        .map(|zone| zone_score(zone, result.zone(zone)))
        .sum()
}

/// Sums a player's round scores up to and including `upto_round`.
///
/// With `None`, sums across every recorded round; a game with no rounds
/// totals 0.
///
/// # Errors
///
/// Returns [`ScoreError`] if `player_index` is not in the roster, if
/// `upto_round` is past the last recorded round, or if a round is missing
/// the player's result.
pub fn player_score(
    game: &Game,
    player_index: usize,
    upto_round: Option<usize>,
) -> Result<i32, ScoreError> {
    if player_index >= game.players.len() {
        return Err(ScoreError::PlayerOutOfRange {
            player_index,
            player_count: game.players.len(),
        });
    }
    let bound = match upto_round {
        Some(round_index) if round_index >= game.rounds.len() => {
            return Err(ScoreError::RoundOutOfRange {
                round_index,
                round_count: game.rounds.len(),
            });
        }
        Some(round_index) => round_index + 1,
        None => game.rounds.len(),
    };
    let mut sum = 0;
    for round in &game.rounds[..bound] {
        let result = round
            .results
            .get(player_index)
            .ok_or(ScoreError::PlayerOutOfRange {
                player_index,
                player_count: round.results.len(),
            })?;
        sum += result_score(result);
    }
    Ok(sum)
}

/// Renders a score with an explicit sign for strictly positive values.
///
/// Negative values keep their sign and zero renders as `"0"`.
pub fn print_score(score: i32) -> String {
    if score > 0 {
        format!("+{score}")
    } else {
        score.to_string()
    }
}

/// A player's cumulative total after each round, oldest round first.
///
/// The last element equals [`player_score`] over the whole game; an empty
/// round list yields an empty series.
///
/// # Errors
///
/// Returns [`ScoreError`] if `player_index` is not in the roster or a round
/// is missing the player's result.
pub fn score_series(game: &Game, player_index: usize) -> Result<Vec<i32>, ScoreError> {
    if player_index >= game.players.len() {
        return Err(ScoreError::PlayerOutOfRange {
            player_index,
            player_count: game.players.len(),
        });
    }
    let mut series = Vec::with_capacity(game.rounds.len());
    let mut total = 0;
    for round in &game.rounds {
        let result = round
            .results
            .get(player_index)
            .ok_or(ScoreError::PlayerOutOfRange {
                player_index,
                player_count: round.results.len(),
            })?;
        total += result_score(result);
        series.push(total);
    }
    Ok(series)
}

/// One leaderboard row: a roster index and its overall total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Standing {
    /// Index of the player in the game's roster.
    pub player_index: usize,
    /// The player's total across all rounds.
    pub score: i32,
}

/// Ranks every player by overall total, highest first.
///
/// Ties keep roster order.
///
/// # Errors
///
/// Returns [`ScoreError`] if any round is missing a player's result.
pub fn standings(game: &Game) -> Result<Vec<Standing>, ScoreError> {
    let mut rows = Vec::with_capacity(game.players.len());
    for player_index in 0..game.players.len() {
        rows.push(Standing::new(
            player_index,
            player_score(game, player_index, None)?,
        ));
    }
    rows.sort_by_key(|row| std::cmp::Reverse(row.score));
    Ok(rows)
}
