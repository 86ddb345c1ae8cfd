//! Scoring zones and their multipliers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Multiplication sign used in zone display labels.
pub const MULT_SYMBOL: char = '×';

/// One of the five fixed scoring buckets.
///
/// Each zone applies an integer multiplier to the sum of the dice placed in
/// it. [`Zone::Malus`] subtracts its sum; the other zones add it scaled by
/// the zone's factor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Zone {
    /// Penalty zone: dice here count against the player.
    Malus,
    /// Scores the plain dice sum.
    X1,
    /// Scores double the dice sum.
    X2,
    /// Scores triple the dice sum.
    X3,
    /// Scores four times the dice sum.
    X4,
}

impl Zone {
    /// Returns the integer multiplier applied to this zone's dice sum.
    pub fn multiplier(self) -> i32 {
        match self {
            Zone::Malus => -1,
            Zone::X1 => 1,
            Zone::X2 => 2,
            Zone::X3 => 3,
            Zone::X4 => 4,
        }
    }

    /// Returns the display label for this zone, e.g. `"×-1"` or `"×3"`.
    pub fn label(self) -> String {
        format!("{}{}", MULT_SYMBOL, self.multiplier())
    }
}
