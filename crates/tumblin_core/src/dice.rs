//! Dice faces and pip-count conversions.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A single die face, pip values 1 through 6.
///
/// Serialized as its pip count, so persisted sessions store plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Dice {
    /// One pip.
    One,
    /// Two pips.
    Two,
    /// Three pips.
    Three,
    /// Four pips.
    Four,
    /// Five pips.
    Five,
    /// Six pips.
    Six,
}

impl Dice {
    /// Returns the pip count of this face.
    pub fn pips(self) -> u8 {
        match self {
            Dice::One => 1,
            Dice::Two => 2,
            Dice::Three => 3,
            Dice::Four => 4,
            Dice::Five => 5,
            Dice::Six => 6,
        }
    }

    /// Looks up the face with the given pip count.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDice`] if `pips` is outside `1..=6`.
    pub fn from_pips(pips: u8) -> Result<Self, InvalidDice> {
        match pips {
            1 => Ok(Dice::One),
            2 => Ok(Dice::Two),
            3 => Ok(Dice::Three),
            4 => Ok(Dice::Four),
            5 => Ok(Dice::Five),
            6 => Ok(Dice::Six),
            _ => Err(InvalidDice { pips }),
        }
    }
}

impl From<Dice> for u8 {
    fn from(dice: Dice) -> Self {
        dice.pips()
    }
}

impl TryFrom<u8> for Dice {
    type Error = InvalidDice;

    fn try_from(pips: u8) -> Result<Self, Self::Error> {
        Self::from_pips(pips)
    }
}

/// Error for a pip count outside the valid `1..=6` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid dice value {pips}, expected 1..=6")]
pub struct InvalidDice {
    /// The rejected pip count.
    pub pips: u8,
}
