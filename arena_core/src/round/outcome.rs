//! Outcome of a single pairing

use crate::weapon::WeaponId;
use serde::{Deserialize, Serialize};

/// Who won a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Player,
    Computer,
    Tie,
}

impl Outcome {
    /// Outcome from the other side's point of view
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::Player => Outcome::Computer,
            Outcome::Computer => Outcome::Player,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// Decide a pairing from the catalog's defeats-relation
///
/// Pairs the catalog leaves unrelated count as a tie.
pub fn determine_outcome(player: WeaponId, computer: WeaponId) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.defeats(computer) {
        Outcome::Player
    } else if computer.defeats(player) {
        Outcome::Computer
    } else {
        Outcome::Tie
    }
}
