//! RoundResult - Immutable record of a resolved round

use super::outcome::Outcome;
use crate::effect::{Effect, UpgradeOffer};
use crate::weapon::WeaponId;
use serde::{Deserialize, Serialize};

/// Everything a front-end needs to render one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    // === Choices ===
    /// Round number that was played
    pub round: u32,
    pub player_choice: WeaponId,
    pub computer_choice: WeaponId,

    // === Scoring ===
    pub outcome: Outcome,
    /// Points added to the winner's score
    pub points_awarded: u32,
    /// Effect that was active for this round (cleared afterwards)
    pub effect_consumed: Option<Effect>,
    /// A shield turned a loss into no score change
    pub shielded: bool,
    /// Narrative line for the player
    pub message: String,

    // === State After ===
    pub player_score: u32,
    pub computer_score: u32,
    /// Round number now awaiting a choice
    pub next_round: u32,
    pub player_durability_left: u32,
    pub computer_durability_left: u32,

    // === Upgrades ===
    /// Whether an upgrade prompt should now be shown
    pub upgrade_offered: bool,
    /// Offers to display when `upgrade_offered` is set
    pub offers: Vec<UpgradeOffer>,
}

impl RoundResult {
    pub fn is_player_win(&self) -> bool {
        self.outcome == Outcome::Player
    }

    pub fn is_computer_win(&self) -> bool {
        self.outcome == Outcome::Computer
    }

    pub fn is_tie(&self) -> bool {
        self.outcome == Outcome::Tie
    }

    /// Short single-line summary
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "Round {}: {} {} vs {} {}",
            self.round,
            self.player_choice.glyph(),
            self.player_choice.label(),
            self.computer_choice.glyph(),
            self.computer_choice.label()
        )];

        match self.outcome {
            Outcome::Player => parts.push(format!("+{} you", self.points_awarded)),
            Outcome::Computer if self.shielded => parts.push("shielded".to_string()),
            Outcome::Computer => parts.push(format!("+{} computer", self.points_awarded)),
            Outcome::Tie => parts.push("tie".to_string()),
        }

        if self.upgrade_offered {
            parts.push("UPGRADE".to_string());
        }

        parts.join(", ")
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Build the narrative line for a round
pub(crate) fn narrate(
    player: WeaponId,
    computer: WeaponId,
    outcome: Outcome,
    effect: Option<Effect>,
    shielded: bool,
) -> String {
    match outcome {
        Outcome::Player => {
            let mut message = format!("{} beats {}. You win this round!", player.label(), computer);
            if effect == Some(Effect::DoublePoints) {
                message.push_str(" Double points!");
            }
            message
        }
        Outcome::Computer if shielded => format!(
            "{} beats {}, but your shield absorbed the loss!",
            computer.label(),
            player
        ),
        Outcome::Computer => {
            format!("{} beats {}. You lose this round!", computer.label(), player)
        }
        Outcome::Tie if player == computer => {
            format!("It's a tie! You both chose {}.", player)
        }
        Outcome::Tie => format!(
            "{} and {} are evenly matched. It's a tie!",
            player.label(),
            computer
        ),
    }
}
