//! Session - All state of one game, passed into and returned from each operation

use crate::arsenal::Arsenal;
use crate::config::{default_rules, RulesConfig, RulesError};
use crate::effect::{Effect, UpgradeOffer};
use crate::progression::upgrade_offers;
use crate::weapon::WeaponId;
use serde::{Deserialize, Serialize};

/// Where the session sits in the round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the player to pick a weapon
    AwaitingChoice,
    /// An upgrade offer is open; weapon picks are rejected until it closes
    UpgradeOffered,
}

/// Scores, round counter and unlock bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub player_score: u32,
    pub computer_score: u32,
    /// Round about to be played, starting at 1
    pub round: u32,
    /// Weapons available to both sides, in unlock order
    pub unlocked: Vec<WeaponId>,
    /// Weapons that can still be claimed as upgrades
    pub offerable_weapons: Vec<WeaponId>,
}

/// One game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub rules: RulesConfig,
    pub player: Arsenal,
    pub computer: Arsenal,
    pub progress: Progress,
    /// At most one effect is active at a time
    pub effect: Option<Effect>,
    /// Computer choice drawn in advance by a reveal effect
    pub revealed: Option<WeaponId>,
    pub phase: Phase,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    /// Start a session with the bundled rules
    pub fn new() -> Self {
        Self::build(default_rules())
    }

    /// Start a session with custom rules
    pub fn with_rules(rules: RulesConfig) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self::build(rules))
    }

    fn build(rules: RulesConfig) -> Self {
        let starting = &rules.arsenal.starting_weapons;
        let durability = rules.durability.starting;
        let offerable_weapons = if rules.upgrades.weapons_enabled {
            rules.arsenal.unlockable_weapons.clone()
        } else {
            Vec::new()
        };

        Session {
            player: Arsenal::new(starting, durability),
            computer: Arsenal::new(starting, durability),
            progress: Progress {
                player_score: 0,
                computer_score: 0,
                round: 1,
                unlocked: starting.clone(),
                offerable_weapons,
            },
            effect: None,
            revealed: None,
            phase: Phase::AwaitingChoice,
            rules,
        }
    }

    pub fn round(&self) -> u32 {
        self.progress.round
    }

    pub fn player_score(&self) -> u32 {
        self.progress.player_score
    }

    pub fn computer_score(&self) -> u32 {
        self.progress.computer_score
    }

    /// Upgrades that could be claimed right now
    pub fn offers(&self) -> Vec<UpgradeOffer> {
        upgrade_offers(self)
    }

    pub fn is_upgrade_pending(&self) -> bool {
        self.phase == Phase::UpgradeOffered
    }

    /// True when every unlocked player weapon is at zero; all picks are then rejected
    pub fn is_player_exhausted(&self) -> bool {
        self.player.is_exhausted()
    }

    /// True when the computer would have to fall back to a random catalog weapon
    pub fn is_computer_exhausted(&self) -> bool {
        self.computer.is_exhausted()
    }

    /// Scoreboard line
    pub fn scoreboard(&self) -> String {
        format!(
            "Round {} | You: {} | Computer: {}",
            self.progress.round, self.progress.player_score, self.progress.computer_score
        )
    }

    /// Serialize the whole session for a front-end
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
