//! Game rules configuration

use crate::weapon::WeaponId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Why a rules file could not be used
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Cannot read rules file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Malformed rules TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Unplayable rules: {0}")]
    Invalid(String),
}

/// Tunable game rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub durability: DurabilityRules,
    #[serde(default)]
    pub arsenal: ArsenalRules,
    #[serde(default)]
    pub upgrades: UpgradeRules,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            durability: DurabilityRules::default(),
            arsenal: ArsenalRules::default(),
            upgrades: UpgradeRules::default(),
        }
    }
}

impl RulesConfig {
    /// Reject rule sets the engine cannot play
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.durability.starting == 0 {
            return Err(RulesError::Invalid(
                "durability.starting must be at least 1".to_string(),
            ));
        }
        if self.durability.unlocked == 0 {
            return Err(RulesError::Invalid(
                "durability.unlocked must be at least 1".to_string(),
            ));
        }
        if self.upgrades.interval == 0 {
            return Err(RulesError::Invalid(
                "upgrades.interval must be at least 1".to_string(),
            ));
        }
        if self.arsenal.starting_weapons.is_empty() {
            return Err(RulesError::Invalid(
                "arsenal.starting_weapons must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for weapon in self
            .arsenal
            .starting_weapons
            .iter()
            .chain(self.arsenal.unlockable_weapons.iter())
        {
            if !seen.insert(*weapon) {
                return Err(RulesError::Invalid(format!(
                    "{} is listed more than once across starting and unlockable weapons",
                    weapon
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurabilityRules {
    /// Uses of each starting weapon
    #[serde(default = "default_durability")]
    pub starting: u32,
    /// Uses granted to a weapon when it is unlocked
    #[serde(default = "default_durability")]
    pub unlocked: u32,
}

impl Default for DurabilityRules {
    fn default() -> Self {
        DurabilityRules {
            starting: 3,
            unlocked: 3,
        }
    }
}

fn default_durability() -> u32 {
    3
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArsenalRules {
    #[serde(default = "default_starting_weapons")]
    pub starting_weapons: Vec<WeaponId>,
    /// Weapons offered as upgrades, in offer order
    #[serde(default = "default_unlockable_weapons")]
    pub unlockable_weapons: Vec<WeaponId>,
}

impl Default for ArsenalRules {
    fn default() -> Self {
        ArsenalRules {
            starting_weapons: default_starting_weapons(),
            unlockable_weapons: default_unlockable_weapons(),
        }
    }
}

fn default_starting_weapons() -> Vec<WeaponId> {
    vec![WeaponId::Rock, WeaponId::Paper, WeaponId::Scissors]
}

fn default_unlockable_weapons() -> Vec<WeaponId> {
    vec![WeaponId::Fire, WeaponId::Air]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeRules {
    /// An offer opens when (round - 1) is a multiple of this
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Offer the remaining unlockable weapons
    #[serde(default = "default_enabled")]
    pub weapons_enabled: bool,
    /// Offer single-use effects
    #[serde(default = "default_enabled")]
    pub effects_enabled: bool,
}

impl Default for UpgradeRules {
    fn default() -> Self {
        UpgradeRules {
            interval: 3,
            weapons_enabled: true,
            effects_enabled: true,
        }
    }
}

fn default_interval() -> u32 {
    3
}

fn default_enabled() -> bool {
    true
}

/// Load and validate rules from a TOML file
pub fn load_rules(path: &Path) -> Result<RulesConfig, RulesError> {
    let content = std::fs::read_to_string(path)?;
    parse_rules(&content)
}

/// Load and validate rules from a TOML string
pub fn parse_rules(content: &str) -> Result<RulesConfig, RulesError> {
    let rules: RulesConfig = toml::from_str(content)?;
    rules.validate()?;
    Ok(rules)
}

/// Get the bundled rules
pub fn default_rules() -> RulesConfig {
    let toml = include_str!("../../config/rules.toml");
    parse_rules(toml).unwrap_or_else(|e| {
        log::warn!("bundled rules rejected ({}), using built-in defaults", e);
        RulesConfig::default()
    })
}
