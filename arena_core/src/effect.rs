//! Effects and upgrades offered between rounds

use crate::error::GameError;
use crate::weapon::{describe_beats, WeaponId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Single-use modifier for the next round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// A player win scores two points
    DoublePoints,
    /// A player loss awards the computer nothing
    Shield,
    /// The computer's next choice is drawn in advance and shown
    Reveal,
}

impl Effect {
    pub fn all() -> &'static [Effect] {
        &[Effect::DoublePoints, Effect::Shield, Effect::Reveal]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Effect::DoublePoints => "double_points",
            Effect::Shield => "shield",
            Effect::Reveal => "reveal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Effect::DoublePoints => "Double Points",
            Effect::Shield => "Shield",
            Effect::Reveal => "Reveal",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Effect::DoublePoints => "✨",
            Effect::Shield => "🛡️",
            Effect::Reveal => "🔮",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Effect::DoublePoints => "Win the next round for 2 points",
            Effect::Shield => "Your next loss does not score for the computer",
            Effect::Reveal => "See the computer's next weapon before you choose",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Effect {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Effect::all()
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| GameError::UnknownEffect(s.to_string()))
    }
}

/// Something the player can claim when an offer opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Upgrade {
    Weapon(WeaponId),
    Effect(Effect),
}

impl From<WeaponId> for Upgrade {
    fn from(weapon: WeaponId) -> Self {
        Upgrade::Weapon(weapon)
    }
}

impl From<Effect> for Upgrade {
    fn from(effect: Effect) -> Self {
        Upgrade::Effect(effect)
    }
}

/// Upgrade card ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeOffer {
    pub upgrade: Upgrade,
    pub glyph: String,
    pub title: String,
    pub description: String,
}

impl UpgradeOffer {
    pub fn new(upgrade: Upgrade) -> Self {
        match upgrade {
            Upgrade::Weapon(w) => UpgradeOffer {
                upgrade,
                glyph: w.glyph().to_string(),
                title: w.label().to_string(),
                description: describe_beats(w),
            },
            Upgrade::Effect(e) => UpgradeOffer {
                upgrade,
                glyph: e.glyph().to_string(),
                title: e.label().to_string(),
                description: e.description().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_offer_describes_beats() {
        let offer = UpgradeOffer::new(Upgrade::Weapon(WeaponId::Air));
        assert_eq!(offer.title, "Air");
        assert_eq!(offer.description, "Beats: fire, paper");
    }

    #[test]
    fn test_effect_offer() {
        let offer = UpgradeOffer::new(Effect::Shield.into());
        assert_eq!(offer.upgrade, Upgrade::Effect(Effect::Shield));
        assert_eq!(offer.title, "Shield");
    }

    #[test]
    fn test_parse_effect() {
        assert_eq!("double_points".parse::<Effect>().unwrap(), Effect::DoublePoints);
        assert!(matches!("haste".parse::<Effect>(), Err(GameError::UnknownEffect(_))));
    }

    #[test]
    fn test_upgrade_serde_tagging() {
        let json = serde_json::to_string(&Upgrade::Weapon(WeaponId::Fire)).unwrap();
        assert_eq!(json, r#"{"kind":"weapon","id":"fire"}"#);
        let back: Upgrade = serde_json::from_str(r#"{"kind":"effect","id":"reveal"}"#).unwrap();
        assert_eq!(back, Upgrade::Effect(Effect::Reveal));
    }
}
