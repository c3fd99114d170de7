//! Weapon catalog - The static defeats-relation between weapons

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for a weapon in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponId {
    Rock,
    Paper,
    Scissors,
    Fire,
    Air,
}

impl WeaponId {
    /// Get all weapons in catalog order
    pub fn all() -> &'static [WeaponId] {
        &[
            WeaponId::Rock,
            WeaponId::Paper,
            WeaponId::Scissors,
            WeaponId::Fire,
            WeaponId::Air,
        ]
    }

    /// Lowercase identifier, as used in config files and messages
    pub fn name(&self) -> &'static str {
        match self {
            WeaponId::Rock => "rock",
            WeaponId::Paper => "paper",
            WeaponId::Scissors => "scissors",
            WeaponId::Fire => "fire",
            WeaponId::Air => "air",
        }
    }

    /// Capitalised display label
    pub fn label(&self) -> &'static str {
        match self {
            WeaponId::Rock => "Rock",
            WeaponId::Paper => "Paper",
            WeaponId::Scissors => "Scissors",
            WeaponId::Fire => "Fire",
            WeaponId::Air => "Air",
        }
    }

    /// Display glyph
    pub fn glyph(&self) -> &'static str {
        match self {
            WeaponId::Rock => "🪨",
            WeaponId::Paper => "📄",
            WeaponId::Scissors => "✂️",
            WeaponId::Fire => "🔥",
            WeaponId::Air => "💨",
        }
    }

    /// Weapons this one defeats
    ///
    /// Rock and air are unrelated, so that pair ties.
    pub fn beats(&self) -> &'static [WeaponId] {
        match self {
            WeaponId::Rock => &[WeaponId::Scissors, WeaponId::Fire],
            WeaponId::Paper => &[WeaponId::Rock],
            WeaponId::Scissors => &[WeaponId::Paper, WeaponId::Air],
            WeaponId::Fire => &[WeaponId::Paper, WeaponId::Scissors],
            WeaponId::Air => &[WeaponId::Fire, WeaponId::Paper],
        }
    }

    /// Check if this weapon defeats another
    pub fn defeats(&self, other: WeaponId) -> bool {
        self.beats().contains(&other)
    }
}

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeaponId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        WeaponId::all()
            .iter()
            .copied()
            .find(|w| w.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| GameError::UnknownWeapon(s.to_string()))
    }
}

/// Render the "Beats: a, b" text shown on weapon tooltips and upgrade cards
pub fn describe_beats(weapon: WeaponId) -> String {
    let names: Vec<&str> = weapon.beats().iter().map(|w| w.name()).collect();
    format!("Beats: {}", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_antisymmetric() {
        for a in WeaponId::all() {
            for b in WeaponId::all() {
                assert!(
                    !(a.defeats(*b) && b.defeats(*a)),
                    "{} and {} defeat each other",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_only_rock_and_air_are_unrelated() {
        let mut unrelated = Vec::new();
        for (i, a) in WeaponId::all().iter().enumerate() {
            for b in &WeaponId::all()[i + 1..] {
                if !a.defeats(*b) && !b.defeats(*a) {
                    unrelated.push((*a, *b));
                }
            }
        }
        assert_eq!(unrelated, vec![(WeaponId::Rock, WeaponId::Air)]);
    }

    #[test]
    fn test_no_weapon_beats_itself() {
        for w in WeaponId::all() {
            assert!(!w.defeats(*w));
        }
        assert_eq!(WeaponId::Paper.beats(), &[WeaponId::Rock]);
        assert!(WeaponId::Air.defeats(WeaponId::Paper));
    }

    #[test]
    fn test_parse_weapon_ids() {
        assert_eq!("rock".parse::<WeaponId>().unwrap(), WeaponId::Rock);
        assert_eq!(" Air ".parse::<WeaponId>().unwrap(), WeaponId::Air);
        assert!(matches!(
            "lizard".parse::<WeaponId>(),
            Err(GameError::UnknownWeapon(_))
        ));
    }

    #[test]
    fn test_describe_beats() {
        assert_eq!(describe_beats(WeaponId::Fire), "Beats: paper, scissors");
        assert_eq!(describe_beats(WeaponId::Rock), "Beats: scissors, fire");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&WeaponId::Scissors).unwrap();
        assert_eq!(json, "\"scissors\"");
    }
}
