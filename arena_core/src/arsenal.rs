//! Arsenal - Per-side weapon durability

use crate::weapon::WeaponId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Remaining uses of each unlocked weapon for one side
///
/// A weapon present in the map is unlocked. A weapon with zero durability
/// stays unlocked but can no longer be selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arsenal {
    durability: BTreeMap<WeaponId, u32>,
}

impl Arsenal {
    /// Create an arsenal with every listed weapon at the given durability
    pub fn new(weapons: &[WeaponId], durability: u32) -> Self {
        Arsenal {
            durability: weapons.iter().map(|w| (*w, durability)).collect(),
        }
    }

    /// Remaining uses (0 for weapons that are not unlocked)
    pub fn durability(&self, weapon: WeaponId) -> u32 {
        self.durability.get(&weapon).copied().unwrap_or(0)
    }

    pub fn is_unlocked(&self, weapon: WeaponId) -> bool {
        self.durability.contains_key(&weapon)
    }

    /// Check if the weapon can be selected this round
    pub fn is_usable(&self, weapon: WeaponId) -> bool {
        self.durability(weapon) > 0
    }

    /// Selectable weapons in catalog order
    pub fn usable(&self) -> Vec<WeaponId> {
        self.durability
            .iter()
            .filter(|(_, d)| **d > 0)
            .map(|(w, _)| *w)
            .collect()
    }

    /// Unlocked weapons in catalog order
    pub fn weapons(&self) -> Vec<WeaponId> {
        self.durability.keys().copied().collect()
    }

    /// Use the weapon once, returning the remaining durability
    pub fn consume(&mut self, weapon: WeaponId) -> u32 {
        match self.durability.get_mut(&weapon) {
            Some(d) => {
                *d = d.saturating_sub(1);
                *d
            }
            None => 0,
        }
    }

    /// Add a weapon (or restore an existing one) at the given durability
    pub fn unlock(&mut self, weapon: WeaponId, durability: u32) {
        self.durability.insert(weapon, durability);
    }

    /// True when nothing in the arsenal can be selected
    pub fn is_exhausted(&self) -> bool {
        self.durability.values().all(|d| *d == 0)
    }

    /// Sum of remaining uses across all weapons
    pub fn total_durability(&self) -> u32 {
        self.durability.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting() -> Arsenal {
        Arsenal::new(&[WeaponId::Rock, WeaponId::Paper, WeaponId::Scissors], 3)
    }

    #[test]
    fn test_new_arsenal() {
        let arsenal = starting();
        assert_eq!(arsenal.durability(WeaponId::Rock), 3);
        assert!(arsenal.is_unlocked(WeaponId::Paper));
        assert!(!arsenal.is_unlocked(WeaponId::Fire));
        assert_eq!(arsenal.durability(WeaponId::Fire), 0);
        assert_eq!(arsenal.total_durability(), 9);
    }

    #[test]
    fn test_consume_saturates() {
        let mut arsenal = starting();
        assert_eq!(arsenal.consume(WeaponId::Rock), 2);
        assert_eq!(arsenal.consume(WeaponId::Rock), 1);
        assert_eq!(arsenal.consume(WeaponId::Rock), 0);
        assert_eq!(arsenal.consume(WeaponId::Rock), 0);
        assert!(!arsenal.is_usable(WeaponId::Rock));
        assert!(arsenal.is_unlocked(WeaponId::Rock));
    }

    #[test]
    fn test_consume_locked_weapon_is_noop() {
        let mut arsenal = starting();
        assert_eq!(arsenal.consume(WeaponId::Air), 0);
        assert!(!arsenal.is_unlocked(WeaponId::Air));
    }

    #[test]
    fn test_usable_skips_depleted() {
        let mut arsenal = Arsenal::new(&[WeaponId::Rock, WeaponId::Fire], 1);
        arsenal.consume(WeaponId::Rock);
        assert_eq!(arsenal.usable(), vec![WeaponId::Fire]);
        assert_eq!(arsenal.weapons(), vec![WeaponId::Rock, WeaponId::Fire]);
    }

    #[test]
    fn test_exhausted() {
        let mut arsenal = Arsenal::new(&[WeaponId::Paper], 1);
        assert!(!arsenal.is_exhausted());
        arsenal.consume(WeaponId::Paper);
        assert!(arsenal.is_exhausted());

        arsenal.unlock(WeaponId::Air, 3);
        assert!(!arsenal.is_exhausted());
        assert_eq!(arsenal.durability(WeaponId::Air), 3);
    }
}
