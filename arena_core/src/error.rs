//! Engine errors
//!
//! Every variant describes a rejected input. A rejected call never produces
//! a new session, so callers that want the "ignore invalid clicks" behaviour
//! can simply drop the error.

use crate::effect::Effect;
use crate::weapon::WeaponId;
use thiserror::Error;

/// Rejected engine operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{0} has not been unlocked")]
    WeaponLocked(WeaponId),
    #[error("{0} has no durability left")]
    WeaponDepleted(WeaponId),
    #[error("An upgrade offer is open; claim or decline it first")]
    UpgradePending,
    #[error("Upgrade is not on offer: {0}")]
    UpgradeNotOffered(String),
    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),
    #[error("Unknown effect: {0}")]
    UnknownEffect(String),
}

impl GameError {
    pub(crate) fn weapon_not_offered(weapon: WeaponId) -> Self {
        GameError::UpgradeNotOffered(weapon.name().to_string())
    }

    pub(crate) fn effect_not_offered(effect: Effect) -> Self {
        GameError::UpgradeNotOffered(effect.name().to_string())
    }
}
