//! arena_core - Round engine for an upgradeable rock-paper-scissors arena
//!
//! This library provides:
//! - Weapon catalog: the static defeats-relation between weapons
//! - Arsenal: per-side weapon durability
//! - Session: scores, round counter, unlocks and the active effect
//! - Round resolution: a player pick in, a new session and a RoundResult out
//! - Progression: the upgrade schedule, weapon unlocks and single-use effects

pub mod arsenal;
pub mod config;
pub mod effect;
pub mod error;
pub mod prelude;
pub mod progression;
pub mod round;
pub mod session;
pub mod weapon;

// Re-export core types for convenience
pub use arsenal::Arsenal;
pub use config::{default_rules, RulesConfig, RulesError};
pub use effect::{Effect, Upgrade, UpgradeOffer};
pub use error::GameError;
pub use progression::{
    apply_effect, apply_effect_with_rng, choose_upgrade, decline_upgrade, should_offer_upgrade,
    unlock_weapon, upgrade_offers,
};
pub use round::{determine_outcome, resolve_round, resolve_round_with_rng, Outcome, RoundResult};
pub use session::{Phase, Progress, Session};
pub use weapon::{describe_beats, WeaponId};
