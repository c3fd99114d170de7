//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// State
pub use crate::arsenal::Arsenal;
pub use crate::session::{Phase, Progress, Session};

// Catalog
pub use crate::effect::{Effect, Upgrade, UpgradeOffer};
pub use crate::weapon::WeaponId;

// Operations
pub use crate::progression::{apply_effect, choose_upgrade, decline_upgrade, unlock_weapon};
pub use crate::round::{resolve_round, Outcome, RoundResult};

// Errors and config
pub use crate::config::{default_rules, RulesConfig, RulesError};
pub use crate::error::GameError;
