//! Upgrade progression - Offer schedule, weapon unlocks and effects
//!
//! Like round resolution, every operation here takes the current session by
//! reference and hands back a new one. A rejected upgrade leaves the caller's
//! session untouched.

use crate::effect::{Effect, Upgrade, UpgradeOffer};
use crate::error::GameError;
use crate::round::choose_computer_weapon;
use crate::session::{Phase, Session};
use crate::weapon::WeaponId;
use rand::Rng;

/// Check whether an offer opens once the counter has moved to `new_round`
pub fn should_offer_upgrade(new_round: u32, interval: u32, has_options: bool) -> bool {
    if !has_options || interval == 0 || new_round == 0 {
        return false;
    }
    (new_round - 1) % interval == 0
}

/// Everything the player could claim right now
///
/// Remaining weapons come first in their configured order, followed by the
/// effects. Effects are never used up, so they stay on offer for the whole
/// game when enabled.
pub fn upgrade_offers(session: &Session) -> Vec<UpgradeOffer> {
    let mut offers: Vec<UpgradeOffer> = session
        .progress
        .offerable_weapons
        .iter()
        .map(|w| UpgradeOffer::new(Upgrade::Weapon(*w)))
        .collect();

    if session.rules.upgrades.effects_enabled {
        offers.extend(
            Effect::all()
                .iter()
                .map(|e| UpgradeOffer::new(Upgrade::Effect(*e))),
        );
    }

    offers
}

/// Add a weapon to both arsenals at full durability
///
/// Rejected when the weapon is not among the remaining unlockable weapons,
/// which makes repeated unlocks of the same weapon harmless.
pub fn unlock_weapon(session: &Session, weapon: WeaponId) -> Result<Session, GameError> {
    if !session.progress.offerable_weapons.contains(&weapon) {
        return Err(GameError::weapon_not_offered(weapon));
    }

    let mut new_session = session.clone();
    let durability = new_session.rules.durability.unlocked;

    new_session.progress.offerable_weapons.retain(|w| *w != weapon);
    new_session.progress.unlocked.push(weapon);
    new_session.player.unlock(weapon, durability);
    new_session.computer.unlock(weapon, durability);
    new_session.phase = Phase::AwaitingChoice;

    log::info!(
        "round {}: unlocked {} ({} uses each side)",
        new_session.progress.round,
        weapon,
        durability
    );

    Ok(new_session)
}

/// Activate a single-use effect, replacing any effect already active
///
/// Only allowed while an offer is open. Returns the new session and, for [`Effect::Reveal`], the computer's
/// pre-drawn choice for the next round.
pub fn apply_effect(
    session: &Session,
    effect: Effect,
) -> Result<(Session, Option<WeaponId>), GameError> {
    let mut rng = rand::thread_rng();
    apply_effect_with_rng(session, effect, &mut rng)
}

/// Activate an effect with a provided RNG (for deterministic testing)
pub fn apply_effect_with_rng(
    session: &Session,
    effect: Effect,
    rng: &mut impl Rng,
) -> Result<(Session, Option<WeaponId>), GameError> {
    if !session.rules.upgrades.effects_enabled || session.phase != Phase::UpgradeOffered {
        return Err(GameError::effect_not_offered(effect));
    }

    let mut new_session = session.clone();
    new_session.effect = Some(effect);
    new_session.revealed = match effect {
        Effect::Reveal => Some(choose_computer_weapon(&new_session.computer, rng)),
        Effect::DoublePoints | Effect::Shield => None,
    };
    new_session.phase = Phase::AwaitingChoice;

    log::info!(
        "round {}: effect {} active",
        new_session.progress.round,
        effect.name()
    );
    if let Some(revealed) = new_session.revealed {
        log::debug!("computer will play {}", revealed);
    }

    let revealed = new_session.revealed;
    Ok((new_session, revealed))
}

/// Claim either kind of upgrade
pub fn choose_upgrade(
    session: &Session,
    upgrade: Upgrade,
    rng: &mut impl Rng,
) -> Result<(Session, Option<WeaponId>), GameError> {
    match upgrade {
        Upgrade::Weapon(weapon) => unlock_weapon(session, weapon).map(|s| (s, None)),
        Upgrade::Effect(effect) => apply_effect_with_rng(session, effect, rng),
    }
}

/// Close an open offer without claiming anything
pub fn decline_upgrade(session: &Session) -> Session {
    let mut new_session = session.clone();
    new_session.phase = Phase::AwaitingChoice;
    new_session
}
