//! Round resolution - Apply a player's pick to a session

use super::outcome::{determine_outcome, Outcome};
use super::result::{narrate, RoundResult};
use crate::arsenal::Arsenal;
use crate::effect::Effect;
use crate::error::GameError;
use crate::progression::{should_offer_upgrade, upgrade_offers};
use crate::session::{Phase, Session};
use crate::weapon::WeaponId;
use rand::seq::SliceRandom;
use rand::Rng;

/// Resolve one round against the computer (immutable API)
///
/// Returns the new session and the round result. The steps are:
/// 1. Reject picks while an upgrade offer is open, or of locked/depleted weapons
/// 2. Take the revealed computer choice, or draw one from its usable weapons
/// 3. Use up one durability of each chosen weapon
/// 4. Score the outcome, honouring any active effect
/// 5. Advance the round counter and clear the effect
/// 6. Open an upgrade offer when the schedule says so and options remain
pub fn resolve_round(
    session: &Session,
    player_choice: WeaponId,
) -> Result<(Session, RoundResult), GameError> {
    let mut rng = rand::thread_rng();
    resolve_round_with_rng(session, player_choice, &mut rng)
}

/// Resolve a round with a provided RNG (for deterministic testing)
pub fn resolve_round_with_rng(
    session: &Session,
    player_choice: WeaponId,
    rng: &mut impl Rng,
) -> Result<(Session, RoundResult), GameError> {
    // Step 1: Validate the pick
    if session.phase == Phase::UpgradeOffered {
        return Err(GameError::UpgradePending);
    }
    if !session.player.is_unlocked(player_choice) {
        return Err(GameError::WeaponLocked(player_choice));
    }
    if !session.player.is_usable(player_choice) {
        return Err(GameError::WeaponDepleted(player_choice));
    }

    let mut new_session = session.clone();
    let round = new_session.progress.round;

    // Step 2: Computer pick
    let computer_choice = match new_session.revealed.take() {
        Some(revealed) => revealed,
        None => choose_computer_weapon(&new_session.computer, rng),
    };

    // Step 3: Durability
    let player_durability_left = new_session.player.consume(player_choice);
    let computer_durability_left = new_session.computer.consume(computer_choice);

    // Step 4: Scoring
    let outcome = determine_outcome(player_choice, computer_choice);
    let effect = new_session.effect.take();
    let mut shielded = false;
    let points_awarded = match outcome {
        Outcome::Player => {
            let points = if effect == Some(Effect::DoublePoints) { 2 } else { 1 };
            new_session.progress.player_score += points;
            points
        }
        Outcome::Computer if effect == Some(Effect::Shield) => {
            shielded = true;
            0
        }
        Outcome::Computer => {
            new_session.progress.computer_score += 1;
            1
        }
        Outcome::Tie => 0,
    };

    // Step 5: Advance
    new_session.progress.round += 1;
    let next_round = new_session.progress.round;

    // Step 6: Upgrade offer
    let offers = upgrade_offers(&new_session);
    let upgrade_offered = should_offer_upgrade(
        next_round,
        new_session.rules.upgrades.interval,
        !offers.is_empty(),
    );
    if upgrade_offered {
        new_session.phase = Phase::UpgradeOffered;
    }

    let message = narrate(player_choice, computer_choice, outcome, effect, shielded);

    log::debug!(
        "round {}: {} vs {} -> {:?} (+{}), score {}-{}",
        round,
        player_choice,
        computer_choice,
        outcome,
        points_awarded,
        new_session.progress.player_score,
        new_session.progress.computer_score
    );

    let result = RoundResult {
        round,
        player_choice,
        computer_choice,
        outcome,
        points_awarded,
        effect_consumed: effect,
        shielded,
        message,
        player_score: new_session.progress.player_score,
        computer_score: new_session.progress.computer_score,
        next_round,
        player_durability_left,
        computer_durability_left,
        upgrade_offered,
        offers: if upgrade_offered { offers } else { Vec::new() },
    };

    Ok((new_session, result))
}

/// Draw the computer's weapon uniformly from its usable weapons
///
/// When nothing is usable the draw falls back to the whole catalog; the
/// chosen weapon's durability then stays at zero.
pub fn choose_computer_weapon(arsenal: &Arsenal, rng: &mut impl Rng) -> WeaponId {
    let usable = arsenal.usable();
    match usable.choose(rng) {
        Some(weapon) => *weapon,
        None => {
            log::warn!("computer arsenal exhausted, drawing from the full catalog");
            let catalog = WeaponId::all();
            catalog[rng.gen_range(0..catalog.len())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Session where the computer can only play the given weapon
    fn rigged(computer: WeaponId) -> Session {
        let mut session = Session::new();
        session.computer = Arsenal::new(&[computer], 10);
        session
    }

    #[test]
    fn test_player_win() {
        let session = rigged(WeaponId::Scissors);
        let (new_session, result) =
            resolve_round_with_rng(&session, WeaponId::Rock, &mut rng()).unwrap();

        assert_eq!(result.outcome, Outcome::Player);
        assert_eq!(result.computer_choice, WeaponId::Scissors);
        assert!(result.message.starts_with("Rock beats scissors"));
        assert_eq!(result.player_score, 1);
        assert_eq!(new_session.progress.player_score, 1);
        assert_eq!(new_session.progress.computer_score, 0);
    }

    #[test]
    fn test_computer_win() {
        let session = rigged(WeaponId::Paper);
        let (new_session, result) =
            resolve_round_with_rng(&session, WeaponId::Rock, &mut rng()).unwrap();

        assert_eq!(result.outcome, Outcome::Computer);
        assert_eq!(new_session.progress.computer_score, 1);
        assert_eq!(result.points_awarded, 1);
    }

    #[test]
    fn test_tie_scores_nothing() {
        let session = rigged(WeaponId::Rock);
        let (new_session, result) =
            resolve_round_with_rng(&session, WeaponId::Rock, &mut rng()).unwrap();

        assert!(result.is_tie());
        assert_eq!(result.points_awarded, 0);
        assert_eq!(new_session.progress.player_score, 0);
        assert_eq!(new_session.progress.computer_score, 0);
    }

    #[test]
    fn test_durability_consumed_on_both_sides() {
        let session = rigged(WeaponId::Paper);
        let (new_session, result) =
            resolve_round_with_rng(&session, WeaponId::Scissors, &mut rng()).unwrap();

        assert_eq!(new_session.player.durability(WeaponId::Scissors), 2);
        assert_eq!(new_session.computer.durability(WeaponId::Paper), 9);
        assert_eq!(result.player_durability_left, 2);
        assert_eq!(result.computer_durability_left, 9);
        // Untouched weapons keep their durability
        assert_eq!(new_session.player.durability(WeaponId::Rock), 3);
    }

    #[test]
    fn test_round_counter_advances() {
        let session = Session::new();
        let (new_session, result) =
            resolve_round_with_rng(&session, WeaponId::Paper, &mut rng()).unwrap();

        assert_eq!(result.round, 1);
        assert_eq!(result.next_round, 2);
        assert_eq!(new_session.round(), 2);
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn test_depleted_weapon_rejected() {
        let mut session = Session::new();
        for _ in 0..3 {
            session.player.consume(WeaponId::Rock);
        }
        let result = resolve_round_with_rng(&session, WeaponId::Rock, &mut rng());
        assert_eq!(result.unwrap_err(), GameError::WeaponDepleted(WeaponId::Rock));
    }

    #[test]
    fn test_locked_weapon_rejected() {
        let result = resolve_round_with_rng(&Session::new(), WeaponId::Fire, &mut rng());
        assert_eq!(result.unwrap_err(), GameError::WeaponLocked(WeaponId::Fire));
    }

    #[test]
    fn test_pending_upgrade_blocks_round() {
        let mut session = Session::new();
        session.phase = Phase::UpgradeOffered;
        let result = resolve_round_with_rng(&session, WeaponId::Rock, &mut rng());
        assert_eq!(result.unwrap_err(), GameError::UpgradePending);
    }

    #[test]
    fn test_double_points() {
        let mut session = rigged(WeaponId::Scissors);
        session.effect = Some(Effect::DoublePoints);

        let (new_session, result) =
            resolve_round_with_rng(&session, WeaponId::Rock, &mut rng()).unwrap();

        assert_eq!(result.points_awarded, 2);
        assert_eq!(new_session.progress.player_score, 2);
        assert_eq!(result.effect_consumed, Some(Effect::DoublePoints));
        assert!(new_session.effect.is_none());
    }

    #[test]
    fn test_double_points_cleared_on_loss() {
        let mut session = rigged(WeaponId::Paper);
        session.effect = Some(Effect::DoublePoints);

        let (new_session, result) =
            resolve_round_with_rng(&session, WeaponId::Rock, &mut rng()).unwrap();

        assert_eq!(new_session.progress.computer_score, 1);
        assert_eq!(result.effect_consumed, Some(Effect::DoublePoints));
        assert!(new_session.effect.is_none());
    }

    #[test]
    fn test_shield_nullifies_loss() {
        let mut session = rigged(WeaponId::Paper);
        session.effect = Some(Effect::Shield);

        let (new_session, result) =
            resolve_round_with_rng(&session, WeaponId::Rock, &mut rng()).unwrap();

        assert_eq!(result.outcome, Outcome::Computer);
        assert!(result.shielded);
        assert_eq!(result.points_awarded, 0);
        assert_eq!(new_session.progress.computer_score, 0);
        assert!(result.message.contains("shield"));
        assert!(new_session.effect.is_none());
    }

    #[test]
    fn test_reveal_is_used() {
        let mut session = Session::new();
        session.effect = Some(Effect::Reveal);
        session.revealed = Some(WeaponId::Paper);

        let (new_session, result) =
            resolve_round_with_rng(&session, WeaponId::Scissors, &mut rng()).unwrap();

        assert_eq!(result.computer_choice, WeaponId::Paper);
        assert_eq!(result.outcome, Outcome::Player);
        assert!(new_session.revealed.is_none());
        assert!(new_session.effect.is_none());
    }

    #[test]
    fn test_upgrade_offered_after_third_round() {
        let mut session = Session::new();
        let mut rng = rng();

        for expected_round in 1..=3 {
            let (next, result) =
                resolve_round_with_rng(&session, WeaponId::Paper, &mut rng).unwrap();
            assert_eq!(result.round, expected_round);
            assert_eq!(result.upgrade_offered, expected_round == 3);
            session = next;
        }

        assert_eq!(session.phase, Phase::UpgradeOffered);
        assert!(!session.offers().is_empty());
    }

    #[test]
    fn test_offer_lists_options() {
        let mut session = Session::new();
        session.progress.round = 3;
        let (_, result) = resolve_round_with_rng(&session, WeaponId::Rock, &mut rng()).unwrap();

        assert!(result.upgrade_offered);
        assert_eq!(result.offers.len(), 5);
    }

    #[test]
    fn test_no_offer_without_options() {
        let mut session = Session::new();
        session.rules.upgrades.effects_enabled = false;
        session.progress.offerable_weapons.clear();
        session.progress.round = 3;

        let (new_session, result) =
            resolve_round_with_rng(&session, WeaponId::Rock, &mut rng()).unwrap();

        assert!(!result.upgrade_offered);
        assert!(result.offers.is_empty());
        assert_eq!(new_session.phase, Phase::AwaitingChoice);
    }

    #[test]
    fn test_computer_only_picks_usable() {
        let mut arsenal = Arsenal::new(&[WeaponId::Rock, WeaponId::Paper, WeaponId::Scissors], 1);
        arsenal.consume(WeaponId::Rock);
        arsenal.consume(WeaponId::Paper);

        let mut rng = rng();
        for _ in 0..20 {
            assert_eq!(choose_computer_weapon(&arsenal, &mut rng), WeaponId::Scissors);
        }
    }

    #[test]
    fn test_computer_fallback_when_exhausted() {
        let mut session = Session::new();
        session.computer = Arsenal::new(&[WeaponId::Rock], 0);

        let (new_session, result) =
            resolve_round_with_rng(&session, WeaponId::Paper, &mut rng()).unwrap();

        assert!(WeaponId::all().contains(&result.computer_choice));
        assert_eq!(result.computer_durability_left, 0);
        assert_eq!(new_session.computer.total_durability(), 0);
    }

    #[test]
    fn test_rejected_round_leaves_session_unchanged() {
        let mut session = Session::new();
        for _ in 0..3 {
            session.player.consume(WeaponId::Scissors);
        }
        let before = session.clone();
        let _ = resolve_round_with_rng(&session, WeaponId::Scissors, &mut rng());

        assert_eq!(session.progress, before.progress);
        assert_eq!(session.player, before.player);
        assert_eq!(session.computer, before.computer);
    }
}
