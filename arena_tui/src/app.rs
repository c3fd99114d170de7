//! Application state

use arena_core::{
    choose_upgrade, decline_upgrade, resolve_round_with_rng, RoundResult, Session, Upgrade,
    UpgradeOffer, WeaponId,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAX_LOG_LINES: usize = 200;

pub struct App {
    pub session: Session,
    /// Session restored by "new game"
    fresh: Session,
    pub last_result: Option<RoundResult>,
    pub battle_log: Vec<String>,
    pub log_scroll: usize,
    pub selected_offer: usize,
    pub show_help: bool,
    pub rng: StdRng,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            fresh: session.clone(),
            session,
            last_result: None,
            battle_log: vec!["Pick a weapon to start round 1.".to_string()],
            log_scroll: 0,
            selected_offer: 0,
            show_help: false,
            rng: StdRng::from_entropy(),
        }
    }

    /// Play a round with the given weapon; rejected picks change nothing
    pub fn play(&mut self, weapon: WeaponId) {
        let (session, result) =
            match resolve_round_with_rng(&self.session, weapon, &mut self.rng) {
                Ok(resolved) => resolved,
                Err(e) => {
                    log::debug!("ignored pick {}: {}", weapon, e);
                    return;
                }
            };

        self.session = session;
        self.push_log(format!("━━━ Round {} ━━━", result.round));
        self.push_log(format!(
            "  {} {} vs {} {}",
            result.player_choice.glyph(),
            result.player_choice.label(),
            result.computer_choice.glyph(),
            result.computer_choice.label()
        ));
        self.push_log(format!("  {}", result.message));
        if result.upgrade_offered {
            self.selected_offer = 0;
            self.push_log("  ★ Upgrade available!".to_string());
        }
        if self.session.is_player_exhausted() {
            self.push_log("  Every weapon is broken. Press n for a new game.".to_string());
        }
        self.last_result = Some(result);
    }

    /// Play the n-th unlocked weapon (0-based, unlock order)
    pub fn play_slot(&mut self, index: usize) {
        if let Some(weapon) = self.session.progress.unlocked.get(index).copied() {
            self.play(weapon);
        }
    }

    pub fn offers(&self) -> Vec<UpgradeOffer> {
        self.session.offers()
    }

    pub fn on_up(&mut self) {
        if self.session.is_upgrade_pending() {
            self.selected_offer = self.selected_offer.saturating_sub(1);
        } else {
            self.log_scroll = self.log_scroll.saturating_sub(1);
        }
    }

    pub fn on_down(&mut self) {
        if self.session.is_upgrade_pending() {
            let count = self.offers().len();
            if self.selected_offer < count.saturating_sub(1) {
                self.selected_offer += 1;
            }
        } else if self.log_scroll < self.battle_log.len().saturating_sub(1) {
            self.log_scroll += 1;
        }
    }

    /// Claim the highlighted upgrade card
    pub fn claim_selected(&mut self) {
        if !self.session.is_upgrade_pending() {
            return;
        }
        let Some(offer) = self.offers().get(self.selected_offer).cloned() else {
            return;
        };

        match choose_upgrade(&self.session, offer.upgrade, &mut self.rng) {
            Ok((session, revealed)) => {
                self.session = session;
                match offer.upgrade {
                    Upgrade::Weapon(w) => {
                        self.push_log(format!("  {} {} unlocked!", w.glyph(), w.label()))
                    }
                    Upgrade::Effect(e) => {
                        self.push_log(format!("  {} {} active for the next round", e.glyph(), e))
                    }
                }
                if let Some(w) = revealed {
                    self.push_log(format!("  The computer will play {} {}", w.glyph(), w.label()));
                }
            }
            Err(e) => log::debug!("ignored upgrade: {}", e),
        }
    }

    pub fn decline(&mut self) {
        if self.session.is_upgrade_pending() {
            self.session = decline_upgrade(&self.session);
            self.push_log("  Upgrade skipped.".to_string());
        }
    }

    pub fn new_game(&mut self) {
        self.session = self.fresh.clone();
        self.last_result = None;
        self.battle_log.clear();
        self.battle_log.push("New game. Pick a weapon to start round 1.".to_string());
        self.log_scroll = 0;
        self.selected_offer = 0;
        log::info!("new game");
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    fn push_log(&mut self, line: String) {
        self.battle_log.push(line);
        while self.battle_log.len() > MAX_LOG_LINES {
            self.battle_log.remove(0);
        }
        // Keep the newest lines in view
        self.log_scroll = self.battle_log.len().saturating_sub(15);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{Arsenal, Effect, Phase};

    fn app() -> App {
        let mut app = App::new(Session::new());
        app.rng = StdRng::seed_from_u64(42);
        app
    }

    #[test]
    fn test_play_updates_session() {
        let mut app = app();
        app.play(WeaponId::Rock);
        assert_eq!(app.session.round(), 2);
        assert!(app.last_result.is_some());
        assert!(app.battle_log.iter().any(|l| l.contains("Round 1")));
    }

    #[test]
    fn test_rejected_pick_is_ignored() {
        let mut app = app();
        app.play(WeaponId::Fire);
        assert_eq!(app.session.round(), 1);
        assert!(app.last_result.is_none());
        assert_eq!(app.battle_log.len(), 1);
    }

    #[test]
    fn test_play_slot_uses_unlock_order() {
        let mut app = app();
        app.play_slot(2);
        assert_eq!(app.session.player.durability(WeaponId::Scissors), 2);
        app.play_slot(7);
        assert_eq!(app.session.round(), 2);
    }

    #[test]
    fn test_claim_selected_offer() {
        let mut app = app();
        for _ in 0..3 {
            app.play(WeaponId::Paper);
        }
        assert!(app.session.is_upgrade_pending());

        app.on_down();
        app.claim_selected();
        assert!(app.session.player.is_unlocked(WeaponId::Air));
        assert_eq!(app.session.phase, Phase::AwaitingChoice);
    }

    #[test]
    fn test_claim_effect() {
        let mut app = app();
        app.session.computer = Arsenal::new(&[WeaponId::Rock], 10);
        app.session.phase = Phase::UpgradeOffered;
        app.selected_offer = 2;
        app.claim_selected();
        assert_eq!(app.session.effect, Some(Effect::DoublePoints));
    }

    #[test]
    fn test_decline_and_new_game() {
        let mut app = app();
        for _ in 0..3 {
            app.play(WeaponId::Rock);
        }
        app.decline();
        assert!(!app.session.is_upgrade_pending());

        app.new_game();
        assert_eq!(app.session.round(), 1);
        assert_eq!(app.session.player.durability(WeaponId::Rock), 3);
        assert!(app.last_result.is_none());
    }
}
