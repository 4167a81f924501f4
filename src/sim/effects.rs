//! Power-up effect timers
//!
//! Each timed effect is a countdown in ticks: zero means inactive. Picking up
//! an effect that is already running restarts it at full duration; durations
//! never add up. Extra Life is instant and has no timer.

use serde::{Deserialize, Serialize};

use super::catalog::{Color, PowerUpKind};
use super::state::{GameEvent, GameState};
use crate::consts::TICKS_PER_SECOND;

/// Remaining ticks for each timed effect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub shield_ticks: u32,
    pub slow_ticks: u32,
    pub magnet_ticks: u32,
}

/// HUD readout for one running effect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectIndicator {
    pub name: &'static str,
    /// Whole seconds left, rounded up
    pub seconds: u32,
    pub color: Color,
}

impl ActiveEffects {
    /// Ticks left for a kind (always 0 for instant kinds)
    pub fn remaining(&self, kind: PowerUpKind) -> u32 {
        match kind {
            PowerUpKind::Shield => self.shield_ticks,
            PowerUpKind::TimeWarp => self.slow_ticks,
            PowerUpKind::DataMagnet => self.magnet_ticks,
            PowerUpKind::ExtraLife => 0,
        }
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.remaining(kind) > 0
    }

    pub fn shield_active(&self) -> bool {
        self.shield_ticks > 0
    }

    pub fn slow_active(&self) -> bool {
        self.slow_ticks > 0
    }

    pub fn magnet_active(&self) -> bool {
        self.magnet_ticks > 0
    }

    /// (Re)start a timed effect at its full duration.
    ///
    /// Returns false for instant kinds, which never hold a timer.
    pub fn activate(&mut self, kind: PowerUpKind) -> bool {
        let slot = match kind {
            PowerUpKind::Shield => &mut self.shield_ticks,
            PowerUpKind::TimeWarp => &mut self.slow_ticks,
            PowerUpKind::DataMagnet => &mut self.magnet_ticks,
            PowerUpKind::ExtraLife => return false,
        };
        *slot = kind.duration();
        true
    }

    /// Count every running timer down by one tick
    pub fn decay(&mut self) {
        self.shield_ticks = self.shield_ticks.saturating_sub(1);
        self.slow_ticks = self.slow_ticks.saturating_sub(1);
        self.magnet_ticks = self.magnet_ticks.saturating_sub(1);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Running effects in display order (shield, time warp, magnet)
    pub fn indicators(&self) -> Vec<EffectIndicator> {
        [PowerUpKind::Shield, PowerUpKind::TimeWarp, PowerUpKind::DataMagnet]
            .into_iter()
            .filter(|kind| self.is_active(*kind))
            .map(|kind| EffectIndicator {
                name: kind.name(),
                seconds: self.remaining(kind).div_ceil(TICKS_PER_SECOND),
                color: kind.color(),
            })
            .collect()
    }
}

/// Apply a collected power-up to the session
pub fn apply_power_up(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::ExtraLife => state.lives += 1,
        timed => {
            state.effects.activate(timed);
        }
    }
    debug_assert!(state.effects.remaining(kind) <= kind.duration());

    log::debug!("{} activated!", kind.name());
    state.events.push(GameEvent::PowerUpActivated { kind });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    #[test]
    fn test_repickup_resets_to_full_duration() {
        let mut effects = ActiveEffects {
            shield_ticks: 10,
            ..Default::default()
        };
        assert!(effects.activate(PowerUpKind::Shield));
        assert_eq!(effects.shield_ticks, 300);

        // Already full: stays at exactly the duration
        effects.activate(PowerUpKind::Shield);
        assert_eq!(effects.shield_ticks, 300);
    }

    #[test]
    fn test_decay_runs_out() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::TimeWarp);
        for _ in 0..199 {
            effects.decay();
        }
        assert!(effects.slow_active());
        effects.decay();
        assert!(!effects.slow_active());
        effects.decay();
        assert_eq!(effects.slow_ticks, 0);
    }

    #[test]
    fn test_effects_run_concurrently() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Shield);
        effects.activate(PowerUpKind::TimeWarp);
        effects.activate(PowerUpKind::DataMagnet);
        assert!(effects.shield_active() && effects.slow_active() && effects.magnet_active());
        assert_eq!(effects.indicators().len(), 3);
    }

    #[test]
    fn test_extra_life_is_instant() {
        let mut state = GameState::new(1, Tuning::default(), 100);
        apply_power_up(&mut state, PowerUpKind::ExtraLife);
        assert_eq!(state.lives, 4);
        assert_eq!(state.effects, ActiveEffects::default());
        assert_eq!(
            state.events,
            vec![GameEvent::PowerUpActivated {
                kind: PowerUpKind::ExtraLife
            }]
        );
    }

    #[test]
    fn test_indicator_seconds_round_up() {
        let effects = ActiveEffects {
            magnet_ticks: 61,
            ..Default::default()
        };
        let indicators = effects.indicators();
        assert_eq!(indicators.len(), 1);
        assert_eq!(indicators[0].name, "Data Magnet");
        assert_eq!(indicators[0].seconds, 2);
    }
}
