//! HUD readout for the host UI
//!
//! Plain values the host copies into its score/lives/packets widgets after
//! every frame, plus the power-up indicators shown in the corner.

use serde::Serialize;

use crate::sim::{EffectIndicator, GamePhase, GameState};

/// Everything the HUD shows for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub lives: u32,
    pub collected: u32,
    pub phase: GamePhase,
    pub boosting: bool,
    /// Boost is off cooldown and not already running
    pub boost_ready: bool,
    pub indicators: Vec<EffectIndicator>,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let player = &state.player;
        Self {
            score: state.score,
            lives: state.lives,
            collected: state.collected,
            phase: state.phase,
            boosting: player.boosting,
            boost_ready: !player.boosting && player.boost_cooldown == 0,
            indicators: state.effects.indicators(),
        }
    }

    /// One-line text form, e.g. for a terminal or log
    pub fn status_line(&self) -> String {
        let mut line = format!(
            "SCORE {}  LIVES {}  DATA {}",
            self.score, self.lives, self.collected
        );
        for indicator in &self.indicators {
            line.push_str(&format!(
                "  {}: {}s",
                indicator.name.to_uppercase(),
                indicator.seconds
            ));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::PowerUpKind;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(1, Tuning::default(), 0);
        state.score = 1234;
        state.collected = 7;
        state.effects.activate(PowerUpKind::Shield);

        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.score, 1234);
        assert_eq!(hud.lives, 3);
        assert_eq!(hud.collected, 7);
        assert!(hud.boost_ready);
        assert_eq!(hud.status_line(), "SCORE 1234  LIVES 3  DATA 7  SHIELD: 5s");
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(1, Tuning::default(), 0);
        let json = serde_json::to_string(&HudSnapshot::from_state(&state)).unwrap();
        assert!(json.contains("\"lives\":3"));
        assert!(json.contains("\"phase\":\"Ready\""));
    }
}
