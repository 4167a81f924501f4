//! Discrete player inputs
//!
//! Each event is applied at most once, immediately, and only if it is legal
//! in the current phase.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use crate::consts::LANE_COUNT;

/// One discrete input event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    SteerLeft,
    SteerRight,
    Boost,
    TogglePause,
}

/// Apply an input event. Returns whether it changed anything.
pub fn apply_input(state: &mut GameState, event: InputEvent) -> bool {
    if event == InputEvent::TogglePause {
        return toggle_pause(state);
    }
    if !state.is_playing() {
        return false;
    }

    let player = &mut state.player;
    match event {
        InputEvent::SteerLeft if player.lane > 0 => {
            player.lane -= 1;
            true
        }
        InputEvent::SteerRight if player.lane < LANE_COUNT - 1 => {
            player.lane += 1;
            true
        }
        InputEvent::Boost if !player.boosting && player.boost_cooldown == 0 => {
            player.boosting = true;
            player.boost_ticks = state.tuning.boost_ticks;
            log::debug!("Boost engaged");
            true
        }
        _ => false,
    }
}

fn toggle_pause(state: &mut GameState) -> bool {
    state.phase = match state.phase {
        GamePhase::Playing => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Playing,
        _ => return false,
    };
    log::info!("{}", if state.is_paused() { "Paused" } else { "Resumed" });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    fn playing() -> GameState {
        let mut state = GameState::new(1, Tuning::default(), 0);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_lane_bounds() {
        let mut state = playing();
        assert!(apply_input(&mut state, InputEvent::SteerLeft));
        assert!(!apply_input(&mut state, InputEvent::SteerLeft));
        assert_eq!(state.player.lane, 0);

        assert!(apply_input(&mut state, InputEvent::SteerRight));
        assert!(apply_input(&mut state, InputEvent::SteerRight));
        assert!(!apply_input(&mut state, InputEvent::SteerRight));
        assert_eq!(state.player.lane, LANE_COUNT - 1);
    }

    #[test]
    fn test_boost_gating() {
        let mut state = playing();
        assert!(apply_input(&mut state, InputEvent::Boost));
        assert_eq!(state.player.boost_ticks, 100);
        // Already boosting
        assert!(!apply_input(&mut state, InputEvent::Boost));

        state.player.boosting = false;
        state.player.boost_cooldown = 5;
        assert!(!apply_input(&mut state, InputEvent::Boost));
    }

    #[test]
    fn test_pause_toggle() {
        let mut state = playing();
        assert!(apply_input(&mut state, InputEvent::TogglePause));
        assert!(state.is_paused());
        // Steering is ignored while paused
        assert!(!apply_input(&mut state, InputEvent::SteerLeft));
        assert!(apply_input(&mut state, InputEvent::TogglePause));
        assert!(state.is_playing());
    }

    #[test]
    fn test_inputs_ignored_before_start() {
        let mut state = GameState::new(1, Tuning::default(), 0);
        assert!(!apply_input(&mut state, InputEvent::TogglePause));
        assert!(!apply_input(&mut state, InputEvent::SteerRight));
        assert_eq!(state.phase, GamePhase::Ready);
    }
}
