//! Session owner and fixed-timestep driver
//!
//! The host calls `tick` once per display frame with the elapsed time and
//! renders from `state` afterwards. Ticks never run while paused, and the
//! frame that ends the round runs no further ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::hud::HudSnapshot;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, InputEvent, apply_input, autopilot, step};
use crate::tuning::Tuning;

/// One game session: state, timestep accumulator and demo-driver switch
#[derive(Debug, Clone)]
pub struct Simulation {
    state: GameState,
    accumulator: f32,
    autopilot: bool,
}

impl Simulation {
    pub fn new(seed: u64, tuning: Tuning, settings: &Settings) -> Self {
        Self {
            state: GameState::new(seed, tuning, settings.max_particles()),
            accumulator: 0.0,
            autopilot: false,
        }
    }

    /// Fresh round, ticking from now on
    pub fn start(&mut self) {
        self.reset();
        self.state.phase = GamePhase::Playing;
        log::info!("Round started (seed {})", self.state.seed);
    }

    /// Clear all collections and scalars; the session waits for `start`
    pub fn reset(&mut self) {
        self.state.reset();
        self.accumulator = 0.0;
    }

    /// Halt ticking and surface the final score
    pub fn game_over(&mut self) {
        self.state.end_round();
        self.accumulator = 0.0;
    }

    /// Apply a discrete input event right away
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        apply_input(&mut self.state, event)
    }

    /// Let the built-in driver steer (idle/demo mode)
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
        log::info!("Autopilot: {enabled}");
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Advance by `dt` seconds of wall time. Returns how many ticks ran.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if !self.state.is_playing() {
            self.accumulator = 0.0;
            return 0;
        }

        // Clamp long stalls (tab switch, debugger) to a few frames; a bad
        // host timestamp must not poison the accumulator
        let dt = if dt.is_finite() { dt.clamp(0.0, 0.1) } else { 0.0 };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            if self.autopilot {
                if let Some(event) = autopilot::choose_input(&self.state) {
                    apply_input(&mut self.state, event);
                }
            }

            step(&mut self.state);
            self.accumulator -= SIM_DT;
            substeps += 1;

            if !self.state.is_playing() {
                self.accumulator = 0.0;
                break;
            }
        }

        substeps
    }

    /// Read-only view for the renderer
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events produced since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::from_state(&self.state)
    }
}
