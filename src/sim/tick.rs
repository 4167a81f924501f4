//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one tick, running to completion:
//! speed ramp, effect timers, player, spawning, motion, particles,
//! collisions, magnet, then score.

use super::collision::{CollisionOutcome, resolve_collisions};
use super::state::GameState;
use super::{magnet, motion, particles, spawn};
use crate::consts::ROAD_SCROLL_PERIOD;

/// Advance the game state by one tick. Does nothing unless playing.
pub fn step(state: &mut GameState) {
    if !state.is_playing() {
        return;
    }

    state.time_ticks += 1;
    ramp_speed(state);

    // Speed is sampled before the timers run down, so an effect with one
    // tick left still applies this tick
    let speed = state.effective_speed();
    state.effects.decay();

    state.road_offset += speed;
    if state.road_offset >= ROAD_SCROLL_PERIOD {
        state.road_offset = 0.0;
    }

    motion::update_player(&mut state.player, &state.tuning);

    spawn::spawn_entities(state);

    motion::advance_entities(&mut state.obstacles, speed);
    motion::advance_entities(&mut state.collectibles, speed);
    motion::advance_entities(&mut state.power_ups, speed);

    particles::update(
        &mut state.particles,
        speed * state.tuning.particle_fall,
        state.tuning.particle_fade,
    );

    if resolve_collisions(state) == CollisionOutcome::GameOver {
        return;
    }

    if state.effects.magnet_active() {
        let target = state.player.center();
        magnet::attract(
            &mut state.collectibles,
            target,
            state.tuning.magnet_range,
            state.tuning.magnet_strength,
        );
    }

    state.score += speed.floor() as u64;

    debug_assert!(state.entities().all(|e| e.body.size_is_current()));
}

/// Step the base speed up once for every threshold the score has crossed
fn ramp_speed(state: &mut GameState) {
    while state.score >= state.next_speed_score {
        state.base_speed += state.tuning.speed_step;
        state.next_speed_score += state.tuning.speed_step_score;
        log::debug!(
            "Speed up to {:.1} at score {}",
            state.base_speed,
            state.score
        );
    }
}
