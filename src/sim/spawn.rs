//! Procedural spawning at the horizon
//!
//! Each tick runs three independent Bernoulli trials: one for an obstacle,
//! one for a collectible and one for a power-up. Lanes and catalog entries are
//! drawn uniformly. There is no population cap; entities leave the road quickly
//! compared to how often they arrive.

use rand::Rng;

use super::catalog::{ObstacleKind, PowerUpKind};
use super::state::{EntityKind, GameState};
use crate::consts::LANE_COUNT;

/// Run this tick's spawn trials
pub fn spawn_entities(state: &mut GameState) {
    let obstacle_chance = state.tuning.obstacle_chance(state.base_speed);
    if state.rng.random::<f32>() < obstacle_chance {
        spawn_obstacle(state);
    }

    if state.rng.random::<f32>() < state.tuning.collectible_chance {
        spawn_collectible(state);
    }

    if state.rng.random::<f32>() < state.tuning.power_up_chance {
        spawn_power_up(state);
    }
}

/// Spawn a random obstacle in a random lane
pub fn spawn_obstacle(state: &mut GameState) -> u32 {
    let kind = ObstacleKind::ALL[state.rng.random_range(0..ObstacleKind::ALL.len())];
    let lane = state.rng.random_range(0..LANE_COUNT);
    let id = state.spawn_entity(EntityKind::Obstacle(kind), lane);
    log::trace!("Spawned {} #{} in lane {}", kind.name(), id, lane);
    id
}

/// Spawn a data packet in a random lane
pub fn spawn_collectible(state: &mut GameState) -> u32 {
    let lane = state.rng.random_range(0..LANE_COUNT);
    state.spawn_entity(EntityKind::Collectible, lane)
}

/// Spawn a random power-up in a random lane
pub fn spawn_power_up(state: &mut GameState) -> u32 {
    let kind = PowerUpKind::ALL[state.rng.random_range(0..PowerUpKind::ALL.len())];
    let lane = state.rng.random_range(0..LANE_COUNT);
    let id = state.spawn_entity(EntityKind::PowerUp(kind), lane);
    log::debug!("Spawned {} power-up #{} in lane {}", kind.name(), id, lane);
    id
}
