//! Idle/demo mode: a simple driver that plays the game
//!
//! Looks a fixed distance up the road, avoids lanes with an obstacle coming,
//! and otherwise drifts toward lanes with pickups. It only ever suggests one
//! lane step per call, like a player tapping the arrow keys.

use super::input::InputEvent;
use super::state::{EntityKind, GameState};
use crate::consts::LANE_COUNT;

/// How far above the player's top edge the driver reacts to entities
const LOOKAHEAD: f32 = 260.0;

/// Pick the next input for the demo driver, if any
pub fn choose_input(state: &GameState) -> Option<InputEvent> {
    if !state.is_playing() {
        return None;
    }

    let player = &state.player;
    let horizon = player.y - LOOKAHEAD;
    let bottom = player.y + player.height;

    let mut danger = [false; LANE_COUNT];
    let mut reward = [0u32; LANE_COUNT];
    for entity in state.entities() {
        let depth = entity.body.depth;
        if depth < horizon || depth > bottom {
            continue;
        }
        match entity.kind {
            EntityKind::Obstacle(_) => danger[entity.body.lane] = true,
            EntityKind::Collectible => reward[entity.body.lane] += 1,
            EntityKind::PowerUp(_) => reward[entity.body.lane] += 3,
        }
    }

    // Safe lanes first, then the richest, then the closest
    let current = player.lane;
    let best = (0..LANE_COUNT).min_by_key(|&lane| {
        (
            danger[lane],
            std::cmp::Reverse(reward[lane]),
            lane.abs_diff(current),
        )
    })?;

    if best < current {
        Some(InputEvent::SteerLeft)
    } else if best > current {
        Some(InputEvent::SteerRight)
    } else if !danger.iter().any(|d| *d) && !player.boosting && player.boost_cooldown == 0 {
        Some(InputEvent::Boost)
    } else {
        None
    }
}
