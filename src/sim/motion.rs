//! Per-tick motion: road entities, player glide and boost timers

use super::state::{Entity, Player};
use crate::consts::LANE_EASE;
use crate::tuning::Tuning;

/// Move every entity toward the player and drop the ones past the near plane.
///
/// Projection is recomputed from the fixed world x and size, so any magnet
/// nudge from the previous tick is discarded here.
pub fn advance_entities(entities: &mut Vec<Entity>, speed: f32) {
    for entity in entities.iter_mut() {
        entity.body.advance(speed);
    }
    entities.retain(|e| !e.body.is_past_near_plane());
}

/// Run boost timers and glide the car toward its lane
pub fn update_player(player: &mut Player, tuning: &Tuning) {
    if player.boosting {
        player.boost_ticks = player.boost_ticks.saturating_sub(1);
        if player.boost_ticks == 0 {
            player.boosting = false;
            player.boost_cooldown = tuning.boost_cooldown_ticks;
        }
    } else if player.boost_cooldown > 0 {
        player.boost_cooldown -= 1;
    }

    // Ease a fixed fraction of the remaining distance each tick
    let target = player.target_x();
    player.x += (target - player.x) * LANE_EASE;
}
