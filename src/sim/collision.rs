//! Collision detection and response
//!
//! Plain axis-aligned rectangle overlap between the player's inset hitbox and
//! every live entity. All hits in a tick are tested against the same hitbox.

use super::catalog::DAMAGE_COLOR;
use super::effects::apply_power_up;
use super::state::{Entity, EntityKind, GameEvent, GameState, Rect};

/// Whether the round survived collision resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    Continue,
    GameOver,
}

/// Strict overlap test; touching edges do not collide
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Resolve every player/entity overlap for this tick.
///
/// Obstacles go first. If a hit takes the last life the round ends at once:
/// remaining obstacles stay where they are and collectibles and power-ups are
/// not checked.
pub fn resolve_collisions(state: &mut GameState) -> CollisionOutcome {
    let hitbox = state.player.hitbox();

    if resolve_obstacles(state, &hitbox) == CollisionOutcome::GameOver {
        return CollisionOutcome::GameOver;
    }

    // Data packets
    let collectibles = std::mem::take(&mut state.collectibles);
    let mut kept = Vec::with_capacity(collectibles.len());
    for packet in collectibles {
        if !rects_overlap(&hitbox, &packet.rect()) {
            kept.push(packet);
            continue;
        }
        state.collected += 1;
        state.score += state.tuning.collectible_score;
        state.explode(packet.rect().center(), packet.color());
        state.events.push(GameEvent::CollectibleCollected);
    }
    state.collectibles = kept;

    // Power-ups
    let power_ups = std::mem::take(&mut state.power_ups);
    let mut kept = Vec::with_capacity(power_ups.len());
    for power_up in power_ups {
        if !rects_overlap(&hitbox, &power_up.rect()) {
            kept.push(power_up);
            continue;
        }
        if let EntityKind::PowerUp(kind) = power_up.kind {
            apply_power_up(state, kind);
        }
        state.explode(power_up.rect().center(), power_up.color());
    }
    state.power_ups = kept;

    CollisionOutcome::Continue
}

fn resolve_obstacles(state: &mut GameState, hitbox: &Rect) -> CollisionOutcome {
    let mut obstacles = std::mem::take(&mut state.obstacles).into_iter();
    let mut kept: Vec<Entity> = Vec::with_capacity(obstacles.len());

    while let Some(obstacle) = obstacles.next() {
        if !rects_overlap(hitbox, &obstacle.rect()) {
            kept.push(obstacle);
            continue;
        }

        let center = obstacle.rect().center();
        if state.effects.shield_active() {
            state.explode(center, obstacle.color());
            state.events.push(GameEvent::ObstacleHit { shielded: true });
            continue;
        }

        debug_assert!(state.lives > 0, "hit registered with no lives left");
        state.lives = state.lives.saturating_sub(1);
        state.explode(center, DAMAGE_COLOR);
        state.events.push(GameEvent::ObstacleHit { shielded: false });
        state.events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });
        log::debug!("Hit obstacle #{}, {} lives left", obstacle.id, state.lives);

        if state.lives == 0 {
            kept.extend(obstacles);
            state.obstacles = kept;
            state.end_round();
            return CollisionOutcome::GameOver;
        }
    }

    state.obstacles = kept;
    CollisionOutcome::Continue
}
