//! Data Magnet attraction
//!
//! Collectibles inside the magnet range get nudged toward the player's center.
//! The nudge only touches the projected rectangle, so the next motion pass
//! snaps the packet back onto its lane unless it is collected first.

use glam::Vec2;

use super::state::Entity;

/// Below this distance the pull direction is undefined and nothing moves
const MIN_PULL_DISTANCE: f32 = 1e-3;

/// Pull collectibles toward `target`.
///
/// Each packet moves by `offset * (1 - distance / range) * strength / 10`.
pub fn attract(collectibles: &mut [Entity], target: Vec2, range: f32, strength: f32) {
    for packet in collectibles.iter_mut() {
        let offset = target - packet.body.rect.center();
        let distance = offset.length();

        if !(MIN_PULL_DISTANCE..range).contains(&distance) {
            continue;
        }

        let falloff = 1.0 - distance / range;
        let pull = offset * falloff * strength / 10.0;
        packet.body.rect.x += pull.x;
        packet.body.rect.y += pull.y;
    }
}
