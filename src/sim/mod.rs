//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod catalog;
pub mod collision;
pub mod effects;
pub mod input;
pub mod magnet;
pub mod motion;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use catalog::{Color, ObstacleKind, PowerUpKind};
pub use collision::{CollisionOutcome, rects_overlap, resolve_collisions};
pub use effects::{ActiveEffects, EffectIndicator, apply_power_up};
pub use input::{InputEvent, apply_input};
pub use particles::Particle;
pub use state::{
    Body, Entity, EntityKind, GameEvent, GamePhase, GameState, Player, Rect,
};
pub use tick::step;
