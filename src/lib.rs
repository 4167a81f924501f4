//! RetroWave Rider - a lane-dodging arcade racer on a fake-3D road
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, power-ups)
//! - `simulation`: Session owner with lifecycle and fixed-timestep driver
//! - `hud`: Score/lives/power-up readout for the host UI
//! - `renderer`: GPU-agnostic draw list built from the simulation state
//! - `settings`: Presentation preferences
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod simulation;
pub mod tuning;

pub use error::ConfigError;
pub use hud::HudSnapshot;
pub use settings::{QualityPreset, Settings};
pub use simulation::Simulation;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one display refresh at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Ticks per second, used to turn effect timers into seconds
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;
    pub const SCREEN_CENTER_X: f32 = GAME_WIDTH / 2.0;

    /// Road geometry at the player's plane
    pub const ROAD_WIDTH: f32 = 600.0;
    pub const ROAD_EDGE_WIDTH: f32 = (GAME_WIDTH - ROAD_WIDTH) / 2.0;
    pub const LANE_COUNT: usize = 3;
    pub const LANE_WIDTH: f32 = ROAD_WIDTH / LANE_COUNT as f32;

    /// Screen y of the horizon, where entities spawn
    pub const HORIZON_Y: f32 = 100.0;
    /// Perspective factor at the horizon (1.0 at the bottom edge)
    pub const HORIZON_DEPTH_FACTOR: f32 = 0.2;
    /// Road scroll offset wraps at this distance
    pub const ROAD_SCROLL_PERIOD: f32 = 100.0;

    /// Player car
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    pub const PLAYER_Y: f32 = GAME_HEIGHT - 150.0;
    pub const PLAYER_START_LANE: usize = 1;
    /// Fraction of the remaining distance to the lane center covered per tick
    pub const LANE_EASE: f32 = 0.2;
    /// Hitbox inset on every side of the player's bounding box
    pub const HITBOX_INSET: f32 = 10.0;

    /// Collectible ("data packet") size
    pub const COLLECTIBLE_SIZE: f32 = 20.0;
    /// Power-up size
    pub const POWER_UP_SIZE: f32 = 30.0;
}

use consts::*;

/// Project an undistorted x onto the screen for a given depth factor.
///
/// Points converge on `center_x` as the factor shrinks toward the horizon.
/// Sizes are scaled by the same factor.
#[inline]
pub fn project(world_x: f32, depth_factor: f32, center_x: f32) -> f32 {
    center_x + (world_x - center_x) * depth_factor
}

/// Perspective factor for a screen-space depth `y`.
///
/// Linear from `HORIZON_DEPTH_FACTOR` at the horizon to 1.0 at the bottom of
/// the playfield. Values past the bottom edge keep growing past 1.0.
#[inline]
pub fn depth_factor(y: f32) -> f32 {
    let t = (y - HORIZON_Y) / (GAME_HEIGHT - HORIZON_Y);
    HORIZON_DEPTH_FACTOR + (1.0 - HORIZON_DEPTH_FACTOR) * t
}

/// Undistorted screen x of a lane's center line
#[inline]
pub fn lane_center_x(lane: usize) -> f32 {
    ROAD_EDGE_WIDTH + LANE_WIDTH * lane as f32 + LANE_WIDTH / 2.0
}
