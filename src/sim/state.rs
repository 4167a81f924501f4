//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`; the renderer and
//! HUD only ever see it through a shared reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catalog::{COLLECTIBLE_COLOR, Color, ObstacleKind, PowerUpKind};
use super::effects::ActiveEffects;
use super::particles::{self, Particle};
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{depth_factor, lane_center_x, project};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Reset and waiting for `start`
    Ready,
    /// Active gameplay
    Playing,
    /// Game is paused (ticks are skipped, rendering continues)
    Paused,
    /// Round ended
    GameOver,
}

/// Axis-aligned rectangle in screen space (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Shrink by `margin` on every side
    pub fn inset(&self, margin: f32) -> Self {
        Self::new(
            self.x + margin,
            self.y + margin,
            self.w - 2.0 * margin,
            self.h - 2.0 * margin,
        )
    }
}

/// Position and size of a road entity.
///
/// `world_x` and `size` are fixed at spawn. `depth` is the screen y the
/// entity has travelled to; `rect` is recomputed from it every tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub lane: usize,
    /// Undistorted left edge at the player's plane
    pub world_x: f32,
    /// Undistorted size at the player's plane
    pub size: Vec2,
    pub depth: f32,
    /// Projected screen rectangle
    pub rect: Rect,
}

impl Body {
    /// A body centered in `lane`, sitting on the horizon
    pub fn at_horizon(lane: usize, size: Vec2) -> Self {
        debug_assert!(lane < LANE_COUNT);
        let mut body = Self {
            lane,
            world_x: lane_center_x(lane) - size.x / 2.0,
            size,
            depth: HORIZON_Y,
            rect: Rect::default(),
        };
        body.reproject();
        body
    }

    /// Screen rectangle for the current depth
    pub fn projected(&self) -> Rect {
        let factor = depth_factor(self.depth);
        Rect::new(
            project(self.world_x, factor, SCREEN_CENTER_X),
            self.depth,
            self.size.x * factor,
            self.size.y * factor,
        )
    }

    pub fn reproject(&mut self) {
        self.rect = self.projected();
    }

    /// Move toward the player by `speed` and refresh the projection
    pub fn advance(&mut self, speed: f32) {
        debug_assert!(speed > 0.0, "road must move forward");
        self.depth += speed;
        self.reproject();
    }

    /// True once the entity has left the bottom of the playfield
    pub fn is_past_near_plane(&self) -> bool {
        self.depth > GAME_HEIGHT
    }

    /// Projected size matches the depth (position may carry a magnet nudge)
    pub fn size_is_current(&self) -> bool {
        let expected = self.projected();
        (self.rect.w - expected.w).abs() < 1e-3 && (self.rect.h - expected.h).abs() < 1e-3
    }
}

/// What kind of road entity this is, with its kind-specific payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Obstacle(ObstacleKind),
    Collectible,
    PowerUp(PowerUpKind),
}

/// An obstacle, collectible or power-up on the road
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub body: Body,
}

impl Entity {
    pub fn color(&self) -> Color {
        match self.kind {
            EntityKind::Obstacle(kind) => kind.color(),
            EntityKind::Collectible => COLLECTIBLE_COLOR,
            EntityKind::PowerUp(kind) => kind.color(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect
    }
}

/// The player's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Target lane (0 = left)
    pub lane: usize,
    /// Left edge; glides toward the lane
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub boosting: bool,
    /// Ticks of boost left
    pub boost_ticks: u32,
    /// Ticks until boost can be used again
    pub boost_cooldown: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            lane: PLAYER_START_LANE,
            x: Self::lane_x(PLAYER_START_LANE),
            y: PLAYER_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            boosting: false,
            boost_ticks: 0,
            boost_cooldown: 0,
        }
    }
}

impl Player {
    /// Left edge that centers the car in `lane` (the player is always at full depth)
    pub fn lane_x(lane: usize) -> f32 {
        lane_center_x(lane) - PLAYER_WIDTH / 2.0
    }

    pub fn target_x(&self) -> f32 {
        Self::lane_x(self.lane)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn hitbox(&self) -> Rect {
        self.bounds().inset(HITBOX_INSET)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// Something the host UI should react to.
///
/// Events accumulate during ticks and are drained by the host afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CollectibleCollected,
    /// An obstacle hit the player; `shielded` hits cost nothing
    ObstacleHit { shielded: bool },
    LifeLost { remaining: u32 },
    /// Pickup notification (name and color come from the kind)
    PowerUpActivated { kind: PowerUpKind },
    GameOver { final_score: u64 },
}

/// Complete session state (deterministic for a given seed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; every random draw goes through it
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Data packets collected this round
    pub collected: u32,
    /// Road speed before slow-time and boost multipliers
    pub base_speed: f32,
    /// Score at which the base speed next steps up
    pub next_speed_score: u64,
    /// Scroll offset for road markings, wraps at `ROAD_SCROLL_PERIOD`
    pub road_offset: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub obstacles: Vec<Entity>,
    pub collectibles: Vec<Entity>,
    pub power_ups: Vec<Entity>,
    pub effects: ActiveEffects,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Particle cap from the presentation settings
    pub max_particles: usize,
    /// Undrained events since the host last looked
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh state in the `Ready` phase
    pub fn new(seed: u64, tuning: Tuning, max_particles: usize) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            score: 0,
            lives: tuning.starting_lives,
            collected: 0,
            base_speed: tuning.base_speed,
            next_speed_score: tuning.speed_step_score,
            road_offset: 0.0,
            time_ticks: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            power_ups: Vec::new(),
            effects: ActiveEffects::default(),
            particles: Vec::new(),
            max_particles,
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Clear collections and scalars back to their initial values.
    ///
    /// The RNG keeps running so consecutive rounds differ.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Ready;
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.collected = 0;
        self.base_speed = self.tuning.base_speed;
        self.next_speed_score = self.tuning.speed_step_score;
        self.road_offset = 0.0;
        self.time_ticks = 0;
        self.player = Player::default();
        self.obstacles.clear();
        self.collectibles.clear();
        self.power_ups.clear();
        self.effects.clear();
        self.particles.clear();
        self.events.clear();
        self.next_id = 1;
    }

    /// End the round. Only the first call emits `GameOver`.
    pub fn end_round(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {} after {} ticks ({} data packets)",
            self.score,
            self.time_ticks,
            self.collected
        );
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Put a new entity on the horizon in `lane`
    pub fn spawn_entity(&mut self, kind: EntityKind, lane: usize) -> u32 {
        let size = match kind {
            EntityKind::Obstacle(kind) => kind.size(),
            EntityKind::Collectible => Vec2::splat(COLLECTIBLE_SIZE),
            EntityKind::PowerUp(kind) => kind.size(),
        };
        let id = self.next_entity_id();
        let entity = Entity {
            id,
            kind,
            body: Body::at_horizon(lane, size),
        };
        match kind {
            EntityKind::Obstacle(_) => self.obstacles.push(entity),
            EntityKind::Collectible => self.collectibles.push(entity),
            EntityKind::PowerUp(_) => self.power_ups.push(entity),
        }
        id
    }

    /// Road speed this tick, after slow-time and boost
    pub fn effective_speed(&self) -> f32 {
        let mut speed = self.base_speed;
        if self.effects.slow_active() {
            speed *= self.tuning.slow_time_factor;
        }
        if self.player.boosting {
            speed *= self.tuning.boost_factor;
        }
        speed
    }

    /// Burst of explosion particles
    pub fn explode(&mut self, at: Vec2, color: Color) {
        particles::emit(
            &mut self.particles,
            &mut self.rng,
            at,
            color,
            self.tuning.particles_per_explosion,
            self.max_particles,
        );
    }

    /// All live road entities
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.obstacles
            .iter()
            .chain(self.collectibles.iter())
            .chain(self.power_ups.iter())
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Playing or paused: a round is in progress
    pub fn is_active(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::Paused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(42, Tuning::default(), 500);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.lives, 3);
        assert_eq!(state.base_speed, 5.0);
        assert_eq!(state.player.lane, 1);
        assert_eq!(state.player.x, state.player.target_x());
    }

    #[test]
    fn test_spawned_entity_sits_on_horizon() {
        let mut state = GameState::new(42, Tuning::default(), 500);
        state.spawn_entity(EntityKind::Obstacle(ObstacleKind::Barrier), 0);
        let body = &state.obstacles[0].body;

        assert_eq!(body.depth, HORIZON_Y);
        assert!((body.rect.w - 80.0 * HORIZON_DEPTH_FACTOR).abs() < 1e-4);
        // Left lane converges toward the center at the horizon
        assert!(body.rect.x > body.world_x);
        assert!(body.size_is_current());
    }

    #[test]
    fn test_spawn_routes_to_collection() {
        let mut state = GameState::new(42, Tuning::default(), 500);
        state.spawn_entity(EntityKind::Collectible, 2);
        state.spawn_entity(EntityKind::PowerUp(PowerUpKind::Shield), 1);
        assert_eq!(state.collectibles.len(), 1);
        assert_eq!(state.power_ups.len(), 1);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.entities().count(), 2);
    }

    #[test]
    fn test_effective_speed_multipliers() {
        let mut state = GameState::new(42, Tuning::default(), 500);
        assert_eq!(state.effective_speed(), 5.0);

        state.effects.activate(PowerUpKind::TimeWarp);
        assert!((state.effective_speed() - 3.0).abs() < 1e-6);

        state.player.boosting = true;
        assert!((state.effective_speed() - 4.5).abs() < 1e-5);
        // Base speed is never touched
        assert_eq!(state.base_speed, 5.0);
    }

    #[test]
    fn test_end_round_emits_once() {
        let mut state = GameState::new(42, Tuning::default(), 500);
        state.phase = GamePhase::Playing;
        state.score = 120;
        state.end_round();
        state.end_round();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.events, vec![GameEvent::GameOver { final_score: 120 }]);
    }

    #[test]
    fn test_reset_clears_round() {
        let mut state = GameState::new(42, Tuning::default(), 500);
        state.phase = GamePhase::Playing;
        state.score = 900;
        state.lives = 1;
        state.spawn_entity(EntityKind::Collectible, 0);
        state.effects.activate(PowerUpKind::Shield);
        state.player.lane = 2;

        state.reset();
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.entities().count(), 0);
        assert!(!state.effects.shield_active());
        assert_eq!(state.player.lane, 1);
    }

    #[test]
    fn test_hitbox_inset() {
        let player = Player::default();
        let hitbox = player.hitbox();
        assert_eq!(hitbox.w, PLAYER_WIDTH - 20.0);
        assert_eq!(hitbox.y, PLAYER_Y + 10.0);
    }
}
