//! Draw-list construction
//!
//! Turns a `GameState` into one flat triangle list in screen pixels, back to
//! front. The host uploads it with whatever graphics API it has.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{
    GAME_HEIGHT, GAME_WIDTH, HORIZON_Y, LANE_COUNT, LANE_WIDTH, ROAD_EDGE_WIDTH,
    ROAD_SCROLL_PERIOD, ROAD_WIDTH, SCREEN_CENTER_X,
};
use crate::settings::Settings;
use crate::sim::catalog::COLLECTIBLE_COLOR;
use crate::sim::{Color, Entity, EntityKind, GameState, Rect};
use crate::{depth_factor, project};

const EDGE_LINE_WIDTH: f32 = 4.0;
const DASH_LENGTH: f32 = 40.0;
const DASH_WIDTH: f32 = 6.0;
const GRID_COLUMNS: usize = 12;
const CIRCLE_SEGMENTS: u32 = 20;

/// Screen-space left and right road edges at screen height `y`
pub fn road_edges(y: f32) -> (f32, f32) {
    let f = depth_factor(y);
    (
        project(ROAD_EDGE_WIDTH, f, SCREEN_CENTER_X),
        project(ROAD_EDGE_WIDTH + ROAD_WIDTH, f, SCREEN_CENTER_X),
    )
}

/// Build the full frame
pub fn build_scene(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(1024);

    out.extend(shapes::rect(
        &Rect::new(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT),
        colors::BACKGROUND,
    ));
    if settings.quality.grid_enabled() {
        push_grid(&mut out, state.road_offset);
    }
    push_road(&mut out, state.road_offset);

    // Farther entities first so nearer ones overlap them
    let mut entities: Vec<&Entity> = state.entities().collect();
    entities.sort_by(|a, b| a.body.depth.total_cmp(&b.body.depth));
    for entity in entities {
        push_entity(&mut out, entity);
    }

    push_player(&mut out, state, settings);

    if settings.particles {
        for p in &state.particles {
            let half = p.size / 2.0;
            out.extend(shapes::rect(
                &Rect::new(p.pos.x - half, p.pos.y - half, p.size, p.size),
                p.color.rgba(p.alpha.clamp(0.0, 1.0)),
            ));
        }
    }

    if state.is_paused() {
        out.extend(shapes::rect(
            &Rect::new(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT),
            colors::PAUSE_DIM,
        ));
    }

    out
}

/// Ground grid: rays from the vanishing point and scrolling cross lines
fn push_grid(out: &mut Vec<Vertex>, road_offset: f32) {
    let spacing = GAME_WIDTH / GRID_COLUMNS as f32;
    for i in 0..=GRID_COLUMNS {
        let x = i as f32 * spacing;
        let top = Vec2::new(
            project(x, depth_factor(HORIZON_Y), SCREEN_CENTER_X),
            HORIZON_Y,
        );
        out.extend(shapes::line(top, Vec2::new(x, GAME_HEIGHT), 1.0, colors::GRID));
    }

    let mut y = HORIZON_Y + road_offset;
    while y < GAME_HEIGHT {
        out.extend(shapes::line(
            Vec2::new(0.0, y),
            Vec2::new(GAME_WIDTH, y),
            1.0,
            colors::GRID,
        ));
        y += ROAD_SCROLL_PERIOD;
    }
}

fn push_road(out: &mut Vec<Vertex>, road_offset: f32) {
    let (far_left, far_right) = road_edges(HORIZON_Y);
    let (near_left, near_right) = road_edges(GAME_HEIGHT);

    out.extend(shapes::quad(
        Vec2::new(far_left, HORIZON_Y),
        Vec2::new(far_right, HORIZON_Y),
        Vec2::new(near_right, GAME_HEIGHT),
        Vec2::new(near_left, GAME_HEIGHT),
        colors::ROAD,
    ));
    out.extend(shapes::line(
        Vec2::new(far_left, HORIZON_Y),
        Vec2::new(near_left, GAME_HEIGHT),
        EDGE_LINE_WIDTH,
        colors::ROAD_EDGE,
    ));
    out.extend(shapes::line(
        Vec2::new(far_right, HORIZON_Y),
        Vec2::new(near_right, GAME_HEIGHT),
        EDGE_LINE_WIDTH,
        colors::ROAD_EDGE,
    ));

    // Dashed lane separators, scrolled by the road offset
    for lane in 1..LANE_COUNT {
        let world_x = ROAD_EDGE_WIDTH + LANE_WIDTH * lane as f32;
        let mut y = HORIZON_Y + road_offset;
        while y < GAME_HEIGHT {
            let y_end = (y + DASH_LENGTH).min(GAME_HEIGHT);
            let f0 = depth_factor(y);
            let f1 = depth_factor(y_end);
            let from = Vec2::new(project(world_x, f0, SCREEN_CENTER_X), y);
            let to = Vec2::new(project(world_x, f1, SCREEN_CENTER_X), y_end);
            out.extend(shapes::line(from, to, DASH_WIDTH * f1, colors::LANE_DASH));
            y += ROAD_SCROLL_PERIOD;
        }
    }
}

fn push_entity(out: &mut Vec<Vertex>, entity: &Entity) {
    let rect = entity.rect();
    let color = entity.color().rgba(1.0);
    match entity.kind {
        EntityKind::Obstacle(_) => {
            out.extend(shapes::rect(&rect, color));
            // Dark stripe so obstacles read as solid blocks
            let stripe = Rect::new(rect.x, rect.y + rect.h * 0.4, rect.w, rect.h * 0.2);
            out.extend(shapes::rect(&stripe, colors::CAR_DETAIL));
        }
        EntityKind::Collectible => {
            let center = rect.center();
            let radius = rect.w / 2.0;
            out.extend(shapes::circle(
                center,
                radius,
                COLLECTIBLE_COLOR.rgba(1.0),
                CIRCLE_SEGMENTS,
            ));
            out.extend(shapes::circle(
                center,
                radius * 0.4,
                colors::PACKET_CORE,
                CIRCLE_SEGMENTS,
            ));
        }
        EntityKind::PowerUp(_) => out.extend(shapes::diamond(&rect, color)),
    }
}

fn push_player(out: &mut Vec<Vertex>, state: &GameState, settings: &Settings) {
    let player = &state.player;
    let body = player.bounds();
    let center = body.center();

    if player.boosting && settings.boost_flames {
        let bottom = body.y + body.h;
        let flicker = (state.time_ticks % 4) as f32 * 4.0;
        for offset in [-body.w * 0.25, body.w * 0.25] {
            let x = center.x + offset;
            out.extend(shapes::triangle(
                Vec2::new(x - 8.0, bottom),
                Vec2::new(x + 8.0, bottom),
                Vec2::new(x, bottom + 30.0 + flicker),
                colors::BOOST_FLAME,
            ));
        }
    }

    out.extend(shapes::rect(&body, Color::NEON_CYAN.rgba(1.0)));
    // Windshield
    out.extend(shapes::rect(
        &Rect::new(body.x + 8.0, body.y + 15.0, body.w - 16.0, body.h * 0.25),
        colors::CAR_DETAIL,
    ));

    if state.effects.shield_active() {
        out.extend(shapes::circle(
            center,
            body.h * 0.65,
            colors::SHIELD,
            CIRCLE_SEGMENTS,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::settings::QualityPreset;
    use crate::sim::{GamePhase, ObstacleKind, PowerUpKind};

    fn playing_state() -> GameState {
        let mut state = GameState::new(3, Tuning::default(), 500);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_road_narrows_toward_horizon() {
        let (far_l, far_r) = road_edges(HORIZON_Y);
        let (near_l, near_r) = road_edges(GAME_HEIGHT);
        assert!((near_l - ROAD_EDGE_WIDTH).abs() < 1e-3);
        assert!((near_r - (ROAD_EDGE_WIDTH + ROAD_WIDTH)).abs() < 1e-3);
        assert!(far_r - far_l < near_r - near_l);
        assert!(((far_l + far_r) / 2.0 - SCREEN_CENTER_X).abs() < 1e-3);
    }

    #[test]
    fn test_grid_follows_quality() {
        let state = playing_state();
        let low = build_scene(&state, &Settings::from_preset(QualityPreset::Low));
        let high = build_scene(&state, &Settings::from_preset(QualityPreset::High));
        assert!(high.len() > low.len());
    }

    #[test]
    fn test_entities_add_geometry() {
        let mut state = playing_state();
        let settings = Settings::default();
        let empty = build_scene(&state, &settings).len();

        state.spawn_entity(EntityKind::Obstacle(ObstacleKind::Truck), 0);
        state.spawn_entity(EntityKind::Collectible, 1);
        state.spawn_entity(EntityKind::PowerUp(PowerUpKind::Shield), 2);
        let full = build_scene(&state, &settings).len();

        // Obstacle two quads, packet two circles, power-up one diamond
        assert_eq!(full - empty, 12 + 2 * CIRCLE_SEGMENTS as usize * 3 + 6);
    }

    #[test]
    fn test_packets_are_round_and_power_ups_are_diamonds() {
        let count = |scene: &[Vertex], color: [f32; 4]| {
            scene.iter().filter(|v| v.color == color).count()
        };
        let settings = Settings::default();
        let empty = build_scene(&playing_state(), &settings);

        let mut state = playing_state();
        state.spawn_entity(EntityKind::Collectible, 0);
        let cyan = COLLECTIBLE_COLOR.rgba(1.0);
        let packet = build_scene(&state, &settings);
        assert_eq!(
            count(&packet, cyan) - count(&empty, cyan),
            CIRCLE_SEGMENTS as usize * 3
        );

        let mut state = playing_state();
        state.spawn_entity(EntityKind::PowerUp(PowerUpKind::TimeWarp), 2);
        let yellow = PowerUpKind::TimeWarp.color().rgba(1.0);
        let power_up = build_scene(&state, &settings);
        assert_eq!(count(&power_up, yellow) - count(&empty, yellow), 6);
    }

    #[test]
    fn test_pause_dims_the_frame() {
        let mut state = playing_state();
        let settings = Settings::default();
        let playing = build_scene(&state, &settings);
        state.phase = GamePhase::Paused;
        let paused = build_scene(&state, &settings);

        assert_eq!(paused.len(), playing.len() + 6);
        assert!(paused.iter().rev().take(6).all(|v| v.color == colors::PAUSE_DIM));
    }

    #[test]
    fn test_boost_flames_respect_settings() {
        let mut state = playing_state();
        state.player.boosting = true;

        let with = build_scene(&state, &Settings::default()).len();
        let without = build_scene(
            &state,
            &Settings {
                boost_flames: false,
                ..Settings::default()
            },
        )
        .len();
        assert_eq!(with, without + 6);
    }

    #[test]
    fn test_particles_toggle() {
        let mut state = playing_state();
        state.explode(Vec2::new(400.0, 300.0), Color::ORANGE);
        assert!(!state.particles.is_empty());

        let on = build_scene(&state, &Settings::default()).len();
        let off = build_scene(
            &state,
            &Settings {
                particles: false,
                ..Settings::default()
            },
        )
        .len();
        assert_eq!(on - off, state.particles.len() * 6);
    }
}
