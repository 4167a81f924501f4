//! Fixed catalogs of obstacle and power-up types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::POWER_UP_SIZE;

/// 24-bit RGB color, e.g. `0xff00ff`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const NEON_CYAN: Color = Color(0x00ffff);
    pub const NEON_MAGENTA: Color = Color(0xff00ff);
    pub const ORANGE: Color = Color(0xff5500);
    pub const RED: Color = Color(0xff0000);
    pub const GREEN: Color = Color(0x00ff00);
    pub const YELLOW: Color = Color(0xffff00);
    pub const BLUE: Color = Color(0x0088ff);

    /// Normalized RGBA with the given alpha
    pub fn rgba(self, alpha: f32) -> [f32; 4] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b, alpha]
    }
}

/// Color used for explosions when the player takes a hit
pub const DAMAGE_COLOR: Color = Color::RED;
/// Color of collectibles ("data packets")
pub const COLLECTIBLE_COLOR: Color = Color::NEON_CYAN;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Barrier,
    Roadblock,
    Truck,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Barrier,
        ObstacleKind::Roadblock,
        ObstacleKind::Truck,
    ];

    /// Undistorted size at the player's plane
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::Barrier => Vec2::new(80.0, 80.0),
            ObstacleKind::Roadblock => Vec2::new(100.0, 60.0),
            ObstacleKind::Truck => Vec2::new(50.0, 120.0),
        }
    }

    pub fn color(self) -> Color {
        match self {
            ObstacleKind::Barrier => Color::NEON_MAGENTA,
            ObstacleKind::Roadblock => Color::ORANGE,
            ObstacleKind::Truck => Color::RED,
        }
    }

    /// Catalog point value. Hits never reduce the score.
    pub fn points(self) -> i32 {
        match self {
            ObstacleKind::Barrier => -10,
            ObstacleKind::Roadblock => -15,
            ObstacleKind::Truck => -20,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ObstacleKind::Barrier => "barrier",
            ObstacleKind::Roadblock => "roadblock",
            ObstacleKind::Truck => "truck",
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Absorbs obstacle hits
    Shield,
    /// Slows the road down
    TimeWarp,
    /// Pulls nearby data packets in
    DataMagnet,
    /// Instant +1 life
    ExtraLife,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Shield,
        PowerUpKind::TimeWarp,
        PowerUpKind::DataMagnet,
        PowerUpKind::ExtraLife,
    ];

    /// Full effect duration in ticks (0 for instant effects)
    pub fn duration(self) -> u32 {
        match self {
            PowerUpKind::Shield => 300,
            PowerUpKind::TimeWarp => 200,
            PowerUpKind::DataMagnet => 250,
            PowerUpKind::ExtraLife => 0,
        }
    }

    pub fn is_timed(self) -> bool {
        self.duration() > 0
    }

    pub fn size(self) -> Vec2 {
        Vec2::splat(POWER_UP_SIZE)
    }

    pub fn color(self) -> Color {
        match self {
            PowerUpKind::Shield => Color::GREEN,
            PowerUpKind::TimeWarp => Color::YELLOW,
            PowerUpKind::DataMagnet => Color::NEON_MAGENTA,
            PowerUpKind::ExtraLife => Color::BLUE,
        }
    }

    /// Display name for pickup notifications
    pub fn name(self) -> &'static str {
        match self {
            PowerUpKind::Shield => "Shield",
            PowerUpKind::TimeWarp => "Time Warp",
            PowerUpKind::DataMagnet => "Data Magnet",
            PowerUpKind::ExtraLife => "Extra Life",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_rgba() {
        assert_eq!(Color(0xff8000).rgba(0.5), [1.0, 128.0 / 255.0, 0.0, 0.5]);
    }

    #[test]
    fn test_obstacle_catalog() {
        let rows: Vec<_> = ObstacleKind::ALL
            .iter()
            .map(|k| (k.name(), k.size(), k.points()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("barrier", Vec2::new(80.0, 80.0), -10),
                ("roadblock", Vec2::new(100.0, 60.0), -15),
                ("truck", Vec2::new(50.0, 120.0), -20),
            ]
        );
    }

    #[test]
    fn test_only_extra_life_is_instant() {
        for kind in PowerUpKind::ALL {
            assert_eq!(kind.is_timed(), kind != PowerUpKind::ExtraLife);
        }
    }
}
