//! Explosion particles
//!
//! Purely decorative: particles never feed back into gameplay. They still use
//! the session RNG so a seeded run replays identically.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::Color;

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color,
    /// Opacity, 1.0 at birth; the particle dies at 0
    pub alpha: f32,
}

/// Burst `count` particles out of a point.
///
/// Directions are uniform, speeds in [1, 4), sizes in [2, 7). When the
/// collection would exceed `cap`, the oldest particles are dropped first.
pub fn emit<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    at: Vec2,
    color: Color,
    count: usize,
    cap: usize,
) {
    if cap == 0 {
        return;
    }

    for _ in 0..count {
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        let speed = rng.random::<f32>() * 3.0 + 1.0;
        let size = rng.random::<f32>() * 5.0 + 2.0;

        particles.push(Particle {
            pos: at,
            vel: Vec2::from_angle(angle) * speed,
            size,
            color,
            alpha: 1.0,
        });
    }

    if particles.len() > cap {
        let excess = particles.len() - cap;
        particles.drain(..excess);
    }
}

/// Integrate, fade and cull particles for one tick
pub fn update(particles: &mut Vec<Particle>, fall: f32, fade: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.pos.y += fall;
        particle.alpha -= fade;
    }
    particles.retain(|p| p.alpha > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_emit_burst_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        emit(&mut particles, &mut rng, Vec2::new(10.0, 20.0), Color::RED, 20, 500);

        assert_eq!(particles.len(), 20);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(10.0, 20.0));
            assert_eq!(p.alpha, 1.0);
            let speed = p.vel.length();
            assert!((1.0 - 1e-4..4.0 + 1e-4).contains(&speed));
            assert!((2.0..7.0).contains(&p.size));
        }
    }

    #[test]
    fn test_emit_respects_cap() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        emit(&mut particles, &mut rng, Vec2::ZERO, Color::RED, 20, 30);
        emit(&mut particles, &mut rng, Vec2::ONE, Color::GREEN, 20, 30);

        assert_eq!(particles.len(), 30);
        // The newest burst survives intact
        assert!(particles[10..].iter().all(|p| p.color == Color::GREEN));

        let mut none = Vec::new();
        emit(&mut none, &mut rng, Vec2::ZERO, Color::RED, 20, 0);
        assert!(none.is_empty());
    }

    #[test]
    fn test_particles_fade_out() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut particles = Vec::new();
        emit(&mut particles, &mut rng, Vec2::ZERO, Color::RED, 5, 100);

        let mut ticks = 0;
        while !particles.is_empty() {
            update(&mut particles, 2.5, 0.02);
            ticks += 1;
            assert!(ticks <= 51, "particles outlived their fade");
        }
        assert!(ticks >= 49);
    }

    #[test]
    fn test_fall_bias_pushes_down() {
        let mut particles = vec![Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 2.0,
            color: Color::RED,
            alpha: 1.0,
        }];
        update(&mut particles, 2.5, 0.02);
        assert_eq!(particles[0].pos, Vec2::new(0.0, 2.5));
    }
}
