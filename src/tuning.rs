//! Data-driven game balance
//!
//! Every gameplay number that is a balance decision rather than playfield
//! geometry lives here, so a run can be re-tuned from a JSON file without a
//! rebuild. Missing fields fall back to the shipped defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Session ===
    /// Lives at the start of a round
    pub starting_lives: u32,
    /// Base scroll speed at the start of a round (units per tick)
    pub base_speed: f32,
    /// Base speed gained each time the score crosses a threshold
    pub speed_step: f32,
    /// Score distance between speed thresholds
    pub speed_step_score: u64,

    // === Spawning (per-tick Bernoulli chances) ===
    pub obstacle_base_chance: f32,
    /// Extra obstacle chance per unit of base speed
    pub obstacle_chance_per_speed: f32,
    /// Upper bound on the obstacle chance at high speed
    pub max_obstacle_chance: f32,
    pub collectible_chance: f32,
    pub power_up_chance: f32,

    // === Scoring ===
    pub collectible_score: u64,

    // === Effects ===
    /// Speed multiplier while Time Warp is active
    pub slow_time_factor: f32,
    /// Speed multiplier while boosting
    pub boost_factor: f32,
    pub boost_ticks: u32,
    pub boost_cooldown_ticks: u32,
    pub magnet_range: f32,
    pub magnet_strength: f32,

    // === Explosions ===
    pub particles_per_explosion: usize,
    /// Opacity lost per tick
    pub particle_fade: f32,
    /// Downward drift per tick, as a fraction of the effective speed
    pub particle_fall: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            base_speed: 5.0,
            speed_step: 0.1,
            speed_step_score: 1000,

            obstacle_base_chance: 0.01,
            obstacle_chance_per_speed: 0.001,
            max_obstacle_chance: 0.25,
            collectible_chance: 0.02,
            power_up_chance: 0.003,

            collectible_score: 50,

            slow_time_factor: 0.6,
            boost_factor: 1.5,
            boost_ticks: 100,
            boost_cooldown_ticks: 150,
            magnet_range: 150.0,
            magnet_strength: 3.0,

            particles_per_explosion: 20,
            particle_fade: 0.02,
            particle_fall: 0.5,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break simulation invariants
    #[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN must fail too
    pub fn validate(&self) -> Result<(), ConfigError> {
        let chances = [
            ("obstacle_base_chance", self.obstacle_base_chance),
            ("obstacle_chance_per_speed", self.obstacle_chance_per_speed),
            ("max_obstacle_chance", self.max_obstacle_chance),
            ("collectible_chance", self.collectible_chance),
            ("power_up_chance", self.power_up_chance),
        ];
        for (field, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(field, format!("{value} is not in [0, 1]")));
            }
        }

        // Entities must always make progress toward the near plane
        let factors = [
            ("base_speed", self.base_speed),
            ("slow_time_factor", self.slow_time_factor),
            ("boost_factor", self.boost_factor),
        ];
        for (field, value) in factors {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(
                    field,
                    format!("{value} must be positive and finite"),
                ));
            }
        }
        if !(self.speed_step.is_finite() && self.speed_step >= 0.0) {
            return Err(ConfigError::invalid(
                "speed_step",
                "must be finite and not negative",
            ));
        }
        if self.speed_step_score == 0 {
            return Err(ConfigError::invalid("speed_step_score", "must be at least 1"));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::invalid("starting_lives", "must be at least 1"));
        }
        if !(self.magnet_range > 0.0) {
            return Err(ConfigError::invalid("magnet_range", "must be positive"));
        }
        if !(self.particle_fade > 0.0) {
            return Err(ConfigError::invalid("particle_fade", "must be positive"));
        }
        Ok(())
    }

    /// Per-tick obstacle chance at the given base speed
    pub fn obstacle_chance(&self, base_speed: f32) -> f32 {
        (self.obstacle_base_chance + base_speed * self.obstacle_chance_per_speed)
            .min(self.max_obstacle_chance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "starting_lives": 5 }"#).unwrap();
        assert_eq!(tuning.starting_lives, 5);
        assert_eq!(tuning.collectible_score, 50);
    }

    #[test]
    fn test_rejects_bad_chance() {
        let err = Tuning::from_json(r#"{ "collectible_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "collectible_chance", .. }));
    }

    #[test]
    fn test_rejects_stalled_road() {
        let err = Tuning::from_json(r#"{ "base_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "base_speed", .. }));
    }

    #[test]
    fn test_rejects_reversed_road() {
        // Two negative factors multiply to a positive speed but run backwards
        let err = Tuning::from_json(r#"{ "base_speed": -5.0, "slow_time_factor": -0.6 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "base_speed", .. }));

        let err = Tuning::from_json(r#"{ "slow_time_factor": -0.6 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "slow_time_factor", .. }));
    }

    #[test]
    fn test_rejects_non_finite_factors() {
        let tuning = Tuning {
            speed_step: f32::INFINITY,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::Invalid { field: "speed_step", .. })
        ));

        let tuning = Tuning {
            base_speed: f32::NAN,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::Invalid { field: "base_speed", .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Tuning::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_obstacle_chance_formula_and_cap() {
        let tuning = Tuning::default();
        assert!((tuning.obstacle_chance(5.0) - 0.015).abs() < 1e-6);
        assert_eq!(tuning.obstacle_chance(10_000.0), tuning.max_obstacle_chance);
    }
}
