//! Data-driven game balance
//!
//! Every gameplay constant that affects feel lives here so it can be tweaked
//! from JSON without touching simulation code.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::EntityKind;

/// Tolerance when checking that category weights sum to one
const WEIGHT_EPSILON: f32 = 1e-3;

/// How the player's bounds are tested against a falling entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum HitTest {
    /// Centered box overlap, each box shrunk inward by `padding` pixels
    Rect { padding: f32 },
    /// Center distance below `(a + b) / divisor`
    Circle { divisor: f32 },
}

impl Default for HitTest {
    fn default() -> Self {
        HitTest::Rect { padding: 5.0 }
    }
}

/// Relative spawn frequency of each entity category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindWeights {
    pub star: f32,
    pub meteor: f32,
    pub bomb: f32,
}

impl Default for KindWeights {
    fn default() -> Self {
        Self {
            star: 0.4,
            meteor: 0.35,
            bomb: 0.25,
        }
    }
}

impl KindWeights {
    /// Weights in `EntityKind::ALL` order
    pub fn as_table(&self) -> [(EntityKind, f32); 3] {
        [
            (EntityKind::Star, self.star),
            (EntityKind::Meteor, self.meteor),
            (EntityKind::Bomb, self.bomb),
        ]
    }

    pub fn sum(&self) -> f32 {
        self.star + self.meteor + self.bomb
    }
}

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Spawn probability per tick at difficulty level 0
    pub base_spawn_chance: f32,
    /// Added to the spawn probability on every difficulty step
    pub spawn_chance_step: f32,
    /// Spawn probability never exceeds this
    pub max_spawn_chance: f32,
    /// Fall speed baseline at level 0 (pixels per reference frame)
    pub base_fall_speed: f32,
    /// Added to the fall speed baseline on every difficulty step
    pub fall_speed_step: f32,
    /// Per-entity speed is `baseline + uniform(0, speed_jitter)`
    pub speed_jitter: f32,
    /// Playing time between difficulty steps
    pub difficulty_interval_ms: f32,
    /// Fraction of the remaining distance the player covers each reference frame (1.0 = snap)
    pub player_follow: f32,
    pub weights: KindWeights,
    pub hit_test: HitTest,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_spawn_chance: 0.02,
            spawn_chance_step: 0.005,
            max_spawn_chance: 0.05,
            base_fall_speed: 2.0,
            fall_speed_step: 0.5,
            speed_jitter: 2.0,
            difficulty_interval_ms: 10_000.0,
            player_follow: 0.2,
            weights: KindWeights::default(),
            hit_test: HitTest::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_EPSILON {
            return Err(ConfigError::WeightSum(sum));
        }
        for (kind, weight) in self.weights.as_table() {
            if weight < 0.0 {
                return Err(ConfigError::OutOfRange {
                    field: kind.weight_field(),
                    expected: "non-negative",
                    value: weight,
                });
            }
        }

        check_unit("base_spawn_chance", self.base_spawn_chance)?;
        check_unit("max_spawn_chance", self.max_spawn_chance)?;
        check_non_negative("spawn_chance_step", self.spawn_chance_step)?;
        check_non_negative("base_fall_speed", self.base_fall_speed)?;
        check_non_negative("fall_speed_step", self.fall_speed_step)?;
        check_non_negative("speed_jitter", self.speed_jitter)?;
        check_positive("difficulty_interval_ms", self.difficulty_interval_ms)?;

        if self.player_follow <= 0.0 || self.player_follow > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "player_follow",
                expected: "in (0, 1]",
                value: self.player_follow,
            });
        }

        match self.hit_test {
            HitTest::Rect { padding } => check_non_negative("hit_test.padding", padding)?,
            HitTest::Circle { divisor } => check_positive("hit_test.divisor", divisor)?,
        }

        Ok(())
    }
}

fn check_unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: "in [0, 1]",
            value,
        })
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: "non-negative",
            value,
        })
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: "positive",
            value,
        })
    }
}
