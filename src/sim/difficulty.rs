//! Time-gated difficulty ramp
//!
//! Every `difficulty_interval_ms` of Playing time the fall speed baseline and the
//! spawn chance go up by one step. The spawn chance saturates at its cap.

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    /// Steps applied so far this round
    pub level: u32,
    /// Fall speed baseline (pixels per reference frame)
    pub fall_speed: f32,
    /// Spawn probability per tick
    pub spawn_chance: f32,
    /// Playing time at which the next step becomes due
    pub next_step_at_ms: f64,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            level: 0,
            fall_speed: tuning.base_fall_speed,
            spawn_chance: tuning.base_spawn_chance.min(tuning.max_spawn_chance),
            next_step_at_ms: tuning.difficulty_interval_ms as f64,
        }
    }

    /// Check the round's Playing time. Returns true if a step was applied.
    ///
    /// At most one step per call. The marker moves by whole intervals, so a
    /// long frame leaves its surplus due and the next call picks it up.
    pub fn update(&mut self, elapsed_ms: f64, tuning: &Tuning) -> bool {
        if elapsed_ms < self.next_step_at_ms {
            return false;
        }
        self.next_step_at_ms += tuning.difficulty_interval_ms as f64;
        self.step(tuning);
        true
    }

    /// Apply one difficulty step unconditionally
    pub fn step(&mut self, tuning: &Tuning) {
        self.level += 1;
        self.fall_speed += tuning.fall_speed_step;
        self.spawn_chance = (self.spawn_chance + tuning.spawn_chance_step).min(tuning.max_spawn_chance);
    }
}
