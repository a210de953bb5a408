//! Frame timing
//!
//! Turns display-refresh timestamps into a number of fixed simulation steps.

use crate::consts::{MAX_FRAME_DELTA_MS, MAX_SUBSTEPS, SIM_DT_MS};

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous frame, clamped.
    /// The first frame counts as exactly one simulation step.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((now_ms - last) as f32).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => SIM_DT_MS,
        };
        self.last_time = Some(now_ms);
        dt
    }

    /// Record a frame at `now_ms` and return how many fixed steps to run
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        self.accumulator += self.delta(now_ms);

        let mut steps = 0;
        while self.accumulator >= SIM_DT_MS && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT_MS;
            steps += 1;
        }
        steps
    }

    /// Forget the previous timestamp (after a pause in frame delivery)
    pub fn reset(&mut self) {
        self.last_time = None;
        self.accumulator = 0.0;
    }
}
