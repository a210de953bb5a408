//! Input sampling
//!
//! Platform events land here whenever they arrive. The driver samples once per
//! tick: the pointer is the most recent position only (no replay) and the
//! one-shot triggers are cleared by the sample that sees them.

use crate::consts::SURFACE_WIDTH;
use crate::sim::TickInput;

#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    pointer_x: Option<f32>,
    start: bool,
    restart: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest pointer position, already in logical coordinates
    pub fn pointer(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    pub fn press_start(&mut self) {
        self.start = true;
    }

    pub fn press_restart(&mut self) {
        self.restart = true;
    }

    /// Input for the next tick; one-shot triggers are consumed
    pub fn sample(&mut self) -> TickInput {
        let input = TickInput {
            pointer_x: self.pointer_x,
            start: self.start,
            restart: self.restart,
        };
        self.start = false;
        self.restart = false;
        input
    }
}

/// Map a pointer offset within an element of `client_width` CSS pixels to logical x
pub fn map_to_logical(offset_x: f32, client_width: f32) -> f32 {
    if client_width <= 0.0 {
        return SURFACE_WIDTH / 2.0;
    }
    (offset_x / client_width * SURFACE_WIDTH).clamp(0.0, SURFACE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shots_consumed() {
        let mut input = InputSampler::new();
        input.press_start();
        assert!(input.sample().start);
        assert!(!input.sample().start);
    }

    #[test]
    fn test_pointer_keeps_latest() {
        let mut input = InputSampler::new();
        assert_eq!(input.sample().pointer_x, None);
        input.pointer(10.0);
        input.pointer(250.0);
        assert_eq!(input.sample().pointer_x, Some(250.0));
        assert_eq!(input.sample().pointer_x, Some(250.0));
    }

    #[test]
    fn test_map_to_logical() {
        assert_eq!(map_to_logical(200.0, 400.0), SURFACE_WIDTH / 2.0);
        assert_eq!(map_to_logical(-5.0, 400.0), 0.0);
        assert_eq!(map_to_logical(900.0, 400.0), SURFACE_WIDTH);
        assert_eq!(map_to_logical(10.0, 0.0), SURFACE_WIDTH / 2.0);
    }
}
