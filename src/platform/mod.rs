//! Platform abstraction layer
//!
//! Pieces of the frame driver that sit between the browser (or a headless runner)
//! and the simulation:
//! - Frame timing and fixed-step accumulation
//! - Input sampling

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{InputSampler, map_to_logical};
