//! Starfall - A catch-and-dodge falling-objects arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, difficulty, game state)
//! - `renderer`: Scene building and the WebGPU rendering pipeline
//! - `platform`: Frame clock and input sampling
//! - `app`: Platform-agnostic frame driver tying the above together
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod best_score;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use app::App;
pub use best_score::BestScore;
pub use error::{ConfigError, SetupError, TransitionError};
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical drawing surface, independent of physical pixels
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Reference frame length. Speeds are expressed in pixels per reference frame.
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT_MS: f32 = FRAME_MS;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest real frame delta accepted by the driver (tab switches, breakpoints)
    pub const MAX_FRAME_DELTA_MS: f32 = 100.0;

    /// Player defaults - the player slides along a fixed row near the bottom
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_Y: f32 = SURFACE_HEIGHT - 60.0;

    /// Falling entity defaults
    pub const ENTITY_SIZE: f32 = 30.0;
    /// Entity pool capacity (spawn chance is capped, so this is never approached in play)
    pub const MAX_ENTITIES: usize = 128;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Number of reference frames covered by `dt_ms`
#[inline]
pub fn frames(dt_ms: f32) -> f32 {
    dt_ms / consts::FRAME_MS
}
