//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod effects;
pub mod motion;
pub mod pool;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, circles_overlap, rects_overlap};
pub use difficulty::Difficulty;
pub use pool::{Handle, Pool};
pub use spawner::choose_kind;
pub use state::{
    Entity, EntityKind, GameEvent, GamePhase, GameState, KindSpec, Particle, Player,
    SessionSummary,
};
pub use tick::{TickInput, tick};
