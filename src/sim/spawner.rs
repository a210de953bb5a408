//! Falling entity spawner
//!
//! Rolls once per tick against the current spawn chance and, on success, drops a
//! weighted-random category just above the top edge.

use glam::Vec2;
use rand::Rng;

use super::pool::Handle;
use super::state::{Entity, EntityKind, GamePhase, GameState};
use crate::consts::*;
use crate::tuning::KindWeights;

/// Largest spin (radians per reference frame) in either direction
const MAX_SPIN: f32 = 0.05;

/// Pick a category by cumulative weight.
///
/// `roll` is uniform in [0, 1). If float accumulation leaves the roll unmatched
/// the first category is returned.
pub fn choose_kind(weights: &KindWeights, roll: f32) -> EntityKind {
    let mut cumulative = 0.0;
    for (kind, weight) in weights.as_table() {
        cumulative += weight;
        if roll < cumulative {
            return kind;
        }
    }
    EntityKind::ALL[0]
}

/// Build a new entity of `kind` at a random column above the surface
pub fn make_entity<R: Rng>(kind: EntityKind, fall_speed: f32, jitter: f32, rng: &mut R) -> Entity {
    let size = kind.spec().size;
    let half = size / 2.0;
    let x = rng.random_range(half..=SURFACE_WIDTH - half);
    let speed = fall_speed + rng.random::<f32>() * jitter;
    let spin = rng.random_range(-MAX_SPIN..=MAX_SPIN);
    Entity::new(kind, Vec2::new(x, -size), speed, spin)
}

/// Maybe spawn one entity this tick
pub fn spawn(state: &mut GameState) -> Option<(Handle, EntityKind)> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    if state.rng.random::<f32>() >= state.difficulty.spawn_chance {
        return None;
    }

    let kind = choose_kind(&state.tuning.weights, state.rng.random::<f32>());
    let entity = make_entity(
        kind,
        state.difficulty.fall_speed,
        state.tuning.speed_jitter,
        &mut state.rng,
    );

    match state.entities.acquire(entity) {
        Some(handle) => Some((handle, kind)),
        None => {
            log::warn!("Entity pool exhausted, skipping spawn");
            None
        }
    }
}
