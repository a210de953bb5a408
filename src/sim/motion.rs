//! Per-tick motion and lifecycle
//!
//! Advances entities and particles and evicts whatever has left the surface or
//! run out of life.

use super::pool::Pool;
use super::state::{Entity, Particle};
use crate::frames;

/// Downward pull on particles (pixels per reference frame, per reference frame)
const PARTICLE_GRAVITY: f32 = 0.08;
/// Fraction of particle velocity kept each reference frame
const PARTICLE_DRAG: f32 = 0.97;

/// Move every entity down by its speed and spin it.
/// Entities fully below the surface are released.
pub fn update_entities(entities: &mut Pool<Entity>, dt_ms: f32) -> usize {
    let n = frames(dt_ms);
    let before = entities.len();
    entities.retain(|e| {
        e.pos.y += e.speed * n;
        e.rotation = (e.rotation + e.spin * n) % std::f32::consts::TAU;
        !e.is_off_surface()
    });
    before - entities.len()
}

/// Advance particles and drop the expired ones
pub fn update_particles(particles: &mut Pool<Particle>, dt_ms: f32) {
    let n = frames(dt_ms);
    let drag = PARTICLE_DRAG.powf(n);
    particles.retain(|p| {
        p.pos += p.vel * n;
        p.vel.y += PARTICLE_GRAVITY * n;
        p.vel *= drag;
        p.life_ms -= dt_ms;
        p.life_ms > 0.0
    });
}
