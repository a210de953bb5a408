//! Cosmetic particle bursts
//!
//! Particles draw from their own seeded RNG, so the particle cap never changes
//! the gameplay stream. Nothing in here feeds back into gameplay. When the
//! particle pool is full the rest of a burst is dropped.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Particle};

const COLLECT_COLOR: [f32; 4] = [1.0, 0.9, 0.35, 1.0];
const LEVEL_UP_COLOR: [f32; 4] = [0.6, 0.4, 1.0, 1.0];

#[derive(Debug, Clone, Copy)]
struct Burst {
    count: usize,
    min_speed: f32,
    max_speed: f32,
    life_ms: f32,
    size: f32,
}

const COLLECT: Burst = Burst {
    count: 12,
    min_speed: 1.0,
    max_speed: 3.5,
    life_ms: 500.0,
    size: 3.0,
};

const EXPLOSION: Burst = Burst {
    count: 30,
    min_speed: 2.0,
    max_speed: 6.0,
    life_ms: 900.0,
    size: 4.0,
};

const LEVEL_UP_COUNT: usize = 24;
const LEVEL_UP_RADIUS: f32 = 30.0;

fn emit(state: &mut GameState, at: Vec2, color: [f32; 4], burst: Burst) {
    for _ in 0..burst.count {
        let angle = state.fx_rng.random_range(0.0..std::f32::consts::TAU);
        let speed = state.fx_rng.random_range(burst.min_speed..burst.max_speed);
        let life_ms = burst.life_ms * state.fx_rng.random_range(0.6..1.0);
        let particle = Particle {
            pos: at,
            vel: Vec2::from_angle(angle) * speed,
            color,
            size: burst.size,
            life_ms,
            max_life_ms: life_ms,
        };
        if state.particles.acquire(particle).is_none() {
            break;
        }
    }
}

/// Sparkle where a star was caught
pub fn collect(state: &mut GameState, at: Vec2) {
    emit(state, at, COLLECT_COLOR, COLLECT);
}

/// Debris in the color of whatever hit the player
pub fn explosion(state: &mut GameState, at: Vec2, color: [f32; 4]) {
    emit(state, at, color, EXPLOSION);
}

/// Expanding ring around the player on a difficulty step
pub fn level_up(state: &mut GameState) {
    let center = state.player.pos;
    for i in 0..LEVEL_UP_COUNT {
        let dir = Vec2::from_angle(i as f32 / LEVEL_UP_COUNT as f32 * std::f32::consts::TAU);
        let particle = Particle {
            pos: center + dir * LEVEL_UP_RADIUS,
            vel: dir * 2.5,
            color: LEVEL_UP_COLOR,
            size: 3.0,
            life_ms: 700.0,
            max_life_ms: 700.0,
        };
        if state.particles.acquire(particle).is_none() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_burst_respects_pool_capacity() {
        let mut state = GameState::new(5, Tuning::default(), 8);
        explosion(&mut state, Vec2::new(10.0, 10.0), [1.0; 4]);
        assert_eq!(state.particles.len(), 8);
        collect(&mut state, Vec2::ZERO);
        assert_eq!(state.particles.len(), 8);
    }

    #[test]
    fn test_zero_capacity_disables_particles() {
        let mut state = GameState::new(5, Tuning::default(), 0);
        collect(&mut state, Vec2::ZERO);
        level_up(&mut state);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_collect_burst_size() {
        let mut state = GameState::new(5, Tuning::default(), 64);
        collect(&mut state, Vec2::new(400.0, 300.0));
        assert_eq!(state.particles.len(), COLLECT.count);
        assert!(state.particles.iter().all(|(_, p)| p.life_fraction() == 1.0));
    }
}
