//! Simulation tick
//!
//! One tick runs its sub-steps in a fixed order:
//! input -> player motion -> spawn -> entity and particle motion/lifecycle ->
//! collisions -> playing time and difficulty.

use super::state::{GameEvent, GamePhase, GameState};
use super::{collision, effects, motion, spawner};

/// Input sampled for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer x in logical coordinates
    pub pointer_x: Option<f32>,
    /// Leave the title screen
    pub start: bool,
    /// Begin a new round after game over
    pub restart: bool,
}

/// Advance the game state by `dt_ms` and report what happened
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.start {
        match state.start() {
            Ok(()) => events.push(GameEvent::Started),
            Err(e) => log::debug!("Ignoring start: {}", e),
        }
    }
    if input.restart {
        match state.restart() {
            Ok(()) => events.push(GameEvent::Restarted),
            Err(e) => log::debug!("Ignoring restart: {}", e),
        }
    }

    if state.phase != GamePhase::Playing {
        // Particles keep animating behind the title and game over screens
        motion::update_particles(&mut state.particles, dt_ms);
        return events;
    }

    if let Some(x) = input.pointer_x {
        state.player.move_toward(x, state.tuning.player_follow, dt_ms);
    }

    if let Some((_, kind)) = spawner::spawn(state) {
        events.push(GameEvent::Spawned(kind));
    }

    motion::update_entities(&mut state.entities, dt_ms);
    motion::update_particles(&mut state.particles, dt_ms);

    let report = collision::resolve(state);
    for &(kind, points, pos) in &report.collected {
        effects::collect(state, pos);
        events.push(GameEvent::Collected { kind, points });
    }
    if let Some((kind, pos)) = report.hit {
        // Score and time freeze at their values from before this tick
        effects::explosion(state, pos, kind.spec().color);
        events.push(GameEvent::Hit(kind));
        match state.end_round() {
            Ok(summary) => events.push(GameEvent::GameOver(summary)),
            Err(e) => log::error!("Failed to end round: {}", e),
        }
        return events;
    }

    state.elapsed_ms += dt_ms as f64;

    if state.difficulty.update(state.elapsed_ms, &state.tuning) {
        events.push(GameEvent::DifficultyUp {
            level: state.difficulty.level,
        });
        if !state.reduced_motion {
            effects::level_up(state);
        }
    }

    events
}
