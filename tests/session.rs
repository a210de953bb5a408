//! End-to-end session scenarios driven through the public tick API

use glam::Vec2;
use starfall::consts::*;
use starfall::sim::{
    Entity, EntityKind, GameEvent, GamePhase, GameState, TickInput, autopilot, tick,
};
use starfall::Tuning;

fn input(start: bool, restart: bool) -> TickInput {
    TickInput {
        pointer_x: None,
        start,
        restart,
    }
}

fn no_spawns() -> Tuning {
    Tuning {
        base_spawn_chance: 0.0,
        spawn_chance_step: 0.0,
        max_spawn_chance: 0.0,
        ..Tuning::default()
    }
}

#[test]
fn star_on_player_scores_its_points() {
    let mut state = GameState::new(11, no_spawns(), 64);
    tick(&mut state, &input(true, false), SIM_DT_MS);
    assert_eq!(state.score, 0);

    let pos = state.player.pos;
    let handle = state
        .entities
        .acquire(Entity::new(EntityKind::Star, pos, 0.0, 0.0))
        .unwrap();

    let events = tick(&mut state, &TickInput::default(), SIM_DT_MS);
    assert_eq!(state.score, 50);
    assert!(state.entities.get(handle).is_none());
    assert!(events.contains(&GameEvent::Collected {
        kind: EntityKind::Star,
        points: 50
    }));
    // Collection sparkle
    assert!(!state.particles.is_empty());
}

#[test]
fn harmful_collision_freezes_then_restart_resets() {
    let mut state = GameState::new(22, no_spawns(), 64);
    tick(&mut state, &input(true, false), SIM_DT_MS);
    for _ in 0..120 {
        tick(&mut state, &TickInput::default(), SIM_DT_MS);
    }
    state.score = 350;
    let score = state.score;

    state.entities.acquire(Entity::new(
        EntityKind::Star,
        Vec2::new(50.0, 50.0),
        1.0,
        0.0,
    ));
    let pos = state.player.pos;
    state
        .entities
        .acquire(Entity::new(EntityKind::Bomb, pos, 0.0, 0.0));
    let events = tick(&mut state, &TickInput::default(), SIM_DT_MS);

    assert_eq!(state.phase, GamePhase::GameOver);
    let summary = state.summary.expect("summary captured");
    assert_eq!(summary.score, score);
    assert_eq!(summary.survival_secs, state.survival_secs());
    assert!(events.contains(&GameEvent::GameOver(summary)));

    let elapsed = state.elapsed_ms;
    for _ in 0..30 {
        tick(&mut state, &TickInput::default(), SIM_DT_MS);
    }
    assert_eq!(state.score, score);
    assert_eq!(state.elapsed_ms, elapsed);

    let events = tick(&mut state, &input(false, true), SIM_DT_MS);
    assert_eq!(events.first(), Some(&GameEvent::Restarted));
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score, 0);
    assert!(state.entities.is_empty());
}

#[test]
fn round_trip_returns_to_initial_values() {
    let tuning = Tuning::default();
    let mut state = GameState::new(33, tuning.clone(), 64);
    let fresh = GameState::new(33, tuning, 64);

    tick(&mut state, &input(true, false), SIM_DT_MS);
    let pointer = TickInput {
        pointer_x: Some(700.0),
        ..Default::default()
    };
    for _ in 0..700 {
        tick(&mut state, &pointer, SIM_DT_MS);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }
    if state.phase == GamePhase::Playing {
        let pos = state.player.pos;
        state
            .entities
            .acquire(Entity::new(EntityKind::Meteor, pos, 0.0, 0.0));
        tick(&mut state, &TickInput::default(), SIM_DT_MS);
    }
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(!state.particles.is_empty());

    // Restart is handled before anything else in the tick, so inspect it right after
    state.restart().unwrap();
    assert_eq!(state.score, 0);
    assert_eq!(state.elapsed_ms, 0.0);
    assert_eq!(state.difficulty, fresh.difficulty);
    assert!(state.entities.is_empty());
    assert!(state.particles.is_empty());
    assert_eq!(state.player, fresh.player);
    assert_eq!(state.summary, None);
}

#[test]
fn start_state_ignores_time() {
    let mut state = GameState::new(44, Tuning::default(), 64);
    for _ in 0..600 {
        let events = tick(&mut state, &TickInput::default(), SIM_DT_MS);
        assert!(events.is_empty());
    }
    assert_eq!(state.phase, GamePhase::Start);
    assert_eq!(state.elapsed_ms, 0.0);
    assert!(state.entities.is_empty());
    assert_eq!(state.difficulty.level, 0);
}

#[test]
fn difficulty_steps_during_play() {
    let mut state = GameState::new(55, no_spawns(), 0);
    tick(&mut state, &input(true, false), SIM_DT_MS);
    let mut steps = 0;
    // Irregular frame times adding up to exactly 25 seconds of play (first tick included)
    let mut remaining = 25_000.0 - SIM_DT_MS;
    let pattern = [10.0, 33.0, 16.0, 70.0, 5.0];
    let mut i = 0;
    while remaining > 0.0 {
        let dt = f32::min(pattern[i % pattern.len()], remaining);
        remaining -= dt;
        let events = tick(&mut state, &TickInput::default(), dt);
        steps += events
            .iter()
            .filter(|e| matches!(e, GameEvent::DifficultyUp { .. }))
            .count();
        i += 1;
    }
    assert_eq!(steps, 2);
    assert_eq!(state.difficulty.level, 2);
}

fn spawned_kinds(seed: u64, max_particles: usize, ticks: usize) -> Vec<EntityKind> {
    let mut state = GameState::new(seed, Tuning::default(), max_particles);
    let mut kinds = Vec::new();
    tick(&mut state, &input(true, false), SIM_DT_MS);
    for _ in 0..ticks {
        let tick_input = TickInput {
            pointer_x: autopilot::target_x(&state),
            start: false,
            restart: state.phase == GamePhase::GameOver,
        };
        for event in tick(&mut state, &tick_input, SIM_DT_MS) {
            if let GameEvent::Spawned(kind) = event {
                kinds.push(kind);
            }
        }
    }
    kinds
}

#[test]
fn particle_cap_does_not_change_gameplay() {
    let with_particles = spawned_kinds(7, 1024, 20_000);
    let without_particles = spawned_kinds(7, 0, 20_000);
    assert!(with_particles.len() > 100);
    assert_eq!(with_particles, without_particles);
}
