//! Scene building
//!
//! Turns a read-only view of the game state into a frame: a triangle list for the
//! GPU plus the HUD text the page displays. Nothing here mutates state.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors, with_alpha};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Entity, EntityKind, GamePhase, GameState};

/// Text overlay for the current frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub phase: GamePhase,
    pub score: u64,
    pub survival_secs: u64,
    pub level: u32,
    pub best: u64,
}

impl Hud {
    /// Human-readable lines for the current phase
    pub fn lines(&self) -> Vec<String> {
        match self.phase {
            GamePhase::Start => vec![
                "STARFALL".to_string(),
                "Catch the stars, dodge everything else".to_string(),
                format!("Best: {}", self.best),
                "Click or tap to start".to_string(),
            ],
            GamePhase::Playing => vec![
                format!("Score: {}", self.score),
                format!("Time: {}s", self.survival_secs),
                format!("Level: {}", self.level + 1),
            ],
            GamePhase::GameOver => vec![
                "GAME OVER".to_string(),
                format!("Score: {}", self.score),
                format!("Survived: {}s", self.survival_secs),
                format!("Level reached: {}", self.level + 1),
                format!("Best: {}", self.best),
                "Click or tap to play again".to_string(),
            ],
        }
    }
}

/// Everything needed to present one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub hud: Hud,
}

/// Build the frame for `state` at wall-clock `time_ms`
pub fn build_frame(state: &GameState, settings: &Settings, best: u64, time_ms: f64) -> Frame {
    let mut vertices = Vec::with_capacity(4096);

    starfield(&mut vertices, settings, time_ms);

    if state.phase != GamePhase::Start {
        for (_, entity) in state.entities.iter() {
            draw_entity(&mut vertices, entity);
        }
        if state.phase == GamePhase::Playing {
            draw_player(&mut vertices, state.player.pos, state.player.size);
        }
    }

    for (_, p) in state.particles.iter() {
        let color = with_alpha(p.color, p.life_fraction());
        shapes::quad(
            &mut vertices,
            p.pos,
            Vec2::splat(p.size / 2.0),
            0.0,
            color,
        );
    }

    let (score, survival_secs, level) = match state.summary {
        Some(summary) if state.phase == GamePhase::GameOver => {
            (summary.score, summary.survival_secs, summary.level)
        }
        _ => (state.score, state.survival_secs(), state.difficulty.level),
    };

    Frame {
        vertices,
        hud: Hud {
            phase: state.phase,
            score,
            survival_secs,
            level,
            best: best.max(score),
        },
    }
}

/// Cheap integer hash (golden ratio multiplier) mapped to 0..1
fn hash01(n: u32) -> f32 {
    let h = n.wrapping_mul(2654435761).rotate_left(13).wrapping_mul(0x9E37_79B9);
    (h >> 8) as f32 / (1u32 << 24) as f32
}

/// Position of background star `i` at `time_ms`
pub fn background_star(i: u32, time_ms: f64, moving: bool) -> (Vec2, f32) {
    let x = hash01(i * 3) * SURFACE_WIDTH;
    let y0 = hash01(i * 3 + 1) * SURFACE_HEIGHT;
    let depth = 0.2 + 0.8 * hash01(i * 3 + 2);
    // Nearer stars drift faster
    let drift = if moving {
        (time_ms * 0.02 * depth as f64) as f32
    } else {
        0.0
    };
    let y = (y0 + drift).rem_euclid(SURFACE_HEIGHT);
    (Vec2::new(x, y), depth)
}

fn starfield(out: &mut Vec<Vertex>, settings: &Settings, time_ms: f64) {
    let moving = !settings.reduced_motion;
    for i in 0..settings.star_count() as u32 {
        let (pos, depth) = background_star(i, time_ms, moving);
        let color = with_alpha(colors::BACKGROUND_STAR, 0.25 + 0.6 * depth);
        let half = 0.5 + depth;
        shapes::quad(out, pos, Vec2::splat(half), 0.0, color);
    }
}

fn draw_entity(out: &mut Vec<Vertex>, e: &Entity) {
    let color = e.kind.spec().color;
    let r = e.size / 2.0;
    match e.kind {
        EntityKind::Star => {
            shapes::star(out, e.pos, r, r * 0.45, 5, e.rotation, color);
        }
        EntityKind::Meteor => {
            shapes::polygon(out, e.pos, r, 7, e.rotation, color);
            let crater = e.pos + Vec2::from_angle(e.rotation) * r * 0.35;
            shapes::circle(out, crater, r * 0.25, colors::METEOR_CRATER);
        }
        EntityKind::Bomb => {
            shapes::circle(out, e.pos, r * 0.85, color);
            let fuse_dir = Vec2::from_angle(e.rotation - std::f32::consts::FRAC_PI_2);
            shapes::quad(
                out,
                e.pos + fuse_dir * r * 0.95,
                Vec2::new(r * 0.12, r * 0.25),
                e.rotation,
                colors::BOMB_FUSE,
            );
        }
    }
}

fn draw_player(out: &mut Vec<Vertex>, pos: Vec2, size: f32) {
    shapes::ship(out, pos, size, colors::PLAYER);
    shapes::quad(
        out,
        pos + Vec2::new(0.0, size * 0.4),
        Vec2::new(size * 0.4, size * 0.08),
        0.0,
        colors::PLAYER_TRIM,
    );
}
