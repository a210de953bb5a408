//! Demo mode - picks a pointer position the way a cautious player would
//!
//! Used by the headless runner. Only reads state.

use super::state::{GamePhase, GameState};
use crate::consts::*;

/// How far above the player a harmful entity starts to matter
const DANGER_HEIGHT: f32 = 220.0;
/// Horizontal clearance kept from harmful entities
const DANGER_MARGIN: f32 = 45.0;
/// Candidate columns considered when dodging
const COLUMNS: usize = 32;

/// Pointer x for this tick, or `None` outside Playing
pub fn target_x(state: &GameState) -> Option<f32> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let player = &state.player;
    let threats: Vec<f32> = state
        .entities
        .iter()
        .filter(|(_, e)| e.harmful && e.pos.y < player.pos.y + e.size)
        .filter(|(_, e)| player.pos.y - e.pos.y < DANGER_HEIGHT)
        .map(|(_, e)| e.pos.x)
        .collect();

    let is_safe = |x: f32| threats.iter().all(|t| (t - x).abs() > DANGER_MARGIN);

    // Lowest star still above the player
    let star = state
        .entities
        .iter()
        .filter(|(_, e)| !e.harmful && e.pos.y < player.pos.y)
        .max_by(|(_, a), (_, b)| a.pos.y.total_cmp(&b.pos.y))
        .map(|(_, e)| e.pos.x);

    if let Some(x) = star.filter(|x| is_safe(*x)) {
        return Some(x);
    }
    if is_safe(player.pos.x) {
        return Some(player.pos.x);
    }

    // Nearest safe column
    let half = player.size / 2.0;
    (0..=COLUMNS)
        .map(|i| half + (SURFACE_WIDTH - player.size) * i as f32 / COLUMNS as f32)
        .filter(|x| is_safe(*x))
        .min_by(|a, b| {
            (a - player.pos.x)
                .abs()
                .total_cmp(&(b - player.pos.x).abs())
        })
        .or(Some(player.pos.x))
}
