//! Game state and core simulation types
//!
//! `GameState` is the whole session: there are no globals. Update and render
//! functions receive it explicitly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::pool::Pool;
use crate::consts::*;
use crate::error::TransitionError;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the player to start
    Start,
    /// Active simulation
    Playing,
    /// Round ended, waiting for restart
    GameOver,
}

/// Falling entity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Collect for points
    Star,
    /// Ends the round on contact
    Meteor,
    /// Ends the round on contact
    Bomb,
}

/// Fixed per-category properties
#[derive(Debug, Clone, Copy)]
pub struct KindSpec {
    pub harmful: bool,
    pub points: u64,
    pub size: f32,
    pub color: [f32; 4],
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Star, EntityKind::Meteor, EntityKind::Bomb];

    pub const fn spec(self) -> KindSpec {
        match self {
            EntityKind::Star => KindSpec {
                harmful: false,
                points: 50,
                size: ENTITY_SIZE,
                color: [1.0, 0.85, 0.2, 1.0],
            },
            EntityKind::Meteor => KindSpec {
                harmful: true,
                points: 0,
                size: ENTITY_SIZE,
                color: [0.85, 0.45, 0.2, 1.0],
            },
            EntityKind::Bomb => KindSpec {
                harmful: true,
                points: 0,
                size: ENTITY_SIZE,
                color: [0.9, 0.15, 0.25, 1.0],
            },
        }
    }

    pub fn is_harmful(self) -> bool {
        self.spec().harmful
    }

    /// Name of the matching tuning weight field (for error messages)
    pub fn weight_field(self) -> &'static str {
        match self {
            EntityKind::Star => "weights.star",
            EntityKind::Meteor => "weights.meteor",
            EntityKind::Bomb => "weights.bomb",
        }
    }
}

/// The player's catcher
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(SURFACE_WIDTH / 2.0, PLAYER_Y),
            size: PLAYER_SIZE,
        }
    }
}

impl Player {
    /// Ease toward `target_x` and keep the player fully on the surface
    pub fn move_toward(&mut self, target_x: f32, follow: f32, dt_ms: f32) {
        // Apply the per-frame follow factor once per elapsed reference frame
        let t = 1.0 - (1.0 - follow).powf(crate::frames(dt_ms));
        let half = self.size / 2.0;
        self.pos.x = crate::lerp(self.pos.x, target_x, t).clamp(half, SURFACE_WIDTH - half);
    }

    pub fn recenter(&mut self) {
        *self = Self::default();
    }
}

/// A falling object
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub pos: Vec2,
    pub size: f32,
    /// Pixels per reference frame, downward
    pub speed: f32,
    pub points: u64,
    pub harmful: bool,
    pub rotation: f32,
    /// Radians per reference frame
    pub spin: f32,
}

impl Entity {
    /// Build an entity from its category table entry
    pub fn new(kind: EntityKind, pos: Vec2, speed: f32, spin: f32) -> Self {
        let spec = kind.spec();
        Self {
            kind,
            pos,
            size: spec.size,
            speed,
            points: spec.points,
            harmful: spec.harmful,
            rotation: 0.0,
            spin,
        }
    }

    /// Fully below the visible area
    pub fn is_off_surface(&self) -> bool {
        self.pos.y > SURFACE_HEIGHT + self.size
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per reference frame
    pub vel: Vec2,
    pub color: [f32; 4],
    pub size: f32,
    /// Remaining lifetime
    pub life_ms: f32,
    pub max_life_ms: f32,
}

impl Particle {
    /// Remaining lifetime in 0..=1, used as alpha when drawing
    pub fn life_fraction(&self) -> f32 {
        if self.max_life_ms <= 0.0 {
            0.0
        } else {
            (self.life_ms / self.max_life_ms).clamp(0.0, 1.0)
        }
    }
}

/// Final numbers captured at the moment of GameOver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u64,
    /// Whole seconds survived
    pub survival_secs: u64,
    pub level: u32,
}

/// Things that happened during a tick, for the driver to log or react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started,
    Restarted,
    Spawned(EntityKind),
    Collected { kind: EntityKind, points: u64 },
    Hit(EntityKind),
    DifficultyUp { level: u32 },
    GameOver(SessionSummary),
}

/// Mixed into the session seed for the particle RNG
const FX_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay randomness: spawn rolls, categories, columns, speeds
    pub rng: Pcg32,
    /// Cosmetic randomness for particles, kept apart so effect settings never
    /// shift the gameplay stream
    pub fx_rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Playing time this round
    pub elapsed_ms: f64,
    pub difficulty: Difficulty,
    pub player: Player,
    pub entities: Pool<Entity>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Pool<Particle>,
    /// Set on entering GameOver, cleared on restart
    pub summary: Option<SessionSummary>,
    /// Skip the cosmetic difficulty-up effect
    pub reduced_motion: bool,
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning, max_particles: usize) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            fx_rng: Pcg32::seed_from_u64(seed ^ FX_SEED_SALT),
            difficulty: Difficulty::new(&tuning),
            tuning,
            phase: GamePhase::Start,
            score: 0,
            elapsed_ms: 0.0,
            player: Player::default(),
            entities: Pool::with_capacity(MAX_ENTITIES),
            particles: Pool::with_capacity(max_particles),
            summary: None,
            reduced_motion: false,
        }
    }

    /// Whole seconds of Playing time
    pub fn survival_secs(&self) -> u64 {
        (self.elapsed_ms / 1000.0).floor() as u64
    }

    /// Start -> Playing
    pub fn start(&mut self) -> Result<(), TransitionError> {
        self.transition(GamePhase::Playing, GamePhase::Start)?;
        self.reset();
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// GameOver -> Playing, clearing the previous round
    pub fn restart(&mut self) -> Result<(), TransitionError> {
        self.transition(GamePhase::Playing, GamePhase::GameOver)?;
        self.reset();
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Playing -> GameOver, freezing score and time
    pub fn end_round(&mut self) -> Result<SessionSummary, TransitionError> {
        self.transition(GamePhase::GameOver, GamePhase::Playing)?;
        let summary = SessionSummary {
            score: self.score,
            survival_secs: self.survival_secs(),
            level: self.difficulty.level,
        };
        self.summary = Some(summary);
        self.phase = GamePhase::GameOver;
        Ok(summary)
    }

    fn transition(&self, to: GamePhase, required: GamePhase) -> Result<(), TransitionError> {
        if self.phase == required {
            Ok(())
        } else {
            Err(TransitionError {
                from: self.phase,
                to,
            })
        }
    }

    /// Return every per-round value to its initial state
    fn reset(&mut self) {
        self.score = 0;
        self.elapsed_ms = 0.0;
        self.difficulty = Difficulty::new(&self.tuning);
        self.player.recenter();
        self.entities.release_all();
        self.particles.release_all();
        self.summary = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(7, Tuning::default(), 64)
    }

    #[test]
    fn test_initial_phase_is_start() {
        let s = state();
        assert_eq!(s.phase, GamePhase::Start);
        assert_eq!(s.score, 0);
        assert_eq!(s.player.pos.x, SURFACE_WIDTH / 2.0);
    }

    #[test]
    fn test_legal_transitions() {
        let mut s = state();
        s.start().unwrap();
        assert_eq!(s.phase, GamePhase::Playing);
        s.end_round().unwrap();
        assert_eq!(s.phase, GamePhase::GameOver);
        s.restart().unwrap();
        assert_eq!(s.phase, GamePhase::Playing);
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        let mut s = state();
        assert_eq!(
            s.restart(),
            Err(TransitionError {
                from: GamePhase::Start,
                to: GamePhase::Playing
            })
        );
        assert!(s.end_round().is_err());

        s.start().unwrap();
        assert!(s.start().is_err());
        assert!(s.restart().is_err());

        s.end_round().unwrap();
        assert!(s.start().is_err());
        assert!(s.end_round().is_err());
        assert_eq!(s.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_end_round_captures_summary() {
        let mut s = state();
        s.start().unwrap();
        s.score = 150;
        s.elapsed_ms = 12_999.0;
        s.difficulty.level = 1;
        let summary = s.end_round().unwrap();
        assert_eq!(
            summary,
            SessionSummary {
                score: 150,
                survival_secs: 12,
                level: 1
            }
        );
        assert_eq!(s.summary, Some(summary));
    }

    #[test]
    fn test_player_clamped_to_surface() {
        let mut p = Player::default();
        p.move_toward(-500.0, 1.0, FRAME_MS);
        assert_eq!(p.pos.x, PLAYER_SIZE / 2.0);
        p.move_toward(5000.0, 1.0, FRAME_MS);
        assert_eq!(p.pos.x, SURFACE_WIDTH - PLAYER_SIZE / 2.0);
    }

    #[test]
    fn test_player_eases_toward_target() {
        let mut p = Player::default();
        let start = p.pos.x;
        p.move_toward(start + 100.0, 0.2, FRAME_MS);
        assert!((p.pos.x - (start + 20.0)).abs() < 1e-3);
    }

    #[test]
    fn test_kind_table() {
        assert!(!EntityKind::Star.is_harmful());
        assert!(EntityKind::Meteor.is_harmful());
        assert!(EntityKind::Bomb.is_harmful());
        assert_eq!(EntityKind::Star.spec().points, 50);
    }

    #[test]
    fn test_particle_life_fraction() {
        let p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            color: [1.0; 4],
            size: 2.0,
            life_ms: 250.0,
            max_life_ms: 1000.0,
        };
        assert!((p.life_fraction() - 0.25).abs() < 1e-6);
    }
}
