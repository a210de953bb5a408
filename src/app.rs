//! Frame driver
//!
//! Owns one session and runs it once per display refresh: sample input, run the
//! fixed-step ticks the elapsed time calls for, then build the render frame.
//! The browser loop and the headless runner both drive the game through this.

use crate::best_score::BestScore;
use crate::consts::SIM_DT_MS;
use crate::platform::{FrameClock, InputSampler};
use crate::renderer::{Frame, build_frame};
use crate::settings::{QualityPreset, Settings};
use crate::sim::{GameEvent, GamePhase, GameState, Pool, tick};
use crate::tuning::Tuning;

pub struct App {
    pub state: GameState,
    pub settings: Settings,
    pub best: BestScore,
    pub input: InputSampler,
    clock: FrameClock,
}

impl App {
    pub fn new(seed: u64, tuning: Tuning, settings: Settings, best: BestScore) -> Self {
        let mut state = GameState::new(seed, tuning, settings.max_particles());
        state.reduced_motion = settings.reduced_motion;
        Self {
            state,
            settings,
            best,
            input: InputSampler::new(),
            clock: FrameClock::new(),
        }
    }

    /// Switch the quality preset and persist the choice.
    ///
    /// Live particles are dropped when the pool is resized; they carry no
    /// gameplay state.
    pub fn set_quality(&mut self, quality: QualityPreset) {
        self.settings.quality = quality;
        self.state.particles = Pool::with_capacity(self.settings.max_particles());
        self.settings.save();
        log::info!(
            "Quality set to {} ({} particles, {} background stars)",
            quality.as_str(),
            self.settings.max_particles(),
            self.settings.star_count()
        );
    }

    /// Step to the next quality preset
    pub fn cycle_quality(&mut self) -> QualityPreset {
        let next = self.settings.quality.next();
        self.set_quality(next);
        next
    }

    /// The single "action" control: start from the title, restart after game over
    pub fn press_action(&mut self) {
        match self.state.phase {
            GamePhase::Start => self.input.press_start(),
            GamePhase::GameOver => self.input.press_restart(),
            GamePhase::Playing => {}
        }
    }

    /// Run one display refresh at `now_ms` and return what to draw
    pub fn frame(&mut self, now_ms: f64) -> Frame {
        let steps = self.clock.advance(now_ms);
        for _ in 0..steps {
            let input = self.input.sample();
            let events = tick(&mut self.state, &input, SIM_DT_MS);
            self.handle_events(&events);
        }
        build_frame(&self.state, &self.settings, self.best.score, now_ms)
    }

    fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Started => log::info!("Round started (seed {})", self.state.seed),
                GameEvent::Restarted => log::info!("Round restarted"),
                GameEvent::DifficultyUp { level } => log::info!(
                    "Difficulty {} (fall speed {:.1}, spawn chance {:.3})",
                    level,
                    self.state.difficulty.fall_speed,
                    self.state.difficulty.spawn_chance
                ),
                GameEvent::Hit(kind) => log::info!("Hit by {:?}", kind),
                GameEvent::GameOver(summary) => {
                    log::info!(
                        "Game over: score {}, survived {}s, level {}",
                        summary.score,
                        summary.survival_secs,
                        summary.level + 1
                    );
                    if self.best.record(summary.score) {
                        log::info!("New best score: {}", summary.score);
                        self.best.save();
                    }
                }
                GameEvent::Spawned(_) | GameEvent::Collected { .. } => {}
            }
        }
    }
}
