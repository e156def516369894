//! Simulation clock
//!
//! Owns the game state and its collaborators and drives the fixed-rate
//! loop: poll input, tick, flush effects, render, re-arm. The next tick is
//! only ever scheduled after the current one completes, so ticks never
//! overlap; the schedule is interval-after-completion, not wall-clock
//! anchored, and drifts under load exactly like the original.

use std::thread;
use std::time::Duration;

use crate::consts::TICK_INTERVAL_MS;
use crate::platform::{AudioSink, InputSource, Renderer, ScoreStore};
use crate::sim::{self, GameEvent, GamePhase, GameState, PlacementError, SoundCue};

/// Fixed-interval tick driver
pub struct Clock<I, R, A, S> {
    state: GameState,
    input: I,
    renderer: R,
    audio: A,
    store: S,
    initialized: bool,
}

impl<I, R, A, S> Clock<I, R, A, S>
where
    I: InputSource,
    R: Renderer,
    A: AudioSink,
    S: ScoreStore,
{
    pub fn new(
        seed: u64,
        input: I,
        renderer: R,
        audio: A,
        store: S,
    ) -> Result<Self, PlacementError> {
        Ok(Self {
            state: GameState::new(seed)?,
            input,
            renderer,
            audio,
            store,
            initialized: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// One-time setup: load the persisted high score and start the
    /// background loop. Idempotent; repeated calls are no-ops.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.state.score.hi = self.store.load();
        self.audio.play(SoundCue::Background);
        log::info!("run started, seed {}", self.state.seed);
        self.initialized = true;
    }

    /// Advance one tick and flush its effects. Returns false once the run
    /// has ended.
    pub fn step(&mut self) -> Result<bool, PlacementError> {
        self.init();

        let input = self.input.snapshot();
        sim::tick(&mut self.state, &input)?;

        for event in std::mem::take(&mut self.state.events) {
            match event {
                GameEvent::Play(cue) => self.audio.play(cue),
                GameEvent::Stop(cue) => self.audio.stop(cue),
                GameEvent::NewHighScore(hi) => self.store.save(hi),
            }
        }

        for sprite in self.state.sprites() {
            self.renderer.draw(&sprite);
        }

        Ok(self.state.phase != GamePhase::Ended)
    }

    /// Run until game over, re-arming after each completed tick.
    pub fn run(&mut self) -> Result<(), PlacementError> {
        self.init();
        while self.step()? {
            thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
        }
        log::info!(
            "game over at tick {} with score {} (best {})",
            self.state.current_tick,
            self.state.score.value,
            self.state.score.hi
        );
        Ok(())
    }
}
