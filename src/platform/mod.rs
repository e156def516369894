//! Platform collaborators
//!
//! The simulation core never touches I/O; everything it needs from the
//! outside world comes through these traits:
//! - `InputSource`: pressed-key snapshot per tick
//! - `Renderer`: per-entity draw call, must never fail a tick
//! - `AudioSink`: fire-and-forget sound cues
//! - `ScoreStore`: persisted high score, absent means zero

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sim::{SoundCue, Sprite, TickInput};

/// Source of the per-tick input snapshot
pub trait InputSource {
    fn snapshot(&mut self) -> TickInput;
}

/// Rendering collaborator. Called once per entity per tick; visual errors
/// must not propagate into the simulation.
pub trait Renderer {
    fn draw(&mut self, sprite: &Sprite);
}

/// Audio collaborator. Fire-and-forget, no acknowledgment.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
    fn stop(&mut self, cue: SoundCue);
}

/// Persisted high score
pub trait ScoreStore {
    /// Load the stored high score; absence is not an error and yields 0.
    fn load(&mut self) -> u64;
    /// Persist a new record.
    fn save(&mut self, hi: u64);
}

/// Keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Boost,
}

/// Externally mutated pressed-key map, read at tick time
///
/// Direction and boost keys are level-triggered; the pause toggle is
/// edge-triggered and delivered on exactly one snapshot per press. Key
/// transitions between snapshots are simply not observed.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: [bool; 5],
    pause_queued: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pressed(&mut self, key: Key, down: bool) {
        self.pressed[key as usize] = down;
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key as usize]
    }

    /// Queue a pause toggle for the next snapshot.
    pub fn press_pause(&mut self) {
        self.pause_queued = true;
    }
}

impl InputSource for KeyboardState {
    fn snapshot(&mut self) -> TickInput {
        TickInput {
            up: self.is_pressed(Key::Up),
            down: self.is_pressed(Key::Down),
            left: self.is_pressed(Key::Left),
            right: self.is_pressed(Key::Right),
            boost: self.is_pressed(Key::Boost),
            pause: std::mem::take(&mut self.pause_queued),
            demo: false,
        }
    }
}

/// Input source that hands the tick over to the demo autopilot
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoInput;

impl InputSource for DemoInput {
    fn snapshot(&mut self) -> TickInput {
        TickInput {
            demo: true,
            ..Default::default()
        }
    }
}

/// Renderer that discards everything (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _sprite: &Sprite) {}
}

/// Renderer that traces draw calls through the logger
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn draw(&mut self, sprite: &Sprite) {
        log::trace!(
            "draw {:?} at ({:.0}, {:.0}) {:?}",
            sprite.id,
            sprite.pos.x,
            sprite.pos.y,
            sprite.flags
        );
    }
}

/// Audio sink that logs cues instead of playing them
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("audio play {cue:?}");
    }

    fn stop(&mut self, cue: SoundCue) {
        log::debug!("audio stop {cue:?}");
    }
}

/// In-memory score store for tests and throwaway runs
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryScoreStore {
    pub hi: u64,
    pub saves: u32,
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> u64 {
        self.hi
    }

    fn save(&mut self, hi: u64) {
        self.hi = hi;
        self.saves += 1;
    }
}

/// Versioned envelope for the persisted high score
#[derive(Debug, Serialize, Deserialize)]
struct SavedScore {
    hi: u64,
}

/// JSON-file-backed score store
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<SavedScore>(&json) {
                Ok(saved) => {
                    log::info!("Loaded high score {}", saved.hi);
                    saved.hi
                }
                Err(err) => {
                    log::warn!("Corrupt high score file, starting fresh: {err}");
                    0
                }
            },
            Err(_) => {
                log::info!("No high score found, starting fresh");
                0
            }
        }
    }

    fn save(&mut self, hi: u64) {
        match serde_json::to_string(&SavedScore { hi }) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::warn!("Failed to save high score: {err}");
                }
            }
            Err(err) => log::warn!("Failed to encode high score: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_snapshot_levels() {
        let mut keys = KeyboardState::new();
        keys.set_pressed(Key::Right, true);
        keys.set_pressed(Key::Boost, true);

        let snap = keys.snapshot();
        assert!(snap.right && snap.boost);
        assert!(!snap.left && !snap.up && !snap.down);
        assert!(!snap.pause);

        // Held keys stay pressed across snapshots
        assert!(keys.snapshot().right);

        keys.set_pressed(Key::Right, false);
        assert!(!keys.snapshot().right);
    }

    #[test]
    fn test_pause_is_edge_triggered() {
        let mut keys = KeyboardState::new();
        keys.press_pause();

        assert!(keys.snapshot().pause);
        assert!(!keys.snapshot().pause);
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryScoreStore::default();
        assert_eq!(store.load(), 0);

        store.save(40);
        store.save(60);
        assert_eq!(store.load(), 60);
        assert_eq!(store.saves, 2);
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "treasure_dash_score_{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let mut store = FileScoreStore::new(&path);
        assert_eq!(store.load(), 0);

        store.save(120);
        assert_eq!(store.load(), 120);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_tolerates_garbage() {
        let path = std::env::temp_dir().join(format!(
            "treasure_dash_garbage_{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json").unwrap();

        let mut store = FileScoreStore::new(&path);
        assert_eq!(store.load(), 0);

        let _ = fs::remove_file(&path);
    }
}
