//! Game state and core simulation types
//!
//! The whole world is one owned state struct: player and treasure
//! singletons, the live hazard set, score, tick counter, and the seeded
//! RNG. Side effects (sound cues, high-score persistence) are pushed onto
//! an event list that the clock drains after every tick.

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::hazard::Hazard;
use crate::sim::player::Player;
use crate::sim::treasure::Treasure;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Game is paused; ticks are gated
    Paused,
    /// Run ended by a hazard collision. Terminal.
    Ended,
}

/// Sound cues the simulation can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Background music loop
    Background,
    /// Pause chime
    Pause,
    /// Game-over sting
    GameOver,
    /// Burst shockwave
    Burst,
    /// Treasure pickup
    Collect,
}

/// Effects emitted by a tick, drained by the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Play(SoundCue),
    Stop(SoundCue),
    /// A new high-water score to persist
    NewHighScore(u64),
}

/// Stable identity for the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityId {
    Player,
    Treasure,
    Hazard(u32),
}

/// Visual state flags, the CSS-class equivalent for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderFlags {
    pub charged: bool,
    pub super_charged: bool,
    pub boosting: bool,
    pub bursting: bool,
}

/// One renderable entity snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub id: EntityId,
    pub pos: Vec2,
    pub size: Vec2,
    pub flags: RenderFlags,
}

/// Session score plus the persisted high-water mark
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub value: u64,
    pub hi: u64,
}

impl Score {
    /// Add to the session score; emits a persist event on a new record.
    /// There is no decrease operation.
    pub fn increase(&mut self, amount: u64, events: &mut Vec<GameEvent>) {
        self.value += amount;
        if self.value > self.hi {
            self.hi = self.value;
            events.push(GameEvent::NewHighScore(self.hi));
        }
    }
}

/// Placement rejection-sampling gave up
///
/// Only reachable with a pathological configuration: the exclusion radius
/// must leave room inside the play area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementError {
    /// The entity does not fit in the play area at all
    AreaTooSmall { width: f32, height: f32 },
    /// No position cleared the exclusion radius within the attempt cap
    ExclusionUnsatisfiable { min_dist: f32, attempts: u32 },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::AreaTooSmall { width, height } => write!(
                f,
                "entity {width}x{height} does not fit the {SPACE_WIDTH}x{SPACE_HEIGHT} play area"
            ),
            PlacementError::ExclusionUnsatisfiable { min_dist, attempts } => write!(
                f,
                "no placement cleared the {min_dist} exclusion radius in {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Pick a uniform random top-left position inside the play area whose
/// center keeps at least `min_dist` from `anchor`.
///
/// Bounded retry instead of unbounded rejection sampling; exceeding the
/// cap is a configuration error, not bad luck.
pub fn place_away_from(
    rng: &mut Pcg32,
    size: Vec2,
    anchor: Vec2,
    min_dist: f32,
) -> Result<Vec2, PlacementError> {
    let max = Vec2::new(SPACE_WIDTH - size.x, SPACE_HEIGHT - size.y);
    if max.x <= 0.0 || max.y <= 0.0 {
        return Err(PlacementError::AreaTooSmall {
            width: size.x,
            height: size.y,
        });
    }

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let pos = Vec2::new(rng.random_range(0.0..max.x), rng.random_range(0.0..max.y));
        let center = pos + size * 0.5;
        if center.distance(anchor) >= min_dist {
            return Ok(pos);
        }
    }

    Err(PlacementError::ExclusionUnsatisfiable {
        min_dist,
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG, the only source of randomness
    pub rng: Pcg32,
    /// Ticks advanced so far
    pub current_tick: u64,
    /// Hazards spawned so far; doubles as the next hazard id
    pub enemy_count: u32,
    pub phase: GamePhase,
    pub player: Player,
    pub treasure: Treasure,
    /// Live hazards, ordered by id
    pub hazards: Vec<Hazard>,
    pub score: Score,
    /// Effects emitted this tick, drained by the clock
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh run: player centered, treasure placed clear of it.
    pub fn new(seed: u64) -> Result<Self, PlacementError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::new();
        let treasure = Treasure::place_initial(&mut rng, &player)?;

        Ok(Self {
            seed,
            rng,
            current_tick: 0,
            enemy_count: 0,
            phase: GamePhase::Running,
            player,
            treasure,
            hazards: Vec::new(),
            score: Score::default(),
            events: Vec::new(),
        })
    }

    /// Snapshot every visible entity for the renderer, in update order.
    pub fn sprites(&self) -> Vec<Sprite> {
        let mut out = Vec::with_capacity(2 + self.hazards.len());
        out.push(self.player.sprite());
        out.push(self.treasure.sprite());
        for hazard in &self.hazards {
            if !hazard.destroyed {
                out.push(hazard.sprite());
            }
        }
        out
    }
}
