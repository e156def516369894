//! Treasure Dash - a top-down collect-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `platform`: Collaborator traits (input, rendering, audio, score store)
//! - `clock`: Fixed-interval tick driver wiring the sim to its collaborators

pub mod clock;
pub mod platform;
pub mod sim;

pub use clock::Clock;
pub use sim::{GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const SPACE_WIDTH: f32 = 640.0;
    pub const SPACE_HEIGHT: f32 = 480.0;

    /// Nominal tick interval (~30 ticks per second)
    pub const TICK_INTERVAL_MS: u64 = 33;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 10.0;
    /// Movement multiplier while a boost is active
    pub const BOOST_MULTIPLIER: f32 = 2.0;
    /// Boost length in ticks
    pub const BOOST_DURATION_TICKS: u32 = 15;
    /// Radius of the supercharged burst shockwave
    pub const BURST_RADIUS: f32 = 120.0;
    /// Burst length in ticks
    pub const BURST_DURATION_TICKS: u32 = 3;

    /// Treasure defaults
    pub const TREASURE_SIZE: f32 = 30.0;
    /// Score awarded per pickup
    pub const TREASURE_REWARD: u64 = 10;
    /// Pickups between supercharges
    pub const SUPER_INTERVAL: u32 = 15;
    /// Minimum center distance from the player at placement time
    pub const TREASURE_MIN_PLAYER_DIST: f32 = 150.0;

    /// Hazard defaults
    pub const HAZARD_SIZE: f32 = 60.0;
    pub const HAZARD_SPEED: f32 = 5.0;
    /// round(sqrt(HAZARD_SPEED^2 / 2))
    pub const HAZARD_DIAGONAL_SPEED: f32 = 4.0;
    /// Ticks between hazard spawns
    pub const HAZARD_SPACING_TICKS: u64 = 150;
    /// Hazards with id above this get their speed scaled up
    pub const HAZARD_SPEEDUP_AFTER: u32 = 10;
    pub const HAZARD_SPEEDUP_FACTOR: f32 = 1.3;
    /// Minimum center distance from the player at placement time
    pub const HAZARD_MIN_PLAYER_DIST: f32 = 180.0;
    /// Ticks between knockback and removal
    pub const HAZARD_DESTROY_DELAY_TICKS: i32 = 10;

    /// Rejection-sampling cap for exclusion-zone placement
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;
    /// Parking spot for destroyed hazards
    pub const OFFSCREEN: f32 = -1000.0;
}
