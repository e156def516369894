//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable update order (player, treasure, hazards by id)
//! - No rendering or platform dependencies; effects surface as events

pub mod geom;
pub mod hazard;
pub mod player;
pub mod state;
pub mod tick;
pub mod treasure;

pub use geom::{Rect, center_distance, overlaps};
pub use hazard::{Hazard, HazardConfig};
pub use player::Player;
pub use state::{
    EntityId, GameEvent, GamePhase, GameState, PlacementError, RenderFlags, Score, SoundCue,
    Sprite,
};
pub use tick::{TickInput, tick};
pub use treasure::Treasure;
