//! Fixed timestep simulation tick
//!
//! One call advances the whole world by a single step. Update order is an
//! explicit contract: player first (so hazards observe this tick's
//! bursting flag), then treasure, then hazards by id, then the spawner.

use crate::consts::*;
use crate::sim::hazard::Hazard;
use crate::sim::state::{GameEvent, GamePhase, GameState, PlacementError, SoundCue};

/// Input snapshot for a single tick
///
/// Directional and boost flags are level-triggered (pressed right now);
/// `pause` is edge-triggered and must fire once per physical press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
    /// Pause toggle
    pub pause: bool,
    /// Demo autopilot: chase the treasure, boost when charged
    pub demo: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<(), PlacementError> {
    // Pause toggle is suppressed once the run has ended
    if input.pause && state.phase != GamePhase::Ended {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                state.events.push(GameEvent::Stop(SoundCue::Background));
                state.events.push(GameEvent::Play(SoundCue::Pause));
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                state.events.push(GameEvent::Play(SoundCue::Background));
            }
            GamePhase::Ended => {}
        }
    }

    // Don't tick if paused or ended
    if state.phase != GamePhase::Running {
        return Ok(());
    }

    let mut input = input.clone();
    if input.demo {
        autopilot(state, &mut input);
    }
    let input = &input;

    state.current_tick += 1;

    // Fixed broadcast order: player, treasure, hazards by id
    state.player.step(input, &mut state.events);
    state.treasure.step(
        &mut state.player,
        &mut state.score,
        &mut state.rng,
        &mut state.events,
    )?;

    let mut ended = false;
    for hazard in &mut state.hazards {
        if hazard.step(&state.player) {
            ended = true;
        }
    }
    state.hazards.retain(|hazard| !hazard.destroyed);

    if ended {
        state.phase = GamePhase::Ended;
        state.events.push(GameEvent::Stop(SoundCue::Background));
        state.events.push(GameEvent::Play(SoundCue::GameOver));
        return Ok(());
    }

    maybe_spawn(state)
}

/// Spawn at most one hazard per tick, keeping the spawned count locked to
/// `floor(current_tick / HAZARD_SPACING_TICKS)`.
fn maybe_spawn(state: &mut GameState) -> Result<(), PlacementError> {
    if u64::from(state.enemy_count) < state.current_tick / HAZARD_SPACING_TICKS {
        let hazard = Hazard::spawn(state.enemy_count, &mut state.rng, &state.player)?;
        state.hazards.push(hazard);
        state.enemy_count += 1;
    }
    Ok(())
}

/// Demo mode: steer toward the treasure and spend charges immediately
fn autopilot(state: &GameState, input: &mut TickInput) {
    let player = state.player.center();
    let target = state.treasure.rect().center();
    let deadzone = state.player.speed;

    input.left = target.x < player.x - deadzone;
    input.right = target.x > player.x + deadzone;
    input.up = target.y < player.y - deadzone;
    input.down = target.y > player.y + deadzone;
    input.boost = state.player.can_boost();
}
