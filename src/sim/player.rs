//! Player controller
//!
//! 8-way discrete movement with a charge/boost/burst state machine on top:
//! treasure pickups grant a charge, holding boost cashes it in for a
//! temporary speed multiplier, and cashing in a supercharge additionally
//! fires a burst that knocks back nearby hazards.

use glam::Vec2;

use crate::consts::*;
use crate::sim::geom::Rect;
use crate::sim::state::{EntityId, GameEvent, RenderFlags, SoundCue, Sprite};
use crate::sim::tick::TickInput;

/// The player's avatar
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// round(sqrt(speed^2 / 2)), so diagonals cover similar ground
    pub diagonal_speed: f32,
    /// A pickup is banked and can be spent on a boost
    pub charged: bool,
    /// A super pickup is banked; spending it also fires a burst
    pub super_charged: bool,
    /// Ticks of boost remaining
    pub boost_countdown: u32,
    /// Ticks of burst remaining; hazards in range are knocked back while > 0
    pub bursting: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Spawn centered in the play area.
    pub fn new() -> Self {
        let size = Vec2::splat(PLAYER_SIZE);
        Self {
            pos: Vec2::new(
                (SPACE_WIDTH - size.x) / 2.0,
                (SPACE_HEIGHT - size.y) / 2.0,
            ),
            size,
            speed: PLAYER_SPEED,
            diagonal_speed: diagonal_speed(PLAYER_SPEED),
            charged: false,
            super_charged: false,
            boost_countdown: 0,
            bursting: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Bank a pickup. A supercharge supersedes a plain charge.
    pub fn charge(&mut self, super_charge: bool) {
        if super_charge {
            self.super_charged = true;
        } else {
            self.charged = true;
        }
    }

    /// A banked charge is ready to spend
    pub fn can_boost(&self) -> bool {
        self.boost_countdown == 0 && (self.charged || self.super_charged)
    }

    /// Advance one tick: burst decay, boost consumption, movement, wrap.
    pub fn step(&mut self, input: &TickInput, events: &mut Vec<GameEvent>) {
        if self.bursting > 0 {
            self.bursting -= 1;
        }

        if input.boost && self.can_boost() {
            self.boost_countdown = BOOST_DURATION_TICKS;
            if self.super_charged {
                self.bursting = BURST_DURATION_TICKS;
                self.super_charged = false;
                events.push(GameEvent::Play(SoundCue::Burst));
            }
            self.charged = false;
        }

        self.apply_movement(input);
        self.wrap();

        if self.boost_countdown > 0 {
            self.boost_countdown -= 1;
        }
    }

    /// 8-way movement. Only the eight listed combinations move; anything
    /// else (no keys, opposing keys) is a no-op.
    fn apply_movement(&mut self, input: &TickInput) {
        let mult = if self.boost_countdown > 0 {
            BOOST_MULTIPLIER
        } else {
            1.0
        };
        let ortho = self.speed * mult;
        let diag = self.diagonal_speed * mult;

        let step = match (input.up, input.down, input.left, input.right) {
            (true, false, false, false) => Vec2::new(0.0, -ortho),
            (false, true, false, false) => Vec2::new(0.0, ortho),
            (false, false, true, false) => Vec2::new(-ortho, 0.0),
            (false, false, false, true) => Vec2::new(ortho, 0.0),
            (true, false, true, false) => Vec2::new(-diag, -diag),
            (true, false, false, true) => Vec2::new(diag, -diag),
            (false, true, true, false) => Vec2::new(-diag, diag),
            (false, true, false, true) => Vec2::new(diag, diag),
            _ => Vec2::ZERO,
        };
        self.pos += step;
    }

    /// Toroidal wrap: past a bound, teleport to the opposite edge.
    fn wrap(&mut self) {
        if self.pos.x > SPACE_WIDTH {
            self.pos.x = -self.size.x;
        } else if self.pos.x < -self.size.x {
            self.pos.x = SPACE_WIDTH;
        }
        if self.pos.y > SPACE_HEIGHT {
            self.pos.y = -self.size.y;
        } else if self.pos.y < -self.size.y {
            self.pos.y = SPACE_HEIGHT;
        }
    }

    pub fn sprite(&self) -> Sprite {
        Sprite {
            id: EntityId::Player,
            pos: self.pos,
            size: self.size,
            flags: RenderFlags {
                charged: self.charged,
                super_charged: self.super_charged,
                boosting: self.boost_countdown > 0,
                bursting: self.bursting > 0,
            },
        }
    }
}

/// Diagonal step that keeps total distance close to the orthogonal step
fn diagonal_speed(speed: f32) -> f32 {
    (speed * speed / 2.0).sqrt().round()
}
