//! Hazard population
//!
//! Hazards spawn on a fixed cadence, bounce around the arena, and end the
//! run on contact. A player burst knocks nearby hazards back along the
//! radial away from the player; a knocked-back hazard flies straight and
//! is removed a fixed number of ticks later.

use glam::Vec2;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::geom::{self, Rect};
use crate::sim::player::Player;
use crate::sim::state::{EntityId, PlacementError, RenderFlags, Sprite, place_away_from};

/// Construction parameters for a hazard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardConfig {
    pub width: f32,
    pub height: f32,
    pub x_speed: f32,
    pub y_speed: f32,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            width: HAZARD_SIZE,
            height: HAZARD_SIZE,
            x_speed: 0.0,
            y_speed: 0.0,
        }
    }
}

/// A bouncing hazard
#[derive(Debug, Clone)]
pub struct Hazard {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Cleared by a burst knockback; a non-alive hazard no longer bounces
    /// or threatens the player
    pub alive: bool,
    /// Removed from the simulation at the end of the tick
    pub destroyed: bool,
    /// Ticks until a knocked-back hazard is destroyed
    pub destroy_countdown: Option<i32>,
}

impl Hazard {
    pub fn new(id: u32, pos: Vec2, config: HazardConfig) -> Self {
        Self {
            id,
            pos,
            size: Vec2::new(config.width, config.height),
            vel: Vec2::new(config.x_speed, config.y_speed),
            alive: true,
            destroyed: false,
            destroy_countdown: None,
        }
    }

    /// Spawn hazard `id` with its cadence-derived velocity profile, placed
    /// clear of the player.
    pub fn spawn(id: u32, rng: &mut Pcg32, player: &Player) -> Result<Self, PlacementError> {
        let config = velocity_profile(id);
        let pos = place_away_from(
            rng,
            Vec2::new(config.width, config.height),
            player.center(),
            HAZARD_MIN_PLAYER_DIST,
        )?;
        Ok(Self::new(id, pos, config))
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Advance one tick. Returns true when an alive hazard fully overlaps
    /// the player (game over). Skipped entirely once destroyed.
    pub fn step(&mut self, player: &Player) -> bool {
        if self.destroyed {
            return false;
        }

        // Knockback check reads the bursting flag the player set earlier
        // in the same broadcast
        if player.bursting > 0 && self.alive {
            let dist = geom::center_distance(player.rect(), self.rect());
            if dist < BURST_RADIUS + self.size.x / 2.0 {
                self.knock_back(player.center());
            }
        }

        if self.alive {
            let max = Vec2::new(SPACE_WIDTH - self.size.x, SPACE_HEIGHT - self.size.y);
            if self.pos.x >= max.x || self.pos.x < 0.0 {
                self.vel.x = -self.vel.x;
            }
            if self.pos.y >= max.y || self.pos.y < 0.0 {
                self.vel.y = -self.vel.y;
            }
        }
        self.pos += self.vel;

        let collided = self.alive && geom::overlaps(self.rect(), player.rect());

        if let Some(countdown) = self.destroy_countdown.as_mut() {
            if *countdown <= 0 {
                self.destroyed = true;
                self.pos = Vec2::splat(OFFSCREEN);
            } else {
                *countdown -= 1;
            }
        }

        collided
    }

    /// Replace velocity with the outward radial from the player and start
    /// the destroy countdown.
    fn knock_back(&mut self, player_center: Vec2) {
        let delta = self.center() - player_center;
        let half_radius = BURST_RADIUS / 2.0;

        // atan(dy/dx) is undefined for a vertically aligned hazard; fall
        // back to a purely vertical knockback
        self.vel = if delta.x == 0.0 {
            Vec2::new(0.0, if delta.y < 0.0 { -half_radius } else { half_radius })
        } else {
            let theta = (delta.y / delta.x).atan();
            let mirror = delta.x.signum();
            Vec2::new(
                theta.cos() * half_radius * mirror,
                theta.sin() * half_radius * mirror,
            )
        };

        self.alive = false;
        self.destroy_countdown = Some(HAZARD_DESTROY_DELAY_TICKS);
    }

    pub fn sprite(&self) -> Sprite {
        Sprite {
            id: EntityId::Hazard(self.id),
            pos: self.pos,
            size: self.size,
            flags: RenderFlags::default(),
        }
    }
}

/// Velocity profile for hazard `id`: every third hazard moves diagonally,
/// the rest alternate horizontal (odd) and vertical (even). Later hazards
/// get a flat speed bump.
pub fn velocity_profile(id: u32) -> HazardConfig {
    let (mut x_speed, mut y_speed) = if id % 3 == 0 {
        (HAZARD_DIAGONAL_SPEED, HAZARD_DIAGONAL_SPEED)
    } else if id % 2 == 1 {
        (HAZARD_SPEED, 0.0)
    } else {
        (0.0, HAZARD_SPEED)
    };

    if id > HAZARD_SPEEDUP_AFTER {
        x_speed = (x_speed * HAZARD_SPEEDUP_FACTOR).floor();
        y_speed = (y_speed * HAZARD_SPEEDUP_FACTOR).floor();
    }

    HazardConfig {
        x_speed,
        y_speed,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hazard_at(x: f32, y: f32, vel: Vec2) -> Hazard {
        Hazard::new(
            0,
            Vec2::new(x, y),
            HazardConfig {
                x_speed: vel.x,
                y_speed: vel.y,
                ..Default::default()
            },
        )
    }

    fn player_far_away() -> Player {
        let mut player = Player::new();
        player.pos = Vec2::new(500.0, 400.0);
        player
    }

    #[test]
    fn test_velocity_profiles_by_id() {
        assert_eq!(velocity_profile(0).x_speed, HAZARD_DIAGONAL_SPEED);
        assert_eq!(velocity_profile(0).y_speed, HAZARD_DIAGONAL_SPEED);
        // Odd, not divisible by three: horizontal
        assert_eq!(velocity_profile(1).x_speed, HAZARD_SPEED);
        assert_eq!(velocity_profile(1).y_speed, 0.0);
        // Even, not divisible by three: vertical
        assert_eq!(velocity_profile(2).x_speed, 0.0);
        assert_eq!(velocity_profile(2).y_speed, HAZARD_SPEED);
        assert_eq!(velocity_profile(3).x_speed, HAZARD_DIAGONAL_SPEED);
    }

    #[test]
    fn test_velocity_scales_after_threshold() {
        // id 10 is still at base speed, 11 and up are scaled and floored
        assert_eq!(velocity_profile(10).y_speed, HAZARD_SPEED);
        assert_eq!(velocity_profile(11).x_speed, (HAZARD_SPEED * 1.3).floor());
        assert_eq!(
            velocity_profile(12).x_speed,
            (HAZARD_DIAGONAL_SPEED * 1.3).floor()
        );
    }

    #[test]
    fn test_default_config() {
        let config = HazardConfig::default();
        assert_eq!(config.width, 60.0);
        assert_eq!(config.height, 60.0);
        assert_eq!(config.x_speed, 0.0);
        assert_eq!(config.y_speed, 0.0);
    }

    #[test]
    fn test_bounce_flips_sign_once() {
        let player = player_far_away();
        let mut hazard = hazard_at(-1.0, 200.0, Vec2::new(-HAZARD_SPEED, 0.0));

        hazard.step(&player);
        assert_eq!(hazard.vel.x, HAZARD_SPEED);

        // Back in bounds, no further flips
        for _ in 0..10 {
            hazard.step(&player);
            assert_eq!(hazard.vel.x, HAZARD_SPEED);
        }
    }

    #[test]
    fn test_bounce_right_edge() {
        let player = player_far_away();
        let max_x = SPACE_WIDTH - HAZARD_SIZE;
        let mut hazard = hazard_at(max_x, 100.0, Vec2::new(HAZARD_SPEED, 0.0));

        hazard.step(&player);
        assert_eq!(hazard.vel.x, -HAZARD_SPEED);
    }

    #[test]
    fn test_knockback_outward_velocity() {
        let mut player = Player::new();
        player.pos = Vec2::new(85.0, 85.0); // center (100, 100)
        player.bursting = BURST_DURATION_TICKS;

        // Hazard center at (160, 100): horizontally right of the player
        let mut hazard = hazard_at(130.0, 70.0, Vec2::new(0.0, HAZARD_SPEED));
        hazard.step(&player);

        assert!(!hazard.alive);
        assert_eq!(hazard.destroy_countdown, Some(HAZARD_DESTROY_DELAY_TICKS - 1));
        assert_eq!(hazard.vel, Vec2::new(BURST_RADIUS / 2.0, 0.0));
    }

    #[test]
    fn test_knockback_mirrors_left_side() {
        let mut player = Player::new();
        player.pos = Vec2::new(285.0, 85.0); // center (300, 100)
        player.bursting = 1;

        // Hazard center at (240, 100): left of the player
        let mut hazard = hazard_at(210.0, 70.0, Vec2::ZERO);
        hazard.step(&player);

        assert!(!hazard.alive);
        assert!(hazard.vel.x < 0.0);
        assert_eq!(hazard.vel.y, 0.0);
    }

    #[test]
    fn test_knockback_vertical_alignment_fallback() {
        let mut player = Player::new();
        player.pos = Vec2::new(85.0, 285.0); // center (100, 300)
        player.bursting = 1;

        // Hazard center at (100, 220): exactly above the player
        let mut hazard = hazard_at(70.0, 190.0, Vec2::ZERO);
        hazard.step(&player);

        assert!(!hazard.alive);
        assert_eq!(hazard.vel, Vec2::new(0.0, -BURST_RADIUS / 2.0));
    }

    #[test]
    fn test_out_of_range_hazard_survives_burst() {
        let mut player = Player::new();
        player.bursting = 1;

        let far = Vec2::new(
            player.center().x + BURST_RADIUS + HAZARD_SIZE,
            player.center().y,
        );
        let mut hazard = hazard_at(far.x, far.y, Vec2::ZERO);
        hazard.step(&player);
        assert!(hazard.alive);
    }

    #[test]
    fn test_destroyed_exactly_ten_ticks_after_knockback() {
        let mut player = Player::new();
        player.bursting = 1;

        // In burst range, knocked back on this tick
        let mut hazard = hazard_at(player.pos.x + 60.0, player.pos.y, Vec2::ZERO);
        hazard.step(&player);
        assert!(!hazard.alive);
        assert!(!hazard.destroyed);

        player.bursting = 0;
        for tick in 1..HAZARD_DESTROY_DELAY_TICKS {
            hazard.step(&player);
            assert!(!hazard.destroyed, "destroyed early at tick {tick}");
        }
        hazard.step(&player);
        assert!(hazard.destroyed);
        assert_eq!(hazard.pos, Vec2::splat(OFFSCREEN));
    }

    #[test]
    fn test_knocked_back_hazard_does_not_bounce_or_kill() {
        let mut player = Player::new();
        player.bursting = 1;

        let mut hazard = hazard_at(player.pos.x + 60.0, player.pos.y, Vec2::ZERO);
        hazard.step(&player);
        assert!(!hazard.alive);
        let vel = hazard.vel;

        // Park it on top of the player, outside bounds: no bounce, no kill
        player.bursting = 0;
        hazard.pos = Vec2::new(-5.0, player.pos.y);
        let collided = hazard.step(&player);
        assert!(!collided);
        assert_eq!(hazard.vel, vel);
    }

    #[test]
    fn test_alive_overlap_collides() {
        let player = Player::new();
        let mut hazard = hazard_at(player.pos.x, player.pos.y, Vec2::ZERO);
        assert!(hazard.step(&player));
    }
}
