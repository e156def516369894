//! Treasure controller
//!
//! One roaming pickup: re-placed at a random position (clear of the
//! player) after every collection. Every pickup charges the player;
//! every `SUPER_INTERVAL`-th one supercharges instead.

use glam::Vec2;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::geom::{self, Rect};
use crate::sim::player::Player;
use crate::sim::state::{
    EntityId, GameEvent, PlacementError, RenderFlags, Score, SoundCue, Sprite, place_away_from,
};

/// The treasure pickup
#[derive(Debug, Clone)]
pub struct Treasure {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pickups since the last supercharge, starting at 1.
    /// Strictly increases per pickup; resets to 0 only on reaching
    /// `SUPER_INTERVAL`.
    pub super_count: u32,
}

impl Treasure {
    /// Create and place the treasure for a fresh run.
    pub fn place_initial(rng: &mut Pcg32, player: &Player) -> Result<Self, PlacementError> {
        let mut treasure = Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(TREASURE_SIZE),
            super_count: 1,
        };
        treasure.place(rng, player)?;
        Ok(treasure)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Move to a random position at least `TREASURE_MIN_PLAYER_DIST` from
    /// the player's current center. The check applies at placement time
    /// only; the player is free to walk right back in.
    pub fn place(&mut self, rng: &mut Pcg32, player: &Player) -> Result<(), PlacementError> {
        self.pos = place_away_from(
            rng,
            self.size,
            player.center(),
            TREASURE_MIN_PLAYER_DIST,
        )?;
        Ok(())
    }

    /// The next pickup will supercharge
    pub fn super_ready(&self) -> bool {
        self.super_count >= SUPER_INTERVAL
    }

    /// Advance one tick: collect if the player overlaps right now.
    ///
    /// The overlap check runs before re-placement, so a single pickup is
    /// processed exactly once per overlapping tick.
    pub fn step(
        &mut self,
        player: &mut Player,
        score: &mut Score,
        rng: &mut Pcg32,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), PlacementError> {
        if geom::overlaps(self.rect(), player.rect()) {
            self.collect(player, score, rng, events)?;
        }
        Ok(())
    }

    fn collect(
        &mut self,
        player: &mut Player,
        score: &mut Score,
        rng: &mut Pcg32,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), PlacementError> {
        events.push(GameEvent::Play(SoundCue::Collect));
        score.increase(TREASURE_REWARD, events);

        if self.super_ready() {
            player.charge(true);
            self.super_count = 0;
        } else {
            player.charge(false);
        }
        self.super_count += 1;

        self.place(rng, player)
    }

    pub fn sprite(&self) -> Sprite {
        Sprite {
            id: EntityId::Treasure,
            pos: self.pos,
            size: self.size,
            flags: RenderFlags {
                super_charged: self.super_ready(),
                ..Default::default()
            },
        }
    }
}
