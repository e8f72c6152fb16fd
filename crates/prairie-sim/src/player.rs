//! The player and its timed powerup effects.
//!
//! The player is not an ECS entity; the engine owns exactly one.

use glam::Vec2;

use prairie_core::constants::*;
use prairie_core::enums::{Direction, PowerupKind};
use prairie_core::types::{Countdown, Rect};

/// Timed effects, re-armed rather than stacked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveEffects {
    entries: Vec<(PowerupKind, Countdown)>,
}

impl ActiveEffects {
    /// Arm `kind` for `base_ms`. Re-arming a running effect adds the grace
    /// period on top of a fresh base duration.
    pub fn arm(&mut self, kind: PowerupKind, base_ms: f32) {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, timer)) if timer.is_active() => timer.arm(base_ms + POWERUP_REARM_GRACE_MS),
            Some((_, timer)) => timer.arm(base_ms),
            None => self.entries.push((kind, Countdown::armed(base_ms))),
        }
    }

    pub fn is_active(&self, kind: PowerupKind) -> bool {
        self.remaining_ms(kind) > 0.0
    }

    pub fn remaining_ms(&self, kind: PowerupKind) -> f32 {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, timer)| timer.remaining_ms())
            .unwrap_or(0.0)
    }

    /// Advance every timer. Returns the effects that ran out this tick.
    pub fn tick(&mut self, delta_ms: f32) -> Vec<PowerupKind> {
        let expired: Vec<PowerupKind> = self
            .entries
            .iter_mut()
            .filter_map(|(kind, timer)| timer.tick(delta_ms).then_some(*kind))
            .collect();
        self.entries.retain(|(_, timer)| timer.is_active());
        expired
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (PowerupKind, f32)> + '_ {
        self.entries
            .iter()
            .filter(|(_, timer)| timer.is_active())
            .map(|(kind, timer)| (*kind, timer.remaining_ms()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left of the tile-sized sprite.
    pub position: Vec2,
    pub facing: Direction,
    pub shot_cooldown: Countdown,
    pub invincible: Countdown,
    pub footstep: Countdown,
    /// Walk animation frame.
    pub frame: u8,
    pub effects: ActiveEffects,
    /// Dropped held item lies here; no pickups from it until the player steps off.
    pub no_pickup_box: Option<Rect>,
}

impl Default for Player {
    fn default() -> Self {
        Self::at_tile(PLAYER_START_TILE)
    }
}

impl Player {
    pub fn at_tile(tile: (f32, f32)) -> Self {
        Self {
            position: tile_position(tile),
            facing: Direction::Up,
            shot_cooldown: Countdown::IDLE,
            invincible: Countdown::IDLE,
            footstep: Countdown::IDLE,
            frame: 0,
            effects: ActiveEffects::default(),
            no_pickup_box: None,
        }
    }

    /// Collision box, inset from the sprite.
    pub fn bounds(&self) -> Rect {
        Self::bounds_at(self.position)
    }

    pub fn bounds_at(position: Vec2) -> Rect {
        Rect::at(
            position + Vec2::splat(PLAYER_BOX_INSET),
            Vec2::splat(PLAYER_BOX_SIZE),
        )
    }

    /// The tile-sized sprite rectangle.
    pub fn sprite_rect(&self) -> Rect {
        Rect::at(self.position, Vec2::splat(TILE_SIZE))
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible.is_active()
    }

    /// Put the player back on `tile`, keeping effects and timers.
    pub fn respawn_at(&mut self, tile: (f32, f32)) {
        self.position = tile_position(tile);
        self.facing = Direction::Up;
        self.no_pickup_box = None;
    }
}

pub fn tile_position(tile: (f32, f32)) -> Vec2 {
    Vec2::new(tile.0 * TILE_SIZE, tile.1 * TILE_SIZE)
}
