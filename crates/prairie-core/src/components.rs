//! ECS components for simulation entities.
//!
//! Monsters, bullets and dropped pickups are each a single component on
//! their own entity. The player is not an entity; it lives on the engine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::{Countdown, Rect};

/// A live monster, regular or boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub kind: MonsterKind,
    pub bounds: Rect,
    /// Never increases except when a Spikey becomes a trap.
    pub health: i32,
    pub speed: f32,
    pub locomotion: Locomotion,
    /// Wanders to random targets instead of chasing the player.
    pub uninterested: bool,
    /// Spikey trap form.
    pub special: bool,
    pub invisible: bool,
    /// Prefers the minor axis when choosing a heading.
    pub opposite_motion: bool,
    /// Override target; `Vec2::ZERO` means chase the player.
    pub target: Vec2,
    /// Hit flash; movement freezes while it runs.
    pub flash: Countdown,
    pub ticks_since_last_movement: u32,
    pub heading: Direction,
    pub moved_last_turn: bool,
    /// Flyer velocity, nudged toward the target every frame.
    pub acceleration: Vec2,
    pub animation: Countdown,
    pub animation_frame: u8,
    pub spikey: SpikeyStage,
    pub forming: Countdown,
    pub boss: Option<BossState>,
}

impl Monster {
    pub fn new(kind: MonsterKind, position: Vec2, health: i32, speed: f32, locomotion: Locomotion) -> Self {
        Self {
            kind,
            bounds: Rect::at(position, Vec2::splat(TILE_SIZE)),
            health,
            speed,
            locomotion,
            uninterested: false,
            special: false,
            invisible: false,
            opposite_motion: false,
            target: Vec2::ZERO,
            flash: Countdown::IDLE,
            ticks_since_last_movement: 0,
            heading: Direction::Up,
            moved_last_turn: false,
            acceleration: Vec2::ZERO,
            animation: Countdown::IDLE,
            animation_frame: 0,
            spikey: SpikeyStage::Roaming,
            forming: Countdown::IDLE,
            boss: None,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.bounds.position()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Whether touching this monster hurts the player.
    pub fn is_harmful(&self) -> bool {
        !self.invisible && !self.is_dead()
    }
}

/// Boss-only data carried by a [`Monster`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BossState {
    Dracula(DraculaState),
    Outlaw(OutlawState),
}

impl BossState {
    pub fn full_health(&self) -> i32 {
        match self {
            BossState::Dracula(state) => state.full_health,
            BossState::Outlaw(state) => state.full_health,
        }
    }

    /// Damage is ignored during the opening taunt.
    pub fn is_invulnerable(&self) -> bool {
        match self {
            BossState::Dracula(state) => state.phase == DraculaPhase::Gloating,
            BossState::Outlaw(state) => state.phase == OutlawPhase::Talking,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraculaState {
    pub phase: DraculaPhase,
    pub phase_timer: Countdown,
    pub shot_timer: Countdown,
    pub full_health: i32,
    pub home: Vec2,
    /// Volleys fired in this phase; also marks a summon as done.
    pub volleys: u32,
}

impl DraculaState {
    pub fn new(home: Vec2) -> Self {
        Self {
            phase: DraculaPhase::Gloating,
            phase_timer: Countdown::armed(DRACULA_GLOAT_MS),
            shot_timer: Countdown::IDLE,
            full_health: DRACULA_HEALTH,
            home,
            volleys: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlawState {
    pub phase: OutlawPhase,
    pub phase_timer: Countdown,
    pub shot_timer: Countdown,
    pub full_health: i32,
    pub home: Vec2,
    /// 1 for the first shootout, 2 for the second.
    pub encounter: u8,
    pub dart_left: bool,
    /// Horizontal destination while running.
    pub run_target_x: f32,
    /// Completed beats of the run-gun-and-pant phase.
    pub beat: u32,
}

impl OutlawState {
    pub fn new(home: Vec2, encounter: u8, full_health: i32) -> Self {
        Self {
            phase: OutlawPhase::Talking,
            phase_timer: Countdown::armed(OUTLAW_TALK_MS),
            shot_timer: Countdown::IDLE,
            full_health,
            home,
            encounter,
            dart_left: false,
            run_target_x: home.x,
            beat: 0,
        }
    }
}

/// A projectile. `motion` is the per-frame displacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Vec2,
    pub motion: Vec2,
    pub damage: i32,
    pub owner: BulletOwner,
    pub lifetime: Countdown,
}

impl Bullet {
    pub fn new(position: Vec2, motion: Vec2, damage: i32, owner: BulletOwner) -> Self {
        Self {
            position,
            motion,
            damage,
            owner,
            lifetime: Countdown::armed(BULLET_LIFETIME_MS),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::at(self.position, Vec2::splat(BULLET_SIZE))
    }
}

/// A powerup lying in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PowerupKind,
    pub position: Vec2,
    /// Despawn countdown, also drives the blink warning.
    pub remaining: Countdown,
}

impl Pickup {
    pub fn new(kind: PowerupKind, position: Vec2) -> Self {
        Self {
            kind,
            position,
            remaining: Countdown::armed(LOOT_DURATION_MS),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::at(self.position, Vec2::splat(PICKUP_SIZE))
    }

    pub fn is_blinking(&self) -> bool {
        self.remaining.remaining_ms() < LOOT_BLINK_MS
    }
}
