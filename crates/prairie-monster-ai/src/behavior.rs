//! Per-monster update contract.
//!
//! `update` runs one frame of a monster's behavior, `take_damage` applies a
//! hit, and [`crate::loot::loot_roll`] decides the drop. Behavior is chosen
//! through a dispatch table keyed by [`MonsterKind`].

use glam::Vec2;
use rand::RngCore;

use prairie_core::components::{Bullet, Monster};
use prairie_core::constants::*;
use prairie_core::enums::MonsterKind;
use prairie_core::events::SoundCue;
use prairie_core::map::TileMap;
use prairie_core::types::Rect;

use crate::{dracula, outlaw, spikey, steering};

/// Global timers that gate monster movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalTimers {
    /// Teleport confusion is running.
    pub monster_confusion: bool,
    /// Ground monsters flee instead of chasing.
    pub zombie_mode: bool,
}

impl GlobalTimers {
    pub fn suspends_movement(&self) -> bool {
        self.monster_confusion
    }
}

/// Bounds of every live monster at the start of the frame, kept current as
/// monsters move.
pub struct Occupancy<'a> {
    bounds: &'a [Rect],
    own: Option<usize>,
}

impl<'a> Occupancy<'a> {
    /// `own` is the index of the monster being updated, which never blocks itself.
    pub fn new(bounds: &'a [Rect], own: Option<usize>) -> Self {
        Self { bounds, own }
    }

    pub fn empty() -> Occupancy<'static> {
        Occupancy {
            bounds: &[],
            own: None,
        }
    }

    pub fn is_blocked(&self, rect: &Rect) -> bool {
        self.bounds
            .iter()
            .enumerate()
            .any(|(i, other)| Some(i) != self.own && other.intersects(rect))
    }
}

/// Side effects a monster may request during its update.
#[derive(Debug, Default)]
pub struct MonsterEffects {
    pub bullets: Vec<Bullet>,
    /// Minions to push through the spawn queue.
    pub summons: Vec<(MonsterKind, Vec2)>,
    pub cues: Vec<SoundCue>,
}

impl MonsterEffects {
    pub fn clear(&mut self) {
        self.bullets.clear();
        self.summons.clear();
        self.cues.clear();
    }
}

/// Everything a monster may look at or touch during its update.
pub struct MonsterContext<'a> {
    pub map: &'a TileMap,
    /// Top-left of the player's tile-sized sprite.
    pub player_position: Vec2,
    pub occupancy: Occupancy<'a>,
    pub timers: GlobalTimers,
    pub rng: &'a mut dyn RngCore,
    pub effects: &'a mut MonsterEffects,
}

/// Behavior for one frame of one monster.
pub type StepFn = fn(&mut Monster, f32, &mut MonsterContext<'_>);

/// Dispatch table: which step function drives each kind.
pub fn behavior_for(kind: MonsterKind) -> StepFn {
    match kind {
        MonsterKind::Orc | MonsterKind::Ogre | MonsterKind::Mummy | MonsterKind::Mushroom => {
            steering::ground_step
        }
        MonsterKind::Ghost | MonsterKind::Devil => steering::flight_step,
        MonsterKind::Spikey => spikey::step,
        MonsterKind::Dracula => dracula::step,
        MonsterKind::Outlaw => outlaw::step,
    }
}

/// Run one frame. Returns `true` if the monster left the map and should be
/// removed. Dead monsters are never removed here; the caller rolls loot first.
pub fn update(monster: &mut Monster, delta_ms: f32, ctx: &mut MonsterContext<'_>) -> bool {
    monster.flash.tick(delta_ms);
    animate(monster, delta_ms);

    // Boss scripts keep their clocks running and only stop moving.
    if ctx.timers.suspends_movement() && monster.boss.is_none() {
        return false;
    }

    (behavior_for(monster.kind))(monster, delta_ms, ctx);

    !ctx.map.bounds().inflated(TILE_SIZE).intersects(&monster.bounds)
}

/// Apply `amount` damage. Returns `true` exactly once: on the hit that takes
/// health to zero. Bosses ignore damage during their opening taunt.
pub fn take_damage(monster: &mut Monster, amount: i32) -> bool {
    if monster.is_dead() {
        return false;
    }
    if monster.boss.as_ref().is_some_and(|boss| boss.is_invulnerable()) {
        return false;
    }
    monster.health = (monster.health - amount.max(0)).max(0);
    monster.flash.arm(MONSTER_HIT_FLASH_MS);
    monster.health <= 0
}

fn animate(monster: &mut Monster, delta_ms: f32) {
    if monster.animation.tick(delta_ms) || !monster.animation.is_active() {
        monster.animation_frame = (monster.animation_frame + 1) % 2;
        let frame_ms = (MONSTER_ANIMATION_BASE_MS - monster.speed * MONSTER_ANIMATION_PER_SPEED_MS)
            .max(MONSTER_ANIMATION_MIN_MS);
        monster.animation.arm(frame_ms);
    }
}
