//! Powerup engine: pickups, the held item, timed effects and the one-shot
//! effects (nuke, teleport, zombie mode).

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use prairie_core::components::{Monster, Pickup};
use prairie_core::config::TuningConfig;
use prairie_core::constants::*;
use prairie_core::enums::PowerupKind;
use prairie_core::events::SoundCue;
use prairie_core::map::TileMap;
use prairie_core::types::{Countdown, Rect};

use prairie_monster_ai::behavior::{take_damage, GlobalTimers};

use crate::player::{tile_position, Player};
use crate::session::Session;
use crate::systems::collision::{settle_kills, Kill};
use crate::world_setup;

/// Timers that affect every monster at once.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlobalEffects {
    pub zombie: Countdown,
    pub confusion: Countdown,
}

impl GlobalEffects {
    pub fn timers(&self) -> GlobalTimers {
        GlobalTimers {
            monster_confusion: self.confusion.is_active(),
            zombie_mode: self.zombie.is_active(),
        }
    }

    pub fn clear(&mut self) {
        self.zombie.clear();
        self.confusion.clear();
    }
}

/// Borrowed engine state the powerup engine reads and writes.
pub struct PowerupContext<'a> {
    pub world: &'a mut World,
    pub map: &'a TileMap,
    pub player: &'a mut Player,
    pub session: &'a mut Session,
    pub globals: &'a mut GlobalEffects,
    pub tuning: &'a TuningConfig,
    /// Nuke damages instead of killing during boss fights.
    pub shootout: bool,
    pub rng: &'a mut ChaCha8Rng,
    pub cues: &'a mut Vec<SoundCue>,
    pub despawn_buffer: &'a mut Vec<Entity>,
    /// Set when a nuke finishes off a boss.
    pub boss_defeated: bool,
}

/// Advance effect, invincibility and world-pickup timers.
pub fn tick(
    world: &mut World,
    player: &mut Player,
    globals: &mut GlobalEffects,
    despawn_buffer: &mut Vec<Entity>,
    delta_ms: f32,
) {
    for kind in player.effects.tick(delta_ms) {
        debug!(?kind, "effect expired");
    }
    player.invincible.tick(delta_ms);
    globals.zombie.tick(delta_ms);
    globals.confusion.tick(delta_ms);

    for (entity, pickup) in world.query_mut::<&mut Pickup>() {
        if pickup.remaining.tick(delta_ms) {
            despawn_buffer.push(entity);
        }
    }
}

/// Base duration of a timed effect at the session's difficulty.
pub fn effect_duration(session: &Session) -> f32 {
    POWERUP_DURATION_MS * session.difficulty.duration_scale
}

/// Apply a pickup the player just touched.
pub fn collect(pickup: Pickup, ctx: &mut PowerupContext<'_>) {
    let kind = pickup.kind;
    if kind.is_immediate() {
        apply_immediate(kind, ctx);
        return;
    }

    if let Some(previous) = ctx.session.held_item.replace(kind) {
        world_setup::spawn_pickup(ctx.world, previous, pickup.position);
        ctx.player.no_pickup_box = Some(Rect::at(pickup.position, Vec2::splat(PICKUP_SIZE)));
    }
    ctx.cues.push(SoundCue::PowerupPickup);
}

fn apply_immediate(kind: PowerupKind, ctx: &mut PowerupContext<'_>) {
    let session = &mut *ctx.session;
    match kind {
        PowerupKind::Coin1 => session.coins += 1,
        PowerupKind::Coin5 => session.coins += 5,
        PowerupKind::Life | PowerupKind::Heart => session.lives += 1,
        PowerupKind::Skull => session.score += SKULL_SCORE,
        PowerupKind::Log => session.score += LOG_SCORE,
        _ => return,
    }
    let cue = if matches!(kind, PowerupKind::Coin1 | PowerupKind::Coin5) {
        SoundCue::CoinPickup
    } else {
        SoundCue::PowerupPickup
    };
    ctx.cues.push(cue);
}

/// Activate the held item. The item is kept if it could not be applied.
pub fn use_held_item(ctx: &mut PowerupContext<'_>) -> bool {
    let Some(kind) = ctx.session.held_item else {
        return false;
    };
    if !activate(kind, ctx) {
        return false;
    }
    ctx.session.held_item = None;
    ctx.cues.push(SoundCue::ItemUsed);
    true
}

/// Apply a powerup's effect. Returns `false` if nothing happened.
pub fn activate(kind: PowerupKind, ctx: &mut PowerupContext<'_>) -> bool {
    let base = effect_duration(ctx.session);
    match kind {
        PowerupKind::Spread | PowerupKind::RapidFire | PowerupKind::Speed | PowerupKind::Shotgun => {
            ctx.player.effects.arm(kind, base);
        }
        PowerupKind::Sheriff => {
            let doubled = base * SHERIFF_DURATION_MULTIPLIER;
            for part in [PowerupKind::Shotgun, PowerupKind::RapidFire, PowerupKind::Speed] {
                ctx.player.effects.arm(part, doubled);
            }
        }
        PowerupKind::Zombie => {
            ctx.globals
                .zombie
                .arm(ZOMBIE_DURATION_MS * ctx.session.difficulty.duration_scale);
        }
        PowerupKind::Nuke => nuke(ctx),
        PowerupKind::Teleport => return teleport(ctx),
        _ => {
            apply_immediate(kind, ctx);
        }
    }
    true
}

/// Kill every regular monster outright, or damage everything during a
/// boss fight.
pub fn nuke(ctx: &mut PowerupContext<'_>) {
    let mut kills = Vec::new();
    for (entity, monster) in ctx.world.query_mut::<&mut Monster>() {
        if monster.is_dead() {
            continue;
        }
        let died = if ctx.shootout {
            let damage = nuke_damage(monster, ctx.tuning.nuke_boss_damage);
            take_damage(monster, damage)
        } else if monster.kind.is_boss() {
            false
        } else {
            let health = monster.health;
            take_damage(monster, health)
        };
        if died {
            kills.push(Kill {
                entity,
                monster: monster.clone(),
                drop_loot: ctx.shootout,
            });
        }
    }
    ctx.cues.push(SoundCue::Explosion);
    if settle_kills(ctx.world, kills, ctx.session, ctx.rng, ctx.cues, ctx.despawn_buffer) {
        ctx.boss_defeated = true;
    }
}

/// Shootout nuke damage against one monster. A boss at full health is always
/// left standing.
fn nuke_damage(monster: &Monster, damage: i32) -> i32 {
    match monster.boss {
        Some(boss) if monster.health >= boss.full_health() => damage.min(monster.health - 1),
        _ => damage,
    }
}

/// Move the player to a random free tile. Nothing happens if no tile is
/// found within the retry budget.
pub fn teleport(ctx: &mut PowerupContext<'_>) -> bool {
    let occupied = world_setup::monster_bounds(ctx.world);
    for _ in 0..TELEPORT_TRIES {
        let col = ctx.rng.gen_range(1..MAP_WIDTH - 1);
        let row = ctx.rng.gen_range(1..MAP_HEIGHT - 1);
        let position = tile_position((col as f32, row as f32));
        let sprite = Rect::at(position, Vec2::splat(TILE_SIZE));
        if ctx.map.blocks(&Player::bounds_at(position))
            || occupied.iter().any(|other| other.intersects(&sprite))
        {
            continue;
        }
        ctx.player.position = position;
        if ctx.player.invincible.remaining_ms() < TELEPORT_INVINCIBLE_MS {
            ctx.player.invincible.arm(TELEPORT_INVINCIBLE_MS);
        }
        ctx.globals.confusion.arm(CONFUSION_DURATION_MS);
        ctx.cues.push(SoundCue::Teleport);
        return true;
    }
    debug!("teleport found no free tile");
    false
}
