//! Collision resolver.
//!
//! Runs once per tick, in order:
//! 1. player bullets vs monsters (piercing)
//! 2. bullets vs map geometry
//! 3. enemy bullets vs player
//! 4. monster bodies vs player
//!
//! Removal is mark-and-sweep: entities are pushed to the despawn buffer and
//! skipped by later passes, never despawned mid-pass. Pickups are resolved
//! separately by [`collect_pickups`] so the powerup engine can apply them.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use prairie_core::components::{Bullet, Monster, Pickup};
use prairie_core::enums::BulletOwner;
use prairie_core::events::SoundCue;
use prairie_core::map::TileMap;

use prairie_monster_ai::behavior::take_damage;
use prairie_monster_ai::loot::loot_roll;
use prairie_monster_ai::profiles::get_profile;

use crate::player::Player;
use crate::session::Session;
use crate::world_setup;

/// What the collision pass decided this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// The player was struck while vulnerable.
    pub player_hit: bool,
    /// A boss died this tick.
    pub boss_defeated: bool,
    pub kills: u32,
}

/// Borrowed engine state the resolver reads and writes.
pub struct CollisionContext<'a> {
    pub map: &'a TileMap,
    pub player: &'a Player,
    pub session: &'a mut Session,
    /// Zombie mode: contact kills monsters instead of the player.
    pub zombie: bool,
    pub rng: &'a mut ChaCha8Rng,
    pub cues: &'a mut Vec<SoundCue>,
    pub despawn_buffer: &'a mut Vec<Entity>,
}

/// A monster that died this tick, copied out before it is despawned.
#[derive(Debug, Clone)]
pub struct Kill {
    pub entity: Entity,
    pub monster: Monster,
    pub drop_loot: bool,
}

pub fn run(world: &mut World, ctx: &mut CollisionContext<'_>) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    let mut kills = Vec::new();

    // 1. Player bullets vs monsters
    bullets_vs_monsters(world, ctx, &mut kills);
    // 2. Bullets vs map
    bullets_vs_map(world, ctx);

    let vulnerable = !ctx.player.is_invincible() && !ctx.zombie;
    // 3. Enemy bullets vs player
    if vulnerable && enemy_bullet_hits_player(world, ctx) {
        outcome.player_hit = true;
    }
    // 4. Monster bodies vs player
    if monsters_vs_player(world, ctx, vulnerable, &mut kills) {
        outcome.player_hit = true;
    }

    outcome.kills = kills.len() as u32;
    outcome.boss_defeated = settle_kills(world, kills, ctx.session, ctx.rng, ctx.cues, ctx.despawn_buffer);
    outcome
}

fn bullets_vs_monsters(world: &mut World, ctx: &mut CollisionContext<'_>, kills: &mut Vec<Kill>) {
    let shots: Vec<(Entity, Bullet)> = world
        .query::<&Bullet>()
        .iter()
        .filter(|(_, bullet)| bullet.owner == BulletOwner::Player)
        .map(|(entity, bullet)| (entity, *bullet))
        .collect();
    let targets: Vec<Entity> = world.query::<&Monster>().iter().map(|(e, _)| e).collect();

    for (bullet_entity, bullet) in shots {
        let rect = bullet.bounds();
        let mut damage = bullet.damage;

        for target in &targets {
            if damage <= 0 {
                break;
            }
            let Ok(mut monster) = world.get::<&mut Monster>(*target) else {
                continue;
            };
            if monster.is_dead() || monster.invisible || !monster.bounds.intersects(&rect) {
                continue;
            }
            // Remaining damage pierces on into the next monster.
            let pre_hit_health = monster.health;
            if take_damage(&mut monster, damage) {
                kills.push(Kill {
                    entity: *target,
                    monster: (*monster).clone(),
                    drop_loot: true,
                });
            } else {
                ctx.cues.push(SoundCue::MonsterHit);
            }
            damage -= pre_hit_health;
        }

        if damage <= 0 {
            ctx.despawn_buffer.push(bullet_entity);
        } else if damage != bullet.damage {
            if let Ok(mut live) = world.get::<&mut Bullet>(bullet_entity) {
                live.damage = damage;
            }
        }
    }
}

fn bullets_vs_map(world: &mut World, ctx: &mut CollisionContext<'_>) {
    for (entity, bullet) in world.query::<&Bullet>().iter() {
        if ctx.map.blocks(&bullet.bounds()) && !ctx.despawn_buffer.contains(&entity) {
            ctx.despawn_buffer.push(entity);
        }
    }
}

fn enemy_bullet_hits_player(world: &World, ctx: &CollisionContext<'_>) -> bool {
    let target = ctx.player.bounds();
    world.query::<&Bullet>().iter().any(|(entity, bullet)| {
        bullet.owner == BulletOwner::Enemy
            && !ctx.despawn_buffer.contains(&entity)
            && bullet.bounds().intersects(&target)
    })
}

fn monsters_vs_player(
    world: &mut World,
    ctx: &mut CollisionContext<'_>,
    vulnerable: bool,
    kills: &mut Vec<Kill>,
) -> bool {
    let target = ctx.player.bounds();
    let mut hit = false;
    for (entity, monster) in world.query_mut::<&mut Monster>() {
        if !monster.is_harmful() || !monster.bounds.intersects(&target) {
            continue;
        }
        if ctx.zombie {
            if !monster.kind.is_boss() {
                let health = monster.health;
                if take_damage(monster, health) {
                    kills.push(Kill {
                        entity,
                        monster: monster.clone(),
                        drop_loot: true,
                    });
                }
            }
        } else if vulnerable {
            hit = true;
        }
    }
    hit
}

/// Mark killed monsters for removal, award score and roll loot. Returns
/// `true` if a boss was among them.
pub fn settle_kills(
    world: &mut World,
    kills: Vec<Kill>,
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    cues: &mut Vec<SoundCue>,
    despawn_buffer: &mut Vec<Entity>,
) -> bool {
    let mut boss_defeated = false;
    for kill in kills {
        despawn_buffer.push(kill.entity);
        session.score += get_profile(kill.monster.kind).score;
        boss_defeated |= kill.monster.kind.is_boss();
        cues.push(SoundCue::MonsterDeath);
        if kill.drop_loot {
            if let Some(kind) = loot_roll(&kill.monster, rng) {
                world_setup::spawn_pickup(world, kind, kill.monster.position());
            }
        }
    }
    boss_defeated
}

/// Pickups touching the player, removed from the world. Arms and releases
/// the no-pickup box around a dropped held item.
pub fn collect_pickups(world: &World, player: &mut Player, despawn_buffer: &mut Vec<Entity>) -> Vec<Pickup> {
    let bounds = player.bounds();
    if player.no_pickup_box.is_some_and(|blocked| !blocked.intersects(&bounds)) {
        player.no_pickup_box = None;
    }

    let mut collected = Vec::new();
    for (entity, pickup) in world.query::<&Pickup>().iter() {
        let rect = pickup.bounds();
        if !rect.intersects(&bounds) || despawn_buffer.contains(&entity) {
            continue;
        }
        if player.no_pickup_box.is_some_and(|blocked| blocked.intersects(&rect)) {
            continue;
        }
        despawn_buffer.push(entity);
        collected.push(*pickup);
    }
    collected
}
