//! Entity spawn factories and wave set-up helpers.
//!
//! Monsters, bullets and pickups are each spawned as a single-component
//! entity.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use prairie_core::components::{Bullet, Monster, Pickup};
use prairie_core::constants::*;
use prairie_core::enums::{BulletOwner, MonsterKind, PowerupKind};
use prairie_core::map::TileMap;
use prairie_core::types::Rect;

use prairie_monster_ai::profiles::{create_dracula, create_monster, create_outlaw};

use crate::player::tile_position;
use crate::session::Shootout;

/// Spawn a regular monster with freshly rolled personality flags.
pub fn spawn_monster(
    world: &mut World,
    kind: MonsterKind,
    position: Vec2,
    map: &TileMap,
    rng: &mut ChaCha8Rng,
) -> Entity {
    world.spawn((create_monster(kind, position, map, rng),))
}

/// Spawn the boss of a shootout wave at its home tile.
pub fn spawn_boss(world: &mut World, shootout: Shootout) -> Entity {
    let monster = match shootout {
        Shootout::Outlaw { encounter } => create_outlaw(tile_position(OUTLAW_HOME_TILE), encounter),
        Shootout::Dracula => create_dracula(tile_position(DRACULA_HOME_TILE)),
    };
    world.spawn((monster,))
}

pub fn spawn_bullets(world: &mut World, bullets: impl IntoIterator<Item = Bullet>) {
    for bullet in bullets {
        world.spawn((bullet,));
    }
}

pub fn spawn_pickup(world: &mut World, kind: PowerupKind, position: Vec2) -> Entity {
    world.spawn((Pickup::new(kind, position),))
}

/// Despawn every entity carrying component `T`.
pub fn clear<T: hecs::Component>(world: &mut World) {
    let doomed: Vec<Entity> = world.query_mut::<&T>().into_iter().map(|(e, _)| e).collect();
    for entity in doomed {
        let _ = world.despawn(entity);
    }
}

/// Despawn enemy-owned bullets only.
pub fn clear_enemy_bullets(world: &mut World) {
    let doomed: Vec<Entity> = world
        .query_mut::<&Bullet>()
        .into_iter()
        .filter(|(_, bullet)| bullet.owner == BulletOwner::Enemy)
        .map(|(e, _)| e)
        .collect();
    for entity in doomed {
        let _ = world.despawn(entity);
    }
}

/// Remove every monster, bullet and pickup.
pub fn clear_wave(world: &mut World) {
    clear::<Monster>(world);
    clear::<Bullet>(world);
    clear::<Pickup>(world);
}

pub fn monster_count(world: &World) -> usize {
    world.query::<&Monster>().iter().count()
}

/// Bounds of every live monster.
pub fn monster_bounds(world: &World) -> Vec<Rect> {
    world
        .query::<&Monster>()
        .iter()
        .map(|(_, monster)| monster.bounds)
        .collect()
}

/// The two gate tiles on one side: 0 top, 1 right, 2 bottom, 3 left.
pub fn gate_positions(side: usize) -> [Vec2; 2] {
    let last = (MAP_WIDTH - 1) as f32;
    let [a, b] = GATE_TILES.map(|t| t as f32);
    let tiles = match side % SPAWN_QUADRANTS {
        0 => [(a, 0.0), (b, 0.0)],
        1 => [(last, a), (last, b)],
        2 => [(a, last), (b, last)],
        _ => [(0.0, a), (0.0, b)],
    };
    tiles.map(tile_position)
}

/// Every gate tile on every side.
pub fn all_gate_positions() -> Vec<Vec2> {
    (0..SPAWN_QUADRANTS).flat_map(gate_positions).collect()
}
