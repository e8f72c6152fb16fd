//! Monster system: runs each monster's behavior and collects the effects it
//! asks for.
//!
//! Occupancy is a snapshot of every monster's bounds, kept current as each
//! monster moves so later monsters see earlier moves.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use prairie_core::components::Monster;
use prairie_core::events::SoundCue;
use prairie_core::map::TileMap;

use prairie_monster_ai::behavior::{self, GlobalTimers, MonsterContext, MonsterEffects, Occupancy};

use crate::scheduler::SpawnScheduler;
use crate::world_setup;

/// Update every monster for one frame.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    map: &TileMap,
    player_position: Vec2,
    timers: GlobalTimers,
    rng: &mut ChaCha8Rng,
    effects: &mut MonsterEffects,
    scheduler: &mut SpawnScheduler,
    cues: &mut Vec<SoundCue>,
    despawn_buffer: &mut Vec<Entity>,
    delta_ms: f32,
) {
    effects.clear();

    let mut entities: Vec<Entity> = Vec::new();
    let mut bounds = Vec::new();
    for (entity, monster) in world.query_mut::<&Monster>() {
        entities.push(entity);
        bounds.push(monster.bounds);
    }

    for (index, entity) in entities.iter().enumerate() {
        let Ok(mut monster) = world.get::<&mut Monster>(*entity) else {
            continue;
        };
        let mut ctx = MonsterContext {
            map,
            player_position,
            occupancy: Occupancy::new(&bounds, Some(index)),
            timers,
            rng: &mut *rng,
            effects: &mut *effects,
        };
        let left_map = behavior::update(&mut monster, delta_ms, &mut ctx);
        let moved_to = monster.bounds;
        drop(monster);

        bounds[index] = moved_to;
        if left_map {
            despawn_buffer.push(*entity);
        }
    }

    world_setup::spawn_bullets(world, effects.bullets.drain(..));
    for (kind, position) in effects.summons.drain(..) {
        scheduler.schedule(kind, position, 0.0);
    }
    cues.append(&mut effects.cues);
}
