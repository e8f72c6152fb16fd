//! Spawning system: per-kind group rolls, ambient spawns and draining the
//! spawn queue.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use prairie_core::config::TuningConfig;
use prairie_core::constants::*;
use prairie_core::enums::Locomotion;
use prairie_core::map::TileMap;
use prairie_core::types::Rect;

use prairie_monster_ai::profiles::get_profile;

use crate::scheduler::SpawnScheduler;
use crate::session::Session;
use crate::world_setup;

/// Roll every kind's group chance and queue the groups that hit.
pub fn roll_groups(session: &Session, scheduler: &mut SpawnScheduler, rng: &mut ChaCha8Rng) {
    let scale = session.difficulty.chance_scale;
    for (kind, chance) in session.chances.iter() {
        if chance.base <= 0.0 {
            continue;
        }
        if !rng.gen_bool((chance.base * scale).clamp(0.0, 1.0)) {
            continue;
        }
        let mut size = 1;
        let extra = chance.extra.clamp(0.0, 1.0);
        while size < MAX_SPAWN_GROUP && rng.gen_bool(extra) {
            size += 1;
        }
        let side = rng.gen_range(0..SPAWN_QUADRANTS);
        let gates = world_setup::gate_positions(side);
        for i in 0..size {
            let position = gates[i as usize % gates.len()];
            scheduler.schedule(kind, position, i as f32 * SPAWN_GROUP_STAGGER_MS);
        }
        trace!(?kind, size, side, "spawn group queued");
    }
}

/// One ambient Bernoulli trial. Returns `true` if a monster appeared.
pub fn roll_ambient(
    world: &mut World,
    session: &Session,
    map: &TileMap,
    tuning: &TuningConfig,
    rng: &mut ChaCha8Rng,
) -> bool {
    let live = world_setup::monster_count(world);
    let chance = if live == 0 {
        tuning.ambient_spawn_chance_idle
    } else {
        tuning.ambient_spawn_chance_busy
    };
    if chance <= 0.0 || !rng.gen_bool(chance.clamp(0.0, 1.0)) {
        return false;
    }
    if live >= tuning.max_live_monsters {
        return false;
    }

    let kind = session.chances.weighted_kind(rng);
    let gates = world_setup::all_gate_positions();
    let occupied = world_setup::monster_bounds(world);
    for _ in 0..tuning.ambient_spawn_retries {
        let position = gates[rng.gen_range(0..gates.len())];
        let rect = Rect::at(position, Vec2::splat(TILE_SIZE));
        if map.blocks(&rect) || occupied.iter().any(|other| other.intersects(&rect)) {
            continue;
        }
        world_setup::spawn_monster(world, kind, position, map, rng);
        trace!(?kind, "ambient spawn");
        return true;
    }
    debug!(?kind, "ambient spawn abandoned, no free spawn point");
    false
}

/// Advance the queue clock and materialise at most one matured spawn.
///
/// A spawn whose spot is taken, or that would exceed the monster cap, is
/// re-queued shortly after. Ground monsters whose spot is solid terrain are
/// dropped.
pub fn drain_queue(
    world: &mut World,
    scheduler: &mut SpawnScheduler,
    map: &TileMap,
    tuning: &TuningConfig,
    rng: &mut ChaCha8Rng,
    delta_ms: f32,
) -> bool {
    scheduler.advance(delta_ms);
    let Some((kind, position)) = scheduler.poll_ready() else {
        return false;
    };

    let rect = Rect::at(position, Vec2::splat(TILE_SIZE));
    if get_profile(kind).locomotion == Locomotion::Ground && map.blocks(&rect) {
        debug!(?kind, x = position.x, y = position.y, "queued spawn on solid ground dropped");
        return false;
    }

    let occupied = world_setup::monster_bounds(world);
    if occupied.len() >= tuning.max_live_monsters
        || occupied.iter().any(|other| other.intersects(&rect))
    {
        debug!(?kind, queued = scheduler.len(), "queued spawn blocked, requeued");
        scheduler.schedule(kind, position, BLOCKED_SPAWN_RETRY_MS);
        return false;
    }

    world_setup::spawn_monster(world, kind, position, map, rng);
    true
}
