//! Ground and flight steering.

use glam::Vec2;
use rand::{Rng, RngCore};

use prairie_core::components::Monster;
use prairie_core::constants::*;
use prairie_core::enums::{Direction, MonsterKind};
use prairie_core::map::TileMap;
use prairie_core::types::Rect;

use crate::behavior::MonsterContext;

/// Random tile-aligned target the walkers can stand on.
///
/// Rejection-sampled; `None` if every try lands on blocked terrain.
pub fn random_target(map: &TileMap, rng: &mut dyn RngCore) -> Option<Vec2> {
    for _ in 0..RETARGET_TRIES {
        let col = rng.gen_range(0..RANDOM_TARGET_SPAN) + RANDOM_TARGET_MIN_TILE;
        let row = rng.gen_range(0..RANDOM_TARGET_SPAN) + RANDOM_TARGET_MIN_TILE;
        let candidate = Vec2::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE);
        if !map.blocks(&Rect::at(candidate, Vec2::splat(TILE_SIZE))) {
            return Some(candidate);
        }
    }
    None
}

/// Current goal: the override target if set, else the player.
pub fn resolve_target(monster: &Monster, player_position: Vec2) -> Vec2 {
    if monster.target != Vec2::ZERO {
        monster.target
    } else {
        player_position
    }
}

/// Whether the centre of a tile-sized thing at `target` lies inside `bounds`.
pub fn reached(bounds: &Rect, target: Vec2) -> bool {
    bounds.contains_point(target + Vec2::splat(TILE_SIZE / 2.0))
}

/// Pick a four-way heading toward `target`.
///
/// The dominant axis is tried first (the horizontal axis for Spikeys that are
/// not contrarian). A monster that failed to move last frame will not pick
/// its current heading again, so it works around obstacles instead of
/// pushing into them. If nothing qualifies the current heading is kept.
pub fn choose_heading(monster: &Monster, target: Vec2) -> Direction {
    let position = monster.position();
    let speed = monster.speed;
    let may_take = |dir: Direction| monster.moved_last_turn || monster.heading != dir;

    let left = target.x + speed < position.x;
    let right = target.x > position.x + speed;
    let down = target.y > position.y + speed;
    let up = target.y + speed < position.y;

    let horizontal_first = (monster.kind == MonsterKind::Spikey && !monster.opposite_motion)
        || (target.x - position.x).abs() > (target.y - position.y).abs();

    let order: [(bool, Direction); 4] = if horizontal_first {
        [
            (left, Direction::Left),
            (right, Direction::Right),
            (down, Direction::Down),
            (up, Direction::Up),
        ]
    } else {
        [
            (down, Direction::Down),
            (up, Direction::Up),
            (left, Direction::Left),
            (right, Direction::Right),
        ]
    };

    order
        .iter()
        .find(|(wanted, dir)| *wanted && may_take(*dir))
        .map(|(_, dir)| *dir)
        .unwrap_or(monster.heading)
}

/// One frame of four-way stepping toward the current target.
///
/// The tentative step is rejected wholesale if it touches blocked terrain or
/// another monster. Returns `true` if the monster moved.
pub fn walk(monster: &mut Monster, ctx: &mut MonsterContext<'_>) -> bool {
    monster.ticks_since_last_movement += 1;

    if ctx.rng.gen_bool(OPPOSITE_MOTION_FLIP_CHANCE) {
        monster.opposite_motion = !monster.opposite_motion;
    }

    if monster.ticks_since_last_movement > RETARGET_STALL_TICKS
        || ctx.rng.gen_bool(RANDOM_RETARGET_CHANCE)
    {
        if let Some(target) = random_target(ctx.map, ctx.rng) {
            monster.target = target;
        }
        monster.ticks_since_last_movement = 0;
    }

    let target = resolve_target(monster, ctx.player_position);
    monster.heading = choose_heading(monster, target);
    monster.moved_last_turn = false;

    let mut step = monster.heading.unit() * monster.speed;
    if ctx.timers.zombie_mode {
        step = -step;
    }
    let attempted = monster.bounds.translated(step);

    if ctx.map.blocks(&attempted) || ctx.occupancy.is_blocked(&attempted) {
        return false;
    }

    monster.bounds = attempted;
    monster.ticks_since_last_movement = 0;
    monster.moved_last_turn = true;

    if reached(&monster.bounds, target) {
        monster.target = Vec2::ZERO;
        if monster.uninterested {
            if ctx.rng.gen_bool(BECOME_INTERESTED_CHANCE) {
                monster.uninterested = false;
            } else if let Some(next) = random_target(ctx.map, ctx.rng) {
                monster.target = next;
            }
        }
    }
    true
}

/// Ground step used by Orcs, Ogres, Mummies and Mushrooms.
pub fn ground_step(monster: &mut Monster, _delta_ms: f32, ctx: &mut MonsterContext<'_>) {
    if monster.flash.is_active() {
        return;
    }
    walk(monster, ctx);
}

/// Acceleration-based homing for Ghosts and Devils. Terrain is ignored.
pub fn flight_step(monster: &mut Monster, _delta_ms: f32, ctx: &mut MonsterContext<'_>) {
    if monster.flash.is_active() {
        return;
    }
    monster.ticks_since_last_movement += 1;

    let target = resolve_target(monster, ctx.player_position);
    let desired = homing_velocity(monster, target);
    monster.acceleration = accelerate_toward(monster.acceleration, desired);

    let attempted = monster.bounds.translated(monster.acceleration);
    if ctx.occupancy.is_blocked(&attempted) {
        return;
    }
    monster.bounds = attempted;
    monster.ticks_since_last_movement = 0;

    if reached(&monster.bounds, target) {
        monster.target = Vec2::ZERO;
    }
}

/// Full-speed velocity from the monster's centre to the target's centre.
pub fn homing_velocity(monster: &Monster, target: Vec2) -> Vec2 {
    let to_target = target + Vec2::splat(TILE_SIZE / 2.0) - monster.bounds.center();
    to_target.normalize_or_zero() * monster.speed
}

/// Nudge each axis of `current` toward `desired` by the flight increment.
pub fn accelerate_toward(current: Vec2, desired: Vec2) -> Vec2 {
    let multiplier = if desired.x != 0.0 && desired.y != 0.0 {
        FLIGHT_DIAGONAL_MULTIPLIER
    } else {
        1.0
    };
    let increment = FLIGHT_ACCELERATION * multiplier;
    Vec2::new(
        nudge(current.x, desired.x, increment),
        nudge(current.y, desired.y, increment),
    )
}

fn nudge(current: f32, desired: f32, increment: f32) -> f32 {
    if desired > current {
        current + increment
    } else if desired < current {
        current - increment
    } else {
        current
    }
}
