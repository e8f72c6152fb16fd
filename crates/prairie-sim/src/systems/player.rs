//! Player movement controller: held directions to motion, held shoot
//! directions to bullets.

use glam::Vec2;
use hecs::World;

use prairie_core::commands::{Action, InputSource};
use prairie_core::components::Bullet;
use prairie_core::constants::*;
use prairie_core::enums::{BulletOwner, Direction, PowerupKind};
use prairie_core::events::SoundCue;
use prairie_core::map::TileMap;
use prairie_core::types::Rect;

use prairie_monster_ai::gunnery::{fan, muzzle};

use crate::player::Player;
use crate::session::Session;
use crate::world_setup;

/// Unit-less direction sum of the held movement actions. Opposites cancel.
pub fn held_direction(input: &dyn InputSource, action_for: fn(Direction) -> Action) -> Vec2 {
    Direction::ALL
        .iter()
        .filter(|dir| input.is_held(action_for(**dir)))
        .map(|dir| dir.unit())
        .sum()
}

/// Per-frame displacement for a held direction sum at `speed`. Diagonals
/// move `sqrt(2 s^2) / 2` along each axis.
pub fn movement_delta(direction: Vec2, speed: f32) -> Vec2 {
    if direction.x != 0.0 && direction.y != 0.0 {
        let per_axis = (2.0 * speed * speed).sqrt() / 2.0;
        Vec2::new(direction.x.signum() * per_axis, direction.y.signum() * per_axis)
    } else {
        direction * speed
    }
}

pub fn move_speed(player: &Player, session: &Session, zombie: bool) -> f32 {
    let mut speed = PLAYER_SPEED;
    if player.effects.is_active(PowerupKind::Speed) {
        speed *= SPEED_POWERUP_MULTIPLIER;
    }
    if zombie {
        speed *= ZOMBIE_SPEED_MULTIPLIER;
    }
    speed * (1.0 + RUN_SPEED_LEVEL_BONUS * f32::from(session.upgrades.run_speed))
}

pub fn shooting_delay(player: &Player, session: &Session) -> f32 {
    let mut delay = SHOOTING_DELAY_MS;
    if player.effects.is_active(PowerupKind::RapidFire) {
        delay /= RAPID_FIRE_DIVISOR;
    }
    delay *= 1.0 - FIRE_SPEED_LEVEL_REDUCTION * f32::from(session.upgrades.fire_speed);
    delay.max(MIN_SHOOTING_DELAY_MS)
}

/// Bullets for one trigger pull at `angle`.
pub fn player_volley(player: &Player, session: &Session, angle: f32) -> Vec<Bullet> {
    let origin = muzzle(&player.sprite_rect());
    let damage = session.bullet_damage();
    let shoot = |angle: f32, offsets: &[f32]| {
        fan(origin, angle, offsets, PLAYER_BULLET_SPEED, damage, BulletOwner::Player)
    };

    if player.effects.is_active(PowerupKind::Spread) {
        let offsets = [0.0, SPREAD_FAN_OFFSET, -SPREAD_FAN_OFFSET];
        return Direction::ALL
            .iter()
            .flat_map(|dir| shoot(dir.angle(), &offsets))
            .collect();
    }

    let mut offsets = vec![0.0];
    if player.effects.is_active(PowerupKind::Shotgun) {
        offsets.extend([SHOTGUN_FAN_OFFSET, -SHOTGUN_FAN_OFFSET]);
    }
    if session.upgrades.spread_pistol {
        offsets.extend([SPREAD_PISTOL_FAN_OFFSET, -SPREAD_PISTOL_FAN_OFFSET]);
    }
    shoot(angle, &offsets)
}

/// Move and shoot for one frame. `blocker` is an extra solid box (the
/// merchant while shopping). Returns `true` if the player moved.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    player: &mut Player,
    input: &dyn InputSource,
    map: &TileMap,
    session: &Session,
    zombie: bool,
    blocker: Option<Rect>,
    delta_ms: f32,
    cues: &mut Vec<SoundCue>,
) -> bool {
    let moved = step(player, input, map, session, zombie, blocker, delta_ms, cues);

    player.shot_cooldown.tick(delta_ms);
    let aim = held_direction(input, Action::shooting);
    if aim != Vec2::ZERO {
        player.facing = facing_for(aim, player.facing);
        if !player.shot_cooldown.is_active() {
            world_setup::spawn_bullets(world, player_volley(player, session, aim.y.atan2(aim.x)));
            player.shot_cooldown.arm(shooting_delay(player, session));
            cues.push(SoundCue::Gunshot);
        }
    }
    moved
}

/// Movement only. Used on its own while the merchant is on screen.
#[allow(clippy::too_many_arguments)]
pub fn step(
    player: &mut Player,
    input: &dyn InputSource,
    map: &TileMap,
    session: &Session,
    zombie: bool,
    blocker: Option<Rect>,
    delta_ms: f32,
    cues: &mut Vec<SoundCue>,
) -> bool {
    player.footstep.tick(delta_ms);
    let direction = held_direction(input, Action::movement);
    if direction == Vec2::ZERO {
        return false;
    }
    player.facing = facing_for(direction, player.facing);

    let delta = movement_delta(direction, move_speed(player, session, zombie));
    let attempted = Player::bounds_at(player.position + delta);
    if map.blocks(&attempted) || blocker.is_some_and(|b| b.intersects(&attempted)) {
        return false;
    }
    player.position += delta;

    if !player.footstep.is_active() {
        player.frame = (player.frame + 1) % 4;
        player.footstep.arm(PLAYER_FOOTSTEP_DELAY_MS);
        cues.push(SoundCue::Footstep);
    }
    true
}

fn facing_for(direction: Vec2, current: Direction) -> Direction {
    if direction.x.abs() > direction.y.abs() {
        if direction.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if direction.y > 0.0 {
        Direction::Down
    } else if direction.y < 0.0 {
        Direction::Up
    } else {
        current
    }
}
