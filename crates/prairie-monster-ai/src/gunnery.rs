//! Bullet patterns shared by bosses and the player.

use glam::Vec2;

use prairie_core::components::Bullet;
use prairie_core::constants::*;
use prairie_core::enums::BulletOwner;
use prairie_core::types::Rect;

/// Where a bullet fired from `shooter` starts: centred on the shooter.
pub fn muzzle(shooter: &Rect) -> Vec2 {
    shooter.center() - Vec2::splat(BULLET_SIZE / 2.0)
}

/// Angle from `from` toward `to`. Straight down if they coincide.
pub fn aim_angle(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    if delta.length_squared() <= f32::EPSILON {
        std::f32::consts::FRAC_PI_2
    } else {
        delta.y.atan2(delta.x)
    }
}

/// One bullet per offset around `angle`.
pub fn fan(
    origin: Vec2,
    angle: f32,
    offsets: &[f32],
    speed: f32,
    damage: i32,
    owner: BulletOwner,
) -> Vec<Bullet> {
    offsets
        .iter()
        .map(|offset| Bullet::new(origin, Vec2::from_angle(angle + offset) * speed, damage, owner))
        .collect()
}

/// Enemy three-shot fan aimed at `target`.
pub fn enemy_fan(shooter: &Rect, target: Vec2) -> Vec<Bullet> {
    let origin = muzzle(shooter);
    let angle = aim_angle(shooter.center(), target);
    fan(
        origin,
        angle,
        &[0.0, ENEMY_FAN_OFFSET, -ENEMY_FAN_OFFSET],
        ENEMY_BULLET_SPEED,
        1,
        BulletOwner::Enemy,
    )
}

/// Single enemy bullet aimed at `target`.
pub fn enemy_shot(shooter: &Rect, target: Vec2) -> Bullet {
    let angle = aim_angle(shooter.center(), target);
    Bullet::new(
        muzzle(shooter),
        Vec2::from_angle(angle) * ENEMY_BULLET_SPEED,
        1,
        BulletOwner::Enemy,
    )
}

/// `count` enemy bullets evenly spaced around a circle, rotated by `offset`.
pub fn enemy_ring(shooter: &Rect, count: u32, offset: f32) -> Vec<Bullet> {
    let origin = muzzle(shooter);
    let step = std::f32::consts::TAU / count.max(1) as f32;
    (0..count)
        .map(|i| {
            let angle = i as f32 * step + offset;
            Bullet::new(
                origin,
                Vec2::from_angle(angle) * ENEMY_BULLET_SPEED,
                1,
                BulletOwner::Enemy,
            )
        })
        .collect()
}
