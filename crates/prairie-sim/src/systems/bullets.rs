//! Bullet integration: position += motion each frame, expire on lifetime.

use hecs::{Entity, World};

use prairie_core::components::Bullet;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, delta_ms: f32) {
    for (entity, bullet) in world.query_mut::<&mut Bullet>() {
        bullet.position += bullet.motion;
        if bullet.lifetime.tick(delta_ms) {
            despawn_buffer.push(entity);
        }
    }
}
