//! Cleanup system: despawns everything marked during the tick.

use hecs::{Entity, World};

/// Despawn each marked entity exactly once.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.sort_unstable();
    despawn_buffer.dedup();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
