//! Time-ordered queue of pending monster spawns.
//!
//! One min-heap per map side, keyed by absolute maturation time with an
//! insertion sequence as tie-breaker. The scheduler keeps its own clock.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use glam::Vec2;

use prairie_core::constants::*;
use prairie_core::enums::MonsterKind;

/// A spawn waiting for its maturation time.
#[derive(Debug, Clone, Copy)]
pub struct PendingSpawn {
    pub kind: MonsterKind,
    pub position: Vec2,
    pub matures_at_ms: f64,
    seq: u64,
}

impl PartialEq for PendingSpawn {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PendingSpawn {}

impl PartialOrd for PendingSpawn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingSpawn {
    // Reversed so the max-heap yields the earliest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .matures_at_ms
            .total_cmp(&self.matures_at_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpawnScheduler {
    queues: [BinaryHeap<PendingSpawn>; SPAWN_QUADRANTS],
    now_ms: f64,
    next_seq: u64,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `kind` to appear at `position` after `delay_ms`.
    pub fn schedule(&mut self, kind: MonsterKind, position: Vec2, delay_ms: f32) {
        let entry = PendingSpawn {
            kind,
            position,
            matures_at_ms: self.now_ms + f64::from(delay_ms.max(0.0)),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.queues[quadrant_of(position)].push(entry);
    }

    pub fn advance(&mut self, delta_ms: f32) {
        self.now_ms += f64::from(delta_ms.max(0.0));
    }

    /// Pop the earliest matured spawn across all sides, if any.
    pub fn poll_ready(&mut self) -> Option<(MonsterKind, Vec2)> {
        let now = self.now_ms;
        let queue = self
            .queues
            .iter_mut()
            .filter(|q| q.peek().is_some_and(|e| e.matures_at_ms <= now))
            .max_by(|a, b| match (a.peek(), b.peek()) {
                (Some(x), Some(y)) => x.cmp(y),
                _ => Ordering::Equal,
            })?;
        queue.pop().map(|entry| (entry.kind, entry.position))
    }

    /// True only when every side's queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(BinaryHeap::is_empty)
    }

    pub fn len(&self) -> usize {
        self.queues.iter().map(BinaryHeap::len).sum()
    }

    pub fn clear(&mut self) {
        for queue in &mut self.queues {
            queue.clear();
        }
    }
}

/// Side of the map nearest to `position`: 0 top, 1 right, 2 bottom, 3 left.
pub fn quadrant_of(position: Vec2) -> usize {
    let center = Vec2::splat((MAP_PIXEL_SIZE - TILE_SIZE) / 2.0);
    let offset = position - center;
    if offset.x.abs() > offset.y.abs() {
        if offset.x > 0.0 {
            1
        } else {
            3
        }
    } else if offset.y > 0.0 {
        2
    } else {
        0
    }
}
