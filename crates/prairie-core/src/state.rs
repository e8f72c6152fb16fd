//! Per-frame snapshot handed back to the host after every tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SoundCue;
use crate::interfaces::{DrawRequest, MusicHandle, SoundHandle, TextRequest};
use crate::types::{Rect, SimTime};

/// Complete view of one simulated frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub session: SessionView,
    pub player: PlayerView,
    pub monsters: Vec<MonsterView>,
    pub bullets: Vec<BulletView>,
    pub pickups: Vec<PickupView>,
    pub store: Vec<StoreItemView>,
    pub boss: Option<BossView>,
    pub draw_requests: Vec<DrawRequest>,
    pub text: Vec<TextRequest>,
    /// Logical cues fired this frame.
    pub cues: Vec<SoundCue>,
    /// The same cues resolved to handles, in order.
    pub sounds: Vec<SoundHandle>,
    /// Track that should be playing, if any.
    pub music: Option<MusicHandle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionView {
    pub wave: u32,
    pub round: u32,
    pub world: WorldKind,
    pub lives: i32,
    pub coins: u32,
    pub score: u32,
    pub held_item: Option<PowerupKind>,
    pub wave_time_remaining_ms: f32,
    /// 1.0 at wave start, 0.0 when the timer runs out.
    pub wave_time_fraction: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub bounds: Rect,
    pub facing: Direction,
    pub invincible: bool,
    pub zombie: bool,
    pub active_effects: Vec<EffectView>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: PowerupKind,
    pub remaining_ms: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonsterView {
    pub kind: MonsterKind,
    pub bounds: Rect,
    pub health: i32,
    pub invisible: bool,
    pub special: bool,
    pub flashing: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Vec2,
    pub owner: BulletOwner,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PickupView {
    pub kind: PowerupKind,
    pub position: Vec2,
    pub blinking: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoreItemView {
    pub item: StoreItem,
    pub price: u32,
    pub bounds: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub kind: MonsterKind,
    pub health: i32,
    pub full_health: i32,
    pub phase: String,
}
