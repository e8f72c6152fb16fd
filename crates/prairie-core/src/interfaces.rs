//! Collaborator contracts.
//!
//! The simulation never loads files, opens windows or plays audio. It talks
//! to its host through the traits in this module and describes rendering and
//! sound as plain data.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, MonsterKind, PowerupKind, StoreItem, Tile, WorldKind};
use crate::events::{MusicTrack, SoundCue};
use crate::types::Rect;

/// Opaque texture handle issued by the asset provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

/// Opaque sound handle issued by the asset provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundHandle(pub u32);

/// Opaque font handle issued by the asset provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontHandle(pub u32);

/// Opaque music handle issued by the asset provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MusicHandle(pub u32);

/// Resolves logical asset names to handles.
pub trait AssetProvider {
    fn texture(&self, name: &str) -> TextureHandle;
    fn sound(&self, name: &str) -> SoundHandle;
    fn font(&self, name: &str) -> FontHandle;
    fn music(&self, name: &str) -> MusicHandle;
}

/// Consumes draw requests.
pub trait Renderer {
    fn draw(&mut self, request: &DrawRequest);

    fn text(&mut self, _request: &TextRequest) {}
}

/// Plays one-shot sounds.
pub trait AudioTrigger {
    fn play(&mut self, sound: SoundHandle);
}

/// Receives progress snapshots at save points.
pub trait ProgressSink {
    fn save(&mut self, progress: &Progress);
}

/// Sink that drops everything.
#[derive(Debug, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn save(&mut self, _progress: &Progress) {}
}

/// Every handle the engine needs, resolved once up front.
#[derive(Debug, Clone, Default)]
pub struct AssetHandles {
    pub sprites: TextureHandle,
    pub font: FontHandle,
    sounds: Vec<SoundHandle>,
    music: Vec<MusicHandle>,
}

impl AssetHandles {
    pub const SPRITE_SHEET: &'static str = "cursors";
    pub const FONT: &'static str = "small_font";

    pub fn resolve(provider: &dyn AssetProvider) -> Self {
        Self {
            sprites: provider.texture(Self::SPRITE_SHEET),
            font: provider.font(Self::FONT),
            sounds: SoundCue::ALL
                .iter()
                .map(|cue| provider.sound(cue.asset_name()))
                .collect(),
            music: MusicTrack::ALL
                .iter()
                .map(|track| provider.music(track.asset_name()))
                .collect(),
        }
    }

    pub fn sound(&self, cue: SoundCue) -> SoundHandle {
        self.sounds.get(cue as usize).copied().unwrap_or_default()
    }

    pub fn music(&self, track: MusicTrack) -> MusicHandle {
        self.music.get(track as usize).copied().unwrap_or_default()
    }
}

/// RGBA modulation color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const WHITE: Tint = Tint::rgba(255, 255, 255, 255);
    pub const HIT_FLASH: Tint = Tint::rgba(255, 64, 64, 255);
    pub const FADED: Tint = Tint::rgba(255, 255, 255, 128);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Symbolic sprite-sheet region. Mapping to sheet coordinates is the
/// renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sprite")]
pub enum SpriteRegion {
    Tile { tile: Tile, world: WorldKind },
    Player { facing: Direction, frame: u8, zombie: bool },
    Monster { kind: MonsterKind, frame: u8, special: bool },
    Bullet { enemy: bool },
    Pickup { kind: PowerupKind },
    HeldItem { kind: PowerupKind },
    StoreItem { item: StoreItem },
    Merchant,
    HealthBar { fraction: f32 },
    WaveTimerBar { fraction: f32 },
}

/// One textured quad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub texture: TextureHandle,
    pub source: SpriteRegion,
    pub dest: Rect,
    pub rotation: f32,
    pub tint: Tint,
}

/// One line of HUD text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRequest {
    pub font: FontHandle,
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Session progress handed to the persistence collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub wave: u32,
    pub round: u32,
    pub world: WorldKind,
    pub lives: i32,
    pub coins: u32,
    pub score: u32,
    pub held_item: Option<PowerupKind>,
    pub fire_speed_level: u8,
    pub run_speed_level: u8,
    pub ammo_level: u8,
    pub spread_pistol: bool,
}
