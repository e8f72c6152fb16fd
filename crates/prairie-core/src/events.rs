//! Sound and music cues emitted by the simulation.
//!
//! Cues are logical; the engine resolves them to [`SoundHandle`]s through
//! the asset provider once at construction.
//!
//! [`SoundHandle`]: crate::interfaces::SoundHandle

use serde::{Deserialize, Serialize};

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Gunshot,
    EnemyGunshot,
    MonsterHit,
    MonsterDeath,
    PlayerDeath,
    Footstep,
    CoinPickup,
    PowerupPickup,
    ItemUsed,
    Explosion,
    Teleport,
    Purchase,
    BossGloat,
    WaveCleared,
    GameOver,
}

impl SoundCue {
    pub const ALL: [SoundCue; 15] = [
        SoundCue::Gunshot,
        SoundCue::EnemyGunshot,
        SoundCue::MonsterHit,
        SoundCue::MonsterDeath,
        SoundCue::PlayerDeath,
        SoundCue::Footstep,
        SoundCue::CoinPickup,
        SoundCue::PowerupPickup,
        SoundCue::ItemUsed,
        SoundCue::Explosion,
        SoundCue::Teleport,
        SoundCue::Purchase,
        SoundCue::BossGloat,
        SoundCue::WaveCleared,
        SoundCue::GameOver,
    ];

    /// Name handed to the asset provider.
    pub fn asset_name(self) -> &'static str {
        match self {
            SoundCue::Gunshot => "cowboy_gunshot",
            SoundCue::EnemyGunshot => "cowboy_enemy_gunshot",
            SoundCue::MonsterHit => "cowboy_monsterhit",
            SoundCue::MonsterDeath => "cowboy_monsterdie",
            SoundCue::PlayerDeath => "cowboy_dead",
            SoundCue::Footstep => "cowboy_footstep",
            SoundCue::CoinPickup => "cowboy_coin",
            SoundCue::PowerupPickup => "cowboy_powerup",
            SoundCue::ItemUsed => "cowboy_item_use",
            SoundCue::Explosion => "cowboy_explosion",
            SoundCue::Teleport => "cowboy_teleport",
            SoundCue::Purchase => "cowboy_purchase",
            SoundCue::BossGloat => "cowboy_boss_laugh",
            SoundCue::WaveCleared => "cowboy_wave_clear",
            SoundCue::GameOver => "cowboy_gameover",
        }
    }
}

/// Background music tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicTrack {
    #[default]
    Overworld,
    Outlaw,
    Zombie,
    Ending,
}

impl MusicTrack {
    pub const ALL: [MusicTrack; 4] = [
        MusicTrack::Overworld,
        MusicTrack::Outlaw,
        MusicTrack::Zombie,
        MusicTrack::Ending,
    ];

    pub fn asset_name(self) -> &'static str {
        match self {
            MusicTrack::Overworld => "cowboy_overworld",
            MusicTrack::Outlaw => "cowboy_outlawsong",
            MusicTrack::Zombie => "cowboy_zombies",
            MusicTrack::Ending => "cowboy_ending",
        }
    }
}
