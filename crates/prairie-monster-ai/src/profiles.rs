//! Per-kind monster profiles.
//!
//! Each kind has a fixed set of stats that drive creation and scoring.

use glam::Vec2;
use rand::{Rng, RngCore};

use prairie_core::components::{BossState, DraculaState, Monster, OutlawState};
use prairie_core::constants::*;
use prairie_core::enums::{Locomotion, MonsterKind};
use prairie_core::map::TileMap;

use crate::steering::random_target;

/// Stats for one monster kind.
#[derive(Debug, Clone, Copy)]
pub struct MonsterProfile {
    pub health: i32,
    pub speed: f32,
    pub locomotion: Locomotion,
    /// Awarded when the monster is killed.
    pub score: u32,
    /// May spawn wandering instead of chasing.
    pub can_be_uninterested: bool,
}

/// Get the profile for a monster kind.
pub fn get_profile(kind: MonsterKind) -> MonsterProfile {
    match kind {
        MonsterKind::Orc => MonsterProfile {
            health: 1,
            speed: 2.0,
            locomotion: Locomotion::Ground,
            score: 10,
            can_be_uninterested: true,
        },
        MonsterKind::Ghost => MonsterProfile {
            health: 1,
            speed: 3.0,
            locomotion: Locomotion::Flight,
            score: 10,
            can_be_uninterested: false,
        },
        MonsterKind::Ogre => MonsterProfile {
            health: 3,
            speed: 1.0,
            locomotion: Locomotion::Ground,
            score: 30,
            can_be_uninterested: false,
        },
        MonsterKind::Mummy => MonsterProfile {
            health: 6,
            speed: 1.0,
            locomotion: Locomotion::Ground,
            score: 60,
            can_be_uninterested: true,
        },
        MonsterKind::Devil => MonsterProfile {
            health: 3,
            speed: 3.0,
            locomotion: Locomotion::Flight,
            score: 30,
            can_be_uninterested: false,
        },
        MonsterKind::Mushroom => MonsterProfile {
            health: 2,
            speed: 3.0,
            locomotion: Locomotion::Ground,
            score: 20,
            can_be_uninterested: false,
        },
        MonsterKind::Spikey => MonsterProfile {
            health: 2,
            speed: 3.0,
            locomotion: Locomotion::Ground,
            score: 20,
            can_be_uninterested: false,
        },
        MonsterKind::Dracula => MonsterProfile {
            health: DRACULA_HEALTH,
            speed: DRACULA_SPEED,
            locomotion: Locomotion::Ground,
            score: 1000,
            can_be_uninterested: false,
        },
        MonsterKind::Outlaw => MonsterProfile {
            health: OUTLAW_HEALTH_FIRST,
            speed: OUTLAW_SPEED,
            locomotion: Locomotion::Ground,
            score: 500,
            can_be_uninterested: false,
        },
    }
}

/// Create a regular monster at `position`, rolling its personality flags.
///
/// Bosses should be created with [`create_dracula`] or [`create_outlaw`];
/// passing a boss kind here yields a boss without phase data.
pub fn create_monster(
    kind: MonsterKind,
    position: Vec2,
    map: &TileMap,
    rng: &mut dyn RngCore,
) -> Monster {
    let profile = get_profile(kind);
    let mut monster = Monster::new(kind, position, profile.health, profile.speed, profile.locomotion);
    monster.opposite_motion = rng.gen_bool(0.5);

    if profile.can_be_uninterested && rng.gen_bool(UNINTERESTED_CHANCE) {
        monster.uninterested = true;
        if let Some(target) = random_target(map, rng) {
            monster.target = target;
        }
    }

    if kind == MonsterKind::Spikey {
        if let Some(target) = random_target(map, rng) {
            monster.target = target;
        }
    }

    monster
}

/// Dracula, waiting at `home` in his gloating phase.
pub fn create_dracula(home: Vec2) -> Monster {
    let profile = get_profile(MonsterKind::Dracula);
    let mut monster = Monster::new(
        MonsterKind::Dracula,
        home,
        profile.health,
        profile.speed,
        profile.locomotion,
    );
    monster.boss = Some(BossState::Dracula(DraculaState::new(home)));
    monster
}

/// The Outlaw for his first or second shootout.
pub fn create_outlaw(home: Vec2, encounter: u8) -> Monster {
    let profile = get_profile(MonsterKind::Outlaw);
    let health = if encounter <= 1 {
        OUTLAW_HEALTH_FIRST
    } else {
        OUTLAW_HEALTH_SECOND
    };
    let mut monster = Monster::new(
        MonsterKind::Outlaw,
        home,
        health,
        profile.speed,
        profile.locomotion,
    );
    monster.boss = Some(BossState::Outlaw(OutlawState::new(home, encounter, health)));
    monster
}
