//! Loot table.

use rand::{Rng, RngCore};

use prairie_core::components::{BossState, Monster};
use prairie_core::constants::*;
use prairie_core::enums::{MonsterKind, PowerupKind};

/// Ids the uniform powerup draw picks from (Spread through Teleport).
const BUFF_IDS: std::ops::RangeInclusive<i32> = 2..=9;

/// Ids of the Speed/Shotgun bonus draw.
const BONUS_IDS: std::ops::RangeInclusive<i32> = 6..=7;

/// What a freshly killed monster drops, if anything.
pub fn loot_roll(monster: &Monster, rng: &mut dyn RngCore) -> Option<PowerupKind> {
    match (monster.kind, monster.boss) {
        (MonsterKind::Dracula, _) => Some(PowerupKind::Log),
        (MonsterKind::Outlaw, Some(BossState::Outlaw(state))) if state.encounter > 1 => {
            Some(PowerupKind::Skull)
        }
        (MonsterKind::Outlaw, _) => Some(PowerupKind::Heart),
        (MonsterKind::Spikey, _) if monster.special => Some(PowerupKind::Log),
        (kind, _) => roll_table(kind, rng),
    }
}

/// The shared drop table for regular monsters.
///
/// A coin branch, then an independent powerup branch. Inside the powerup
/// branch a Life draw is rerolled once with probability
/// [`LOOT_LIFE_REROLL`].
pub fn roll_table(kind: MonsterKind, rng: &mut dyn RngCore) -> Option<PowerupKind> {
    if rng.gen_bool(LOOT_COIN_BRANCH) {
        if kind != MonsterKind::Orc && rng.gen_bool(LOOT_COIN5_NON_ORC) {
            return Some(PowerupKind::Coin5);
        }
        if rng.gen_bool(LOOT_COIN5_ANY) {
            return Some(PowerupKind::Coin5);
        }
        return Some(PowerupKind::Coin1);
    }

    if rng.gen_bool(LOOT_POWERUP_BRANCH) {
        if rng.gen_bool(LOOT_BONUS_ITEM) {
            return PowerupKind::from_id(rng.gen_range(BONUS_IDS));
        }
        if rng.gen_bool(LOOT_SHERIFF) {
            return Some(PowerupKind::Sheriff);
        }
        let mut id = rng.gen_range(BUFF_IDS);
        if id == PowerupKind::Life.id() && rng.gen_bool(LOOT_LIFE_REROLL) {
            id = rng.gen_range(BUFF_IDS);
        }
        return PowerupKind::from_id(id);
    }

    None
}
