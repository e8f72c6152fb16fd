//! Session state: lives, wallet, upgrades, wave progression and the
//! spawn-chance table.
//!
//! Stored on `SimulationEngine`, NOT as ECS entities.

use rand::Rng;

use prairie_core::components::BossState;
use prairie_core::constants::*;
use prairie_core::enums::{MonsterKind, PowerupKind, WorldKind};
use prairie_core::interfaces::Progress;

/// Spawn odds for one monster kind.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnChance {
    /// Per-tick probability that a group of this kind is scheduled.
    pub base: f64,
    /// Probability, rolled repeatedly, that the group grows by one more.
    pub extra: f64,
}

impl SpawnChance {
    pub const NONE: SpawnChance = SpawnChance { base: 0.0, extra: 0.0 };

    pub const fn new(base: f64, extra: f64) -> Self {
        Self { base, extra }
    }

    fn grow(&mut self, base: f64, extra: f64) {
        self.base += base;
        self.extra += extra;
    }

    fn is_none(&self) -> bool {
        self.base == 0.0 && self.extra == 0.0
    }
}

/// Spawn chances indexed by [`MonsterKind::chance_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChanceTable {
    chances: [SpawnChance; 7],
}

impl Default for ChanceTable {
    fn default() -> Self {
        let mut chances = [SpawnChance::NONE; 7];
        chances[0] = SpawnChance::new(0.014, 0.4);
        Self { chances }
    }
}

impl ChanceTable {
    pub fn get(&self, kind: MonsterKind) -> SpawnChance {
        kind.chance_index()
            .and_then(|i| self.chances.get(i).copied())
            .unwrap_or(SpawnChance::NONE)
    }

    fn slot(&mut self, kind: MonsterKind) -> Option<&mut SpawnChance> {
        kind.chance_index().and_then(|i| self.chances.get_mut(i))
    }

    pub fn set(&mut self, kind: MonsterKind, chance: SpawnChance) {
        if let Some(slot) = self.slot(kind) {
            *slot = chance;
        }
    }

    fn grow(&mut self, kind: MonsterKind, base: f64, extra: f64) {
        if let Some(slot) = self.slot(kind) {
            slot.grow(base, extra);
        }
    }

    fn introduce(&mut self, kind: MonsterKind, initial: SpawnChance) {
        if let Some(slot) = self.slot(kind) {
            if slot.is_none() {
                *slot = initial;
            }
        }
    }

    /// Update the table as the session enters `wave`.
    pub fn advance_to_wave(&mut self, wave: u32) {
        use MonsterKind::*;
        match wave {
            1..=3 => {
                self.grow(Orc, 0.001, 0.02);
                if wave > 1 {
                    self.grow(Ogre, 0.001, 0.01);
                }
                self.grow(Spikey, 0.001, 0.01);
            }
            4..=7 => {
                self.introduce(Mushroom, SpawnChance::new(0.01, 0.15));
                self.set(Orc, SpawnChance::NONE);
                self.set(Spikey, SpawnChance::NONE);
                self.grow(Ogre, 0.002, 0.02);
                self.grow(Mushroom, 0.001, 0.02);
                self.grow(Ghost, 0.0018, 0.08);
            }
            8..=11 => {
                self.set(Mushroom, SpawnChance::NONE);
                self.set(Ghost, SpawnChance::NONE);
                self.set(Ogre, SpawnChance::NONE);
                self.introduce(Mummy, SpawnChance::new(0.012, 0.4));
                self.introduce(Devil, SpawnChance::new(0.003, 0.1));
                self.grow(Mummy, 0.002, 0.05);
                self.grow(Devil, 0.0015, 0.04);
                if wave == 11 {
                    self.grow(Devil, 0.01, 0.04);
                    self.grow(Mummy, -0.01, 0.04);
                }
            }
            _ => {}
        }
    }

    /// Kind for an ambient spawn, weighted by base chance. Orcs when the
    /// table is empty.
    pub fn weighted_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> MonsterKind {
        let total: f64 = self.chances.iter().map(|c| c.base.max(0.0)).sum();
        if total <= 0.0 {
            return MonsterKind::Orc;
        }
        let mut roll = rng.gen_range(0.0..total);
        for (kind, chance) in MonsterKind::REGULAR.iter().zip(self.chances.iter()) {
            let weight = chance.base.max(0.0);
            if roll < weight {
                return *kind;
            }
            roll -= weight;
        }
        MonsterKind::Orc
    }

    pub fn iter(&self) -> impl Iterator<Item = (MonsterKind, SpawnChance)> + '_ {
        MonsterKind::REGULAR.iter().copied().zip(self.chances.iter().copied())
    }
}

/// New-Game-Plus difficulty. Both scales compound once per completed cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Multiplier on newly granted effect durations.
    pub duration_scale: f32,
    /// Multiplier on per-tick spawn chances.
    pub chance_scale: f64,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            duration_scale: 1.0,
            chance_scale: 1.0,
        }
    }
}

impl Difficulty {
    pub fn compound(&mut self, duration_factor: f32, chance_factor: f64) {
        self.duration_scale *= duration_factor;
        self.chance_scale *= chance_factor;
    }
}

/// Merchant upgrades bought this session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Upgrades {
    pub fire_speed: u8,
    pub run_speed: u8,
    pub ammo: u8,
    pub spread_pistol: bool,
}

/// Everything that survives between waves.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub lives: i32,
    pub coins: u32,
    pub score: u32,
    /// Index within the current cycle, 0..=11.
    pub wave: u32,
    /// Completed cycles.
    pub round: u32,
    pub held_item: Option<PowerupKind>,
    pub upgrades: Upgrades,
    pub chances: ChanceTable,
    pub difficulty: Difficulty,
}

impl Session {
    pub fn new(starting_lives: i32) -> Self {
        Self {
            lives: starting_lives,
            coins: 0,
            score: 0,
            wave: 0,
            round: 0,
            held_item: None,
            upgrades: Upgrades::default(),
            chances: ChanceTable::default(),
            difficulty: Difficulty::default(),
        }
    }

    pub fn world(&self) -> WorldKind {
        world_for_wave(self.wave)
    }

    pub fn bullet_damage(&self) -> i32 {
        1 + i32::from(self.upgrades.ammo)
    }

    /// Finish a cycle: bump the round, compound difficulty and restart the
    /// spawn table at wave 0.
    pub fn apply_new_game_plus(&mut self, duration_factor: f32, chance_factor: f64) {
        self.round += 1;
        self.wave = 0;
        self.difficulty.compound(duration_factor, chance_factor);
        self.chances = ChanceTable::default();
    }

    pub fn progress(&self) -> Progress {
        Progress {
            wave: self.wave,
            round: self.round,
            world: self.world(),
            lives: self.lives,
            coins: self.coins,
            score: self.score,
            held_item: self.held_item,
            fire_speed_level: self.upgrades.fire_speed,
            run_speed_level: self.upgrades.run_speed,
            ammo_level: self.upgrades.ammo,
            spread_pistol: self.upgrades.spread_pistol,
        }
    }
}

/// Which world a wave belongs to.
pub fn world_for_wave(wave: u32) -> WorldKind {
    match (wave % WAVES_PER_CYCLE) / WAVES_PER_WORLD {
        0 => WorldKind::Desert,
        1 => WorldKind::Woods,
        _ => WorldKind::Graveyard,
    }
}

/// The boss a shootout wave is fought against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shootout {
    Outlaw { encounter: u8 },
    Dracula,
}

impl Shootout {
    pub fn for_wave(wave: u32) -> Option<Shootout> {
        match wave {
            3 => Some(Shootout::Outlaw { encounter: 1 }),
            7 => Some(Shootout::Outlaw { encounter: 2 }),
            11 => Some(Shootout::Dracula),
            _ => None,
        }
    }

    pub fn kind(self) -> MonsterKind {
        match self {
            Shootout::Outlaw { .. } => MonsterKind::Outlaw,
            Shootout::Dracula => MonsterKind::Dracula,
        }
    }

    /// Whether beating this boss ends the cycle.
    pub fn is_final(self) -> bool {
        matches!(self, Shootout::Dracula)
    }
}

/// Short label of a boss's current phase, for the HUD.
pub fn boss_phase_label(boss: &BossState) -> String {
    match boss {
        BossState::Dracula(state) => format!("{:?}", state.phase),
        BossState::Outlaw(state) => format!("{:?}", state.phase),
    }
}
