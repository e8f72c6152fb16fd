//! Enumeration types used throughout the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start a session.
    #[default]
    StartMenu,
    /// A wave (regular or shootout) is in progress.
    Playing,
    /// Death delay after the player was struck.
    Died,
    /// Short breather after a wave is cleared.
    BetweenWaves,
    /// Merchant screen between worlds.
    Shopping,
    /// Out of lives.
    GameOver,
    /// Ending sequence after the final boss.
    EndCutscene,
}

/// Monster identity. Bosses are variants too; their phase data lives in the
/// monster's optional boss payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    #[default]
    Orc,
    Ghost,
    Ogre,
    Mummy,
    Devil,
    Mushroom,
    Spikey,
    Dracula,
    Outlaw,
}

impl MonsterKind {
    /// Kinds that can appear through spawn rolls, in spawn-chance table order.
    pub const REGULAR: [MonsterKind; 7] = [
        MonsterKind::Orc,
        MonsterKind::Ghost,
        MonsterKind::Ogre,
        MonsterKind::Mummy,
        MonsterKind::Devil,
        MonsterKind::Mushroom,
        MonsterKind::Spikey,
    ];

    pub fn is_boss(self) -> bool {
        matches!(self, MonsterKind::Dracula | MonsterKind::Outlaw)
    }

    /// Index into the spawn-chance table. `None` for bosses.
    pub fn chance_index(self) -> Option<usize> {
        Self::REGULAR.iter().position(|k| *k == self)
    }
}

/// How a monster moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locomotion {
    /// Discrete four-way stepping, blocked by terrain.
    #[default]
    Ground,
    /// Acceleration-based homing that ignores terrain.
    Flight,
}

/// Axis direction. Discriminants match the ground-stepping heading indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step in screen space (y grows downward).
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Angle in radians of `unit()`, measured with `atan2(y, x)`.
    pub fn angle(self) -> f32 {
        let u = self.unit();
        u.y.atan2(u.x)
    }
}

/// Powerup type. Story items use negative ids, everything else non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    Log,
    Skull,
    Heart,
    #[default]
    Coin1,
    Coin5,
    Spread,
    RapidFire,
    Nuke,
    Zombie,
    Speed,
    Shotgun,
    Life,
    Teleport,
    Sheriff,
}

impl PowerupKind {
    pub fn id(self) -> i32 {
        match self {
            PowerupKind::Log => -1,
            PowerupKind::Skull => -2,
            PowerupKind::Heart => -3,
            PowerupKind::Coin1 => 0,
            PowerupKind::Coin5 => 1,
            PowerupKind::Spread => 2,
            PowerupKind::RapidFire => 3,
            PowerupKind::Nuke => 4,
            PowerupKind::Zombie => 5,
            PowerupKind::Speed => 6,
            PowerupKind::Shotgun => 7,
            PowerupKind::Life => 8,
            PowerupKind::Teleport => 9,
            PowerupKind::Sheriff => 10,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        let kind = match id {
            -1 => PowerupKind::Log,
            -2 => PowerupKind::Skull,
            -3 => PowerupKind::Heart,
            0 => PowerupKind::Coin1,
            1 => PowerupKind::Coin5,
            2 => PowerupKind::Spread,
            3 => PowerupKind::RapidFire,
            4 => PowerupKind::Nuke,
            5 => PowerupKind::Zombie,
            6 => PowerupKind::Speed,
            7 => PowerupKind::Shotgun,
            8 => PowerupKind::Life,
            9 => PowerupKind::Teleport,
            10 => PowerupKind::Sheriff,
            _ => return None,
        };
        Some(kind)
    }

    /// Heart, Skull and Log: applied once, never held or timed.
    pub fn is_story(self) -> bool {
        self.id() < 0
    }

    /// Effects that apply on touch instead of going to the held slot.
    pub fn is_immediate(self) -> bool {
        self.is_story()
            || matches!(
                self,
                PowerupKind::Coin1 | PowerupKind::Coin5 | PowerupKind::Life
            )
    }

    /// Effects tracked in the active-effect table.
    pub fn is_timed(self) -> bool {
        matches!(
            self,
            PowerupKind::Spread | PowerupKind::RapidFire | PowerupKind::Speed | PowerupKind::Shotgun
        )
    }
}

/// Merchant stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreItem {
    #[default]
    FireSpeed1,
    FireSpeed2,
    FireSpeed3,
    RunSpeed1,
    RunSpeed2,
    Life,
    Ammo1,
    Ammo2,
    Ammo3,
    SpreadPistol,
    Star,
}

impl StoreItem {
    /// Price in coins.
    pub fn price(self) -> u32 {
        match self {
            StoreItem::FireSpeed1 => 10,
            StoreItem::FireSpeed2 => 20,
            StoreItem::FireSpeed3 => 30,
            StoreItem::RunSpeed1 => 8,
            StoreItem::RunSpeed2 => 20,
            StoreItem::Life => 10,
            StoreItem::Ammo1 => 15,
            StoreItem::Ammo2 => 30,
            StoreItem::Ammo3 => 45,
            StoreItem::SpreadPistol => 99,
            StoreItem::Star => 10,
        }
    }
}

/// The three map themes a cycle passes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldKind {
    #[default]
    Desert,
    Woods,
    Graveyard,
}

/// Map tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Barrier1,
    Barrier2,
    Rocky,
    #[default]
    Desert,
    Grassy,
    Cactus,
    Fence,
    Trench1,
    Trench2,
    Bridge,
}

impl Tile {
    /// Whether walkers (the player and ground monsters) may stand on this tile.
    pub fn is_passable(self) -> bool {
        matches!(
            self,
            Tile::Rocky | Tile::Desert | Tile::Grassy | Tile::Bridge
        )
    }
}

/// When the merchant shows up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopPolicy {
    EveryOtherWave,
    #[default]
    EveryFourthWave,
}

impl ShopPolicy {
    pub fn interval(self) -> u32 {
        match self {
            ShopPolicy::EveryOtherWave => 2,
            ShopPolicy::EveryFourthWave => 4,
        }
    }

    /// Whether the merchant appears before `wave` starts. Never before wave 0.
    pub fn shop_before(self, wave: u32) -> bool {
        wave > 0 && wave % self.interval() == 0
    }
}

/// Dracula's scripted phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraculaPhase {
    #[default]
    Gloating,
    WalkAndShoot,
    SpreadShot,
    SummonDemon,
    SummonMummy,
}

/// The Outlaw's scripted phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlawPhase {
    #[default]
    Talking,
    Hiding,
    DartAndShoot,
    RunAndGun,
    RunGunAndPant,
    ShootAtPlayer,
}

/// Spikey lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpikeyStage {
    /// Walking toward its chosen target.
    #[default]
    Roaming,
    /// Invisible while the trap forms.
    Forming,
    /// Stationary spike trap.
    Trap,
}

/// Who fired a bullet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    #[default]
    Player,
    Enemy,
}
