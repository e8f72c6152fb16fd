//! Simulation constants and tuning parameters.
//!
//! Values that a session may want to override live in
//! [`crate::config::TuningConfig`] and default to the constants here.

// --- Frame timing ---

/// Nominal frame rate the movement speeds are tuned for.
pub const TARGET_FPS: u32 = 60;

/// Nominal frame duration in milliseconds.
pub const TARGET_FRAME_MS: f32 = 1000.0 / TARGET_FPS as f32;

/// Largest frame delta fed to the timers. Longer frames are clamped.
pub const MAX_FRAME_DELTA_MS: f32 = 50.0;

// --- Map ---

/// Sprite tile edge before zoom.
pub const BASE_TILE_SIZE: f32 = 16.0;

/// Pixel zoom applied to every sprite.
pub const PIXEL_ZOOM: f32 = 3.0;

/// Tile edge in simulation pixels.
pub const TILE_SIZE: f32 = BASE_TILE_SIZE * PIXEL_ZOOM;

/// Map width in tiles.
pub const MAP_WIDTH: usize = 16;

/// Map height in tiles.
pub const MAP_HEIGHT: usize = 16;

/// Map edge length in pixels.
pub const MAP_PIXEL_SIZE: f32 = TILE_SIZE * MAP_WIDTH as f32;

/// First and second gate tile along every border.
pub const GATE_TILES: [usize; 2] = [7, 8];

// --- Player ---

/// Base movement per frame in pixels.
pub const PLAYER_SPEED: f32 = 3.0;

/// Inset of the collision box inside the player's tile-sized sprite.
pub const PLAYER_BOX_INSET: f32 = TILE_SIZE / 4.0;

/// Edge of the player's collision box.
pub const PLAYER_BOX_SIZE: f32 = TILE_SIZE / 2.0;

/// Spawn tile in regular waves.
pub const PLAYER_START_TILE: (f32, f32) = (7.0, 8.0);

/// Spawn tile in shootout waves (well below the boss).
pub const PLAYER_SHOOTOUT_TILE: (f32, f32) = (7.0, 12.0);

/// Spawn tile when walking into the shop.
pub const PLAYER_SHOP_TILE: (f32, f32) = (7.0, 12.0);

/// Delay between footstep sounds while walking.
pub const PLAYER_FOOTSTEP_DELAY_MS: f32 = 200.0;

/// Speed powerup movement multiplier.
pub const SPEED_POWERUP_MULTIPLIER: f32 = 1.5;

/// Zombie mode movement multiplier.
pub const ZOMBIE_SPEED_MULTIPLIER: f32 = 1.5;

/// Movement bonus per purchased run-speed level.
pub const RUN_SPEED_LEVEL_BONUS: f32 = 0.25;

// --- Shooting ---

/// Base cooldown between shots.
pub const SHOOTING_DELAY_MS: f32 = 300.0;

/// Rapid fire divides the cooldown by this.
pub const RAPID_FIRE_DIVISOR: f32 = 4.0;

/// Cooldown reduction per purchased fire-speed level.
pub const FIRE_SPEED_LEVEL_REDUCTION: f32 = 0.15;

/// Cooldown floor.
pub const MIN_SHOOTING_DELAY_MS: f32 = 20.0;

/// Player bullet travel per frame.
pub const PLAYER_BULLET_SPEED: f32 = 23.0;

/// Enemy bullet travel per frame.
pub const ENEMY_BULLET_SPEED: f32 = 6.0;

/// Edge of a bullet's collision box.
pub const BULLET_SIZE: f32 = 12.0;

/// Bullets despawn after this long even if they never hit anything.
pub const BULLET_LIFETIME_MS: f32 = 4000.0;

/// Angular offset of the Spread powerup siblings.
pub const SPREAD_FAN_OFFSET: f32 = 0.25;

/// Angular offset of the Shotgun siblings.
pub const SHOTGUN_FAN_OFFSET: f32 = 0.2;

/// Angular offset of the spread pistol siblings.
pub const SPREAD_PISTOL_FAN_OFFSET: f32 = 0.1;

/// Angular offset of boss fan shots.
pub const ENEMY_FAN_OFFSET: f32 = 0.2;

// --- Session ---

/// Lives at the start of a session.
pub const STARTING_LIVES: i32 = 3;

/// Delay between death and respawn or game over.
pub const DEATH_DELAY_MS: f32 = 3000.0;

/// Invincibility after respawning.
pub const PLAYER_INVINCIBLE_MS: f32 = 5000.0;

/// Wave time given back when the player dies.
pub const DEATH_WAVE_TIME_REFUND_MS: f32 = 10_000.0;

/// Length of a regular wave.
pub const WAVE_DURATION_MS: f32 = 80_000.0;

/// Breather between waves.
pub const BETWEEN_WAVE_MS: f32 = 5000.0;

/// Waves in one full cycle (three worlds of four waves).
pub const WAVES_PER_CYCLE: u32 = 12;

/// Waves per world.
pub const WAVES_PER_WORLD: u32 = 4;

/// Length of the ending sequence before the next round starts.
pub const END_CUTSCENE_MS: f32 = 6000.0;

// --- Spawning ---

/// Ambient spawn probability per frame while monsters are alive.
pub const AMBIENT_SPAWN_CHANCE_BUSY: f64 = 0.02;

/// Ambient spawn probability per frame while the field is empty.
pub const AMBIENT_SPAWN_CHANCE_IDLE: f64 = 0.10;

/// Spawn-point tries before an ambient spawn is abandoned.
pub const AMBIENT_SPAWN_RETRIES: u32 = 10;

/// Cap on live monsters.
pub const MAX_LIVE_MONSTERS: usize = 15;

/// Cap on monsters queued by a single spawn roll.
pub const MAX_SPAWN_GROUP: u32 = 15;

/// Delay between members of one spawn group.
pub const SPAWN_GROUP_STAGGER_MS: f32 = 400.0;

/// Requeue delay for a matured spawn whose spot is blocked.
pub const BLOCKED_SPAWN_RETRY_MS: f32 = 200.0;

/// Number of per-side spawn queues.
pub const SPAWN_QUADRANTS: usize = 4;

// --- Monsters ---

/// Hit-flash duration; movement freezes while it runs.
pub const MONSTER_HIT_FLASH_MS: f32 = 100.0;

/// Frames without displacement before a ground monster re-targets.
pub const RETARGET_STALL_TICKS: u32 = 20;

/// Rejection-sampling budget for a random target.
pub const RETARGET_TRIES: u32 = 5;

/// Per-frame probability of a spontaneous re-target.
pub const RANDOM_RETARGET_CHANCE: f64 = 0.002;

/// Per-frame probability that a monster flips its axis preference.
pub const OPPOSITE_MOTION_FLIP_CHANCE: f64 = 0.001;

/// Chance that an Orc or Mummy spawns uninterested in the player.
pub const UNINTERESTED_CHANCE: f64 = 0.25;

/// Chance that an uninterested monster starts chasing after reaching a target.
pub const BECOME_INTERESTED_CHANCE: f64 = 0.5;

/// Flyer acceleration change per frame per axis.
pub const FLIGHT_ACCELERATION: f32 = 0.1;

/// Acceleration multiplier when a flyer homes diagonally.
pub const FLIGHT_DIAGONAL_MULTIPLIER: f32 = 1.5;

/// Random targets are drawn from tiles `MIN..MIN + SPAN` on each axis.
pub const RANDOM_TARGET_MIN_TILE: u32 = 2;

/// See [`RANDOM_TARGET_MIN_TILE`].
pub const RANDOM_TARGET_SPAN: u32 = 12;

/// Frames in the Spikey forming animation.
pub const SPIKEY_FORMING_FRAMES: u32 = 3;

/// Duration of one Spikey forming frame.
pub const SPIKEY_FORMING_FRAME_MS: f32 = 60.0;

/// Health added when a Spikey becomes a trap.
pub const SPIKEY_TRAP_HEALTH_BONUS: i32 = 5;

/// Walk animation frame duration before the speed adjustment.
pub const MONSTER_ANIMATION_BASE_MS: f32 = 500.0;

/// Walk animation speed-up per point of speed.
pub const MONSTER_ANIMATION_PER_SPEED_MS: f32 = 50.0;

/// Walk animation frame duration floor.
pub const MONSTER_ANIMATION_MIN_MS: f32 = 100.0;

// --- Dracula ---

pub const DRACULA_HEALTH: i32 = 350;
pub const DRACULA_SPEED: f32 = 2.0;
pub const DRACULA_HOME_TILE: (f32, f32) = (7.0, 5.0);
pub const DRACULA_GLOAT_MS: f32 = 4000.0;
pub const DRACULA_WALK_MS: f32 = 6000.0;
pub const DRACULA_WALK_SHOT_MS: f32 = 1000.0;
pub const DRACULA_SPREAD_MS: f32 = 4000.0;
pub const DRACULA_SPREAD_SHOT_MS: f32 = 400.0;
pub const DRACULA_SUMMON_MS: f32 = 3000.0;

/// Summoned minions appear this many tiles from Dracula.
pub const DRACULA_SUMMON_RADIUS_TILES: f32 = 2.0;

// --- Outlaw ---

pub const OUTLAW_HEALTH_FIRST: i32 = 30;
pub const OUTLAW_HEALTH_SECOND: i32 = 50;
pub const OUTLAW_SPEED: f32 = 3.0;
pub const OUTLAW_HOME_TILE: (f32, f32) = (7.0, 2.0);
pub const OUTLAW_TALK_MS: f32 = 4000.0;
pub const OUTLAW_HIDE_MS: f32 = 1000.0;
pub const OUTLAW_DART_MS: f32 = 2000.0;
pub const OUTLAW_DART_SHOT_MS: f32 = 500.0;

/// How far the Outlaw darts sideways from home.
pub const OUTLAW_DART_TILES: f32 = 3.0;
pub const OUTLAW_RUN_MS: f32 = 3000.0;
pub const OUTLAW_RUN_SHOT_MS: f32 = 400.0;
pub const OUTLAW_PANT_BEAT_MS: f32 = 2000.0;

/// Beats in the run-gun-and-pant phase. The last beat is spent panting.
pub const OUTLAW_PANT_BEATS: u32 = 3;
pub const OUTLAW_AIM_MS: f32 = 2500.0;
pub const OUTLAW_AIM_SHOT_MS: f32 = 250.0;

// --- Powerups ---

/// Base duration of a timed effect.
pub const POWERUP_DURATION_MS: f32 = 10_000.0;

/// Extra time granted when a still-active effect is re-armed.
pub const POWERUP_REARM_GRACE_MS: f32 = 2000.0;

/// Dropped loot despawns after this long.
pub const LOOT_DURATION_MS: f32 = 7500.0;

/// Dropped loot blinks during its final stretch.
pub const LOOT_BLINK_MS: f32 = 2000.0;

/// Zombie mode duration.
pub const ZOMBIE_DURATION_MS: f32 = 8200.0;

/// Monster freeze after a teleport.
pub const CONFUSION_DURATION_MS: f32 = 4000.0;

/// Invincibility after a teleport.
pub const TELEPORT_INVINCIBLE_MS: f32 = 1000.0;

/// Destination tries before a teleport is abandoned.
pub const TELEPORT_TRIES: u32 = 10;

/// Sheriff multiplies each granted duration by this.
pub const SHERIFF_DURATION_MULTIPLIER: f32 = 2.0;

/// Damage a Nuke deals to every monster during a shootout.
pub const NUKE_BOSS_DAMAGE: i32 = 30;

/// Score for picking up a Skull.
pub const SKULL_SCORE: u32 = 2000;

/// Score for picking up a Log.
pub const LOG_SCORE: u32 = 1000;

/// Edge of a dropped pickup's collision box.
pub const PICKUP_SIZE: f32 = TILE_SIZE;

// --- Loot table ---

/// Chance of entering the coin branch.
pub const LOOT_COIN_BRANCH: f64 = 0.05;

/// Coin5 upgrade chance for anything but an Orc.
pub const LOOT_COIN5_NON_ORC: f64 = 0.10;

/// Unconditional Coin5 upgrade chance.
pub const LOOT_COIN5_ANY: f64 = 0.01;

/// Chance of entering the powerup branch.
pub const LOOT_POWERUP_BRANCH: f64 = 0.05;

/// Chance of a Speed/Shotgun bonus inside the powerup branch.
pub const LOOT_BONUS_ITEM: f64 = 0.15;

/// Chance of a Sheriff Star inside the powerup branch.
pub const LOOT_SHERIFF: f64 = 0.07;

/// Chance of rerolling a Life drop once.
pub const LOOT_LIFE_REROLL: f64 = 0.40;

// --- New Game Plus ---

/// Granted durations are multiplied by this once per round.
pub const NG_PLUS_DURATION_SCALE: f32 = 0.5;

/// Spawn chances are multiplied by this once per round.
pub const NG_PLUS_CHANCE_SCALE: f64 = 1.25;

// --- Shop ---

/// Map scroll while the merchant walks in.
pub const SHOP_SCROLL_MS: f32 = 1500.0;

/// Tile row holding the store items.
pub const SHOP_ITEM_ROW: f32 = 6.0;

/// First tile column holding a store item.
pub const SHOP_FIRST_ITEM_COLUMN: f32 = 6.0;

/// Merchant counter position in tiles.
pub const MERCHANT_TILE: (f32, f32) = (7.0, 4.0);
