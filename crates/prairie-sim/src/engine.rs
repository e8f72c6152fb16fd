//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the session, the player and
//! the spawn queue, runs the phase machine and all systems, and produces a
//! `FrameSnapshot` per tick. Completely headless, so it can be driven from
//! tests with scripted input.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use prairie_core::commands::{Action, InputSource, InputState};
use prairie_core::components::{Monster, Pickup};
use prairie_core::config::TuningConfig;
use prairie_core::constants::*;
use prairie_core::enums::{GamePhase, PowerupKind, StoreItem};
use prairie_core::events::SoundCue;
use prairie_core::interfaces::{AssetHandles, AssetProvider, NullProgressSink, ProgressSink};
use prairie_core::map::TileMap;
use prairie_core::state::FrameSnapshot;
use prairie_core::types::{Countdown, SimTime};

use prairie_monster_ai::behavior::MonsterEffects;

use crate::player::Player;
use crate::scheduler::SpawnScheduler;
use crate::session::{world_for_wave, Session, Shootout};
use crate::shop::{self, StoreSlot};
use crate::systems;
use crate::systems::collision::CollisionContext;
use crate::systems::powerups::{GlobalEffects, PowerupContext};
use crate::systems::snapshot::FrameView;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed and input give the same frames.
    pub seed: u64,
    pub tuning: TuningConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: TuningConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tuning: TuningConfig,
    rng: ChaCha8Rng,
    map: TileMap,
    session: Session,
    player: Player,
    scheduler: SpawnScheduler,
    globals: GlobalEffects,
    wave_timer: Countdown,
    /// Death delay, between-wave pause or cutscene, depending on phase.
    phase_timer: Countdown,
    shop_scroll: Countdown,
    store: Vec<StoreSlot>,
    shootout: Option<Shootout>,
    boss_defeated: bool,
    assets: AssetHandles,
    progress_sink: Box<dyn ProgressSink + Send>,
    previous_input: InputState,
    despawn_buffer: Vec<Entity>,
    cues: Vec<SoundCue>,
    monster_effects: MonsterEffects,
}

impl SimulationEngine {
    /// Create an engine with default asset handles and a discarding
    /// progress sink.
    pub fn new(config: SimConfig) -> Self {
        Self::build(config, AssetHandles::default(), Box::new(NullProgressSink))
    }

    /// Create an engine wired to real collaborators. Asset names are
    /// resolved once, here.
    pub fn with_collaborators(
        config: SimConfig,
        assets: &dyn AssetProvider,
        progress_sink: Box<dyn ProgressSink + Send>,
    ) -> Self {
        Self::build(config, AssetHandles::resolve(assets), progress_sink)
    }

    fn build(config: SimConfig, assets: AssetHandles, progress_sink: Box<dyn ProgressSink + Send>) -> Self {
        let session = Session::new(config.tuning.starting_lives);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            map: TileMap::for_wave(0, session.world()),
            session,
            tuning: config.tuning,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: Player::default(),
            scheduler: SpawnScheduler::new(),
            globals: GlobalEffects::default(),
            wave_timer: Countdown::IDLE,
            phase_timer: Countdown::IDLE,
            shop_scroll: Countdown::IDLE,
            store: Vec::new(),
            shootout: None,
            boss_defeated: false,
            assets,
            progress_sink,
            previous_input: InputState::new(),
            despawn_buffer: Vec::new(),
            cues: Vec::new(),
            monster_effects: MonsterEffects::default(),
        }
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    pub fn tick(&mut self, input: &dyn InputSource, delta_ms: f32) -> FrameSnapshot {
        let delta_ms = delta_ms.min(self.tuning.max_frame_delta_ms).max(0.0);
        let input = InputState::capture(input);
        let confirm = self.pressed(&input, Action::Confirm);
        let use_item = self.pressed(&input, Action::UseItem);

        match self.phase {
            GamePhase::StartMenu => {
                if confirm {
                    self.enter_wave();
                }
            }
            GamePhase::Playing => self.run_systems(&input, use_item, delta_ms),
            GamePhase::Died => {
                if self.phase_timer.tick(delta_ms) {
                    self.finish_death();
                }
            }
            GamePhase::BetweenWaves => self.run_between_waves(&input, delta_ms),
            GamePhase::Shopping => self.run_shop(&input, delta_ms),
            GamePhase::EndCutscene => {
                if self.phase_timer.tick(delta_ms) {
                    self.start_next_round();
                }
            }
            GamePhase::GameOver => {
                if confirm {
                    self.reset();
                }
            }
        }

        self.previous_input = input;
        self.time.advance(delta_ms);
        self.snapshot()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn scheduler(&self) -> &SpawnScheduler {
        &self.scheduler
    }

    pub fn wave_timer(&self) -> Countdown {
        self.wave_timer
    }

    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    /// Jump straight into `wave` (for testing).
    #[cfg(test)]
    pub fn start_wave(&mut self, wave: u32) {
        self.session.wave = wave;
        self.enter_wave();
    }

    /// Spawn a monster at a tile (for testing).
    #[cfg(test)]
    pub fn spawn_test_monster(&mut self, kind: prairie_core::enums::MonsterKind, tile: (f32, f32)) -> Entity {
        let position = crate::player::tile_position(tile);
        world_setup::spawn_monster(&mut self.world, kind, position, &self.map, &mut self.rng)
    }

    #[cfg(test)]
    pub fn spawn_test_bullet(&mut self, bullet: prairie_core::components::Bullet) -> Entity {
        self.world.spawn((bullet,))
    }

    #[cfg(test)]
    pub fn spawn_test_pickup(&mut self, kind: PowerupKind, position: prairie_core::Vec2) -> Entity {
        world_setup::spawn_pickup(&mut self.world, kind, position)
    }

    #[cfg(test)]
    pub fn schedule_test_spawn(&mut self, kind: prairie_core::enums::MonsterKind, tile: (f32, f32), delay_ms: f32) {
        self.scheduler
            .schedule(kind, crate::player::tile_position(tile), delay_ms);
    }

    #[cfg(test)]
    pub fn set_wave_time(&mut self, ms: f32) {
        self.wave_timer.arm(ms);
    }

    /// Apply a powerup as if the player had used it (for testing).
    #[cfg(test)]
    pub fn activate_test_powerup(&mut self, kind: PowerupKind) -> bool {
        self.with_powerups(|ctx| systems::powerups::activate(kind, ctx))
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn map_mut(&mut self) -> &mut TileMap {
        &mut self.map
    }

    #[cfg(test)]
    pub fn store(&self) -> &[StoreSlot] {
        &self.store
    }

    fn pressed(&self, input: &InputState, action: Action) -> bool {
        input.is_held(action) && !self.previous_input.is_held(action)
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            info!(from = ?self.phase, to = ?phase, wave = self.session.wave, "phase transition");
            self.phase = phase;
        }
    }

    /// Borrow everything the powerup engine touches. A nuke that finishes
    /// a boss is carried back into the engine.
    fn with_powerups<R>(&mut self, f: impl FnOnce(&mut PowerupContext<'_>) -> R) -> R {
        let mut ctx = PowerupContext {
            world: &mut self.world,
            map: &self.map,
            player: &mut self.player,
            session: &mut self.session,
            globals: &mut self.globals,
            tuning: &self.tuning,
            shootout: self.shootout.is_some(),
            rng: &mut self.rng,
            cues: &mut self.cues,
            despawn_buffer: &mut self.despawn_buffer,
            boss_defeated: false,
        };
        let result = f(&mut ctx);
        if ctx.boss_defeated {
            self.boss_defeated = true;
        }
        result
    }

    fn resolve_collisions(&mut self) -> systems::collision::CollisionOutcome {
        let mut ctx = CollisionContext {
            map: &self.map,
            player: &self.player,
            session: &mut self.session,
            zombie: self.globals.zombie.is_active(),
            rng: &mut self.rng,
            cues: &mut self.cues,
            despawn_buffer: &mut self.despawn_buffer,
        };
        let outcome = systems::collision::run(&mut self.world, &mut ctx);
        if outcome.boss_defeated {
            self.boss_defeated = true;
        }
        outcome
    }

    fn collect_pickups(&mut self) {
        let collected =
            systems::collision::collect_pickups(&self.world, &mut self.player, &mut self.despawn_buffer);
        if collected.is_empty() {
            return;
        }
        self.with_powerups(|ctx| {
            for pickup in collected {
                systems::powerups::collect(pickup, ctx);
            }
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputState, use_item: bool, delta_ms: f32) {
        let zombie = self.globals.zombie.is_active();
        // 1. Player movement and shooting
        systems::player::run(
            &mut self.world,
            &mut self.player,
            input,
            &self.map,
            &self.session,
            zombie,
            None,
            delta_ms,
            &mut self.cues,
        );
        // 2. Held item
        if use_item {
            self.with_powerups(systems::powerups::use_held_item);
        }
        // 3. Wave clock and spawn rolls
        self.wave_timer.tick(delta_ms);
        if self.shootout.is_none() && self.wave_timer.is_active() {
            systems::spawning::roll_groups(&self.session, &mut self.scheduler, &mut self.rng);
            systems::spawning::roll_ambient(
                &mut self.world,
                &self.session,
                &self.map,
                &self.tuning,
                &mut self.rng,
            );
        }
        // 4. Spawn queue
        systems::spawning::drain_queue(
            &mut self.world,
            &mut self.scheduler,
            &self.map,
            &self.tuning,
            &mut self.rng,
            delta_ms,
        );
        // 5. Monster behavior
        systems::monsters::run(
            &mut self.world,
            &self.map,
            self.player.position,
            self.globals.timers(),
            &mut self.rng,
            &mut self.monster_effects,
            &mut self.scheduler,
            &mut self.cues,
            &mut self.despawn_buffer,
            delta_ms,
        );
        // 6. Bullet integration
        systems::bullets::run(&mut self.world, &mut self.despawn_buffer, delta_ms);
        // 7. Collisions
        let outcome = self.resolve_collisions();
        // 8. Pickups
        self.collect_pickups();
        // 9. Effect timers
        systems::powerups::tick(
            &mut self.world,
            &mut self.player,
            &mut self.globals,
            &mut self.despawn_buffer,
            delta_ms,
        );
        // 10. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        if outcome.player_hit {
            self.enter_died();
        } else if self.wave_complete() {
            self.enter_between_waves();
        }
    }

    fn wave_complete(&self) -> bool {
        match self.shootout {
            Some(_) => self.boss_defeated,
            None => {
                !self.wave_timer.is_active()
                    && self.scheduler.is_empty()
                    && world_setup::monster_count(&self.world) == 0
            }
        }
    }

    /// Load the current wave's map and start it.
    fn enter_wave(&mut self) {
        let wave = self.session.wave;
        let world = self.session.world();
        if !TileMap::has_layout(wave) {
            debug!(wave, "no dedicated layout, using the open field");
        }
        self.map = TileMap::for_wave(wave, world);
        world_setup::clear_wave(&mut self.world);
        self.scheduler.clear();
        self.despawn_buffer.clear();
        self.shootout = Shootout::for_wave(wave);
        self.boss_defeated = false;

        match self.shootout {
            Some(shootout) => {
                self.wave_timer.clear();
                world_setup::spawn_boss(&mut self.world, shootout);
                self.player.respawn_at(PLAYER_SHOOTOUT_TILE);
            }
            None => {
                self.wave_timer.arm(self.tuning.wave_duration_ms);
                self.player.respawn_at(PLAYER_START_TILE);
            }
        }
        self.player.shot_cooldown.clear();

        info!(
            wave,
            round = self.session.round,
            ?world,
            shootout = ?self.shootout,
            "wave started"
        );
        self.set_phase(GamePhase::Playing);
    }

    fn enter_died(&mut self) {
        self.player.effects.clear();
        self.globals.clear();
        world_setup::clear_enemy_bullets(&mut self.world);
        if self.shootout.is_none() {
            world_setup::clear::<Monster>(&mut self.world);
            world_setup::clear::<Pickup>(&mut self.world);
            self.scheduler.clear();
            let refunded = self.wave_timer.remaining_ms() + DEATH_WAVE_TIME_REFUND_MS;
            self.wave_timer.arm(refunded.min(self.tuning.wave_duration_ms));
        }

        self.session.lives -= 1;
        self.save_progress();
        self.cues.push(SoundCue::PlayerDeath);
        self.phase_timer.arm(self.tuning.death_delay_ms);
        info!(lives = self.session.lives, wave = self.session.wave, "player died");
        self.set_phase(GamePhase::Died);
    }

    fn finish_death(&mut self) {
        if self.session.lives < 0 {
            self.cues.push(SoundCue::GameOver);
            info!(score = self.session.score, "game over");
            self.set_phase(GamePhase::GameOver);
            return;
        }
        let tile = if self.shootout.is_some() {
            PLAYER_SHOOTOUT_TILE
        } else {
            PLAYER_START_TILE
        };
        self.player.respawn_at(tile);
        self.player.invincible.arm(PLAYER_INVINCIBLE_MS);
        self.set_phase(GamePhase::Playing);
    }

    fn enter_between_waves(&mut self) {
        if self.shootout.is_some() {
            world_setup::clear::<Monster>(&mut self.world);
            self.scheduler.clear();
        }
        world_setup::clear_enemy_bullets(&mut self.world);
        info!(wave = self.session.wave, score = self.session.score, "wave cleared");
        self.cues.push(SoundCue::WaveCleared);
        self.save_progress();
        self.phase_timer.arm(self.tuning.between_wave_ms);
        self.set_phase(GamePhase::BetweenWaves);
    }

    fn run_between_waves(&mut self, input: &InputState, delta_ms: f32) {
        systems::player::run(
            &mut self.world,
            &mut self.player,
            input,
            &self.map,
            &self.session,
            self.globals.zombie.is_active(),
            None,
            delta_ms,
            &mut self.cues,
        );
        systems::bullets::run(&mut self.world, &mut self.despawn_buffer, delta_ms);
        // Nothing hostile is left, so only bullet removal matters here.
        self.resolve_collisions();
        self.collect_pickups();
        systems::powerups::tick(
            &mut self.world,
            &mut self.player,
            &mut self.globals,
            &mut self.despawn_buffer,
            delta_ms,
        );
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        if !self.phase_timer.tick(delta_ms) {
            return;
        }
        if self.shootout.is_some_and(Shootout::is_final) {
            self.enter_end_cutscene();
            return;
        }
        self.session.wave += 1;
        self.session.chances.advance_to_wave(self.session.wave);
        if self.tuning.shop_policy.shop_before(self.session.wave) {
            self.enter_shopping();
        } else {
            self.enter_wave();
        }
    }

    fn enter_shopping(&mut self) {
        world_setup::clear_wave(&mut self.world);
        self.scheduler.clear();
        self.despawn_buffer.clear();
        self.wave_timer.clear();
        self.shootout = None;

        // The merchant sets up in the world just finished.
        let world = world_for_wave(self.session.wave.saturating_sub(1));
        self.map = TileMap::shop(world);
        self.player.respawn_at(PLAYER_SHOP_TILE);
        self.shop_scroll.arm(SHOP_SCROLL_MS);
        self.store = shop::build_store(world, &self.session.upgrades, self.session.round);
        info!(coins = self.session.coins, stock = ?self.store.iter().map(|s| s.item).collect::<Vec<_>>(), "merchant open");
        self.set_phase(GamePhase::Shopping);
    }

    fn run_shop(&mut self, input: &InputState, delta_ms: f32) {
        let outcome = systems::shop::run(
            &mut self.player,
            &mut self.store,
            &mut self.session,
            input,
            &self.map,
            &mut self.shop_scroll,
            delta_ms,
            &mut self.cues,
        );
        if let Some(item) = outcome.bought {
            info!(?item, coins = self.session.coins, "purchase");
            if item == StoreItem::Star {
                self.grant_star();
            }
        }
        if outcome.exit {
            self.store.clear();
            self.enter_wave();
        }
    }

    /// The star goes into an empty held slot, otherwise it fires at once.
    fn grant_star(&mut self) {
        if self.session.held_item.is_none() {
            self.session.held_item = Some(PowerupKind::Sheriff);
        } else {
            self.with_powerups(|ctx| systems::powerups::activate(PowerupKind::Sheriff, ctx));
        }
    }

    fn enter_end_cutscene(&mut self) {
        world_setup::clear_wave(&mut self.world);
        self.scheduler.clear();
        self.despawn_buffer.clear();
        self.phase_timer.arm(END_CUTSCENE_MS);
        info!(round = self.session.round, score = self.session.score, "cycle complete");
        self.set_phase(GamePhase::EndCutscene);
    }

    fn start_next_round(&mut self) {
        self.session
            .apply_new_game_plus(self.tuning.ng_plus_duration_scale, self.tuning.ng_plus_chance_scale);
        info!(
            round = self.session.round,
            duration_scale = self.session.difficulty.duration_scale,
            chance_scale = self.session.difficulty.chance_scale,
            "new game plus"
        );
        self.enter_wave();
    }

    /// Full re-initialisation back to the start menu. The RNG keeps running.
    fn reset(&mut self) {
        self.world = World::new();
        self.session = Session::new(self.tuning.starting_lives);
        self.map = TileMap::for_wave(0, self.session.world());
        self.player = Player::default();
        self.scheduler.clear();
        self.globals.clear();
        self.wave_timer.clear();
        self.phase_timer.clear();
        self.shop_scroll.clear();
        self.store.clear();
        self.shootout = None;
        self.boss_defeated = false;
        self.despawn_buffer.clear();
        self.set_phase(GamePhase::StartMenu);
    }

    fn save_progress(&mut self) {
        self.progress_sink.save(&self.session.progress());
    }

    fn snapshot(&mut self) -> FrameSnapshot {
        let cues = std::mem::take(&mut self.cues);
        let view = FrameView {
            world: &self.world,
            time: self.time,
            phase: self.phase,
            session: &self.session,
            player: &self.player,
            map: &self.map,
            store: &self.store,
            wave_timer: self.wave_timer,
            wave_duration_ms: self.tuning.wave_duration_ms,
            globals: &self.globals,
            assets: &self.assets,
            shootout: self.shootout,
        };
        systems::snapshot::build_snapshot(&view, cues)
    }
}
