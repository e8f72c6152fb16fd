#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use prairie_core::components::{BossState, Monster};
    use prairie_core::constants::*;
    use prairie_core::enums::*;
    use prairie_core::map::TileMap;
    use prairie_core::types::{Countdown, Rect};

    use crate::behavior::{take_damage, update, GlobalTimers, MonsterContext, MonsterEffects, Occupancy};
    use crate::gunnery::{enemy_fan, enemy_ring};
    use crate::loot::{loot_roll, roll_table};
    use crate::profiles::{create_dracula, create_monster, create_outlaw, get_profile};
    use crate::steering::{accelerate_toward, choose_heading, walk};
    use crate::{dracula, outlaw, spikey};

    fn tile(col: f32, row: f32) -> Vec2 {
        Vec2::new(col * TILE_SIZE, row * TILE_SIZE)
    }

    struct Harness {
        map: TileMap,
        rng: ChaCha8Rng,
        effects: MonsterEffects,
        timers: GlobalTimers,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                map: TileMap::for_wave(0, WorldKind::Desert),
                rng: ChaCha8Rng::seed_from_u64(7),
                effects: MonsterEffects::default(),
                timers: GlobalTimers::default(),
            }
        }

        fn ctx(&mut self, player: Vec2) -> MonsterContext<'_> {
            MonsterContext {
                map: &self.map,
                player_position: player,
                occupancy: Occupancy::empty(),
                timers: self.timers,
                rng: &mut self.rng,
                effects: &mut self.effects,
            }
        }
    }

    fn orc_at(col: f32, row: f32) -> Monster {
        let profile = get_profile(MonsterKind::Orc);
        Monster::new(MonsterKind::Orc, tile(col, row), profile.health, profile.speed, profile.locomotion)
    }

    // ---- Profiles ----

    #[test]
    fn test_profiles_match_kind_table() {
        assert_eq!(get_profile(MonsterKind::Orc).health, 1);
        assert_eq!(get_profile(MonsterKind::Ogre).health, 3);
        assert_eq!(get_profile(MonsterKind::Mummy).health, 6);
        assert_eq!(get_profile(MonsterKind::Dracula).health, DRACULA_HEALTH);
        assert_eq!(get_profile(MonsterKind::Ghost).locomotion, Locomotion::Flight);
        assert_eq!(get_profile(MonsterKind::Devil).locomotion, Locomotion::Flight);
        assert_eq!(get_profile(MonsterKind::Spikey).locomotion, Locomotion::Ground);
        for kind in MonsterKind::REGULAR {
            let profile = get_profile(kind);
            assert!(profile.health > 0, "{kind:?} must spawn alive");
            assert!(profile.speed > 0.0, "{kind:?} must move");
            assert!(profile.score > 0);
        }
    }

    #[test]
    fn test_create_monster_is_alive_and_tile_sized() {
        let mut h = Harness::new();
        for kind in MonsterKind::REGULAR {
            let monster = create_monster(kind, tile(7.0, 0.0), &h.map, &mut h.rng);
            assert_eq!(monster.kind, kind);
            assert!(!monster.is_dead());
            assert_eq!(monster.bounds.size(), Vec2::splat(TILE_SIZE));
            assert!(monster.boss.is_none());
        }
    }

    #[test]
    fn test_outlaw_health_depends_on_encounter() {
        assert_eq!(create_outlaw(tile(7.0, 2.0), 1).health, OUTLAW_HEALTH_FIRST);
        assert_eq!(create_outlaw(tile(7.0, 2.0), 2).health, OUTLAW_HEALTH_SECOND);
    }

    // ---- Damage contract ----

    #[test]
    fn test_take_damage_reports_death_exactly_once() {
        for kind in MonsterKind::REGULAR {
            let profile = get_profile(kind);
            let mut monster = Monster::new(kind, tile(5.0, 5.0), profile.health, profile.speed, profile.locomotion);
            let mut deaths = 0;
            let mut last_health = monster.health;
            for _ in 0..20 {
                if take_damage(&mut monster, 1) {
                    deaths += 1;
                }
                assert!(monster.health <= last_health, "health must never rise");
                assert!(monster.health >= 0);
                last_health = monster.health;
            }
            assert_eq!(deaths, 1, "{kind:?} died {deaths} times");
            assert_eq!(monster.health, 0);
        }
    }

    #[test]
    fn test_overkill_clamps_to_zero() {
        let mut monster = orc_at(5.0, 5.0);
        assert!(take_damage(&mut monster, 99));
        assert_eq!(monster.health, 0);
        assert!(!take_damage(&mut monster, 99));
    }

    #[test]
    fn test_hit_arms_flash() {
        let mut monster = create_dracula(tile(7.0, 5.0));
        if let Some(BossState::Dracula(state)) = monster.boss.as_mut() {
            state.phase = DraculaPhase::WalkAndShoot;
        }
        assert!(!take_damage(&mut monster, 1));
        assert!(monster.flash.is_active());
    }

    #[test]
    fn test_gloating_dracula_ignores_damage() {
        let mut monster = create_dracula(tile(7.0, 5.0));
        assert!(!take_damage(&mut monster, 50));
        assert_eq!(monster.health, DRACULA_HEALTH);
        assert!(!monster.flash.is_active());
    }

    #[test]
    fn test_talking_outlaw_ignores_damage() {
        let mut monster = create_outlaw(tile(7.0, 2.0), 1);
        assert!(!take_damage(&mut monster, 10));
        assert_eq!(monster.health, OUTLAW_HEALTH_FIRST);
    }

    // ---- Steering ----

    #[test]
    fn test_heading_follows_dominant_axis() {
        let mut monster = orc_at(5.0, 5.0);
        monster.moved_last_turn = true;
        assert_eq!(choose_heading(&monster, tile(12.0, 6.0)), Direction::Right);
        assert_eq!(choose_heading(&monster, tile(1.0, 6.0)), Direction::Left);
        assert_eq!(choose_heading(&monster, tile(6.0, 12.0)), Direction::Down);
        assert_eq!(choose_heading(&monster, tile(4.0, 1.0)), Direction::Up);
    }

    #[test]
    fn test_stuck_monster_switches_axis() {
        let mut monster = orc_at(5.0, 5.0);
        monster.heading = Direction::Right;
        monster.moved_last_turn = false;
        // Target is right and below; right failed last frame, so go down.
        assert_eq!(choose_heading(&monster, tile(12.0, 8.0)), Direction::Down);

        monster.moved_last_turn = true;
        assert_eq!(choose_heading(&monster, tile(12.0, 8.0)), Direction::Right);
    }

    #[test]
    fn test_heading_kept_at_target() {
        let mut monster = orc_at(5.0, 5.0);
        monster.heading = Direction::Left;
        assert_eq!(choose_heading(&monster, tile(5.0, 5.0)), Direction::Left);
    }

    #[test]
    fn test_boxed_in_monster_never_moves() {
        let mut h = Harness::new();
        let mut monster = orc_at(5.0, 5.0);
        let start = monster.position();
        let neighbours = [
            Rect::at(tile(4.0, 5.0), Vec2::splat(TILE_SIZE)),
            Rect::at(tile(6.0, 5.0), Vec2::splat(TILE_SIZE)),
            Rect::at(tile(5.0, 4.0), Vec2::splat(TILE_SIZE)),
            Rect::at(tile(5.0, 6.0), Vec2::splat(TILE_SIZE)),
        ];
        for _ in 0..50 {
            let mut ctx = MonsterContext {
                map: &h.map,
                player_position: tile(10.0, 10.0),
                occupancy: Occupancy::new(&neighbours, None),
                timers: h.timers,
                rng: &mut h.rng,
                effects: &mut h.effects,
            };
            assert!(!walk(&mut monster, &mut ctx));
        }
        assert_eq!(monster.position(), start);
    }

    #[test]
    fn test_own_slot_does_not_block() {
        let mut h = Harness::new();
        let mut monster = orc_at(5.0, 5.0);
        let slots = [monster.bounds];
        let mut ctx = MonsterContext {
            map: &h.map,
            player_position: tile(10.0, 5.0),
            occupancy: Occupancy::new(&slots, Some(0)),
            timers: h.timers,
            rng: &mut h.rng,
            effects: &mut h.effects,
        };
        assert!(walk(&mut monster, &mut ctx));
    }

    #[test]
    fn test_terrain_blocks_walk() {
        let mut h = Harness::new();
        // Pressed against the west fence with the player beyond it.
        let mut monster = orc_at(1.0, 3.0);
        monster.heading = Direction::Left;
        monster.moved_last_turn = true;
        let mut ctx = h.ctx(tile(-4.0, 3.0));
        let moved = walk(&mut monster, &mut ctx);
        assert!(monster.bounds.x >= TILE_SIZE, "monster entered the fence");
        if !moved {
            assert!(!monster.moved_last_turn);
        }
    }

    #[test]
    fn test_zombie_mode_reverses_step() {
        let mut h = Harness::new();
        h.timers.zombie_mode = true;
        let mut monster = orc_at(7.0, 7.0);
        let start = monster.position();
        let mut ctx = h.ctx(tile(11.0, 7.0));
        if walk(&mut monster, &mut ctx) {
            let expected = start - monster.heading.unit() * monster.speed;
            assert_eq!(monster.position(), expected);
        }
    }

    #[test]
    fn test_flight_acceleration_diagonal_bonus() {
        let straight = accelerate_toward(Vec2::ZERO, Vec2::new(3.0, 0.0));
        assert!((straight.x - FLIGHT_ACCELERATION).abs() < 1e-6);
        assert_eq!(straight.y, 0.0);

        let diagonal = accelerate_toward(Vec2::ZERO, Vec2::new(2.0, -2.0));
        let expected = FLIGHT_ACCELERATION * FLIGHT_DIAGONAL_MULTIPLIER;
        assert!((diagonal.x - expected).abs() < 1e-6);
        assert!((diagonal.y + expected).abs() < 1e-6);
    }

    #[test]
    fn test_ghost_drifts_toward_player() {
        let mut h = Harness::new();
        let profile = get_profile(MonsterKind::Ghost);
        let mut ghost = Monster::new(MonsterKind::Ghost, tile(2.0, 7.0), 1, profile.speed, Locomotion::Flight);
        let start = ghost.position();
        for _ in 0..30 {
            let mut ctx = h.ctx(tile(12.0, 7.0));
            update(&mut ghost, TARGET_FRAME_MS, &mut ctx);
        }
        assert!(ghost.position().x > start.x);
    }

    // ---- Update contract ----

    #[test]
    fn test_confusion_freezes_monsters() {
        let mut h = Harness::new();
        h.timers.monster_confusion = true;
        let mut monster = orc_at(5.0, 5.0);
        let start = monster.position();
        for _ in 0..10 {
            let mut ctx = h.ctx(tile(10.0, 5.0));
            assert!(!update(&mut monster, TARGET_FRAME_MS, &mut ctx));
        }
        assert_eq!(monster.position(), start);
    }

    #[test]
    fn test_confusion_keeps_boss_clocks_running() {
        let mut h = Harness::new();
        h.timers.monster_confusion = true;
        let home = tile(7.0, 5.0);
        let mut monster = create_dracula(home);
        let frames = (DRACULA_GLOAT_MS / 50.0) as usize + 1;
        for _ in 0..frames {
            let mut ctx = h.ctx(tile(7.0, 12.0));
            update(&mut monster, 50.0, &mut ctx);
        }
        assert!(matches!(monster.boss, Some(BossState::Dracula(s)) if s.phase == DraculaPhase::WalkAndShoot));

        // Shots keep their cadence, but Dracula stays put.
        let frames = (DRACULA_WALK_SHOT_MS / 50.0) as usize + 1;
        for _ in 0..frames {
            let mut ctx = h.ctx(tile(7.0, 12.0));
            update(&mut monster, 50.0, &mut ctx);
        }
        assert!(!h.effects.bullets.is_empty());
        assert_eq!(monster.position(), home);
    }

    #[test]
    fn test_confused_outlaw_finishes_talking() {
        let mut h = Harness::new();
        h.timers.monster_confusion = true;
        let mut monster = create_outlaw(tile(7.0, 2.0), 1);
        let mut ctx = h.ctx(tile(7.0, 12.0));
        update(&mut monster, OUTLAW_TALK_MS, &mut ctx);
        assert!(matches!(monster.boss, Some(BossState::Outlaw(s)) if s.phase == OutlawPhase::Hiding));
        assert!(take_damage(&mut monster, OUTLAW_HEALTH_FIRST));
    }

    #[test]
    fn test_monster_off_map_is_flagged() {
        let mut h = Harness::new();
        let mut monster = orc_at(-3.0, 5.0);
        monster.flash = Countdown::armed(1000.0);
        let mut ctx = h.ctx(tile(7.0, 7.0));
        assert!(update(&mut monster, TARGET_FRAME_MS, &mut ctx));

        let mut inside = orc_at(5.0, 5.0);
        let mut ctx = h.ctx(tile(7.0, 7.0));
        assert!(!update(&mut inside, TARGET_FRAME_MS, &mut ctx));
    }

    // ---- Spikey ----

    #[test]
    fn test_spikey_forms_into_trap() {
        let mut h = Harness::new();
        let mut monster = create_monster(MonsterKind::Spikey, tile(5.0, 5.0), &h.map, &mut h.rng);
        let health = monster.health;
        spikey::begin_forming(&mut monster);
        assert!(monster.invisible);
        assert!(!monster.is_harmful());

        let mut ctx = h.ctx(tile(10.0, 10.0));
        spikey::step(&mut monster, 100.0, &mut ctx);
        assert_eq!(monster.spikey, SpikeyStage::Forming);

        let mut ctx = h.ctx(tile(10.0, 10.0));
        spikey::step(&mut monster, 100.0, &mut ctx);
        assert_eq!(monster.spikey, SpikeyStage::Trap);
        assert!(monster.special);
        assert!(!monster.invisible);
        assert_eq!(monster.health, health + SPIKEY_TRAP_HEALTH_BONUS);
    }

    #[test]
    fn test_spikey_trap_stays_put() {
        let mut h = Harness::new();
        let mut monster = create_monster(MonsterKind::Spikey, tile(5.0, 5.0), &h.map, &mut h.rng);
        spikey::finish_forming(&mut monster);
        let start = monster.position();
        for _ in 0..20 {
            let mut ctx = h.ctx(tile(10.0, 10.0));
            update(&mut monster, TARGET_FRAME_MS, &mut ctx);
        }
        assert_eq!(monster.position(), start);
    }

    // ---- Dracula ----

    #[test]
    fn test_dracula_phase_cycle() {
        let mut phase = DraculaPhase::Gloating;
        let mut seen = Vec::new();
        for _ in 0..6 {
            phase = dracula::next_phase(phase);
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![
                DraculaPhase::WalkAndShoot,
                DraculaPhase::SpreadShot,
                DraculaPhase::SummonDemon,
                DraculaPhase::SummonMummy,
                DraculaPhase::WalkAndShoot,
                DraculaPhase::SpreadShot,
            ]
        );
    }

    #[test]
    fn test_dracula_leaves_gloating_on_timer() {
        let mut h = Harness::new();
        let mut monster = create_dracula(tile(7.0, 5.0));
        let mut ctx = h.ctx(tile(7.0, 12.0));
        update(&mut monster, DRACULA_GLOAT_MS - 1.0, &mut ctx);
        assert!(matches!(monster.boss, Some(BossState::Dracula(s)) if s.phase == DraculaPhase::Gloating));

        let mut ctx = h.ctx(tile(7.0, 12.0));
        update(&mut monster, 1.0, &mut ctx);
        assert!(matches!(monster.boss, Some(BossState::Dracula(s)) if s.phase == DraculaPhase::WalkAndShoot));

        assert!(!take_damage(&mut monster, 50));
        assert_eq!(monster.health, DRACULA_HEALTH - 50);
    }

    #[test]
    fn test_damage_does_not_advance_dracula() {
        let mut h = Harness::new();
        let mut monster = create_dracula(tile(7.0, 5.0));
        if let Some(BossState::Dracula(state)) = monster.boss.as_mut() {
            state.phase = DraculaPhase::WalkAndShoot;
            state.phase_timer.arm(DRACULA_WALK_MS);
        }
        take_damage(&mut monster, 100);
        let mut ctx = h.ctx(tile(7.0, 12.0));
        update(&mut monster, TARGET_FRAME_MS, &mut ctx);
        assert!(matches!(monster.boss, Some(BossState::Dracula(s)) if s.phase == DraculaPhase::WalkAndShoot));
    }

    #[test]
    fn test_dracula_spread_volley_from_home() {
        let mut h = Harness::new();
        let home = tile(7.0, 5.0);
        let mut monster = create_dracula(home);
        if let Some(BossState::Dracula(state)) = monster.boss.as_mut() {
            state.phase = DraculaPhase::SpreadShot;
            state.phase_timer.arm(DRACULA_SPREAD_MS);
        }
        let mut ctx = h.ctx(tile(7.0, 12.0));
        dracula::step(&mut monster, TARGET_FRAME_MS, &mut ctx);
        assert_eq!(h.effects.bullets.len(), 8);
        assert!(h.effects.bullets.iter().all(|b| b.owner == BulletOwner::Enemy));
    }

    #[test]
    fn test_dracula_summons_once_per_phase() {
        let mut h = Harness::new();
        let mut monster = create_dracula(tile(7.0, 5.0));
        if let Some(BossState::Dracula(state)) = monster.boss.as_mut() {
            state.phase = DraculaPhase::SummonDemon;
            state.phase_timer.arm(DRACULA_SUMMON_MS);
        }
        for _ in 0..5 {
            let mut ctx = h.ctx(tile(7.0, 12.0));
            dracula::step(&mut monster, TARGET_FRAME_MS, &mut ctx);
        }
        assert_eq!(h.effects.summons.len(), 4);
        assert!(h.effects.summons.iter().all(|(kind, _)| *kind == MonsterKind::Devil));
    }

    // ---- Outlaw ----

    #[test]
    fn test_outlaw_phase_cycle_returns_to_hiding() {
        let mut phase = OutlawPhase::Talking;
        for _ in 0..6 {
            phase = outlaw::next_phase(phase);
        }
        assert_eq!(phase, OutlawPhase::Hiding);
    }

    #[test]
    fn test_outlaw_pant_beats() {
        let mut h = Harness::new();
        let mut monster = create_outlaw(tile(7.0, 2.0), 1);
        if let Some(BossState::Outlaw(state)) = monster.boss.as_mut() {
            state.phase = OutlawPhase::RunGunAndPant;
            state.phase_timer.arm(OUTLAW_PANT_BEAT_MS);
        }

        let mut ctx = h.ctx(tile(7.0, 12.0));
        outlaw::step(&mut monster, OUTLAW_PANT_BEAT_MS, &mut ctx);
        assert_eq!(h.effects.bullets.len(), 3);

        let mut ctx = h.ctx(tile(7.0, 12.0));
        outlaw::step(&mut monster, OUTLAW_PANT_BEAT_MS, &mut ctx);
        assert_eq!(h.effects.bullets.len(), 6);
        match monster.boss {
            Some(BossState::Outlaw(state)) => assert!(outlaw::is_panting(&state)),
            _ => panic!("outlaw lost its state"),
        }

        let mut ctx = h.ctx(tile(7.0, 12.0));
        outlaw::step(&mut monster, OUTLAW_PANT_BEAT_MS, &mut ctx);
        assert_eq!(h.effects.bullets.len(), 6, "no shot while panting");
        assert!(matches!(monster.boss, Some(BossState::Outlaw(s)) if s.phase == OutlawPhase::ShootAtPlayer));
    }

    // ---- Gunnery ----

    #[test]
    fn test_enemy_fan_aims_at_target() {
        let shooter = Rect::at(tile(7.0, 2.0), Vec2::splat(TILE_SIZE));
        let bullets = enemy_fan(&shooter, tile(7.0, 12.0) + Vec2::splat(TILE_SIZE / 2.0));
        assert_eq!(bullets.len(), 3);
        // Centre bullet goes straight down.
        assert!(bullets[0].motion.x.abs() < 1e-4);
        assert!(bullets[0].motion.y > 0.0);
    }

    #[test]
    fn test_enemy_ring_is_evenly_spaced() {
        let shooter = Rect::at(tile(7.0, 5.0), Vec2::splat(TILE_SIZE));
        let bullets = enemy_ring(&shooter, 8, 0.0);
        assert_eq!(bullets.len(), 8);
        let sum: Vec2 = bullets.iter().map(|b| b.motion).sum();
        assert!(sum.length() < 1e-3);
        for bullet in &bullets {
            assert!((bullet.motion.length() - ENEMY_BULLET_SPEED).abs() < 1e-4);
        }
    }

    // ---- Loot ----

    #[test]
    fn test_boss_loot_is_fixed() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let dracula = create_dracula(tile(7.0, 5.0));
        assert_eq!(loot_roll(&dracula, &mut rng), Some(PowerupKind::Log));
        let first = create_outlaw(tile(7.0, 2.0), 1);
        assert_eq!(loot_roll(&first, &mut rng), Some(PowerupKind::Heart));
        let second = create_outlaw(tile(7.0, 2.0), 2);
        assert_eq!(loot_roll(&second, &mut rng), Some(PowerupKind::Skull));

        let mut trap = orc_at(5.0, 5.0);
        trap.kind = MonsterKind::Spikey;
        trap.special = true;
        assert_eq!(loot_roll(&trap, &mut rng), Some(PowerupKind::Log));
    }

    #[test]
    fn test_coin5_rate_for_non_orc() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let rolls = 200_000;
        let coin5 = (0..rolls)
            .filter(|_| roll_table(MonsterKind::Ogre, &mut rng) == Some(PowerupKind::Coin5))
            .count();
        let rate = coin5 as f64 / rolls as f64;
        let expected = LOOT_COIN_BRANCH * (LOOT_COIN5_NON_ORC + (1.0 - LOOT_COIN5_NON_ORC) * LOOT_COIN5_ANY);
        assert!((rate - expected).abs() < 0.0015, "coin5 rate {rate}, expected {expected}");
    }

    #[test]
    fn test_orcs_rarely_drop_coin5() {
        let mut rng = ChaCha8Rng::seed_from_u64(43);
        let rolls = 200_000;
        let coin5 = (0..rolls)
            .filter(|_| roll_table(MonsterKind::Orc, &mut rng) == Some(PowerupKind::Coin5))
            .count();
        let rate = coin5 as f64 / rolls as f64;
        assert!(rate < 0.0015, "orc coin5 rate {rate}");
    }

    /// Odds of reaching the uniform buff draw.
    fn uniform_draw_rate() -> f64 {
        (1.0 - LOOT_COIN_BRANCH) * LOOT_POWERUP_BRANCH * (1.0 - LOOT_BONUS_ITEM) * (1.0 - LOOT_SHERIFF)
    }

    #[test]
    fn test_sheriff_star_rate() {
        let mut rng = ChaCha8Rng::seed_from_u64(45);
        let rolls = 400_000;
        let stars = (0..rolls)
            .filter(|_| roll_table(MonsterKind::Ogre, &mut rng) == Some(PowerupKind::Sheriff))
            .count();
        let rate = stars as f64 / rolls as f64;
        let expected = (1.0 - LOOT_COIN_BRANCH) * LOOT_POWERUP_BRANCH * (1.0 - LOOT_BONUS_ITEM) * LOOT_SHERIFF;
        assert!((rate - expected).abs() < 0.0004, "sheriff rate {rate}, expected {expected}");
    }

    #[test]
    fn test_life_is_rerolled_in_uniform_draw() {
        let mut rng = ChaCha8Rng::seed_from_u64(46);
        let rolls = 400_000;
        let lives = (0..rolls)
            .filter(|_| roll_table(MonsterKind::Mummy, &mut rng) == Some(PowerupKind::Life))
            .count();
        let rate = lives as f64 / rolls as f64;

        let ids = 8.0;
        let share = (1.0 / ids) * (1.0 - LOOT_LIFE_REROLL) + LOOT_LIFE_REROLL * (1.0 / ids).powi(2);
        let expected = uniform_draw_rate() * share;
        assert!((rate - expected).abs() < 0.0004, "life rate {rate}, expected {expected}");

        let without_reroll = uniform_draw_rate() / ids;
        assert!(rate < without_reroll - 0.0008, "life rate {rate} ignores the reroll");
    }

    #[test]
    fn test_regular_loot_never_story_item() {
        let mut rng = ChaCha8Rng::seed_from_u64(44);
        for _ in 0..50_000 {
            if let Some(kind) = roll_table(MonsterKind::Mummy, &mut rng) {
                assert!(!kind.is_story(), "{kind:?}");
            }
        }
    }
}
