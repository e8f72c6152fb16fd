#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::{Action, InputSource, InputState};
    use crate::config::{ConfigError, TuningConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::map::TileMap;
    use crate::state::FrameSnapshot;
    use crate::types::{Countdown, Rect};

    // ---- Countdown ----

    #[test]
    fn test_countdown_fires_exactly_once() {
        let mut timer = Countdown::armed(100.0);
        let mut fired = 0;
        for _ in 0..20 {
            if timer.tick(16.0) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1, "an armed countdown fires once");
        assert!(!timer.is_active());
    }

    #[test]
    fn test_countdown_large_delta_fires_once() {
        let mut timer = Countdown::armed(10.0);
        assert!(timer.tick(5000.0));
        assert!(!timer.tick(5000.0));
        assert_eq!(timer.remaining_ms(), 0.0);
    }

    #[test]
    fn test_idle_countdown_never_fires() {
        let mut timer = Countdown::IDLE;
        assert!(!timer.tick(16.0));
        timer.arm(-50.0);
        assert!(!timer.is_active(), "negative arming clamps to idle");
        assert!(!timer.tick(16.0));
    }

    // ---- Rect ----

    #[test]
    fn test_rect_shared_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 48.0, 48.0);
        let b = Rect::new(48.0, 0.0, 48.0, 48.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&b.translated(Vec2::new(-1.0, 0.0))));
    }

    #[test]
    fn test_rect_contains_point_half_open() {
        let r = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!r.contains_point(Vec2::new(20.0, 15.0)));
        assert_eq!(r.center(), Vec2::new(15.0, 15.0));
    }

    // ---- Map ----

    #[test]
    fn test_unknown_wave_falls_back_to_default_layout() {
        assert!(!TileMap::has_layout(99));
        let fallback = TileMap::for_wave(99, WorldKind::Desert);
        let default = TileMap::for_wave(0, WorldKind::Desert);
        assert_eq!(fallback, default);
    }

    #[test]
    fn test_map_border_and_gates() {
        let map = TileMap::for_wave(0, WorldKind::Desert);
        assert_eq!(map.tile(0, 0), Some(Tile::Barrier1));
        for gate in GATE_TILES {
            assert!(map.tile(gate, 0).is_some_and(Tile::is_passable), "top gate open");
            assert!(map.tile(0, gate).is_some_and(Tile::is_passable), "left gate open");
        }
        assert_eq!(map.tile(16, 0), None);
    }

    #[test]
    fn test_map_blocks_out_of_bounds_and_barriers() {
        let map = TileMap::for_wave(0, WorldKind::Desert);
        assert!(map.blocks(&Rect::new(-1.0, 100.0, 10.0, 10.0)));
        assert!(map.blocks(&Rect::new(0.0, 0.0, 10.0, 10.0)), "border barrier");
        let open = TileMap::tile_rect(5, 5);
        assert!(!map.blocks(&open));
        // Touching the border tile's edge is still passable.
        assert!(!map.blocks(&Rect::new(TILE_SIZE, TILE_SIZE, TILE_SIZE, TILE_SIZE)));
    }

    #[test]
    fn test_world_floor_follows_world() {
        let woods = TileMap::for_wave(4, WorldKind::Woods);
        assert_eq!(woods.tile(5, 5), Some(Tile::Grassy));
        let grave = TileMap::for_wave(8, WorldKind::Graveyard);
        assert_eq!(grave.tile(5, 5), Some(Tile::Rocky));
    }

    #[test]
    fn test_bridge_crosses_trench() {
        let map = TileMap::for_wave(5, WorldKind::Woods);
        assert_eq!(map.tile(7, 10), Some(Tile::Bridge));
        assert!(map.blocks(&TileMap::tile_rect(3, 10)));
        assert!(!map.blocks(&TileMap::tile_rect(7, 10)));
    }

    // ---- Enums ----

    #[test]
    fn test_powerup_ids_round_trip() {
        for id in -3..=10 {
            let kind = PowerupKind::from_id(id).unwrap();
            assert_eq!(kind.id(), id);
        }
        assert_eq!(PowerupKind::from_id(11), None);
        assert!(PowerupKind::Heart.is_story());
        assert!(!PowerupKind::Coin1.is_story());
        assert!(PowerupKind::Spread.is_timed());
        assert!(!PowerupKind::Nuke.is_timed());
    }

    #[test]
    fn test_store_prices() {
        assert_eq!(StoreItem::FireSpeed1.price(), 10);
        assert_eq!(StoreItem::RunSpeed1.price(), 8);
        assert_eq!(StoreItem::SpreadPistol.price(), 99);
    }

    #[test]
    fn test_shop_policy() {
        let every_fourth = ShopPolicy::EveryFourthWave;
        assert!(!every_fourth.shop_before(0));
        assert!(!every_fourth.shop_before(2));
        assert!(every_fourth.shop_before(4));
        assert!(ShopPolicy::EveryOtherWave.shop_before(2));
    }

    #[test]
    fn test_chance_index_excludes_bosses() {
        assert_eq!(MonsterKind::Orc.chance_index(), Some(0));
        assert_eq!(MonsterKind::Spikey.chance_index(), Some(6));
        assert_eq!(MonsterKind::Dracula.chance_index(), None);
    }

    // ---- Input ----

    #[test]
    fn test_input_state_press_release() {
        let mut input = InputState::new().with(Action::MoveUp).with(Action::ShootLeft);
        assert!(input.is_held(Action::MoveUp));
        assert!(input.is_held(Action::ShootLeft));
        assert!(!input.is_held(Action::Confirm));
        input.release(Action::MoveUp);
        assert!(!input.is_held(Action::MoveUp));
        assert_eq!(InputState::capture(&input), input);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        assert!(TuningConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = TuningConfig::from_json_str(r#"{ "starting_lives": 5 }"#).unwrap();
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.wave_duration_ms, WAVE_DURATION_MS);
    }

    #[test]
    fn test_config_rejects_bad_probability() {
        let err = TuningConfig::from_json_str(r#"{ "ambient_spawn_chance_idle": 1.5 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "ambient_spawn_chance_idle", .. }));
    }

    #[test]
    fn test_config_rejects_unknown_field() {
        let err = TuningConfig::from_json_str(r#"{ "lives": 5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    // ---- Snapshot ----

    #[test]
    fn test_snapshot_serde() {
        let snap = FrameSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::StartMenu);
    }
}
