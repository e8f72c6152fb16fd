//! Snapshot system: queries the ECS world and builds a complete
//! `FrameSnapshot`, including the draw and sound requests for the host.
//!
//! This system is read-only; it never modifies the world.

use glam::Vec2;
use hecs::World;

use prairie_core::components::{Bullet, Monster, Pickup};
use prairie_core::constants::*;
use prairie_core::enums::*;
use prairie_core::events::{MusicTrack, SoundCue};
use prairie_core::interfaces::{AssetHandles, DrawRequest, SpriteRegion, TextRequest, Tint};
use prairie_core::map::TileMap;
use prairie_core::state::*;
use prairie_core::types::{Countdown, Rect, SimTime};

use crate::player::Player;
use crate::session::{boss_phase_label, Session, Shootout};
use crate::shop::{self, StoreSlot};
use crate::systems::powerups::GlobalEffects;

/// Everything the snapshot is built from.
pub struct FrameView<'a> {
    pub world: &'a World,
    pub time: SimTime,
    pub phase: GamePhase,
    pub session: &'a Session,
    pub player: &'a Player,
    pub map: &'a TileMap,
    pub store: &'a [StoreSlot],
    pub wave_timer: Countdown,
    pub wave_duration_ms: f32,
    pub globals: &'a GlobalEffects,
    pub assets: &'a AssetHandles,
    pub shootout: Option<Shootout>,
}

/// Build a complete FrameSnapshot from the current state.
pub fn build_snapshot(view: &FrameView<'_>, cues: Vec<SoundCue>) -> FrameSnapshot {
    let monsters = build_monsters(view.world);
    let bullets = build_bullets(view.world);
    let pickups = build_pickups(view.world);
    let store = build_store(view);
    let boss = build_boss(view.world);
    let session = build_session(view);

    let mut draw_requests = Vec::new();
    if view.phase != GamePhase::StartMenu {
        draw_map(view, &mut draw_requests);
        draw_entities(view, &monsters, &bullets, &pickups, &mut draw_requests);
        draw_hud(view, &session, boss.as_ref(), &mut draw_requests);
    }

    FrameSnapshot {
        time: view.time,
        phase: view.phase,
        text: build_text(view),
        player: build_player(view),
        session,
        monsters,
        bullets,
        pickups,
        store,
        boss,
        draw_requests,
        sounds: cues.iter().map(|cue| view.assets.sound(*cue)).collect(),
        cues,
        music: music_for(view).map(|track| view.assets.music(track)),
    }
}

fn build_session(view: &FrameView<'_>) -> SessionView {
    let session = view.session;
    let remaining = view.wave_timer.remaining_ms();
    SessionView {
        wave: session.wave,
        round: session.round,
        world: session.world(),
        lives: session.lives,
        coins: session.coins,
        score: session.score,
        held_item: session.held_item,
        wave_time_remaining_ms: remaining,
        wave_time_fraction: if view.wave_duration_ms > 0.0 {
            (remaining / view.wave_duration_ms).clamp(0.0, 1.0)
        } else {
            0.0
        },
    }
}

fn build_player(view: &FrameView<'_>) -> PlayerView {
    let player = view.player;
    PlayerView {
        position: player.position,
        bounds: player.bounds(),
        facing: player.facing,
        invincible: player.is_invincible(),
        zombie: view.globals.zombie.is_active(),
        active_effects: player
            .effects
            .iter()
            .map(|(kind, remaining_ms)| EffectView { kind, remaining_ms })
            .collect(),
    }
}

fn build_monsters(world: &World) -> Vec<MonsterView> {
    world
        .query::<&Monster>()
        .iter()
        .map(|(_, monster)| MonsterView {
            kind: monster.kind,
            bounds: monster.bounds,
            health: monster.health,
            invisible: monster.invisible,
            special: monster.special,
            flashing: monster.flash.is_active(),
        })
        .collect()
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<&Bullet>()
        .iter()
        .map(|(_, bullet)| BulletView {
            position: bullet.position,
            owner: bullet.owner,
        })
        .collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    world
        .query::<&Pickup>()
        .iter()
        .map(|(_, pickup)| PickupView {
            kind: pickup.kind,
            position: pickup.position,
            blinking: pickup.is_blinking(),
        })
        .collect()
}

fn build_store(view: &FrameView<'_>) -> Vec<StoreItemView> {
    if view.phase != GamePhase::Shopping {
        return Vec::new();
    }
    view.store
        .iter()
        .map(|slot| StoreItemView {
            item: slot.item,
            price: slot.item.price(),
            bounds: slot.bounds,
        })
        .collect()
}

fn build_boss(world: &World) -> Option<BossView> {
    world
        .query::<&Monster>()
        .iter()
        .find_map(|(_, monster)| {
            monster.boss.as_ref().map(|boss| BossView {
                kind: monster.kind,
                health: monster.health,
                full_health: boss.full_health(),
                phase: boss_phase_label(boss),
            })
        })
}

fn music_for(view: &FrameView<'_>) -> Option<MusicTrack> {
    match view.phase {
        GamePhase::StartMenu | GamePhase::GameOver => None,
        GamePhase::EndCutscene => Some(MusicTrack::Ending),
        _ if view.globals.zombie.is_active() => Some(MusicTrack::Zombie),
        GamePhase::Playing | GamePhase::Died
            if matches!(view.shootout, Some(Shootout::Outlaw { .. })) =>
        {
            Some(MusicTrack::Outlaw)
        }
        _ => Some(MusicTrack::Overworld),
    }
}

fn sprite(view: &FrameView<'_>, source: SpriteRegion, dest: Rect) -> DrawRequest {
    DrawRequest {
        texture: view.assets.sprites,
        source,
        dest,
        rotation: 0.0,
        tint: Tint::WHITE,
    }
}

fn tile_rect_at(position: Vec2) -> Rect {
    Rect::at(position, Vec2::splat(TILE_SIZE))
}

fn draw_map(view: &FrameView<'_>, out: &mut Vec<DrawRequest>) {
    let world = view.map.world();
    for (col, row, tile) in view.map.iter() {
        out.push(sprite(
            view,
            SpriteRegion::Tile { tile, world },
            TileMap::tile_rect(col, row),
        ));
    }
}

fn draw_entities(
    view: &FrameView<'_>,
    monsters: &[MonsterView],
    bullets: &[BulletView],
    pickups: &[PickupView],
    out: &mut Vec<DrawRequest>,
) {
    for pickup in pickups {
        let mut request = sprite(view, SpriteRegion::Pickup { kind: pickup.kind }, tile_rect_at(pickup.position));
        if pickup.blinking {
            request.tint = Tint::FADED;
        }
        out.push(request);
    }

    let frame = (view.time.elapsed_ms / 500.0) as u64 % 2;
    for monster in monsters.iter().filter(|m| !m.invisible) {
        let mut request = sprite(
            view,
            SpriteRegion::Monster {
                kind: monster.kind,
                frame: frame as u8,
                special: monster.special,
            },
            monster.bounds,
        );
        if monster.flashing {
            request.tint = Tint::HIT_FLASH;
        }
        out.push(request);
    }

    for bullet in bullets {
        out.push(sprite(
            view,
            SpriteRegion::Bullet {
                enemy: bullet.owner == BulletOwner::Enemy,
            },
            Rect::at(bullet.position, Vec2::splat(BULLET_SIZE)),
        ));
    }

    if view.phase == GamePhase::Shopping {
        out.push(sprite(view, SpriteRegion::Merchant, shop::merchant_box()));
        for slot in view.store {
            out.push(sprite(view, SpriteRegion::StoreItem { item: slot.item }, slot.bounds));
        }
    }

    if view.phase != GamePhase::Died {
        let player = view.player;
        let mut request = sprite(
            view,
            SpriteRegion::Player {
                facing: player.facing,
                frame: player.frame,
                zombie: view.globals.zombie.is_active(),
            },
            player.sprite_rect(),
        );
        if player.is_invincible() {
            request.tint = Tint::FADED;
        }
        out.push(request);
    }
}

fn draw_hud(view: &FrameView<'_>, session: &SessionView, boss: Option<&BossView>, out: &mut Vec<DrawRequest>) {
    let bar_height = TILE_SIZE / 4.0;
    out.push(sprite(
        view,
        SpriteRegion::WaveTimerBar {
            fraction: session.wave_time_fraction,
        },
        Rect::new(0.0, MAP_PIXEL_SIZE, MAP_PIXEL_SIZE, bar_height),
    ));

    if let Some(boss) = boss {
        let fraction = if boss.full_health > 0 {
            (boss.health as f32 / boss.full_health as f32).clamp(0.0, 1.0)
        } else {
            0.0
        };
        out.push(sprite(
            view,
            SpriteRegion::HealthBar { fraction },
            Rect::new(0.0, -bar_height, MAP_PIXEL_SIZE, bar_height),
        ));
    }

    if let Some(kind) = session.held_item {
        out.push(sprite(
            view,
            SpriteRegion::HeldItem { kind },
            Rect::new(-TILE_SIZE * 1.5, 0.0, TILE_SIZE, TILE_SIZE),
        ));
    }
}

fn build_text(view: &FrameView<'_>) -> Vec<TextRequest> {
    let line = |text: String, row: f32| TextRequest {
        font: view.assets.font,
        text,
        x: -TILE_SIZE * 1.5,
        y: TILE_SIZE * (2.0 + row),
    };
    match view.phase {
        GamePhase::StartMenu => vec![line("PRESS CONFIRM".to_string(), 0.0)],
        GamePhase::GameOver => vec![
            line("GAME OVER".to_string(), 0.0),
            line(format!("SCORE {}", view.session.score), 1.0),
        ],
        _ => vec![
            line(format!("x{}", view.session.lives.max(0)), 0.0),
            line(format!("${}", view.session.coins), 1.0),
            line(format!("{}", view.session.score), 2.0),
            line(format!("WAVE {}", view.session.wave + 1), 3.0),
        ],
    }
}
