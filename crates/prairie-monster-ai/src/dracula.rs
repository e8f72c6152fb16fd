//! Dracula phase machine.
//!
//! Gloating → WalkAndShoot → SpreadShot → SummonDemon → SummonMummy →
//! WalkAndShoot … Every phase ends on its own countdown; damage never
//! advances the script.

use glam::Vec2;

use prairie_core::components::{BossState, DraculaState, Monster};
use prairie_core::constants::*;
use prairie_core::enums::{DraculaPhase, MonsterKind};
use prairie_core::events::SoundCue;

use crate::behavior::MonsterContext;
use crate::gunnery::{enemy_fan, enemy_ring};
use crate::steering::{random_target, walk};

/// Bullets in one spread volley.
const SPREAD_DIRECTIONS: u32 = 8;

pub fn step(monster: &mut Monster, delta_ms: f32, ctx: &mut MonsterContext<'_>) {
    let Some(BossState::Dracula(mut state)) = monster.boss else {
        return;
    };
    run(monster, &mut state, delta_ms, ctx);
    monster.boss = Some(BossState::Dracula(state));
}

/// Phase that follows `phase` once its countdown expires.
pub fn next_phase(phase: DraculaPhase) -> DraculaPhase {
    match phase {
        DraculaPhase::Gloating => DraculaPhase::WalkAndShoot,
        DraculaPhase::WalkAndShoot => DraculaPhase::SpreadShot,
        DraculaPhase::SpreadShot => DraculaPhase::SummonDemon,
        DraculaPhase::SummonDemon => DraculaPhase::SummonMummy,
        DraculaPhase::SummonMummy => DraculaPhase::WalkAndShoot,
    }
}

fn run(monster: &mut Monster, state: &mut DraculaState, delta_ms: f32, ctx: &mut MonsterContext<'_>) {
    if state.phase_timer.tick(delta_ms) {
        enter(monster, state, next_phase(state.phase), ctx);
        return;
    }

    let player_center = ctx.player_position + Vec2::splat(TILE_SIZE / 2.0);
    let can_move = !monster.flash.is_active() && !ctx.timers.suspends_movement();

    match state.phase {
        DraculaPhase::Gloating => {}
        DraculaPhase::WalkAndShoot => {
            if can_move {
                walk(monster, ctx);
            }
            if state.shot_timer.tick(delta_ms) {
                ctx.effects.bullets.extend(enemy_fan(&monster.bounds, player_center));
                ctx.effects.cues.push(SoundCue::EnemyGunshot);
                state.shot_timer.arm(DRACULA_WALK_SHOT_MS);
            }
        }
        DraculaPhase::SpreadShot => {
            if monster.position() != state.home {
                if can_move {
                    glide_toward(monster, state.home);
                }
            } else if state.shot_timer.tick(delta_ms) || !state.shot_timer.is_active() {
                // Alternate volleys are rotated half a step to cover the gaps.
                let offset = if state.volleys % 2 == 0 {
                    0.0
                } else {
                    std::f32::consts::PI / SPREAD_DIRECTIONS as f32
                };
                ctx.effects
                    .bullets
                    .extend(enemy_ring(&monster.bounds, SPREAD_DIRECTIONS, offset));
                ctx.effects.cues.push(SoundCue::EnemyGunshot);
                state.volleys += 1;
                state.shot_timer.arm(DRACULA_SPREAD_SHOT_MS);
            }
        }
        DraculaPhase::SummonDemon => summon_once(monster, state, MonsterKind::Devil, ctx),
        DraculaPhase::SummonMummy => summon_once(monster, state, MonsterKind::Mummy, ctx),
    }
}

fn enter(monster: &mut Monster, state: &mut DraculaState, phase: DraculaPhase, ctx: &mut MonsterContext<'_>) {
    state.phase = phase;
    state.volleys = 0;
    state.shot_timer.clear();
    match phase {
        DraculaPhase::Gloating => state.phase_timer.arm(DRACULA_GLOAT_MS),
        DraculaPhase::WalkAndShoot => {
            state.phase_timer.arm(DRACULA_WALK_MS);
            state.shot_timer.arm(DRACULA_WALK_SHOT_MS);
            monster.target = random_target(ctx.map, ctx.rng).unwrap_or(Vec2::ZERO);
        }
        DraculaPhase::SpreadShot => {
            state.phase_timer.arm(DRACULA_SPREAD_MS);
            monster.target = Vec2::ZERO;
        }
        DraculaPhase::SummonDemon | DraculaPhase::SummonMummy => {
            state.phase_timer.arm(DRACULA_SUMMON_MS);
        }
    }
}

fn summon_once(monster: &Monster, state: &mut DraculaState, kind: MonsterKind, ctx: &mut MonsterContext<'_>) {
    if state.volleys > 0 {
        return;
    }
    state.volleys = 1;
    let origin = monster.position();
    let reach = DRACULA_SUMMON_RADIUS_TILES * TILE_SIZE;
    for offset in [
        Vec2::new(-reach, 0.0),
        Vec2::new(reach, 0.0),
        Vec2::new(0.0, reach),
        Vec2::new(0.0, -reach),
    ] {
        ctx.effects.summons.push((kind, origin + offset));
    }
    ctx.effects.cues.push(SoundCue::BossGloat);
}

/// Straight-line move that ignores terrain, snapping onto `destination`
/// once within one step.
fn glide_toward(monster: &mut Monster, destination: Vec2) {
    let delta = destination - monster.position();
    let position = if delta.length() <= monster.speed {
        destination
    } else {
        monster.position() + delta.normalize() * monster.speed
    };
    monster.bounds = monster.bounds.moved_to(position);
}
