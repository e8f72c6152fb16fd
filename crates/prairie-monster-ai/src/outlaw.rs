//! Outlaw phase machine.
//!
//! Talking → Hiding → DartAndShoot → RunAndGun → RunGunAndPant →
//! ShootAtPlayer → Hiding … The run-gun-and-pant phase is split into
//! fixed beats: shots at the end of the first two, panting in the last.

use glam::Vec2;
use rand::Rng;

use prairie_core::components::{BossState, Monster, OutlawState};
use prairie_core::constants::*;
use prairie_core::enums::OutlawPhase;
use prairie_core::events::SoundCue;

use crate::behavior::MonsterContext;
use crate::gunnery::{enemy_fan, enemy_shot};

pub fn step(monster: &mut Monster, delta_ms: f32, ctx: &mut MonsterContext<'_>) {
    let Some(BossState::Outlaw(mut state)) = monster.boss else {
        return;
    };
    run(monster, &mut state, delta_ms, ctx);
    monster.boss = Some(BossState::Outlaw(state));
}

/// Phase that follows `phase` once it is over.
pub fn next_phase(phase: OutlawPhase) -> OutlawPhase {
    match phase {
        OutlawPhase::Talking => OutlawPhase::Hiding,
        OutlawPhase::Hiding => OutlawPhase::DartAndShoot,
        OutlawPhase::DartAndShoot => OutlawPhase::RunAndGun,
        OutlawPhase::RunAndGun => OutlawPhase::RunGunAndPant,
        OutlawPhase::RunGunAndPant => OutlawPhase::ShootAtPlayer,
        OutlawPhase::ShootAtPlayer => OutlawPhase::Hiding,
    }
}

/// Whether the Outlaw is catching his breath (and holding still).
pub fn is_panting(state: &OutlawState) -> bool {
    state.phase == OutlawPhase::RunGunAndPant && state.beat + 1 >= OUTLAW_PANT_BEATS
}

fn run(monster: &mut Monster, state: &mut OutlawState, delta_ms: f32, ctx: &mut MonsterContext<'_>) {
    let player_center = ctx.player_position + Vec2::splat(TILE_SIZE / 2.0);

    if state.phase_timer.tick(delta_ms) {
        if state.phase == OutlawPhase::RunGunAndPant && state.beat + 1 < OUTLAW_PANT_BEATS {
            state.beat += 1;
            state.phase_timer.arm(OUTLAW_PANT_BEAT_MS);
            ctx.effects.bullets.extend(enemy_fan(&monster.bounds, player_center));
            ctx.effects.cues.push(SoundCue::EnemyGunshot);
        } else {
            enter(state, next_phase(state.phase), ctx);
        }
        return;
    }

    let can_move = !monster.flash.is_active() && !ctx.timers.suspends_movement();

    match state.phase {
        OutlawPhase::Talking => {}
        OutlawPhase::Hiding => {
            if can_move {
                slide_toward_x(monster, state.home.x, ctx);
            }
        }
        OutlawPhase::DartAndShoot => {
            if can_move {
                let lane = OUTLAW_DART_TILES * TILE_SIZE;
                let target_x = if state.dart_left {
                    state.home.x - lane
                } else {
                    state.home.x + lane
                };
                slide_toward_x(monster, target_x, ctx);
            }
            fire_fan_on_cadence(monster, state, delta_ms, OUTLAW_DART_SHOT_MS, player_center, ctx);
        }
        OutlawPhase::RunAndGun => {
            if can_move && slide_toward_x(monster, state.run_target_x, ctx) {
                state.run_target_x = random_column(ctx);
            }
            fire_fan_on_cadence(monster, state, delta_ms, OUTLAW_RUN_SHOT_MS, player_center, ctx);
        }
        OutlawPhase::RunGunAndPant => {
            if can_move && !is_panting(state) && slide_toward_x(monster, state.run_target_x, ctx) {
                state.run_target_x = random_column(ctx);
            }
        }
        OutlawPhase::ShootAtPlayer => {
            if state.shot_timer.tick(delta_ms) {
                ctx.effects.bullets.push(enemy_shot(&monster.bounds, player_center));
                ctx.effects.cues.push(SoundCue::EnemyGunshot);
                state.shot_timer.arm(OUTLAW_AIM_SHOT_MS);
            }
        }
    }
}

fn enter(state: &mut OutlawState, phase: OutlawPhase, ctx: &mut MonsterContext<'_>) {
    state.phase = phase;
    state.beat = 0;
    state.shot_timer.clear();
    match phase {
        OutlawPhase::Talking => state.phase_timer.arm(OUTLAW_TALK_MS),
        OutlawPhase::Hiding => state.phase_timer.arm(OUTLAW_HIDE_MS),
        OutlawPhase::DartAndShoot => {
            state.phase_timer.arm(OUTLAW_DART_MS);
            state.shot_timer.arm(OUTLAW_DART_SHOT_MS);
            state.dart_left = ctx.rng.gen_bool(0.5);
        }
        OutlawPhase::RunAndGun => {
            state.phase_timer.arm(OUTLAW_RUN_MS);
            state.shot_timer.arm(OUTLAW_RUN_SHOT_MS);
            state.run_target_x = random_column(ctx);
        }
        OutlawPhase::RunGunAndPant => {
            state.phase_timer.arm(OUTLAW_PANT_BEAT_MS);
            state.run_target_x = random_column(ctx);
        }
        OutlawPhase::ShootAtPlayer => {
            state.phase_timer.arm(OUTLAW_AIM_MS);
            state.shot_timer.arm(OUTLAW_AIM_SHOT_MS);
        }
    }
}

fn fire_fan_on_cadence(
    monster: &Monster,
    state: &mut OutlawState,
    delta_ms: f32,
    cadence_ms: f32,
    player_center: Vec2,
    ctx: &mut MonsterContext<'_>,
) {
    if state.shot_timer.tick(delta_ms) {
        ctx.effects.bullets.extend(enemy_fan(&monster.bounds, player_center));
        ctx.effects.cues.push(SoundCue::EnemyGunshot);
        state.shot_timer.arm(cadence_ms);
    }
}

fn random_column(ctx: &mut MonsterContext<'_>) -> f32 {
    let col = ctx.rng.gen_range(RANDOM_TARGET_MIN_TILE..RANDOM_TARGET_MIN_TILE + RANDOM_TARGET_SPAN);
    col as f32 * TILE_SIZE
}

/// Step horizontally toward `target_x`, blocked by terrain. Returns `true`
/// once the Outlaw stands on `target_x`.
fn slide_toward_x(monster: &mut Monster, target_x: f32, ctx: &MonsterContext<'_>) -> bool {
    let dx = target_x - monster.bounds.x;
    if dx.abs() <= f32::EPSILON {
        return true;
    }
    let step = dx.clamp(-monster.speed, monster.speed);
    let attempted = monster.bounds.translated(Vec2::new(step, 0.0));
    if ctx.map.blocks(&attempted) || ctx.occupancy.is_blocked(&attempted) {
        // Stuck against cover counts as arrived so a new lane gets picked.
        return true;
    }
    monster.bounds = attempted;
    (target_x - monster.bounds.x).abs() <= f32::EPSILON
}
