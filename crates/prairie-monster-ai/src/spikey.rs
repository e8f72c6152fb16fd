//! Spikey lifecycle: roam to a target, form invisibly, then sit as a trap.

use glam::Vec2;

use prairie_core::components::Monster;
use prairie_core::constants::*;
use prairie_core::enums::SpikeyStage;

use crate::behavior::MonsterContext;
use crate::steering::walk;

pub fn step(monster: &mut Monster, delta_ms: f32, ctx: &mut MonsterContext<'_>) {
    match monster.spikey {
        SpikeyStage::Roaming => {
            if monster.flash.is_active() {
                return;
            }
            let had_target = monster.target != Vec2::ZERO;
            walk(monster, ctx);
            if had_target && monster.target == Vec2::ZERO {
                begin_forming(monster);
            }
        }
        SpikeyStage::Forming => {
            if monster.forming.tick(delta_ms) {
                finish_forming(monster);
            }
        }
        SpikeyStage::Trap => {}
    }
}

/// Target reached: vanish while the trap assembles.
pub fn begin_forming(monster: &mut Monster) {
    monster.spikey = SpikeyStage::Forming;
    monster.invisible = true;
    monster
        .forming
        .arm(SPIKEY_FORMING_FRAMES as f32 * SPIKEY_FORMING_FRAME_MS);
}

pub fn finish_forming(monster: &mut Monster) {
    monster.spikey = SpikeyStage::Trap;
    monster.invisible = false;
    monster.special = true;
    monster.health += SPIKEY_TRAP_HEALTH_BONUS;
}
