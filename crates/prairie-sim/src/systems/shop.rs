//! Shop system: merchant scroll-in, counter purchases and the exit trigger.

use prairie_core::commands::{Action, InputSource};
use prairie_core::enums::StoreItem;
use prairie_core::events::SoundCue;
use prairie_core::map::TileMap;
use prairie_core::types::Countdown;

use crate::player::Player;
use crate::session::Session;
use crate::shop::{self, Purchase, StoreSlot};
use crate::systems;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopOutcome {
    /// The player asked to leave.
    pub exit: bool,
    pub bought: Option<StoreItem>,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    player: &mut Player,
    store: &mut Vec<StoreSlot>,
    session: &mut Session,
    input: &dyn InputSource,
    map: &TileMap,
    scroll: &mut Countdown,
    delta_ms: f32,
    cues: &mut Vec<SoundCue>,
) -> ShopOutcome {
    let mut outcome = ShopOutcome::default();
    scroll.tick(delta_ms);
    if scroll.is_active() {
        return outcome;
    }

    systems::player::step(
        player,
        input,
        map,
        session,
        false,
        Some(shop::merchant_box()),
        delta_ms,
        cues,
    );

    let bounds = player.bounds();
    if let Some(index) = store.iter().position(|slot| slot.bounds.intersects(&bounds)) {
        if let Purchase::Bought(item) = shop::purchase(store[index].item, session) {
            store.remove(index);
            cues.push(SoundCue::Purchase);
            outcome.bought = Some(item);
        }
    }

    outcome.exit = input.is_held(Action::Exit) || shop::exit_trigger().intersects(&player.bounds());
    outcome
}
