//! Merchant stock and purchases.

use glam::Vec2;

use prairie_core::constants::*;
use prairie_core::enums::{StoreItem, WorldKind};
use prairie_core::types::Rect;

use crate::player::tile_position;
use crate::session::{Session, Upgrades};

/// One item on the merchant's counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreSlot {
    pub item: StoreItem,
    pub bounds: Rect,
}

/// Result of a purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    Bought(StoreItem),
    TooExpensive,
}

#[derive(Debug, Clone, Copy)]
enum Ladder {
    FireSpeed,
    RunSpeed,
    Ammo,
    Life,
}

fn ladders_for(world: WorldKind) -> [Ladder; 3] {
    match world {
        WorldKind::Desert => [Ladder::FireSpeed, Ladder::RunSpeed, Ladder::Life],
        WorldKind::Woods => [Ladder::FireSpeed, Ladder::Ammo, Ladder::RunSpeed],
        WorldKind::Graveyard => [Ladder::Ammo, Ladder::FireSpeed, Ladder::Life],
    }
}

fn next_rung(ladder: Ladder, upgrades: &Upgrades) -> Option<StoreItem> {
    match ladder {
        Ladder::FireSpeed => match upgrades.fire_speed {
            0 => Some(StoreItem::FireSpeed1),
            1 => Some(StoreItem::FireSpeed2),
            2 => Some(StoreItem::FireSpeed3),
            _ => None,
        },
        Ladder::RunSpeed => match upgrades.run_speed {
            0 => Some(StoreItem::RunSpeed1),
            1 => Some(StoreItem::RunSpeed2),
            _ => None,
        },
        Ladder::Ammo => match upgrades.ammo {
            0 => Some(StoreItem::Ammo1),
            1 => Some(StoreItem::Ammo2),
            2 => Some(StoreItem::Ammo3),
            _ if !upgrades.spread_pistol => Some(StoreItem::SpreadPistol),
            _ => None,
        },
        Ladder::Life => Some(StoreItem::Life),
    }
}

/// Three slots for `world`. Maxed ladders fall back to Life, and from the
/// second round on Life is replaced by the Sheriff Star.
pub fn build_store(world: WorldKind, upgrades: &Upgrades, round: u32) -> Vec<StoreSlot> {
    ladders_for(world)
        .iter()
        .enumerate()
        .map(|(i, ladder)| {
            let mut item = next_rung(*ladder, upgrades).unwrap_or(StoreItem::Life);
            if item == StoreItem::Life && round > 0 {
                item = StoreItem::Star;
            }
            let position = tile_position((SHOP_FIRST_ITEM_COLUMN + i as f32, SHOP_ITEM_ROW));
            StoreSlot {
                item,
                bounds: Rect::at(position, Vec2::splat(TILE_SIZE)),
            }
        })
        .collect()
}

/// Deduct the price and apply a permanent upgrade. The Sheriff Star is not
/// applied here; the caller hands it to the powerup engine.
pub fn purchase(item: StoreItem, session: &mut Session) -> Purchase {
    let price = item.price();
    if session.coins < price {
        return Purchase::TooExpensive;
    }
    session.coins -= price;
    let upgrades = &mut session.upgrades;
    match item {
        StoreItem::FireSpeed1 | StoreItem::FireSpeed2 | StoreItem::FireSpeed3 => {
            upgrades.fire_speed += 1;
        }
        StoreItem::RunSpeed1 | StoreItem::RunSpeed2 => upgrades.run_speed += 1,
        StoreItem::Ammo1 | StoreItem::Ammo2 | StoreItem::Ammo3 => upgrades.ammo += 1,
        StoreItem::SpreadPistol => upgrades.spread_pistol = true,
        StoreItem::Life => session.lives += 1,
        StoreItem::Star => {}
    }
    Purchase::Bought(item)
}

/// Merchant body; the player cannot walk through it.
pub fn merchant_box() -> Rect {
    Rect::at(tile_position(MERCHANT_TILE), Vec2::splat(TILE_SIZE))
}

/// Walking onto the bottom gate leaves the shop.
pub fn exit_trigger() -> Rect {
    let first = GATE_TILES[0] as f32;
    let row = (MAP_HEIGHT - 1) as f32;
    Rect::at(
        tile_position((first, row)),
        Vec2::new(GATE_TILES.len() as f32 * TILE_SIZE, TILE_SIZE),
    )
}
