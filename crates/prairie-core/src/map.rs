//! Tile map and the per-wave layout table.
//!
//! Layouts are 16 rows of 16 characters:
//!
//! | char | tile |
//! |------|------|
//! | `B`  | barrier (fence posts along the border) |
//! | `b`  | barrier (tombstones, crates) |
//! | `r`  | rocky ground |
//! | `d`  | desert sand |
//! | `g`  | grass |
//! | `c`  | cactus |
//! | `f`  | fence |
//! | `t`  | trench |
//! | `T`  | trench (water) |
//! | `=`  | bridge |
//! | `.`  | the world's floor |

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Tile, WorldKind};
use crate::types::Rect;

type Layout = [&'static str; MAP_HEIGHT];

const OPEN_FIELD: Layout = [
    "BBBBBBB..BBBBBBB",
    "B..............B",
    "B..............B",
    "B..............B",
    "B...c......c...B",
    "B..............B",
    "B..............B",
    "................",
    "................",
    "B..............B",
    "B..............B",
    "B...c......c...B",
    "B..............B",
    "B..............B",
    "B..............B",
    "BBBBBBB..BBBBBBB",
];

const CORNER_FENCES: Layout = [
    "BBBBBBB..BBBBBBB",
    "B..............B",
    "B..............B",
    "B..ff......ff..B",
    "B..f........f..B",
    "B..............B",
    "B..............B",
    "................",
    "................",
    "B..............B",
    "B..............B",
    "B..f........f..B",
    "B..ff......ff..B",
    "B..............B",
    "B..............B",
    "BBBBBBB..BBBBBBB",
];

const CACTUS_CROSS: Layout = [
    "BBBBBBB..BBBBBBB",
    "B..............B",
    "B..............B",
    "B..............B",
    "B......cc......B",
    "B..............B",
    "B..............B",
    "....c......c....",
    "....c......c....",
    "B..............B",
    "B..............B",
    "B......cc......B",
    "B..............B",
    "B..............B",
    "B..............B",
    "BBBBBBB..BBBBBBB",
];

const OUTLAW_CORRAL: Layout = [
    "BBBBBBBBBBBBBBBB",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B.ff.ff..ff.ff.B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B...c......c...B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "BBBBBBBBBBBBBBBB",
];

const RIVER_CROSSING: Layout = [
    "BBBBBBB..BBBBBBB",
    "B..............B",
    "B..............B",
    "B...c......c...B",
    "B..............B",
    "B..............B",
    "B..............B",
    "................",
    "................",
    "B..............B",
    "BTTTTTT==TTTTTTB",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "BBBBBBB..BBBBBBB",
];

const TRENCH_RING: Layout = [
    "BBBBBBB..BBBBBBB",
    "B..............B",
    "B..............B",
    "B...tttt=ttt...B",
    "B...t......t...B",
    "B...t......t...B",
    "B..............B",
    "................",
    "................",
    "B..............B",
    "B...t......t...B",
    "B...t......t...B",
    "B...ttt=tttt...B",
    "B..............B",
    "B..............B",
    "BBBBBBB..BBBBBBB",
];

const GRAVEYARD_ROWS: Layout = [
    "BBBBBBB..BBBBBBB",
    "B..............B",
    "B..r.......r...B",
    "B..............B",
    "B...b......b...B",
    "B..............B",
    "B..............B",
    "......b..b......",
    "......b..b......",
    "B..............B",
    "B..............B",
    "B...b......b...B",
    "B..............B",
    "B...r.......r..B",
    "B..............B",
    "BBBBBBB..BBBBBBB",
];

const DRACULA_CRYPT: Layout = [
    "BBBBBBBBBBBBBBBB",
    "B..............B",
    "B..............B",
    "B..b........b..B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..b........b..B",
    "B..............B",
    "B..............B",
    "BBBBBBBBBBBBBBBB",
];

const SHOP: Layout = [
    "BBBBBBBBBBBBBBBB",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "B..............B",
    "BBBBBBB..BBBBBBB",
];

/// Wave-specific layouts. Waves without an entry use [`OPEN_FIELD`].
fn layout_for_wave(wave: u32) -> Option<&'static Layout> {
    match wave {
        1 => Some(&CORNER_FENCES),
        2 => Some(&CACTUS_CROSS),
        3 | 7 => Some(&OUTLAW_CORRAL),
        5 => Some(&RIVER_CROSSING),
        6 => Some(&TRENCH_RING),
        9 | 10 => Some(&GRAVEYARD_ROWS),
        11 => Some(&DRACULA_CRYPT),
        _ => None,
    }
}

/// A 16x16 grid of tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMap {
    tiles: Vec<Tile>,
    world: WorldKind,
}

impl TileMap {
    /// Layout for `wave`, or the open-field default if the wave has none.
    pub fn for_wave(wave: u32, world: WorldKind) -> Self {
        Self::from_layout(layout_for_wave(wave).unwrap_or(&OPEN_FIELD), world)
    }

    /// Whether `wave` has a dedicated layout.
    pub fn has_layout(wave: u32) -> bool {
        layout_for_wave(wave).is_some()
    }

    pub fn shop(world: WorldKind) -> Self {
        Self::from_layout(&SHOP, world)
    }

    /// Parse a layout. Unknown characters become floor.
    pub fn from_layout(rows: &[&str; MAP_HEIGHT], world: WorldKind) -> Self {
        let floor = floor_tile(world);
        let mut tiles = vec![floor; MAP_WIDTH * MAP_HEIGHT];
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(MAP_WIDTH).enumerate() {
                tiles[row * MAP_WIDTH + col] = match ch {
                    'B' => Tile::Barrier1,
                    'b' => Tile::Barrier2,
                    'r' => Tile::Rocky,
                    'd' => Tile::Desert,
                    'g' => Tile::Grassy,
                    'c' => Tile::Cactus,
                    'f' => Tile::Fence,
                    't' => Tile::Trench1,
                    'T' => Tile::Trench2,
                    '=' => Tile::Bridge,
                    _ => floor,
                };
            }
        }
        Self { tiles, world }
    }

    pub fn world(&self) -> WorldKind {
        self.world
    }

    /// Tile at a grid coordinate, `None` outside the map.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        if col >= MAP_WIDTH || row >= MAP_HEIGHT {
            return None;
        }
        self.tiles.get(row * MAP_WIDTH + col).copied()
    }

    pub fn set_tile(&mut self, col: usize, row: usize, tile: Tile) {
        if col < MAP_WIDTH && row < MAP_HEIGHT {
            self.tiles[row * MAP_WIDTH + col] = tile;
        }
    }

    /// Tile under a pixel position, `None` outside the map.
    pub fn tile_at(&self, point: Vec2) -> Option<Tile> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        self.tile((point.x / TILE_SIZE) as usize, (point.y / TILE_SIZE) as usize)
    }

    /// Pixel bounds of the whole map.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, MAP_PIXEL_SIZE, MAP_PIXEL_SIZE)
    }

    /// True if `rect` leaves the map or touches any impassable tile.
    pub fn blocks(&self, rect: &Rect) -> bool {
        if rect.x < 0.0 || rect.y < 0.0 || rect.right() > MAP_PIXEL_SIZE || rect.bottom() > MAP_PIXEL_SIZE {
            return true;
        }
        let first_col = (rect.x / TILE_SIZE) as usize;
        let first_row = (rect.y / TILE_SIZE) as usize;
        // Shared edges do not count as overlap.
        let last_col = ((rect.right() - 0.001) / TILE_SIZE) as usize;
        let last_row = ((rect.bottom() - 0.001) / TILE_SIZE) as usize;
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                match self.tile(col, row) {
                    Some(tile) if tile.is_passable() => {}
                    _ => return true,
                }
            }
        }
        false
    }

    /// Tile-aligned rectangle for a grid coordinate.
    pub fn tile_rect(col: usize, row: usize) -> Rect {
        Rect::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE, TILE_SIZE, TILE_SIZE)
    }

    /// Every tile with its grid coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| (i % MAP_WIDTH, i / MAP_WIDTH, *tile))
    }
}

fn floor_tile(world: WorldKind) -> Tile {
    match world {
        WorldKind::Desert => Tile::Desert,
        WorldKind::Woods => Tile::Grassy,
        WorldKind::Graveyard => Tile::Rocky,
    }
}
