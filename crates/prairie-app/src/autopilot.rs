//! Scripted player used for headless runs and soak tests.

use prairie_core::commands::{Action, InputSource, InputState};
use prairie_core::constants::TILE_SIZE;
use prairie_core::enums::{Direction, GamePhase};
use prairie_core::state::{FrameSnapshot, MonsterView};
use prairie_core::Vec2;

/// Frames spent walking in one direction before turning.
const PATROL_LEG_FRAMES: u64 = 45;

/// Monsters closer than this make the autopilot back away.
const RETREAT_DISTANCE: f32 = TILE_SIZE * 2.0;

/// Held items are spent once a monster gets this close.
const PANIC_DISTANCE: f32 = TILE_SIZE * 3.0;

const PATROL: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Up,
];

/// Produces one held-action set per frame from the previous snapshot.
#[derive(Debug, Default)]
pub struct Autopilot {
    frame: u64,
    last: InputState,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_input(&mut self, snapshot: Option<&FrameSnapshot>) -> InputState {
        self.frame += 1;
        let mut input = InputState::new();

        match snapshot.map(|s| s.phase) {
            None | Some(GamePhase::StartMenu) | Some(GamePhase::GameOver) => {
                self.tap(&mut input, Action::Confirm);
            }
            Some(GamePhase::Playing) | Some(GamePhase::BetweenWaves) => {
                if let Some(snapshot) = snapshot {
                    self.fight(snapshot, &mut input);
                }
            }
            // The exit sits at the bottom edge of the shop.
            Some(GamePhase::Shopping) => input.press(Action::MoveDown),
            Some(GamePhase::Died) | Some(GamePhase::EndCutscene) => {}
        }

        self.last = input;
        input
    }

    /// Press `action` only if it was released last frame, so edge-triggered
    /// actions fire.
    fn tap(&self, input: &mut InputState, action: Action) {
        if !self.last.is_held(action) {
            input.press(action);
        }
    }

    fn fight(&self, snapshot: &FrameSnapshot, input: &mut InputState) {
        let me = snapshot.player.bounds.center();
        let nearest = nearest_monster(snapshot, me);

        let patrol = PATROL[((self.frame / PATROL_LEG_FRAMES) % PATROL.len() as u64) as usize];
        let heading = match nearest {
            Some((_, offset)) if offset.length() < RETREAT_DISTANCE => dominant_direction(-offset),
            _ => patrol,
        };
        input.press(Action::movement(heading));

        let Some((_, offset)) = nearest else {
            return;
        };
        input.press(Action::shooting(dominant_direction(offset)));

        if snapshot.session.held_item.is_some() && offset.length() < PANIC_DISTANCE {
            self.tap(input, Action::UseItem);
        }
    }
}

/// Closest visible monster and its offset from `from`.
fn nearest_monster(snapshot: &FrameSnapshot, from: Vec2) -> Option<(&MonsterView, Vec2)> {
    snapshot
        .monsters
        .iter()
        .filter(|m| !m.invisible)
        .map(|m| (m, m.bounds.center() - from))
        .min_by(|a, b| a.1.length_squared().total_cmp(&b.1.length_squared()))
}

fn dominant_direction(offset: Vec2) -> Direction {
    if offset.x.abs() >= offset.y.abs() {
        if offset.x >= 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if offset.y >= 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}
