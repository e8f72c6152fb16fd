//! Logical input actions.
//!
//! Raw keyboard and gamepad polling belongs to the caller; the simulation
//! only asks whether a logical action is currently held.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// Every action the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ShootUp,
    ShootDown,
    ShootLeft,
    ShootRight,
    UseItem,
    Confirm,
    Exit,
}

impl Action {
    pub const ALL: [Action; 11] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::ShootUp,
        Action::ShootDown,
        Action::ShootLeft,
        Action::ShootRight,
        Action::UseItem,
        Action::Confirm,
        Action::Exit,
    ];

    pub fn movement(direction: Direction) -> Action {
        match direction {
            Direction::Up => Action::MoveUp,
            Direction::Right => Action::MoveRight,
            Direction::Down => Action::MoveDown,
            Direction::Left => Action::MoveLeft,
        }
    }

    pub fn shooting(direction: Direction) -> Action {
        match direction {
            Direction::Up => Action::ShootUp,
            Direction::Right => Action::ShootRight,
            Direction::Down => Action::ShootDown,
            Direction::Left => Action::ShootLeft,
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Source of "is this action held right now" answers.
pub trait InputSource {
    fn is_held(&self, action: Action) -> bool;
}

/// A plain set of held actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    held: u16,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style press, handy for scripted input.
    pub fn with(mut self, action: Action) -> Self {
        self.press(action);
        self
    }

    pub fn press(&mut self, action: Action) {
        self.held |= action.bit();
    }

    pub fn release(&mut self, action: Action) {
        self.held &= !action.bit();
    }

    pub fn clear(&mut self) {
        self.held = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.held == 0
    }

    /// Snapshot any input source into a set.
    pub fn capture(source: &dyn InputSource) -> Self {
        let mut state = Self::new();
        for action in Action::ALL {
            if source.is_held(action) {
                state.press(action);
            }
        }
        state
    }
}

impl InputSource for InputState {
    fn is_held(&self, action: Action) -> bool {
        self.held & action.bit() != 0
    }
}
