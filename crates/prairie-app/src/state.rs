//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail, Result};

use prairie_core::commands::InputState;
use prairie_core::state::FrameSnapshot;

use crate::game_loop::{self, LoopOptions};

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Replace the held-action set used for the following frames.
    Input(InputState),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in a `Mutex` so the state stays `Sync`
/// - the latest snapshot is shared with the loop thread through an `Arc`
pub struct AppState {
    /// `None` until `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each frame.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread unless one is already running.
    pub fn start_simulation(&self, options: LoopOptions) -> Result<()> {
        let mut running = self.running.lock().map_err(|e| anyhow!(e.to_string()))?;
        if *running {
            bail!("simulation already running");
        }

        let cmd_tx = game_loop::spawn_game_loop(options, self.latest_snapshot.clone())?;

        let mut tx_lock = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        *tx_lock = Some(cmd_tx);
        *running = true;
        Ok(())
    }

    /// Forward the current held-action set to the loop.
    pub fn send_input(&self, input: InputState) -> Result<()> {
        self.send(GameLoopCommand::Input(input))
    }

    /// Most recent frame, for polling.
    pub fn get_snapshot(&self) -> Result<Option<FrameSnapshot>> {
        let lock = self.latest_snapshot.lock().map_err(|e| anyhow!(e.to_string()))?;
        Ok(lock.clone())
    }

    pub fn shutdown(&self) -> Result<()> {
        let mut running = self.running.lock().map_err(|e| anyhow!(e.to_string()))?;
        if !*running {
            return Ok(());
        }
        self.send(GameLoopCommand::Shutdown)?;
        let mut tx_lock = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        *tx_lock = None;
        *running = false;
        Ok(())
    }

    fn send(&self, command: GameLoopCommand) -> Result<()> {
        let tx_lock = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| anyhow!("failed to send command: {e}")),
            None => bail!("simulation not started"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prairie_core::commands::Action;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let err = state
            .send_input(InputState::new().with(Action::Confirm))
            .unwrap_err();
        assert!(err.to_string().contains("not started"));
    }

    #[test]
    fn test_shutdown_when_idle_is_noop() {
        let state = AppState::new();
        assert!(state.shutdown().is_ok());
        assert!(!*state.running.lock().unwrap());
    }
}
