//! Game loop thread: runs the simulation at the nominal frame rate and
//! publishes snapshots.
//!
//! The engine is created inside the thread so it never crosses a thread
//! boundary. Input arrives over an `mpsc` channel; the latest snapshot is
//! stored in shared state for polling.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use prairie_core::commands::InputState;
use prairie_core::constants::TARGET_FPS;
use prairie_core::interfaces::{AudioTrigger, Renderer};
use prairie_core::state::FrameSnapshot;
use prairie_sim::engine::{SimConfig, SimulationEngine};

use crate::collaborators::{CountingRenderer, HashedAssets, JsonProgressSink, TracingAudio};
use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FPS as u64);

/// What the loop thread needs to build its engine.
#[derive(Debug, Clone, Default)]
pub struct LoopOptions {
    pub config: SimConfig,
    /// Where saved progress is written, if anywhere.
    pub save_path: Option<PathBuf>,
}

/// Build an engine wired to the host collaborators.
pub fn build_engine(options: LoopOptions) -> SimulationEngine {
    SimulationEngine::with_collaborators(
        options.config,
        &HashedAssets,
        Box::new(JsonProgressSink::new(options.save_path)),
    )
}

/// Hand one frame's draw requests, text and sounds to the collaborators.
pub fn present(snapshot: &FrameSnapshot, renderer: &mut dyn Renderer, audio: &mut dyn AudioTrigger) {
    for request in &snapshot.draw_requests {
        renderer.draw(request);
    }
    for line in &snapshot.text {
        renderer.text(line);
    }
    for &sound in &snapshot.sounds {
        audio.play(sound);
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    options: LoopOptions,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> Result<mpsc::Sender<GameLoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("prairie-game-loop".into())
        .spawn(move || {
            run_game_loop(options, cmd_rx, &latest_snapshot);
        })
        .context("failed to spawn game loop thread")?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let mut engine = build_engine(options);
    let mut renderer = CountingRenderer::default();
    let mut audio = TracingAudio::default();
    let mut input = InputState::new();
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    info!("game loop started");

    loop {
        // 1. Drain pending commands; the newest input wins
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(state)) => input = state,
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(frames = engine.time().frame, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame by wall-clock time (the engine clamps it)
        let now = Instant::now();
        let delta_ms = (now - last_frame).as_secs_f32() * 1000.0;
        last_frame = now;
        let snapshot = engine.tick(&input, delta_ms);

        // 3. Present
        present(&snapshot, &mut renderer, &mut audio);
        renderer.end_frame();

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            debug!("game loop fell behind; resetting frame clock");
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autopilot::Autopilot;
    use crate::state::AppState;
    use prairie_core::commands::{Action, InputSource};
    use prairie_core::constants::TARGET_FRAME_MS;
    use prairie_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(InputState::new().with(Action::Confirm)))
            .unwrap();
        tx.send(GameLoopCommand::Input(InputState::new())).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Input(state) if state.is_held(Action::Confirm)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Input(state) if state.is_empty()));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_fits_in_a_frame() {
        let mut engine = build_engine(LoopOptions::default());
        let mut pilot = Autopilot::new();
        let mut snapshot = None;

        // Run enough frames to populate entities
        for _ in 0..300 {
            let input = pilot.next_input(snapshot.as_ref());
            snapshot = Some(engine.tick(&input, TARGET_FRAME_MS));
        }

        let snapshot = snapshot.unwrap();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < FRAME_DURATION,
            "Snapshot serialization took {:?}, should fit in one frame",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_present_forwards_everything() {
        let mut engine = build_engine(LoopOptions::default());
        let snapshot = engine.tick(&InputState::new().with(Action::Confirm), TARGET_FRAME_MS);
        let mut renderer = CountingRenderer::default();
        let mut audio = TracingAudio::default();

        present(&snapshot, &mut renderer, &mut audio);

        assert_eq!(renderer.quads as usize, snapshot.draw_requests.len());
        assert_eq!(renderer.lines as usize, snapshot.text.len());
        assert_eq!(audio.played as usize, snapshot.sounds.len());
    }

    #[test]
    fn test_loop_thread_starts_and_stops() {
        let state = AppState::new();
        state.start_simulation(LoopOptions::default()).unwrap();
        assert!(state.start_simulation(LoopOptions::default()).is_err());

        state
            .send_input(InputState::new().with(Action::Confirm))
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut phase = GamePhase::StartMenu;
        while Instant::now() < deadline {
            if let Some(snapshot) = state.get_snapshot().unwrap() {
                phase = snapshot.phase;
                if phase != GamePhase::StartMenu {
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(phase, GamePhase::Playing);

        state.shutdown().unwrap();
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
