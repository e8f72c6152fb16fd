use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use prairie_app::autopilot::Autopilot;
use prairie_app::collaborators::{CountingRenderer, TracingAudio};
use prairie_app::game_loop::{self, LoopOptions, FRAME_DURATION};
use prairie_app::state::AppState;
use prairie_core::config::TuningConfig;
use prairie_core::constants::TARGET_FRAME_MS;
use prairie_core::state::FrameSnapshot;
use prairie_sim::engine::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "prairie")]
#[command(about = "Run the Prairie simulation under an autopilot")]
struct Cli {
    /// RNG seed; the same seed replays the same run
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// JSON tuning overrides
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pace the run on the game loop thread instead of as fast as possible
    #[arg(long)]
    realtime: bool,
    /// Write saved progress to this JSON file
    #[arg(long)]
    save: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let tuning = match &cli.config {
        Some(path) => TuningConfig::from_path(path)
            .with_context(|| format!("failed to load tuning config {}", path.display()))?,
        None => TuningConfig::default(),
    };
    let options = LoopOptions {
        config: SimConfig {
            seed: cli.seed,
            tuning,
        },
        save_path: cli.save.clone(),
    };

    info!(seed = cli.seed, frames = cli.frames, realtime = cli.realtime, "starting run");
    let started = Instant::now();

    let last = if cli.realtime {
        run_realtime(options, cli.frames)?
    } else {
        run_headless(options, cli.frames)
    };

    match last {
        Some(snapshot) => info!(
            phase = ?snapshot.phase,
            wave = snapshot.session.wave,
            round = snapshot.session.round,
            lives = snapshot.session.lives,
            coins = snapshot.session.coins,
            score = snapshot.session.score,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "run finished"
        ),
        None => info!("run finished without a frame"),
    }
    Ok(())
}

fn run_headless(options: LoopOptions, frames: u64) -> Option<FrameSnapshot> {
    let mut engine = game_loop::build_engine(options);
    let mut pilot = Autopilot::new();
    let mut renderer = CountingRenderer::default();
    let mut audio = TracingAudio::default();
    let mut last: Option<FrameSnapshot> = None;

    for _ in 0..frames {
        let input = pilot.next_input(last.as_ref());
        let snapshot = engine.tick(&input, TARGET_FRAME_MS);
        game_loop::present(&snapshot, &mut renderer, &mut audio);
        renderer.end_frame();

        let changed = last
            .as_ref()
            .map_or(true, |prev| prev.session.wave != snapshot.session.wave || prev.phase != snapshot.phase);
        if changed {
            info!(
                frame = snapshot.time.frame,
                phase = ?snapshot.phase,
                wave = snapshot.session.wave,
                "progress"
            );
        }
        last = Some(snapshot);
    }

    info!(
        quads = renderer.quads,
        text_lines = renderer.lines,
        sounds = audio.played,
        "presentation totals"
    );
    last
}

fn run_realtime(options: LoopOptions, frames: u64) -> Result<Option<FrameSnapshot>> {
    let state = AppState::new();
    state.start_simulation(options)?;
    let mut pilot = Autopilot::new();

    for _ in 0..frames {
        let snapshot = state.get_snapshot()?;
        state.send_input(pilot.next_input(snapshot.as_ref()))?;
        std::thread::sleep(FRAME_DURATION);
    }

    let last = state.get_snapshot()?;
    state.shutdown()?;
    Ok(last)
}
