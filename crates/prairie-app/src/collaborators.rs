//! Concrete collaborators for headless and terminal hosts.
//!
//! None of these touch a GPU or an audio device. Assets become stable
//! name hashes, draw calls are tallied, sounds are traced and progress is
//! written as JSON.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, trace, warn};

use prairie_core::interfaces::{
    AssetProvider, AudioTrigger, DrawRequest, FontHandle, MusicHandle, Progress, ProgressSink,
    Renderer, SoundHandle, TextRequest, TextureHandle,
};

/// Issues handles by hashing asset names, so the same name always gets the
/// same handle across runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashedAssets;

impl HashedAssets {
    fn handle(kind: &str, name: &str) -> u32 {
        let handle = fnv1a(name.as_bytes());
        trace!(kind, name, handle, "resolved asset");
        handle
    }
}

impl AssetProvider for HashedAssets {
    fn texture(&self, name: &str) -> TextureHandle {
        TextureHandle(Self::handle("texture", name))
    }

    fn sound(&self, name: &str) -> SoundHandle {
        SoundHandle(Self::handle("sound", name))
    }

    fn font(&self, name: &str) -> FontHandle {
        FontHandle(Self::handle("font", name))
    }

    fn music(&self, name: &str) -> MusicHandle {
        MusicHandle(Self::handle("music", name))
    }
}

/// 32-bit FNV-1a.
fn fnv1a(bytes: &[u8]) -> u32 {
    const OFFSET: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;
    bytes
        .iter()
        .fold(OFFSET, |hash, &b| (hash ^ u32::from(b)).wrapping_mul(PRIME))
}

/// Renderer that only counts what it is asked to draw.
#[derive(Debug, Default)]
pub struct CountingRenderer {
    pub quads: u64,
    pub lines: u64,
    pub last_frame_quads: usize,
    frame_quads: usize,
}

impl CountingRenderer {
    /// Close the current frame and start counting the next one.
    pub fn end_frame(&mut self) {
        self.last_frame_quads = self.frame_quads;
        self.frame_quads = 0;
    }
}

impl Renderer for CountingRenderer {
    fn draw(&mut self, _request: &DrawRequest) {
        self.quads += 1;
        self.frame_quads += 1;
    }

    fn text(&mut self, request: &TextRequest) {
        self.lines += 1;
        trace!(text = %request.text, "hud text");
    }
}

/// Audio backend stand-in that logs every sound it is asked to play.
#[derive(Debug, Default)]
pub struct TracingAudio {
    pub played: u64,
}

impl AudioTrigger for TracingAudio {
    fn play(&mut self, sound: SoundHandle) {
        self.played += 1;
        debug!(handle = sound.0, "play sound");
    }
}

/// Keeps the last saved progress and optionally mirrors it to a JSON file.
#[derive(Debug, Default)]
pub struct JsonProgressSink {
    path: Option<PathBuf>,
    last: Option<Progress>,
    saves: u32,
}

impl JsonProgressSink {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            last: None,
            saves: 0,
        }
    }

    pub fn last(&self) -> Option<&Progress> {
        self.last.as_ref()
    }

    pub fn saves(&self) -> u32 {
        self.saves
    }

    fn write(&self, progress: &Progress) -> anyhow::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(progress)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl ProgressSink for JsonProgressSink {
    fn save(&mut self, progress: &Progress) {
        self.saves += 1;
        info!(
            wave = progress.wave,
            round = progress.round,
            lives = progress.lives,
            coins = progress.coins,
            score = progress.score,
            "progress saved"
        );
        if let Err(err) = self.write(progress) {
            warn!(error = %err, "failed to write progress file");
        }
        self.last = Some(progress.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prairie_core::interfaces::{SpriteRegion, Tint};
    use prairie_core::types::Rect;

    #[test]
    fn test_fnv_known_values() {
        assert_eq!(fnv1a(b""), 0x811c_9dc5);
        assert_eq!(fnv1a(b"a"), 0xe40c_292c);
    }

    #[test]
    fn test_hashed_assets_stable_and_distinct() {
        let assets = HashedAssets;
        assert_eq!(assets.sound("cowboy_gunshot"), assets.sound("cowboy_gunshot"));
        assert_ne!(assets.sound("cowboy_gunshot"), assets.sound("cowboy_dead"));
        assert_eq!(assets.texture("cursors").0, assets.font("cursors").0);
    }

    #[test]
    fn test_counting_renderer_frames() {
        let mut renderer = CountingRenderer::default();
        let request = DrawRequest {
            texture: TextureHandle(1),
            source: SpriteRegion::Merchant,
            dest: Rect::new(0.0, 0.0, 48.0, 48.0),
            rotation: 0.0,
            tint: Tint::WHITE,
        };
        renderer.draw(&request);
        renderer.draw(&request);
        renderer.end_frame();
        renderer.draw(&request);
        assert_eq!(renderer.quads, 3);
        assert_eq!(renderer.last_frame_quads, 2);
    }

    #[test]
    fn test_progress_sink_writes_json() {
        let path = std::env::temp_dir().join(format!("prairie-progress-{}.json", std::process::id()));
        let mut sink = JsonProgressSink::new(Some(path.clone()));
        let progress = Progress {
            wave: 5,
            coins: 12,
            ..Progress::default()
        };
        sink.save(&progress);

        let written: Progress = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, progress);
        assert_eq!(sink.saves(), 1);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_progress_sink_survives_write_failure() {
        let path = std::env::temp_dir().join("prairie-missing-dir").join("nested").join("p.json");
        let mut sink = JsonProgressSink::new(Some(path));
        sink.save(&Progress::default());
        assert_eq!(sink.last(), Some(&Progress::default()));
    }
}
