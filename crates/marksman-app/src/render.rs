//! Renderer and audio seams.
//!
//! The simulation core treats both as opaque consumers: the renderer
//! gets the static scene plus one snapshot per frame, the cue player
//! gets fire-and-forget sound cues. The logging implementations here
//! stand in when no graphics or audio stack is attached.

use marksman_core::events::AudioCue;
use marksman_core::state::{FrameSnapshot, SceneView};

/// Consumes one frame per loop iteration. No other contract.
pub trait Renderer {
    fn render(&mut self, scene: &SceneView, frame: &FrameSnapshot);
}

/// Plays a short cue immediately, restarting it if already playing.
pub trait CuePlayer {
    fn play(&mut self, cue: AudioCue);
}

/// Headless renderer: traces frame content instead of drawing it.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames_rendered: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, _scene: &SceneView, frame: &FrameSnapshot) {
        self.frames_rendered += 1;
        log::trace!(
            "frame t={:.3} phase={:?} targets={} markers={} ammo={}/{}",
            frame.time,
            frame.phase,
            frame.targets.len(),
            frame.hit_markers.len(),
            frame.ammo.rounds_in_clip,
            frame.ammo.clip_size,
        );
        if self.frames_rendered % 600 == 0 {
            log::debug!(
                "{} frames rendered, {} targets live",
                self.frames_rendered,
                frame.targets.len()
            );
        }
    }
}

/// Headless cue player: logs each cue.
#[derive(Debug, Default)]
pub struct LogCuePlayer;

impl CuePlayer for LogCuePlayer {
    fn play(&mut self, cue: AudioCue) {
        log::debug!("audio cue: {cue:?}");
    }
}
