//! Frame snapshot — the complete visible state handed to the
//! renderer and UI after each frame, plus the static scene view
//! built once per session.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::SessionPhase;
use crate::events::AudioCue;

/// Per-frame view of the session. Built strictly after the update
/// phase; nothing mutates simulation state once it exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Engine clock at this frame, seconds.
    pub time: f64,
    pub phase: SessionPhase,
    pub camera: CameraView,
    pub targets: Vec<TargetView>,
    pub hit_markers: Vec<HitMarkerView>,
    pub ammo: AmmoView,
    pub stats: StatsView,
    /// Cues emitted since the previous frame, in order.
    pub audio_cues: Vec<AudioCue>,
}

/// Camera pose for the renderer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: DVec3,
    pub yaw: f64,
    pub pitch: f64,
    /// Unit aim direction derived from yaw and pitch.
    pub direction: DVec3,
}

/// A live target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetView {
    pub position: DVec3,
    pub radius: f64,
    pub hitpoints: u32,
    /// Damage feedback, driven by remaining hitpoints.
    pub opacity: f64,
    pub color: u32,
}

/// A live impact marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitMarkerView {
    pub position: DVec3,
    pub size: f64,
    pub color: u32,
}

/// Weapon status for the HUD.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AmmoView {
    pub clip_size: u32,
    pub rounds_in_clip: u32,
    pub reloading: bool,
    pub infinite_ammo: bool,
}

/// Accuracy stats for the pause/end screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    pub hits: u32,
    pub attempts: u32,
    /// Whole-percent accuracy, rounded down; 0 when no attempts.
    pub accuracy_percent: u32,
    pub targets_destroyed: u32,
    pub targets_generated: u32,
    pub current_hit_streak: u32,
}

/// Static scene description built once per session: the room panels
/// and the camera projection the renderer should use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneView {
    pub panels: Vec<PanelView>,
    pub camera: CameraConfig,
}

/// One rectangular panel of the room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PanelView {
    pub center: DVec3,
    /// In-plane half-extent axes.
    pub half_u: DVec3,
    pub half_v: DVec3,
    pub color: u32,
    /// Invisible panels still block movement but are not drawn.
    pub visible: bool,
}

/// Projection parameters for the renderer camera.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraConfig {
    pub vertical_fov_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}
