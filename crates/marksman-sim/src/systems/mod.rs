//! Per-frame systems, invoked by the engine in a fixed order:
//! locomotion, spawning, target update, marker expiry, firing, and —
//! for each shot the firing system produces — the hit test. The
//! snapshot builder runs after everything else; the timer shifter
//! only on resume.

pub mod firing;
pub mod locomotion;
pub mod markers;
pub mod snapshot;
pub mod spawner;
pub mod target_update;
pub mod timers;
