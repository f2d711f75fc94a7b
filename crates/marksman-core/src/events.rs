//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

/// Short sound cues for the shell's audio player. The player is
/// expected to restart a cue that is already playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioCue {
    /// A shot struck a target.
    Hit,
    /// A shot struck nothing or only the wall.
    Miss,
    /// Trigger squeezed on an empty clip.
    ClipEmpty,
}
