//! Player commands sent from the shell to the simulation.
//!
//! Commands are queued and processed at the next frame boundary, so
//! input callbacks never race with the per-frame update.

use serde::{Deserialize, Serialize};

use crate::enums::MoveKey;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    // --- Look / movement ---
    /// Relative pointer motion in input counts.
    PointerDelta { dx: f64, dy: f64 },
    /// A directional key was pressed.
    KeyDown { key: MoveKey },
    /// A directional key was released. Honored even while paused so
    /// no movement flag is left stuck across a pause.
    KeyUp { key: MoveKey },

    // --- Weapon ---
    /// Fire button pressed.
    TriggerDown,
    /// Fire button released. Clears the firing flag even while paused.
    TriggerUp,
    /// Explicit reload request.
    Reload,

    // --- Session control ---
    /// Start the session from the ready phase.
    Start,
    /// Pause the session, freezing all timers.
    Pause,
    /// Resume a paused session, shifting timers by the paused duration.
    Resume,
    /// End the session and release everything it owns. Terminal.
    End,
}
