//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Engine constructed, session not started yet.
    #[default]
    Ready,
    /// Frame updates advance the simulation.
    Running,
    /// Timers frozen, input ignored; resumable.
    Paused,
    /// Session torn down. Terminal.
    Ended,
}

/// Directional movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKey {
    Forward,
    Left,
    Back,
    Right,
}
