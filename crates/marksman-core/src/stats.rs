//! Session accuracy statistics.

use serde::{Deserialize, Serialize};

/// Monotonic counters for one session, owned by the engine and reset
/// only by starting a new session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Shots that struck a target.
    pub hits: u32,
    /// Every hit-tested shot, hit or miss.
    pub attempts: u32,
    /// Targets whose hitpoints were driven to zero.
    pub targets_destroyed: u32,
    /// Targets spawned this session.
    pub targets_generated: u32,
    /// Consecutive hits; resets to zero on a miss.
    pub current_hit_streak: u32,
}

impl SessionStats {
    /// Accuracy as a whole percentage, rounded down; zero attempts
    /// reads as zero percent.
    pub fn accuracy_percent(&self) -> u32 {
        if self.attempts == 0 {
            0
        } else {
            self.hits * 100 / self.attempts
        }
    }
}
