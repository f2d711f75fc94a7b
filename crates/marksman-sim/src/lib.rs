//! Simulation engine for the marksman trainer.
//!
//! Owns the hecs ECS world, advances the session one frame at a time
//! from caller-supplied timestamps, and produces FrameSnapshots for
//! the renderer. Completely headless, enabling deterministic testing.

pub mod collision;
pub mod engine;
pub mod raycast;
pub mod room;
pub mod systems;
pub mod world_setup;

pub use engine::RangeEngine;
pub use marksman_core as core;

#[cfg(test)]
mod tests;
