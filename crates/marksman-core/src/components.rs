//! ECS components for hecs entities.
//!
//! Components are plain data structs; game logic lives in systems.
//! All timestamps are absolute seconds on the engine's clock, which
//! is what lets pause/resume shift them wholesale.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// First-person camera rig: yaw and pitch are two nested rotation
/// frames (pitch inside yaw) so pitching can never roll the view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraRig {
    pub position: DVec3,
    /// Horizontal rotation in radians. Unbounded.
    pub yaw: f64,
    /// Vertical rotation in radians, clamped to [-PI/2, PI/2].
    pub pitch: f64,
    /// Radians of rotation per pointer count.
    pub sens_multiplier: f64,
}

/// Currently held directional keys. Mutated only by key commands,
/// consulted every frame by the locomotion system.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveState {
    pub forward: bool,
    pub left: bool,
    pub back: bool,
    pub right: bool,
}

/// Per-frame movement integration state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Locomotion {
    /// Movement speed in world units per second.
    pub movespeed: f64,
    /// Timestamp of the previous locomotion update.
    pub prev_update_time: f64,
}

/// Weapon clip/reload/rate-of-fire state machine.
/// `clip_size == 0` means infinite ammo: the clip is never consumed
/// and reload requests are ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    pub clip_size: u32,
    /// Rounds remaining; always within [0, clip_size] for finite ammo.
    pub rounds_in_clip: u32,
    /// Shots per second. Validated positive before the engine sees it.
    pub rate_of_fire: f64,
    pub reload_duration_secs: f64,
    /// Trigger held and eligible to fire.
    pub firing: bool,
    pub reloading: bool,
    /// Timestamp of the last consumed shot window.
    pub prev_fire_time: f64,
    /// Timestamp the current reload began.
    pub reload_started_at: f64,
}

impl Weapon {
    pub fn infinite_ammo(&self) -> bool {
        self.clip_size == 0
    }
}

/// Marks a target entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target;

/// Target placement and in-plane motion. Targets live on the target
/// wall plane; velocity is two-dimensional within that plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetBody {
    pub position: DVec3,
    pub velocity: DVec2,
    pub radius: f64,
}

/// Remaining hitpoints. A target reaching zero is despawned within
/// the same frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitpoints {
    pub current: u32,
}

/// Absolute timestamps driving target behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetTimers {
    pub spawned_at: f64,
    pub last_hit_at: f64,
    pub last_turn_at: f64,
}

/// Render feedback derived from damage state every update tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetVisual {
    pub opacity: f64,
}

/// Transient impact marker. Not an entity: markers live in an
/// insertion-ordered queue on the engine and expire oldest-first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitMarker {
    pub position: DVec3,
    pub spawned_at: f64,
}
