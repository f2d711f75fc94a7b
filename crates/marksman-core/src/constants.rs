//! Simulation constants and tuning parameters.

/// Frame rate the app loop targets (Hz). The engine itself is
/// frame-rate independent; this only paces the shell thread.
pub const FRAME_RATE: u32 = 60;

// --- Mouse look ---

/// Degrees of rotation per pointer count at sensitivity 1.0.
/// Matches the CS:GO reference mapping so imported sensitivities feel right.
pub const DEGREES_PER_COUNT: f64 = 0.022;

// --- Collision ---

/// Distance at which a movement direction is blocked by an obstacle
/// (world units along the cast ray).
pub const COLLISION_CLEARANCE: f64 = 50.0;

/// Tolerance for ray/plane intersection tests.
pub const RAY_EPSILON: f64 = 1e-9;

// --- Targets ---

/// Targets sit this far in front of the target wall so they never
/// z-fight with it and are always the nearest intersection.
pub const TARGET_WALL_OFFSET: f64 = 10.0;

/// Opacity of a target at zero remaining hitpoints.
pub const TARGET_OPACITY_FLOOR: f64 = 0.2;

/// Opacity range scaled by remaining hitpoints fraction.
pub const TARGET_OPACITY_RANGE: f64 = 0.8;

// --- Camera ---

/// Near clip plane handed to the renderer.
pub const CAMERA_NEAR: f64 = 0.1;

// --- Scene colors (0xRRGGBB) ---

pub const FLOOR_COLOR: u32 = 0xCCCCCC;
pub const WALL_COLOR: u32 = 0xEEEEEE;
pub const TARGET_WALL_COLOR: u32 = 0xFFFFCC;
pub const HIT_MARKER_COLOR: u32 = 0x0000FF;
