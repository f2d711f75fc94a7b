//! Session settings: a flat mapping of numeric parameters.
//!
//! The simulation core receives an immutable snapshot of these at
//! construction and assumes they have been validated; changing
//! settings means building a new session, never mutating a live one.
//! A value of zero disables the optional target behaviors
//! (movement, lifespan, direction change, healing, hit markers) and
//! `clip_size == 0` selects infinite ammo, as in the settings form.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Flat session parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Render surface width in pixels; with `game_height`, fixes the
    /// scene aspect ratio.
    pub game_width: f64,
    pub game_height: f64,
    /// Mouse sensitivity on the reference 0.022 degrees-per-count scale.
    pub sensitivity: f64,
    /// Eye height above the floor.
    pub elevation: f64,
    /// Player movement speed in world units per second.
    pub movespeed: f64,
    /// Horizontal field of view in degrees.
    pub hfov: f64,
    /// Distance from the spawn point to the target wall.
    pub target_distance: f64,
    /// Fraction of the screen width the target wall spans.
    pub target_wall_ratio: f64,
    /// Target face color (0xRRGGBB).
    pub target_color: u32,
    /// Target radius.
    pub target_size: f64,
    /// Minimum spacing between spawns, seconds.
    pub target_interval_secs: f64,
    /// Population cap.
    pub max_targets: usize,
    /// In-plane target speed; 0 = stationary targets.
    pub target_speed: f64,
    /// Random direction change period; 0 = never.
    pub target_direction_change_secs: f64,
    /// Target lifespan; 0 = immortal until destroyed.
    pub target_lifespan_secs: f64,
    /// Magazine capacity; 0 = infinite ammo.
    pub clip_size: u32,
    /// Shots per second.
    pub rate_of_fire: f64,
    pub reload_duration_secs: f64,
    /// Hitpoints per fresh target.
    pub target_hitpoints: u32,
    /// Full heal after this long without damage; 0 = no healing.
    pub target_heal_secs: f64,
    /// Impact marker display duration; 0 = no markers.
    pub hit_marker_secs: f64,
    /// Impact marker edge length.
    pub hit_marker_size: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_width: 1920.0,
            game_height: 1080.0,
            sensitivity: 1.0,
            elevation: 185.0,
            movespeed: 550.0,
            hfov: 103.0,
            target_distance: 3000.0,
            target_wall_ratio: 0.4,
            target_color: 0xFF0000,
            target_size: 50.0,
            target_interval_secs: 0.5,
            max_targets: 5,
            target_speed: 0.0,
            target_direction_change_secs: 0.0,
            target_lifespan_secs: 0.0,
            clip_size: 0,
            rate_of_fire: 8.8,
            reload_duration_secs: 0.5,
            target_hitpoints: 5,
            target_heal_secs: 0.5,
            hit_marker_secs: 0.35,
            hit_marker_size: 5.0,
        }
    }
}

impl Settings {
    /// Check every parameter the core depends on. The engine divides
    /// by `rate_of_fire` and `game_width` and feeds `hfov` through
    /// `tan`, so those must be strictly inside their ranges here.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let finite = [
            ("game_width", self.game_width),
            ("game_height", self.game_height),
            ("sensitivity", self.sensitivity),
            ("elevation", self.elevation),
            ("movespeed", self.movespeed),
            ("hfov", self.hfov),
            ("target_distance", self.target_distance),
            ("target_wall_ratio", self.target_wall_ratio),
            ("target_size", self.target_size),
            ("target_interval_secs", self.target_interval_secs),
            ("target_speed", self.target_speed),
            ("target_direction_change_secs", self.target_direction_change_secs),
            ("target_lifespan_secs", self.target_lifespan_secs),
            ("rate_of_fire", self.rate_of_fire),
            ("reload_duration_secs", self.reload_duration_secs),
            ("target_heal_secs", self.target_heal_secs),
            ("hit_marker_secs", self.hit_marker_secs),
            ("hit_marker_size", self.hit_marker_size),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite(field));
            }
        }

        for (field, value) in [
            ("game_width", self.game_width),
            ("game_height", self.game_height),
            ("sensitivity", self.sensitivity),
            ("target_distance", self.target_distance),
            ("target_size", self.target_size),
            ("rate_of_fire", self.rate_of_fire),
        ] {
            if value <= 0.0 {
                return Err(SettingsError::NonPositive(field));
            }
        }

        for (field, value) in [
            ("elevation", self.elevation),
            ("movespeed", self.movespeed),
            ("target_interval_secs", self.target_interval_secs),
            ("target_speed", self.target_speed),
            ("target_direction_change_secs", self.target_direction_change_secs),
            ("target_lifespan_secs", self.target_lifespan_secs),
            ("reload_duration_secs", self.reload_duration_secs),
            ("target_heal_secs", self.target_heal_secs),
            ("hit_marker_secs", self.hit_marker_secs),
            ("hit_marker_size", self.hit_marker_size),
        ] {
            if value < 0.0 {
                return Err(SettingsError::Negative(field));
            }
        }

        if self.hfov <= 0.0 || self.hfov >= 180.0 {
            return Err(SettingsError::OutOfRange("hfov"));
        }
        if self.target_wall_ratio <= 0.0 || self.target_wall_ratio > 1.0 {
            return Err(SettingsError::OutOfRange("target_wall_ratio"));
        }
        if self.target_hitpoints == 0 {
            return Err(SettingsError::NonPositive("target_hitpoints"));
        }

        Ok(())
    }
}

/// Why a settings snapshot was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    NotFinite(&'static str),
    NonPositive(&'static str),
    Negative(&'static str),
    OutOfRange(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::NotFinite(field) => write!(f, "setting `{field}` must be finite"),
            SettingsError::NonPositive(field) => {
                write!(f, "setting `{field}` must be greater than zero")
            }
            SettingsError::Negative(field) => {
                write!(f, "setting `{field}` must not be negative")
            }
            SettingsError::OutOfRange(field) => {
                write!(f, "setting `{field}` is outside its valid range")
            }
        }
    }
}

impl Error for SettingsError {}
