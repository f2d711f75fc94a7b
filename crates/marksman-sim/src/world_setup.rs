//! Entity spawn factories for setting up the session world.

use glam::DVec3;
use hecs::World;

use marksman_core::components::{CameraRig, Locomotion, MoveState, Player, Weapon};
use marksman_core::constants::DEGREES_PER_COUNT;
use marksman_core::settings::Settings;

use crate::room::Room;

/// Spawn the player entity: camera rig, movement state, and weapon.
///
/// The player starts centered between the side walls, at eye height,
/// half a movespeed in front of the invisible wall, looking at the
/// target wall.
pub fn spawn_player(world: &mut World, settings: &Settings, room: &Room, now: f64) -> hecs::Entity {
    let rig = CameraRig {
        position: DVec3::new(
            0.0,
            settings.elevation,
            (room.length - settings.movespeed) / 2.0,
        ),
        yaw: 0.0,
        pitch: 0.0,
        sens_multiplier: (DEGREES_PER_COUNT * settings.sensitivity).to_radians(),
    };

    let locomotion = Locomotion {
        movespeed: settings.movespeed,
        prev_update_time: now,
    };

    let weapon = Weapon {
        clip_size: settings.clip_size,
        rounds_in_clip: settings.clip_size,
        rate_of_fire: settings.rate_of_fire,
        reload_duration_secs: settings.reload_duration_secs,
        firing: false,
        reloading: false,
        prev_fire_time: now,
        reload_started_at: now,
    };

    world.spawn((Player, rig, MoveState::default(), locomotion, weapon))
}
