//! Player locomotion: collision-gated keyboard movement in the yaw
//! frame, plus the aim-direction helpers derived from the camera rig.

use glam::{DQuat, DVec3};
use hecs::World;

use marksman_core::components::{CameraRig, Locomotion, MoveState};
use marksman_core::types::Ray;

use crate::collision::CollisionMap;

/// Integrate player movement for one frame.
///
/// Active directions are summed as unit vectors and the result is
/// normalized, so diagonal movement is exactly as fast as axial
/// movement and opposing keys cancel to a standstill. The collision
/// map is consulted first, per direction, so a blocked forward still
/// leaves strafing usable.
pub fn run(world: &mut World, collision: &CollisionMap, now: f64) {
    for (_entity, (rig, move_state, locomotion)) in
        world.query_mut::<(&mut CameraRig, &MoveState, &mut Locomotion)>()
    {
        let elapsed = now - locomotion.prev_update_time;

        let adjusted = collision.adjust_move_state(*move_state, rig.position, rig.yaw);

        let mut direction = DVec3::ZERO;
        if adjusted.forward {
            direction += DVec3::NEG_Z;
        }
        if adjusted.left {
            direction += DVec3::NEG_X;
        }
        if adjusted.back {
            direction += DVec3::Z;
        }
        if adjusted.right {
            direction += DVec3::X;
        }

        if direction != DVec3::ZERO {
            let world_direction = DQuat::from_rotation_y(rig.yaw) * direction.normalize();
            rig.position += world_direction * locomotion.movespeed * elapsed;
        }

        locomotion.prev_update_time = now;
    }
}

/// Unit aim direction: -Z rotated by pitch, then yaw. Pitch is the
/// inner frame, so pitching never rolls the view.
pub fn aim_direction(rig: &CameraRig) -> DVec3 {
    DQuat::from_rotation_y(rig.yaw) * (DQuat::from_rotation_x(rig.pitch) * DVec3::NEG_Z)
}

/// Ray from the camera along the aim direction, used for hit testing.
pub fn fire_ray(rig: &CameraRig) -> Ray {
    Ray::new(rig.position, aim_direction(rig))
}
