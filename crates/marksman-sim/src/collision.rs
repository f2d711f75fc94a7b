//! Ray-based proximity checks against the static room obstacles.

use glam::{DQuat, DVec3};

use marksman_core::components::MoveState;
use marksman_core::constants::COLLISION_CLEARANCE;
use marksman_core::types::Ray;

use crate::raycast::{RayHit, Surface};

/// Static obstacle registry consulted by the locomotion system.
/// Obstacles are registered at session setup and never mutated by
/// queries; `clear` is only called at teardown.
#[derive(Debug, Default)]
pub struct CollisionMap {
    obstacles: Vec<Surface>,
}

impl CollisionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_obstacle(&mut self, surface: Surface) {
        self.obstacles.push(surface);
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Re-evaluate a move state against the obstacles: each cardinal
    /// direction is checked independently with a ray rotated by the
    /// player's yaw, and cleared when an obstacle sits within
    /// clearance along it. Diagonal movement can therefore be
    /// partially blocked (forward blocked, left still allowed).
    pub fn adjust_move_state(
        &self,
        move_state: MoveState,
        position: DVec3,
        yaw: f64,
    ) -> MoveState {
        let rotation = DQuat::from_rotation_y(yaw);
        let blocked = |local: DVec3| {
            let ray = Ray::new(position, rotation * local);
            self.nearest_hit(&ray)
                .is_some_and(|hit| hit.distance <= COLLISION_CLEARANCE)
        };

        let mut adjusted = move_state;
        if adjusted.forward && blocked(DVec3::NEG_Z) {
            adjusted.forward = false;
        }
        if adjusted.back && blocked(DVec3::Z) {
            adjusted.back = false;
        }
        if adjusted.left && blocked(DVec3::NEG_X) {
            adjusted.left = false;
        }
        if adjusted.right && blocked(DVec3::X) {
            adjusted.right = false;
        }
        adjusted
    }

    fn nearest_hit(&self, ray: &Ray) -> Option<RayHit> {
        self.obstacles
            .iter()
            .filter_map(|surface| surface.raycast(ray))
            .min_by(|a, b| {
                a.distance
                    .partial_cmp(&b.distance)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}
