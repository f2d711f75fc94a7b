//! Ray intersection against the scene primitives.
//!
//! Two shapes cover everything the trainer needs: finite rectangles
//! (room panels) and discs (target faces). Intersections are
//! double-sided; callers pick the nearest by distance.

use glam::DVec3;

use marksman_core::constants::RAY_EPSILON;
use marksman_core::types::Ray;

/// A single ray/shape intersection.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Distance from the ray origin along its direction.
    pub distance: f64,
    /// World-space intersection point.
    pub point: DVec3,
}

/// A finite rectangle in 3D: center plus two in-plane half-extent
/// axes. The normal is derived from the axes.
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub center: DVec3,
    pub half_u: DVec3,
    pub half_v: DVec3,
}

impl Surface {
    pub fn new(center: DVec3, half_u: DVec3, half_v: DVec3) -> Self {
        Self {
            center,
            half_u,
            half_v,
        }
    }

    pub fn normal(&self) -> DVec3 {
        self.half_u.cross(self.half_v).normalize()
    }

    /// Intersect a ray with this rectangle. Hits behind the origin or
    /// outside the extents return None.
    pub fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let hit = intersect_plane(ray, self.center, self.normal())?;
        let w = hit.point - self.center;
        let u_sq = self.half_u.length_squared();
        let v_sq = self.half_v.length_squared();
        if u_sq < RAY_EPSILON || v_sq < RAY_EPSILON {
            return None;
        }
        let u = w.dot(self.half_u) / u_sq;
        let v = w.dot(self.half_v) / v_sq;
        if u.abs() > 1.0 || v.abs() > 1.0 {
            return None;
        }
        Some(hit)
    }
}

/// Intersect a ray with a disc (target face).
pub fn intersect_disc(ray: &Ray, center: DVec3, normal: DVec3, radius: f64) -> Option<RayHit> {
    let hit = intersect_plane(ray, center, normal)?;
    if hit.point.distance_squared(center) > radius * radius {
        return None;
    }
    Some(hit)
}

/// Intersect a ray with an infinite plane through `point` with the
/// given normal. Double-sided; parallel rays and hits at or behind
/// the origin return None.
fn intersect_plane(ray: &Ray, point: DVec3, normal: DVec3) -> Option<RayHit> {
    let denom = ray.direction.dot(normal);
    if denom.abs() < RAY_EPSILON {
        return None;
    }
    let t = (point - ray.origin).dot(normal) / denom;
    if t <= RAY_EPSILON {
        return None;
    }
    Some(RayHit {
        distance: t,
        point: ray.at(t),
    })
}

/// Nearest of two optional hits.
pub fn nearer(a: Option<RayHit>, b: Option<RayHit>) -> Option<RayHit> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if a.distance <= b.distance { a } else { b }),
        (hit, None) | (None, hit) => hit,
    }
}
