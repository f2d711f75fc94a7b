//! Room construction: the practice range geometry derived from the
//! session settings.
//!
//! The room is a box: floor, ceiling, the target wall ahead of the
//! player, a far wall behind, two side walls, and an invisible wall
//! one movespeed in front of the far wall that keeps the player out
//! of the spawn margin. Walls are collision obstacles; floor and
//! ceiling are not.

use glam::{DVec2, DVec3};

use marksman_core::constants::{CAMERA_NEAR, FLOOR_COLOR, TARGET_WALL_COLOR, WALL_COLOR};
use marksman_core::settings::Settings;
use marksman_core::state::{CameraConfig, PanelView, SceneView};

use crate::raycast::Surface;

/// The static geometry of one session.
#[derive(Debug)]
pub struct Room {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// The wall targets spawn on; also one of the obstacles.
    pub target_wall: Surface,
    /// Surfaces that block player movement.
    pub obstacles: Vec<Surface>,
    /// Spawn area for target centers; None when the wall is too
    /// small for the configured target radius, which permanently
    /// blocks spawning rather than producing out-of-range positions.
    pub usable: Option<UsableRect>,
    panels: Vec<PanelView>,
    camera: CameraConfig,
}

/// Target-wall area inset by the target radius, in wall-plane
/// coordinates. Target centers stay inside this rectangle.
#[derive(Debug, Clone, Copy)]
pub struct UsableRect {
    pub min: DVec2,
    pub max: DVec2,
    /// Z of the wall plane the rectangle lies on.
    pub wall_z: f64,
}

impl UsableRect {
    /// Inset a wall by `inset` on every side. Collapsed rectangles
    /// yield None.
    pub fn from_wall(wall: &Surface, inset: f64) -> Option<Self> {
        let half_w = wall.half_u.length();
        let half_h = wall.half_v.length();
        let min = DVec2::new(
            wall.center.x - half_w + inset,
            wall.center.y - half_h + inset,
        );
        let max = DVec2::new(
            wall.center.x + half_w - inset,
            wall.center.y + half_h - inset,
        );
        if min.x >= max.x || min.y >= max.y {
            return None;
        }
        Some(Self {
            min,
            max,
            wall_z: wall.center.z,
        })
    }
}

impl Room {
    /// Derive the room from validated settings.
    ///
    /// Scene length leaves half a movespeed of slack behind the
    /// target distance; width spans the configured fraction of the
    /// horizontal field of view at that distance; height follows the
    /// render surface aspect ratio.
    pub fn from_settings(settings: &Settings) -> Self {
        let length = settings.target_distance + settings.movespeed / 2.0;
        let half_hfov = settings.hfov.to_radians() / 2.0;
        let width =
            (half_hfov.tan() * settings.target_distance * 2.0 * settings.target_wall_ratio).abs();
        let height = (width * settings.game_height / settings.game_width).abs();

        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let half_l = length / 2.0;
        let mid_y = height / 2.0;

        let x_axis = DVec3::new(half_w, 0.0, 0.0);
        let y_axis = DVec3::new(0.0, half_h, 0.0);
        let z_axis = DVec3::new(0.0, 0.0, half_l);

        let target_wall = Surface::new(DVec3::new(0.0, mid_y, -half_l), x_axis, y_axis);
        let far_wall = Surface::new(DVec3::new(0.0, mid_y, half_l), x_axis, y_axis);
        let left_wall = Surface::new(DVec3::new(-half_w, mid_y, 0.0), z_axis, y_axis);
        let right_wall = Surface::new(DVec3::new(half_w, mid_y, 0.0), z_axis, y_axis);
        let invisible_wall = Surface::new(
            DVec3::new(0.0, mid_y, half_l - settings.movespeed),
            x_axis,
            y_axis,
        );

        let obstacles = vec![target_wall, far_wall, left_wall, right_wall, invisible_wall];

        let floor = Surface::new(DVec3::ZERO, x_axis, z_axis);
        let ceiling = Surface::new(DVec3::new(0.0, height, 0.0), x_axis, z_axis);
        // Low rail marking where the invisible wall stands.
        let rail = Surface::new(
            DVec3::new(0.0, settings.elevation / 4.0, half_l - settings.movespeed),
            x_axis,
            DVec3::new(0.0, settings.elevation / 4.0, 0.0),
        );

        let panels = vec![
            panel(&floor, FLOOR_COLOR, true),
            panel(&ceiling, FLOOR_COLOR, true),
            panel(&target_wall, TARGET_WALL_COLOR, true),
            panel(&far_wall, WALL_COLOR, true),
            panel(&left_wall, WALL_COLOR, true),
            panel(&right_wall, WALL_COLOR, true),
            panel(&rail, WALL_COLOR, true),
            panel(&invisible_wall, WALL_COLOR, false),
        ];

        let aspect = settings.game_width / settings.game_height;
        let camera = CameraConfig {
            vertical_fov_degrees: settings.hfov / aspect,
            aspect,
            near: CAMERA_NEAR,
            far: length.powi(3),
        };

        let usable = UsableRect::from_wall(&target_wall, settings.target_size);

        Self {
            length,
            width,
            height,
            target_wall,
            obstacles,
            usable,
            panels,
            camera,
        }
    }

    /// Static scene description for the renderer.
    pub fn scene_view(&self) -> SceneView {
        SceneView {
            panels: self.panels.clone(),
            camera: self.camera,
        }
    }
}

fn panel(surface: &Surface, color: u32, visible: bool) -> PanelView {
    PanelView {
        center: surface.center,
        half_u: surface.half_u,
        half_v: surface.half_v,
        color,
        visible,
    }
}
