//! Raycast Module
//!
//! Turns a cursor position on screen into a world-space ray through a
//! camera, primarily for point-and-click placement on the overhead map.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::Rotator;

/// A half-line in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Normalized direction
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Start and end points of the first `length` units of the ray.
    #[inline]
    pub fn segment(&self, length: f32) -> (Vec3, Vec3) {
        (self.origin, self.at(length))
    }
}

/// Calculate ray direction from screen UV coordinates
///
/// # Arguments
/// * `view_rotation` - Orientation of the camera
/// * `uv` - Normalized screen coordinates (0-1, 0-1) where (0,0) is bottom-left
/// * `aspect_ratio` - Screen aspect ratio (width / height)
/// * `horizontal_fov` - Horizontal field of view in radians
///
/// # Returns
/// Normalized ray direction in world space
pub fn get_ray_direction(
    view_rotation: Rotator,
    uv: (f32, f32),
    aspect_ratio: f32,
    horizontal_fov: f32,
) -> Vec3 {
    let ndc = (uv.0 * 2.0 - 1.0, uv.1 * 2.0 - 1.0);
    let half_width = (horizontal_fov * 0.5).tan();
    let half_height = half_width / aspect_ratio.max(f32::EPSILON);

    let forward = view_rotation.forward();
    let right = view_rotation.right();
    let up = view_rotation.up();

    (forward + right * ndc.0 * half_width + up * ndc.1 * half_height).normalize()
}

/// Perspective parameters of a camera used for cursor deprojection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    /// Screen aspect ratio (width / height)
    pub aspect_ratio: f32,
    /// Horizontal field of view in degrees
    pub fov_degrees: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            fov_degrees: 90.0,
        }
    }
}

impl Projection {
    /// Create a projection with the given aspect ratio and default FOV
    pub fn with_aspect(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..Default::default()
        }
    }

    /// Ray from a camera at `camera_location` through the cursor at `uv`.
    pub fn deproject(&self, camera_location: Vec3, view_rotation: Rotator, uv: (f32, f32)) -> Ray {
        let direction = get_ray_direction(
            view_rotation,
            uv,
            self.aspect_ratio,
            self.fov_degrees.to_radians(),
        );
        Ray::new(camera_location, direction)
    }
}
