//! Waypoint Pointer
//!
//! Arrow prop on a short boom attached to the character. The boom uses an
//! absolute world rotation so the arrow can point at the active waypoint
//! regardless of which way the character faces.

use glam::Vec3;

use crate::math::Rotator;

/// The directional prop that faces the active waypoint.
#[derive(Clone, Debug)]
pub struct WaypointPointer {
    /// Boom length; negative values place the arrow ahead of the pivot
    pub arm_length: f32,
    /// Uniform mesh scale
    pub scale: f32,
    /// Whether the arrow casts a shadow
    pub cast_shadow: bool,
    rotation: Rotator,
    hidden: bool,
}

impl WaypointPointer {
    /// Hidden pointer on a boom of `arm_length`.
    pub fn new(arm_length: f32) -> Self {
        Self {
            arm_length,
            scale: 0.125,
            cast_shadow: false,
            rotation: Rotator::ZERO,
            hidden: true,
        }
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[inline]
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Current world rotation of the boom.
    #[inline]
    pub fn rotation(&self) -> Rotator {
        self.rotation
    }

    pub fn set_world_rotation(&mut self, rotation: Rotator) {
        self.rotation = rotation;
    }

    /// World location of the boom pivot (the character root).
    #[inline]
    pub fn pivot_location(&self, owner_location: Vec3) -> Vec3 {
        owner_location
    }

    /// World location of the arrow mesh at the end of the boom.
    pub fn mesh_location(&self, owner_location: Vec3) -> Vec3 {
        self.pivot_location(owner_location) - self.rotation.forward() * self.arm_length
    }

    /// Turn the boom toward `target`, keeping only the yaw component.
    pub fn aim_at(&mut self, owner_location: Vec3, target: Vec3) {
        let direction = target - self.pivot_location(owner_location);
        let mut look_at = Rotator::from_x_direction(direction);
        look_at.pitch = 0.0;
        look_at.roll = 0.0;
        self.set_world_rotation(look_at);
    }
}
