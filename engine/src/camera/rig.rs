//! Camera Rig Module
//!
//! A camera rig is a boom (spring arm) with a camera at its end. The boom
//! sits at an offset from the character, or at an absolute world location,
//! and pulls the camera back along its view direction by `arm_length`.
//! Negative arm lengths push the socket forward instead.

use glam::Vec3;

use super::view_mode::ViewMode;
use crate::math::Rotator;

/// One boom + camera pair.
#[derive(Clone, Debug)]
pub struct CameraRig {
    /// Boom location relative to the character (or absolute, see below)
    pub offset: Vec3,
    /// Boom rotation used when it does not follow the control rotation
    pub rotation: Rotator,
    /// Zoom distance from the boom origin to the camera
    pub arm_length: f32,
    /// Boom rotates with the player controller's control rotation
    pub use_control_rotation: bool,
    /// `offset` is a world location rather than relative to the character
    pub absolute_location: bool,
    active: bool,
}

impl CameraRig {
    /// Boom attached at `offset` that follows the control rotation.
    pub fn new(offset: Vec3, arm_length: f32) -> Self {
        Self {
            offset,
            rotation: Rotator::ZERO,
            arm_length,
            use_control_rotation: true,
            absolute_location: false,
            active: false,
        }
    }

    /// Boom with a fixed rotation that ignores the control rotation.
    pub fn fixed(offset: Vec3, rotation: Rotator, arm_length: f32) -> Self {
        Self {
            rotation,
            use_control_rotation: false,
            ..Self::new(offset, arm_length)
        }
    }

    /// Pin the boom origin to a world location.
    pub fn with_absolute_location(mut self) -> Self {
        self.absolute_location = true;
        self
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Orientation of the camera at the end of the boom.
    pub fn view_rotation(&self, control_rotation: Rotator) -> Rotator {
        if self.use_control_rotation {
            control_rotation
        } else {
            self.rotation
        }
    }

    /// World location of the boom origin.
    pub fn origin(&self, owner_location: Vec3) -> Vec3 {
        if self.absolute_location {
            self.offset
        } else {
            owner_location + self.offset
        }
    }

    /// World location of the camera socket.
    pub fn socket_location(&self, owner_location: Vec3, control_rotation: Rotator) -> Vec3 {
        let back = self.view_rotation(control_rotation).forward() * self.arm_length;
        self.origin(owner_location) - back
    }
}

/// The character's set of camera rigs.
///
/// Activity of the follow, first-person and map rigs is always derived from
/// a [`ViewMode`], so exactly one of them is active once synced. The minimap
/// rig renders into an overlay and is never toggled.
#[derive(Clone, Debug)]
pub struct CameraRigs {
    /// Third-person follow boom
    pub follow: CameraRig,
    /// First-person boom at the head
    pub first_person: CameraRig,
    /// Overhead map camera at a fixed world location
    pub map: CameraRig,
    /// Minimap capture boom above the character
    pub minimap: CameraRig,
}

impl CameraRigs {
    /// Set the active flags of the view cameras to match `mode`.
    pub fn sync(&mut self, mode: ViewMode) {
        self.follow.set_active(mode == ViewMode::ThirdPerson);
        self.first_person.set_active(mode == ViewMode::FirstPerson);
        self.map.set_active(mode.is_map());
    }

    /// Number of active gameplay cameras (follow + first-person).
    pub fn active_gameplay_cameras(&self) -> usize {
        self.follow.is_active() as usize + self.first_person.is_active() as usize
    }

    /// The rig currently used for the view, if any is active.
    pub fn active_view(&self) -> Option<&CameraRig> {
        [&self.map, &self.first_person, &self.follow]
            .into_iter()
            .find(|rig| rig.is_active())
    }
}
