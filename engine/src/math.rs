//! Math types
//!
//! Re-exports the glam vector types used throughout the crate and adds
//! [`Rotator`], a pitch/yaw/roll orientation in degrees.
//!
//! # Coordinate System
//!
//! - +X = forward
//! - +Y = right
//! - +Z = up
//!
//! Positive pitch lifts the nose, positive yaw turns from +X toward +Y.

use std::ops::{Add, Sub};

pub use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Orientation expressed as pitch, yaw and roll in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotator {
    /// Rotation around the right axis (nose up is positive)
    pub pitch: f32,
    /// Rotation around the up axis
    pub yaw: f32,
    /// Rotation around the forward axis
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Rotator = Rotator {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Rotation around the up axis only.
    pub const fn from_yaw(yaw: f32) -> Self {
        Self {
            pitch: 0.0,
            yaw,
            roll: 0.0,
        }
    }

    /// Build the rotation whose forward axis points along `direction`.
    ///
    /// Roll is always zero. A zero-length direction gives [`Rotator::ZERO`].
    pub fn from_x_direction(direction: Vec3) -> Self {
        if direction.length_squared() <= f32::EPSILON {
            return Self::ZERO;
        }
        let horizontal = (direction.x * direction.x + direction.y * direction.y).sqrt();
        Self {
            pitch: direction.z.atan2(horizontal).to_degrees(),
            yaw: direction.y.atan2(direction.x).to_degrees(),
            roll: 0.0,
        }
    }

    /// Copy of this rotation with pitch and roll cleared.
    pub fn yaw_only(self) -> Self {
        Self::from_yaw(self.yaw)
    }

    /// Quaternion form: yaw about Z, then pitch, then roll about X.
    pub fn to_quat(self) -> Quat {
        // Nose-up pitch is a negative rotation about +Y in a right-handed Z-up frame
        Quat::from_rotation_z(self.yaw.to_radians())
            * Quat::from_rotation_y(-self.pitch.to_radians())
            * Quat::from_rotation_x(self.roll.to_radians())
    }

    /// Unit forward (X) axis of this rotation.
    #[inline]
    pub fn forward(self) -> Vec3 {
        self.to_quat() * Vec3::X
    }

    /// Unit right (Y) axis of this rotation.
    #[inline]
    pub fn right(self) -> Vec3 {
        self.to_quat() * Vec3::Y
    }

    /// Unit up (Z) axis of this rotation.
    #[inline]
    pub fn up(self) -> Vec3 {
        self.to_quat() * Vec3::Z
    }

    /// Wrap every component into (-180, 180].
    pub fn normalized(self) -> Self {
        Self {
            pitch: normalize_axis(self.pitch),
            yaw: normalize_axis(self.yaw),
            roll: normalize_axis(self.roll),
        }
    }

    /// Component-wise comparison within `tolerance` degrees, after wrapping.
    pub fn equals(self, other: Rotator, tolerance: f32) -> bool {
        let diff = (self - other).normalized();
        diff.pitch.abs() <= tolerance && diff.yaw.abs() <= tolerance && diff.roll.abs() <= tolerance
    }
}

impl Add for Rotator {
    type Output = Rotator;

    fn add(self, rhs: Rotator) -> Rotator {
        Rotator::new(self.pitch + rhs.pitch, self.yaw + rhs.yaw, self.roll + rhs.roll)
    }
}

impl Sub for Rotator {
    type Output = Rotator;

    fn sub(self, rhs: Rotator) -> Rotator {
        Rotator::new(self.pitch - rhs.pitch, self.yaw - rhs.yaw, self.roll - rhs.roll)
    }
}

/// Wrap an angle in degrees into (-180, 180].
pub fn normalize_axis(angle: f32) -> f32 {
    let mut wrapped = angle % 360.0;
    if wrapped > 180.0 {
        wrapped -= 360.0;
    } else if wrapped <= -180.0 {
        wrapped += 360.0;
    }
    wrapped
}
