//! Character Movement
//!
//! Kinematic walking for the possessed character: consumes the controller's
//! accumulated movement input each frame, accelerates toward the walk speed,
//! handles jumping with gravity over a flat floor, and turns the body either
//! toward the movement direction or with the controller yaw.
//!
//! # Physics Model
//!
//! - Walk speed: 600 cm/s
//! - Acceleration / braking: 2048 cm/s^2
//! - Jump velocity: 400 cm/s, gravity 980 cm/s^2
//! - Air control: 20% of ground acceleration
//! - Body rotation rate: 540 deg/s

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::normalize_axis;

/// Tunables of the movement component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    /// Top horizontal speed for full input, cm/s
    pub max_walk_speed: f32,
    /// Horizontal acceleration toward the input direction, cm/s^2
    pub max_acceleration: f32,
    /// Deceleration with no input on the ground, cm/s^2
    pub braking_deceleration: f32,
    /// Initial upward velocity of a jump, cm/s
    pub jump_z_velocity: f32,
    /// Fraction of ground acceleration available while airborne
    pub air_control: f32,
    /// Downward acceleration, cm/s^2
    pub gravity: f32,
    /// Body yaw rate when orienting to movement, deg/s
    pub rotation_rate: f32,
    pub capsule_radius: f32,
    pub capsule_half_height: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            max_walk_speed: 600.0,
            max_acceleration: 2048.0,
            braking_deceleration: 2048.0,
            jump_z_velocity: 400.0,
            air_control: 0.2,
            gravity: 980.0,
            rotation_rate: 540.0,
            capsule_radius: 42.0,
            capsule_half_height: 96.0,
        }
    }
}

/// How the body yaw is driven this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyFacing {
    /// Snap to the controller's yaw (first-person)
    ControllerYaw(f32),
    /// Turn toward the movement direction at the rotation rate (third-person)
    OrientToMovement,
}

/// Movement state of one character.
#[derive(Debug, Clone)]
pub struct CharacterMovement {
    pub settings: MovementSettings,
    velocity: Vec3,
    grounded: bool,
    body_yaw: f32,
}

impl Default for CharacterMovement {
    fn default() -> Self {
        Self::new(MovementSettings::default())
    }
}

impl CharacterMovement {
    pub fn new(settings: MovementSettings) -> Self {
        Self {
            settings,
            velocity: Vec3::ZERO,
            grounded: true,
            body_yaw: 0.0,
        }
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Body yaw in degrees.
    #[inline]
    pub fn body_yaw(&self) -> f32 {
        self.body_yaw
    }

    /// Start a jump. Returns false while already airborne.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity.z = self.settings.jump_z_velocity;
        self.grounded = false;
        true
    }

    /// Cut a rising jump short.
    pub fn stop_jumping(&mut self) {
        if !self.grounded && self.velocity.z > 0.0 {
            self.velocity.z *= 0.5;
        }
    }

    /// Advance one frame and return the new capsule-center location.
    ///
    /// # Arguments
    /// * `location` - Current capsule center
    /// * `input` - Accumulated movement input (world space, length clamped to 1)
    /// * `facing` - How the body yaw follows this frame
    /// * `floor_height` - Height of the flat floor under the character
    /// * `dt` - Delta time in seconds
    pub fn update(
        &mut self,
        location: Vec3,
        input: Vec3,
        facing: BodyFacing,
        floor_height: f32,
        dt: f32,
    ) -> Vec3 {
        // Clamp delta time to prevent physics explosions
        let dt = dt.clamp(0.0, 0.1);
        if dt == 0.0 {
            return location;
        }

        let input = Vec3::new(input.x, input.y, 0.0).clamp_length_max(1.0);
        self.update_horizontal(input, dt);
        self.update_facing(input, facing, dt);

        // Midpoint integration for the vertical axis
        let prev_vz = self.velocity.z;
        if !self.grounded {
            self.velocity.z -= self.settings.gravity * dt;
        }
        let mut next = location + Vec3::new(self.velocity.x, self.velocity.y, 0.0) * dt;
        next.z += (prev_vz + self.velocity.z) * 0.5 * dt;

        let rest_height = floor_height + self.settings.capsule_half_height;
        if next.z <= rest_height {
            next.z = rest_height;
            self.velocity.z = 0.0;
            self.grounded = true;
        } else if self.grounded && self.velocity.z <= 0.0 {
            // Walked off a ledge
            self.grounded = false;
        }
        next
    }

    fn update_horizontal(&mut self, input: Vec3, dt: f32) {
        let horizontal = Vec3::new(self.velocity.x, self.velocity.y, 0.0);
        let target = input * self.settings.max_walk_speed;

        let rate = if input == Vec3::ZERO {
            if self.grounded {
                self.settings.braking_deceleration
            } else {
                0.0
            }
        } else if self.grounded {
            self.settings.max_acceleration
        } else {
            self.settings.max_acceleration * self.settings.air_control
        };

        let delta = target - horizontal;
        let max_step = rate * dt;
        let step = if delta.length() <= max_step {
            delta
        } else {
            delta.normalize_or_zero() * max_step
        };
        let horizontal = horizontal + step;
        self.velocity.x = horizontal.x;
        self.velocity.y = horizontal.y;
    }

    fn update_facing(&mut self, input: Vec3, facing: BodyFacing, dt: f32) {
        match facing {
            BodyFacing::ControllerYaw(yaw) => self.body_yaw = normalize_axis(yaw),
            BodyFacing::OrientToMovement => {
                if input.length_squared() < 1e-6 {
                    return;
                }
                let desired = input.y.atan2(input.x).to_degrees();
                let diff = normalize_axis(desired - self.body_yaw);
                let max_turn = self.settings.rotation_rate * dt;
                self.body_yaw = normalize_axis(self.body_yaw + diff.clamp(-max_turn, max_turn));
            }
        }
    }
}
