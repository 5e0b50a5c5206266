//! Movement and look axes.
//!
//! Movement is expressed relative to the yaw of the control rotation and
//! handed to the player controller, which gates it while the map is open.

use glam::Vec3;

use super::Character;
use crate::math::Rotator;

impl Character {
    /// Walk along the controller's forward direction.
    pub fn move_forward(&mut self, value: f32) {
        self.add_directional_movement(value, |yaw_rotation| yaw_rotation.forward());
    }

    /// Walk along the controller's right direction.
    pub fn move_right(&mut self, value: f32) {
        self.add_directional_movement(value, |yaw_rotation| yaw_rotation.right());
    }

    fn add_directional_movement(&mut self, value: f32, axis: impl FnOnce(Rotator) -> Vec3) {
        if value == 0.0 {
            return;
        }
        let walk_scale = self.config.walk_scale;
        let sprint = self.sprint;
        let Some(controller) = self.controller.as_mut() else {
            log::debug!("Movement input without a player controller");
            return;
        };

        let direction = axis(controller.control_rotation().yaw_only());
        let scale = if sprint { value } else { value * walk_scale };
        controller.add_movement_input(direction, scale);
    }

    /// Raw yaw input in degrees.
    pub fn turn(&mut self, value: f32) {
        if let Some(controller) = self.controller.as_mut() {
            controller.add_yaw_input(value);
        }
    }

    /// Raw pitch input in degrees.
    pub fn look_up(&mut self, value: f32) {
        if let Some(controller) = self.controller.as_mut() {
            controller.add_pitch_input(value);
        }
    }

    /// Yaw at `rate` (normalized, 1.0 = full rate) over a frame of `delta_seconds`.
    pub fn turn_at_rate(&mut self, rate: f32, delta_seconds: f32) {
        self.turn(rate * self.config.base_turn_rate * delta_seconds);
    }

    /// Pitch at `rate` (normalized, 1.0 = full rate) over a frame of `delta_seconds`.
    pub fn look_up_at_rate(&mut self, rate: f32, delta_seconds: f32) {
        self.look_up(rate * self.config.base_look_up_rate * delta_seconds);
    }

    pub(super) fn set_sprint(&mut self, sprint: bool) {
        if self.sprint != sprint {
            log::debug!("Sprint {}", if sprint { "on" } else { "off" });
        }
        self.sprint = sprint;
    }
}
