//! Player Controller
//!
//! The possessing controller of the character. Owns the control rotation
//! that cameras and movement directions are derived from, the cursor state,
//! and the move/look input gates the map toggles.
//!
//! Rotation and movement input accumulate during the frame.
//! [`PlayerController::update_rotation`] folds pending rotation into the
//! control rotation; the host drains movement with
//! [`PlayerController::consume_movement_input`].

use glam::Vec3;

use crate::input::CursorManager;
use crate::math::Rotator;

/// Pitch limits of the control rotation in degrees.
pub const PITCH_LIMITS: (f32, f32) = (-89.0, 89.0);

#[derive(Debug, Clone, Default)]
pub struct PlayerController {
    control_rotation: Rotator,
    rotation_input: Rotator,
    movement_input: Vec3,
    ignore_move_input: bool,
    ignore_look_input: bool,
    cursor_position: Option<(f32, f32)>,
    /// Cursor visibility and click routing
    pub cursor: CursorManager,
}

impl PlayerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control_rotation(rotation: Rotator) -> Self {
        Self {
            control_rotation: rotation,
            ..Self::default()
        }
    }

    #[inline]
    pub fn control_rotation(&self) -> Rotator {
        self.control_rotation
    }

    pub fn set_control_rotation(&mut self, rotation: Rotator) {
        let mut rotation = rotation.normalized();
        rotation.pitch = rotation.pitch.clamp(PITCH_LIMITS.0, PITCH_LIMITS.1);
        self.control_rotation = rotation;
    }

    #[inline]
    pub fn is_move_input_ignored(&self) -> bool {
        self.ignore_move_input
    }

    #[inline]
    pub fn is_look_input_ignored(&self) -> bool {
        self.ignore_look_input
    }

    /// Cursor position in normalized screen UV (bottom-left origin).
    #[inline]
    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor_position
    }

    pub fn set_cursor_position(&mut self, uv: Option<(f32, f32)>) {
        self.cursor_position = uv;
    }

    /// Gate movement input. Pending movement is dropped when input becomes ignored.
    pub fn set_ignore_move_input(&mut self, ignore: bool) {
        self.ignore_move_input = ignore;
        if ignore {
            self.movement_input = Vec3::ZERO;
        }
    }

    /// Gate look input. Pending rotation is dropped when input becomes ignored.
    pub fn set_ignore_look_input(&mut self, ignore: bool) {
        self.ignore_look_input = ignore;
        if ignore {
            self.rotation_input = Rotator::ZERO;
        }
    }

    /// Add yaw in degrees to the pending rotation.
    pub fn add_yaw_input(&mut self, value: f32) {
        if !self.ignore_look_input {
            self.rotation_input.yaw += value;
        }
    }

    /// Add pitch in degrees to the pending rotation. Positive looks up.
    pub fn add_pitch_input(&mut self, value: f32) {
        if !self.ignore_look_input {
            self.rotation_input.pitch += value;
        }
    }

    /// Rotation accumulated since the last `update_rotation`.
    pub fn pending_rotation_input(&self) -> Rotator {
        self.rotation_input
    }

    /// Apply and clear the pending rotation input.
    pub fn update_rotation(&mut self) {
        let pending = std::mem::take(&mut self.rotation_input);
        if pending != Rotator::ZERO {
            self.set_control_rotation(self.control_rotation + pending);
        }
    }

    /// Accumulate a scaled world direction of movement.
    pub fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        if !self.ignore_move_input {
            self.movement_input += direction * scale;
        }
    }

    /// Movement accumulated since the last consume.
    pub fn pending_movement_input(&self) -> Vec3 {
        self.movement_input
    }

    /// Take the accumulated movement input, leaving zero.
    pub fn consume_movement_input(&mut self) -> Vec3 {
        std::mem::take(&mut self.movement_input)
    }
}
