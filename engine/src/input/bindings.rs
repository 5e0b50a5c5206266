//! Input Bindings Module
//!
//! Maps physical keys, mouse buttons and the wheel to logical actions and
//! axes, allowing key remapping without touching gameplay code.

use std::collections::HashMap;

use super::actions::{InputAction, InputAxis, InputEvent};
use super::keyboard::{KeyCode, KeyboardState};
use super::mouse::MouseButton;

/// A physical input that can trigger an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputTrigger {
    Key(KeyCode),
    Mouse(MouseButton),
    WheelUp,
    WheelDown,
}

impl From<KeyCode> for InputTrigger {
    fn from(key: KeyCode) -> Self {
        InputTrigger::Key(key)
    }
}

impl From<MouseButton> for InputTrigger {
    fn from(button: MouseButton) -> Self {
        InputTrigger::Mouse(button)
    }
}

/// A held key contributing `scale` to an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyAxisBinding {
    pub key: KeyCode,
    pub axis: InputAxis,
    pub scale: f32,
}

/// Maps physical inputs to logical actions and axes.
///
/// Several triggers may drive one action (Tab and M both open the map), but
/// each trigger drives at most one action.
#[derive(Debug, Clone)]
pub struct InputBindings {
    /// Map from physical trigger to logical action
    trigger_to_action: HashMap<InputTrigger, InputAction>,
    /// Held keys feeding axes, summed per axis each frame
    key_axes: Vec<KeyAxisBinding>,
    /// Mouse X motion, in axis units per pixel
    pub mouse_x: (InputAxis, f32),
    /// Mouse Y motion, in axis units per pixel (negative: moving up looks up)
    pub mouse_y: (InputAxis, f32),
}

impl Default for InputBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBindings {
    /// Create bindings with the default layout.
    ///
    /// Actions:
    /// - Space = Jump
    /// - R = ResetVr
    /// - Wheel up / down = ScrollIn / ScrollOut
    /// - Tab, M = Map
    /// - LMB = SetWaypoint, RMB = DeleteWaypoint
    /// - Shift (Left) = ToggleSprint
    ///
    /// Axes:
    /// - W/S = MoveForward +1/-1, D/A = MoveRight +1/-1
    /// - Arrow Right/Left = TurnRate +1/-1
    /// - Arrow Up/Down, PageUp/PageDown = LookUpRate +1/-1
    /// - Mouse X = Turn, Mouse Y = LookUp
    pub fn new() -> Self {
        let mut bindings = Self {
            trigger_to_action: HashMap::new(),
            key_axes: Vec::new(),
            mouse_x: (InputAxis::Turn, 0.25),
            mouse_y: (InputAxis::LookUp, -0.25),
        };

        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::R, InputAction::ResetVr);
        bindings.bind(InputTrigger::WheelUp, InputAction::ScrollIn);
        bindings.bind(InputTrigger::WheelDown, InputAction::ScrollOut);
        bindings.bind(KeyCode::Tab, InputAction::Map);
        bindings.bind(KeyCode::M, InputAction::Map);
        bindings.bind(MouseButton::Left, InputAction::SetWaypoint);
        bindings.bind(MouseButton::Right, InputAction::DeleteWaypoint);
        bindings.bind(KeyCode::ShiftLeft, InputAction::ToggleSprint);

        bindings.bind_axis(KeyCode::W, InputAxis::MoveForward, 1.0);
        bindings.bind_axis(KeyCode::S, InputAxis::MoveForward, -1.0);
        bindings.bind_axis(KeyCode::D, InputAxis::MoveRight, 1.0);
        bindings.bind_axis(KeyCode::A, InputAxis::MoveRight, -1.0);
        bindings.bind_axis(KeyCode::ArrowRight, InputAxis::TurnRate, 1.0);
        bindings.bind_axis(KeyCode::ArrowLeft, InputAxis::TurnRate, -1.0);
        bindings.bind_axis(KeyCode::ArrowUp, InputAxis::LookUpRate, 1.0);
        bindings.bind_axis(KeyCode::ArrowDown, InputAxis::LookUpRate, -1.0);
        bindings.bind_axis(KeyCode::PageUp, InputAxis::LookUpRate, 1.0);
        bindings.bind_axis(KeyCode::PageDown, InputAxis::LookUpRate, -1.0);

        bindings
    }

    /// Bind a physical trigger to a logical action.
    ///
    /// If the trigger was previously bound to another action, that binding is
    /// replaced. Other triggers of the same action are kept.
    pub fn bind(&mut self, trigger: impl Into<InputTrigger>, action: InputAction) {
        self.trigger_to_action.insert(trigger.into(), action);
    }

    /// Bind a held key to an axis, replacing any axis binding of that key.
    pub fn bind_axis(&mut self, key: KeyCode, axis: InputAxis, scale: f32) {
        self.key_axes.retain(|binding| binding.key != key);
        self.key_axes.push(KeyAxisBinding { key, axis, scale });
    }

    /// Remove the binding for a specific trigger.
    pub fn unbind_trigger(&mut self, trigger: impl Into<InputTrigger>) {
        self.trigger_to_action.remove(&trigger.into());
    }

    /// Remove every trigger bound to an action.
    pub fn unbind_action(&mut self, action: InputAction) {
        self.trigger_to_action.retain(|_, bound| *bound != action);
    }

    /// Get the action bound to a trigger, if any.
    pub fn get_action(&self, trigger: impl Into<InputTrigger>) -> Option<InputAction> {
        self.trigger_to_action.get(&trigger.into()).copied()
    }

    /// All triggers bound to an action.
    pub fn triggers_for(&self, action: InputAction) -> Vec<InputTrigger> {
        self.trigger_to_action
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(&trigger, _)| trigger)
            .collect()
    }

    /// Translate a trigger transition into an action event.
    pub fn translate(&self, trigger: impl Into<InputTrigger>, pressed: bool) -> Option<InputEvent> {
        self.get_action(trigger)
            .map(|action| InputEvent::Action { action, pressed })
    }

    /// Per-frame axis values from the held keys.
    ///
    /// Every axis with at least one key binding is reported, including zero,
    /// so the receiver sees release as well as press.
    pub fn axis_events(&self, keyboard: &KeyboardState) -> Vec<InputEvent> {
        let mut totals: Vec<(InputAxis, f32)> = Vec::new();
        for binding in &self.key_axes {
            let contribution = if keyboard.is_pressed(binding.key) {
                binding.scale
            } else {
                0.0
            };
            match totals.iter_mut().find(|(axis, _)| *axis == binding.axis) {
                Some((_, value)) => *value += contribution,
                None => totals.push((binding.axis, contribution)),
            }
        }
        totals
            .into_iter()
            .map(|(axis, value)| InputEvent::axis(axis, value))
            .collect()
    }

    /// Axis events for a raw mouse motion delta in pixels.
    pub fn mouse_motion(&self, dx: f64, dy: f64) -> [InputEvent; 2] {
        let (x_axis, x_scale) = self.mouse_x;
        let (y_axis, y_scale) = self.mouse_y;
        [
            InputEvent::axis(x_axis, dx as f32 * x_scale),
            InputEvent::axis(y_axis, dy as f32 * y_scale),
        ]
    }
}
