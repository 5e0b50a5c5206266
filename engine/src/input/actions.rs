//! Logical Input Events
//!
//! What the character reacts to, independent of which device produced it.
//! Actions are discrete presses/releases; axes are continuous values
//! sampled once per frame.

use std::fmt;

use glam::Vec3;

/// Discrete named inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Jump on press, stop jumping on release (default: Space)
    Jump,
    /// Reset head-mounted display orientation (default: R)
    ResetVr,
    /// Zoom the follow camera in (default: wheel up)
    ScrollIn,
    /// Zoom the follow camera out (default: wheel down)
    ScrollOut,
    /// Open or close the overhead map (default: Tab, M)
    Map,
    /// Light attack, or place a waypoint while the map is open (default: LMB)
    SetWaypoint,
    /// Heavy attack, or delete the waypoint while the map is open (default: RMB)
    DeleteWaypoint,
    /// Sprint while held (default: Shift)
    ToggleSprint,
}

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Continuous named inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAxis {
    MoveForward,
    MoveRight,
    /// Absolute yaw delta (mouse X)
    Turn,
    /// Normalized yaw rate, scaled by the base turn rate and frame time
    TurnRate,
    /// Absolute pitch delta (mouse Y)
    LookUp,
    /// Normalized pitch rate, scaled by the base look-up rate and frame time
    LookUpRate,
}

/// One input delivered to the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Action { action: InputAction, pressed: bool },
    Axis { axis: InputAxis, value: f32 },
    Touch { finger: u32, location: Vec3, pressed: bool },
}

impl InputEvent {
    pub fn pressed(action: InputAction) -> Self {
        InputEvent::Action {
            action,
            pressed: true,
        }
    }

    pub fn released(action: InputAction) -> Self {
        InputEvent::Action {
            action,
            pressed: false,
        }
    }

    pub fn axis(axis: InputAxis, value: f32) -> Self {
        InputEvent::Axis { axis, value }
    }
}
