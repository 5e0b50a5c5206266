//! Camera Module
//!
//! Camera rigs, the view-mode state machine and cursor raycasting.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod raycast;
pub mod rig;
pub mod view_mode;

pub use raycast::{Projection, Ray, get_ray_direction};
pub use rig::{CameraRig, CameraRigs};
pub use view_mode::{CameraMode, ViewMode};
