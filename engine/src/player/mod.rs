//! Player Module
//!
//! # Components
//!
//! - [`PlayerController`] - control rotation, cursor state and input gates
//! - [`CharacterMovement`] - kinematic walking, jumping and body facing
//!   driven by the controller's accumulated movement input

pub mod controller;
pub mod movement;

pub use controller::{PlayerController, PITCH_LIMITS};
pub use movement::{BodyFacing, CharacterMovement, MovementSettings};
