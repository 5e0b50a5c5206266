//! Waypoint Module
//!
//! - [`WaypointMarker`] - placed world actor with an idle bob/spin animation
//! - [`WaypointPointer`] - arrow on the character that faces the marker

pub mod marker;
pub mod pointer;

pub use marker::{
    MarkerPart, MarkerPartKind, MeshHandle, WaypointMarker,
    LOWER_BOB_AMPLITUDE, LOWER_PHASE_STEP, UPPER_BOB_AMPLITUDE, UPPER_PHASE_STEP,
    UPPER_SPIN_DEGREES,
};
pub use pointer::WaypointPointer;
