//! Game Module
//!
//! Ties the engine pieces into a playable session: one world, one
//! possessed character and its movement component, driven by platform
//! input translated through the input bindings.

pub mod session;

pub use session::{FLOOR_PROBE_DEPTH, Game};
