//! UI Module
//!
//! Heads-up overlays owned by the character.

pub mod overlay;

pub use overlay::{Hud, Overlay, OverlayKind};
