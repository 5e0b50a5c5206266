//! Input Module
//!
//! Platform-agnostic input handling. Physical keys, buttons and wheel
//! notches are mapped through [`InputBindings`] to [`InputEvent`]s that the
//! character consumes. Nothing here depends on winit; the demo binary does
//! the translation from window events.
//!
//! # Example
//!
//! ```rust,ignore
//! use wayfinder_engine::input::{InputBindings, KeyCode, KeyboardState};
//!
//! let bindings = InputBindings::new();
//! let mut keyboard = KeyboardState::new();
//!
//! if keyboard.handle_key(KeyCode::Tab, true) {
//!     if let Some(event) = bindings.translate(KeyCode::Tab, true) {
//!         character.handle_input(&mut world, event);
//!     }
//! }
//!
//! // Once per frame
//! for event in bindings.axis_events(&keyboard) {
//!     character.handle_input(&mut world, event);
//! }
//! ```

pub mod actions;
pub mod bindings;
pub mod cursor_manager;
pub mod keyboard;
pub mod mouse;

pub use actions::{InputAction, InputAxis, InputEvent};
pub use bindings::{InputBindings, InputTrigger, KeyAxisBinding};
pub use cursor_manager::CursorManager;
pub use keyboard::{KeyCode, KeyboardState};
pub use mouse::{MAX_SCROLL_NOTCHES, MouseButton, MouseState, Position, ScrollDelta};

/// Combined keyboard and mouse state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position in normalized screen UV, if the cursor is over the window.
    pub fn cursor_uv(&self) -> Option<(f32, f32)> {
        self.mouse.normalized_position()
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse = MouseState::default();
    }
}
