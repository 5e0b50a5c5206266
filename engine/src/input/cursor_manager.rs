//! Cursor Manager Module
//!
//! Tracks the player controller's cursor settings: whether the OS cursor is
//! shown and whether clicks are routed to the world. During gameplay the
//! cursor is hidden and grabbed for mouse look; the map shows it and enables
//! click events so waypoints can be placed.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wayfinder_engine::input::CursorManager;
//!
//! let mut cursor = CursorManager::new();
//!
//! // Map opened
//! cursor.set_show_cursor(true);
//! cursor.set_click_events(true);
//!
//! // Apply state to window
//! if cursor.is_dirty() {
//!     window.set_cursor_visible(cursor.should_cursor_be_visible());
//!     cursor.clear_dirty();
//! }
//! ```

/// Cursor visibility and click-event state of a player controller.
#[derive(Debug, Clone)]
pub struct CursorManager {
    /// Whether the OS cursor is shown
    show_cursor: bool,
    /// Whether mouse clicks are delivered as world click events
    click_events: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// Whether the cursor is currently inside the window
    cursor_in_window: bool,
    /// Tracks if state changed and needs to be applied to window
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Gameplay cursor: hidden, no click events.
    pub fn new() -> Self {
        Self {
            show_cursor: false,
            click_events: false,
            has_focus: true,
            cursor_in_window: true,
            state_dirty: true, // Need to apply initial state
        }
    }

    #[inline]
    pub fn is_cursor_shown(&self) -> bool {
        self.show_cursor
    }

    #[inline]
    pub fn click_events_enabled(&self) -> bool {
        self.click_events
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn is_cursor_in_window(&self) -> bool {
        self.cursor_in_window
    }

    /// Check if cursor state needs to be applied to the window.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Clear the dirty flag after applying state.
    pub fn clear_dirty(&mut self) {
        self.state_dirty = false;
    }

    pub fn set_show_cursor(&mut self, show: bool) {
        if self.show_cursor != show {
            self.show_cursor = show;
            self.state_dirty = true;
        }
    }

    pub fn set_click_events(&mut self, enabled: bool) {
        self.click_events = enabled;
    }

    /// Handle window focus gained event. The window state is re-applied.
    pub fn handle_focus_gained(&mut self) {
        self.has_focus = true;
        self.state_dirty = true;
    }

    /// Handle window focus lost event. The show-cursor preference is kept.
    pub fn handle_focus_lost(&mut self) {
        self.has_focus = false;
        self.state_dirty = true;
    }

    pub fn handle_cursor_enter(&mut self) {
        self.cursor_in_window = true;
        self.state_dirty = true;
    }

    pub fn handle_cursor_leave(&mut self) {
        self.cursor_in_window = false;
    }

    /// Visible unless hidden for mouse look in a focused window.
    pub fn should_cursor_be_visible(&self) -> bool {
        self.show_cursor || !self.has_focus
    }

    /// Grabbed only while hidden for mouse look in a focused window.
    pub fn should_cursor_be_grabbed(&self) -> bool {
        !self.show_cursor && self.has_focus
    }

    /// Whether a click at the cursor should reach the world.
    pub fn accepts_world_clicks(&self) -> bool {
        self.click_events && self.cursor_in_window && self.has_focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_gameplay_cursor() {
        let cursor = CursorManager::new();
        assert!(!cursor.is_cursor_shown());
        assert!(!cursor.click_events_enabled());
        assert!(cursor.is_dirty());
        assert!(cursor.should_cursor_be_grabbed());
    }

    #[test]
    fn test_show_cursor_marks_dirty_on_change_only() {
        let mut cursor = CursorManager::new();
        cursor.clear_dirty();

        cursor.set_show_cursor(false);
        assert!(!cursor.is_dirty());

        cursor.set_show_cursor(true);
        assert!(cursor.is_dirty());
        assert!(cursor.should_cursor_be_visible());
        assert!(!cursor.should_cursor_be_grabbed());
    }

    #[test]
    fn test_focus_handling() {
        let mut cursor = CursorManager::new();

        cursor.handle_focus_lost();
        assert!(!cursor.has_focus());
        assert!(cursor.should_cursor_be_visible());
        assert!(!cursor.should_cursor_be_grabbed());
        assert!(!cursor.is_cursor_shown());

        cursor.clear_dirty();
        cursor.handle_focus_gained();
        assert!(cursor.is_dirty());
        assert!(cursor.should_cursor_be_grabbed());
    }

    #[test]
    fn test_world_clicks() {
        let mut cursor = CursorManager::new();
        assert!(!cursor.accepts_world_clicks());

        cursor.set_click_events(true);
        assert!(cursor.accepts_world_clicks());

        cursor.handle_cursor_leave();
        assert!(!cursor.accepts_world_clicks());

        cursor.clear_dirty();
        cursor.handle_cursor_enter();
        assert!(cursor.is_dirty());
        assert!(cursor.accepts_world_clicks());
    }
}
