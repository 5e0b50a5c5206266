//! Mouse Input Module
//!
//! Contains mouse state tracking for cursor position, buttons, and scroll wheel.
//! Decoupled from winit to use generic types.

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// 2D position, used for mouse coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_tuple(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Scroll wheel delta, can be line-based or pixel-based.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollDelta {
    /// Horizontal scroll (positive = right)
    pub x: f32,
    /// Vertical scroll (positive = up/forward)
    pub y: f32,
}

impl ScrollDelta {
    /// Create from line delta (common for mouse wheels).
    pub fn from_lines(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create from pixel delta (common for trackpads).
    /// Normalizes by dividing by 100 to get approximate line equivalents.
    pub fn from_pixels(x: f64, y: f64) -> Self {
        Self {
            x: (x / 100.0) as f32,
            y: (y / 100.0) as f32,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Most wheel notches a single scroll event can produce.
pub const MAX_SCROLL_NOTCHES: i32 = 16;

/// Cursor position and in-window tracking.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Current mouse position in normalized UV coordinates (0.0 to 1.0).
    /// Origin is bottom-left, Y increases upward.
    pub position: Option<Position>,

    /// Current mouse position in raw pixel coordinates.
    pub position_pixels: Option<Position>,

    /// Whether the mouse is inside the window.
    pub in_window: bool,

    /// Vertical scroll not yet spent on a whole notch, in lines
    scroll_remainder: f32,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update mouse position from raw pixel coordinates.
    ///
    /// # Arguments
    /// * `x` - X position in pixels
    /// * `y` - Y position in pixels (origin at top)
    /// * `window_width` - Window width in pixels
    /// * `window_height` - Window height in pixels
    pub fn set_position(&mut self, x: f64, y: f64, window_width: u32, window_height: u32) {
        self.position_pixels = Some(Position::new(x as f32, y as f32));

        if window_width == 0 || window_height == 0 {
            // Minimized window
            self.position = None;
            return;
        }

        // Normalized UV, bottom-left origin
        let norm_x = x as f32 / window_width as f32;
        let norm_y = 1.0 - (y as f32 / window_height as f32);
        self.position = Some(Position::new(norm_x, norm_y));
    }

    /// Get the normalized position as a tuple, if available.
    pub fn normalized_position(&self) -> Option<(f32, f32)> {
        self.position.map(|p| p.to_tuple())
    }

    pub fn enter_window(&mut self) {
        self.in_window = true;
    }

    pub fn leave_window(&mut self) {
        self.in_window = false;
        self.position = None;
        self.position_pixels = None;
        self.scroll_remainder = 0.0;
    }

    /// Add a scroll event and return the whole notches it completes,
    /// positive for up.
    ///
    /// Fractions carry over to later events; reversing direction drops them.
    /// The result is capped at [`MAX_SCROLL_NOTCHES`] either way.
    pub fn accumulate_scroll(&mut self, delta: ScrollDelta) -> i32 {
        if !delta.y.is_finite() || delta.y == 0.0 {
            return 0;
        }
        if self.scroll_remainder * delta.y < 0.0 {
            self.scroll_remainder = 0.0;
        }

        self.scroll_remainder += delta.y;
        let whole = self.scroll_remainder.trunc();
        self.scroll_remainder -= whole;

        let cap = MAX_SCROLL_NOTCHES as f32;
        whole.clamp(-cap, cap) as i32
    }

    /// Scroll carried toward the next notch.
    pub fn scroll_remainder(&self) -> f32 {
        self.scroll_remainder
    }
}
