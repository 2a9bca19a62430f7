//! Sidebar drag-resize controller.
//!
//! Widths are in pixels; the renderer converts them to terminal columns at
//! [`PIXELS_PER_COLUMN`]. Pointer positions arrive as columns and are
//! converted with [`column_to_pixels`].

pub const MIN_SIDEBAR_WIDTH: u16 = 180;
pub const MAX_SIDEBAR_WIDTH: u16 = 400;
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 260;

/// Width used when the viewport is narrower than [`NARROW_VIEWPORT_WIDTH`].
///
pub const COMPACT_SIDEBAR_WIDTH: u16 = 70;
pub const NARROW_VIEWPORT_WIDTH: u16 = 800;

pub const PIXELS_PER_COLUMN: u16 = 10;

pub fn column_to_pixels(column: u16) -> i32 {
    i32::from(column) * i32::from(PIXELS_PER_COLUMN)
}

pub fn pixels_to_columns(pixels: u16) -> u16 {
    pixels / PIXELS_PER_COLUMN
}

/// Transient record of an active drag.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DragGesture {
    pub origin_x: i32,
    pub origin_width: u16,
}

/// Cursor shape requested while a gesture is active.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CursorHint {
    EwResize,
}

#[derive(Debug, Clone)]
pub struct ResizeController {
    width: u16,
    viewport_width: u16,
    gesture: Option<DragGesture>,
}

impl Default for ResizeController {
    fn default() -> Self {
        ResizeController {
            width: DEFAULT_SIDEBAR_WIDTH,
            viewport_width: NARROW_VIEWPORT_WIDTH,
            gesture: None,
        }
    }
}

impl ResizeController {
    /// Width chosen by the user, ignoring the compact override.
    ///
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Width to lay out with. The compact override wins over any dragged width.
    ///
    pub fn effective_width(&self) -> u16 {
        if self.is_compact() {
            COMPACT_SIDEBAR_WIDTH
        } else {
            self.width
        }
    }

    pub fn is_compact(&self) -> bool {
        self.viewport_width < NARROW_VIEWPORT_WIDTH
    }

    /// Record the viewport width. Becoming compact ends any active drag.
    ///
    pub fn set_viewport_width(&mut self, pixels: u16) -> &mut Self {
        self.viewport_width = pixels;
        if self.is_compact() {
            self.end_drag();
        }
        self
    }

    pub fn gesture(&self) -> Option<&DragGesture> {
        self.gesture.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn cursor_hint(&self) -> Option<CursorHint> {
        self.gesture.map(|_| CursorHint::EwResize)
    }

    /// Start a gesture at `pointer_x`. Returns false when the handle is
    /// disabled by the compact layout.
    ///
    pub fn begin_drag(&mut self, pointer_x: i32) -> bool {
        if self.is_compact() {
            return false;
        }
        self.gesture = Some(DragGesture {
            origin_x: pointer_x,
            origin_width: self.width,
        });
        true
    }

    /// Apply pointer movement. No-op unless a gesture is active.
    ///
    pub fn drag_to(&mut self, pointer_x: i32) -> &mut Self {
        if let Some(gesture) = self.gesture {
            let width = i32::from(gesture.origin_width) + (pointer_x - gesture.origin_x);
            let clamped = width.clamp(
                i32::from(MIN_SIDEBAR_WIDTH),
                i32::from(MAX_SIDEBAR_WIDTH),
            );
            self.width = clamped as u16;
        }
        self
    }

    pub fn end_drag(&mut self) -> &mut Self {
        self.gesture = None;
        self
    }

    /// Release the gesture when the owning view goes away.
    ///
    pub fn dispose(&mut self) {
        self.end_drag();
    }
}
