use super::{Display, Overflow, Visibility};

/// Computed presentation state the host layout pass writes onto an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub display: Display,
    pub visibility: Visibility,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set both horizontal and vertical overflow behavior.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self.overflow_y = overflow;
        self
    }

    pub fn overflow_x(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self
    }

    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.overflow_y = overflow;
        self
    }
}

/// Scroll extents reported by layout.
///
/// `client_*` is the visible box, `scroll_*` the full content size. Content
/// overflows an axis when its scroll extent exceeds its client extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollExtents {
    pub client_width: u32,
    pub client_height: u32,
    pub scroll_width: u32,
    pub scroll_height: u32,
}

impl ScrollExtents {
    pub const fn new(client_width: u32, client_height: u32, scroll_width: u32, scroll_height: u32) -> Self {
        Self {
            client_width,
            client_height,
            scroll_width,
            scroll_height,
        }
    }

    /// Extents for a box whose content exactly fits.
    pub const fn fitting(width: u32, height: u32) -> Self {
        Self::new(width, height, width, height)
    }

    pub const fn overflows_x(&self) -> bool {
        self.scroll_width > self.client_width
    }

    pub const fn overflows_y(&self) -> bool {
        self.scroll_height > self.client_height
    }
}
