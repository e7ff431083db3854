//! Pixel-space geometry for widget-local render descriptions.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle spanning `left..right` horizontally and `top..bottom` vertically.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Create a rectangle of the given width centered on `center_x`.
    pub fn centered_on_x(center_x: f32, width: f32, top: f32, height: f32) -> Self {
        Self::new(center_x - width * 0.5, top, width, height)
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }
}
