//! Rendered geometry reported by the host.

/// Axis-aligned bounding box in host coordinates (CSS pixels in a browser).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box of the given size whose horizontal center sits at `center_x`.
    pub fn centered_at(center_x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(center_x - width / 2.0, y, width, height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
