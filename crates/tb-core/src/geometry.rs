//! Canvas-space geometry: points, sizes, and the container clamp.
//!
//! Positions are top-left corners in CSS pixels. The clamp is the one pure
//! function every drag frame runs through — a dragged block never leaves
//! its container.

use serde::{Deserialize, Serialize};

/// A position on the canvas (top-left corner of a block, px).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A block's rendered extent, measured by the host (the core never does
/// text layout).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The canvas (container) dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// An axis-aligned rectangle (position + extent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn from_parts(origin: Point, extent: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: extent.width,
            height: extent.height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Clamp a block's top-left corner so the whole block stays inside the
/// container.
///
/// The allowed range per axis is `0 ..= container − block`. When the block
/// is larger than the container that range collapses to 0 and the block pins
/// to the origin on that axis.
pub fn clamp_to_container(raw: Point, block: Size, container: Viewport) -> Point {
    let max_x = (container.width - block.width).max(0.0);
    let max_y = (container.height - block.height).max(0.0);
    Point {
        x: raw.x.clamp(0.0, max_x),
        y: raw.y.clamp(0.0, max_y),
    }
}
