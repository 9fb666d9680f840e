//! Geometry primitives shared by the drag and resize controllers.
//!
//! All values live in unscaled document units. Zoom is applied by the host
//! before samples reach the engine and after results leave it.

use crate::constants::{
    DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, GEOMETRY_EPSILON, MAX_POINTER_COORDINATE,
};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D coordinate (an overlay anchor, a pointer sample, or a delta).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Finite and within `limit` on both axes.
    #[inline]
    pub fn is_measurable(&self, limit: f32) -> bool {
        self.is_finite() && self.x.abs() <= limit && self.y.abs() <= limit
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Width and height of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height, captured once per resize session.
    ///
    /// A degenerate height yields a square ratio instead of infinity.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height.abs() > GEOMETRY_EPSILON {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle: the anchor (top-left) plus its size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Position,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Position, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }
}

/// Component-wise `[min, max]` limits applied to every resize result.
///
/// `max: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min: Size,
    #[serde(default)]
    pub max: Option<Size>,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min: Size::new(DEFAULT_MIN_WIDTH, DEFAULT_MIN_HEIGHT),
            max: None,
        }
    }
}

impl SizeBounds {
    pub fn new(min: Size, max: Option<Size>) -> Self {
        Self { min, max }
    }

    /// Clamp a width to the bounds.
    #[inline]
    pub fn clamp_width(&self, width: f32) -> f32 {
        let upper = self.max.map_or(f32::INFINITY, |m| m.width);
        clamp_dimension(width, self.min.width, upper)
    }

    /// Clamp a height to the bounds.
    #[inline]
    pub fn clamp_height(&self, height: f32) -> f32 {
        let upper = self.max.map_or(f32::INFINITY, |m| m.height);
        clamp_dimension(height, self.min.height, upper)
    }

    /// Clamp both dimensions independently.
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(self.clamp_width(size.width), self.clamp_height(size.height))
    }

    pub fn contains(&self, size: Size) -> bool {
        self.clamp(size) == size
    }
}

/// Unlike `f32::clamp`, never panics on `min > max`; the minimum wins.
#[inline]
fn clamp_dimension(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// True when a pointer sample can be used for geometry math.
#[inline]
pub fn is_usable_pointer(pointer: Position) -> bool {
    pointer.is_measurable(MAX_POINTER_COORDINATE)
}
