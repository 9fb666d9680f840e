//! The eight resize handles and their direction tables.
//!
//! Each handle is described by how it moves the width and height of the box
//! (`+1` grows with positive pointer delta, `-1` shrinks, `0` untouched) and
//! whether it drags the left or top edge, which determines position
//! compensation.

use crate::geometry::{Position, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Handle {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Which dimensions a handle drives directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleAxis {
    /// `left` / `right`
    Horizontal,
    /// `top` / `bottom`
    Vertical,
    /// Any corner
    Both,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::Top,
        Handle::Bottom,
        Handle::Left,
        Handle::Right,
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
    ];

    pub fn axis(self) -> HandleAxis {
        match self {
            Handle::Left | Handle::Right => HandleAxis::Horizontal,
            Handle::Top | Handle::Bottom => HandleAxis::Vertical,
            _ => HandleAxis::Both,
        }
    }

    #[inline]
    pub fn is_corner(self) -> bool {
        self.axis() == HandleAxis::Both
    }

    /// Sign applied to the pointer's x delta to get the width change.
    pub fn width_sign(self) -> f32 {
        match self {
            Handle::Right | Handle::TopRight | Handle::BottomRight => 1.0,
            Handle::Left | Handle::TopLeft | Handle::BottomLeft => -1.0,
            Handle::Top | Handle::Bottom => 0.0,
        }
    }

    /// Sign applied to the pointer's y delta to get the height change.
    pub fn height_sign(self) -> f32 {
        match self {
            Handle::Bottom | Handle::BottomLeft | Handle::BottomRight => 1.0,
            Handle::Top | Handle::TopLeft | Handle::TopRight => -1.0,
            Handle::Left | Handle::Right => 0.0,
        }
    }

    /// Left-family handles move the anchor on the x axis.
    #[inline]
    pub fn moves_left_edge(self) -> bool {
        matches!(self, Handle::Left | Handle::TopLeft | Handle::BottomLeft)
    }

    /// Top-family handles move the anchor on the y axis.
    #[inline]
    pub fn moves_top_edge(self) -> bool {
        matches!(self, Handle::Top | Handle::TopLeft | Handle::TopRight)
    }

    /// Center of the handle's grip on the given rectangle.
    pub fn anchor(self, rect: &Rect) -> Position {
        let mid_x = rect.min_x() + rect.size.width / 2.0;
        let mid_y = rect.min_y() + rect.size.height / 2.0;
        let x = match self.width_sign() {
            s if s > 0.0 => rect.max_x(),
            s if s < 0.0 => rect.min_x(),
            _ => mid_x,
        };
        let y = match self.height_sign() {
            s if s > 0.0 => rect.max_y(),
            s if s < 0.0 => rect.min_y(),
            _ => mid_y,
        };
        Position::new(x, y)
    }

    /// CSS-style cursor name hosts show while hovering the handle.
    pub fn cursor(self) -> &'static str {
        match self {
            Handle::Top | Handle::Bottom => "ns-resize",
            Handle::Left | Handle::Right => "ew-resize",
            Handle::TopLeft | Handle::BottomRight => "nwse-resize",
            Handle::TopRight | Handle::BottomLeft => "nesw-resize",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Handle::Top => "top",
            Handle::Bottom => "bottom",
            Handle::Left => "left",
            Handle::Right => "right",
            Handle::TopLeft => "topLeft",
            Handle::TopRight => "topRight",
            Handle::BottomLeft => "bottomLeft",
            Handle::BottomRight => "bottomRight",
        };
        f.write_str(name)
    }
}
