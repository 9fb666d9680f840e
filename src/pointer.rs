//! Pointer and touch samples delivered by the host's event source.

use crate::geometry::Position;
use serde::{Deserialize, Serialize};

/// Identifies one contact: the mouse, a pen, or a single finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The mouse always reports as contact 0.
    pub const MOUSE: PointerId = PointerId(0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

/// A single pointer reading, already converted to document units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    #[serde(default)]
    pub id: PointerId,
    #[serde(default)]
    pub kind: PointerKind,
    pub position: Position,
}

impl PointerSample {
    pub fn mouse(x: f32, y: f32) -> Self {
        Self {
            id: PointerId::MOUSE,
            kind: PointerKind::Mouse,
            position: Position::new(x, y),
        }
    }

    pub fn touch(contact: u32, x: f32, y: f32) -> Self {
        Self {
            id: PointerId(contact),
            kind: PointerKind::Touch,
            position: Position::new(x, y),
        }
    }
}
