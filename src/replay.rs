//! Recorded gesture traces.
//!
//! A trace is the configuration of one overlay plus the pointer events a host
//! delivered to it. Replaying a trace through a fresh [`Manipulator`]
//! reproduces the exact geometry the user saw, which is how bug reports
//! about jumping or drifting boxes get turned into tests.

use crate::capture::PointerCapture;
use crate::config::GestureConfig;
use crate::error::ConfigResult;
use crate::geometry::Position;
use crate::handle::Handle;
use crate::hit_test::HitTarget;
use crate::manipulator::{Manipulation, Manipulator};
use crate::pointer::{PointerId, PointerKind, PointerSample};
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_resizable() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureTrace {
    #[serde(default)]
    pub config: GestureConfig,
    #[serde(default = "default_resizable")]
    pub resizable: bool,
    pub events: Vec<TraceEvent>,
}

/// A pointer reading inside a trace event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TracePoint {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub pointer: u32,
    #[serde(default)]
    pub kind: PointerKind,
}

impl From<TracePoint> for PointerSample {
    fn from(point: TracePoint) -> Self {
        PointerSample {
            id: PointerId(point.pointer),
            kind: point.kind,
            position: Position::new(point.x, point.y),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TraceEvent {
    /// Pointer-down on the body, or on `handle` when present
    Down {
        #[serde(flatten)]
        point: TracePoint,
        #[serde(default)]
        handle: Option<Handle>,
    },
    Move {
        #[serde(flatten)]
        point: TracePoint,
    },
    Up {
        #[serde(flatten)]
        point: TracePoint,
    },
    Cancel,
}

impl GestureTrace {
    /// Run every event and collect what the manipulator emitted.
    pub fn replay(&self, capture: PointerCapture) -> ConfigResult<Vec<Manipulation>> {
        let mut manipulator = Manipulator::new(&self.config, capture, self.resizable)?;
        let mut outcomes = Vec::new();

        for (index, event) in self.events.iter().enumerate() {
            let outcome = match event {
                TraceEvent::Down { point, handle } => {
                    let target = handle.map_or(HitTarget::Body, HitTarget::Handle);
                    let started = manipulator.pointer_down((*point).into(), target);
                    debug!(index, started, ?target, "Replayed pointer down");
                    None
                }
                TraceEvent::Move { point } => manipulator.pointer_move((*point).into()),
                TraceEvent::Up { point } => manipulator.pointer_up((*point).into()),
                TraceEvent::Cancel => manipulator.pointer_cancel(),
            };
            outcomes.extend(outcome);
        }

        manipulator.teardown();
        Ok(outcomes)
    }
}
