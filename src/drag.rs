//! Drag controller - translates an overlay's anchor under a pointer gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active     (begin on the overlay body, not disabled)
//! Active -> Idle     (end, release of the owning contact, cancel, teardown)
//! ```
//!
//! The live position is always `origin_position + (pointer - origin_pointer)`,
//! computed against the snapshot taken at `begin`, so duplicate or coalesced
//! move events produce the same result. No clamping happens here; keeping an
//! overlay on its page is the host's job.

use crate::capture::{CaptureGuard, PointerCapture};
use crate::config::GestureConfig;
use crate::geometry::{Position, is_usable_pointer};
use crate::pointer::{PointerId, PointerSample};
use crate::profile_scope;
use std::fmt;
use tracing::{debug, trace};

/// Snapshot taken when a drag begins. Lives only inside [`DragState::Active`].
#[derive(Debug)]
pub struct DragSession {
    pointer: PointerId,
    origin_pointer: Position,
    origin_position: Position,
    last: Position,
    _capture: CaptureGuard,
}

impl DragSession {
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn origin_pointer(&self) -> Position {
        self.origin_pointer
    }

    pub fn origin_position(&self) -> Position {
        self.origin_position
    }

    /// Last position produced by this gesture.
    pub fn last(&self) -> Position {
        self.last
    }
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Active(DragSession),
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }
}

type PositionCallback = Box<dyn FnMut(Position)>;

/// Host hooks. `on_drag_end` is the commit point; `on_drag` is for live preview.
#[derive(Default)]
pub struct DragCallbacks {
    pub on_drag: Option<PositionCallback>,
    pub on_drag_end: Option<PositionCallback>,
}

impl fmt::Debug for DragCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragCallbacks")
            .field("on_drag", &self.on_drag.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}

#[derive(Debug)]
pub struct DragController {
    position: Position,
    disabled: bool,
    state: DragState,
    capture: PointerCapture,
    callbacks: DragCallbacks,
}

impl DragController {
    pub fn new(capture: PointerCapture, initial_position: Position) -> Self {
        Self {
            position: initial_position,
            disabled: false,
            state: DragState::Idle,
            capture,
            callbacks: DragCallbacks::default(),
        }
    }

    pub fn from_config(config: &GestureConfig, capture: PointerCapture) -> Self {
        let mut controller = Self::new(capture, config.initial_position);
        controller.disabled = config.disabled;
        controller
    }

    pub fn on_drag(mut self, callback: impl FnMut(Position) + 'static) -> Self {
        self.callbacks.on_drag = Some(Box::new(callback));
        self
    }

    pub fn on_drag_end(mut self, callback: impl FnMut(Position) + 'static) -> Self {
        self.callbacks.on_drag_end = Some(Box::new(callback));
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disabling mid-gesture aborts the session and restores the start
    /// position without firing any callback.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            if let DragState::Active(session) = std::mem::take(&mut self.state) {
                debug!("Drag aborted by disable");
                self.position = session.origin_position;
            }
        }
    }

    /// Host resynchronization (undo, external edit). Never fires `on_drag_end`
    /// and leaves an active session's snapshot alone. Non-finite positions are
    /// ignored.
    pub fn set_position(&mut self, position: Position) {
        if !position.is_finite() {
            trace!(?position, "Ignoring non-finite drag position");
            return;
        }
        self.position = position;
    }

    /// Start a drag. Returns false when disabled, already dragging, or the
    /// sample is unusable.
    pub fn begin(&mut self, sample: PointerSample) -> bool {
        if self.disabled || self.state.is_active() {
            trace!(disabled = self.disabled, "Drag begin ignored");
            return false;
        }
        if !is_usable_pointer(sample.position) {
            trace!(?sample.position, "Drag begin with unusable pointer ignored");
            return false;
        }

        debug!(pointer = sample.id.0, x = self.position.x, y = self.position.y, "Drag started");
        self.state = DragState::Active(DragSession {
            pointer: sample.id,
            origin_pointer: sample.position,
            origin_position: self.position,
            last: self.position,
            _capture: self.capture.acquire("drag", sample.kind),
        });
        true
    }

    /// Track a move. Samples from other contacts and unmeasurable samples are
    /// skipped, keeping the last valid position.
    pub fn update(&mut self, sample: PointerSample) -> Option<Position> {
        profile_scope!("drag_update");

        let DragState::Active(session) = &mut self.state else {
            return None;
        };
        if sample.id != session.pointer {
            trace!(pointer = sample.id.0, "Ignoring move from secondary contact");
            return None;
        }
        if !is_usable_pointer(sample.position) {
            trace!(?sample.position, "Skipping unusable drag sample");
            return None;
        }

        let delta = sample.position - session.origin_pointer;
        session.last = session.origin_position + delta;
        self.position = session.last;

        if let Some(cb) = self.callbacks.on_drag.as_mut() {
            cb(self.position);
        }
        Some(self.position)
    }

    /// Pointer released. Only the contact that started the drag ends it.
    pub fn release(&mut self, sample: PointerSample) -> Option<Position> {
        let owned = matches!(&self.state, DragState::Active(s) if s.pointer == sample.id);
        if !owned {
            return None;
        }
        self.update(sample);
        self.end()
    }

    /// Close the session and commit the last position the gesture produced.
    /// A `set_position` made mid-gesture is overridden. No-op without a
    /// session.
    pub fn end(&mut self) -> Option<Position> {
        let DragState::Active(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        self.position = session.last;
        // Releases the global subscription
        drop(session);

        debug!(x = self.position.x, y = self.position.y, "Drag ended");
        if let Some(cb) = self.callbacks.on_drag_end.as_mut() {
            cb(self.position);
        }
        Some(self.position)
    }

    /// Forced cancellation (lost capture, touch cancel): commits the last
    /// valid position like `end`.
    pub fn cancel(&mut self) -> Option<Position> {
        if self.state.is_active() {
            debug!("Drag cancelled");
        }
        self.end()
    }

    /// Host teardown: drop the session and deliver nothing further.
    pub fn teardown(&mut self) {
        if let DragState::Active(_) = std::mem::take(&mut self.state) {
            debug!("Drag torn down");
        }
    }
}
