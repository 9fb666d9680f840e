//! Resize controller - turns a gesture on one of the eight handles into a new
//! size plus the anchor compensation that keeps the opposite edges still.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active{handle}   (begin on a handle, not disabled)
//! Active -> Idle           (end, release, cancel, teardown, disable)
//! ```
//!
//! ## Update Pipeline
//!
//! Every move is computed from the session snapshot by [`resize_geometry`]:
//!
//! 1. directional mapping: the handle's signs turn the pointer delta into a
//!    candidate width/height
//! 2. aspect ratio (optional): edges derive the orthogonal dimension, corners
//!    follow the dominant axis (ties go to width)
//! 3. clamping to `[min, max]` per dimension
//! 4. position compensation from the *clamped* size for left/top handles
//!
//! Clamping runs after the ratio is applied and does not re-derive the other
//! dimension, so the ratio can break at a clamp boundary.

use crate::capture::{CaptureGuard, PointerCapture};
use crate::config::GestureConfig;
use crate::constants::GEOMETRY_EPSILON;
use crate::geometry::{Position, Size, SizeBounds, is_usable_pointer};
use crate::handle::{Handle, HandleAxis};
use crate::pointer::{PointerId, PointerSample};
use crate::profile_scope;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Result of one resize step: the applied size and the anchor offset the host
/// adds to the position it had when the gesture began.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeUpdate {
    pub size: Size,
    pub position_delta: Position,
}

impl ResizeUpdate {
    pub fn unchanged(size: Size) -> Self {
        Self {
            size,
            position_delta: Position::ZERO,
        }
    }
}

/// Proportional change of a dimension; a degenerate origin counts as no change.
#[inline]
fn relative_change(value: f32, origin: f32) -> f32 {
    if origin.abs() > GEOMETRY_EPSILON {
        value / origin
    } else {
        1.0
    }
}

/// Pure resize reducer shared by live updates and replay.
///
/// `aspect_ratio` is `Some(origin_width / origin_height)` when the ratio is
/// locked for this gesture.
pub fn resize_geometry(
    handle: Handle,
    origin_size: Size,
    pointer_delta: Position,
    bounds: &SizeBounds,
    aspect_ratio: Option<f32>,
) -> ResizeUpdate {
    let mut width = origin_size.width + handle.width_sign() * pointer_delta.x;
    let mut height = origin_size.height + handle.height_sign() * pointer_delta.y;

    if let Some(ratio) = aspect_ratio {
        match handle.axis() {
            HandleAxis::Horizontal => height = width / ratio,
            HandleAxis::Vertical => width = height * ratio,
            HandleAxis::Both => {
                let width_dev = (relative_change(width, origin_size.width) - 1.0).abs();
                let height_dev = (relative_change(height, origin_size.height) - 1.0).abs();
                if width_dev >= height_dev {
                    height = width / ratio;
                } else {
                    width = height * ratio;
                }
            }
        }
    }

    let size = Size::new(bounds.clamp_width(width), bounds.clamp_height(height));

    let position_delta = Position::new(
        if handle.moves_left_edge() {
            origin_size.width - size.width
        } else {
            0.0
        },
        if handle.moves_top_edge() {
            origin_size.height - size.height
        } else {
            0.0
        },
    );

    ResizeUpdate {
        size,
        position_delta,
    }
}

/// Snapshot taken when a resize begins. Lives only inside [`ResizeState::Active`].
#[derive(Debug)]
pub struct ResizeSession {
    handle: Handle,
    pointer: PointerId,
    origin_pointer: Position,
    origin_size: Size,
    origin_position: Position,
    origin_aspect_ratio: f32,
    last: ResizeUpdate,
    _capture: CaptureGuard,
}

impl ResizeSession {
    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn origin_size(&self) -> Size {
        self.origin_size
    }

    pub fn origin_position(&self) -> Position {
        self.origin_position
    }

    pub fn origin_aspect_ratio(&self) -> f32 {
        self.origin_aspect_ratio
    }

    /// Last geometry that passed validation.
    pub fn last(&self) -> ResizeUpdate {
        self.last
    }
}

#[derive(Debug, Default)]
pub enum ResizeState {
    #[default]
    Idle,
    Active(ResizeSession),
}

impl ResizeState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn handle(&self) -> Option<Handle> {
        match self {
            Self::Active(session) => Some(session.handle),
            Self::Idle => None,
        }
    }

    pub fn session(&self) -> Option<&ResizeSession> {
        match self {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }
}

type SizeCallback = Box<dyn FnMut(Size)>;
type UpdateCallback = Box<dyn FnMut(Size, Position)>;

#[derive(Default)]
pub struct ResizeCallbacks {
    pub on_resize_start: Option<SizeCallback>,
    pub on_resize: Option<UpdateCallback>,
    pub on_resize_end: Option<UpdateCallback>,
}

impl fmt::Debug for ResizeCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeCallbacks")
            .field("on_resize_start", &self.on_resize_start.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .field("on_resize_end", &self.on_resize_end.is_some())
            .finish()
    }
}

#[derive(Debug)]
pub struct ResizeController {
    size: Size,
    position: Position,
    bounds: SizeBounds,
    maintain_aspect_ratio: bool,
    disabled: bool,
    state: ResizeState,
    capture: PointerCapture,
    callbacks: ResizeCallbacks,
}

impl ResizeController {
    pub fn new(capture: PointerCapture, initial_position: Position, initial_size: Size) -> Self {
        let bounds = SizeBounds::default();
        Self {
            size: bounds.clamp(initial_size),
            position: initial_position,
            bounds,
            maintain_aspect_ratio: false,
            disabled: false,
            state: ResizeState::Idle,
            capture,
            callbacks: ResizeCallbacks::default(),
        }
    }

    pub fn from_config(config: &GestureConfig, capture: PointerCapture) -> Self {
        let bounds = config.bounds();
        Self {
            size: bounds.clamp(config.initial_size),
            position: config.initial_position,
            bounds,
            maintain_aspect_ratio: config.maintain_aspect_ratio,
            disabled: config.disabled,
            state: ResizeState::Idle,
            capture,
            callbacks: ResizeCallbacks::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: SizeBounds) -> Self {
        self.bounds = bounds;
        self.size = bounds.clamp(self.size);
        self
    }

    pub fn with_aspect_ratio_locked(mut self, locked: bool) -> Self {
        self.maintain_aspect_ratio = locked;
        self
    }

    pub fn on_resize_start(mut self, callback: impl FnMut(Size) + 'static) -> Self {
        self.callbacks.on_resize_start = Some(Box::new(callback));
        self
    }

    pub fn on_resize(mut self, callback: impl FnMut(Size, Position) + 'static) -> Self {
        self.callbacks.on_resize = Some(Box::new(callback));
        self
    }

    pub fn on_resize_end(mut self, callback: impl FnMut(Size, Position) + 'static) -> Self {
        self.callbacks.on_resize_end = Some(Box::new(callback));
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Anchor position including any live compensation.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    pub fn state(&self) -> &ResizeState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn active_handle(&self) -> Option<Handle> {
        self.state.handle()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn maintains_aspect_ratio(&self) -> bool {
        self.maintain_aspect_ratio
    }

    /// Takes effect from the next gesture.
    pub fn set_aspect_ratio_locked(&mut self, locked: bool) {
        self.maintain_aspect_ratio = locked;
    }

    /// Disabling mid-gesture aborts the session and restores the starting
    /// geometry without firing any callback.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            if let ResizeState::Active(session) = std::mem::take(&mut self.state) {
                debug!(handle = %session.handle, "Resize aborted by disable");
                self.size = session.origin_size;
                self.position = session.origin_position;
            }
        }
    }

    /// Host resynchronization. The size is clamped to the bounds; no
    /// callback fires and an active session keeps its snapshot.
    pub fn set_size(&mut self, size: Size) {
        if size.is_finite() {
            self.size = self.bounds.clamp(size);
        }
    }

    /// Host resynchronization of the anchor used for the next snapshot.
    /// Non-finite positions are ignored.
    pub fn set_position(&mut self, position: Position) {
        if !position.is_finite() {
            trace!(?position, "Ignoring non-finite resize position");
            return;
        }
        self.position = position;
    }

    /// Start resizing from `handle`. Returns false when disabled, already
    /// resizing, or the sample is unusable.
    pub fn begin(&mut self, handle: Handle, sample: PointerSample) -> bool {
        if self.disabled || self.state.is_active() {
            trace!(disabled = self.disabled, "Resize begin ignored");
            return false;
        }
        if !is_usable_pointer(sample.position) {
            trace!(?sample.position, "Resize begin with unusable pointer ignored");
            return false;
        }

        let origin_size = self.size;
        debug!(
            %handle,
            pointer = sample.id.0,
            width = origin_size.width,
            height = origin_size.height,
            "Resize started"
        );
        self.state = ResizeState::Active(ResizeSession {
            handle,
            pointer: sample.id,
            origin_pointer: sample.position,
            origin_size,
            origin_position: self.position,
            origin_aspect_ratio: origin_size.aspect_ratio(),
            last: ResizeUpdate::unchanged(origin_size),
            _capture: self.capture.acquire("resize", sample.kind),
        });

        if let Some(cb) = self.callbacks.on_resize_start.as_mut() {
            cb(origin_size);
        }
        true
    }

    /// Track a move. Secondary contacts and unusable samples are skipped,
    /// keeping the last valid geometry.
    pub fn update(&mut self, sample: PointerSample) -> Option<ResizeUpdate> {
        profile_scope!("resize_update");

        let lock = self.maintain_aspect_ratio;
        let bounds = self.bounds;
        let ResizeState::Active(session) = &mut self.state else {
            return None;
        };
        if sample.id != session.pointer {
            trace!(pointer = sample.id.0, "Ignoring move from secondary contact");
            return None;
        }
        if !is_usable_pointer(sample.position) {
            trace!(?sample.position, "Skipping unusable resize sample");
            return None;
        }

        let update = resize_geometry(
            session.handle,
            session.origin_size,
            sample.position - session.origin_pointer,
            &bounds,
            lock.then_some(session.origin_aspect_ratio),
        );
        if !update.size.is_finite() || !update.position_delta.is_finite() {
            trace!(?update, "Discarding non-finite resize result");
            return None;
        }

        session.last = update;
        self.size = update.size;
        self.position = session.origin_position + update.position_delta;

        if let Some(cb) = self.callbacks.on_resize.as_mut() {
            cb(update.size, update.position_delta);
        }
        Some(update)
    }

    /// Pointer released. Only the contact that started the resize ends it.
    pub fn release(&mut self, sample: PointerSample) -> Option<ResizeUpdate> {
        let owned = matches!(&self.state, ResizeState::Active(s) if s.pointer == sample.id);
        if !owned {
            return None;
        }
        self.update(sample);
        self.end()
    }

    /// Close the session and commit the last valid geometry, overriding any
    /// `set_size`/`set_position` made mid-gesture. No-op without a session.
    pub fn end(&mut self) -> Option<ResizeUpdate> {
        let ResizeState::Active(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        let update = session.last;
        self.size = update.size;
        self.position = session.origin_position + update.position_delta;
        // Releases the global subscription
        drop(session);

        debug!(
            width = update.size.width,
            height = update.size.height,
            dx = update.position_delta.x,
            dy = update.position_delta.y,
            "Resize ended"
        );
        if let Some(cb) = self.callbacks.on_resize_end.as_mut() {
            cb(update.size, update.position_delta);
        }
        Some(update)
    }

    /// Forced cancellation (lost capture, touch cancel): commits the last
    /// valid geometry like `end`.
    pub fn cancel(&mut self) -> Option<ResizeUpdate> {
        if self.state.is_active() {
            debug!("Resize cancelled");
        }
        self.end()
    }

    /// Host teardown: drop the session and deliver nothing further.
    pub fn teardown(&mut self) {
        if let ResizeState::Active(session) = std::mem::take(&mut self.state) {
            debug!(handle = %session.handle, "Resize torn down");
        }
    }
}
