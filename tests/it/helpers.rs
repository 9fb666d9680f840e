//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestResizeBuilder` - builder for resize controllers with recorded callbacks
//! - `CallbackLog` - shared record of every callback a controller fired
//! - `assert_size_near` and friends for float comparisons

use humanpdf::{
    DragController, Position, PointerCapture, PointerSample, ResizeController, Size, SizeBounds,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Tolerance for geometry comparisons in tests.
pub const EPS: f32 = 1.0e-3;

// ============================================================================
// CallbackLog - records callback invocations in order
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Fired {
    DragMove(Position),
    DragEnd(Position),
    ResizeStart(Size),
    Resize(Size, Position),
    ResizeEnd(Size, Position),
}

#[derive(Debug, Clone, Default)]
pub struct CallbackLog(Rc<RefCell<Vec<Fired>>>);

impl CallbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, fired: Fired) {
        self.0.borrow_mut().push(fired);
    }

    pub fn events(&self) -> Vec<Fired> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn last(&self) -> Option<Fired> {
        self.0.borrow().last().cloned()
    }

    /// Wire every drag callback into this log.
    pub fn attach_drag(&self, drag: DragController) -> DragController {
        let moves = self.clone();
        let ends = self.clone();
        drag.on_drag(move |p| moves.push(Fired::DragMove(p)))
            .on_drag_end(move |p| ends.push(Fired::DragEnd(p)))
    }

    /// Wire every resize callback into this log.
    pub fn attach_resize(&self, resize: ResizeController) -> ResizeController {
        let starts = self.clone();
        let moves = self.clone();
        let ends = self.clone();
        resize
            .on_resize_start(move |s| starts.push(Fired::ResizeStart(s)))
            .on_resize(move |s, d| moves.push(Fired::Resize(s, d)))
            .on_resize_end(move |s, d| ends.push(Fired::ResizeEnd(s, d)))
    }
}

// ============================================================================
// TestResizeBuilder
// ============================================================================

/// Builder for resize controllers used across the suite.
///
/// # Example
/// ```ignore
/// let (resize, log, capture) = TestResizeBuilder::new(100.0, 100.0)
///     .with_min(20.0, 20.0)
///     .locked()
///     .build();
/// ```
pub struct TestResizeBuilder {
    position: Position,
    size: Size,
    bounds: SizeBounds,
    locked: bool,
}

impl TestResizeBuilder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Position::ZERO,
            size: Size::new(width, height),
            bounds: SizeBounds::new(Size::new(20.0, 20.0), None),
            locked: false,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn with_min(mut self, width: f32, height: f32) -> Self {
        self.bounds.min = Size::new(width, height);
        self
    }

    pub fn with_max(mut self, width: f32, height: f32) -> Self {
        self.bounds.max = Some(Size::new(width, height));
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn build(self) -> (ResizeController, CallbackLog, PointerCapture) {
        let capture = PointerCapture::new();
        let log = CallbackLog::new();
        let resize = ResizeController::new(capture.clone(), self.position, self.size)
            .with_bounds(self.bounds)
            .with_aspect_ratio_locked(self.locked);
        (log.attach_resize(resize), log, capture)
    }
}

/// Drag controller at `(x, y)` with all callbacks recorded.
pub fn recorded_drag(x: f32, y: f32) -> (DragController, CallbackLog, PointerCapture) {
    let capture = PointerCapture::new();
    let log = CallbackLog::new();
    let drag = DragController::new(capture.clone(), Position::new(x, y));
    (log.attach_drag(drag), log, capture)
}

/// Shorthand for a mouse sample.
pub fn at(x: f32, y: f32) -> PointerSample {
    PointerSample::mouse(x, y)
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_size_near(actual: Size, expected: Size) {
    assert!(
        (actual.width - expected.width).abs() < EPS && (actual.height - expected.height).abs() < EPS,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

pub fn assert_position_near(actual: Position, expected: Position) {
    assert!(
        (actual.x - expected.x).abs() < EPS && (actual.y - expected.y).abs() < EPS,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
