//! One overlay's drag and resize controllers, kept in agreement.
//!
//! Overlays (text boxes, images, signatures, form fields) own one
//! `Manipulator` each. It routes pointer input to whichever controller the
//! pointer-down selected and mirrors geometry between them: a resize from a
//! left/top handle moves the anchor, and the next drag must start from there.

use crate::capture::PointerCapture;
use crate::config::GestureConfig;
use crate::drag::DragController;
use crate::error::ConfigResult;
use crate::geometry::{Position, Rect, Size};
use crate::hit_test::HitTarget;
use crate::pointer::PointerSample;
use crate::resize::{ResizeController, ResizeUpdate};
use serde::Serialize;

/// Output of one routed pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Manipulation {
    Drag { position: Position },
    Resize { update: ResizeUpdate, position: Position },
}

#[derive(Debug)]
pub struct Manipulator {
    drag: DragController,
    resize: Option<ResizeController>,
}

impl Manipulator {
    /// Validate `config` and wire the controllers. Non-resizable overlays
    /// (e.g. stamps with a fixed size) pass `resizable = false`.
    pub fn new(config: &GestureConfig, capture: PointerCapture, resizable: bool) -> ConfigResult<Self> {
        config.validate()?;
        let drag = DragController::from_config(config, capture.clone());
        let resize = resizable.then(|| ResizeController::from_config(config, capture));
        Ok(Self { drag, resize })
    }

    /// Wire pre-built controllers, e.g. ones carrying host callbacks.
    pub fn from_controllers(drag: DragController, resize: Option<ResizeController>) -> Self {
        let mut manipulator = Self { drag, resize };
        let position = manipulator.drag.position();
        if let Some(resize) = manipulator.resize.as_mut() {
            resize.set_position(position);
        }
        manipulator
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn resize(&self) -> Option<&ResizeController> {
        self.resize.as_ref()
    }

    pub fn is_resizable(&self) -> bool {
        self.resize.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.drag.is_active() || self.resize.as_ref().is_some_and(ResizeController::is_active)
    }

    pub fn position(&self) -> Position {
        self.drag.position()
    }

    /// Current size; non-resizable overlays report `None`.
    pub fn size(&self) -> Option<Size> {
        self.resize.as_ref().map(ResizeController::size)
    }

    pub fn geometry(&self) -> Option<Rect> {
        self.size().map(|size| Rect::new(self.position(), size))
    }

    /// Disabling aborts a live gesture; both controllers fall back to the
    /// geometry the gesture started from.
    pub fn set_disabled(&mut self, disabled: bool) {
        let dragging = self.drag.is_active();
        self.drag.set_disabled(disabled);

        let Some(resize) = self.resize.as_mut() else {
            return;
        };
        let resizing = resize.is_active();
        resize.set_disabled(disabled);

        if disabled && dragging {
            resize.set_position(self.drag.position());
        } else if disabled && resizing {
            self.drag.set_position(resize.position());
        }
    }

    /// Host resynchronization after an external model change. Non-finite
    /// values are ignored.
    pub fn set_geometry(&mut self, position: Position, size: Size) {
        self.drag.set_position(position);
        if let Some(resize) = self.resize.as_mut() {
            resize.set_position(position);
            resize.set_size(size);
        }
    }

    /// Start a gesture. Ignored while another gesture on this overlay is live.
    pub fn pointer_down(&mut self, sample: PointerSample, target: HitTarget) -> bool {
        if self.is_active() {
            return false;
        }
        match target {
            HitTarget::Body => self.drag.begin(sample),
            HitTarget::Handle(handle) => match self.resize.as_mut() {
                Some(resize) => resize.begin(handle, sample),
                None => false,
            },
        }
    }

    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<Manipulation> {
        if self.drag.is_active() {
            let position = self.drag.update(sample)?;
            return Some(self.after_drag(position));
        }
        let update = self.resize.as_mut()?.update(sample)?;
        Some(self.after_resize(update))
    }

    pub fn pointer_up(&mut self, sample: PointerSample) -> Option<Manipulation> {
        if self.drag.is_active() {
            let position = self.drag.release(sample)?;
            return Some(self.after_drag(position));
        }
        let update = self.resize.as_mut()?.release(sample)?;
        Some(self.after_resize(update))
    }

    /// Lost capture or touch cancel: commit the last valid geometry.
    pub fn pointer_cancel(&mut self) -> Option<Manipulation> {
        if let Some(position) = self.drag.cancel() {
            return Some(self.after_drag(position));
        }
        let update = self.resize.as_mut()?.cancel()?;
        Some(self.after_resize(update))
    }

    /// The overlay is going away; nothing further is delivered.
    pub fn teardown(&mut self) {
        self.drag.teardown();
        if let Some(resize) = self.resize.as_mut() {
            resize.teardown();
        }
    }

    fn after_drag(&mut self, position: Position) -> Manipulation {
        if let Some(resize) = self.resize.as_mut() {
            resize.set_position(position);
        }
        Manipulation::Drag { position }
    }

    fn after_resize(&mut self, update: ResizeUpdate) -> Manipulation {
        let position = self
            .resize
            .as_ref()
            .map_or(self.drag.position(), ResizeController::position);
        self.drag.set_position(position);
        Manipulation::Resize { update, position }
    }
}
