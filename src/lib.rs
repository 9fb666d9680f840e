//! Humanpdf direct-manipulation geometry engine.
//!
//! Every interactive overlay on a rendered page (text boxes, images, shapes,
//! signatures, form fields, annotations) delegates its position and size to
//! this crate. The engine owns geometry only; presentation and persistence
//! stay with the host.
//!
//! ## Modules
//!
//! - `geometry` / `handle` - positions, sizes, bounds and the eight resize handles
//! - `drag` - `DragController`, anchor translation under a pointer gesture
//! - `resize` - `ResizeController` and the pure `resize_geometry` reducer
//! - `manipulator` - one overlay's controllers wired together
//! - `capture` - scoped global pointer subscriptions
//! - `hit_test` - body vs handle routing for pointer-down
//! - `settings` / `settings_watcher` - persisted defaults with hot reload
//! - `replay` - recorded gesture traces, used by the `humanpdf-replay` binary

pub mod capture;
pub mod config;
pub mod constants;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod logging;
pub mod manipulator;
pub mod perf;
pub mod pointer;
pub mod replay;
pub mod resize;
pub mod settings;
pub mod settings_watcher;

pub use capture::{CaptureGuard, PointerCapture};
pub use config::GestureConfig;
pub use drag::{DragController, DragState};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use geometry::{Position, Rect, Size, SizeBounds};
pub use handle::Handle;
pub use hit_test::{Hit, HitTarget, HitTester};
pub use manipulator::{Manipulation, Manipulator};
pub use pointer::{PointerId, PointerKind, PointerSample};
pub use resize::{ResizeController, ResizeState, ResizeUpdate, resize_geometry};
pub use settings::EngineSettings;
