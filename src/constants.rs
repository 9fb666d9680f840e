//! Engine-wide constants.
//!
//! Centralizes the default bounds and tolerances used by the gesture
//! controllers so hosts and tests agree on the same numbers.

// ============================================================================
// Size Bounds
// ============================================================================

/// Default minimum width of a manipulated overlay, in document units
pub const DEFAULT_MIN_WIDTH: f32 = 20.0;

/// Default minimum height of a manipulated overlay, in document units
pub const DEFAULT_MIN_HEIGHT: f32 = 20.0;

/// Fallback size for overlays created without an explicit size
pub const DEFAULT_OVERLAY_SIZE: (f32, f32) = (200.0, 100.0);

// ============================================================================
// Input Handling
// ============================================================================

/// Side length of the square grab area centered on each resize handle
pub const HANDLE_HIT_SIZE: f32 = 10.0;

/// Pointer coordinates beyond this magnitude are treated as unmeasurable
/// (e.g. a detached element reporting a garbage bounding box)
pub const MAX_POINTER_COORDINATE: f32 = 1.0e7;

/// Tolerance used when comparing floating point geometry
pub const GEOMETRY_EPSILON: f32 = 1.0e-4;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "humanpdf";

/// File name of the persisted engine settings
pub const SETTINGS_FILE_NAME: &str = "gestures.json";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "humanpdf=info";
