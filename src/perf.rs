//! Timing instrumentation for the gesture hot paths.
//!
//! Pointer moves arrive at display rate (60+ per second, more on high
//! refresh touch panels), so `update` must stay cheap. Build with
//! `--features profiling` to time every instrumented scope; without the
//! feature the macro expands to nothing.
//!
//! ```ignore
//! fn update(&mut self, sample: PointerSample) {
//!     profile_scope!("resize_update");
//!     // ...
//! }
//! ```

use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Budget for a single gesture update before a warning is logged
pub const UPDATE_BUDGET_MS: f64 = 1.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::UPDATE_BUDGET_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// RAII timer that warns when the scope outlives its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Milliseconds since the timer started.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        if ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.3}", ms),
                threshold_ms = format!("{:.3}", self.threshold_ms),
                "Slow gesture operation"
            );
        }
        #[cfg(feature = "profiling")]
        trace!(operation = self.name, elapsed_ms = ms, "Scope timing");
    }
}
