//! Host-supplied configuration for one manipulated overlay.
//!
//! These are the only options the engine recognizes. Hosts usually build one
//! from [`EngineSettings::gesture_config`](crate::settings::EngineSettings::gesture_config)
//! and override the initial geometry per overlay.

use crate::constants::DEFAULT_OVERLAY_SIZE;
use crate::error::{ConfigError, ConfigResult};
use crate::geometry::{Position, Size, SizeBounds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub initial_position: Position,
    pub initial_size: Size,
    pub min_size: Size,
    /// `None` leaves the size unbounded above
    pub max_size: Option<Size>,
    pub maintain_aspect_ratio: bool,
    pub disabled: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        let bounds = SizeBounds::default();
        Self {
            initial_position: Position::ZERO,
            initial_size: Size::from(DEFAULT_OVERLAY_SIZE),
            min_size: bounds.min,
            max_size: bounds.max,
            maintain_aspect_ratio: false,
            disabled: false,
        }
    }
}

impl GestureConfig {
    pub fn new(initial_position: Position, initial_size: Size) -> Self {
        Self {
            initial_position,
            initial_size,
            ..Self::default()
        }
    }

    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_max_size(mut self, max_size: Size) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn with_aspect_ratio_locked(mut self, locked: bool) -> Self {
        self.maintain_aspect_ratio = locked;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn bounds(&self) -> SizeBounds {
        SizeBounds::new(self.min_size, self.max_size)
    }

    /// Check the configuration before wiring it into controllers.
    pub fn validate(&self) -> ConfigResult<()> {
        let min = self.min_size;
        let min_ok = |v: f32| v.is_finite() && v >= 0.0;
        if !min_ok(min.width) || !min_ok(min.height) {
            return Err(ConfigError::InvalidMinSize {
                width: min.width,
                height: min.height,
            });
        }

        if let Some(max) = self.max_size {
            // NaN fails both comparisons, so it lands here too
            if !(max.width >= min.width && max.height >= min.height) {
                return Err(ConfigError::MaxBelowMin {
                    min_width: min.width,
                    min_height: min.height,
                    max_width: max.width,
                    max_height: max.height,
                });
            }
        }

        let size = self.initial_size;
        if !size.is_finite() || size.width <= 0.0 || size.height <= 0.0 {
            return Err(ConfigError::InvalidInitialSize {
                width: size.width,
                height: size.height,
            });
        }

        if !self.initial_position.is_finite() {
            return Err(ConfigError::InvalidInitialPosition {
                x: self.initial_position.x,
                y: self.initial_position.y,
            });
        }

        Ok(())
    }
}
