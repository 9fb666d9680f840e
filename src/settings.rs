//! Persisted engine settings.
//!
//! Hosts keep the per-user gesture defaults in
//! `<config_dir>/humanpdf/gestures.json`. Missing or corrupt files fall back to
//! defaults so a bad edit never blocks the editor from starting.

use crate::config::GestureConfig;
use crate::constants::{
    DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, HANDLE_HIT_SIZE, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::error::{SettingsError, SettingsResult};
use crate::geometry::Size;
use crate::hit_test::HitTester;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Minimum overlay size applied when a host does not specify one
    pub default_min_size: Size,
    /// Side length of each handle's grab square, in document units
    pub handle_hit_size: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_min_size: Size::new(DEFAULT_MIN_WIDTH, DEFAULT_MIN_HEIGHT),
            handle_hit_size: HANDLE_HIT_SIZE,
        }
    }
}

/// Default location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl EngineSettings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        debug!(path = %path.display(), "Loaded engine settings");
        Ok(settings)
    }

    /// Save to the default location.
    pub fn save(&self) -> SettingsResult<()> {
        let path = default_settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Write atomically: serialize into a temp file beside the target, then
    /// rename over it.
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)?;
        debug!(path = %path.display(), "Saved engine settings");
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.handle_hit_size.is_finite() && self.handle_hit_size > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "handle_hit_size must be > 0, got {}",
                self.handle_hit_size
            )));
        }
        self.gesture_config().validate()?;
        Ok(())
    }

    /// A default per-overlay configuration seeded from these settings.
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig::default().with_min_size(self.default_min_size)
    }

    /// A hit tester using the configured handle grab size.
    pub fn hit_tester(&self) -> HitTester {
        HitTester::with_handle_hit_size(self.handle_hit_size)
    }
}
