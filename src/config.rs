use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::RUN_LENGTH;
use crate::ui::RingLayout;

// Built-in defaults.
pub const DEFAULT_SLOTS: usize = 20;
pub const DEFAULT_SPEED: f64 = 0.15; // slots per frame
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_FRAME_MS: u64 = 16; // ~60 fps
pub const DEFAULT_RADIUS: u16 = 8; // terminal rows
pub const MAX_SLOTS: usize = 64;
pub const LOG_PATH: &str = "/tmp/orbit-four.log";

/// Tunables for one game session, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub slots: usize,
    pub speed: f64,
    pub debounce_ms: u64,
    pub frame_ms: u64,
    pub radius: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            slots: DEFAULT_SLOTS,
            speed: DEFAULT_SPEED,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            frame_ms: DEFAULT_FRAME_MS,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Like [`Settings::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots < RUN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "slots must be >= {RUN_LENGTH}"
            )));
        }
        if self.slots > MAX_SLOTS {
            return Err(ConfigError::Validation(format!(
                "slots must be <= {MAX_SLOTS}"
            )));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 || self.speed >= self.slots as f64 {
            return Err(ConfigError::Validation(
                "speed must be in (0, slots)".into(),
            ));
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::Validation("frame_ms must be > 0".into()));
        }
        if !(3..=40).contains(&self.radius) {
            return Err(ConfigError::Validation(
                "radius must be in [3, 40]".into(),
            ));
        }
        if !RingLayout::new(self.radius).fits(self.slots) {
            return Err(ConfigError::Validation(format!(
                "radius {} is too small to draw {} slots",
                self.radius, self.slots
            )));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
