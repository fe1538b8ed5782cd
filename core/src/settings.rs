//! User settings, stored as TOML.
//!
//! ```toml
//! [generation]
//! distance_threshold = 0.5
//! max_attempts = 50
//!
//! [appearance]
//! status_bar = true
//! title_bar = false
//! activity_bar = false
//!
//! [lights]
//! enabled = false
//! brightness = 254
//! ```
//!
//! Every field is optional; a missing file means all defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tintspace_color::GenerationPolicy;
use tracing::debug;

use crate::{Error, Result, io_error};

/// Highest brightness a light bridge accepts.
pub const MAX_BRIGHTNESS: u8 = 254;

/// Contents of `tintspace.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `[generation]`
    pub generation: GenerationSettings,
    /// `[appearance]`
    pub appearance: Appearance,
    /// `[lights]`
    pub lights: LightSettings,
}

/// Search parameters for random colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Distance from the previous color that ends the search early.
    pub distance_threshold: f32,
    /// Candidates drawn before settling for the farthest one.
    pub max_attempts: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        let policy = GenerationPolicy::default();
        Self {
            distance_threshold: policy.distance_threshold,
            max_attempts: policy.max_attempts,
        }
    }
}

/// Which editor surfaces get painted with the workspace color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    /// Status bar background and text.
    pub status_bar: bool,
    /// Active title bar background and text.
    pub title_bar: bool,
    /// Activity bar background and icons.
    pub activity_bar: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            status_bar: true,
            title_bar: false,
            activity_bar: false,
        }
    }
}

/// Smart-light output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    /// Whether assignments also produce a [`crate::LightState`].
    pub enabled: bool,
    /// Brightness sent with each state, 1 to [`MAX_BRIGHTNESS`].
    pub brightness: u8,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            brightness: MAX_BRIGHTNESS,
        }
    }
}

impl Settings {
    /// Reads and validates a settings file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(io_error(path))?;
        let settings: Self = toml::from_str(&contents).map_err(|source| Error::ParseSettings {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Like [`Settings::load`], but a missing file yields the defaults.
    ///
    /// # Errors
    /// Same as [`Settings::load`] for files that exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Writes the settings as pretty TOML, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_error(path))
    }

    /// Default location: `tintspace.toml` inside `dir`.
    #[must_use]
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("tintspace.toml")
    }

    /// The generation policy described by these settings.
    #[must_use]
    pub const fn policy(&self) -> GenerationPolicy {
        GenerationPolicy::new(
            self.generation.distance_threshold,
            self.generation.max_attempts,
        )
    }

    /// Checks value ranges that TOML types alone cannot express.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSettings`] describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.generation.distance_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(Error::InvalidSettings(format!(
                "generation.distance_threshold must be a non-negative number, got {threshold}"
            )));
        }
        if self.generation.max_attempts == 0 {
            return Err(Error::InvalidSettings(
                "generation.max_attempts must be at least 1".to_string(),
            ));
        }
        let brightness = self.lights.brightness;
        if !(1..=MAX_BRIGHTNESS).contains(&brightness) {
            return Err(Error::InvalidSettings(format!(
                "lights.brightness must be between 1 and {MAX_BRIGHTNESS}, got {brightness}"
            )));
        }
        Ok(())
    }
}
