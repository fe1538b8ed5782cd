//! Smart-light state payloads.
//!
//! Building the request body is pure; sending it to a bridge is left to the
//! host.

use serde::Serialize;
use tintspace_color::{Chromaticity, Rgb};

use crate::LightSettings;

/// Body of a light state update: `{"on": true, "xy": [x, y], "bri": 254}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightState {
    /// Always `true`; a color update also switches the light on.
    pub on: bool,
    /// CIE 1931 chromaticity.
    pub xy: [f32; 2],
    /// Brightness, 1 to 254.
    pub bri: u8,
}

impl LightState {
    /// Turns the light on at `rgb`'s chromaticity and the given brightness.
    #[must_use]
    pub fn new(rgb: Rgb, brightness: u8) -> Self {
        Self {
            on: true,
            xy: Chromaticity::from_rgb(rgb).to_array(),
            bri: brightness,
        }
    }

    /// State for `rgb` under `settings`, or `None` when lights are disabled.
    #[must_use]
    pub fn for_settings(rgb: Rgb, settings: &LightSettings) -> Option<Self> {
        settings
            .enabled
            .then(|| Self::new(rgb, settings.brightness))
    }
}
