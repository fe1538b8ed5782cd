//! Color customizations handed to the editor host.
//!
//! The host merges these keys into its workbench color overrides; tintspace
//! only decides which keys to emit and with which values.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Appearance, Assignment};

/// Status bar background.
pub const STATUS_BAR_BACKGROUND: &str = "statusBar.background";
/// Status bar text.
pub const STATUS_BAR_FOREGROUND: &str = "statusBar.foreground";
/// Title bar background of the focused window.
pub const TITLE_BAR_BACKGROUND: &str = "titleBar.activeBackground";
/// Title bar text of the focused window.
pub const TITLE_BAR_FOREGROUND: &str = "titleBar.activeForeground";
/// Activity bar background.
pub const ACTIVITY_BAR_BACKGROUND: &str = "activityBar.background";
/// Activity bar icons.
pub const ACTIVITY_BAR_FOREGROUND: &str = "activityBar.foreground";

/// Every key tintspace may write, so a host can clear them all.
pub const ALL_KEYS: [&str; 6] = [
    STATUS_BAR_BACKGROUND,
    STATUS_BAR_FOREGROUND,
    TITLE_BAR_BACKGROUND,
    TITLE_BAR_FOREGROUND,
    ACTIVITY_BAR_BACKGROUND,
    ACTIVITY_BAR_FOREGROUND,
];

/// Flat `key -> #rrggbb` map, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorCustomizations(BTreeMap<&'static str, String>);

impl ColorCustomizations {
    /// Keys for every surface enabled in `appearance`.
    #[must_use]
    pub fn from_assignment(assignment: &Assignment, appearance: &Appearance) -> Self {
        let background = assignment.background_hex();
        let foreground = assignment.foreground_hex();

        let surfaces = [
            (
                appearance.status_bar,
                STATUS_BAR_BACKGROUND,
                STATUS_BAR_FOREGROUND,
            ),
            (
                appearance.title_bar,
                TITLE_BAR_BACKGROUND,
                TITLE_BAR_FOREGROUND,
            ),
            (
                appearance.activity_bar,
                ACTIVITY_BAR_BACKGROUND,
                ACTIVITY_BAR_FOREGROUND,
            ),
        ];

        let mut map = BTreeMap::new();
        for (enabled, background_key, foreground_key) in surfaces {
            if enabled {
                map.insert(background_key, background.clone());
                map.insert(foreground_key, foreground.clone());
            }
        }
        Self(map)
    }

    /// Value for `key`, if that surface is enabled.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no surface is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
