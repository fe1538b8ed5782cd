//! Workspace-facing side of tintspace.
//!
//! The color engine in [`tintspace_color`] knows nothing about editors. This
//! crate supplies what an editor host adapter needs around it:
//!
//! - [`settings`]: the TOML settings file and its defaults
//! - [`store`]: the [`ColorStore`] trait persisting one color per workspace
//! - [`assign`]: [`WorkspaceColors`], which generates, validates and stores colors
//! - [`theme`]: the color customization keys handed to the editor
//! - [`light`]: the state payload for a smart-light bridge
//!
//! Nothing here performs network I/O or talks to an editor API; the adapter
//! applies the returned values.

pub mod assign;
pub mod light;
pub mod settings;
pub mod store;
pub mod theme;

pub use assign::{Assignment, WorkspaceColors};
pub use light::LightState;
pub use settings::{Appearance, GenerationSettings, LightSettings, Settings};
pub use store::{ColorStore, FileStore, MemoryStore};
pub use theme::ColorCustomizations;

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors surfaced by the workspace layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The settings file is not valid TOML for [`Settings`].
    #[error("failed to parse settings {path}: {source}")]
    ParseSettings {
        /// Settings file.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: toml::de::Error,
    },
    /// The color store file is not a valid `[workspaces]` table.
    #[error("failed to parse color store {path}: {source}")]
    ParseStore {
        /// Store file.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: toml::de::Error,
    },
    /// Settings or store could not be written as TOML.
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// User input is not `#` followed by 3, 6 or 8 hex digits.
    #[error("invalid color format: {0:?}")]
    InvalidColor(String),
    /// A settings value is out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result alias using [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

pub(crate) fn io_error(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Error {
    let path = path.into();
    move |source| Error::Io { path, source }
}
