//! Locations of the settings file and color store.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use tintspace_core::{FileStore, Settings, WorkspaceColors};
use tracing::debug;

const STATE_DIR: &str = ".tintspace";

#[derive(Debug, Clone)]
pub struct Paths {
    pub settings: PathBuf,
    pub store: PathBuf,
}

impl Paths {
    /// Explicit paths win; otherwise `~/.tintspace/`, or the current
    /// directory when there is no home directory.
    pub fn resolve(settings: Option<PathBuf>, store: Option<PathBuf>) -> Self {
        let dir = home::home_dir().map_or_else(|| PathBuf::from("."), |home| home.join(STATE_DIR));
        let paths = Self::with_dir(&dir, settings, store);
        debug!(settings = %paths.settings.display(), store = %paths.store.display(), "resolved paths");
        paths
    }

    fn with_dir(dir: &Path, settings: Option<PathBuf>, store: Option<PathBuf>) -> Self {
        Self {
            settings: settings.unwrap_or_else(|| Settings::path(dir)),
            store: store.unwrap_or_else(|| FileStore::path(dir)),
        }
    }

    pub fn load_settings(&self) -> Result<Settings> {
        Settings::load_or_default(&self.settings)
            .wrap_err_with(|| format!("failed to load settings from {}", self.settings.display()))
    }

    pub fn open_store(&self) -> Result<FileStore> {
        FileStore::open(&self.store)
            .wrap_err_with(|| format!("failed to open color store {}", self.store.display()))
    }

    /// Settings plus a color service over the file store.
    pub fn open(&self) -> Result<(Settings, WorkspaceColors<FileStore>)> {
        let settings = self.load_settings()?;
        let colors = WorkspaceColors::new(self.open_store()?, settings.policy());
        Ok((settings, colors))
    }
}
