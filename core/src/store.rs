//! Persistence of one color per workspace.
//!
//! Values are stored as the hex text they were saved with; interpreting them
//! is the caller's job (see [`crate::WorkspaceColors::current`]).

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result, io_error};

/// A key-value store mapping workspace identifiers to hex colors.
pub trait ColorStore {
    /// Returns the stored value for `workspace`, if any.
    ///
    /// # Errors
    /// Implementations backed by I/O may fail.
    fn get(&self, workspace: &str) -> Result<Option<String>>;

    /// Stores `hex` for `workspace`, replacing any previous value.
    ///
    /// # Errors
    /// Implementations backed by I/O may fail.
    fn set(&mut self, workspace: &str, hex: &str) -> Result<()>;

    /// Removes the value for `workspace`, returning whether one existed.
    ///
    /// # Errors
    /// Implementations backed by I/O may fail.
    fn remove(&mut self, workspace: &str) -> Result<bool>;

    /// All stored entries, ordered by workspace.
    ///
    /// # Errors
    /// Implementations backed by I/O may fail.
    fn entries(&self) -> Result<Vec<(String, String)>>;
}

/// In-memory store, for tests and hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorStore for MemoryStore {
    fn get(&self, workspace: &str) -> Result<Option<String>> {
        Ok(self.entries.get(workspace).cloned())
    }

    fn set(&mut self, workspace: &str, hex: &str) -> Result<()> {
        self.entries.insert(workspace.to_string(), hex.to_string());
        Ok(())
    }

    fn remove(&mut self, workspace: &str) -> Result<bool> {
        Ok(self.entries.remove(workspace).is_some())
    }

    fn entries(&self) -> Result<Vec<(String, String)>> {
        Ok(self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    workspaces: BTreeMap<String, String>,
}

/// TOML-file store. The whole file is rewritten on every change.
///
/// ```toml
/// [workspaces]
/// "/home/me/project" = "#3a7bd5"
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    document: Document,
}

impl FileStore {
    /// Opens the store at `path`; a missing file starts empty.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(io_error(&path))?;
            toml::from_str(&contents).map_err(|source| Error::ParseStore {
                path: path.clone(),
                source,
            })?
        } else {
            Document::default()
        };
        debug!(path = %path.display(), entries = document.workspaces.len(), "opened color store");
        Ok(Self { path, document })
    }

    /// Default location: `colors.toml` inside `dir`.
    #[must_use]
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("colors.toml")
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        let contents = toml::to_string_pretty(&self.document)?;
        fs::write(&self.path, contents).map_err(io_error(&self.path))?;
        debug!(path = %self.path.display(), "wrote color store");
        Ok(())
    }
}

impl ColorStore for FileStore {
    fn get(&self, workspace: &str) -> Result<Option<String>> {
        Ok(self.document.workspaces.get(workspace).cloned())
    }

    fn set(&mut self, workspace: &str, hex: &str) -> Result<()> {
        self.document
            .workspaces
            .insert(workspace.to_string(), hex.to_string());
        self.flush()
    }

    fn remove(&mut self, workspace: &str) -> Result<bool> {
        let removed = self.document.workspaces.remove(workspace).is_some();
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    fn entries(&self) -> Result<Vec<(String, String)>> {
        Ok(self
            .document
            .workspaces
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(store: &mut impl ColorStore) {
        assert_eq!(store.get("/a").unwrap(), None);

        store.set("/b", "#00ff00").unwrap();
        store.set("/a", "#ff0000").unwrap();
        store.set("/a", "#0000ff").unwrap();
        assert_eq!(store.get("/a").unwrap().as_deref(), Some("#0000ff"));

        assert_eq!(
            store.entries().unwrap(),
            vec![
                ("/a".to_string(), "#0000ff".to_string()),
                ("/b".to_string(), "#00ff00".to_string()),
            ]
        );

        assert!(store.remove("/b").unwrap());
        assert!(!store.remove("/b").unwrap());
        assert_eq!(store.entries().unwrap().len(), 1);
    }

    #[test]
    fn memory_store_behaves_like_a_map() {
        exercise(&mut MemoryStore::new());
    }

    #[test]
    fn file_store_behaves_like_a_map() {
        let dir = tempfile::tempdir().unwrap();
        exercise(&mut FileStore::open(FileStore::path(dir.path())).unwrap());
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = FileStore::path(&dir.path().join("state"));

        let mut store = FileStore::open(&path).unwrap();
        store.set("/home/me/project", "#3a7bd5").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("/home/me/project").unwrap().as_deref(),
            Some("#3a7bd5")
        );

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("[workspaces]"), "{raw}");
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = FileStore::path(dir.path());
        fs::write(&path, "workspaces = 3").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(Error::ParseStore { .. })
        ));
    }
}
