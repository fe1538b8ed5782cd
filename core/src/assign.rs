//! Assigning colors to workspaces.

use rand::{Rng, rngs::ThreadRng};
use serde::Serialize;
use tintspace_color::{GenerationPolicy, Rgb, generate_random_color_with, is_valid_hex_color};
use tracing::{debug, info, warn};

use crate::{ColorStore, Error, Result};

/// A workspace color paired with the text color that reads on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// Workspace identifier, usually its folder path.
    pub workspace: String,
    /// The workspace color.
    pub background: Rgb,
    /// Black or white, whichever reads better on `background`.
    pub foreground: Rgb,
}

impl Assignment {
    /// Pairs `background` with its contrasting text color.
    #[must_use]
    pub fn new(workspace: impl Into<String>, background: Rgb) -> Self {
        Self {
            workspace: workspace.into(),
            background,
            foreground: background.contrasting_text_color(),
        }
    }

    /// Background as `#rrggbb`.
    #[must_use]
    pub fn background_hex(&self) -> String {
        self.background.to_hex()
    }

    /// Foreground as `#rrggbb`.
    #[must_use]
    pub fn foreground_hex(&self) -> String {
        self.foreground.to_hex()
    }
}

/// Generates, validates and persists workspace colors.
#[derive(Debug)]
pub struct WorkspaceColors<S, R = ThreadRng> {
    store: S,
    policy: GenerationPolicy,
    rng: R,
}

impl<S: ColorStore> WorkspaceColors<S> {
    /// Uses the thread-local RNG.
    pub fn new(store: S, policy: GenerationPolicy) -> Self {
        Self::with_rng(store, policy, rand::thread_rng())
    }
}

impl<S: ColorStore, R: Rng> WorkspaceColors<S, R> {
    /// Uses the given RNG, e.g. a seeded one for reproducible colors.
    pub const fn with_rng(store: S, policy: GenerationPolicy, rng: R) -> Self {
        Self { store, policy, rng }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Gives the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The stored color for `workspace`.
    ///
    /// A stored value that does not parse is logged and treated as absent.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn current(&self, workspace: &str) -> Result<Option<Rgb>> {
        let Some(stored) = self.store.get(workspace)? else {
            return Ok(None);
        };
        match Rgb::from_hex(&stored) {
            Ok(rgb) => Ok(Some(rgb)),
            Err(err) => {
                warn!(workspace, stored = %stored, %err, "ignoring unreadable stored color");
                Ok(None)
            }
        }
    }

    /// The stored color for `workspace` with its text color.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn assignment(&self, workspace: &str) -> Result<Option<Assignment>> {
        Ok(self
            .current(workspace)?
            .map(|rgb| Assignment::new(workspace, rgb)))
    }

    /// Picks a new random color for `workspace` and stores it.
    ///
    /// The new color keeps away from the workspace's stored color, or from
    /// `theme_color` (the color the editor currently shows) when nothing is
    /// stored.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn assign_random(
        &mut self,
        workspace: &str,
        theme_color: Option<Rgb>,
    ) -> Result<Assignment> {
        let existing = self.current(workspace)?.or(theme_color);
        let color = generate_random_color_with(&mut self.rng, existing, &self.policy);
        self.store.set(workspace, &color.to_hex())?;
        info!(workspace, %color, "assigned random color");
        Ok(Assignment::new(workspace, color))
    }

    /// Stores a user-typed color for `workspace`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidColor`] (leaving the store untouched) unless
    /// `input` is `#` followed by 3, 6 or 8 hex digits; propagates store
    /// failures.
    pub fn assign_hex(&mut self, workspace: &str, input: &str) -> Result<Assignment> {
        let input = input.trim();
        if !is_valid_hex_color(input) {
            debug!(workspace, input, "rejected color input");
            return Err(Error::InvalidColor(input.to_string()));
        }
        let color = Rgb::from_hex(input).map_err(|_| Error::InvalidColor(input.to_string()))?;
        self.store.set(workspace, &color.to_hex())?;
        info!(workspace, %color, "assigned color");
        Ok(Assignment::new(workspace, color))
    }

    /// Forgets the color of `workspace`, returning whether one was stored.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn clear(&mut self, workspace: &str) -> Result<bool> {
        let removed = self.store.remove(workspace)?;
        if removed {
            info!(workspace, "cleared color");
        }
        Ok(removed)
    }

    /// Every workspace with a readable stored color.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn assignments(&self) -> Result<Vec<Assignment>> {
        Ok(self
            .store
            .entries()?
            .into_iter()
            .filter_map(|(workspace, hex)| match Rgb::from_hex(&hex) {
                Ok(rgb) => Some(Assignment::new(workspace, rgb)),
                Err(err) => {
                    warn!(%workspace, %hex, %err, "ignoring unreadable stored color");
                    None
                }
            })
            .collect())
    }
}
