//! User overrides, partitioned by mode.
//!
//! [`OverrideStore`] is the only mutable state in the engine. It is a plain
//! map from `(token name, mode)` to a value string with two mutators:
//! [`set_token`](OverrideStore::set_token) and
//! [`reset_all`](OverrideStore::reset_all). Values are not validated; any CSS
//! snippet, including `var(...)` references, can be stored.
//!
//! Readers take an [`Overrides`] snapshot. Snapshots serialize to JSON or
//! YAML so an editing session can be saved and restored:
//!
//! ```yaml
//! light:
//!   --wex-primary: var(--wex-palette-purple-700)
//! dark:
//!   --wex-primary: var(--wex-palette-purple-300)
//! ```
//!
//! For hosts that edit from several threads, [`SharedOverrideStore`] guards
//! a store with a single mutex so a write and a snapshot never interleave.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};
use crate::mode::ColorMode;

/// Token name → override value for one mode.
pub type ModeOverrides = BTreeMap<String, String>;

/// A snapshot of every override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overrides {
    /// Light-mode overrides.
    #[serde(default)]
    pub light: ModeOverrides,
    /// Dark-mode overrides.
    #[serde(default)]
    pub dark: ModeOverrides,
}

impl Overrides {
    /// Empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides for one mode.
    pub fn for_mode(&self, mode: ColorMode) -> &ModeOverrides {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    fn for_mode_mut(&mut self, mode: ColorMode) -> &mut ModeOverrides {
        match mode {
            ColorMode::Light => &mut self.light,
            ColorMode::Dark => &mut self.dark,
        }
    }

    /// One override value.
    pub fn get(&self, name: &str, mode: ColorMode) -> Option<&str> {
        self.for_mode(mode).get(name).map(String::as_str)
    }

    /// True if neither mode has an override.
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }

    /// Total number of entries across both modes.
    pub fn len(&self) -> usize {
        self.light.len() + self.dark.len()
    }

    /// Parses a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a YAML snapshot.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a snapshot; `.json` files are read as JSON, anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let parsed = if is_json_path(path) {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };
        parsed.map_err(|e| e.with_path(path))
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Writes the snapshot, choosing the format from the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json_path(path) {
            self.to_json()?
        } else {
            self.to_yaml()?
        };
        std::fs::write(path, content).map_err(|e| TokenError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// The mutable override map owned by an editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideStore {
    overrides: Overrides,
}

impl OverrideStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded from a snapshot (e.g. a restored session).
    pub fn from_overrides(overrides: Overrides) -> Self {
        Self { overrides }
    }

    /// Inserts or replaces the override for `(name, mode)`.
    pub fn set_token(&mut self, name: impl Into<String>, value: impl Into<String>, mode: ColorMode) {
        let name = name.into();
        let value = value.into();
        tracing::trace!(token = %name, %mode, value = %value, "set token override");
        self.overrides.for_mode_mut(mode).insert(name, value);
    }

    /// Copy of every override.
    pub fn get_all_overrides(&self) -> Overrides {
        self.overrides.clone()
    }

    /// Borrowed view of every override.
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Clears both modes.
    pub fn reset_all(&mut self) {
        tracing::debug!(cleared = self.overrides.len(), "reset all token overrides");
        self.overrides = Overrides::default();
    }

    /// True if either mode has an override.
    pub fn has_overrides(&self) -> bool {
        !self.overrides.is_empty()
    }
}

/// An [`OverrideStore`] behind one mutex, cheap to clone across threads.
#[derive(Debug, Clone, Default)]
pub struct SharedOverrideStore {
    inner: Arc<Mutex<OverrideStore>>,
}

impl SharedOverrideStore {
    /// Empty shared store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, OverrideStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`OverrideStore::set_token`].
    pub fn set_token(&self, name: impl Into<String>, value: impl Into<String>, mode: ColorMode) {
        self.lock().set_token(name, value, mode);
    }

    /// See [`OverrideStore::reset_all`].
    pub fn reset_all(&self) {
        self.lock().reset_all();
    }

    /// Consistent copy of every override.
    pub fn snapshot(&self) -> Overrides {
        self.lock().get_all_overrides()
    }

    /// See [`OverrideStore::has_overrides`].
    pub fn has_overrides(&self) -> bool {
        self.lock().has_overrides()
    }

    /// Runs `f` against the overrides while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Overrides) -> R) -> R {
        f(self.lock().overrides())
    }
}
