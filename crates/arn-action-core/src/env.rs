//! Subprocess environment as an explicit value
//!
//! An [`Environment`] is a base set of variables (normally the inherited
//! process environment) plus an overlay that wins on conflict. The process's
//! own environment is never mutated.

use crate::error::{ActionError, Result};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

const PATH_VAR: &str = "PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    base: BTreeMap<OsString, OsString>,
    overlay: BTreeMap<OsString, OsString>,
}

impl Environment {
    /// Environment inherited from the current process
    pub fn inherited() -> Self {
        Self::from_vars(std::env::vars_os())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            base: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            overlay: BTreeMap::new(),
        }
    }

    /// Adds or replaces an overlay variable
    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> &mut Self {
        self.overlay.insert(key.into(), value.into());
        self
    }

    /// Looks a variable up, overlay first
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        self.overlay
            .get(key)
            .or_else(|| self.base.get(key))
            .map(OsString::as_os_str)
    }

    /// Current search path entries
    pub fn search_path(&self) -> Vec<PathBuf> {
        self.get(PATH_VAR)
            .map(|value| std::env::split_paths(value).collect())
            .unwrap_or_default()
    }

    /// Puts `dir` in front of the search path in the overlay
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` contains the platform path separator
    pub fn prepend_path(&mut self, dir: &Path) -> Result<&mut Self> {
        let mut entries = vec![dir.to_path_buf()];
        entries.extend(self.search_path().into_iter().filter(|entry| entry != dir));

        let joined = std::env::join_paths(entries).map_err(|e| {
            ActionError::Generic(format!(
                "cannot add {} to {}: {}",
                dir.display(),
                PATH_VAR,
                e
            ))
        })?;

        self.set(PATH_VAR, joined);
        Ok(self)
    }

    /// Merged view of base and overlay, in key order
    pub fn vars(&self) -> BTreeMap<&OsStr, &OsStr> {
        let mut merged: BTreeMap<&OsStr, &OsStr> = self
            .base
            .iter()
            .map(|(k, v)| (k.as_os_str(), v.as_os_str()))
            .collect();
        for (k, v) in &self.overlay {
            merged.insert(k.as_os_str(), v.as_os_str());
        }
        merged
    }
}
