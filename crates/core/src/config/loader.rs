//! Configuration discovery
//!
//! Walks from a starting directory towards the filesystem root collecting
//! `.caserun.json` files, then merges them outermost first so that the file
//! nearest the starting directory has the final say.

use std::fs;
use std::path::{Path, PathBuf};

use super::settings::{CONFIG_FILE_NAME, Config, ConfigFile};
use crate::error::{Error, Result};

/// Loads and merges configuration files
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    boundary: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader that walks all the way to the filesystem root
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader bounded by `PROJECT_ROOT`, falling back to `HOME`
    pub fn from_env() -> Self {
        Self {
            boundary: pick_boundary(
                std::env::var("PROJECT_ROOT").ok(),
                std::env::var("HOME").ok(),
            ),
        }
    }

    /// Stop the upward walk once this directory has been checked
    pub fn with_boundary(mut self, dir: impl Into<PathBuf>) -> Self {
        self.boundary = Some(dir.into());
        self
    }

    /// Load exactly one file, filling unset fields from the defaults
    pub fn load_file(path: &Path) -> Result<Config> {
        Ok(Self::read_file(path)?.resolve())
    }

    /// Collect and merge every config file between `start` and the boundary
    pub fn discover(&self, start: &Path) -> Result<Config> {
        let start = canonical(start);
        let boundary = self.boundary.as_deref().map(canonical);

        let mut check_path = if start.is_file() {
            start.parent().unwrap_or(&start).to_path_buf()
        } else {
            start
        };

        let mut found = Vec::new();
        loop {
            let candidate = check_path.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                tracing::debug!("Found config at: {:?}", candidate);
                found.push(candidate);
            } else {
                tracing::trace!("No config at: {:?}", check_path);
            }

            if boundary.as_deref() == Some(check_path.as_path()) {
                break;
            }

            match check_path.parent() {
                Some(parent) => check_path = parent.to_path_buf(),
                None => break,
            }
        }

        if found.is_empty() {
            tracing::debug!("No config files found, using built-in defaults");
            return Ok(Config::default());
        }

        tracing::debug!("Merging {} config files", found.len());
        let mut merged = ConfigFile::default();
        // Outermost first; nearer files override
        for path in found.iter().rev() {
            merged.merge(Self::read_file(path)?);
        }
        Ok(merged.resolve())
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut file: ConfigFile =
            serde_json::from_str(&content).map_err(|e| Error::ConfigError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if let Some(dir) = path.parent() {
            file.resolve_paths(&canonical(dir));
        }
        Ok(file)
    }
}

/// An empty variable counts as unset, so an empty `PROJECT_ROOT` still
/// falls back to `HOME`.
fn pick_boundary(project_root: Option<String>, home: Option<String>) -> Option<PathBuf> {
    project_root
        .filter(|dir| !dir.is_empty())
        .or_else(|| home.filter(|dir| !dir.is_empty()))
        .map(PathBuf::from)
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
