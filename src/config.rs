use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{PatchError, Result};
use crate::fs::read_file_to_string;

/// Environment variable overriding the project path
pub const PROJECT_ENV_VAR: &str = "PBXPATCH_PROJECT";

/// Project file used when nothing else names one
pub const DEFAULT_PROJECT_PATH: &str = "MessageAI.xcodeproj/project.pbxproj";

/// Options read from an optional TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatcherConfig {
    /// Path to project.pbxproj
    pub project: Option<PathBuf>,
    /// Fail when any anchor is missing
    pub strict: bool,
    /// Print a diff instead of writing
    pub dry_run: bool,
}

impl PatcherConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());

        let content = read_file_to_string(path).map_err(|e| {
            PatchError::config_error(format!("cannot read {}: {}", path.display(), e), Some(path))
        })?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|e| PatchError::config_error(e.to_string(), Some(path)))?;

        // Relative project paths are taken from the config file's directory
        if let Some(parent) = path.parent() {
            config.project = config
                .project
                .take()
                .map(|p| if p.is_relative() { parent.join(p) } else { p });
        }

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PatchError::config_error(e.to_string(), None::<PathBuf>))
    }

    /// Pick the project path: CLI, then environment, then config file, then default
    pub fn resolve_project(&self, cli: Option<&Path>) -> PathBuf {
        self.resolve_project_with(cli, |key| std::env::var_os(key))
    }

    pub(crate) fn resolve_project_with<F>(&self, cli: Option<&Path>, env: F) -> PathBuf
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        if let Some(path) = cli {
            return path.to_path_buf();
        }

        if let Some(value) = env(PROJECT_ENV_VAR).filter(|v| !v.is_empty()) {
            return PathBuf::from(value);
        }

        self.project
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_PATH))
    }
}
