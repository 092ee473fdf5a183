//! Tool configuration loading and defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default config file location, relative to the invocation directory.
pub const DEFAULT_CONFIG_PATH: &str = ".ycmgen.json";

/// ycmgen configuration, read from `.ycmgen.json`.
///
/// Every field has a default so a missing or partial file still works; CLI
/// flags override whatever is configured here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Build-context JSON exported by the build tool.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory receiving the completion script and flags JSON.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Directory receiving the marker file (the project root YCM runs from).
    #[serde(default = "default_project_dir")]
    pub project_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            out_dir: default_out_dir(),
            project_dir: default_project_dir(),
        }
    }
}

impl Config {
    /// Load config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        crate::generator::save(path, &content)
    }

    /// Load from the given path, falling back to defaults if it is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("build_context.json")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_project_dir() -> PathBuf {
    PathBuf::from(".")
}
