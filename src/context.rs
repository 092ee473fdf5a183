//! Build context supplied by the external build tool.
//!
//! The build tool resolves dependencies and compiler settings, then exports
//! them as a JSON document. This module only reads that document; dependency
//! resolution itself happens elsewhere.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single resolved library dependency.
///
/// All lists are ordered; the generator preserves their order verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dependency {
    /// Library name, informational only.
    #[serde(default)]
    pub name: String,

    /// Include directories, emitted as `-isystem` flags.
    #[serde(default)]
    pub includedirs: Vec<String>,

    /// Preprocessor defines, emitted as `-D` flags.
    #[serde(default)]
    pub defines: Vec<String>,

    /// Extra compiler flags, emitted verbatim.
    #[serde(default)]
    pub cxxflags: Vec<String>,
}

/// Compiler settings from the build configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompilerSettings {
    /// C++ standard identifier, e.g. `"17"` or `"gnu17"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cppstd: Option<String>,

    /// Compiler version, e.g. `"12.3"`. Only the major component is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Settings section of the build context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Compiler settings.
    #[serde(default)]
    pub compiler: CompilerSettings,
}

/// The full build context exported by the build tool.
///
/// Zero dependencies is valid and yields empty flag lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildContext {
    /// Resolved dependencies, in build-tool order.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,

    /// Build configuration settings.
    #[serde(default)]
    pub settings: Settings,
}

impl BuildContext {
    /// Load a build context from a JSON file.
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

    /// Save the context as pretty-printed JSON (used for skeleton files).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        crate::generator::save(path, &content)
    }
}
