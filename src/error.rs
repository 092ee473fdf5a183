//! Error types for ycmgen.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for ycmgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating completion configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read an input file (build context or tool config).
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output artifact or create its parent directory.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document failed to parse or serialize.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The companion-script template failed to render.
    #[error("template render failed: {0}")]
    Template(#[from] handlebars::RenderError),

    /// The current working directory could not be resolved.
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}
