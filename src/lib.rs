#![forbid(unsafe_code)]

//! # ycmgen
//!
//! Generates YouCompleteMe configuration from resolved C++ dependency
//! metadata: a `.ycm_extra_conf.py` completion script, a JSON flags file,
//! and a marker file recording where the flags live.
//!
//! The build tool resolves dependencies and exports a build-context JSON;
//! ycmgen turns include directories into `-isystem` flags, defines into `-D`
//! flags, copies extra compiler flags verbatim, and fills the completion
//! script template with the configured C++ standard and compiler version.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ycmgen::{BuildContext, Generator, OutputLayout};
//!
//! fn main() -> anyhow::Result<()> {
//!     let context = BuildContext::load("build_context.json")?;
//!     let generator = Generator::new(&context, OutputLayout::new("build/gen", "."));
//!     generator.generate()?;
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod flags;
pub mod generator;
pub mod template;

// Re-exports
pub use config::Config;
pub use context::{BuildContext, CompilerSettings, Dependency, Settings};
pub use error::{Error, Result};
pub use flags::{compiler_major_version, cppstd_to_flag, prefixed, FlagsBundle};
pub use generator::{save, GenerateReport, Generator, OutputLayout};
pub use template::{render_extra_conf, EXTRA_CONF_FILE, FLAGS_FILE, MARKER_FILE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
