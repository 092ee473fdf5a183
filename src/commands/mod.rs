//! CLI command implementations.
//!
//! Each command is in its own submodule for maintainability.

pub mod flags;
pub mod generate;
pub mod init;

pub use flags::{execute_flags, FlagsOptions};
pub use generate::{execute_generate, GenerateOptions};
pub use init::{execute_init, InitOptions};
