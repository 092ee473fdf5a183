//! Flags command: print the derived bundle without writing files.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;
use crate::context::BuildContext;
use crate::flags::FlagsBundle;

/// Options for the flags command.
#[derive(Debug, Clone, Default)]
pub struct FlagsOptions {
    /// Build-context JSON file (overrides config).
    pub input: Option<PathBuf>,
    /// Indented output instead of a single line.
    pub pretty: bool,
}

/// Execute the flags command.
pub fn execute_flags(config: &Config, options: FlagsOptions) -> Result<()> {
    let input = options.input.unwrap_or_else(|| config.input.clone());
    let context = BuildContext::load(&input)?;
    let bundle = FlagsBundle::from_dependencies(&context.dependencies);

    if options.pretty {
        println!("{}", bundle.to_json());
    } else {
        println!("{}", serde_json::to_string(&bundle)?);
    }

    Ok(())
}
