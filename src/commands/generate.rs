//! Generate command: emit the completion script, flags JSON, and marker file.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::context::BuildContext;
use crate::generator::{Generator, OutputLayout};

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Build-context JSON file (overrides config).
    pub input: Option<PathBuf>,
    /// Output directory for the script and flags JSON (overrides config).
    pub out_dir: Option<PathBuf>,
    /// Directory receiving the marker file (overrides config).
    pub project_dir: Option<PathBuf>,
}

/// Execute the generate command.
pub fn execute_generate(config: &Config, options: GenerateOptions) -> Result<()> {
    let input = options.input.unwrap_or_else(|| config.input.clone());
    let out_dir = options.out_dir.unwrap_or_else(|| config.out_dir.clone());
    let project_dir = options
        .project_dir
        .unwrap_or_else(|| config.project_dir.clone());

    let context = BuildContext::load(&input)?;
    println!(
        "{} Loaded {} ({} dependencies)",
        style("→").cyan(),
        input.display(),
        context.dependencies.len()
    );

    let generator = Generator::new(&context, OutputLayout::new(out_dir, project_dir));
    let report = generator.generate()?;

    println!("{} Wrote {}", style("✓").green(), report.extra_conf.display());
    println!("{} Wrote {}", style("✓").green(), report.flags_file.display());
    println!("{} Wrote {}", style("✓").green(), report.marker_file.display());
    println!(
        "  Includes: {}  Defines: {}  Flags: {}",
        report.bundle.includes.len(),
        report.bundle.defines.len(),
        report.bundle.flags.len()
    );

    Ok(())
}
