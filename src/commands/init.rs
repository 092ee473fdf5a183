//! Init command: write a starter config and build-context skeleton.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::context::BuildContext;

/// Options for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Overwrite an existing config without prompting.
    pub force: bool,
}

/// Execute the init command.
pub fn execute_init(options: InitOptions) -> Result<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);

    if config_path.exists() && !options.force {
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists, overwrite?", config_path.display()))
            .default(false)
            .interact()
            .unwrap_or(false);
        if !overwrite {
            eprintln!(
                "{} Left existing {} untouched. Use --force to overwrite.",
                style("✗").red(),
                config_path.display()
            );
            std::process::exit(1);
        }
    }

    let config = Config::default();
    config.save(&config_path)?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    // Skeleton context so `ycmgen generate` has something to chew on.
    if !config.input.exists() {
        BuildContext::default().save(&config.input)?;
        println!(
            "{} Created {} (point your build tool at it, or fill it in by hand)",
            style("✓").green(),
            config.input.display()
        );
    }

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Export your dependency metadata to {}",
        style(config.input.display().to_string()).cyan()
    );
    println!(
        "  2. Run {} to emit the completion configuration",
        style("ycmgen generate").cyan()
    );

    Ok(())
}
