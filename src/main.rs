#![forbid(unsafe_code)]
//! ycmgen command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ycmgen::commands::{
    execute_flags, execute_generate, execute_init, FlagsOptions, GenerateOptions, InitOptions,
};
use ycmgen::Config;

#[derive(Parser)]
#[command(name = "ycmgen")]
#[command(about = "Generate YouCompleteMe configuration from resolved dependency metadata")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".ycmgen.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config and build-context skeleton
    Init {
        /// Overwrite an existing config without prompting
        #[arg(short, long)]
        force: bool,
    },

    /// Emit the completion script, flags JSON, and marker file
    Generate {
        /// Build-context JSON exported by the build tool
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory receiving the script and flags JSON
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Directory receiving the marker file
        #[arg(short, long)]
        project_dir: Option<PathBuf>,
    },

    /// Print the derived flags bundle without writing files
    Flags {
        /// Build-context JSON exported by the build tool
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Indented output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("ycmgen=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Commands::Init { force } => {
            execute_init(InitOptions { force })?;
        }

        Commands::Generate {
            input,
            out_dir,
            project_dir,
        } => {
            let options = GenerateOptions {
                input,
                out_dir,
                project_dir,
            };
            execute_generate(&config, options)?;
        }

        Commands::Flags { input, pretty } => {
            let options = FlagsOptions { input, pretty };
            execute_flags(&config, options)?;
        }
    }

    Ok(())
}
