//! CLI tools for ccs
//!
//! - `validate`: Decode and validate a pipeline file
//! - `init`: Write a starter pipeline file
//! - `completions`: Generate shell completions

pub mod completions;
pub mod init;
pub mod validate;

use anyhow::Result;
use ccs::infrastructure::{Config, init_logging};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;

/// CLI arguments for ccs
#[derive(Parser, Debug)]
#[command(name = "ccs")]
#[command(author, version, about)]
#[command(
    long_about = "Manage CI/CD pipelines described by a standardized YAML configuration."
)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the pipeline configuration against the CI/CD standard
    Validate {
        /// Path to the pipeline configuration file [default: ccs.yaml, or $CCS_FILE]
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Initialize a new project with a default YAML configuration file
    Init {
        /// Prompt for each task's settings
        #[arg(short, long)]
        interactive: bool,
        /// File to write [default: ccs.yaml, or $CCS_FILE]
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: ShellArg,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Build the CLI command for completion generation
pub fn build_cli() -> clap::Command {
    Args::command()
}

/// Parse and execute CLI arguments
pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();

    if args.verbose || std::env::var("CCS_DEBUG").is_ok() {
        let level = if args.verbose { "debug" } else { config.log_level.as_str() };
        init_logging(level);
    }

    tracing::debug!(?config, "Loaded configuration");

    match args.command {
        Command::Validate { file } => {
            let file = file.unwrap_or(config.pipeline_file);
            validate::validate_file(&file)?;
            println!("Pipeline validation succeeded");
        }
        Command::Init {
            interactive,
            output,
            force,
        } => {
            let output = output.unwrap_or(config.pipeline_file);
            init::ensure_writable(&output, force)?;

            let answers = if interactive {
                ccs::pipeline::scaffold::prompt_answers(&mut io::stdin().lock(), &mut io::stdout())?
            } else {
                ccs::pipeline::scaffold::ScaffoldAnswers::default()
            };

            init::init_project(&output, &answers, force)?;
            println!(
                "Project initialized with configuration file: {}",
                output.display()
            );
        }
        Command::Completions { shell, output } => {
            use clap_complete::Shell;

            let shell_enum = match shell {
                ShellArg::Bash => Shell::Bash,
                ShellArg::Zsh => Shell::Zsh,
                ShellArg::Fish => Shell::Fish,
                ShellArg::PowerShell => Shell::PowerShell,
                ShellArg::Elvish => Shell::Elvish,
            };

            let completions = completions::generate_completions(shell_enum)?;

            if let Some(output_path) = output {
                completions::save_completions(&completions, &output_path)?;
            } else {
                println!("{completions}");
            }
        }
    }

    Ok(())
}
