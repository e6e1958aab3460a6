//! # sha384 CLI entry point
//!
//! Parses arguments, resolves configuration, and dispatches to subcommand
//! handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sha384_cli::check::{run_check, CheckArgs};
use sha384_cli::config::{CliConfig, ConfigOverrides};
use sha384_cli::digest::{run_file, run_text, FileArgs, TextArgs};
use sha384_cli::EXIT_FAILURE;
use sha384_core::OutputFormat;

/// Compute and check SHA-384 digests.
#[derive(Parser, Debug)]
#[command(name = "sha384", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Digest encoding: hex or base64. Overrides SHA384_FORMAT.
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Bytes read per chunk when streaming. Overrides SHA384_CHUNK_SIZE.
    #[arg(long, global = true)]
    chunk_size: Option<usize>,

    /// Refuse to hash empty input. Overrides SHA384_REJECT_EMPTY.
    #[arg(long, global = true)]
    reject_empty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hash a string's UTF-8 bytes.
    Text(TextArgs),

    /// Hash files, streaming each in fixed-size chunks.
    File(FileArgs),

    /// Compare a file or string against an expected digest.
    Check(CheckArgs),
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            chunk_size: self.chunk_size,
            output: self.format,
            reject_empty: self.reject_empty,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match CliConfig::from_env().and_then(|c| c.merge(&cli.overrides())) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    tracing::debug!(
        chunk_size = config.chunk_size,
        format = %config.output,
        empty_input = ?config.empty_input,
        "resolved configuration"
    );

    let result = match &cli.command {
        Commands::Text(args) => run_text(args, &config),
        Commands::File(args) => run_file(args, &config),
        Commands::Check(args) => run_check(args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
