//! # Digest Subcommands
//!
//! `sha384 text` hashes a string argument; `sha384 file` streams one or more
//! files (or stdin) and prints a `<digest>  <name>` line for each, the layout
//! `sha384sum` uses.
//!
//! ```bash
//! sha384 text abc
//! sha384 --format base64 file release.tar.gz
//! cat notes.md | sha384 file -
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use sha384_core::Hasher;

use crate::config::CliConfig;
use crate::source::Input;
use crate::{EXIT_FAILURE, EXIT_OK};

/// Arguments for `sha384 text`.
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Text whose UTF-8 bytes are hashed.
    pub text: String,
}

/// Arguments for `sha384 file`.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Files to hash. `-` reads standard input.
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,
}

/// Execute `sha384 text`.
pub fn run_text(args: &TextArgs, config: &CliConfig) -> Result<u8> {
    let hasher = Hasher::new(config.hasher_config());
    println!("{}", hasher.hash_text_encoded(&args.text)?);
    Ok(EXIT_OK)
}

/// Execute `sha384 file`.
///
/// A file that cannot be hashed is reported and skipped; the remaining files
/// are still processed and the exit code records the failure.
pub fn run_file(args: &FileArgs, config: &CliConfig) -> Result<u8> {
    let hasher = Hasher::new(config.hasher_config());
    let mut code = EXIT_OK;

    for arg in &args.paths {
        let input = Input::from_arg(arg);
        match file_line(&hasher, &input, config.chunk_size) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                tracing::error!("{e:#}");
                code = EXIT_FAILURE;
            }
        }
    }

    Ok(code)
}

/// The output line for one input.
pub fn file_line(hasher: &Hasher, input: &Input, chunk_size: usize) -> Result<String> {
    let digest = input.digest(hasher, chunk_size)?;
    Ok(format!("{}  {input}", hasher.render(&digest)))
}
