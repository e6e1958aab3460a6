//! # Check Subcommand
//!
//! Compares the digest of a file, stdin, or a literal string against an
//! expected digest pasted as hex (either case) or base64.
//!
//! ```bash
//! sha384 check release.tar.gz --expected 38b060a751ac...
//! sha384 check --text abc --expected ywB1P0WjXou1oD1p...
//! ```
//!
//! Prints `<name>: OK` and exits 0 on a match, `<name>: MISMATCH` and exits
//! 1 otherwise. A malformed expected digest is an error (exit 2), never a
//! mismatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sha384_core::hasher::parse_expected;
use sha384_core::{Digest, Hasher};

use crate::config::CliConfig;
use crate::source::Input;
use crate::{EXIT_MISMATCH, EXIT_OK};

/// Arguments for `sha384 check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File to check. `-` reads standard input.
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    pub path: Option<PathBuf>,

    /// Check this string's UTF-8 bytes instead of a file.
    #[arg(long)]
    pub text: Option<String>,

    /// Expected digest, 96 hex characters or 64 base64 characters.
    #[arg(long)]
    pub expected: String,
}

/// Outcome of one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
}

impl Verdict {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Match => EXIT_OK,
            Self::Mismatch => EXIT_MISMATCH,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Match => "OK",
            Self::Mismatch => "MISMATCH",
        }
    }
}

/// Execute `sha384 check`.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let expected = parse_expected(&args.expected).context("invalid --expected digest")?;
    let hasher = Hasher::new(config.hasher_config());

    let (name, actual) = match (&args.text, &args.path) {
        (Some(text), _) => ("text".to_string(), hasher.hash_text(text)?),
        (None, Some(path)) => {
            let input = Input::from_arg(path);
            let digest = input.digest(&hasher, config.chunk_size)?;
            (input.to_string(), digest)
        }
        (None, None) => anyhow::bail!("nothing to check: give a path or --text"),
    };

    let verdict = compare(&actual, &expected);
    if verdict == Verdict::Mismatch {
        tracing::info!(
            expected = %hasher.render(&expected),
            actual = %hasher.render(&actual),
            "digest mismatch"
        );
    }
    println!("{name}: {}", verdict.label());
    Ok(verdict.exit_code())
}

/// Constant-time comparison of two digests.
pub fn compare(actual: &Digest, expected: &Digest) -> Verdict {
    if actual.ct_eq(expected.as_bytes()) {
        Verdict::Match
    } else {
        Verdict::Mismatch
    }
}
