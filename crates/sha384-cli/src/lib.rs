//! # sha384-cli: Command-Line Front End
//!
//! Provides the `sha384` command. It owns everything the hash engine
//! deliberately does not: opening files, reading stdin, configuration, and
//! logging setup. Bytes are streamed into [`sha384_core::Sha384`] in
//! fixed-size chunks, so files of any size hash in constant memory.
//!
//! ## Subcommands
//!
//! - `sha384 text <TEXT>`: digest of a string's UTF-8 bytes.
//! - `sha384 file <PATH>...`: digest of each file (`-` reads stdin).
//! - `sha384 check <PATH> --expected <DIGEST>`: compare against a hex or
//!   base64 digest.
//!
//! ## Exit Codes
//!
//! - `0`: success, or every checked digest matched.
//! - `1`: a digest did not match.
//! - `2`: bad configuration, unreadable input, or a policy rejection.

pub mod check;
pub mod config;
pub mod digest;
pub mod source;

/// Exit code for success.
pub const EXIT_OK: u8 = 0;

/// Exit code for a digest mismatch.
pub const EXIT_MISMATCH: u8 = 1;

/// Exit code for any other failure.
pub const EXIT_FAILURE: u8 = 2;
