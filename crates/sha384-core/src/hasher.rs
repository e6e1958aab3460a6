//! # Caller Policy Layer
//!
//! [`Hasher`] bundles the decisions that belong to a calling application
//! rather than to the hash function: whether empty input is acceptable, and
//! which text encoding to present. The hash function itself defines a digest
//! for the empty string; rejecting it is a policy choice (for instance a
//! form that refuses to hash nothing).
//!
//! Every operation delegates to [`Sha384`] or [`oneshot::hash`]. Callers
//! that stream data (files, sockets) take a fresh context from
//! [`Hasher::context`] and close it with [`Hasher::finish`], so the same
//! policy applies to streamed and in-memory input.

use serde::{Deserialize, Serialize};

use crate::context::Sha384;
use crate::digest::{Digest, OutputFormat, HEX_LEN};
use crate::error::HashError;
use crate::oneshot;

/// What to do when asked to hash zero bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyInputPolicy {
    /// Hash it: the result is the standard empty-string digest.
    #[default]
    Allow,
    /// Refuse with [`HashError::EmptyInput`].
    Reject,
}

/// Settings for a [`Hasher`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasherConfig {
    /// Handling of zero-length input.
    #[serde(default)]
    pub empty_input: EmptyInputPolicy,
    /// Encoding used by [`Hasher::render`].
    #[serde(default)]
    pub output: OutputFormat,
}

/// SHA-384 with a caller-chosen input policy and output encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hasher {
    config: HasherConfig,
}

impl Hasher {
    /// Create a hasher with the given settings.
    pub fn new(config: HasherConfig) -> Self {
        Self { config }
    }

    /// Active settings.
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Hash raw bytes.
    pub fn hash_bytes(&self, data: &[u8]) -> Result<Digest, HashError> {
        self.check_len(data.len() as u64)?;
        oneshot::hash(data)
    }

    /// Hash the UTF-8 encoding of `text`.
    pub fn hash_text(&self, text: &str) -> Result<Digest, HashError> {
        self.hash_bytes(text.as_bytes())
    }

    /// Encode `digest` in the configured format.
    pub fn render(&self, digest: &Digest) -> String {
        self.config.output.encode(digest)
    }

    /// Hash `text` and encode the result in the configured format.
    pub fn hash_text_encoded(&self, text: &str) -> Result<String, HashError> {
        self.hash_text(text).map(|d| self.render(&d))
    }

    /// A fresh context for streamed input.
    pub fn context(&self) -> Sha384 {
        Sha384::new()
    }

    /// Close a streamed message, applying the empty-input policy to the
    /// number of bytes it received.
    ///
    /// On rejection the context is reset so it can be reused.
    pub fn finish(&self, ctx: &mut Sha384) -> Result<Digest, HashError> {
        if let Err(e) = self.check_len(ctx.bytes_processed()) {
            ctx.reset();
            return Err(e);
        }
        Ok(ctx.finalize())
    }

    /// Check `data` against an expected digest.
    pub fn verify_bytes(&self, data: &[u8], expected: &Digest) -> Result<bool, HashError> {
        let actual = self.hash_bytes(data)?;
        Ok(actual.ct_eq(expected.as_bytes()))
    }

    /// Check `data` against an expected digest given as text.
    ///
    /// `expected` may be hex in either case (96 characters) or padded
    /// base64; surrounding whitespace is ignored. A string that is neither
    /// is an error, not a mismatch.
    pub fn verify_encoded(&self, data: &[u8], expected: &str) -> Result<bool, HashError> {
        let expected = parse_expected(expected)?;
        self.verify_bytes(data, &expected)
    }

    fn check_len(&self, len: u64) -> Result<(), HashError> {
        if len == 0 && self.config.empty_input == EmptyInputPolicy::Reject {
            tracing::debug!("rejecting empty input under Reject policy");
            return Err(HashError::EmptyInput);
        }
        Ok(())
    }
}

/// Decode an expected digest typed or pasted by a person.
pub fn parse_expected(expected: &str) -> Result<Digest, HashError> {
    let trimmed = expected.trim();
    tracing::trace!(
        len = trimmed.len(),
        as_hex = trimmed.len() == HEX_LEN,
        "parsing expected digest"
    );
    Digest::parse(trimmed)
}
