//! # Error Types
//!
//! Structured errors for the SHA-384 engine. Uses `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! The compression path itself is total: padding, scheduling, and the
//! round function operate on fixed-width words with wrapping arithmetic and
//! cannot fail. Errors arise only at the edges: a message that would exceed
//! the 2^64-bit length field, malformed text encodings, and caller policy.
//!
//! I/O failures never reach this crate. Callers that read files or sockets
//! report those errors themselves before any bytes are hashed.

use thiserror::Error;

/// Errors produced by `sha384-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// Absorbing the chunk would push the message length to 2^64 bits or
    /// beyond. The context is left untouched.
    #[error(
        "message length overflow: {buffered_bits} bits already absorbed, \
         chunk of {chunk_len} bytes exceeds the 2^64-bit limit"
    )]
    LengthOverflow {
        /// Bits absorbed before the rejected chunk.
        buffered_bits: u64,
        /// Length in bytes of the rejected chunk.
        chunk_len: usize,
    },

    /// The caller configured empty input as invalid and nothing was supplied.
    #[error("empty input: nothing to hash")]
    EmptyInput,

    /// Decoded digest bytes have the wrong length.
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidDigestLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(String),

    /// Base64 decoding error.
    #[error("base64 decode error: {0}")]
    Base64Decode(String),

    /// Unrecognised output format name.
    #[error("unknown output format {0:?}: expected \"hex\" or \"base64\"")]
    UnknownFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_overflow_display() {
        let err = HashError::LengthOverflow {
            buffered_bits: u64::MAX - 7,
            chunk_len: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains("2^64"));
        assert!(msg.contains("2 bytes"));
    }

    #[test]
    fn empty_input_display() {
        assert!(format!("{}", HashError::EmptyInput).contains("nothing to hash"));
    }

    #[test]
    fn invalid_digest_length_display() {
        let err = HashError::InvalidDigestLength {
            expected: 48,
            actual: 32,
        };
        let msg = format!("{err}");
        assert!(msg.contains("48 bytes"));
        assert!(msg.contains("32"));
    }

    #[test]
    fn decode_errors_display() {
        let hex_err = HashError::HexDecode("odd length".to_string());
        assert!(format!("{hex_err}").contains("odd length"));
        let b64_err = HashError::Base64Decode("invalid padding".to_string());
        assert!(format!("{b64_err}").contains("invalid padding"));
    }

    #[test]
    fn unknown_format_display() {
        let msg = format!("{}", HashError::UnknownFormat("yaml".to_string()));
        assert!(msg.contains("\"yaml\""));
        assert!(msg.contains("base64"));
    }

    #[test]
    fn all_variants_are_debug() {
        let variants = vec![
            HashError::LengthOverflow {
                buffered_bits: 0,
                chunk_len: 0,
            },
            HashError::EmptyInput,
            HashError::InvalidDigestLength {
                expected: 48,
                actual: 0,
            },
            HashError::HexDecode("a".to_string()),
            HashError::Base64Decode("b".to_string()),
            HashError::UnknownFormat("c".to_string()),
        ];
        for v in variants {
            assert!(!format!("{v:?}").is_empty());
        }
    }
}
