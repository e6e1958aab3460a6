//! # sha384-core: SHA-384 Hash Engine
//!
//! A from-scratch implementation of SHA-384 (FIPS 180-4): a 384-bit digest
//! over arbitrary byte sequences, usable in one call or incrementally.
//!
//! - **One-shot**: [`hash`], [`hash_to_hex`], [`hash_to_base64`], [`verify`].
//! - **Streaming**: [`Sha384::update`] any number of times, then
//!   [`Sha384::finalize`]. The context resets itself and can be reused.
//! - **Encodings**: [`Digest`] renders as lowercase hex or padded base64
//!   and decodes from either; [`Digest::ct_eq`] compares in constant time.
//! - **Caller policy**: [`Hasher`] adds an empty-input policy and a preferred
//!   output encoding on top of the engine.
//!
//! ## Pipeline
//!
//! ```text
//! bytes ─▶ Sha384 buffer ─▶ 128-byte block ─▶ schedule::expand ─▶ HashState::compress
//!                                                    ▲
//!                         finalize: Padding ─────────┘ ─▶ first 6 words ─▶ Digest
//! ```
//!
//! ## Limits
//!
//! The padding length field holds the message length in bits with its
//! upper 64 bits fixed at zero. Messages of 2^64 bits (2^61 bytes) or more
//! are rejected with [`HashError::LengthOverflow`] instead of wrapping.
//!
//! ## Crate Policy
//!
//! - No I/O. Callers read files and sockets and feed the bytes in; I/O
//!   errors never cross into this crate.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod compress;
pub mod constants;
pub mod context;
pub mod digest;
pub mod error;
pub mod hasher;
pub mod oneshot;
pub mod padding;
pub mod schedule;

// Re-export primary types for ergonomic imports.
pub use compress::HashState;
pub use constants::{BLOCK_SIZE, DIGEST_SIZE};
pub use context::{ContextState, Sha384, MAX_MESSAGE_BYTES};
pub use digest::{Digest, OutputFormat};
pub use error::HashError;
pub use hasher::{EmptyInputPolicy, Hasher, HasherConfig};
pub use oneshot::{hash, hash_to_base64, hash_to_hex, verify};
