//! # Streaming Context
//!
//! [`Sha384`] hashes a message that arrives in pieces. It owns the chaining
//! value, a pending buffer that is always shorter than one block between
//! calls, and the running bit count used for the padding length field.
//!
//! ## Lifecycle
//!
//! ```text
//!   Ready ──update()──▶ Accumulating ──update()──▶ Accumulating
//!     ▲                                                 │
//!     └──────────────────── finalize() ◀────────────────┘
//! ```
//!
//! `finalize()` pads the remainder, compresses the last one or two blocks,
//! extracts the digest, and resets the context to its initial state. The
//! same value can hash the next message immediately. Calling `finalize()`
//! on a fresh or just-finalized context yields the digest of the empty
//! string.
//!
//! ## Threading
//!
//! A context is a plain single-owner value with no interior mutability.
//! Independent contexts share only the read-only constant tables and can
//! run on separate threads freely.

use std::fmt;
use std::io;

use zeroize::Zeroize;

use crate::compress::HashState;
use crate::constants::BLOCK_SIZE;
use crate::digest::Digest;
use crate::error::HashError;
use crate::padding::Padding;

/// Largest message length, in bytes, whose bit count fits the length field.
pub const MAX_MESSAGE_BYTES: u64 = u64::MAX / 8;

/// Coarse lifecycle position of a [`Sha384`] context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Initial chaining value loaded, nothing absorbed.
    Ready,
    /// At least one message byte absorbed since the last reset.
    Accumulating,
}

/// Incremental SHA-384 hasher.
#[derive(Clone)]
pub struct Sha384 {
    state: HashState,
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
    bit_len: u64,
}

impl Sha384 {
    /// Create a context in the `Ready` state.
    pub fn new() -> Self {
        Self {
            state: HashState::initial(),
            buffer: [0u8; BLOCK_SIZE],
            buffered: 0,
            bit_len: 0,
        }
    }

    /// Append `data` to the message.
    ///
    /// Full blocks are compressed immediately; fewer than 128 bytes remain
    /// buffered afterwards. Empty slices are accepted and change nothing.
    ///
    /// # Errors
    ///
    /// [`HashError::LengthOverflow`] if the total message would reach
    /// 2^64 bits. The chunk is rejected as a whole and the context keeps
    /// its previous state.
    pub fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        let bit_len = u64::try_from(data.len())
            .ok()
            .and_then(|n| n.checked_mul(8))
            .and_then(|bits| self.bit_len.checked_add(bits))
            .ok_or(HashError::LengthOverflow {
                buffered_bits: self.bit_len,
                chunk_len: data.len(),
            })?;

        self.absorb(data);
        self.bit_len = bit_len;
        Ok(())
    }

    /// Pad, compress the final block(s), and return the digest.
    ///
    /// The context is reset to `Ready` before returning.
    pub fn finalize(&mut self) -> Digest {
        let padding = Padding::new(self.buffered, self.bit_len);
        self.absorb(padding.as_bytes());
        debug_assert_eq!(self.buffered, 0, "padding must end on a block boundary");

        let digest = Digest::from_bytes(self.state.truncated_bytes());
        self.reset();
        digest
    }

    /// Discard everything absorbed so far and return to `Ready`.
    pub fn reset(&mut self) {
        self.state = HashState::initial();
        self.buffer.zeroize();
        self.buffered = 0;
        self.bit_len = 0;
    }

    /// Where the context is in its lifecycle.
    pub fn state(&self) -> ContextState {
        if self.bit_len == 0 {
            ContextState::Ready
        } else {
            ContextState::Accumulating
        }
    }

    /// Total message bytes absorbed since the last reset.
    pub fn bytes_processed(&self) -> u64 {
        self.bit_len / 8
    }

    /// Bytes waiting in the pending buffer (always below 128).
    pub fn buffered_len(&self) -> usize {
        self.buffered
    }

    /// Feed bytes through the block buffer without touching the bit count.
    /// Used for both message data and the closing padding.
    fn absorb(&mut self, mut data: &[u8]) {
        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_SIZE {
                return;
            }
            self.state.compress_block(&self.buffer);
            self.buffered = 0;
        }

        while data.len() >= BLOCK_SIZE {
            let (block, rest) = data.split_at(BLOCK_SIZE);
            self.buffer.copy_from_slice(block);
            self.state.compress_block(&self.buffer);
            data = rest;
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffered = data.len();
    }
}

impl Default for Sha384 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Sha384 {
    fn drop(&mut self) {
        self.buffer.zeroize();
        self.state.zeroize();
    }
}

impl fmt::Debug for Sha384 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha384")
            .field("state", &self.state())
            .field("bytes_processed", &self.bytes_processed())
            .field("buffered", &self.buffered)
            .finish_non_exhaustive()
    }
}

/// Lets `std::io::copy` stream a reader straight into a context.
impl io::Write for Sha384 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
