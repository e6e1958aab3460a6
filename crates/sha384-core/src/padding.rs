//! # Message Padding
//!
//! Builds the FIPS 180-4 §5.1.2 suffix that closes a message: one `0x80`
//! terminator byte, zero fill up to offset 112 of the current block, and a
//! 128-bit big-endian bit length.
//!
//! The upper 64 bits of the length field are always zero. Messages of
//! 2^64 bits or more cannot be represented; [`Sha384::update`] rejects the
//! chunk that would cross that bound before it reaches the padding.
//!
//! [`Sha384::update`]: crate::Sha384::update

use crate::constants::{BLOCK_SIZE, LENGTH_FIELD_OFFSET, LENGTH_FIELD_SIZE};

/// Terminator byte: a single `1` bit followed by seven `0` bits.
pub const TERMINATOR: u8 = 0x80;

/// Longest possible suffix: terminator, 127 zero bytes, length field.
pub const MAX_PADDING: usize = 1 + (BLOCK_SIZE - 1) + LENGTH_FIELD_SIZE;

/// The padding suffix for one message.
///
/// Appending [`Padding::as_bytes`] to the `buffered` bytes it was built for
/// always lands exactly on a block boundary (one or two blocks).
#[derive(Clone)]
pub struct Padding {
    bytes: [u8; MAX_PADDING],
    len: usize,
}

impl Padding {
    /// Build the suffix for a message whose final partial block holds
    /// `buffered` bytes and whose total length is `bit_len` bits.
    ///
    /// `buffered` is taken modulo the block size, so passing the total byte
    /// count of the message works too.
    pub fn new(buffered: usize, bit_len: u64) -> Self {
        let len = padding_len(buffered);
        let mut bytes = [0u8; MAX_PADDING];
        bytes[0] = TERMINATOR;

        // Upper 64 bits of the 128-bit field stay zero.
        let field = u128::from(bit_len).to_be_bytes();
        bytes[len - LENGTH_FIELD_SIZE..len].copy_from_slice(&field);

        Self { bytes, len }
    }

    /// The padding bytes, in order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of padding bytes (17 to 144).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a message is never closed without a terminator.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for Padding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Padding").field("len", &self.len).finish()
    }
}

/// Number of padding bytes needed after `buffered` bytes of a partial block.
///
/// The terminator always takes one byte. If it leaves fewer than 16 bytes
/// for the length field, the zero fill runs through an entire extra block.
pub fn padding_len(buffered: usize) -> usize {
    let used = buffered % BLOCK_SIZE + 1;
    let zeros = (LENGTH_FIELD_OFFSET + BLOCK_SIZE - used) % BLOCK_SIZE;
    1 + zeros + LENGTH_FIELD_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_pads_to_one_block() {
        let pad = Padding::new(0, 0);
        assert_eq!(pad.len(), BLOCK_SIZE);
        assert_eq!(pad.as_bytes()[0], TERMINATOR);
        assert!(pad.as_bytes()[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn abc_padding_layout() {
        let pad = Padding::new(3, 24);
        let bytes = pad.as_bytes();
        assert_eq!(3 + bytes.len(), BLOCK_SIZE);
        assert_eq!(bytes[0], 0x80);
        assert_eq!(bytes[bytes.len() - 1], 24);
        assert!(bytes[1..bytes.len() - 1].iter().all(|&b| b == 0));
    }

    #[test]
    fn remainder_at_111_fits_in_one_block() {
        assert_eq!(padding_len(111), 17);
    }

    #[test]
    fn remainder_at_112_forces_extra_block() {
        // Terminator lands on offset 112, so the length field moves to the
        // next block.
        assert_eq!(112 + padding_len(112), 2 * BLOCK_SIZE);
    }

    #[test]
    fn remainder_at_127_forces_extra_block() {
        assert_eq!(127 + padding_len(127), 2 * BLOCK_SIZE);
    }

    #[test]
    fn block_aligned_message_gets_full_padding_block() {
        // 128 buffered bytes never occur inside a context, but the total
        // byte count of an aligned message reduces to the same case as 0.
        assert_eq!(padding_len(BLOCK_SIZE), BLOCK_SIZE);
        assert_eq!(padding_len(10 * BLOCK_SIZE), BLOCK_SIZE);
    }

    #[test]
    fn every_remainder_reaches_a_block_boundary() {
        for buffered in 0..BLOCK_SIZE {
            let total = buffered + padding_len(buffered);
            assert_eq!(total % BLOCK_SIZE, 0, "buffered = {buffered}");
            assert!(total == BLOCK_SIZE || total == 2 * BLOCK_SIZE);
        }
    }

    #[test]
    fn length_field_is_big_endian_with_zero_upper_half() {
        let bit_len = 0x0102_0304_0506_0708u64;
        let pad = Padding::new(5, bit_len);
        let bytes = pad.as_bytes();
        let field = &bytes[bytes.len() - LENGTH_FIELD_SIZE..];
        assert_eq!(&field[..8], &[0u8; 8]);
        assert_eq!(&field[8..], &bit_len.to_be_bytes());
    }

    #[test]
    fn max_length_field() {
        let pad = Padding::new(0, u64::MAX);
        let bytes = pad.as_bytes();
        assert_eq!(&bytes[BLOCK_SIZE - 8..], &[0xff; 8]);
        assert_eq!(&bytes[LENGTH_FIELD_OFFSET..BLOCK_SIZE - 8], &[0u8; 8]);
    }
}
