//! # Block Compression
//!
//! The SHA-512 family compression function (FIPS 180-4 §6.4.2 steps 2-4):
//! 80 rounds over eight working registers, followed by the Davies-Meyer
//! feed-forward that adds the registers back into the chaining value.
//!
//! All additions are modulo 2^64. Wrapping is the defined behavior of the
//! algorithm, not an error condition.

use zeroize::Zeroize;

use crate::constants::{BLOCK_SIZE, DIGEST_SIZE, DIGEST_WORDS, IV, K, ROUNDS, STATE_WORDS};
use crate::schedule::{self, Schedule};

/// Σ0, applied to register `a`.
#[inline(always)]
pub const fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

/// Σ1, applied to register `e`.
#[inline(always)]
pub const fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

/// Choose: each bit of `x` selects the bit from `y` (set) or `z` (clear).
#[inline(always)]
pub const fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (!x & z)
}

/// Majority of the three inputs, bitwise.
#[inline(always)]
pub const fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// The chaining value carried between blocks.
///
/// Starts at [`IV`] and changes only through [`HashState::compress`], once
/// per 128-byte block.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct HashState {
    words: [u64; STATE_WORDS],
}

impl HashState {
    /// The SHA-384 initial chaining value.
    pub const fn initial() -> Self {
        Self { words: IV }
    }

    /// Raw chaining words `a..h`.
    pub fn words(&self) -> &[u64; STATE_WORDS] {
        &self.words
    }

    /// Run the 80 rounds over `w` and fold the result into the state.
    pub fn compress(&mut self, w: &Schedule) {
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.words;

        for i in 0..ROUNDS {
            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K[i])
                .wrapping_add(w[i]);
            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (word, reg) in self.words.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *word = word.wrapping_add(reg);
        }
    }

    /// Expand `block` and compress it.
    pub fn compress_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        let mut w = schedule::expand(block);
        self.compress(&w);
        w.zeroize();
    }

    /// The first six words, big-endian: the 384-bit digest.
    pub fn truncated_bytes(&self) -> [u8; DIGEST_SIZE] {
        let mut out = [0u8; DIGEST_SIZE];
        for (chunk, word) in out.chunks_exact_mut(8).zip(&self.words[..DIGEST_WORDS]) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Debug for HashState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.words.iter().map(|w| format!("{w:016x}")))
            .finish()
    }
}
