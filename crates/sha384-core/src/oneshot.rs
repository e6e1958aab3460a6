//! # One-Shot Digest
//!
//! Single-call helpers built on [`Sha384`]: construct, update once,
//! finalize. There is no second implementation of the algorithm here.

use crate::context::Sha384;
use crate::digest::Digest;
use crate::error::HashError;

/// Compute the SHA-384 digest of `data`.
///
/// Defined for every byte sequence, including the empty one.
///
/// # Errors
///
/// [`HashError::LengthOverflow`] only for inputs of 2^61 bytes or more.
pub fn hash(data: &[u8]) -> Result<Digest, HashError> {
    let mut ctx = Sha384::new();
    ctx.update(data)?;
    Ok(ctx.finalize())
}

/// Compute the digest of `data` as 96 lowercase hex characters.
pub fn hash_to_hex(data: &[u8]) -> Result<String, HashError> {
    hash(data).map(|d| d.to_hex())
}

/// Compute the digest of `data` as 64 characters of padded base64.
pub fn hash_to_base64(data: &[u8]) -> Result<String, HashError> {
    hash(data).map(|d| d.to_base64())
}

/// Check that `data` hashes to exactly `expected`.
///
/// Every one of the 48 bytes must match. The comparison runs in constant
/// time; an `expected` of the wrong length is simply not a match.
pub fn verify(data: &[u8], expected: impl AsRef<[u8]>) -> bool {
    match hash(data) {
        Ok(digest) => digest.ct_eq(expected.as_ref()),
        Err(_) => false,
    }
}
