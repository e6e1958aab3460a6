//! # Digest and Text Encodings
//!
//! [`Digest`] is the 48-byte output of SHA-384. It has no identity beyond
//! its bytes, is `Copy`, and renders as lowercase hex by default.
//!
//! Text forms:
//!
//! - **hex**: 96 lowercase characters. Decoding accepts either case and
//!   ignores surrounding whitespace, since expected digests are usually
//!   pasted by hand.
//! - **base64**: standard alphabet with `=` padding (64 characters).
//!
//! [`Digest::ct_eq`] compares in constant time. Plain `==` is also
//! available for contexts where timing does not matter (maps, tests).

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::ConstantTimeEq;

use crate::constants::DIGEST_SIZE;
use crate::error::HashError;

/// Length of the hex form of a digest.
pub const HEX_LEN: usize = DIGEST_SIZE * 2;

/// Length of the padded base64 form of a digest.
pub const BASE64_LEN: usize = DIGEST_SIZE.div_ceil(3) * 4;

/// A SHA-384 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// The raw 48 bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Consume into the raw 48 bytes.
    pub fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Lowercase hex, 96 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Decode a hex digest. Either case is accepted; surrounding whitespace
    /// is ignored.
    pub fn from_hex(s: &str) -> Result<Self, HashError> {
        let bytes = hex::decode(s.trim()).map_err(|e| HashError::HexDecode(e.to_string()))?;
        Self::try_from(bytes.as_slice())
    }

    /// Standard padded base64, 64 characters.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    /// Decode a standard padded base64 digest.
    pub fn from_base64(s: &str) -> Result<Self, HashError> {
        let bytes = STANDARD
            .decode(s.trim())
            .map_err(|e| HashError::Base64Decode(e.to_string()))?;
        Self::try_from(bytes.as_slice())
    }

    /// Decode either text form, chosen by length: 96 characters is hex,
    /// anything else is tried as base64.
    pub fn parse(s: &str) -> Result<Self, HashError> {
        let trimmed = s.trim();
        if trimmed.len() == HEX_LEN {
            Self::from_hex(trimmed)
        } else {
            Self::from_base64(trimmed)
        }
    }

    /// Constant-time equality against any byte string.
    ///
    /// Timing depends only on the length of `other`; a slice of any other
    /// length than 48 bytes compares unequal.
    pub fn ct_eq(&self, other: &[u8]) -> bool {
        self.0[..].ct_eq(other).into()
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = HashError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; DIGEST_SIZE] =
            bytes.try_into().map_err(|_| HashError::InvalidDigestLength {
                expected: DIGEST_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Text encoding used when a digest is shown to a person or stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lowercase hexadecimal.
    #[default]
    Hex,
    /// Standard padded base64.
    Base64,
}

impl OutputFormat {
    /// Returns the format identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }

    /// Encode `digest` in this format.
    pub fn encode(&self, digest: &Digest) -> String {
        match self {
            Self::Hex => digest.to_hex(),
            Self::Base64 => digest.to_base64(),
        }
    }

    /// Decode `s`, which must be in this format.
    pub fn decode(&self, s: &str) -> Result<Digest, HashError> {
        match self {
            Self::Hex => Digest::from_hex(s),
            Self::Base64 => Digest::from_base64(s),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "base64" | "b64" => Ok(Self::Base64),
            other => Err(HashError::UnknownFormat(other.to_string())),
        }
    }
}
