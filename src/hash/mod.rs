//! Hashing collaborators and target matching
//!
//! The search engine only needs a deterministic `bytes -> 32-byte digest`
//! function; [`HashAlgorithm`] provides the two standard ones.

mod target;

pub use target::{matches, Target, TARGET_BYTES};

use serde::{Deserialize, Serialize};
use sha3::{Digest as _, Keccak256, Sha3_256};
use std::str::FromStr;

use crate::error::{ForgeError, Result};

/// Digest length in bytes
pub const DIGEST_LEN: usize = 32;

/// Fixed-length digest produced by a [`Hasher`]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap raw digest bytes, for [`Hasher`] implementations
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Leading bytes compared against a [`Target`]
    pub fn prefix(&self) -> [u8; TARGET_BYTES] {
        let mut out = [0u8; TARGET_BYTES];
        out.copy_from_slice(&self.0[..TARGET_BYTES]);
        out
    }

    /// Lowercase hex rendering of the full digest
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// A pure hash function over candidate bytes.
///
/// Implementations must be deterministic and total; the search loop never
/// expects a hasher to fail.
pub trait Hasher: Send + Sync {
    fn digest(&self, input: &[u8]) -> Digest;
}

impl<H: Hasher + ?Sized> Hasher for &H {
    fn digest(&self, input: &[u8]) -> Digest {
        (**self).digest(input)
    }
}

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashAlgorithm {
    /// Keccak-256 with pre-FIPS padding, as used for Ethereum function selectors
    #[default]
    Keccak256,
    /// FIPS-202 SHA3-256
    #[serde(rename = "sha3-256")]
    Sha3_256,
}

impl HashAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Keccak256 => "keccak256",
            HashAlgorithm::Sha3_256 => "sha3-256",
        }
    }
}

impl Hasher for HashAlgorithm {
    fn digest(&self, input: &[u8]) -> Digest {
        let hash = match self {
            HashAlgorithm::Keccak256 => Keccak256::digest(input),
            HashAlgorithm::Sha3_256 => Sha3_256::digest(input),
        };
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&hash);
        Digest::new(out)
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keccak256" | "keccak-256" | "keccak" => Ok(HashAlgorithm::Keccak256),
            "sha3-256" | "sha3_256" | "sha3" => Ok(HashAlgorithm::Sha3_256),
            other => Err(crate::config_error!(
                "unknown hash algorithm '{}' (expected keccak256 or sha3-256)",
                other
            )),
        }
    }
}
