//! Target fingerprint parsing and prefix matching

use regex::Regex;
use serde::{Serialize, Serializer};

use super::Digest;
use crate::error::{ForgeError, Result};

/// Number of digest bytes a target fingerprint covers
pub const TARGET_BYTES: usize = 4;

/// A validated 4-byte target fingerprint.
///
/// Always held as 8 lowercase hex characters; uppercase input is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    hex: String,
    bytes: [u8; TARGET_BYTES],
}

impl Target {
    /// Parse a target such as `ef7ec2e7` or `0xEF7EC2E7`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if body.is_empty() {
            return Err(ForgeError::invalid_target(input, "target is empty"));
        }

        let hex_regex = Regex::new(r"^[0-9a-fA-F]+$")
            .map_err(|e| ForgeError::internal(format!("Regex compilation failed: {}", e)))?;
        if !hex_regex.is_match(body) {
            return Err(ForgeError::invalid_target(
                input,
                "contains non-hexadecimal characters",
            ));
        }

        if body.len() != TARGET_BYTES * 2 {
            return Err(ForgeError::invalid_target(
                input,
                format!(
                    "expected exactly {} hex characters, got {}",
                    TARGET_BYTES * 2,
                    body.len()
                ),
            ));
        }

        let hex = body.to_ascii_lowercase();
        let mut bytes = [0u8; TARGET_BYTES];
        hex::decode_to_slice(&hex, &mut bytes)
            .map_err(|e| ForgeError::invalid_target(input, e.to_string()))?;

        Ok(Self { hex, bytes })
    }

    /// Target equal to the prefix of an existing digest
    pub fn from_digest(digest: &Digest) -> Self {
        let bytes = digest.prefix();
        Self {
            hex: hex::encode(bytes),
            bytes,
        }
    }

    /// Lowercase hex, without `0x`
    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    pub fn bytes(&self) -> [u8; TARGET_BYTES] {
        self.bytes
    }

    /// Check whether a digest's prefix equals this target
    pub fn matches(&self, digest: &Digest) -> bool {
        matches(digest, self)
    }
}

/// Render the first 4 bytes of `digest` as lowercase hex and compare
/// with the target string.
pub fn matches(digest: &Digest, target: &Target) -> bool {
    hex::encode(digest.prefix()) == target.hex
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", self.hex)
    }
}

impl std::str::FromStr for Target {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{HashAlgorithm, Hasher};

    #[test]
    fn test_parse_plain_and_prefixed() {
        let plain = Target::parse("ef7ec2e7").unwrap();
        let prefixed = Target::parse("0xef7ec2e7").unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.bytes(), [0xef, 0x7e, 0xc2, 0xe7]);
        assert_eq!(plain.to_string(), "0xef7ec2e7");
    }

    #[test]
    fn test_uppercase_is_normalized() {
        let target = Target::parse("0XA9059CBB").unwrap();
        assert_eq!(target.as_hex(), "a9059cbb");
    }

    #[test]
    fn test_malformed_targets_rejected() {
        for input in ["zz", "ABCDEFGH", "", "0x", "a9059cb", "a9059cbb00", "a905 9cbb"] {
            match Target::parse(input) {
                Err(ForgeError::InvalidTarget { .. }) => {}
                other => panic!("{:?} should be rejected, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_matches_own_prefix() {
        let digest = HashAlgorithm::Keccak256.digest(b"swapETH(address,uint256)");
        let target = Target::from_digest(&digest);
        assert!(target.matches(&digest));
        assert!(matches(&digest, &target));

        let other = HashAlgorithm::Keccak256.digest(b"swapETH(address,uint256,uint256)");
        assert_eq!(target.matches(&other), other.prefix() == digest.prefix());
    }

    #[test]
    fn test_matches_known_selector() {
        let target = Target::parse("0xa9059cbb").unwrap();
        let digest = HashAlgorithm::Keccak256.digest(b"transfer(address,uint256)");
        assert!(target.matches(&digest));
        let miss = HashAlgorithm::Keccak256.digest(b"transfer(address,uint128)");
        assert!(!target.matches(&miss));
    }
}
