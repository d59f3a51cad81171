//! crates/course_cms_core/src/oid.rs
//!
//! The identifier value type shared by every entity. An `ObjectId` is a
//! fixed 12-byte binary token; its external rendering is the 24-character
//! hex string that appears in URLs and JSON payloads. Parsing is the only
//! fallible direction.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of bytes in a binary identifier.
pub const ID_LEN: usize = 12;

/// Number of hex characters in the external string rendering.
pub const ID_HEX_LEN: usize = 2 * ID_LEN;

/// Raised whenever a caller-supplied identifier string fails to parse.
///
/// This is always a client-input fault; it is never retried and is surfaced
/// verbatim as a rejection of the whole operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,
    #[error("identifier must be 24 hex characters, got {0}")]
    InvalidLength(usize),
    #[error("identifier contains non-hex characters: {0}")]
    InvalidHex(String),
}

/// A 12-byte binary entity identifier.
///
/// Storage assigns one on insert; thereafter it is immutable and is used as
/// the lookup key for every by-id operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; ID_LEN]);

impl ObjectId {
    /// Generates a fresh identifier: 4 bytes of big-endian unix seconds
    /// followed by 8 random bytes. Assigned by the storage adapter on insert.
    pub fn new() -> Self {
        let secs = Utc::now().timestamp().max(0) as u32;
        let random = *uuid::Uuid::new_v4().as_bytes();

        let mut bytes = [0u8; ID_LEN];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..].copy_from_slice(&random[..ID_LEN - 4]);
        Self(bytes)
    }

    /// Parses the external 24-hex-character rendering.
    pub fn parse_str(s: &str) -> Result<Self, IdentifierError> {
        if s.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if s.len() != ID_HEX_LEN {
            return Err(IdentifierError::InvalidLength(s.len()));
        }
        let decoded =
            hex::decode(s).map_err(|_| IdentifierError::InvalidHex(s.to_string()))?;

        let mut bytes = [0u8; ID_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    pub fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Renders the external string form. Never fails.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

// In the serialized document form the identifier travels as its hex string.
impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_str(&s).map_err(D::Error::custom)
    }
}
