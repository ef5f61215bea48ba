//! Random identifier generation.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// UUID versions that can be generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum UuidVersion {
    /// Random (RFC 4122 version 4)
    #[default]
    #[display(fmt = "v4")]
    #[serde(rename = "v4")]
    V4,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    #[error("Unsupported UUID version: {0}")]
    UnsupportedVersion(String),
}

impl FromStr for UuidVersion {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v4" | "4" => Ok(Self::V4),
            _ => Err(UuidError::UnsupportedVersion(s.to_owned())),
        }
    }
}

/// Generates a UUID of the given version, hyphenated and lowercase.
pub fn generate_uuid(version: UuidVersion) -> String {
    let id = match version {
        UuidVersion::V4 => Uuid::new_v4(),
    };
    id.hyphenated().to_string()
}

pub fn generate_uuid_v4() -> String {
    generate_uuid(UuidVersion::V4)
}
