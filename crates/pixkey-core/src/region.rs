//! # Dialing Region
//!
//! [`Region`] names the dialing-plan jurisdiction assumed when a phone
//! number is written without a country code. It is an ISO 3166-1 alpha-2
//! code, validated at construction and stored uppercase.

use serde::{Deserialize, Serialize};

use crate::error::PixKeyError;

/// ISO 3166-1 alpha-2 region code, e.g. `BR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Region([u8; 2]);

impl Region {
    /// Brazil, the home region of PIX.
    pub const BR: Region = Region(*b"BR");

    /// Create a region from a two-letter code. Case-insensitive, surrounding
    /// whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PixKeyError::InvalidRegion`] unless the code is exactly two
    /// ASCII letters.
    pub fn new(code: impl AsRef<str>) -> Result<Self, PixKeyError> {
        let raw = code.as_ref();
        let bytes = raw.trim().as_bytes();
        match bytes {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(PixKeyError::InvalidRegion(raw.to_string())),
        }
    }

    /// The uppercase two-letter code.
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters by construction.
        std::str::from_utf8(&self.0).unwrap_or("ZZ")
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::BR
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = PixKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.as_str().to_string()
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
