/// A single validated MD5 hash value.
///
/// `HashValue` is a thin wrapper around the rendered hex digest. The only
/// way to construct one is [`HashValue::parse`] (or `str::parse`), so every
/// value held anywhere in the crate is already known to be exactly 32 hex
/// characters.
use super::entry_list::AddError;
use compact_str::CompactString;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of hexadecimal characters in a rendered MD5 digest.
///
/// Presentation layers cap hash input fields at this length so a user
/// cannot type past a complete digest.
pub const MD5_HEX_LEN: usize = 32;

/// A validated MD5 hash, stored as the hex text the user entered.
///
/// Letter case is preserved exactly as entered and comparisons are
/// byte-exact, so `AB…` and `ab…` are two distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashValue(CompactString);

impl HashValue {
    /// Parse a raw input string into a validated hash value.
    ///
    /// Surrounding whitespace is trimmed (pasted hashes routinely carry a
    /// trailing newline). The remainder must be exactly [`MD5_HEX_LEN`]
    /// ASCII hex digits; anything else fails with
    /// [`AddError::InvalidFormat`], including the empty string.
    pub fn parse(raw: &str) -> Result<Self, AddError> {
        let trimmed = raw.trim();
        if trimmed.len() != MD5_HEX_LEN || !trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AddError::InvalidFormat);
        }
        Ok(Self(CompactString::new(trimmed)))
    }

    /// The hash as the hex string it was entered as.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HashValue {
    type Err = AddError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for HashValue {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Serializes as a plain string, e.g. `"d41d8cd98f00b204e9800998ecf8427e"`.
impl Serialize for HashValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserialization goes back through [`HashValue::parse`], so a malformed
/// hash in a data file is rejected instead of smuggled into the model.
impl<'de> Deserialize<'de> for HashValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
