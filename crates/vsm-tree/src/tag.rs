//! Lineage-encoded node tags.
//!
//! The seed carries a fixed literal tag (`0/0/1` by default). Every other
//! tag is its parent's tag followed by `-` and a 1-based ordinal:
//!
//! ```text
//! 0/0/1          seed
//! 0/0/1-3        third child of the seed
//! 0/0/1-3-12     twelfth child of 0/0/1-3
//! ```
//!
//! Ordinals are assigned in vertex order, so two different slots can never
//! produce the same tag and a tag never depends on insertion order.
//! Callers should still treat tags as opaque.

use std::borrow::Borrow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Separator between a parent tag and a child ordinal.
pub const ORDINAL_SEPARATOR: char = '-';

/// Unique node identifier encoding the node's ancestry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Conventional seed tag.
    pub const ROOT: &'static str = "0/0/1";

    /// The conventional seed tag.
    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    /// Validate a raw tag string.
    ///
    /// Tags must be non-empty and free of whitespace and control characters.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Error::InvalidTag(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Tag of the `ordinal`-th child (1-based).
    pub fn child(&self, ordinal: u32) -> Self {
        Self(format!("{}{}{}", self.0, ORDINAL_SEPARATOR, ordinal))
    }

    /// The raw string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the raw string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_tags() {
        let root = Tag::root();
        assert_eq!(root.child(1).as_str(), "0/0/1-1");
        assert_eq!(root.child(6).child(3).as_str(), "0/0/1-6-3");
    }

    #[test]
    fn parse_rejects_blank() {
        assert!(Tag::parse("").is_err());
        assert!(Tag::parse("0/0/1 -1").is_err());
        assert!(Tag::parse("a\nb").is_err());
        assert_eq!("0/0/1-2".parse::<Tag>().unwrap(), Tag::root().child(2));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Tag::root().child(1)).unwrap();
        assert_eq!(json, "\"0/0/1-1\"");
    }
}
