//! Tag value object
//!
//! A tag is a name/value pair attached to a picture, e.g. `Color=Red`.
//! Equality is structural (name AND value), and the canonical string
//! form `name=value` is what the query engine compares against.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ModelError;

/// Longest accepted tag name or value, in characters.
pub const MAX_TAG_COMPONENT_LEN: usize = 20;

/// A name/value pair describing a picture
///
/// Tags compare by value: two tags are equal if and only if both the
/// name and the value match.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    name: String,
    value: String,
}

impl Tag {
    /// Create a new tag, validating both components
    ///
    /// Name and value must each be 1-20 alphanumeric (ASCII) characters.
    ///
    /// # Examples
    /// ```
    /// use shoebox::model::Tag;
    ///
    /// let tag = Tag::new("Color", "Red").unwrap();
    /// assert_eq!(tag.to_string(), "Color=Red");
    /// assert!(Tag::new("", "Red").is_err());
    /// assert!(Tag::new("Color", "Red Red").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidTag` if either component violates the
    /// length or character constraints.
    pub fn new(name: &str, value: &str) -> Result<Self, ModelError> {
        if !is_valid_component(name) || !is_valid_component(value) {
            return Err(ModelError::InvalidTag(format!("{name}={value}")));
        }
        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// The tag name, e.g. `Color`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag value, e.g. `Red`
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Tag {
    /// Canonical `name=value` form used for equality and search
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

fn is_valid_component(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_TAG_COMPONENT_LEN
        && s.chars().all(|c| c.is_ascii_alphanumeric())
}
