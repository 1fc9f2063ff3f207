//! Ordered, duplicate-free tag collections.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Set of tag names that remembers insertion order for display.
///
/// Equality compares membership only; two sets holding the same names in a
/// different order are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(IndexSet<String>);

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses comma-separated user input such as `"work, urgent"`.
    ///
    /// Entries are trimmed; blanks and repeats are dropped.
    #[must_use]
    pub fn parse_list(input: &str) -> Self {
        input.split(',').collect()
    }

    /// Decodes the JSON array string used by the record store.
    ///
    /// An empty string decodes to an empty set.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when `raw` is not an array of strings.
    pub fn from_wire(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::new());
        }
        let names: Vec<String> = serde_json::from_str(raw)?;
        Ok(names.into_iter().collect())
    }

    /// Encodes the set as the JSON array string used by the record store.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if serialization fails.
    pub fn to_wire(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Adds a tag, returning `false` when it is blank or already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.0.insert(trimmed.to_owned())
    }

    /// Returns `true` if the set holds `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Iterates tag names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::new();
        for name in iter {
            tags.insert(name.as_ref());
        }
        tags
    }
}
