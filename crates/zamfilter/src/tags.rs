//! Tag support for amendment rows.
//!
//! Rows carry their tags in a `data-tag` attribute as a pipe-delimited list of
//! lowercase strings (`"urgent|budget"`). Tags are picked in a separate
//! multi-select widget, so the comparison is always made on lowercased values.
//!
//! Filtering uses AND semantics: a row passes when it carries every selected
//! tag.

use serde::{Deserialize, Serialize};

pub const TAG_SEPARATOR: char = '|';

/// The tags attached to one row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Parse a `data-tag` attribute value. Empty segments are dropped.
    pub fn parse(attribute: &str) -> Self {
        let mut set = Self::default();
        for tag in attribute.split(TAG_SEPARATOR) {
            set.insert(tag);
        }
        set
    }

    pub fn tags(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        let tag = normalize(tag);
        self.0.iter().any(|t| *t == tag)
    }

    /// True when every selected tag is in this set (an empty selection always matches).
    pub fn contains_all<S: AsRef<str>>(&self, selected: &[S]) -> bool {
        selected.iter().all(|tag| self.contains(tag.as_ref()))
    }

    /// Add a tag. Returns `false` if it was already present or blank.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = normalize(tag);
        if tag.is_empty() || self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Remove a tag. Returns `false` if it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let tag = normalize(tag);
        let before = self.0.len();
        self.0.retain(|t| *t != tag);
        self.0.len() < before
    }

    /// Render back to the `data-tag` attribute format.
    pub fn to_attribute(&self) -> String {
        self.0.join("|")
    }
}

/// Normalize a widget selection: trimmed, lowercased, blanks and duplicates dropped.
pub fn normalize_selection<I, S>(selected: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = Vec::new();
    for tag in selected {
        let tag = normalize(tag.as_ref());
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

fn normalize(tag: &str) -> String {
    tag.trim().to_lowercase()
}
