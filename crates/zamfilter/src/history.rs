//! # Address Bar
//!
//! Filter state lives in the page URL so a filtered list can be reloaded or
//! shared. Every filter change rewrites one query parameter through a
//! non-navigating history replacement.
//!
//! Replacement is best effort: a [`History`] may refuse it, in which case the
//! state is simply not persisted.
//!
//! The helpers below follow `URLSearchParams` semantics: setting a parameter
//! replaces its first occurrence in place and drops any others; removing it
//! drops every occurrence. Other parameters keep their order.

use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("history replacement is not supported")]
pub struct HistoryUnsupported;

/// The browsing context's address bar.
pub trait History {
    /// The current URL.
    fn location(&self) -> &Url;

    /// Replace the current URL without navigating.
    fn replace_state(&mut self, url: Url) -> Result<(), HistoryUnsupported>;
}

/// A history that accepts every replacement and remembers how many it took.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    current: Url,
    replacements: usize,
}

impl MemoryHistory {
    pub fn new(url: Url) -> Self {
        Self {
            current: url,
            replacements: 0,
        }
    }

    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &Url {
        &self.current
    }

    fn replace_state(&mut self, url: Url) -> Result<(), HistoryUnsupported> {
        self.current = url;
        self.replacements += 1;
        Ok(())
    }
}

/// A browsing context without history replacement: the URL never changes.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    current: Url,
}

impl FixedLocation {
    pub fn new(url: Url) -> Self {
        Self { current: url }
    }
}

impl History for FixedLocation {
    fn location(&self) -> &Url {
        &self.current
    }

    fn replace_state(&mut self, _url: Url) -> Result<(), HistoryUnsupported> {
        Err(HistoryUnsupported)
    }
}

/// The first value of `name`, or an empty string.
pub fn query_param(url: &Url, name: &str) -> String {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// `url` with `name` set to `value`, or removed when `value` is empty.
pub fn with_param(url: &Url, name: &str, value: &str) -> Url {
    let mut pairs = pairs(url);
    if value.is_empty() {
        pairs.retain(|(key, _)| key != name);
    } else if let Some(first) = pairs.iter().position(|(key, _)| key == name) {
        pairs[first].1 = value.to_string();
        let mut index = 0;
        pairs.retain(|(key, _)| {
            let keep = key != name || index == first;
            index += 1;
            keep
        });
    } else {
        pairs.push((name.to_string(), value.to_string()));
    }
    rebuild(url, &pairs)
}

/// `url` with every `name` parameter replaced by one per value, appended at the end.
pub fn with_repeated_param<S: AsRef<str>>(url: &Url, name: &str, values: &[S]) -> Url {
    let mut pairs = pairs(url);
    pairs.retain(|(key, _)| key != name);
    pairs.extend(
        values
            .iter()
            .map(|v| (name.to_string(), v.as_ref().to_string())),
    );
    rebuild(url, &pairs)
}

/// The URL of `link` carrying a `back` parameter that returns to `current`
/// (path and query, without fragment).
pub fn backlink(current: &Url, link: &Url) -> Url {
    let back = match current.query() {
        Some(query) => format!("{}?{}", current.path(), query),
        None => current.path().to_string(),
    };
    with_param(link, "back", &back)
}

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn rebuild(url: &Url, pairs: &[(String, String)]) -> Url {
    let mut url = url.clone();
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
    url
}
