//! Option store boundary and activation defaults.
//!
//! The host persists options under fixed keys (see [`keys`]). Anything the
//! store does not have, or has with the wrong type, reads as absent.
//!
//! # Defaults
//!
//! | Key               | Default                                  |
//! |-------------------|------------------------------------------|
//! | `home_desc`       | site tagline (tags stripped)             |
//! | `home_keywords`   | 50 most frequent tags (tags stripped)    |
//! | `home_index`      | `true`                                   |
//! | `home_follow`     | `true`                                   |
//! | `posts_index`     | `true`                                   |
//! | `posts_follow`    | `true`                                   |
//! | `archives_index`  | `false`                                  |
//! | `archives_follow` | `true`                                   |

use crate::{
    config::defaults,
    tags::{TOP_KEYWORDS, TagCount, top_tags},
    utils::html::strip_tags,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Option keys.
pub mod keys {
    pub const TITLE: &str = "title";
    pub const TAGLINE: &str = "tagline";
    pub const HOME_DESC: &str = "home_desc";
    pub const HOME_KEYWORDS: &str = "home_keywords";
    pub const HOME_INDEX: &str = "home_index";
    pub const HOME_FOLLOW: &str = "home_follow";
    pub const POSTS_INDEX: &str = "posts_index";
    pub const POSTS_FOLLOW: &str = "posts_follow";
    pub const ARCHIVES_INDEX: &str = "archives_index";
    pub const ARCHIVES_FOLLOW: &str = "archives_follow";
}

// ============================================================================
// Values & Store
// ============================================================================

/// A stored option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl OptionValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Key/value store for site options.
pub trait OptionStore {
    fn get(&self, key: &str) -> Option<OptionValue>;

    fn set(&mut self, key: &str, value: OptionValue);

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn text(&self, key: &str) -> String {
        self.get(key)
            .and_then(|v| v.as_text().map(str::to_owned))
            .unwrap_or_default()
    }

    fn list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(|v| v.as_list().map(<[String]>::to_vec))
            .unwrap_or_default()
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(|v| v.as_flag()).unwrap_or(false)
    }
}

/// In-memory option store.
#[derive(Debug, Clone, Default)]
pub struct MemoryOptions {
    values: HashMap<String, OptionValue>,
}

impl MemoryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.set(key, value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl OptionStore for MemoryOptions {
    fn get(&self, key: &str) -> Option<OptionValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: OptionValue) {
        self.values.insert(key.to_owned(), value);
    }
}

// ============================================================================
// Activation
// ============================================================================

/// Default option values.
pub fn default_options(tagline: &str, tags: &[TagCount]) -> Vec<(&'static str, OptionValue)> {
    vec![
        (keys::HOME_DESC, strip_tags(tagline).trim().into()),
        (keys::HOME_KEYWORDS, top_keywords(tags).into()),
        (keys::HOME_INDEX, defaults::seo::home_index().into()),
        (keys::HOME_FOLLOW, defaults::seo::home_follow().into()),
        (keys::POSTS_INDEX, defaults::seo::posts_index().into()),
        (keys::POSTS_FOLLOW, defaults::seo::posts_follow().into()),
        (keys::ARCHIVES_INDEX, defaults::seo::archives_index().into()),
        (keys::ARCHIVES_FOLLOW, defaults::seo::archives_follow().into()),
    ]
}

/// Store each default whose key is absent. Returns the number written.
///
/// Existing values are kept, including explicit `false` flags.
pub fn activate<S: OptionStore + ?Sized>(
    store: &mut S,
    values: Vec<(&'static str, OptionValue)>,
) -> usize {
    let mut written = 0;
    for (key, value) in values {
        if !store.contains(key) {
            store.set(key, value);
            written += 1;
        }
    }
    written
}

/// Recompute and store the home keywords from tag frequencies.
pub fn reload_keywords<S: OptionStore + ?Sized>(store: &mut S, tags: &[TagCount]) -> Vec<String> {
    let keywords = top_keywords(tags);
    store.set(keys::HOME_KEYWORDS, keywords.clone().into());
    keywords
}

/// Display text of the most frequent tags, tags stripped.
fn top_keywords(tags: &[TagCount]) -> Vec<String> {
    top_tags(tags, TOP_KEYWORDS)
        .into_iter()
        .map(|display| strip_tags(display).trim().to_owned())
        .filter(|display| !display.is_empty())
        .collect()
}
