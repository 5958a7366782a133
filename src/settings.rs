//! Read-only site settings for one request.

use crate::options::{OptionStore, keys};
use std::collections::BTreeMap;

/// Index/follow choice for one group of pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub index: bool,
    pub follow: bool,
}

impl RobotsPolicy {
    pub const fn new(index: bool, follow: bool) -> Self {
        Self { index, follow }
    }

    /// The `content` value of the robots meta tag.
    pub const fn directive(self) -> &'static str {
        match (self.index, self.follow) {
            (true, true) => "index, follow",
            (true, false) => "index, nofollow",
            (false, true) => "noindex, follow",
            (false, false) => "noindex, nofollow",
        }
    }
}

/// Site-wide values the resolver reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSettings {
    pub title: String,
    pub tagline: String,
    pub home_description: String,
    pub home_keywords: Vec<String>,
    pub home: RobotsPolicy,
    pub posts: RobotsPolicy,
    pub archives: RobotsPolicy,
    /// Tag slug → display name.
    pub tag_names: BTreeMap<String, String>,
}

impl SiteSettings {
    /// Read settings from an option store. Absent values read as empty/`false`.
    pub fn from_store<S: OptionStore + ?Sized>(store: &S) -> Self {
        Self {
            title: store.text(keys::TITLE),
            tagline: store.text(keys::TAGLINE),
            home_description: store.text(keys::HOME_DESC),
            home_keywords: store.list(keys::HOME_KEYWORDS),
            home: RobotsPolicy::new(store.flag(keys::HOME_INDEX), store.flag(keys::HOME_FOLLOW)),
            posts: RobotsPolicy::new(
                store.flag(keys::POSTS_INDEX),
                store.flag(keys::POSTS_FOLLOW),
            ),
            archives: RobotsPolicy::new(
                store.flag(keys::ARCHIVES_INDEX),
                store.flag(keys::ARCHIVES_FOLLOW),
            ),
            tag_names: BTreeMap::new(),
        }
    }

    pub fn with_tag_names(mut self, tag_names: BTreeMap<String, String>) -> Self {
        self.tag_names = tag_names;
        self
    }

    /// Display name for a tag slug, falling back to the slug itself.
    pub fn tag_display<'a>(&'a self, slug: &'a str) -> &'a str {
        self.tag_names
            .get(slug)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(slug)
    }
}
