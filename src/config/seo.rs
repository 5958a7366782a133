//! `[seo]` section configuration.
//!
//! Every field is optional: a missing key is an absent option, which
//! activation fills from [`defaults::seo`](super::defaults::seo).

use crate::options::keys;
use serde::{Deserialize, Serialize};

/// `[seo]` section in metaseo.toml - home page metadata and robots flags.
///
/// # Example
/// ```toml
/// [seo]
/// home_desc = "A blog about Rust"
/// home_keywords = ["rust", "web"]
/// home_index = true
/// archives_index = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeoConfig {
    /// Home page meta description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_desc: Option<String>,

    /// Home page meta keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_keywords: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_index: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_follow: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_index: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_follow: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archives_index: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archives_follow: Option<bool>,
}

impl SeoConfig {
    /// Robots flag stored under an option key.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match key {
            keys::HOME_INDEX => self.home_index,
            keys::HOME_FOLLOW => self.home_follow,
            keys::POSTS_INDEX => self.posts_index,
            keys::POSTS_FOLLOW => self.posts_follow,
            keys::ARCHIVES_INDEX => self.archives_index,
            keys::ARCHIVES_FOLLOW => self.archives_follow,
            _ => None,
        }
    }

    /// Mutable slot for a robots flag; `None` if `key` is not a flag.
    pub fn flag_mut(&mut self, key: &str) -> Option<&mut Option<bool>> {
        match key {
            keys::HOME_INDEX => Some(&mut self.home_index),
            keys::HOME_FOLLOW => Some(&mut self.home_follow),
            keys::POSTS_INDEX => Some(&mut self.posts_index),
            keys::POSTS_FOLLOW => Some(&mut self.posts_follow),
            keys::ARCHIVES_INDEX => Some(&mut self.archives_index),
            keys::ARCHIVES_FOLLOW => Some(&mut self.archives_follow),
            _ => None,
        }
    }
}
