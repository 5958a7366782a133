//! `[base]` section configuration.
//!
//! Contains the site identity used in titles.

use serde::{Deserialize, Serialize};

/// `[base]` section in metaseo.toml - site identity.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// tagline = "Thoughts on Rust"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, appended to most page titles.
    #[serde(default)]
    pub title: String,

    /// Short site subtitle, shown after the title on the home page.
    #[serde(default)]
    pub tagline: String,
}
