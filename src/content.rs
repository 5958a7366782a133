//! The entry or page being displayed.
//!
//! Content items are loaded from TOML:
//!
//! ```toml
//! title = "Hello World"
//! body = "<p>First post.</p>"
//! tags = ["rust", "web"]
//!
//! [meta]
//! html_title = "Hello, World!"
//! description = "A short greeting"
//! keywords = "hello, greeting"
//! ```

use crate::{
    resolver::DESCRIPTION_MAX_CHARS,
    utils::html::{strip_tags, truncate_words},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Author-entered metadata that takes precedence over derived values.
///
/// Values are plain text; escaping happens when tags are emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl MetadataOverride {
    /// Build an override from publish form fields.
    ///
    /// Each field is tag-stripped; the description is also truncated to
    /// [`DESCRIPTION_MAX_CHARS`]. Blank fields are cleared. Returns `None`
    /// when every field is blank.
    pub fn from_submission(html_title: &str, description: &str, keywords: &str) -> Option<Self> {
        let html_title = non_blank(strip_tags(html_title).trim());
        let description = non_blank(truncate_words(
            strip_tags(description).trim(),
            DESCRIPTION_MAX_CHARS,
        ));
        let keywords = non_blank(strip_tags(keywords).trim());

        let meta = Self {
            html_title,
            description,
            keywords,
        };
        (meta != Self::default()).then_some(meta)
    }
}

fn non_blank(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_owned())
}

/// A single entry or page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentItem {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "meta", skip_serializing_if = "Option::is_none")]
    pub metadata_override: Option<MetadataOverride>,
}

impl ContentItem {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_override(mut self, meta: MetadataOverride) -> Self {
        self.metadata_override = Some(meta);
        self
    }

    /// Parse a content item from TOML.
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a content item from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content `{}`", path.display()))?;
        Self::from_str(&content).with_context(|| format!("Invalid content `{}`", path.display()))
    }

    pub fn override_title(&self) -> Option<&str> {
        self.override_field(|m| m.html_title.as_deref())
    }

    pub fn override_description(&self) -> Option<&str> {
        self.override_field(|m| m.description.as_deref())
    }

    pub fn override_keywords(&self) -> Option<&str> {
        self.override_field(|m| m.keywords.as_deref())
    }

    /// Get a non-empty override field.
    fn override_field<'a>(
        &'a self,
        field: impl FnOnce(&'a MetadataOverride) -> Option<&'a str>,
    ) -> Option<&'a str> {
        self.metadata_override
            .as_ref()
            .and_then(field)
            .filter(|v| !v.is_empty())
    }
}
