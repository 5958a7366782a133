//! Site configuration management for `metaseo.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[base]`  | Site identity (title, tagline)                   |
//! | `[seo]`   | Home description/keywords, robots flags          |
//! | `[tags]`  | Tag slug → display name for archive titles       |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! tagline = "Thoughts"
//!
//! [seo]
//! home_desc = "A personal blog"
//! home_keywords = ["rust", "web"]
//! archives_index = false
//!
//! [tags]
//! js = "JavaScript"
//! ```
//!
//! `SiteConfig` is also the persistent [`OptionStore`]: a key missing from
//! `[seo]` reads as absent until [`SiteConfig::activate`] fills it.

mod base;
pub mod defaults;
mod error;
mod seo;

pub use base::BaseConfig;
pub use error::ConfigError;
pub use seo::SeoConfig;

use crate::{
    options::{self, OptionStore, OptionValue, keys},
    settings::SiteSettings,
    tags::TagCount,
};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing metaseo.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Path the config was loaded from (and is saved to)
    #[serde(skip)]
    #[educe(Default = defaults::config_file())]
    pub config_path: PathBuf,

    /// Site identity
    #[serde(default)]
    pub base: BaseConfig,

    /// Metadata options
    #[serde(default)]
    pub seo: SeoConfig,

    /// Tag display names
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to `config_path`
    pub fn save(&self) -> Result<()> {
        let content = self.to_toml()?;
        fs::write(&self.config_path, content)
            .map_err(|err| ConfigError::Io(self.config_path.clone(), err))?;
        Ok(())
    }

    /// Fill absent options with defaults. Returns the number of options written.
    pub fn activate(&mut self, tags: &[TagCount]) -> usize {
        let defaults = options::default_options(&self.base.tagline, tags);
        options::activate(self, defaults)
    }

    /// Settings snapshot for the resolver.
    pub fn settings(&self) -> SiteSettings {
        SiteSettings::from_store(self).with_tag_names(self.tags.clone())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base.title.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[base.title] must not be empty".into()
            ));
        }

        if let Some((slug, _)) = self.tags.iter().find(|(slug, _)| slug.trim().is_empty()) {
            bail!(ConfigError::Validation(format!(
                "[tags] contains an empty slug: `{slug}`"
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Option Store
// ============================================================================

impl OptionStore for SiteConfig {
    fn get(&self, key: &str) -> Option<OptionValue> {
        match key {
            keys::TITLE => Some(self.base.title.clone().into()),
            keys::TAGLINE => Some(self.base.tagline.clone().into()),
            keys::HOME_DESC => self.seo.home_desc.clone().map(OptionValue::Text),
            keys::HOME_KEYWORDS => self.seo.home_keywords.clone().map(OptionValue::List),
            _ => self.seo.flag(key).map(OptionValue::Flag),
        }
    }

    /// Values of the wrong type for `key` are ignored.
    fn set(&mut self, key: &str, value: OptionValue) {
        match (key, value) {
            (keys::TITLE, OptionValue::Text(title)) => self.base.title = title,
            (keys::TAGLINE, OptionValue::Text(tagline)) => self.base.tagline = tagline,
            (keys::HOME_DESC, OptionValue::Text(desc)) => self.seo.home_desc = Some(desc),
            (keys::HOME_KEYWORDS, OptionValue::List(keywords)) => {
                self.seo.home_keywords = Some(keywords)
            }
            (key, OptionValue::Flag(flag)) => {
                if let Some(slot) = self.seo.flag_mut(key) {
                    *slot = Some(flag);
                }
            }
            _ => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
