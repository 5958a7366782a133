//! Site config initialization and keyword reload.
//!
//! Both commands write `metaseo.toml`; `init` creates it, `reload` rewrites
//! the home keywords of an existing one.

use crate::{config::SiteConfig, log, options, tags::TagCount};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Create a new config with every option set to its default.
///
/// Returns the number of options written.
pub fn init_site(
    config_path: &Path,
    title: &str,
    tagline: &str,
    tags: Option<&Path>,
) -> Result<usize> {
    if config_path.exists() {
        bail!(
            "Config file `{}` already exists. Remove it manually or init in a different path.",
            config_path.display()
        );
    }

    let tags = load_tags(tags)?;

    let mut config = SiteConfig {
        config_path: config_path.to_path_buf(),
        ..SiteConfig::default()
    };
    config.base.title = title.to_owned();
    config.base.tagline = tagline.to_owned();
    let written = config.activate(&tags);
    config.validate()?;

    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    config.save()?;

    log!("init"; "wrote {} options to {}", written, config_path.display());
    Ok(written)
}

/// Recompute the home keywords from a tag index and save the config.
pub fn reload_site(config_path: &Path, tags: &Path) -> Result<Vec<String>> {
    let mut config = SiteConfig::from_path(config_path)?;
    let tags = TagCount::load_index(tags)?;

    let keywords = options::reload_keywords(&mut config, &tags);
    config.save()?;

    log!("reload"; "keywords have been reloaded ({} tags)", keywords.len());
    Ok(keywords)
}

fn load_tags(path: Option<&Path>) -> Result<Vec<TagCount>> {
    match path {
        Some(path) => TagCount::load_index(path),
        None => Ok(Vec::new()),
    }
}
