//! Tag queries from archive URLs and tag frequency ranking.
//!
//! # Query Grammar
//!
//! | URL value              | include          | exclude       |
//! |------------------------|------------------|---------------|
//! | `php`                  | `php`            |               |
//! | `php,-wordpress`       | `php`            | `wordpress`   |
//! | `rust+web -java`       | `rust`, `web`    | `java`        |
//!
//! Tokens are separated by `,`, `+` or whitespace; a leading `-` excludes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Number of tags used for the default home page keywords.
pub const TOP_KEYWORDS: usize = 50;

// ============================================================================
// Tag Query
// ============================================================================

/// Included and excluded tag slugs parsed from a tag archive URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagQuery {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl TagQuery {
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::default();

        let tokens = raw
            .split(|c: char| c == ',' || c == '+' || c.is_whitespace())
            .map(str::trim)
            .filter(|t| !t.is_empty());

        for token in tokens {
            match token.strip_prefix('-') {
                Some("") => {}
                Some(excluded) => query.exclude.push(excluded.to_owned()),
                None => query.include.push(token.to_owned()),
            }
        }
        query
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

// ============================================================================
// Tag Frequency
// ============================================================================

/// One entry of a tag frequency index.
///
/// The index is a JSON array: `[{"display": "Rust", "count": 12}, ...]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub display: String,
    pub count: u64,
}

impl TagCount {
    pub fn new(display: impl Into<String>, count: u64) -> Self {
        Self {
            display: display.into(),
            count,
        }
    }

    /// Load a tag frequency index from a JSON file.
    pub fn load_index(path: &Path) -> Result<Vec<Self>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tag index `{}`", path.display()))?;
        let counts = serde_json::from_str(&content)
            .with_context(|| format!("Invalid tag index `{}`", path.display()))?;
        Ok(counts)
    }
}

/// Display names of the `limit` most frequent tags, most frequent first.
///
/// Ties keep their index order.
pub fn top_tags(counts: &[TagCount], limit: usize) -> Vec<&str> {
    let mut ranked: Vec<&TagCount> = counts.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
        .into_iter()
        .take(limit)
        .map(|tag| tag.display.as_str())
        .collect()
}
