//! Matched routes: which kind of page is being rendered.
//!
//! # Rule Names
//!
//! | Rule                       | Alias     | Kind              |
//! |----------------------------|-----------|-------------------|
//! | `display_home`             | `home`    | `Home`            |
//! | `display_entries`          | `entries` | `EntryList`       |
//! | `display_entries_by_date`  | `date`    | `EntryListByDate` |
//! | `display_entries_by_tag`   | `tag`     | `EntryListByTag`  |
//! | `display_entry`            | `entry`   | `Entry`           |
//! | `display_page`             | `page`    | `Page`            |
//! | `display_search`           | `search`  | `Search`          |
//! | `display_404`              | `404`     | `NotFound`        |
//! | anything else              |           | `Other`           |

use std::{collections::BTreeMap, fmt};

/// Route parameter names.
pub mod param {
    pub const TAG: &str = "tag";
    pub const DAY: &str = "day";
    pub const MONTH: &str = "month";
    pub const YEAR: &str = "year";
    pub const CRITERIA: &str = "criteria";
}

/// Logical page type resolved by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Home,
    EntryList,
    EntryListByDate,
    EntryListByTag,
    Entry,
    Page,
    Search,
    NotFound,
    Other,
}

impl RouteKind {
    /// Map a router rule name (or its short alias) to a kind.
    pub fn from_rule(name: &str) -> Self {
        match name.trim() {
            "display_home" | "home" => Self::Home,
            "display_entries" | "entries" => Self::EntryList,
            "display_entries_by_date" | "date" => Self::EntryListByDate,
            "display_entries_by_tag" | "tag" => Self::EntryListByTag,
            "display_entry" | "entry" => Self::Entry,
            "display_page" | "page" => Self::Page,
            "display_search" | "search" => Self::Search,
            "display_404" | "404" => Self::NotFound,
            _ => Self::Other,
        }
    }

    /// Canonical rule name.
    pub const fn rule_name(self) -> &'static str {
        match self {
            Self::Home => "display_home",
            Self::EntryList => "display_entries",
            Self::EntryListByDate => "display_entries_by_date",
            Self::EntryListByTag => "display_entries_by_tag",
            Self::Entry => "display_entry",
            Self::Page => "display_page",
            Self::Search => "display_search",
            Self::NotFound => "display_404",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule_name())
    }
}

/// The rule that matched the current request, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub kind: RouteKind,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn new(kind: RouteKind) -> Self {
        Self {
            kind,
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Get a parameter, treating an empty value as absent.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Parse a `key=value` route parameter.
pub fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected `key=value`, got `{s}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty parameter name in `{s}`"));
    }
    Ok((key.to_owned(), value.to_owned()))
}
