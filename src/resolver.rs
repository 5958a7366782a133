//! Route-aware metadata derivation.
//!
//! [`resolve`] turns the matched route, the displayed content item and the
//! site settings into the four metadata strings.
//!
//! # Rule Table
//!
//! | Kind                | Title                                  | Description      | Keywords         | Robots    |
//! |---------------------|----------------------------------------|------------------|------------------|-----------|
//! | `Home`              | site title ` - ` tagline               | home description | home keywords    | home      |
//! | `EntryList`         | site title ` - ` tagline               |                  |                  | archives  |
//! | `EntryListByDate`   | `Archive for <d> <Month> <y>  - ` site |                  |                  | archives  |
//! | `EntryListByTag`    | `<tags> Archive but not <tags> Archive`|                  | raw `tag` param  | archives  |
//! | `Entry`, `Page`     | html title or title ` - ` site         | override/excerpt | override/tags    | posts     |
//! | `Search`            | `Search Results for <q> - ` site       |                  |                  | `noindex, follow` |
//! | `NotFound`          | `Page Not Found - ` site               |                  |                  | `noindex, follow` |
//! | `Other`             |                                        |                  |                  | `noindex, follow` |
//!
//! Without a matched route every field is empty.

use crate::{
    content::ContentItem,
    route::{RouteKind, RouteMatch, param},
    settings::SiteSettings,
    tags::TagQuery,
    utils::{
        date::month_name,
        html::{Escaped, and_list, normalize_newlines, sanitize, strip_tags, truncate_words},
    },
};
use std::borrow::Cow;

/// Maximum length of a derived description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Separator between a page title and the site title.
const TITLE_SEPARATOR: &str = " - ";

/// Robots directive for matched kinds without a configurable policy.
const DEFAULT_ROBOTS: &str = "noindex, follow";

// ============================================================================
// Result
// ============================================================================

/// Metadata for one request.
///
/// Each tag is either empty (omit) or a complete, escaped element line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataResult {
    pub title: Escaped,
    pub description_tag: String,
    pub keywords_tag: String,
    pub robots_tag: String,
}

impl MetadataResult {
    /// Head hook output: keywords, description, robots, in that order.
    pub fn head_tags(&self) -> String {
        [&self.keywords_tag, &self.description_tag, &self.robots_tag]
            .into_iter()
            .map(String::as_str)
            .collect()
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Derive all metadata for a request.
pub fn resolve(
    route: Option<&RouteMatch>,
    content: Option<&ContentItem>,
    settings: &SiteSettings,
) -> MetadataResult {
    let Some(route) = route else {
        return MetadataResult::default();
    };

    MetadataResult {
        title: resolve_title(Some(route), content, settings),
        description_tag: description_tag(route, content, settings),
        keywords_tag: keywords_tag(route, content, settings),
        robots_tag: robots_tag(route.kind, settings),
    }
}

/// Derive the page title, tag-stripped and escaped.
pub fn resolve_title(
    route: Option<&RouteMatch>,
    content: Option<&ContentItem>,
    settings: &SiteSettings,
) -> Escaped {
    let Some(route) = route else {
        return Escaped::default();
    };
    let title = title_text(route, content, settings);
    if title.is_empty() {
        return Escaped::default();
    }
    sanitize(&title)
}

// ============================================================================
// Title
// ============================================================================

fn title_text(route: &RouteMatch, content: Option<&ContentItem>, settings: &SiteSettings) -> String {
    let site = settings.title.as_str();

    match route.kind {
        RouteKind::Home | RouteKind::EntryList => {
            with_suffix(site.to_owned(), &settings.tagline)
        }
        RouteKind::EntryListByDate => with_suffix(date_archive_title(route), site),
        RouteKind::EntryListByTag => with_suffix(tag_archive_title(route, settings), site),
        RouteKind::Entry | RouteKind::Page => {
            let page = content
                .map(|item| item.override_title().unwrap_or(&item.title))
                .unwrap_or_default();
            with_suffix(page.to_owned(), site)
        }
        RouteKind::Search => match route.param(param::CRITERIA) {
            Some(criteria) => with_suffix(format!("Search Results for {criteria}"), site),
            None => site.to_owned(),
        },
        RouteKind::NotFound => with_suffix("Page Not Found".to_owned(), site),
        RouteKind::Other => String::new(),
    }
}

/// Append `" - " + suffix`, omitting whichever side is empty.
fn with_suffix(mut title: String, suffix: &str) -> String {
    if suffix.is_empty() {
        return title;
    }
    if title.is_empty() {
        return suffix.to_owned();
    }
    title.push_str(TITLE_SEPARATOR);
    title.push_str(suffix);
    title
}

/// `Archive for [day ][Month ][year ]`; the trailing space is kept.
fn date_archive_title(route: &RouteMatch) -> String {
    let mut out = String::from("Archive for ");
    let month = route.param(param::MONTH).and_then(month_name);
    let parts = [route.param(param::DAY), month, route.param(param::YEAR)];

    for part in parts.into_iter().flatten() {
        out.push_str(part);
        out.push(' ');
    }
    out
}

/// `<include> Archive[ but not <exclude> Archive]`, using tag display names.
fn tag_archive_title(route: &RouteMatch, settings: &SiteSettings) -> String {
    let query = TagQuery::parse(route.param(param::TAG).unwrap_or_default());

    let included = and_list(&display_names(&query.include, settings));
    let mut out = if included.is_empty() {
        "Archive".to_owned()
    } else {
        format!("{included} Archive")
    };

    if !query.exclude.is_empty() {
        out.push_str(" but not ");
        out.push_str(&and_list(&display_names(&query.exclude, settings)));
        out.push_str(" Archive");
    }
    out
}

fn display_names<'a>(slugs: &'a [String], settings: &'a SiteSettings) -> Vec<&'a str> {
    slugs.iter().map(|slug| settings.tag_display(slug)).collect()
}

// ============================================================================
// Description
// ============================================================================

fn description_tag(route: &RouteMatch, content: Option<&ContentItem>, settings: &SiteSettings) -> String {
    let text = description_text(route.kind, content, settings);
    let description = sanitize(normalize_newlines(&text).trim());
    if description.is_empty() {
        return String::new();
    }
    format!("<meta name=\"description\" content=\"{description}\" >\n")
}

fn description_text<'a>(
    kind: RouteKind,
    content: Option<&'a ContentItem>,
    settings: &'a SiteSettings,
) -> Cow<'a, str> {
    match kind {
        RouteKind::Home => Cow::Borrowed(&settings.home_description),
        RouteKind::Entry | RouteKind::Page => match content {
            Some(item) => match item.override_description() {
                Some(description) => Cow::Borrowed(description),
                None => Cow::Owned(excerpt(&item.body)),
            },
            None => Cow::Borrowed(""),
        },
        RouteKind::EntryList
        | RouteKind::EntryListByDate
        | RouteKind::EntryListByTag
        | RouteKind::Search
        | RouteKind::NotFound
        | RouteKind::Other => Cow::Borrowed(""),
    }
}

/// Plain-text body truncated to [`DESCRIPTION_MAX_CHARS`] at a word boundary.
fn excerpt(body: &str) -> String {
    let plain = strip_tags(body);
    let plain = normalize_newlines(&plain);
    truncate_words(&plain, DESCRIPTION_MAX_CHARS).to_owned()
}

// ============================================================================
// Keywords
// ============================================================================

fn keywords_tag(route: &RouteMatch, content: Option<&ContentItem>, settings: &SiteSettings) -> String {
    let Some(text) = keywords_text(route, content, settings) else {
        return String::new();
    };
    let keywords = sanitize(&text);
    if keywords.is_empty() {
        return String::new();
    }
    format!("<meta name=\"keywords\" content=\"{keywords}\">\n")
}

fn keywords_text<'a>(
    route: &'a RouteMatch,
    content: Option<&'a ContentItem>,
    settings: &'a SiteSettings,
) -> Option<Cow<'a, str>> {
    match route.kind {
        RouteKind::Entry | RouteKind::Page => {
            let item = content?;
            match item.override_keywords() {
                Some(keywords) => Some(Cow::Borrowed(keywords)),
                None if !item.tags.is_empty() => Some(Cow::Owned(item.tags.join(", "))),
                None => None,
            }
        }
        RouteKind::EntryListByTag => route.param(param::TAG).map(Cow::Borrowed),
        RouteKind::Home if !settings.home_keywords.is_empty() => {
            Some(Cow::Owned(settings.home_keywords.join(", ")))
        }
        RouteKind::Home
        | RouteKind::EntryList
        | RouteKind::EntryListByDate
        | RouteKind::Search
        | RouteKind::NotFound
        | RouteKind::Other => None,
    }
}

// ============================================================================
// Robots
// ============================================================================

fn robots_tag(kind: RouteKind, settings: &SiteSettings) -> String {
    format!(
        "<meta name=\"robots\" content=\"{}\" >\n",
        robots_directive(kind, settings)
    )
}

fn robots_directive(kind: RouteKind, settings: &SiteSettings) -> &'static str {
    match kind {
        RouteKind::Entry | RouteKind::Page => settings.posts.directive(),
        RouteKind::Home => settings.home.directive(),
        RouteKind::EntryListByTag | RouteKind::EntryListByDate | RouteKind::EntryList => {
            settings.archives.directive()
        }
        RouteKind::Search | RouteKind::NotFound | RouteKind::Other => DEFAULT_ROBOTS,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content::MetadataOverride, settings::RobotsPolicy};
    use std::collections::BTreeMap;

    fn settings() -> SiteSettings {
        SiteSettings {
            title: "My Blog".into(),
            tagline: "Thoughts".into(),
            home_description: "A blog about things".into(),
            home_keywords: vec!["rust".into(), "web".into()],
            home: RobotsPolicy::new(true, true),
            posts: RobotsPolicy::new(true, false),
            archives: RobotsPolicy::new(false, true),
            tag_names: BTreeMap::new(),
        }
    }

    fn route(kind: RouteKind) -> RouteMatch {
        RouteMatch::new(kind)
    }

    fn title_of(route: &RouteMatch, settings: &SiteSettings) -> String {
        resolve(Some(route), None, settings).title.into_string()
    }

    // ------------------------------------------------------------------------
    // Title
    // ------------------------------------------------------------------------

    #[test]
    fn test_home_example() {
        let result = resolve(Some(&route(RouteKind::Home)), None, &settings());
        assert_eq!(result.title, "My Blog - Thoughts");
        assert_eq!(
            result.robots_tag,
            "<meta name=\"robots\" content=\"index, follow\" >\n"
        );
    }

    #[test]
    fn test_home_title_without_tagline() {
        let mut settings = settings();
        settings.tagline.clear();
        assert_eq!(title_of(&route(RouteKind::Home), &settings), "My Blog");
        assert_eq!(title_of(&route(RouteKind::EntryList), &settings), "My Blog");
    }

    #[test]
    fn test_entry_list_title_matches_home() {
        assert_eq!(
            title_of(&route(RouteKind::EntryList), &settings()),
            "My Blog - Thoughts"
        );
    }

    #[test]
    fn test_date_archive_title_full() {
        let route = route(RouteKind::EntryListByDate)
            .with_param("day", "5")
            .with_param("month", "3")
            .with_param("year", "2024");
        assert_eq!(
            title_of(&route, &settings()),
            "Archive for 5 March 2024  - My Blog"
        );
    }

    #[test]
    fn test_date_archive_title_year_only() {
        let route = route(RouteKind::EntryListByDate).with_param("year", "2023");
        assert_eq!(title_of(&route, &settings()), "Archive for 2023  - My Blog");
    }

    #[test]
    fn test_date_archive_title_every_month() {
        let expected = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];
        for (i, name) in expected.iter().enumerate() {
            let route = route(RouteKind::EntryListByDate).with_param("month", (i + 1).to_string());
            assert_eq!(
                title_of(&route, &settings()),
                format!("Archive for {name}  - My Blog")
            );
        }
    }

    #[test]
    fn test_date_archive_title_invalid_month_omitted() {
        let route = route(RouteKind::EntryListByDate)
            .with_param("month", "13")
            .with_param("year", "2024");
        assert_eq!(title_of(&route, &settings()), "Archive for 2024  - My Blog");
    }

    #[test]
    fn test_tag_archive_example() {
        let route = route(RouteKind::EntryListByTag).with_param("tag", "php,-wordpress");
        assert_eq!(
            title_of(&route, &settings()),
            "php Archive but not wordpress Archive - My Blog"
        );
    }

    #[test]
    fn test_tag_archive_include_only() {
        let route = route(RouteKind::EntryListByTag).with_param("tag", "rust");
        assert_eq!(title_of(&route, &settings()), "rust Archive - My Blog");
    }

    #[test]
    fn test_tag_archive_and_lists_with_display_names() {
        let settings = settings().with_tag_names(BTreeMap::from([
            ("js".to_string(), "JavaScript".to_string()),
            ("cpp".to_string(), "C++".to_string()),
        ]));
        let route = route(RouteKind::EntryListByTag).with_param("tag", "rust,web,js,-cpp,-go");
        assert_eq!(
            title_of(&route, &settings),
            "rust, web and JavaScript Archive but not C++ and go Archive - My Blog"
        );
    }

    #[test]
    fn test_entry_title_plain_and_override() {
        let item = ContentItem::new("Hello World", "body");
        let result = resolve(Some(&route(RouteKind::Entry)), Some(&item), &settings());
        assert_eq!(result.title, "Hello World - My Blog");

        let item = item.with_override(MetadataOverride {
            html_title: Some("Custom Title".into()),
            ..MetadataOverride::default()
        });
        let result = resolve(Some(&route(RouteKind::Page)), Some(&item), &settings());
        assert_eq!(result.title, "Custom Title - My Blog");
    }

    #[test]
    fn test_entry_title_without_content_falls_back_to_site() {
        assert_eq!(title_of(&route(RouteKind::Entry), &settings()), "My Blog");
    }

    #[test]
    fn test_search_title() {
        let route_with_query = route(RouteKind::Search).with_param("criteria", "rust traits");
        assert_eq!(
            title_of(&route_with_query, &settings()),
            "Search Results for rust traits - My Blog"
        );
        assert_eq!(title_of(&route(RouteKind::Search), &settings()), "My Blog");
    }

    #[test]
    fn test_not_found_title() {
        assert_eq!(
            title_of(&route(RouteKind::NotFound), &settings()),
            "Page Not Found - My Blog"
        );
    }

    #[test]
    fn test_title_escaped_once_and_stripped() {
        let item = ContentItem::new("<b>Fish</b> & \"Chips\"", "");
        let result = resolve(Some(&route(RouteKind::Entry)), Some(&item), &settings());
        assert_eq!(result.title, "Fish &amp; &quot;Chips&quot; - My Blog");

        let route = route(RouteKind::Search).with_param("criteria", "<script>x</script>&");
        assert_eq!(
            title_of(&route, &settings()),
            "Search Results for x&amp; - My Blog"
        );
    }

    #[test]
    fn test_title_keeps_backslashes() {
        let item = ContentItem::new(r"C:\path", "");
        let result = resolve(Some(&route(RouteKind::Entry)), Some(&item), &settings());
        assert_eq!(result.title, r"C:\path - My Blog");
    }

    // ------------------------------------------------------------------------
    // Other / no route
    // ------------------------------------------------------------------------

    #[test]
    fn test_other_kind() {
        let result = resolve(Some(&route(RouteKind::Other)), None, &settings());
        assert!(result.title.is_empty());
        assert_eq!(
            result.robots_tag,
            "<meta name=\"robots\" content=\"noindex, follow\" >\n"
        );
        assert!(result.description_tag.is_empty());
        assert!(result.keywords_tag.is_empty());
    }

    #[test]
    fn test_no_route_is_empty() {
        let item = ContentItem::new("Title", "Body").with_tags(["a"]);
        let result = resolve(None, Some(&item), &settings());
        assert_eq!(result, MetadataResult::default());
        assert_eq!(result.head_tags(), "");
        assert!(resolve_title(None, Some(&item), &settings()).is_empty());
    }

    // ------------------------------------------------------------------------
    // Description
    // ------------------------------------------------------------------------

    #[test]
    fn test_home_description() {
        let result = resolve(Some(&route(RouteKind::Home)), None, &settings());
        assert_eq!(
            result.description_tag,
            "<meta name=\"description\" content=\"A blog about things\" >\n"
        );
    }

    #[test]
    fn test_entry_description_override() {
        let item = ContentItem::new("t", "body text").with_override(MetadataOverride {
            description: Some("Line one\r\nLine two\nthree & more".into()),
            ..MetadataOverride::default()
        });
        let result = resolve(Some(&route(RouteKind::Entry)), Some(&item), &settings());
        assert_eq!(
            result.description_tag,
            "<meta name=\"description\" content=\"Line one Line two three &amp; more\" >\n"
        );
    }

    #[test]
    fn test_entry_description_excerpt_from_html_body() {
        let item = ContentItem::new("t", "<p>First paragraph.</p>\n<p>Second <em>one</em>.</p>");
        let result = resolve(Some(&route(RouteKind::Page)), Some(&item), &settings());
        assert_eq!(
            result.description_tag,
            "<meta name=\"description\" content=\"First paragraph. Second one.\" >\n"
        );
    }

    #[test]
    fn test_entry_description_truncated_at_word() {
        let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
        let mut body = String::new();
        let mut i = 0;
        while body.chars().count() < 500 {
            if !body.is_empty() {
                body.push(' ');
            }
            body.push_str(words[i % words.len()]);
            i += 1;
        }
        let body: String = body.chars().take(500).collect();

        let item = ContentItem::new("t", body.as_str());
        let result = resolve(Some(&route(RouteKind::Entry)), Some(&item), &settings());

        let content = result
            .description_tag
            .strip_prefix("<meta name=\"description\" content=\"")
            .and_then(|s| s.strip_suffix("\" >\n"))
            .unwrap();
        assert!(content.chars().count() <= DESCRIPTION_MAX_CHARS);
        assert!(!content.is_empty());
        assert!(content.split(' ').all(|w| words.contains(&w)));
        assert!(body.starts_with(content));
    }

    #[test]
    fn test_description_absent_for_other_kinds() {
        let item = ContentItem::new("t", "body");
        for kind in [
            RouteKind::EntryList,
            RouteKind::EntryListByDate,
            RouteKind::EntryListByTag,
            RouteKind::Search,
            RouteKind::NotFound,
        ] {
            let result = resolve(Some(&route(kind)), Some(&item), &settings());
            assert_eq!(result.description_tag, "", "{kind}");
        }
    }

    #[test]
    fn test_description_empty_body_omitted() {
        let item = ContentItem::new("t", "<img src=\"x.png\">");
        let result = resolve(Some(&route(RouteKind::Entry)), Some(&item), &settings());
        assert_eq!(result.description_tag, "");
    }

    // ------------------------------------------------------------------------
    // Keywords
    // ------------------------------------------------------------------------

    #[test]
    fn test_entry_keywords_from_tags_and_override() {
        let item = ContentItem::new("t", "b").with_tags(["rust", "web & api"]);
        let result = resolve(Some(&route(RouteKind::Entry)), Some(&item), &settings());
        assert_eq!(
            result.keywords_tag,
            "<meta name=\"keywords\" content=\"rust, web &amp; api\">\n"
        );

        let item = item.with_override(MetadataOverride {
            keywords: Some("custom, words".into()),
            ..MetadataOverride::default()
        });
        let result = resolve(Some(&route(RouteKind::Entry)), Some(&item), &settings());
        assert_eq!(
            result.keywords_tag,
            "<meta name=\"keywords\" content=\"custom, words\">\n"
        );
    }

    #[test]
    fn test_entry_keywords_absent_without_tags() {
        let item = ContentItem::new("t", "b");
        let result = resolve(Some(&route(RouteKind::Entry)), Some(&item), &settings());
        assert_eq!(result.keywords_tag, "");
    }

    #[test]
    fn test_tag_keywords_raw_param() {
        let route = route(RouteKind::EntryListByTag).with_param("tag", "php,-wordpress");
        let result = resolve(Some(&route), None, &settings());
        assert_eq!(
            result.keywords_tag,
            "<meta name=\"keywords\" content=\"php,-wordpress\">\n"
        );
    }

    #[test]
    fn test_home_keywords() {
        let result = resolve(Some(&route(RouteKind::Home)), None, &settings());
        assert_eq!(
            result.keywords_tag,
            "<meta name=\"keywords\" content=\"rust, web\">\n"
        );

        let mut settings = settings();
        settings.home_keywords.clear();
        let result = resolve(Some(&route(RouteKind::Home)), None, &settings);
        assert_eq!(result.keywords_tag, "");
    }

    // ------------------------------------------------------------------------
    // Robots
    // ------------------------------------------------------------------------

    #[test]
    fn test_robots_per_kind() {
        let settings = settings();
        let cases = [
            (RouteKind::Entry, "index, nofollow"),
            (RouteKind::Page, "index, nofollow"),
            (RouteKind::Home, "index, follow"),
            (RouteKind::EntryList, "noindex, follow"),
            (RouteKind::EntryListByDate, "noindex, follow"),
            (RouteKind::EntryListByTag, "noindex, follow"),
            (RouteKind::Search, "noindex, follow"),
            (RouteKind::NotFound, "noindex, follow"),
        ];
        for (kind, directive) in cases {
            assert_eq!(robots_directive(kind, &settings), directive, "{kind}");
        }

        let mut strict = settings.clone();
        strict.archives = RobotsPolicy::new(true, false);
        assert_eq!(
            robots_directive(RouteKind::EntryListByTag, &strict),
            "index, nofollow"
        );
    }

    #[test]
    fn test_head_tags_order() {
        let result = resolve(Some(&route(RouteKind::Home)), None, &settings());
        assert_eq!(
            result.head_tags(),
            "<meta name=\"keywords\" content=\"rust, web\">\n\
             <meta name=\"description\" content=\"A blog about things\" >\n\
             <meta name=\"robots\" content=\"index, follow\" >\n"
        );
    }

    #[test]
    fn test_missing_settings_degrade_to_empty() {
        let settings = SiteSettings::default();
        let result = resolve(Some(&route(RouteKind::Home)), None, &settings);
        assert!(result.title.is_empty());
        assert_eq!(result.description_tag, "");
        assert_eq!(result.keywords_tag, "");
        assert_eq!(
            result.robots_tag,
            "<meta name=\"robots\" content=\"noindex, nofollow\" >\n"
        );
    }

    #[test]
    fn test_excerpt_escapes_body_entities_as_text() {
        let item = ContentItem::new("Post", "<p>AT&amp;T news</p>");
        let result = resolve(Some(&route(RouteKind::Entry)), Some(&item), &settings());
        assert_eq!(
            result.description_tag,
            "<meta name=\"description\" content=\"AT&amp;amp;T news\" >\n"
        );
    }
}
