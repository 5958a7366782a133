//! Title rewrite over a fully rendered HTML buffer.
//!
//! Best-effort fallback for themes whose head rendering never asked for the
//! computed title:
//!
//! 1. First `<title …>…</title>` (any case, may span lines) → replaced
//! 2. Otherwise, before the first `</head>` (any case) → inserted
//! 3. Otherwise → buffer returned unchanged

use crate::utils::html::{Escaped, escape};
use regex::{NoExpand, Regex};
use std::{borrow::Cow, sync::LazyLock};

static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>.*?</title>").unwrap());

static RE_HEAD_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</head>").unwrap());

/// Inject a raw (unescaped) title. An empty title leaves `html` unchanged.
pub fn inject<'a>(html: &'a str, title: &str) -> Cow<'a, str> {
    if title.is_empty() {
        return Cow::Borrowed(html);
    }
    inject_escaped(html, &escape(title))
}

/// Inject a title that is already escaped.
pub fn inject_escaped<'a>(html: &'a str, title: &Escaped) -> Cow<'a, str> {
    if title.is_empty() {
        return Cow::Borrowed(html);
    }

    let element = format!("<title>{title}</title>");

    if RE_TITLE.is_match(html) {
        return RE_TITLE.replace(html, NoExpand(&element));
    }

    match RE_HEAD_CLOSE.find(html) {
        Some(head_close) => {
            let at = head_close.start();
            let mut out = String::with_capacity(html.len() + element.len() + 1);
            out.push_str(&html[..at]);
            out.push_str(&element);
            out.push('\n');
            out.push_str(&html[at..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(html),
    }
}
