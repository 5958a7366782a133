//! Plain-text helpers for values that end up inside HTML.
//!
//! # Pipeline
//!
//! ```text
//! raw input ──► normalize_newlines() ──► strip_tags() ──► escape() ──► Escaped
//!                                            │
//!                                            └──► truncate_words() (descriptions)
//! ```
//!
//! [`Escaped`] is the only way to get escaped text, so a value can never be
//! escaped twice by accident.

use regex::Regex;
use std::{borrow::Cow, fmt, sync::LazyLock};

// ============================================================================
// Escaped Text
// ============================================================================

/// Text that has been HTML-escaped exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Escaped(String);

impl Escaped {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Escaped {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Escaped {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// Escaping & Stripping
// ============================================================================

/// Escape HTML special characters (`&`, `<`, `>`, `"`).
pub fn escape(s: &str) -> Escaped {
    if !s.contains(['<', '>', '&', '"']) {
        return Escaped(s.to_owned());
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Escaped(result)
}

/// Remove HTML comments and tags.
///
/// A `<` followed by whitespace is text (`a < b`), not a tag. An unterminated
/// tag runs to the end of input and is removed.
pub fn strip_tags(s: &str) -> Cow<'_, str> {
    static RE_TAG: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?s)<!--.*?(?:-->|$)|<[^\s<>][^>]*(?:>|$)").unwrap()
    });

    if !s.contains('<') {
        return Cow::Borrowed(s);
    }
    RE_TAG.replace_all(s, "")
}

/// Strip tags, then escape.
#[inline]
pub fn sanitize(s: &str) -> Escaped {
    escape(&strip_tags(s))
}

/// Replace `\r\n` and `\n` with a single space each.
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\n') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\r\n", " ").replace('\n', " "))
}

// ============================================================================
// Truncation & Lists
// ============================================================================

/// Truncate to at most `max_chars` characters without splitting a word.
///
/// Leading and trailing whitespace of the result is trimmed. When the first
/// word alone is longer than `max_chars`, nothing fits and `""` is returned.
pub fn truncate_words(text: &str, max_chars: usize) -> &str {
    let text = text.trim_start();

    let Some((cut, next)) = text.char_indices().nth(max_chars) else {
        return text.trim_end();
    };

    let head = &text[..cut];
    if next.is_whitespace() {
        return head.trim_end();
    }

    match head.rfind(char::is_whitespace) {
        Some(pos) => head[..pos].trim_end(),
        None => "",
    }
}

/// Join items as natural-language list: `a`, `a and b`, `a, b and c`.
pub fn and_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [one] => one.as_ref().to_owned(),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", init.join(", "), last.as_ref())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
