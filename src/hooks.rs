//! Host-facing hooks.
//!
//! ```text
//! request ──► router match ──► RequestContext
//!                                  │
//!             ┌────────────────────┴─────────────────────┐
//!             ▼                                          ▼
//!     SeoHooks::head()                        SeoHooks::final_output()
//!     (in <head>, priority 6)                 (post-render buffer)
//!     keywords + description + robots         title rewrite/insert
//! ```

use crate::{
    content::ContentItem,
    inject::inject_escaped,
    resolver::{MetadataResult, resolve, resolve_title},
    route::RouteMatch,
    settings::SiteSettings,
    utils::html::Escaped,
};
use std::borrow::Cow;

/// Head hook priority. Lower runs first; most head consumers use 8 or more.
pub const HEAD_PRIORITY: u8 = 6;

/// What the host knows about the current request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// `None` when no rule matched (e.g. a 404 raised before routing).
    pub route: Option<RouteMatch>,
    /// The entry or page being displayed, if any.
    pub content: Option<ContentItem>,
}

impl RequestContext {
    pub fn new(route: Option<RouteMatch>, content: Option<ContentItem>) -> Self {
        Self { route, content }
    }
}

/// Metadata hooks bound to one set of site settings.
#[derive(Debug, Clone)]
pub struct SeoHooks {
    settings: SiteSettings,
}

impl SeoHooks {
    pub fn new(settings: SiteSettings) -> Self {
        Self { settings }
    }

    pub const fn priority(&self) -> u8 {
        HEAD_PRIORITY
    }

    /// Full metadata for a request.
    pub fn resolve(&self, ctx: &RequestContext) -> MetadataResult {
        resolve(ctx.route.as_ref(), ctx.content.as_ref(), &self.settings)
    }

    /// Escaped title for a request; empty when no title applies.
    pub fn title(&self, ctx: &RequestContext) -> Escaped {
        resolve_title(ctx.route.as_ref(), ctx.content.as_ref(), &self.settings)
    }

    /// Head injection: keywords, description and robots tags.
    pub fn head(&self, ctx: &RequestContext) -> String {
        self.resolve(ctx).head_tags()
    }

    /// Output filter: force the computed title into the rendered page.
    pub fn final_output<'a>(&self, html: &'a str, ctx: &RequestContext) -> Cow<'a, str> {
        inject_escaped(html, &self.title(ctx))
    }
}
