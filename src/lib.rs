//! Metaseo - page title and head metadata for blog pages.
//!
//! Given the route a request matched, the content it displays and the site
//! settings, [`resolver::resolve`] derives the document title together with
//! the description, keywords and robots meta tags. [`hooks::SeoHooks`]
//! exposes the result at the two points a renderer calls into:
//!
//! ```text
//! render page ──► head hook ──► <meta> tags appended inside <head>
//!      │
//!      └──────► output filter ──► <title> replaced (or inserted)
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod hooks;
pub mod init;
pub mod inject;
pub mod logger;
pub mod options;
pub mod resolver;
pub mod route;
pub mod settings;
pub mod tags;
pub mod utils;
