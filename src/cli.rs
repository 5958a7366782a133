//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::{
    content::ContentItem,
    hooks::RequestContext,
    route::{RouteKind, RouteMatch, parse_param},
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Page title and head metadata resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: metaseo.toml)
    #[arg(short = 'C', long, default_value = "metaseo.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared request arguments for Head, Title and Inject commands
#[derive(clap::Args, Debug, Clone)]
pub struct RequestArgs {
    /// Matched rewrite rule name: `display_home` (`home`), `display_entries`
    /// (`entries`), `display_entries_by_date` (`date`), `display_entries_by_tag`
    /// (`tag`), `display_entry` (`entry`), `display_page` (`page`),
    /// `display_search` (`search`) or `display_404` (`404`).
    /// Any other name resolves as an unknown route.
    /// Omit to simulate a request that matched no route.
    #[arg(long)]
    pub route: Option<String>,

    /// Route parameter as `key=value`, repeatable
    #[arg(short, long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Content item (TOML) the route displays
    #[arg(long)]
    pub content: Option<PathBuf>,
}

impl RequestArgs {
    /// Route match described by `--route` and `--param`.
    pub fn route(&self) -> Option<RouteMatch> {
        self.route
            .as_deref()
            .map(|rule| RouteMatch::new(RouteKind::from_rule(rule)).with_params(self.params.clone()))
    }

    /// Build the request context, loading `--content` if given.
    pub fn context(&self) -> Result<RequestContext> {
        let content = self
            .content
            .as_deref()
            .map(ContentItem::from_path)
            .transpose()?;
        Ok(RequestContext::new(self.route(), content))
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a new config populated with default options
    Init {
        /// Site title
        #[arg(long)]
        title: String,

        /// Site tagline
        #[arg(long, default_value = "")]
        tagline: String,

        /// Tag frequency index (JSON) used for the default home keywords
        #[arg(long)]
        tags: Option<PathBuf>,
    },

    /// Print the head tags (keywords, description, robots) for a request
    Head {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Print the resolved document title for a request
    Title {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Replace or insert the document title in a rendered page
    Inject {
        #[command(flatten)]
        request: RequestArgs,

        /// Rendered HTML page
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recompute home keywords from a tag frequency index
    Reload {
        /// Tag frequency index (JSON)
        #[arg(long)]
        tags: PathBuf,
    },
}

impl Cli {
    /// Config file path resolved against `--root`.
    pub fn config_path(&self) -> PathBuf {
        let root = self.root.as_deref().unwrap_or(Path::new("./"));
        root.join(&self.config)
    }

    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
