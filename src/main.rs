//! Metaseo - page title and head metadata for blog pages.

use anyhow::{Context, Result};
use clap::Parser;
use metaseo::{
    cli::{Cli, Commands, RequestArgs},
    config::SiteConfig,
    hooks::SeoHooks,
    init::{init_site, reload_site},
    log,
};
use std::{fs, io::Write, path::Path};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();

    match &cli.command {
        Commands::Init {
            title,
            tagline,
            tags,
        } => init_site(&config_path, title, tagline, tags.as_deref()).map(|_| ()),
        Commands::Reload { tags } => reload_site(&config_path, tags).map(|_| ()),
        Commands::Head { request } => {
            let hooks = load_hooks(&config_path)?;
            print(&hooks.head(&request.context()?))
        }
        Commands::Title { request } => {
            let hooks = load_hooks(&config_path)?;
            print(&format!("{}\n", hooks.title(&request.context()?)))
        }
        Commands::Inject {
            request,
            input,
            output,
        } => {
            let hooks = load_hooks(&config_path)?;
            inject_page(&hooks, request, input, output.as_deref())
        }
    }
}

/// Load and validate configuration, filling absent options with defaults.
fn load_hooks(config_path: &Path) -> Result<SeoHooks> {
    let mut config = SiteConfig::from_path(config_path)?;
    config.activate(&[]);
    config.validate()?;
    Ok(SeoHooks::new(config.settings()))
}

/// Apply the output filter to a rendered page.
fn inject_page(
    hooks: &SeoHooks,
    request: &RequestArgs,
    input: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let ctx = request.context()?;
    let html = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let page = hooks.final_output(&html, &ctx);

    match output {
        Some(output) => {
            fs::write(output, page.as_bytes())
                .with_context(|| format!("Failed to write {}", output.display()))?;
            log!("inject"; "{} -> {}", input.display(), output.display());
            Ok(())
        }
        None => print(&page),
    }
}

fn print(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")
}
