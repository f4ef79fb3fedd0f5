//! notes - post listing and incremental search for a personal notes site.

mod browse;
mod cli;
mod config;
mod post;
mod render;
mod search;
mod serve;
mod utils;

use anyhow::{Context, Result};
use browse::browse_posts;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use post::{PostCollection, PostPreview, load_posts};
use render::{NoRender, PreviewRenderer, TerminalListing};
use search::{HistoryBridge, SearchView, ViewOptions};
use serve::serve_listing;
use std::io::{Write, stdout};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    let posts = load_posts(&config.posts.source, config.posts.order)
        .with_context(|| format!("Failed to load posts from {}", config.posts.source.display()))?;
    if posts.is_empty() {
        log!("posts"; "{} has no posts", config.posts.source.display());
    } else {
        log!("posts"; "loaded {} posts", posts.len());
    }

    match &cli.command {
        Commands::Search { query, json } => search_once(&config, &posts, query, *json),
        Commands::Browse => browse_posts(&config, &posts),
        Commands::Serve { .. } => serve_listing(&config, &posts),
    }
}

/// Type `query` into a fresh view once and print what it shows.
fn search_once(config: &SiteConfig, posts: &PostCollection, query: &str, json: bool) -> Result<()> {
    let bridge = HistoryBridge::new(config.base_route(), &config.search.param);
    let mut view = SearchView::mount(posts, bridge, NoRender, ViewOptions::from_config(config));
    view.on_input(query);

    write_results(&mut stdout().lock(), view.query(), &view.previews(), json)?;

    log!("search"; "{}", view.bridge().current());
    Ok(())
}

/// Print previews as pretty JSON, or as the colored terminal list.
fn write_results(
    out: &mut impl Write,
    query: &str,
    previews: &[PostPreview<'_>],
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, previews)?;
        writeln!(out)?;
    } else {
        TerminalListing::new(&mut *out).render(query, previews);
    }
    Ok(())
}
