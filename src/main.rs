#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::logging::LoggingBuilder;
use folio_core::{Page, SiteConfig};

use crate::context::Site;

/// Folio - interactive portfolio page
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Folio - a portfolio page with filtering, lightbox and contact form")]
struct Args {
    /// Site configuration (JSON); the built-in sample site is used when omitted
    #[arg(short, long)]
    site: Option<PathBuf>,

    /// Tracing filter directives (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,

    /// Window title (defaults to the site title)
    #[arg(short, long)]
    title: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = args.log_filter {
        logging = logging.with_filter(filter);
    }
    if args.no_color {
        logging = logging.no_ansi();
    }
    logging.init()?;

    let config = match args.site {
        Some(ref path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load site config {}", path.display()))?,
        None => SiteConfig::default(),
    };

    // Wire the page before opening a window so a broken config fails fast
    let page = Page::new(config.targets.clone()).context("site markup is incomplete")?;

    let title = args.title.unwrap_or_else(|| config.title.clone());
    tracing::info!(
        "Starting '{}' with {} projects",
        title,
        config.targets.projects.len()
    );

    context::init_site(Site { config, page });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
