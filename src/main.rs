#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use sactifi_core::SiteConfig;

/// Site configuration, set once from the command line before launch
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (loaded from --config or defaults)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// SACTIFI - Smart Automation, Computing, Technology & Innovation
#[derive(Parser, Debug)]
#[command(name = "sactifi-desktop")]
#[command(about = "SACTIFI landing page as a desktop window")]
struct Args {
    /// JSON file overriding motion, contact, navbar and toast settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "sactifi_core=trace")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    sactifi_core::logging::init(args.log_level.as_deref());

    let config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load site config from {}", path.display()))?,
        None => SiteConfig::default(),
    };

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let _ = SITE_CONFIG.set(config);

    tracing::info!(
        width = args.width,
        height = args.height,
        config = ?args.config,
        "starting SACTIFI"
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("SACTIFI")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
