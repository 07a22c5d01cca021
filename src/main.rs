use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;
use tao::event_loop::EventLoopBuilder;

mod app;
mod utils;
mod webview;
mod window;

use app::{AppShell, ShellEvent};
use utils::Config;
use webview::content::Content;

/// Chromeless - a frameless window shell with custom window controls
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTML document to load as window content (defaults to the built-in document)
    #[arg(value_name = "FILE")]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Keep the window above all others
    #[arg(long)]
    always_on_top: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; CLI values override the loaded configuration
    let mut config = Config::load()?;
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    if args.always_on_top {
        config.window.always_on_top = true;
    }
    if args.content.is_some() {
        config.general.content = args.content;
    }

    // Initialize logging
    let log_level = if args.debug {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting Chromeless v{}", env!("CARGO_PKG_VERSION"));

    let content = Content::resolve(config.general.content.as_deref())?;

    let event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();
    let shell = AppShell::new(config.window, content);
    shell.run(event_loop)
}
