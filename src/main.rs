use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use movie_browser::catalog::{ListName, TrendingWindow};
use movie_browser::config::Config;
use movie_browser::logging::init_tracing;
use movie_browser::AppContext;

#[derive(Parser, Debug)]
#[command(name = "movie-browser")]
#[command(about = "Load the movie dashboard and favorites", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for persisted favorites (overrides config)
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Trending time window
    #[arg(long, value_enum, default_value_t = Window::Week)]
    window: Window,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Window {
    Day,
    Week,
}

impl From<Window> for TrendingWindow {
    fn from(window: Window) -> Self {
        match window {
            Window::Day => TrendingWindow::Day,
            Window::Week => TrendingWindow::Week,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(dir) = cli.storage_dir {
        config.storage.dir = Some(dir);
    }

    let mut ctx = AppContext::from_config(config).context("Failed to build catalog client")?;

    ctx.favorites_mut().load();
    ctx.load_dashboard(cli.window.into());
    ctx.movies_mut().settle().await;

    for list in [
        ListName::Trending,
        ListName::Popular,
        ListName::TopRated,
        ListName::NowPlaying,
        ListName::Upcoming,
    ] {
        let slice = ctx.movies().slice(list);
        match slice.error_message() {
            Some(error) => tracing::warn!(list = %list, error = %error, "List failed to load"),
            None => tracing::info!(
                list = %list,
                status = ?slice.status,
                count = slice.movies().len(),
                "List loaded"
            ),
        }
    }

    let stats = ctx.favorites().stats();
    tracing::info!(
        count = stats.count,
        average = %stats.average_label(),
        years = stats.distinct_years,
        "Favorites"
    );

    Ok(())
}
