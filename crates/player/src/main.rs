// Desktop binary: process-boundary errors go through anyhow.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use embassy_time::{Duration, Instant};
use library::local::MUSIC_PATH_ENV;
use library::LocalCatalog;
use platform::config::{APP_NAME, MAX_PAGE_SIZE, PAGE_SIZE, TICK_MS};
use playback::FilePlayer;
use player::{ConsoleRenderer, KeyboardInput, Scheduler, TcpRemote};
use tracing_subscriber::EnvFilter;
use ui::{Navigator, NavigatorConfig};

#[derive(Parser)]
#[command(name = "player")]
#[command(about = "Touch music player (desktop build)", long_about = None)]
#[command(version)]
struct Cli {
    /// Music folder laid out as Artist/Album/track
    #[arg(long, env = MUSIC_PATH_ENV)]
    music_path: PathBuf,
    /// Visible list rows
    #[arg(long, default_value_t = PAGE_SIZE)]
    page_size: usize,
    /// Scheduler tick period in milliseconds
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u64,
    /// Seed for the random picker (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,
    /// Address the upload service listens on
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: SocketAddr,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(
        (1..=MAX_PAGE_SIZE).contains(&cli.page_size),
        "--page-size must be between 1 and {MAX_PAGE_SIZE}"
    );
    anyhow::ensure!(
        cli.music_path.is_dir(),
        "music path {} is not a directory",
        cli.music_path.display()
    );

    let seed = cli.seed.unwrap_or_else(|| Instant::now().as_ticks());
    let config = NavigatorConfig {
        page_size: cli.page_size,
        seed,
        ..NavigatorConfig::default()
    };
    tracing::info!(
        app = APP_NAME,
        music = %cli.music_path.display(),
        page_size = cli.page_size,
        seed,
        "starting"
    );

    let input = KeyboardInput::spawn().context("failed to start keyboard reader")?;
    let mut scheduler = Scheduler::new(
        Navigator::new(config),
        LocalCatalog::new(&cli.music_path),
        FilePlayer::new(&cli.music_path),
        TcpRemote::new(cli.listen),
        ConsoleRenderer::stdout(),
        input,
    );
    scheduler
        .run(Duration::from_millis(cli.tick_ms), Instant::now)
        .context("player stopped")
}
