mod app;
mod constants;
mod handlers;
mod presenter;
mod rendering;
mod state;
mod surface;

use clap::Parser;
use constants::{DEFAULT_LOG_FILTER, DEFAULT_VIEWPORT_WIDTH};
use notify_manager_config::NotificationsConfig;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "notify-manager")]
#[command(about = "Throttled notification popups, driven from stdin", long_about = None)]
struct Cli {
    /// Initial viewport width in logical pixels
    #[arg(default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    viewport_width: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    color_backtrace::install();
    init_logging();

    let config = match NotificationsConfig::from_env() {
        Ok(Some(config)) => config,
        Ok(None) => NotificationsConfig::default(),
        Err(err) => {
            tracing::warn!("Falling back to default config: {}", err);
            NotificationsConfig::default()
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let local = tokio::task::LocalSet::new();
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    local.block_on(&runtime, app::run(config, cli.viewport_width, input, &mut out))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "systemd")]
    let registry = registry.with(tracing_journald::layer().ok());

    registry.init();
}
