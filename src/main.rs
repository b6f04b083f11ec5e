// tunedeck - menu-driven playlist manager
// Parses flags, loads optional config, sets up logging, hands stdin/stdout to the menu

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tunedeck::config::{Config, LoggingConfig};
use tunedeck::ui;

#[derive(Parser)]
#[command(name = "tunedeck")]
#[command(about = "Add, search, select and (pretend to) play songs from a text menu")]
struct Args {
    /// Enable developer logging (debug output on stderr)
    #[arg(long)]
    dev: bool,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Logs never touch stdout - that belongs to the menu.
/// Returns the file writer guard, which must live as long as the process.
fn init_logging(dev: bool, logging: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if dev {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_env_filter(EnvFilter::new("debug"))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        eprintln!("🔧 Dev mode: debug output enabled on stderr");
        return Ok(None);
    }

    let Some(log_dir) = &logging.directory else {
        // no directory configured, stay silent
        return Ok(None);
    };
    std::fs::create_dir_all(log_dir)?;

    // Daily rotating file appender
    let file_appender = tracing_appender::rolling::daily(log_dir, "tunedeck.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load config - defaults if there's no file
    let config = Config::load(args.config.as_deref())?;

    let _log_guard = init_logging(args.dev, &config.logging)?;
    info!("tunedeck starting up");
    debug!("Config: {:?}", config);

    let mut app = ui::stdio_app().with_banner(config.menu.show_banner);
    app.run().await?;

    info!("tunedeck shutting down");
    Ok(())
}
