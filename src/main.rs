use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use condense::config::Config;
use condense::ui;

/// Terminal client for an extractive text summarization service.
#[derive(Parser)]
#[command(name = "condense", version)]
struct Cli {
    /// Plain-text document to pre-select.
    file: Option<PathBuf>,

    /// Override the configured service base URL.
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Write logs here instead of the default data directory.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file)?;

    let config_path = Config::config_path();
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.service.base_url = server;
    }
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    ui::runtime::run(runtime.handle().clone(), config, config_path, cli.file)
}

/// Logs go to a file: stdout belongs to the TUI.
fn init_tracing(log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let path = log_file.unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("condense")
            .join("condense.log")
    });
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
