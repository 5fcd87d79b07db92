use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::domain::error::Result;
use crate::infrastructure::config::ConfigService;
use crate::interfaces::cli::{self, Cli};

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = ConfigService::new(args.config.clone()).load()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    cli::execute(args.command, &config).await
}
