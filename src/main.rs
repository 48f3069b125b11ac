//! linear-context CLI entry point.

use clap::Parser;

use linear_context::cli::{handle_error, Cli};
use linear_context::infrastructure::config::ConfigLoader;
use linear_context::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let config = match cli.config.as_deref() {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
    .unwrap_or_else(|err| handle_error(err, json));

    let _logger = LoggerImpl::init(&config.logging).unwrap_or_else(|err| handle_error(err, json));

    if let Err(err) = linear_context::cli::run(cli, &config).await {
        handle_error(err, json);
    }
}
