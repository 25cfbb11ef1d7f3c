use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod commands;
mod config;
mod output;
mod setup;

use commands::{Cli, cart};
use config::app_config::AppConfig;
use output::dto::CartView;
use output::error::IntoCliError;
use setup::dependency_injection::DependencyContainer;

/// Cart CLI Entry Point
///
/// Loads the user's stored cart, applies one command to it and prints the
/// resulting cart with its totals.
///
/// - config/: Storage configuration
/// - setup/: Dependency injection
/// - commands/: Argument parsing and command handlers
/// - output/: Views and error mapping
fn main() -> anyhow::Result<ExitCode> {
    // 1. Initialize tracing with RUST_LOG env filter; stdout is kept for the cart
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    tracing::debug!(
        backend = ?config.storage.backend,
        root = %config.storage.root.display(),
        "Cart storage configured"
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run the command
    match cart::run(cli.command, &container) {
        Ok(outcome) => {
            let view = CartView::from(outcome);
            if let Some(warning) = &view.warning {
                eprintln!("warning: {warning}");
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", view.render_text());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            let (code, response) = error.into_cli_error();
            if cli.json {
                eprintln!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                eprintln!("{}: {}", response.name, response.message);
            }
            Ok(code)
        }
    }
}
