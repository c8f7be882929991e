// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sensitune - sensitivity recommendations from device signals
//!
//! Entry point for the Sensitune CLI application.

use clap::Parser;

use sensitune::cli::{Cli, Commands};
use sensitune::commands;
use sensitune::config::Settings;
use sensitune::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on per-step scoring diagnostics. `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        if let Ok(parsed) = "sensitune=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load_or_default(&settings_path);

    // Dispatch to appropriate command
    match cli.command {
        Commands::Detect(args) => commands::detect::execute(&args, &settings, &cli.format).await,
        Commands::Calc(args) => commands::calc::execute(&args, &settings, &cli.format).await,
        Commands::Catalog(args) => commands::catalog::execute(&args, &settings, &cli.format),
        Commands::Settings(args) => {
            commands::settings::execute(args, settings, &settings_path, &cli.format)
        }
    }
}
