// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Copysmith - marketing content generator
//!
//! Entry point for the Copysmith server.

use std::sync::Arc;

use clap::Parser;

use copysmith::brief::Brief;
use copysmith::cli::{Cli, Commands, PromptArgs, ServeArgs};
use copysmith::config::Settings;
use copysmith::error::Result;
use copysmith::generation::GenerationService;
use copysmith::history::HistoryStore;
use copysmith::llm::factory::ProviderFactory;
use copysmith::prompt::build_prompt;
use copysmith::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    // `-v` only applies when RUST_LOG is unset
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    if let Some(directive) = cli.log_directive(rust_log_set) {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load .env before settings so the API key variable is visible
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to load .env"),
    }

    // Load settings
    let settings = match cli.config {
        Some(ref path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    match cli.command {
        None => run_serve(ServeArgs::default(), settings).await,
        Some(Commands::Serve(args)) => run_serve(args, settings).await,
        Some(Commands::Prompt(args)) => run_prompt(args),
    }
}

/// Run the HTTP server
async fn run_serve(args: ServeArgs, mut settings: Settings) -> Result<()> {
    args.apply(&mut settings);
    settings.validate()?;

    let generator = ProviderFactory::from_settings(&settings)?;
    let history = Arc::new(HistoryStore::new(settings.history.path.clone()));
    tracing::info!(path = %history.path().display(), "Using history document");

    let service = Arc::new(GenerationService::new(generator, history));
    let router = server::build_router(AppState::new(service), settings.server.cors);

    server::serve(&settings.server.host, settings.server.port, router).await
}

/// Print the prompt for a brief file
fn run_prompt(args: PromptArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.brief)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    let brief = Brief::from_json(value)?;
    print!("{}", build_prompt(&brief));
    Ok(())
}
