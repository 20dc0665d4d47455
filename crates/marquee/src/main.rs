//! Marquee CLI binary.
//!
//! This binary provides command-line access to the engine:
//! - Generate per-platform copy for one topic
//! - Inspect the format registry and platform rules
//! - Preview assembled prompts

use clap::Parser;
use marquee::{MarqueeConfig, ObservabilityConfig, init_observability};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_formats, handle_generate, handle_platforms, handle_prompt};

    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_observability(
        &ObservabilityConfig::new()
            .with_verbose(cli.verbose)
            .with_json_logs(cli.json_logs),
    )?;

    let config = MarqueeConfig::load_with(cli.config.as_deref())?;

    match &cli.command {
        Commands::Generate(args) => handle_generate(&config, args).await?,
        Commands::Formats { json } => handle_formats(*json)?,
        Commands::Platforms { json } => handle_platforms(&config, *json)?,
        Commands::Prompt { request } => handle_prompt(&config, request).await?,
    }

    Ok(())
}
