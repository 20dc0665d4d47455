//! Generate and prompt command handlers.

use super::{GenerateArgs, RequestArgs};
use marquee::{
    BrandContextProvider, FileBrandContext, GenerationReport, GenerationStatus,
    HttpTextGenerator, JsonError, MarqueeConfig, MarqueeResult, OfflineGenerator, TextGenerator,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

/// Run a generation request and print the report.
#[instrument(skip_all, fields(format = %args.request.format, offline = args.offline))]
pub async fn handle_generate(config: &MarqueeConfig, args: &GenerateArgs) -> MarqueeResult<()> {
    let request = args.request.to_request()?;

    let generator: Arc<dyn TextGenerator> = if args.offline {
        info!("Offline mode, every platform uses fallback copy");
        Arc::new(OfflineGenerator)
    } else {
        Arc::new(HttpTextGenerator::from_env(&config.endpoint))
    };
    let orchestrator = config.build_orchestrator(generator)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling generation");
            on_interrupt.cancel();
        }
    });

    let report = orchestrator.generate_with_cancel(&request, cancel).await?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| JsonError::new("report", e))?;
        println!("{}", json);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Print the prompt each requested platform would be sent.
#[instrument(skip_all, fields(format = %args.format))]
pub async fn handle_prompt(config: &MarqueeConfig, args: &RequestArgs) -> MarqueeResult<()> {
    let mut request = args.to_request()?;
    if request.brand().is_none() {
        if let Some(path) = &config.brand_file {
            let brand = FileBrandContext::new(path).brand_context().await?;
            request = request.with_brand_context(brand);
        }
    }

    let assembler = config.assembler()?;
    for platform in request.platform_keys() {
        let prompt = assembler.assemble_default(&request, &platform)?;
        println!("=== {} ===\n{}\n", platform, prompt);
    }
    Ok(())
}

fn print_report(report: &GenerationReport) {
    println!("Request {} ({})", report.request_id(), report.format());
    for (platform, result) in report.results() {
        println!();
        println!(
            "== {} [{}, tone {}, {} attempt(s)] ==",
            platform,
            result.status(),
            result.tone(),
            result.attempts()
        );
        if let Some(reason) = result.error() {
            println!("note: {}", reason);
        }
        println!("{}", result.body());
        if !result.hashtags().is_empty() {
            println!("{}", result.hashtags().join(" "));
        }
        if let Some(units) = result.units() {
            for unit in units {
                let duration = unit
                    .duration_seconds
                    .map(|s| format!(" ({}s)", s))
                    .unwrap_or_default();
                println!("  {}. [{}] {}{}", unit.ordinal, unit.role, unit.title, duration);
                if !unit.body.is_empty() {
                    println!("     {}", unit.body);
                }
                for bullet in &unit.bullets {
                    println!("     - {}", bullet);
                }
            }
        }
        if let Some(image_prompt) = result.image_prompt() {
            println!("image: {}", image_prompt);
        }
    }
    println!();
    println!(
        "{} ok, {} fallback, {} failed",
        report.count(GenerationStatus::Ok),
        report.count(GenerationStatus::Fallback),
        report.count(GenerationStatus::Failed)
    );
}
