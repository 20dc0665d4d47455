//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use marquee::{FormatId, GenerationRequest, MarqueeResult, Tone};
use std::path::PathBuf;

/// Marquee - one topic, adapted copy for every platform
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Platform-aware content formatting engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file, applied after the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate copy for every platform
    Generate(GenerateArgs),

    /// List the content formats
    Formats {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List platform rules after configuration overrides
    Platforms {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the assembled prompt for one platform without generating
    Prompt {
        #[command(flatten)]
        request: RequestArgs,
    },
}

/// Arguments describing one generation request
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// What the content is about
    #[arg(long)]
    pub topic: String,

    /// Content format (post, story, carousel, reel, video)
    #[arg(long, default_value = "post")]
    pub format: String,

    /// Target platform; repeat for several
    #[arg(long = "platform", required = true)]
    pub platforms: Vec<String>,

    /// Tone of voice
    #[arg(long, default_value = "friendly")]
    pub tone: String,

    /// Brand description injected into every prompt
    #[arg(long)]
    pub brand: Option<String>,

    /// Template id (defaults to the format's template)
    #[arg(long)]
    pub template: Option<String>,

    /// Slide count for slide formats
    #[arg(long)]
    pub slides: Option<u32>,

    /// Total duration in seconds for scene formats
    #[arg(long)]
    pub duration: Option<u32>,
}

/// Arguments of the `generate` command
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Skip the generation service and use local fallback copy
    #[arg(long)]
    pub offline: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl RequestArgs {
    /// Build the engine request.
    pub fn to_request(&self) -> MarqueeResult<GenerationRequest> {
        let mut builder = GenerationRequest::builder();
        builder
            .topic(self.topic.clone())
            .format(FormatId::parse(&self.format)?)
            .platforms(self.platforms.clone())
            .tone(Tone::parse(&self.tone)?);
        if let Some(brand) = &self.brand {
            builder.brand_context(brand.clone());
        }
        if let Some(template) = &self.template {
            builder.template(template.clone());
        }
        if let Some(slides) = self.slides {
            builder.slides(slides);
        }
        if let Some(duration) = self.duration {
            builder.duration_seconds(duration);
        }
        Ok(builder.build()?)
    }
}
