//! Marquee: platform-aware content formatting.
//!
//! One topic in, one adapted piece of copy per platform out. This crate
//! re-exports the engine crates and adds layered configuration and logging
//! set-up for the `marquee` binary.
//!
//! # Example
//!
//! ```no_run
//! use marquee::{FormatId, GenerationRequest, MarqueeConfig, OfflineGenerator};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MarqueeConfig::load()?;
//! let orchestrator = config.build_orchestrator(Arc::new(OfflineGenerator))?;
//!
//! let request = GenerationRequest::builder()
//!     .topic("Spring menu")
//!     .format(FormatId::Carousel)
//!     .platform("instagram")
//!     .platform("linkedin")
//!     .build()?;
//!
//! let report = orchestrator.generate(&request).await?;
//! for (platform, result) in report.results() {
//!     println!("{}: {}", platform, result.body());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;

pub use config::MarqueeConfig;
pub use observability::{ObservabilityConfig, init_observability};

pub use marquee_catalog::{BASELINE_PLATFORM, FormatRegistry, PlatformRuleOverride, PlatformRuleTable};
pub use marquee_core::{
    ContentFormat, EmojiDensity, FormatId, FormatKind, GeneratedCopy, GenerationReport,
    GenerationRequest, GenerationRequestBuilder, GenerationResult, GenerationStatus, PlatformRule,
    Tone, Unit, UnitKind, UnitRole,
};
pub use marquee_error::{
    CatalogError, CatalogErrorKind, ConfigError, GenerationError, GenerationErrorKind, JsonError,
    MarqueeError, MarqueeErrorKind, MarqueeResult, RequestError, RequestErrorKind, TemplateError,
    TemplateErrorKind,
};
pub use marquee_interface::{BrandContextProvider, TextGenerator};
pub use marquee_models::{
    EndpointConfig, FileBrandContext, HttpTextGenerator, OfflineGenerator, StaticBrandContext,
};
pub use marquee_orchestrator::{
    FallbackComposer, FallbackGenerator, GenerationConfig, GenerationOrchestrator, UnitSequencer,
};
pub use marquee_postprocess::{ContentPostProcessor, ProcessedContent};
pub use marquee_prompt::{ContentTemplate, PromptAssembler, TemplateCatalog, ToneCatalog};
