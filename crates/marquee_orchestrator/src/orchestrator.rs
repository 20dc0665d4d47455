//! Multi-platform fan-out.

use crate::{FallbackComposer, FallbackGenerator, GenerationConfig, UnitSequencer};
use futures::future::join_all;
use marquee_catalog::FormatRegistry;
use marquee_core::{
    FormatId, GeneratedCopy, GenerationReport, GenerationRequest, GenerationResult,
    GenerationStatus, Tone,
};
use marquee_error::{
    GenerationError, GenerationErrorKind, MarqueeError, MarqueeErrorKind, MarqueeResult,
    RequestError, RequestErrorKind,
};
use marquee_interface::{BrandContextProvider, TextGenerator};
use marquee_postprocess::ContentPostProcessor;
use marquee_prompt::{ContentTemplate, PlaceholderValues, PromptAssembler};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio_retry2::strategy::jitter;
use tokio_retry2::{Retry, RetryError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Fans one request out to every target platform.
///
/// Each platform runs as an independent future: prompt assembly, the
/// generator call with timeout and retry, post-processing and unit
/// normalisation. A platform whose generator call fails falls back to local
/// composition without affecting the others. The orchestrator keeps no state
/// between calls.
///
/// # Example
///
/// ```no_run
/// use marquee_core::{FormatId, GenerationRequest};
/// use marquee_interface::TextGenerator;
/// use marquee_orchestrator::GenerationOrchestrator;
/// use std::sync::Arc;
///
/// # async fn run(generator: Arc<dyn TextGenerator>) -> marquee_error::MarqueeResult<()> {
/// let orchestrator = GenerationOrchestrator::builtin(generator)?;
/// let request = GenerationRequest::builder()
///     .topic("Spring sale")
///     .format(FormatId::Post)
///     .platform("twitter")
///     .platform("linkedin")
///     .build()?;
///
/// let report = orchestrator.generate(&request).await?;
/// assert_eq!(report.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GenerationOrchestrator {
    generator: Arc<dyn TextGenerator>,
    brand_provider: Option<Arc<dyn BrandContextProvider>>,
    assembler: PromptAssembler,
    processor: ContentPostProcessor,
    fallback: Arc<dyn FallbackComposer>,
    padding: FallbackGenerator,
    sequencer: UnitSequencer,
    formats: FormatRegistry,
    config: GenerationConfig,
}

impl std::fmt::Debug for GenerationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationOrchestrator")
            .field("generator", &self.generator.provider_name())
            .field("brand_provider", &self.brand_provider.is_some())
            .field("config", &self.config)
            .finish()
    }
}

/// Everything a platform task needs, resolved once per request.
struct Plan<'a> {
    request: GenerationRequest,
    template: &'a ContentTemplate,
    unit_count: Option<u32>,
    total_duration: Option<u32>,
}

impl GenerationOrchestrator {
    /// Create an orchestrator over an assembler's catalogs.
    pub fn new(generator: Arc<dyn TextGenerator>, assembler: PromptAssembler) -> Self {
        let processor = ContentPostProcessor::new(Arc::clone(assembler.rules()));
        Self {
            generator,
            brand_provider: None,
            assembler,
            processor,
            fallback: Arc::new(FallbackGenerator::new()),
            padding: FallbackGenerator::new(),
            sequencer: UnitSequencer::new(),
            formats: FormatRegistry::new(),
            config: GenerationConfig::default(),
        }
    }

    /// Orchestrator over the built-in rules, templates and tones.
    pub fn builtin(generator: Arc<dyn TextGenerator>) -> MarqueeResult<Self> {
        Ok(Self::new(generator, PromptAssembler::builtin()?))
    }

    /// Builder method to inject a brand-context provider.
    pub fn with_brand_provider(mut self, provider: Arc<dyn BrandContextProvider>) -> Self {
        self.brand_provider = Some(provider);
        self
    }

    /// Builder method to replace the local fallback.
    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackComposer>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Builder method to set the fan-out configuration.
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The prompt assembler and its catalogs.
    pub fn assembler(&self) -> &PromptAssembler {
        &self.assembler
    }

    /// Generate content for every platform of `request`.
    ///
    /// # Errors
    ///
    /// Only an invalid request fails the call; generation failures are
    /// reported per platform.
    pub async fn generate(&self, request: &GenerationRequest) -> MarqueeResult<GenerationReport> {
        self.generate_with_cancel(request, CancellationToken::new())
            .await
    }

    /// Like [`generate`](Self::generate), abandoning all work when `cancel`
    /// fires.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` before any generator call, or `Cancelled`
    /// with no partial results.
    #[instrument(skip(self, request, cancel), fields(format = %request.format(), platforms = request.platforms().len(), request_id = tracing::field::Empty))]
    pub async fn generate_with_cancel(
        &self,
        request: &GenerationRequest,
        cancel: CancellationToken,
    ) -> MarqueeResult<GenerationReport> {
        let (platforms, template) = self.validate(request)?;
        let request_id = Uuid::new_v4();
        tracing::Span::current().record("request_id", tracing::field::display(request_id));

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("Generation cancelled before all platforms settled");
                Err(GenerationError::new(GenerationErrorKind::Cancelled).into())
            }
            results = self.run(request, &platforms, template) => {
                let report = GenerationReport::new(request_id, *request.format(), results);
                info!(
                    ok = report.count(GenerationStatus::Ok),
                    fallback = report.count(GenerationStatus::Fallback),
                    failed = report.count(GenerationStatus::Failed),
                    "Generation complete"
                );
                Ok(report)
            }
        }
    }

    /// Check the request before any external call.
    ///
    /// Returns the normalised platform keys and the resolved template.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for a blank topic, no platforms, an override
    /// out of bounds, an unknown or inapplicable template, or (in strict
    /// mode) an unknown platform.
    pub fn validate(
        &self,
        request: &GenerationRequest,
    ) -> MarqueeResult<(Vec<String>, &ContentTemplate)> {
        if request.topic().trim().is_empty() {
            return Err(RequestError::new(RequestErrorKind::BlankTopic).into());
        }
        let platforms = request.platform_keys();
        if platforms.is_empty() {
            return Err(RequestError::new(RequestErrorKind::NoPlatforms).into());
        }

        let format = *request.format();
        self.formats
            .validate_overrides(format, *request.slides(), *request.duration_seconds())?;
        let template = self
            .assembler
            .templates()
            .resolve(request.template().as_deref(), format)?;

        if *self.config.strict_platforms() {
            let rules = self.assembler.rules();
            if let Some(unknown) = platforms.iter().find(|p| !rules.contains(p)) {
                return Err(
                    RequestError::new(RequestErrorKind::UnknownPlatform(unknown.clone())).into(),
                );
            }
        }

        debug!(platforms = ?platforms, template = %template.id(), "Request validated");
        Ok((platforms, template))
    }

    async fn run(
        &self,
        request: &GenerationRequest,
        platforms: &[String],
        template: &ContentTemplate,
    ) -> Vec<GenerationResult> {
        let brand = self.resolve_brand(request).await;
        let format = *request.format();
        let plan = Plan {
            request: request.with_brand_context(brand),
            template,
            unit_count: self.formats.resolve_unit_count(
                format,
                *request.slides(),
                *request.duration_seconds(),
            ),
            total_duration: self
                .formats
                .resolve_duration(format, *request.duration_seconds()),
        };

        let permits = Semaphore::new((*self.config.max_concurrent()).max(1));
        let tasks = platforms
            .iter()
            .map(|platform| self.generate_platform(&plan, platform, &permits));
        join_all(tasks).await
    }

    /// Request brand context wins; otherwise ask the provider, treating
    /// errors as absent context.
    async fn resolve_brand(&self, request: &GenerationRequest) -> Option<String> {
        if let Some(brand) = request.brand() {
            return Some(brand.to_string());
        }
        let provider = self.brand_provider.as_ref()?;
        match provider.brand_context().await {
            Ok(brand) => brand.filter(|b| !b.trim().is_empty()),
            Err(e) => {
                warn!(error = %e, "Brand context provider failed, continuing without brand");
                None
            }
        }
    }

    #[instrument(skip(self, plan, permits), fields(provider = self.generator.provider_name()))]
    async fn generate_platform(
        &self,
        plan: &Plan<'_>,
        platform: &str,
        permits: &Semaphore,
    ) -> GenerationResult {
        let tone = self
            .assembler
            .rules()
            .effective_tone(platform, *plan.request.tone());
        let attempts = Arc::new(AtomicU32::new(0));

        let primary = match self.assembler.assemble(&plan.request, platform, plan.template) {
            Ok(prompt) => {
                let _permit = permits.acquire().await.ok();
                self.call_with_retry(&prompt, &attempts).await
            }
            Err(e) => Err(e),
        };
        let attempts = attempts.load(Ordering::Relaxed);

        match primary {
            Ok(copy) => {
                debug!(attempts, "Generator succeeded");
                self.finish(plan, platform, tone, copy, GenerationStatus::Ok)
                    .with_attempts(attempts)
            }
            Err(primary_error) => {
                warn!(error = %primary_error, attempts, "Generator failed, using fallback");
                let result = match self.fallback.compose(&plan.request, platform, plan.template, tone)
                {
                    Ok(copy) => self
                        .finish(plan, platform, tone, copy, GenerationStatus::Fallback)
                        .with_error(primary_error.to_string()),
                    Err(fallback_error) => {
                        warn!(error = %fallback_error, "Fallback failed");
                        GenerationResult::failed(
                            platform,
                            tone,
                            format!("{}; fallback: {}", primary_error, fallback_error),
                        )
                    }
                };
                result.with_attempts(attempts)
            }
        }
    }

    /// One generator call per attempt, each under the configured timeout.
    async fn call_with_retry(
        &self,
        prompt: &str,
        attempts: &Arc<AtomicU32>,
    ) -> MarqueeResult<GeneratedCopy> {
        let timeout_ms = *self.config.timeout_ms();
        let strategy = self.config.retry_delays().into_iter().map(jitter);

        Retry::spawn(strategy, || {
            let generator = Arc::clone(&self.generator);
            let prompt = prompt.to_string();
            let attempts = Arc::clone(attempts);
            async move {
                attempts.fetch_add(1, Ordering::Relaxed);
                let outcome = tokio::time::timeout(
                    Duration::from_millis(timeout_ms),
                    generator.generate(&prompt),
                )
                .await;
                let error = match outcome {
                    Ok(Ok(copy)) => match check_copy(copy) {
                        Ok(copy) => return Ok(copy),
                        Err(e) => e,
                    },
                    Ok(Err(e)) => e,
                    Err(_) => GenerationError::new(GenerationErrorKind::Timeout(timeout_ms)).into(),
                };
                if is_retryable(&error) {
                    warn!(error = %error, "Generator call failed, will retry");
                    Err(RetryError::Transient {
                        err: error,
                        retry_after: None,
                    })
                } else {
                    Err(RetryError::Permanent(error))
                }
            }
        })
        .await
    }

    fn finish(
        &self,
        plan: &Plan<'_>,
        platform: &str,
        tone: Tone,
        copy: GeneratedCopy,
        status: GenerationStatus,
    ) -> GenerationResult {
        let processed = self.processor.process(&copy.body, &copy.hashtags, platform);
        let mut result = GenerationResult::new(platform, status, tone)
            .with_body(processed.body)
            .with_hashtags(processed.hashtags);

        if let Some(count) = plan.unit_count {
            let format = *plan.request.format();
            let padding = if (copy.units.len() as u32) < count {
                self.padding_units(plan, platform, tone, format, count)
            } else {
                Vec::new()
            };
            let units =
                self.sequencer
                    .normalize(format, copy.units, count, plan.total_duration, &padding);
            result = result.with_units(units);
        }
        if let Some(image_prompt) = copy.image_prompt.filter(|p| !p.trim().is_empty()) {
            result = result.with_image_prompt(image_prompt);
        }
        result
    }

    fn padding_units(
        &self,
        plan: &Plan<'_>,
        platform: &str,
        tone: Tone,
        format: FormatId,
        count: u32,
    ) -> Vec<marquee_core::Unit> {
        let tone_name = tone.to_string();
        let values = PlaceholderValues {
            topic: plan.request.topic().trim(),
            brand: plan.request.brand().unwrap_or_default(),
            platform,
            tone: &tone_name,
        };
        self.padding
            .units(format, plan.template, &values, count, plan.total_duration)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Could not build padding units");
                Vec::new()
            })
    }
}

/// Copy with neither body nor units counts as a failed call.
fn check_copy(copy: GeneratedCopy) -> MarqueeResult<GeneratedCopy> {
    if copy.body.trim().is_empty() && copy.units.is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::Decode(
            "generator returned empty copy".to_string(),
        ))
        .into());
    }
    Ok(copy)
}

fn is_retryable(error: &MarqueeError) -> bool {
    match error.kind() {
        MarqueeErrorKind::Generation(e) => e.kind.is_retryable(),
        _ => false,
    }
}
