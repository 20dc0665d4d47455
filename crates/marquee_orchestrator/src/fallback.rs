//! Local, deterministic content when the external generator fails.

use marquee_catalog::FormatRegistry;
use marquee_core::{FormatId, GeneratedCopy, GenerationRequest, Tone, Unit, UnitKind, UnitRole};
use marquee_error::MarqueeResult;
use marquee_prompt::{ContentTemplate, PlaceholderValues, render};
use tracing::{debug, instrument};

/// Recovers a platform locally after the generator gave up.
///
/// [`FallbackGenerator`] is the stock implementation; an orchestrator can
/// take another through
/// [`GenerationOrchestrator::with_fallback`](crate::GenerationOrchestrator::with_fallback).
pub trait FallbackComposer: Send + Sync {
    /// Compose copy for one platform, or explain why none could be made.
    fn compose(
        &self,
        request: &GenerationRequest,
        platform: &str,
        template: &ContentTemplate,
        tone: Tone,
    ) -> MarqueeResult<GeneratedCopy>;
}

/// Composes copy from the template and topic alone.
///
/// Never touches the network; the same inputs always give the same copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackGenerator {
    formats: FormatRegistry,
}

/// Topic words joined as one CamelCase hashtag.
///
/// # Example
///
/// ```
/// use marquee_orchestrator::topic_hashtag;
///
/// assert_eq!(topic_hashtag("AI per PMI").as_deref(), Some("#AIPerPMI"));
/// assert_eq!(topic_hashtag("spring-sale 2026!").as_deref(), Some("#SpringSale2026"));
/// assert_eq!(topic_hashtag("  !!  "), None);
/// ```
pub fn topic_hashtag(topic: &str) -> Option<String> {
    let camel: String = topic
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();
    if camel.is_empty() {
        None
    } else {
        Some(format!("#{}", camel))
    }
}

fn as_hashtag(tag: &str) -> String {
    let tag = tag.trim().trim_start_matches('#');
    format!("#{}", tag)
}

impl FallbackGenerator {
    /// Create a fallback generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose copy for one platform.
    ///
    /// # Errors
    ///
    /// Fails only if a template pattern cannot be rendered.
    #[instrument(skip(self, request, template), fields(template = %template.id()))]
    pub fn compose(
        &self,
        request: &GenerationRequest,
        platform: &str,
        template: &ContentTemplate,
        tone: Tone,
    ) -> MarqueeResult<GeneratedCopy> {
        let tone_name = tone.to_string();
        let values = PlaceholderValues {
            topic: request.topic().trim(),
            brand: request.brand().unwrap_or_default(),
            platform,
            tone: &tone_name,
        };

        let body = render(template.id(), template.fallback_body(), &values)?;
        let image_prompt = match template.fallback_image_prompt() {
            Some(pattern) => render(template.id(), pattern, &values)?,
            None => format!("Illustration of {}", values.topic),
        };

        let mut copy = GeneratedCopy::new(body, self.hashtags(request.topic(), template));
        copy.image_prompt = Some(image_prompt);

        let format = *request.format();
        if let Some(count) = self
            .formats
            .resolve_unit_count(format, *request.slides(), *request.duration_seconds())
        {
            let duration = self.formats.resolve_duration(format, *request.duration_seconds());
            copy.units = self.units(format, template, &values, count, duration)?;
        }

        debug!(units = copy.units.len(), "Composed fallback copy");
        Ok(copy)
    }

    /// Topic hashtag first, then the template's tags, duplicates dropped.
    pub fn hashtags(&self, topic: &str, template: &ContentTemplate) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        let candidates = topic_hashtag(topic)
            .into_iter()
            .chain(template.fallback_hashtags().iter().map(|t| as_hashtag(t)));
        for tag in candidates {
            if tag.len() > 1 && !tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Units in role order, titled from the template's fallback titles.
    ///
    /// # Errors
    ///
    /// Fails only if a title pattern cannot be rendered.
    pub fn units(
        &self,
        format: FormatId,
        template: &ContentTemplate,
        values: &PlaceholderValues<'_>,
        count: u32,
        total_duration: Option<u32>,
    ) -> MarqueeResult<Vec<Unit>> {
        let descriptor = self.formats.get(format);
        let is_scene = descriptor.unit_kind() == Some(UnitKind::Scene);
        let per_scene = total_duration.map(|total| total / count.max(1));
        let titles = template.fallback_units();
        let topic = values.topic;

        let mut content_index = 0;
        let mut units = Vec::with_capacity(count as usize);
        for (index, role) in self.formats.role_plan(format, count).into_iter().enumerate() {
            let (title_pattern, body) = match role {
                UnitRole::Hook => (titles.hook().clone(), topic.to_string()),
                UnitRole::Content => {
                    let title = titles.content_title(content_index);
                    content_index += 1;
                    let body = format!("{}: {}", title, topic);
                    (title, body)
                }
                UnitRole::Tip => (
                    titles.tip().clone(),
                    format!("Put {} into practice one small step at a time.", topic),
                ),
                UnitRole::Cta => (
                    titles.cta().clone(),
                    format!("Follow along for more on {}.", topic),
                ),
            };
            let title = render(template.id(), &title_pattern, values)?;

            let mut unit = Unit::new(index as u32 + 1, role, title.clone())
                .with_body(body)
                .with_visual_prompt(format!("{}, {} about {}", title, format, topic));
            unit.overlay_text = Some(title);
            if let (true, Some(seconds)) = (is_scene, per_scene) {
                unit = unit.with_duration(seconds);
            }
            units.push(unit);
        }
        Ok(units)
    }
}

impl FallbackComposer for FallbackGenerator {
    fn compose(
        &self,
        request: &GenerationRequest,
        platform: &str,
        template: &ContentTemplate,
        tone: Tone,
    ) -> MarqueeResult<GeneratedCopy> {
        FallbackGenerator::compose(self, request, platform, template, tone)
    }
}
