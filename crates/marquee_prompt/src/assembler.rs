//! Prompt assembly.

use crate::render::{PlaceholderValues, render};
use crate::templates::{ContentTemplate, TemplateCatalog};
use crate::tones::ToneCatalog;
use marquee_catalog::{FormatRegistry, PlatformRuleTable};
use marquee_core::{
    ContentFormat, EmojiDensity, GenerationRequest, PlatformRule, UnitKind, UnitRole,
};
use marquee_error::{MarqueeResult, RequestError, RequestErrorKind};
use std::sync::Arc;
use tracing::{debug, instrument};

const SECTION_SEPARATOR: &str = "\n\n";

/// Builds one generation prompt per platform.
///
/// Holds only shared read-only catalogs; assembling never mutates state and
/// the same inputs always produce the same prompt.
///
/// # Example
///
/// ```
/// use marquee_core::{FormatId, GenerationRequest};
/// use marquee_prompt::PromptAssembler;
///
/// let assembler = PromptAssembler::builtin().unwrap();
/// let request = GenerationRequest::builder()
///     .topic("Spring sale")
///     .format(FormatId::Post)
///     .platform("twitter")
///     .build()
///     .unwrap();
///
/// let prompt = assembler.assemble_default(&request, "twitter").unwrap();
/// assert!(prompt.contains("280 characters"));
/// ```
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct PromptAssembler {
    /// Format registry
    formats: FormatRegistry,
    /// Platform rules
    rules: Arc<PlatformRuleTable>,
    /// Content templates
    templates: Arc<TemplateCatalog>,
    /// Tone guidance
    tones: Arc<ToneCatalog>,
}

impl PromptAssembler {
    /// Create an assembler over shared catalogs.
    pub fn new(
        rules: Arc<PlatformRuleTable>,
        templates: Arc<TemplateCatalog>,
        tones: Arc<ToneCatalog>,
    ) -> Self {
        Self {
            formats: FormatRegistry::new(),
            rules,
            templates,
            tones,
        }
    }

    /// Assembler over the built-in rules, templates and tones.
    pub fn builtin() -> MarqueeResult<Self> {
        Ok(Self::new(
            Arc::new(PlatformRuleTable::builtin()),
            Arc::new(TemplateCatalog::builtin()?),
            Arc::new(ToneCatalog::builtin()?),
        ))
    }

    /// Assemble with the request's template, or the format default.
    pub fn assemble_default(
        &self,
        request: &GenerationRequest,
        platform: &str,
    ) -> MarqueeResult<String> {
        let template = self
            .templates
            .resolve(request.template().as_deref(), *request.format())?;
        self.assemble(request, platform, template)
    }

    /// Assemble the prompt for one platform of `request`.
    ///
    /// Sections appear in a fixed order: format structure, template
    /// instruction, topic, tone guidance, brand context when present,
    /// platform limits and notes, then the output shape.
    ///
    /// # Errors
    ///
    /// Returns `BlankTopic` or `PlatformNotRequested`, or a template error if
    /// the instruction cannot be rendered.
    #[instrument(skip(self, request, template), fields(format = %request.format(), template = %template.id()))]
    pub fn assemble(
        &self,
        request: &GenerationRequest,
        platform: &str,
        template: &ContentTemplate,
    ) -> MarqueeResult<String> {
        let topic = request.topic().trim();
        if topic.is_empty() {
            return Err(RequestError::new(RequestErrorKind::BlankTopic).into());
        }
        if !request.targets(platform) {
            return Err(
                RequestError::new(RequestErrorKind::PlatformNotRequested(platform.to_string()))
                    .into(),
            );
        }

        let format = self.formats.get(*request.format());
        let rule = self.rules.rules_for(platform);
        let tone = rule.effective_tone(*request.tone());
        let brand = request.brand();
        let tone_name = tone.to_string();

        let values = PlaceholderValues {
            topic,
            brand: brand.unwrap_or_default(),
            platform: rule.platform(),
            tone: &tone_name,
        };

        let mut sections = Vec::with_capacity(7);
        sections.push(self.structure_section(format, request));
        sections.push(render(template.id(), template.instruction(), &values)?);
        sections.push(format!("Topic: {}", topic));
        sections.push(format!("Tone: {}. {}", tone_name, self.tones.guidance(tone)));
        if let Some(brand) = brand {
            sections.push(format!("Brand context: {}", brand));
        }
        sections.push(platform_section(&rule));
        sections.push(output_section(format));

        debug!(sections = sections.len(), %tone, "Assembled prompt");
        Ok(sections.join(SECTION_SEPARATOR))
    }

    fn structure_section(&self, format: &ContentFormat, request: &GenerationRequest) -> String {
        let id = format.id;
        let features = format.features.join(", ");
        let Some(unit_kind) = format.unit_kind() else {
            return format!(
                "Format: {}. Write one self-contained body text. Features: {}.",
                id, features
            );
        };

        let count = self
            .formats
            .resolve_unit_count(id, *request.slides(), *request.duration_seconds())
            .unwrap_or_default();
        let sequence = self
            .formats
            .role_plan(id, count)
            .iter()
            .enumerate()
            .map(|(i, role)| format!("{}. {}", i + 1, role_label(*role)))
            .collect::<Vec<_>>()
            .join(", ");

        let mut section = format!(
            "Format: {} made of exactly {} {}s in this order: {}.",
            id, count, unit_kind, sequence
        );
        if let Some(duration) = self.formats.resolve_duration(id, *request.duration_seconds()) {
            section.push_str(&format!(
                " Total duration {} seconds, about {} seconds per scene.",
                duration,
                duration / count.max(1)
            ));
        }
        section.push_str(&format!(" Features: {}.", features));
        section
    }
}

fn role_label(role: UnitRole) -> &'static str {
    match role {
        UnitRole::Hook => "hook",
        UnitRole::Content => "content",
        UnitRole::Tip => "tip",
        UnitRole::Cta => "call-to-action",
    }
}

fn emoji_directive(density: EmojiDensity) -> &'static str {
    match density {
        EmojiDensity::None => "Do not use any emoji.",
        EmojiDensity::Low => "Use at most two emoji.",
        EmojiDensity::Medium => "Use emoji sparingly where they add meaning.",
        EmojiDensity::High => "Emoji are welcome and native to this platform.",
    }
}

fn platform_section(rule: &PlatformRule) -> String {
    let mut lines = vec![
        format!("Platform: {}.", rule.platform()),
        format!(
            "Keep the body under {} characters including spaces.",
            rule.max_chars()
        ),
    ];
    match rule.max_hashtags() {
        0 => lines.push("Do not include hashtags.".to_string()),
        max => lines.push(format!("Use at most {} hashtags.", max)),
    }
    lines.push(emoji_directive(*rule.emoji_density()).to_string());
    lines.extend(rule.notes().iter().map(|note| format!("- {}", note)));
    lines.join("\n")
}

fn output_section(format: &ContentFormat) -> String {
    let mut shape = String::from(
        "Respond with a single JSON object and nothing else: \
         {\"body\": string, \"hashtags\": [string], \"imagePrompt\": string",
    );
    match format.unit_kind() {
        None => {}
        Some(UnitKind::Slide) => shape.push_str(
            ", \"units\": [{\"ordinal\": number, \"role\": \"hook\"|\"content\"|\"tip\"|\"cta\", \
             \"title\": string, \"body\": string, \"bullets\": [string], \
             \"visualPrompt\": string, \"overlayText\": string, \"stickers\": [string]}]",
        ),
        Some(UnitKind::Scene) => shape.push_str(
            ", \"units\": [{\"ordinal\": number, \"role\": \"hook\"|\"content\"|\"cta\", \
             \"title\": string, \"body\": string, \"visualPrompt\": string, \
             \"overlayText\": string, \"durationSeconds\": number, \"mood\": string}]",
        ),
    }
    shape.push('}');
    shape
}
