//! Operator generation requests.

use crate::{FormatId, Tone};
use serde::{Deserialize, Serialize};

/// One operator request: a topic fanned out to several platforms.
///
/// # Examples
///
/// ```
/// use marquee_core::{FormatId, GenerationRequest, Tone};
///
/// let request = GenerationRequest::builder()
///     .topic("AI per PMI")
///     .format(FormatId::Post)
///     .platform("twitter")
///     .platform("LinkedIn")
///     .tone(Tone::Professional)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.platform_keys(), vec!["twitter", "linkedin"]);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(error = "marquee_error::RequestError"))]
pub struct GenerationRequest {
    /// What the content is about
    topic: String,
    /// Target content format
    format: FormatId,
    /// Target platforms, in operator order
    #[builder(default, setter(each(name = "platform", into)))]
    platforms: Vec<String>,
    /// Requested tone
    #[builder(default)]
    #[serde(default)]
    tone: Tone,
    /// Brand description injected into every prompt
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    brand_context: Option<String>,
    /// Template id; the format's default template when absent
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    template: Option<String>,
    /// Slide-count override for slide formats
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    slides: Option<u32>,
    /// Duration override in seconds for scene formats
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    duration_seconds: Option<u32>,
}

impl GenerationRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Platform keys lower-cased and trimmed, duplicates and blanks dropped,
    /// first occurrence order kept.
    pub fn platform_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::with_capacity(self.platforms.len());
        for platform in &self.platforms {
            let key = platform.trim().to_ascii_lowercase();
            if !key.is_empty() && !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// Whether `platform` is one of this request's targets.
    pub fn targets(&self, platform: &str) -> bool {
        let platform = platform.trim();
        self.platforms
            .iter()
            .any(|p| p.trim().eq_ignore_ascii_case(platform))
    }

    /// Brand context with blank values treated as absent.
    pub fn brand(&self) -> Option<&str> {
        self.brand_context
            .as_deref()
            .map(str::trim)
            .filter(|brand| !brand.is_empty())
    }

    /// Copy of this request with the brand context replaced.
    pub fn with_brand_context(&self, brand: Option<String>) -> Self {
        Self {
            brand_context: brand,
            ..self.clone()
        }
    }
}
