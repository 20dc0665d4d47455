//! Per-platform generation outcomes.

use crate::{FormatId, Tone, Unit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// How a platform's content was produced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GenerationStatus {
    /// Produced by the external generator
    Ok,
    /// Produced locally after the external generator failed
    Fallback,
    /// Both the generator and the fallback failed
    Failed,
}

/// Result for one platform.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct GenerationResult {
    /// Platform key
    platform: String,
    /// Post-processed body
    body: String,
    /// Post-processed hashtags
    hashtags: Vec<String>,
    /// Slides or scenes for sequenced formats
    #[setters(strip_option)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    units: Option<Vec<Unit>>,
    /// Cover or thumbnail image prompt
    #[setters(strip_option)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_prompt: Option<String>,
    /// Outcome
    status: GenerationStatus,
    /// Why the status is not `ok`
    #[setters(strip_option)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    /// Tone actually used for this platform
    tone: Tone,
    /// Calls made to the external generator
    attempts: u32,
}

impl GenerationResult {
    /// Empty result for `platform` with the given status.
    pub fn new(platform: impl Into<String>, status: GenerationStatus, tone: Tone) -> Self {
        Self {
            platform: platform.into(),
            body: String::new(),
            hashtags: Vec::new(),
            units: None,
            image_prompt: None,
            status,
            error: None,
            tone,
            attempts: 0,
        }
    }

    /// Failed result carrying a human-readable reason.
    pub fn failed(platform: impl Into<String>, tone: Tone, reason: impl Into<String>) -> Self {
        Self::new(platform, GenerationStatus::Failed, tone).with_error(reason.into())
    }

    /// True when the status is `ok`.
    pub fn is_ok(&self) -> bool {
        self.status == GenerationStatus::Ok
    }
}

/// Aggregated results of one `generate` call, keyed by platform.
///
/// Keys are sorted, so iteration order never depends on completion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationReport {
    /// Identifier for log correlation
    request_id: Uuid,
    /// When aggregation completed
    generated_at: DateTime<Utc>,
    /// Requested format
    format: FormatId,
    /// Per-platform results
    results: BTreeMap<String, GenerationResult>,
}

impl GenerationReport {
    /// Assemble a report from settled results.
    pub fn new(
        request_id: Uuid,
        format: FormatId,
        results: impl IntoIterator<Item = GenerationResult>,
    ) -> Self {
        Self {
            request_id,
            generated_at: Utc::now(),
            format,
            results: results
                .into_iter()
                .map(|result| (result.platform.clone(), result))
                .collect(),
        }
    }

    /// Result for one platform.
    pub fn get(&self, platform: &str) -> Option<&GenerationResult> {
        self.results.get(&platform.to_ascii_lowercase())
    }

    /// Number of platforms in the report.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when no platform was generated.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of results with the given status.
    pub fn count(&self, status: GenerationStatus) -> usize {
        self.results
            .values()
            .filter(|result| result.status == status)
            .count()
    }

    /// Consume the report, yielding the result map.
    pub fn into_results(self) -> BTreeMap<String, GenerationResult> {
        self.results
    }
}
