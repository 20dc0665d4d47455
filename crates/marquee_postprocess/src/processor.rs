//! Platform limit enforcement.

use crate::emoji::limit_emoji;
use marquee_catalog::PlatformRuleTable;
use marquee_core::{EmojiDensity, PlatformRule};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Appended to truncated bodies.
pub const ELLIPSIS: char = '\u{2026}';

/// Emoji clusters kept under the `low` density policy.
pub const LOW_DENSITY_EMOJI: usize = 2;

/// Body and hashtags after enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessedContent {
    /// Body within the platform's character ceiling
    pub body: String,
    /// Hashtags within the platform's cap
    pub hashtags: Vec<String>,
}

/// Drop denylisted tags, then keep the first `max_hashtags` in order.
pub fn cap_hashtags(hashtags: &[String], rule: &PlatformRule) -> Vec<String> {
    hashtags
        .iter()
        .filter(|tag| !rule.is_denied(tag))
        .take(*rule.max_hashtags())
        .cloned()
        .collect()
}

/// Shorten `body` to at most `max_chars` Unicode scalar values.
///
/// Cuts at the last whitespace at or before index `max_chars - 1`, trims
/// trailing whitespace and appends `…`. A body with no whitespace in range
/// becomes `…` alone.
///
/// # Example
///
/// ```
/// use marquee_postprocess::truncate_chars;
///
/// assert_eq!(truncate_chars("The quick brown fox", 12), "The quick…");
/// assert_eq!(truncate_chars("Supercalifragilistic", 5), "…");
/// assert_eq!(truncate_chars("short", 10), "short");
/// ```
pub fn truncate_chars(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        return body.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let cut = body
        .char_indices()
        .take(max_chars)
        .filter(|(_, c)| c.is_whitespace())
        .map(|(at, _)| at)
        .last();

    let mut truncated = match cut {
        Some(at) => body[..at].trim_end().to_string(),
        None => String::new(),
    };
    truncated.push(ELLIPSIS);
    truncated
}

/// Apply the emoji policy of `density`.
pub fn apply_emoji_density(body: &str, density: EmojiDensity) -> String {
    match density {
        EmojiDensity::None => limit_emoji(body, 0),
        EmojiDensity::Low => limit_emoji(body, LOW_DENSITY_EMOJI),
        EmojiDensity::Medium | EmojiDensity::High => body.to_string(),
    }
}

/// Run every step against one rule: hashtags, truncation, then emoji.
///
/// Emoji handling runs last and only removes text, so the character ceiling
/// still holds afterwards.
pub fn process_with_rule(body: &str, hashtags: &[String], rule: &PlatformRule) -> ProcessedContent {
    let hashtags = cap_hashtags(hashtags, rule);
    let truncated = truncate_chars(body, *rule.max_chars());
    let body = apply_emoji_density(&truncated, *rule.emoji_density());
    ProcessedContent { body, hashtags }
}

/// Enforces platform limits on generated copy.
///
/// Pure and deterministic: running it on its own output changes nothing.
///
/// # Example
///
/// ```
/// use marquee_catalog::PlatformRuleTable;
/// use marquee_postprocess::ContentPostProcessor;
/// use std::sync::Arc;
///
/// let processor = ContentPostProcessor::new(Arc::new(PlatformRuleTable::builtin()));
/// let tags: Vec<String> = ["#a", "#b", "#c"].iter().map(|t| t.to_string()).collect();
/// let out = processor.process("Hello world", &tags, "twitter");
/// assert_eq!(out.hashtags, vec!["#a", "#b"]);
/// ```
#[derive(Debug, Clone)]
pub struct ContentPostProcessor {
    rules: Arc<PlatformRuleTable>,
}

impl ContentPostProcessor {
    /// Create a processor over a shared rule table.
    pub fn new(rules: Arc<PlatformRuleTable>) -> Self {
        Self { rules }
    }

    /// Enforce `platform`'s rule; unknown platforms get the baseline.
    #[instrument(skip(self, body, hashtags), fields(chars = body.chars().count(), hashtags = hashtags.len()))]
    pub fn process(&self, body: &str, hashtags: &[String], platform: &str) -> ProcessedContent {
        let rule = self.rules.rules_for(platform);
        let processed = process_with_rule(body, hashtags, &rule);
        debug!(
            chars = processed.body.chars().count(),
            hashtags = processed.hashtags.len(),
            "Post-processed content"
        );
        processed
    }
}
