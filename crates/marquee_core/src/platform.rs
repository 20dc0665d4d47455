//! Per-platform publishing constraints.

use crate::Tone;
use serde::{Deserialize, Serialize};

/// How many emoji a platform tolerates in the body.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EmojiDensity {
    /// No emoji at all
    None,
    /// A couple of emoji at most
    Low,
    /// Emoji welcome
    Medium,
    /// Emoji-heavy style is native to the platform
    High,
}

/// Constraints for one publishing platform.
///
/// # Examples
///
/// ```
/// use marquee_core::{EmojiDensity, PlatformRule, Tone};
///
/// let rule = PlatformRule::new("linkedin", 3000, 5, EmojiDensity::Low)
///     .with_tone_override(Some(Tone::Professional));
///
/// assert_eq!(*rule.max_chars(), 3000);
/// assert_eq!(rule.effective_tone(Tone::Casual), Tone::Professional);
/// ```
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
pub struct PlatformRule {
    /// Platform key (lower-case)
    platform: String,
    /// Maximum characters in the flat body, ellipsis included
    max_chars: usize,
    /// Maximum number of hashtags
    max_hashtags: usize,
    /// Emoji policy
    emoji_density: EmojiDensity,
    /// Tone that supersedes the requested tone
    #[serde(default)]
    tone_override: Option<Tone>,
    /// Free-form structural notes passed to the generator
    #[serde(default)]
    notes: Vec<String>,
    /// Hashtags never published on this platform
    #[serde(default)]
    hashtag_denylist: Vec<String>,
}

impl PlatformRule {
    /// Create a rule with no tone override, notes or denylist.
    pub fn new(
        platform: impl Into<String>,
        max_chars: usize,
        max_hashtags: usize,
        emoji_density: EmojiDensity,
    ) -> Self {
        Self {
            platform: platform.into().to_ascii_lowercase(),
            max_chars,
            max_hashtags,
            emoji_density,
            tone_override: None,
            notes: Vec::new(),
            hashtag_denylist: Vec::new(),
        }
    }

    /// Copy of this rule filed under another platform key.
    pub fn rekeyed(&self, platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into().to_ascii_lowercase(),
            ..self.clone()
        }
    }

    /// The platform's tone override if any, else `requested`.
    pub fn effective_tone(&self, requested: Tone) -> Tone {
        self.tone_override.unwrap_or(requested)
    }

    /// Whether `tag` is denylisted (case-insensitive, leading `#` optional).
    pub fn is_denied(&self, tag: &str) -> bool {
        let tag = tag.trim().trim_start_matches('#');
        self.hashtag_denylist
            .iter()
            .any(|denied| denied.trim().trim_start_matches('#').eq_ignore_ascii_case(tag))
    }
}
