//! Platform rule table.

use marquee_core::{EmojiDensity, PlatformRule, Tone};
use marquee_error::{CatalogError, CatalogErrorKind, MarqueeResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Platform whose rule doubles as the baseline for unknown platforms.
pub const BASELINE_PLATFORM: &str = "instagram";

/// Partial rule from configuration.
///
/// Only specified fields override the built-in rule. Overrides for platforms
/// without a built-in rule start from the baseline.
///
/// # Example
///
/// ```toml
/// [platforms.twitter]
/// max_chars = 25000
/// notes = ["Premium account: long posts allowed"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlatformRuleOverride {
    /// Maximum body characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,
    /// Maximum hashtags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hashtags: Option<usize>,
    /// Emoji policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_density: Option<EmojiDensity>,
    /// Tone override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone_override: Option<Tone>,
    /// Replacement structural notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    /// Replacement hashtag denylist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtag_denylist: Option<Vec<String>>,
}

impl PlatformRuleOverride {
    /// Apply the specified fields on top of `base`.
    pub fn apply(&self, base: PlatformRule) -> PlatformRule {
        let mut rule = base;
        if let Some(max_chars) = self.max_chars {
            rule = rule.with_max_chars(max_chars);
        }
        if let Some(max_hashtags) = self.max_hashtags {
            rule = rule.with_max_hashtags(max_hashtags);
        }
        if let Some(density) = self.emoji_density {
            rule = rule.with_emoji_density(density);
        }
        if let Some(tone) = self.tone_override {
            rule = rule.with_tone_override(Some(tone));
        }
        if let Some(notes) = &self.notes {
            rule = rule.with_notes(notes.clone());
        }
        if let Some(denylist) = &self.hashtag_denylist {
            rule = rule.with_hashtag_denylist(denylist.clone());
        }
        rule
    }
}

/// Read-only table of per-platform constraints.
///
/// Unknown platforms resolve to the baseline rule through [`rules_for`];
/// [`strict_rules_for`] rejects them instead.
///
/// [`rules_for`]: PlatformRuleTable::rules_for
/// [`strict_rules_for`]: PlatformRuleTable::strict_rules_for
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformRuleTable {
    rules: BTreeMap<String, PlatformRule>,
    baseline: PlatformRule,
}

impl Default for PlatformRuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PlatformRuleTable {
    /// Table with the built-in platform rules.
    pub fn builtin() -> Self {
        let rules: BTreeMap<String, PlatformRule> = builtin_rules()
            .into_iter()
            .map(|rule| (rule.platform().clone(), rule))
            .collect();
        let baseline = rules
            .get(BASELINE_PLATFORM)
            .cloned()
            .unwrap_or_else(instagram);
        Self { rules, baseline }
    }

    /// Apply configuration overrides, consuming the table.
    pub fn with_overrides(mut self, overrides: &HashMap<String, PlatformRuleOverride>) -> Self {
        for (platform, patch) in overrides {
            let key = platform.trim().to_ascii_lowercase();
            let base = match self.rules.remove(&key) {
                Some(rule) => rule,
                None => self.baseline().rekeyed(key.as_str()),
            };
            debug!(platform = %key, "Applying platform rule override");
            let rule = patch.apply(base);
            if key == BASELINE_PLATFORM {
                self.baseline = rule.clone();
            }
            self.rules.insert(key, rule);
        }
        self
    }

    /// Rule used for platforms without an entry.
    pub fn baseline(&self) -> &PlatformRule {
        &self.baseline
    }

    /// Rule for `platform`; unknown ids get the baseline re-keyed to the id.
    pub fn rules_for(&self, platform: &str) -> Cow<'_, PlatformRule> {
        let key = platform.trim().to_ascii_lowercase();
        match self.rules.get(&key) {
            Some(rule) => Cow::Borrowed(rule),
            None => {
                warn!(platform = %key, "Unknown platform, applying baseline rules");
                Cow::Owned(self.baseline().rekeyed(key))
            }
        }
    }

    /// Rule for `platform`, rejecting unknown ids.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownPlatform`.
    pub fn strict_rules_for(&self, platform: &str) -> MarqueeResult<&PlatformRule> {
        let key = platform.trim().to_ascii_lowercase();
        self.rules
            .get(&key)
            .ok_or_else(|| CatalogError::new(CatalogErrorKind::UnknownPlatform(key)).into())
    }

    /// Whether the table holds a rule for `platform`.
    pub fn contains(&self, platform: &str) -> bool {
        self.rules.contains_key(&platform.trim().to_ascii_lowercase())
    }

    /// The platform's tone override, else `requested`.
    pub fn effective_tone(&self, platform: &str, requested: Tone) -> Tone {
        self.rules_for(platform).effective_tone(requested)
    }

    /// Rules sorted by platform key.
    pub fn iter(&self) -> impl Iterator<Item = &PlatformRule> {
        self.rules.values()
    }

    /// Number of platforms in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn notes(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

fn instagram() -> PlatformRule {
    PlatformRule::new(BASELINE_PLATFORM, 2200, 30, EmojiDensity::High)
        .with_notes(notes(&[
            "Links in captions are not clickable; point readers to the link in bio",
            "Only the first 125 characters show before 'more', front-load the hook",
        ]))
        .with_hashtag_denylist(notes(&["followforfollow", "like4like", "f4f", "instagood"]))
}

fn builtin_rules() -> Vec<PlatformRule> {
    vec![
        instagram(),
        PlatformRule::new("facebook", 5000, 5, EmojiDensity::Medium).with_notes(notes(&[
            "Links are clickable and may appear in the post",
            "Keep the opening line under 80 characters for feed previews",
        ])),
        PlatformRule::new("linkedin", 3000, 5, EmojiDensity::Low)
            .with_tone_override(Some(Tone::Professional))
            .with_notes(notes(&[
                "Open with a one-line hook followed by a line break",
                "Links in the body reduce reach; suggest a link in the first comment",
            ])),
        PlatformRule::new("twitter", 280, 2, EmojiDensity::Medium).with_notes(notes(&[
            "Every link counts as 23 characters",
            "One idea per post, no threads",
        ])),
        PlatformRule::new("tiktok", 2200, 5, EmojiDensity::High)
            .with_tone_override(Some(Tone::Casual))
            .with_notes(notes(&[
                "The caption supports the video; keep it punchy",
                "End with a question to drive comments",
            ])),
        PlatformRule::new("youtube", 5000, 15, EmojiDensity::Low).with_notes(notes(&[
            "The first two lines appear above the fold",
            "Add chapter-style timestamps for videos longer than a minute",
        ])),
        PlatformRule::new("pinterest", 500, 20, EmojiDensity::Medium).with_notes(notes(&[
            "Write a keyword-rich description of the visual and its benefit",
        ])),
        PlatformRule::new("threads", 500, 5, EmojiDensity::Medium).with_notes(notes(&[
            "Conversational register, one short paragraph",
        ])),
        PlatformRule::new("email", 10000, 0, EmojiDensity::None).with_notes(notes(&[
            "Put the subject line on the first line",
            "Plain text; clickable links allowed",
            "No hashtags",
        ])),
    ]
}
