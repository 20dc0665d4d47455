//! Slides and scenes of sequenced formats.

use serde::{Deserialize, Serialize};

/// Narrative role of a unit in its sequence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UnitRole {
    /// Attention-grabbing opener
    Hook,
    /// Practical tip
    Tip,
    /// Call-to-action
    Cta,
    /// Body content, and any role name the generator invents
    #[default]
    #[serde(other)]
    Content,
}

/// One slide or scene.
///
/// Field names follow the generation service's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// 1-based position, contiguous within its sequence
    #[serde(default)]
    pub ordinal: u32,
    /// Narrative role
    #[serde(default)]
    pub role: UnitRole,
    /// Heading
    #[serde(default)]
    pub title: String,
    /// Body text
    #[serde(default)]
    pub body: String,
    /// Ordered bullet points
    #[serde(default)]
    pub bullets: Vec<String>,
    /// Prompt for a visual generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_prompt: Option<String>,
    /// On-screen text overlay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_text: Option<String>,
    /// Duration in seconds (scenes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    /// Sticker or overlay suggestions
    #[serde(default)]
    pub stickers: Vec<String>,
    /// Mood tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

impl Unit {
    /// Create a unit with a position, role and title.
    pub fn new(ordinal: u32, role: UnitRole, title: impl Into<String>) -> Self {
        Self {
            ordinal,
            role,
            title: title.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Builder method to set the bullets.
    pub fn with_bullets(mut self, bullets: Vec<String>) -> Self {
        self.bullets = bullets;
        self
    }

    /// Builder method to set the visual prompt.
    pub fn with_visual_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.visual_prompt = Some(prompt.into());
        self
    }

    /// Builder method to set the duration.
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }
}
