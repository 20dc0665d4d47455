//! Content formats and their structural shape.

use marquee_error::{CatalogError, CatalogErrorKind};
use serde::Serialize;
use std::str::FromStr;

/// Identifier of one of the five content formats.
///
/// # Examples
///
/// ```
/// use marquee_core::FormatId;
///
/// assert_eq!(FormatId::parse("Carousel").unwrap(), FormatId::Carousel);
/// assert_eq!(FormatId::Reel.to_string(), "reel");
/// assert!(FormatId::parse("podcast").is_err());
/// ```
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
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FormatId {
    /// Single social post
    Post,
    /// Short-lived vertical story frames
    Story,
    /// Multi-slide carousel
    Carousel,
    /// Short vertical video
    Reel,
    /// Long-form video
    Video,
}

impl FormatId {
    /// Parse a format id, failing with `UnknownFormat`.
    #[track_caller]
    pub fn parse(id: &str) -> Result<Self, CatalogError> {
        Self::from_str(id.trim())
            .map_err(|_| CatalogError::new(CatalogErrorKind::UnknownFormat(id.to_string())))
    }
}

/// Kind of unit a sequenced format is made of.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UnitKind {
    /// Static slide (carousel page, story frame)
    Slide,
    /// Timed video scene
    Scene,
}

/// Structural kind of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "unit", rename_all = "lowercase")]
pub enum FormatKind {
    /// Single body text
    Flat,
    /// Ordered list of slides or scenes
    Sequenced(UnitKind),
}

/// Immutable description of a content format.
///
/// Built once into the static format registry; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentFormat {
    /// Format identifier
    pub id: FormatId,
    /// Flat or sequenced
    pub kind: FormatKind,
    /// Default number of slides for slide formats
    pub default_unit_count: Option<u32>,
    /// Default total duration in seconds for scene formats
    pub default_duration: Option<u32>,
    /// Inclusive bounds for the slide-count or duration override
    pub override_range: Option<(u32, u32)>,
    /// Nominal length of one scene, used to derive scene count from duration
    pub seconds_per_scene: Option<u32>,
    /// Whether the last unit must be a call-to-action
    pub requires_cta: bool,
    /// Whether a tip unit sits right before the call-to-action
    pub includes_tip: bool,
    /// Human-readable feature list
    pub features: &'static [&'static str],
    /// Platforms that support this format
    pub platforms: &'static [&'static str],
}

impl ContentFormat {
    /// True for slide and scene formats.
    pub fn is_sequenced(&self) -> bool {
        matches!(self.kind, FormatKind::Sequenced(_))
    }

    /// Unit kind for sequenced formats.
    pub fn unit_kind(&self) -> Option<UnitKind> {
        match self.kind {
            FormatKind::Flat => None,
            FormatKind::Sequenced(kind) => Some(kind),
        }
    }

    /// Whether `platform` natively supports this format.
    pub fn supports(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p.eq_ignore_ascii_case(platform))
    }
}
