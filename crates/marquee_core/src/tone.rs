//! Writing tones.

use marquee_error::{CatalogError, CatalogErrorKind};
use std::str::FromStr;

/// Writing tone requested by the operator or forced by a platform.
///
/// # Examples
///
/// ```
/// use marquee_core::Tone;
///
/// assert_eq!(Tone::parse("PROFESSIONAL").unwrap(), Tone::Professional);
/// assert_eq!(Tone::default(), Tone::Friendly);
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
    Default,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tone {
    /// Formal, credible, business register
    Professional,
    /// Warm and approachable
    #[default]
    Friendly,
    /// Relaxed, conversational
    Casual,
    /// High energy, exclamatory
    Enthusiastic,
    /// Fact-driven, explanatory
    Informative,
    /// Light, witty
    Humorous,
    /// Aspirational, motivating
    Inspirational,
    /// Time-pressured, action-oriented
    Urgent,
}

impl Tone {
    /// Parse a tone name, failing with `UnknownTone`.
    #[track_caller]
    pub fn parse(name: &str) -> Result<Self, CatalogError> {
        Self::from_str(name.trim())
            .map_err(|_| CatalogError::new(CatalogErrorKind::UnknownTone(name.to_string())))
    }
}
