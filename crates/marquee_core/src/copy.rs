//! Raw output of the external text generator.

use crate::Unit;
use serde::{Deserialize, Serialize};

/// What the text-generation service returns for one prompt.
///
/// # Examples
///
/// ```
/// use marquee_core::GeneratedCopy;
///
/// let copy: GeneratedCopy = serde_json::from_str(
///     r##"{"body": "Launch day!", "hashtags": ["#launch"], "imagePrompt": "confetti"}"##,
/// ).unwrap();
///
/// assert_eq!(copy.hashtags, vec!["#launch"]);
/// assert!(copy.units.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCopy {
    /// Body text
    #[serde(default)]
    pub body: String,
    /// Hashtags in generator order
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Cover or thumbnail image prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    /// Slides or scenes, if the generator produced any
    #[serde(default, alias = "slides", alias = "scenes")]
    pub units: Vec<Unit>,
}

impl GeneratedCopy {
    /// Create copy with a body and hashtags.
    pub fn new(body: impl Into<String>, hashtags: Vec<String>) -> Self {
        Self {
            body: body.into(),
            hashtags,
            image_prompt: None,
            units: Vec::new(),
        }
    }
}
