//! Tone guidance strings.

use crate::templates::{BUNDLED_TEMPLATES, CatalogFile};
use marquee_core::Tone;
use marquee_error::{MarqueeResult, TemplateError, TemplateErrorKind};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;
use strum::IntoEnumIterator;

/// Guidance line for each tone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToneCatalog {
    guidance: BTreeMap<Tone, String>,
}

impl ToneCatalog {
    /// Catalog from the bundled `[tones]` table, which covers every tone.
    ///
    /// # Errors
    ///
    /// Fails if the bundled file is malformed or misses a tone.
    pub fn builtin() -> MarqueeResult<Self> {
        let catalog = Self::from_toml_str(BUNDLED_TEMPLATES)?;
        if let Some(missing) = Tone::iter().find(|tone| !catalog.guidance.contains_key(tone)) {
            return Err(TemplateError::new(TemplateErrorKind::Parse(format!(
                "No guidance for tone '{}'",
                missing
            )))
            .into());
        }
        Ok(catalog)
    }

    /// Parse the `[tones]` table of a template file. Other tables are ignored.
    pub fn from_toml_str(source: &str) -> MarqueeResult<Self> {
        Ok(Self::from_file_contents(&CatalogFile::parse(source)?)?)
    }

    /// Load the `[tones]` table of a template file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> MarqueeResult<Self> {
        Ok(Self::from_file_contents(&CatalogFile::read(path.as_ref())?)?)
    }

    pub(crate) fn from_file_contents(file: &CatalogFile) -> Result<Self, TemplateError> {
        let mut guidance = BTreeMap::new();
        for (name, text) in &file.tones {
            let tone = Tone::parse(name).map_err(|_| {
                TemplateError::new(TemplateErrorKind::Parse(format!("Unknown tone '{}'", name)))
            })?;
            guidance.insert(tone, text.trim().to_string());
        }
        Ok(Self { guidance })
    }

    /// Replace guidance for every tone present in `other`.
    pub fn extend(&mut self, other: ToneCatalog) {
        self.guidance.extend(other.guidance);
    }

    /// Guidance for `tone`, with a generic line when none is registered.
    pub fn guidance(&self, tone: Tone) -> Cow<'_, str> {
        match self.guidance.get(&tone) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Owned(format!("Write in a {} tone.", tone)),
        }
    }
}
