//! Content templates loaded from TOML.

use crate::render::check_placeholders;
use marquee_core::FormatId;
use marquee_error::{
    MarqueeResult, RequestError, RequestErrorKind, TemplateError, TemplateErrorKind,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, instrument};

/// Template file shipped with the crate.
pub(crate) const BUNDLED_TEMPLATES: &str = include_str!("../templates.toml");

/// On-disk layout shared by template and tone catalogs.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogFile {
    #[serde(default)]
    pub(crate) tones: BTreeMap<String, String>,
    #[serde(default)]
    pub(crate) templates: BTreeMap<String, ContentTemplate>,
}

impl CatalogFile {
    #[track_caller]
    pub(crate) fn parse(source: &str) -> Result<Self, TemplateError> {
        toml::from_str(source)
            .map_err(|e| TemplateError::new(TemplateErrorKind::Parse(e.to_string())))
    }

    #[track_caller]
    pub(crate) fn read(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            TemplateError::new(TemplateErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Self::parse(&source)
    }
}

/// Titles used when the fallback composer builds slides or scenes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct FallbackUnits {
    /// Title of the opening unit
    #[serde(default = "default_hook")]
    hook: String,
    /// Titles for content units, cycled when the sequence is longer
    #[serde(default)]
    content: Vec<String>,
    /// Title of the tip unit
    #[serde(default = "default_tip")]
    tip: String,
    /// Title of the closing call-to-action
    #[serde(default = "default_cta")]
    cta: String,
}

fn default_hook() -> String {
    "{{topic}}".to_string()
}

fn default_tip() -> String {
    "Tip".to_string()
}

fn default_cta() -> String {
    "Learn more".to_string()
}

impl Default for FallbackUnits {
    fn default() -> Self {
        Self {
            hook: default_hook(),
            content: Vec::new(),
            tip: default_tip(),
            cta: default_cta(),
        }
    }
}

impl FallbackUnits {
    /// Title for the `index`-th content unit, 0-based.
    pub fn content_title(&self, index: usize) -> String {
        match self.content.len() {
            0 => format!("Part {}", index + 1),
            len => self.content[index % len].clone(),
        }
    }

    fn patterns(&self) -> impl Iterator<Item = &str> {
        [self.hook.as_str(), self.tip.as_str(), self.cta.as_str()]
            .into_iter()
            .chain(self.content.iter().map(String::as_str))
    }
}

/// A reusable domain template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ContentTemplate {
    /// Template id, taken from the TOML table key
    #[serde(skip)]
    id: String,
    /// Display name
    name: String,
    /// Formats this template applies to
    formats: Vec<FormatId>,
    /// Domain instruction injected into the prompt
    instruction: String,
    /// Body pattern for the local fallback
    fallback_body: String,
    /// Cover image pattern for the local fallback
    #[serde(default)]
    fallback_image_prompt: Option<String>,
    /// Unit titles for the local fallback
    #[serde(default)]
    fallback_units: FallbackUnits,
    /// Hashtags for the local fallback, without `#`
    #[serde(default)]
    fallback_hashtags: Vec<String>,
}

impl ContentTemplate {
    /// Whether the template can be used with `format`.
    pub fn applies_to(&self, format: FormatId) -> bool {
        self.formats.contains(&format)
    }

    fn validate(&self) -> Result<(), TemplateError> {
        if self.fallback_body.trim().is_empty() {
            return Err(TemplateError::new(TemplateErrorKind::EmptyFallback(
                self.id.clone(),
            )));
        }
        let patterns = [self.instruction.as_str(), self.fallback_body.as_str()]
            .into_iter()
            .chain(self.fallback_image_prompt.as_deref())
            .chain(self.fallback_units.patterns());
        for pattern in patterns {
            check_placeholders(&self.id, pattern)?;
        }
        Ok(())
    }
}

/// Template id used when a request names none.
pub fn default_template_id(format: FormatId) -> String {
    format!("{}_default", format)
}

/// Templates keyed by id.
///
/// # Example
///
/// ```
/// use marquee_core::FormatId;
/// use marquee_prompt::TemplateCatalog;
///
/// let catalog = TemplateCatalog::builtin().unwrap();
/// let template = catalog.resolve(None, FormatId::Carousel).unwrap();
/// assert_eq!(template.id(), "carousel_default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, ContentTemplate>,
}

impl TemplateCatalog {
    /// Catalog with the bundled templates.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled file is malformed.
    pub fn builtin() -> MarqueeResult<Self> {
        Self::from_toml_str(BUNDLED_TEMPLATES)
    }

    /// Parse a template file.
    ///
    /// Every pattern is checked for unknown placeholders at load time.
    ///
    /// # Errors
    ///
    /// Returns `Parse`, `UnknownPlaceholder` or `EmptyFallback`.
    pub fn from_toml_str(source: &str) -> MarqueeResult<Self> {
        Ok(Self::from_file_contents(CatalogFile::parse(source)?)?)
    }

    /// Load a template file from disk.
    #[instrument(fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path> + std::fmt::Debug) -> MarqueeResult<Self> {
        Ok(Self::from_file_contents(CatalogFile::read(path.as_ref())?)?)
    }

    pub(crate) fn from_file_contents(file: CatalogFile) -> Result<Self, TemplateError> {
        let mut templates = BTreeMap::new();
        for (id, mut template) in file.templates {
            template.id = id.trim().to_ascii_lowercase();
            template.validate()?;
            templates.insert(template.id.clone(), template);
        }
        debug!(count = templates.len(), "Loaded templates");
        Ok(Self { templates })
    }

    /// Merge `other` into this catalog; its templates replace same-id entries.
    pub fn extend(&mut self, other: TemplateCatalog) {
        for (id, template) in other.templates {
            debug!(template = %id, "Registering template");
            self.templates.insert(id, template);
        }
    }

    /// Template by id.
    pub fn get(&self, id: &str) -> Option<&ContentTemplate> {
        self.templates.get(&id.trim().to_ascii_lowercase())
    }

    /// Template for a request: the named one, else the format default.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTemplate` or `TemplateNotApplicable`.
    pub fn resolve(&self, id: Option<&str>, format: FormatId) -> MarqueeResult<&ContentTemplate> {
        let id = match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id.to_ascii_lowercase(),
            None => default_template_id(format),
        };
        let template = self
            .templates
            .get(&id)
            .ok_or_else(|| RequestError::new(RequestErrorKind::UnknownTemplate(id.clone())))?;
        if !template.applies_to(format) {
            return Err(RequestError::new(RequestErrorKind::TemplateNotApplicable {
                template: id,
                format: format.to_string(),
            })
            .into());
        }
        Ok(template)
    }

    /// Templates sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = &ContentTemplate> {
        self.templates.values()
    }

    /// Templates usable with `format`.
    pub fn for_format(&self, format: FormatId) -> impl Iterator<Item = &ContentTemplate> {
        self.iter().filter(move |t| t.applies_to(format))
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
