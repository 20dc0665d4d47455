//! Prompt assembly for the Marquee content formatting engine.
//!
//! Templates and tone guidance are data: a bundled `templates.toml` ships
//! with the crate and can be extended from a user file at start-up.
//!
//! - [`TemplateCatalog`]: domain templates with fallback patterns
//! - [`ToneCatalog`]: one guidance line per tone
//! - [`PromptAssembler`]: combines format, template, topic, tone, brand and
//!   platform constraints into one prompt
//!
//! # Example
//!
//! ```
//! use marquee_core::{FormatId, GenerationRequest, Tone};
//! use marquee_prompt::PromptAssembler;
//!
//! let assembler = PromptAssembler::builtin().unwrap();
//! let request = GenerationRequest::builder()
//!     .topic("Productivity for freelancers")
//!     .format(FormatId::Carousel)
//!     .platform("linkedin")
//!     .tone(Tone::Humorous)
//!     .build()
//!     .unwrap();
//!
//! let prompt = assembler.assemble_default(&request, "linkedin").unwrap();
//! assert!(prompt.contains("exactly 7 slides"));
//! assert!(prompt.contains("Tone: professional"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod render;
mod templates;
mod tones;

pub use assembler::PromptAssembler;
pub use render::{PLACEHOLDERS, PlaceholderValues, check_placeholders, placeholders, render};
pub use templates::{ContentTemplate, FallbackUnits, TemplateCatalog, default_template_id};
pub use tones::ToneCatalog;

use marquee_error::MarqueeResult;
use std::path::Path;

/// Bundled templates and tones, extended from an optional user file.
///
/// Entries in the user file replace bundled entries with the same id.
pub fn load_catalogs(user_file: Option<&Path>) -> MarqueeResult<(TemplateCatalog, ToneCatalog)> {
    let mut templates = TemplateCatalog::builtin()?;
    let mut tones = ToneCatalog::builtin()?;
    if let Some(path) = user_file {
        templates.extend(TemplateCatalog::from_file(path)?);
        tones.extend(ToneCatalog::from_file(path)?);
    }
    Ok((templates, tones))
}
