//! Static catalogs of content formats and platform constraints.
//!
//! Both catalogs are built once at start-up and are read-only afterwards, so
//! they can be shared across concurrent generation calls without locking.
//!
//! - [`FormatRegistry`]: the five content formats and their structural shape
//! - [`PlatformRuleTable`]: per-platform limits, with a permissive baseline
//!   for unknown platforms
//!
//! # Example
//!
//! ```
//! use marquee_catalog::{FormatRegistry, PlatformRuleTable};
//! use marquee_core::Tone;
//!
//! let formats = FormatRegistry::new();
//! assert_eq!(formats.default_unit_count("carousel").unwrap(), Some(7));
//!
//! let rules = PlatformRuleTable::builtin();
//! assert_eq!(*rules.rules_for("twitter").max_chars(), 280);
//! assert_eq!(rules.effective_tone("tiktok", Tone::Professional), Tone::Casual);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod formats;
mod platforms;

pub use formats::FormatRegistry;
pub use platforms::{BASELINE_PLATFORM, PlatformRuleOverride, PlatformRuleTable};
