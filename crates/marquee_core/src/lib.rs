//! Core data types for the Marquee content formatting engine.
//!
//! This crate provides the vocabulary shared by every other Marquee crate:
//! content formats and their units, platform rules, tones, generation
//! requests and per-platform results.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod copy;
mod format;
mod platform;
mod request;
mod result;
mod tone;
mod unit;

pub use copy::GeneratedCopy;
pub use format::{ContentFormat, FormatId, FormatKind, UnitKind};
pub use platform::{EmojiDensity, PlatformRule};
pub use request::{GenerationRequest, GenerationRequestBuilder};
pub use result::{GenerationReport, GenerationResult, GenerationStatus};
pub use tone::Tone;
pub use unit::{Unit, UnitRole};
