//! Error types for the Marquee content formatting engine.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The taxonomy maps onto how callers react:
//! - [`RequestError`]: malformed caller input, surfaced immediately, never retried
//! - [`GenerationError`]: the external generator failed or timed out, recovered
//!   per platform by the local fallback
//! - [`CatalogError`]: unknown format or platform identifiers
//! - [`TemplateError`], [`ConfigError`], [`JsonError`]: start-up and data problems
//!
//! # Examples
//!
//! ```
//! use marquee_error::{MarqueeResult, RequestError, RequestErrorKind};
//!
//! fn validate(topic: &str) -> MarqueeResult<()> {
//!     if topic.trim().is_empty() {
//!         Err(RequestError::new(RequestErrorKind::BlankTopic))?
//!     }
//!     Ok(())
//! }
//!
//! let err = validate("   ").unwrap_err();
//! assert!(err.is_invalid_request());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod generation;
mod json;
mod request;
mod template;

pub use catalog::{CatalogError, CatalogErrorKind};
pub use config::ConfigError;
pub use error::{MarqueeError, MarqueeErrorKind, MarqueeResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use json::JsonError;
pub use request::{RequestError, RequestErrorKind};
pub use template::{TemplateError, TemplateErrorKind};
