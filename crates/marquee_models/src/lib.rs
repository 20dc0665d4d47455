//! Text-generation backends and brand-context providers for Marquee.
//!
//! - [`HttpTextGenerator`]: JSON-over-HTTP client for a generation service
//! - [`OfflineGenerator`]: always unavailable, forcing local fallback
//! - [`StaticBrandContext`] and [`FileBrandContext`]: brand descriptions

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod brand;
mod endpoint;
mod http;
mod offline;

pub use brand::{FileBrandContext, StaticBrandContext};
pub use endpoint::EndpointConfig;
pub use http::HttpTextGenerator;
pub use offline::OfflineGenerator;
