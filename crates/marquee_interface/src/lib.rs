//! Collaborator traits for the Marquee content formatting engine.
//!
//! The engine consumes two external collaborators: a text generator that
//! turns a prompt into copy, and an optional brand-context provider. Both are
//! injected as trait objects so the engine stays testable without a network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{BrandContextProvider, TextGenerator};
