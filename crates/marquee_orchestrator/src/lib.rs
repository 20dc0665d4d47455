//! Concurrent multi-platform generation for the Marquee engine.
//!
//! [`GenerationOrchestrator`] validates a request, assembles one prompt per
//! platform and runs every platform concurrently against the injected
//! [`TextGenerator`](marquee_interface::TextGenerator). Failed platforms are
//! recovered locally by [`FallbackGenerator`]; [`UnitSequencer`] guarantees
//! the slide and scene ordering invariants on every result.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod fallback;
mod orchestrator;
mod sequencer;

pub use config::GenerationConfig;
pub use fallback::{FallbackComposer, FallbackGenerator, topic_hashtag};
pub use orchestrator::GenerationOrchestrator;
pub use sequencer::UnitSequencer;
