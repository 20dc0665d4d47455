//! Post-processing of generated copy.
//!
//! Network-free, deterministic enforcement of each platform's limits:
//! hashtag capping, word-boundary truncation and emoji density. Every step
//! only ever removes text, so running the processor twice is the same as
//! running it once.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod emoji;
mod processor;

pub use emoji::{count_emoji, emoji_clusters, limit_emoji};
pub use processor::{
    ContentPostProcessor, ELLIPSIS, LOW_DENSITY_EMOJI, ProcessedContent, apply_emoji_density,
    cap_hashtags, process_with_rule, truncate_chars,
};
