//! Trait definitions for external collaborators.

use async_trait::async_trait;
use marquee_core::GeneratedCopy;
use marquee_error::MarqueeResult;

/// Core trait that all text-generation backends must implement.
///
/// Implementations may fail at any time with a network or timeout error;
/// callers treat every failure as recoverable.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate copy for one assembled prompt.
    async fn generate(&self, prompt: &str) -> MarqueeResult<GeneratedCopy>;

    /// Backend name for logs (e.g., "http", "offline").
    fn provider_name(&self) -> &str;
}

/// Supplies a free-form description of the brand.
///
/// Returning `Ok(None)` or an error never blocks generation; the engine
/// substitutes an empty string.
#[async_trait]
pub trait BrandContextProvider: Send + Sync {
    /// Fetch the current brand context.
    async fn brand_context(&self) -> MarqueeResult<Option<String>>;
}
