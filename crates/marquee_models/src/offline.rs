//! Generator that never reaches a service.

use async_trait::async_trait;
use marquee_core::GeneratedCopy;
use marquee_error::{GenerationError, GenerationErrorKind, MarqueeResult};
use marquee_interface::TextGenerator;

/// Always fails with [`GenerationErrorKind::Unavailable`].
///
/// Plugged in for `--offline` runs so that every platform goes through the
/// local fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn generate(&self, _prompt: &str) -> MarqueeResult<GeneratedCopy> {
        Err(GenerationError::new(GenerationErrorKind::Unavailable(
            "offline mode".to_string(),
        )))?
    }

    fn provider_name(&self) -> &str {
        "offline"
    }
}
