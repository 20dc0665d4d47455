//! Brand-context providers.

use async_trait::async_trait;
use marquee_error::{ConfigError, MarqueeResult};
use marquee_interface::BrandContextProvider;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// A fixed brand description.
///
/// # Example
///
/// ```
/// use marquee_interface::BrandContextProvider;
/// use marquee_models::StaticBrandContext;
///
/// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// let brand = StaticBrandContext::new("Small bakery in Turin");
/// let context = rt.block_on(brand.brand_context()).unwrap();
/// assert_eq!(context.as_deref(), Some("Small bakery in Turin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticBrandContext {
    context: String,
}

impl StaticBrandContext {
    /// Wrap a description.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

#[async_trait]
impl BrandContextProvider for StaticBrandContext {
    async fn brand_context(&self) -> MarqueeResult<Option<String>> {
        let context = self.context.trim();
        Ok((!context.is_empty()).then(|| context.to_string()))
    }
}

/// Brand description read from a text file on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBrandContext {
    path: PathBuf,
}

impl FileBrandContext {
    /// Read from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BrandContextProvider for FileBrandContext {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn brand_context(&self) -> MarqueeResult<Option<String>> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ConfigError::new(format!(
                "Failed to read brand context {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let text = text.trim();
        debug!(len = text.len(), "Loaded brand context");
        Ok((!text.is_empty()).then(|| text.to_string()))
    }
}
