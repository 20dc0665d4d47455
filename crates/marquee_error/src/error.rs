//! Top-level error wrapper types.

use crate::{
    CatalogError, ConfigError, GenerationError, GenerationErrorKind, JsonError, RequestError,
    TemplateError,
};

/// Every failure the engine can report.
///
/// # Examples
///
/// ```
/// use marquee_error::{MarqueeError, ConfigError};
///
/// let err: MarqueeError = ConfigError::new("bad value").into();
/// assert!(format!("{}", err).contains("Config Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MarqueeErrorKind {
    /// Malformed caller input
    #[from(RequestError)]
    Request(RequestError),
    /// External generation failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Unknown catalog identifier
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Template loading or rendering failure
    #[from(TemplateError)]
    Template(TemplateError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Marquee error with kind discrimination.
///
/// # Examples
///
/// ```
/// use marquee_error::{MarqueeResult, RequestError, RequestErrorKind};
///
/// fn might_fail() -> MarqueeResult<()> {
///     Err(RequestError::new(RequestErrorKind::NoPlatforms))?
/// }
///
/// assert!(might_fail().unwrap_err().is_invalid_request());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Marquee Error: {}", _0)]
pub struct MarqueeError(Box<MarqueeErrorKind>);

impl MarqueeError {
    /// Create a new error from a kind.
    pub fn new(kind: MarqueeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MarqueeErrorKind {
        &self.0
    }

    /// True when the caller's input was rejected.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self.kind(), MarqueeErrorKind::Request(_))
    }

    /// True when the caller abandoned the call.
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self.kind(),
            MarqueeErrorKind::Generation(GenerationError {
                kind: GenerationErrorKind::Cancelled,
                ..
            })
        )
    }
}

// Generic From implementation for any type that converts to MarqueeErrorKind
impl<T> From<T> for MarqueeError
where
    T: Into<MarqueeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Marquee operations.
pub type MarqueeResult<T> = std::result::Result<T, MarqueeError>;
