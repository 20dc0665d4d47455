//! Request validation error types.

/// Specific conditions that make a generation request invalid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RequestErrorKind {
    /// Topic is empty or whitespace only
    #[display("Topic must not be empty")]
    BlankTopic,
    /// No target platform selected
    #[display("At least one platform must be selected")]
    NoPlatforms,
    /// Prompt requested for a platform outside the request's platform set
    #[display("Platform '{}' is not part of this request", _0)]
    PlatformNotRequested(String),
    /// Structural override outside the format's bounds
    #[display("{} override {} for format '{}' is outside {}..={}", field, value, format, min, max)]
    OverrideOutOfRange {
        /// Override name (slides, duration_seconds)
        field: String,
        /// Format identifier
        format: String,
        /// Requested value
        value: u32,
        /// Minimum allowed
        min: u32,
        /// Maximum allowed
        max: u32,
    },
    /// Structural override that the format does not support
    #[display("{} override is not supported by format '{}'", field, format)]
    OverrideNotApplicable {
        /// Override name
        field: String,
        /// Format identifier
        format: String,
    },
    /// Template id not present in the catalog
    #[display("Unknown template: {}", _0)]
    UnknownTemplate(String),
    /// Template exists but does not apply to the requested format
    #[display("Template '{}' does not apply to format '{}'", template, format)]
    TemplateNotApplicable {
        /// Template id
        template: String,
        /// Format identifier
        format: String,
    },
    /// Platform id rejected because strict platform lookup is enabled
    #[display("Unknown platform '{}' (strict platform lookup is enabled)", _0)]
    UnknownPlatform(String),
    /// Request builder was missing a required field
    #[display("Invalid request: {}", _0)]
    Builder(String),
}

/// Invalid caller input, surfaced synchronously and never retried.
///
/// # Examples
///
/// ```
/// use marquee_error::{RequestError, RequestErrorKind};
///
/// let err = RequestError::new(RequestErrorKind::NoPlatforms);
/// assert!(format!("{}", err).contains("platform"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid Request: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    /// The specific error condition
    pub kind: RequestErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RequestError {
    /// Create a new RequestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Missing required builder field.
impl From<derive_builder::UninitializedFieldError> for RequestError {
    #[track_caller]
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::new(RequestErrorKind::Builder(format!(
            "missing field '{}'",
            err.field_name()
        )))
    }
}

/// Convert from derive_builder error string.
impl From<String> for RequestError {
    #[track_caller]
    fn from(msg: String) -> Self {
        Self::new(RequestErrorKind::Builder(msg))
    }
}
