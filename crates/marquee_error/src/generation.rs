//! External generation failures.

/// Ways the external text-generation collaborator can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Network or connection failure
    #[display("Transport error: {}", _0)]
    Transport(String),
    /// Service answered with a non-success status
    #[display("Service returned HTTP {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },
    /// Response could not be decoded
    #[display("Failed to decode generation response: {}", _0)]
    Decode(String),
    /// Call exceeded its individual timeout
    #[display("Generation timed out after {}ms", _0)]
    Timeout(u64),
    /// Caller abandoned the request
    #[display("Generation cancelled")]
    Cancelled,
    /// Any other unavailability reported by a generator
    #[display("Generation unavailable: {}", _0)]
    Unavailable(String),
}

impl GenerationErrorKind {
    /// Whether retrying the same prompt may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationErrorKind::Transport(_)
            | GenerationErrorKind::Timeout(_)
            | GenerationErrorKind::Unavailable(_) => true,
            GenerationErrorKind::Status { status, .. } => *status == 429 || *status >= 500,
            GenerationErrorKind::Decode(_) | GenerationErrorKind::Cancelled => false,
        }
    }
}

/// External generation error with location tracking.
///
/// # Examples
///
/// ```
/// use marquee_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Timeout(20_000));
/// assert!(err.kind.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
