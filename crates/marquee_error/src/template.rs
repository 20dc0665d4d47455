//! Template catalog errors.

/// Problems loading or rendering content templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TemplateErrorKind {
    /// Failed to read a template file
    #[display("Failed to read template file: {}", _0)]
    FileRead(String),
    /// Failed to parse template TOML
    #[display("Failed to parse templates: {}", _0)]
    Parse(String),
    /// Pattern references a placeholder that has no value
    #[display("Template '{}' uses unknown placeholder '{}'", template, placeholder)]
    UnknownPlaceholder {
        /// Template id
        template: String,
        /// Placeholder name
        placeholder: String,
    },
    /// Template defines no fallback body
    #[display("Template '{}' has an empty fallback body", _0)]
    EmptyFallback(String),
}

/// Template error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The specific error condition
    pub kind: TemplateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
