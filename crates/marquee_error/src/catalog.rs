//! Catalog lookup errors.

/// Identifier lookups that failed against the static catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CatalogErrorKind {
    /// Format id is not one of the defined formats
    #[display("Unknown format: {}", _0)]
    UnknownFormat(String),
    /// Platform id has no rule
    #[display("Unknown platform: {}", _0)]
    UnknownPlatform(String),
    /// Tone name is not recognised
    #[display("Unknown tone: {}", _0)]
    UnknownTone(String),
}

/// Catalog error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The specific error condition
    pub kind: CatalogErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new CatalogError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
