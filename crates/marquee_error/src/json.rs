//! Output encoding failures.

use std::fmt::Display;

/// A report or listing could not be written out as JSON.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: could not encode {}: {} at line {} in {}", subject, message, line, file)]
pub struct JsonError {
    /// What was being encoded, e.g. `report`
    pub subject: String,
    /// Encoder message
    pub message: String,
    /// Caller line
    pub line: u32,
    /// Caller file
    pub file: &'static str,
}

impl JsonError {
    /// Wrap an encoder failure for `subject`.
    ///
    /// ```
    /// use marquee_error::JsonError;
    ///
    /// let err = JsonError::new("report", "key must be a string");
    /// assert_eq!(err.subject, "report");
    /// assert!(err.to_string().starts_with("JSON Error: could not encode report: key must"));
    /// ```
    #[track_caller]
    pub fn new(subject: impl Into<String>, source: impl Display) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            subject: subject.into(),
            message: source.to_string(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
