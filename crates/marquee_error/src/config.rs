//! Invalid or unreadable configuration.

/// A configuration layer failed to load, or a loaded value is out of range.
///
/// The message names the offending key (`generation.timeout_ms`, `endpoint.base_url`)
/// or the file that could not be read.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong, including the key or path
    pub message: String,
    /// Caller line
    pub line: u32,
    /// Caller file
    pub file: &'static str,
}

impl ConfigError {
    /// Capture the caller's location alongside `message`.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
