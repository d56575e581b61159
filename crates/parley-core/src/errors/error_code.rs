//! ParleyErrorCode trait for the outer request layer.

/// Stable, machine-readable code for every error enum, so a transport layer
/// can map failures to responses without matching on message text.
pub trait ParleyErrorCode {
    /// Returns the error code string (e.g., "DUPLICATE_QUESTION").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const DUPLICATE_QUESTION: &str = "DUPLICATE_QUESTION";
pub const PERSISTENCE_ERROR: &str = "PERSISTENCE_ERROR";
pub const EMPTY_QUERY: &str = "EMPTY_QUERY";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
