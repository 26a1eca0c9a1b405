//! The code-carrying core error value

use thiserror::Error;

/// Code installed when the producer did not supply one.
///
/// Consumers may compare against these exact bytes.
pub const UNINITIALISED_CODE: &str = "non-initialisé";

/// Error raised by the toolset when a domain failure is detected.
///
/// Carries a single code. It has no message of its own and no cause: the
/// `Display` rendering is the bare type label.
#[derive(Error, Debug, Clone)]
#[error("CoreError")]
pub struct CoreError {
    code: String,
}

impl CoreError {
    /// Create an error whose code is [`UNINITIALISED_CODE`]
    pub fn new() -> Self {
        Self {
            code: UNINITIALISED_CODE.to_string(),
        }
    }

    /// Create an error with the given code, stored verbatim
    pub fn with_code(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The stored code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether the code is still the sentinel
    pub fn is_uninitialised(&self) -> bool {
        self.code == UNINITIALISED_CODE
    }

    /// Consume the error and return its code
    pub fn into_code(self) -> String {
        self.code
    }
}

impl Default for CoreError {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for CoreError {
    fn from(code: String) -> Self {
        Self::with_code(code)
    }
}

impl From<&str> for CoreError {
    fn from(code: &str) -> Self {
        Self::with_code(code)
    }
}
