//! Constructor and accessor methods for ToolsetError

use super::core_error::CoreError;
use super::types::ToolsetError;

impl ToolsetError {
    /// Create a core error with the given code
    pub fn core(code: impl Into<String>) -> Self {
        Self::Core(CoreError::with_code(code))
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            context: None,
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            context: None,
        }
    }

    /// The inner core error, if this is one
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            Self::Core(core) => Some(core),
            _ => None,
        }
    }

    pub fn is_core(&self) -> bool {
        matches!(self, Self::Core(_))
    }

    /// Unwrap the inner core error, handing back any other variant
    pub fn into_core(self) -> Result<CoreError, Self> {
        match self {
            Self::Core(core) => Ok(core),
            other => Err(other),
        }
    }
}
