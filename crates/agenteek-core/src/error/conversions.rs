//! From trait implementations for ToolsetError conversions
//!
//! A `CoreError` found anywhere in the converted chain becomes `Core`.

use super::core_error::CoreError;
use super::recovery::find_core_error;
use super::types::ToolsetError;

impl From<CoreError> for ToolsetError {
    fn from(error: CoreError) -> Self {
        Self::Core(error)
    }
}

impl From<anyhow::Error> for ToolsetError {
    fn from(error: anyhow::Error) -> Self {
        let error = match error.downcast::<ToolsetError>() {
            Ok(toolset) => return toolset,
            Err(error) => error,
        };
        match find_core_error(&*error) {
            Some(core) => Self::Core(core.clone()),
            None => Self::other(error.to_string()),
        }
    }
}

impl From<std::io::Error> for ToolsetError {
    fn from(error: std::io::Error) -> Self {
        match find_core_error(&error) {
            Some(core) => Self::Core(core.clone()),
            None => Self::io(error.to_string()),
        }
    }
}
