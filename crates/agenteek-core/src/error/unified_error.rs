//! UnifiedError trait implementations

use super::core_error::CoreError;
use super::types::{ToolsetError, UnifiedError};

/// The code is the error code; the message stays unset.
impl UnifiedError for CoreError {
    fn error_code(&self) -> &str {
        self.code()
    }

    fn message(&self) -> &str {
        ""
    }
}

impl UnifiedError for ToolsetError {
    fn error_code(&self) -> &str {
        match self {
            Self::Core(core) => core.error_code(),
            Self::Io { .. } => "TOOLSET_IO",
            Self::Other { .. } => "TOOLSET_OTHER",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Core(core) => core.message(),
            Self::Io { message, .. } | Self::Other { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Core(_) => None,
            Self::Io { context, .. } | Self::Other { context, .. } => context.as_deref(),
        }
    }
}
