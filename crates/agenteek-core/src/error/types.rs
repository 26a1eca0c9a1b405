//! Core error types and traits for the Agenteek toolset

use super::core_error::CoreError;
use super::recovery::find_core_error;
use thiserror::Error;

/// Result type alias for toolset operations
pub type ToolsetResult<T> = Result<T, ToolsetError>;

/// Code-first view of a toolset error.
///
/// A recovery site branches on `error_code()`; `message()` and `context()`
/// only feed diagnostics. A `CoreError` answers with its own code and an
/// empty message.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Code identifying the failure
    fn error_code(&self) -> &str;

    /// Human-readable message, empty when none was given
    fn message(&self) -> &str;

    fn context(&self) -> Option<&str> {
        None
    }
}

/// Extension trait for adding context to Results
///
/// A core error anywhere in the failing chain comes out as
/// [`ToolsetError::Core`], without the context.
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C: std::fmt::Display>(self, context: C) -> ToolsetResult<T>;

    /// Add context lazily (only evaluated on error)
    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> ToolsetResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C: std::fmt::Display>(self, context: C) -> ToolsetResult<T> {
        self.map_err(|e| ToolsetError::wrap_foreign(e, context))
    }

    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> ToolsetResult<T> {
        self.map_err(|e| ToolsetError::wrap_foreign(e, f()))
    }
}

/// Main error type for the toolset
///
/// `Core` carries a [`CoreError`] unchanged; its rendering and source are
/// those of the inner value.
#[derive(Error, Debug, Clone)]
pub enum ToolsetError {
    /// Domain failure identified by a code
    #[error(transparent)]
    Core(CoreError),

    /// IO failure without a core error behind it
    #[error("IO error: {message}")]
    Io {
        message: String,
        context: Option<String>,
    },

    /// Any other foreign failure
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}

impl ToolsetError {
    fn wrap_foreign<E, C>(error: E, context: C) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
        C: std::fmt::Display,
    {
        if let Some(core) = find_core_error(&error) {
            return Self::Core(core.clone());
        }
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(error);
        match boxed.downcast::<ToolsetError>() {
            Ok(toolset) => toolset.with_context(context.to_string()),
            Err(other) => Self::other(format!("{}: {}", context, other)),
        }
    }
}
