//! Context management for ToolsetError

use super::types::ToolsetError;

impl ToolsetError {
    /// Add context to the error.
    ///
    /// `Core` is returned untouched: a core error carries its code only.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let ctx = Some(context.into());
        match &mut self {
            Self::Io { context: c, .. } | Self::Other { context: c, .. } => *c = ctx,
            Self::Core(_) => {}
        }
        self
    }
}
