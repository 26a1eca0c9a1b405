//! Agenteek Core Library
//!
//! This crate provides the error value shared by the Agenteek file toolset:
//! [`CoreError`], a code-carrying error, and the [`ToolsetError`] domain enum
//! it travels in.

pub mod error;

// Re-export commonly used types
pub use error::{
    CoreError, ResultExt, ToolsetError, ToolsetResult, UNINITIALISED_CODE, UnifiedError,
};
