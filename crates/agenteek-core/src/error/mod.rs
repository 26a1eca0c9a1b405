//! Error types for the Agenteek toolset
//!
//! The toolset signals domain failures with [`CoreError`], a value carrying a
//! free-form code. It is a regular `std::error::Error`, and it is also the
//! `Core` variant of [`ToolsetError`], the enum returned by toolset operations.
//!
//! Every error implements [`UnifiedError`], which exposes:
//! - error_code: identifier for programmatic handling
//! - message: human-readable message (empty for `CoreError`)
//! - context: optional context about where the error occurred

mod constructors;
mod context;
mod conversions;
mod core_error;
pub mod recovery;
mod types;
mod unified_error;

// Re-export all public types and traits
pub use core_error::{CoreError, UNINITIALISED_CODE};
pub use recovery::{core_code, find_core_error, log_recovered};
pub use types::{ResultExt, ToolsetError, ToolsetResult, UnifiedError};
