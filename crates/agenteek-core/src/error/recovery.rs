//! Recognizing a core error at a recovery site
//!
//! A `CoreError` may arrive bare, inside [`ToolsetError::Core`], as the
//! payload of an `io::Error`, boxed as `dyn Error`, or buried in a cause chain
//! built with `anyhow` context. The conversions into `ToolsetError` and the
//! helpers below all use the same walk, so they agree on what they find.

use super::core_error::CoreError;
use super::types::ToolsetError;
use std::error::Error;

/// Next link of the chain.
///
/// `io::Error::source()` skips its own payload, so the payload is the next
/// link for an `io::Error` that carries one.
fn next_link<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    match err
        .downcast_ref::<std::io::Error>()
        .and_then(std::io::Error::get_ref)
    {
        Some(payload) => {
            let payload: &'a (dyn Error + 'static) = payload;
            Some(payload)
        }
        None => err.source(),
    }
}

/// Find the first `CoreError` in `err` or its cause chain
pub fn find_core_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a CoreError> {
    std::iter::successors(Some(err), |e| next_link(*e)).find_map(|e| {
        e.downcast_ref::<CoreError>().or_else(|| {
            e.downcast_ref::<ToolsetError>()
                .and_then(ToolsetError::as_core)
        })
    })
}

/// Code of the first `CoreError` in the chain
pub fn core_code<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a str> {
    find_core_error(err).map(CoreError::code)
}

/// Log a recovered error and return the core error it carries, if any
pub fn log_recovered<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a CoreError> {
    match find_core_error(err) {
        Some(core) => {
            tracing::warn!(
                code = %core.code(),
                uninitialised = core.is_uninitialised(),
                "Recovered core error"
            );
            Some(core)
        }
        None => {
            tracing::debug!(error = %err, "Recovered error without core code");
            None
        }
    }
}
