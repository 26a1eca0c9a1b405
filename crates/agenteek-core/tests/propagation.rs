//! Integration tests for propagating CoreError through the toolset
//!
//! Covers the recovery-site flow: raise with a code, cross a boundary,
//! recognize by type, read the code.

use agenteek_core::error::{core_code, find_core_error, log_recovered};
use agenteek_core::{CoreError, ToolsetError, ToolsetResult, UNINITIALISED_CODE, UnifiedError};
use std::error::Error;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn read_file(path: &str) -> Result<String, CoreError> {
    if path.is_empty() {
        return Err(CoreError::new());
    }
    Err(CoreError::with_code("E_IO"))
}

fn run_tool(path: &str) -> ToolsetResult<String> {
    let content = read_file(path)?;
    Ok(content)
}

fn run_boxed(path: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    Ok(read_file(path)?)
}

fn run_anyhow(path: &str) -> anyhow::Result<String> {
    use anyhow::Context;
    read_file(path).with_context(|| format!("failed to read {}", path))
}

#[test]
fn test_question_mark_into_toolset_error() {
    match run_tool("notes.md") {
        Err(ToolsetError::Core(core)) => assert_eq!(core.code(), "E_IO"),
        other => panic!("expected core error, got {:?}", other),
    }
}

#[test]
fn test_default_code_survives_propagation() {
    let err = run_tool("").unwrap_err();
    assert_eq!(err.error_code(), UNINITIALISED_CODE);
    assert_eq!(err.message(), "");
}

#[test]
fn test_boxed_dyn_error_downcast() {
    let err = run_boxed("notes.md").unwrap_err();
    let core = err
        .downcast_ref::<CoreError>()
        .expect("boxed error should be a CoreError");
    assert_eq!(core.code(), "E_IO");
    assert!(err.downcast_ref::<std::io::Error>().is_none());
}

#[test]
fn test_anyhow_recovery_site() {
    init_tracing();

    let err = run_anyhow("notes.md").unwrap_err();
    assert!(err.downcast_ref::<CoreError>().is_some());
    assert_eq!(core_code(&*err), Some("E_IO"));

    let recovered = log_recovered(&*err).map(CoreError::code);
    assert_eq!(recovered, Some("E_IO"));

    let toolset: ToolsetError = err.into();
    assert_eq!(toolset.error_code(), "E_IO");
}

#[test]
fn test_unrelated_error_not_matched() {
    init_tracing();

    let err: Box<dyn Error + Send + Sync> = Box::new(std::io::Error::other("disk full"));
    assert!(err.downcast_ref::<CoreError>().is_none());
    assert!(find_core_error(&*err).is_none());
    assert!(log_recovered(&*err).is_none());
}

#[test]
fn test_io_payload_recognized_everywhere() {
    fn write_file() -> std::io::Result<()> {
        Err(std::io::Error::other(CoreError::with_code("E_IO")))
    }

    let err = write_file().unwrap_err();
    assert_eq!(core_code(&err), Some("E_IO"));

    let via_anyhow = anyhow::Error::from(write_file().unwrap_err());
    assert_eq!(core_code(&*via_anyhow), Some("E_IO"));
    assert_eq!(ToolsetError::from(via_anyhow).error_code(), "E_IO");

    assert_eq!(ToolsetError::from(err).error_code(), "E_IO");
}

#[test]
fn test_rewrap_keeps_code() {
    let original = CoreError::with_code("E_NOT_FOUND");
    let rewrapped: ToolsetError = anyhow::Error::from(original).into();
    assert_eq!(rewrapped.as_core().map(CoreError::code), Some("E_NOT_FOUND"));
}

#[test]
fn test_shared_across_threads() {
    let err = std::sync::Arc::new(CoreError::with_code("E_SHARED"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let err = std::sync::Arc::clone(&err);
            std::thread::spawn(move || err.code().to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "E_SHARED");
    }
}

#[test]
fn test_returned_from_thread() {
    let handle = std::thread::spawn(|| -> Result<(), CoreError> {
        Err(CoreError::with_code("E_WORKER"))
    });
    let err = handle.join().unwrap().unwrap_err();
    assert_eq!(err.code(), "E_WORKER");
}

#[tokio::test]
async fn test_propagates_through_async_task() {
    let task = tokio::spawn(async { run_tool("notes.md").map(|_| ()) });
    let result = task.await.expect("task should not panic");
    let err = result.unwrap_err();
    assert!(err.is_core());
    assert_eq!(err.error_code(), "E_IO");
}

#[test]
fn test_distinct_instances_with_same_code() {
    let first = CoreError::with_code("E_DUP");
    let second = CoreError::with_code("E_DUP");
    assert_eq!(first.code(), second.code());
    assert!(!std::ptr::eq(&first, &second));
}

#[test]
fn test_is_send_sync_static() {
    fn assert_error<T: Error + Send + Sync + 'static>() {}
    assert_error::<CoreError>();
    assert_error::<ToolsetError>();
}
