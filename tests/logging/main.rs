use log::{Level, LevelFilter, Log, Metadata, Record};
use std::{
    panic,
    sync::{Mutex, MutexGuard, OnceLock},
};

use examplesrc::{timed, timed_async};

/// Logger that keeps every info message so tests can inspect them.
struct CapturingLogger {
    messages: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.messages
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

fn logger() -> &'static CapturingLogger {
    static LOGGER: OnceLock<&'static CapturingLogger> = OnceLock::new();
    LOGGER.get_or_init(|| {
        let logger: &'static CapturingLogger = Box::leak(Box::new(CapturingLogger {
            messages: Mutex::new(Vec::new()),
        }));
        log::set_logger(logger).expect("Logger already installed");
        log::set_max_level(LevelFilter::Info);
        logger
    })
}

fn messages() -> MutexGuard<'static, Vec<String>> {
    logger()
        .messages
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

fn assert_timing_logged(label: &str) {
    let prefix = format!("{} took ", label);
    let is_timing = |message: &str| {
        message
            .strip_prefix(&prefix)
            .and_then(|rest| rest.strip_suffix('s'))
            .and_then(|secs| secs.parse::<f64>().ok())
            .is_some()
    };
    let messages = messages();
    assert!(
        messages.iter().any(|m| is_timing(m)),
        "no timing message for {} in {:?}",
        label,
        *messages
    );
}

#[test]
fn test_timing_logged_on_success() {
    logger();
    assert_eq!(timed("succeeding", || 42), 42);
    assert_timing_logged("succeeding");
}

#[test]
fn test_timing_logged_when_operation_returns_err() {
    logger();
    let result: Result<u32, String> = timed("failing", || Err("boom".to_string()));
    assert!(result.is_err());
    assert_timing_logged("failing");
}

#[test]
fn test_timing_logged_when_operation_panics() {
    logger();
    let outcome = panic::catch_unwind(|| timed("panicking", || panic!("wrapped failure")));
    assert!(outcome.is_err());
    assert_timing_logged("panicking");
}

#[tokio::test]
async fn test_timing_logged_for_futures() {
    logger();
    let value = timed_async("awaiting", async { "ready" }).await;
    assert_eq!(value, "ready");
    assert_timing_logged("awaiting");
}
