//! Structured JSONL logging plus human-readable stderr output.
//!
//! This module provides dual-output logging:
//! - **JSONL to file** (~/.chordkit/logs/chord-kit.jsonl) - structured for tooling
//! - **Pretty to stderr** - human-readable for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! use chord_kit::logging;
//!
//! // Initialize logging - MUST keep guard alive for duration of program
//! let _guard = logging::init();
//!
//! tracing::info!(event_type = "app_start", "Application started");
//! ```
//!
//! Library code never initializes a subscriber. Without `init()` the helpers
//! below are no-ops, which keeps tests quiet.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::shortcuts::{Fingerprint, KeyTransition};

const LOG_FILE_NAME: &str = "chord-kit.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
pub fn init() -> LoggingGuard {
    if let Err(e) = fs::create_dir_all(get_log_dir()) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }
    let log_path = log_path();

    // Environment filter - default to info, allow override via RUST_LOG
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            None
        }
    };
    let (subscriber, file_guard) = build_subscriber(env_filter, file);
    subscriber.init();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Application logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Stack the JSONL file layer (when a file is available) and the stderr layer.
fn build_subscriber(
    env_filter: EnvFilter,
    file: Option<File>,
) -> (impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>) {
    // Pretty layer for stderr (human developers)
    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    // Non-blocking writer keeps key dispatch off the disk path
    let (json_layer, file_guard) = match file.map(tracing_appender::non_blocking) {
        Some((non_blocking_file, guard)) => {
            let json_layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(json_layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer);
    (subscriber, file_guard)
}

/// Get the log directory path (~/.chordkit/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".chordkit").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("chord-kit-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

// =============================================================================
// STRUCTURED LOGGING HELPERS
// =============================================================================

/// Log a keyboard transition as seen by a press tracker
pub fn log_key_event(code: &str, transition: KeyTransition, tracked: bool) {
    tracing::debug!(
        event_type = "key_event",
        key = code,
        transition = transition.as_str(),
        tracked = tracked,
        "Key {} {}", transition.as_str(), code
    );
}

/// Log a chord that matched a registered combination
pub fn log_chord_match(fingerprint: &Fingerprint) {
    tracing::info!(
        event_type = "chord_match",
        fingerprint = %fingerprint,
        "Chord matched: {}", fingerprint
    );
}

/// Log a subscription lifecycle change for a registration
pub fn log_registration(action: &str, key_count: usize, subscribed: bool) {
    tracing::debug!(
        event_type = "registration",
        action = action,
        key_count = key_count,
        subscribed = subscribed,
        "Registration {} ({} keys of interest)", action, key_count
    );
}
