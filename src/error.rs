use std::path::PathBuf;

use thiserror::Error;
use tracing::error;

/// Errors raised at the configuration and CLI surface.
///
/// The chord engine itself is total and never returns these.
#[derive(Error, Debug)]
pub enum ChordKitError {
    #[error("Failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Unknown platform '{0}' (expected macos, windows or linux)")]
    UnknownPlatform(String),
}

pub type Result<T> = std::result::Result<T, ChordKitError>;

/// Report a failure from a side effect that has nobody to return it to,
/// such as a shortcut action writing to stdout.
pub trait ResultExt<T> {
    /// Log the error at the caller's location and continue with `None`.
    fn log_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        let error = match self {
            Ok(value) => return Some(value),
            Err(error) => error,
        };
        let caller = std::panic::Location::caller();
        error!(
            event_type = "error",
            error = %error,
            location = %format_args!("{}:{}", caller.file(), caller.line()),
            "Ignored failure"
        );
        None
    }
}
