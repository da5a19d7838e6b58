//! Key events and control commands read from stdin.
//!
//! The host binary has no window of its own, so key transitions arrive as
//! JSON objects, one per line (JSONL format):
//!
//! ```json
//! {"type": "keyDown", "code": "MetaLeft"}
//! {"type": "keyDown", "code": "KeyD"}
//! {"type": "keyUp", "code": "KeyD"}
//! {"type": "setEnabled", "id": "duplicate", "enabled": false}
//! ```
//!
//! # Example Usage
//!
//! ```bash
//! printf '%s\n' '{"type":"keyDown","code":"MetaLeft"}' '{"type":"keyDown","code":"KeyD"}' \
//!   | ./chord-kit --platform macos
//! ```

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::shortcuts::KeyEvent;

/// Channel capacity for stdin commands. Human typing stays far below this.
const STDIN_CHANNEL_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExternalCommand {
    /// A key went down (raw event code, e.g. "KeyD", "MetaLeft")
    KeyDown { code: String },
    /// A key was released
    KeyUp { code: String },
    /// Enable or disable a configured shortcut by id, re-registering the set
    SetEnabled { id: String, enabled: bool },
}

impl ExternalCommand {
    /// The key event carried by this command, if any.
    pub fn key_event(&self) -> Option<KeyEvent> {
        match self {
            Self::KeyDown { code } => Some(KeyEvent::down(code.clone())),
            Self::KeyUp { code } => Some(KeyEvent::up(code.clone())),
            Self::SetEnabled { .. } => None,
        }
    }
}

/// Parse one stdin line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ExternalCommand>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some)
}

/// Start a thread that listens on stdin for JSONL commands.
/// Returns an async_channel::Receiver fed in arrival order.
///
/// The thread exits when stdin closes or the receiver is dropped.
pub fn start_stdin_listener() -> async_channel::Receiver<ExternalCommand> {
    use std::io::BufRead;

    let (tx, rx) = async_channel::bounded(STDIN_CHANNEL_CAPACITY);

    std::thread::spawn(move || {
        info!(event_type = "stdin", "Key event listener started");
        let stdin = std::io::stdin();
        let reader = stdin.lock();

        for line in reader.lines() {
            match line {
                Ok(line) => match parse_line(&line) {
                    Ok(Some(cmd)) => {
                        debug!(event_type = "stdin", command = ?cmd, "Parsed command");
                        // send_blocking is used since we're in a sync thread
                        if tx.send_blocking(cmd).is_err() {
                            debug!(event_type = "stdin", "Command channel closed, exiting");
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!(event_type = "stdin", error = %e, line = %line, "Failed to parse command");
                    }
                },
                Err(e) => {
                    warn!(event_type = "stdin", error = %e, "Error reading stdin");
                    break;
                }
            }
        }
        info!(event_type = "stdin", "Key event listener exiting");
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::KeyTransition;

    #[test]
    fn test_key_down_deserialization() {
        let cmd = parse_line(r#"{"type": "keyDown", "code": "MetaLeft"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(
            cmd,
            ExternalCommand::KeyDown {
                code: "MetaLeft".to_string()
            }
        );
        let event = cmd.key_event().unwrap();
        assert_eq!(event.code, "MetaLeft");
        assert_eq!(event.transition, KeyTransition::Down);
    }

    #[test]
    fn test_key_up_deserialization() {
        let cmd = parse_line(r#"{"type": "keyUp", "code": "KeyD"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(cmd.key_event(), Some(KeyEvent::up("KeyD")));
    }

    #[test]
    fn test_set_enabled_deserialization() {
        let cmd = parse_line(r#"{"type": "setEnabled", "id": "duplicate", "enabled": false}"#)
            .unwrap()
            .unwrap();
        match &cmd {
            ExternalCommand::SetEnabled { id, enabled } => {
                assert_eq!(id, "duplicate");
                assert!(!enabled);
            }
            _ => panic!("Expected SetEnabled command"),
        }
        assert!(cmd.key_event().is_none());
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn test_unknown_type_is_error() {
        assert!(parse_line(r#"{"type": "explode"}"#).is_err());
        assert!(parse_line(r#"{"type": "keyDown"}"#).is_err());
    }
}
