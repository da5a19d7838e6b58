//! chord-kit - drive the chord engine from stdin
//!
//! Registers the shortcuts from the config file, reads key transitions as
//! JSONL on stdin and prints one JSON line per matched shortcut on stdout.
//!
//! # Usage
//!
//! ```bash
//! chord-kit --config ./shortcuts.json --platform linux < events.jsonl
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use chord_kit::config::{self, Config};
use chord_kit::error::ResultExt;
use chord_kit::logging;
use chord_kit::shortcuts::{KeyboardEvents, Platform, ShortcutDefinition, ShortcutRegistration};
use chord_kit::stdin_events::{self, ExternalCommand};

#[derive(Parser, Debug)]
#[command(name = "chord-kit", about = "Keyboard chord recognition over stdin key events")]
struct Cli {
    /// Config file (default: ~/.chordkit/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Platform family override: macos, windows or linux
    #[arg(long)]
    platform: Option<Platform>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init();

    let mut config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    if let Some(platform) = cli.platform {
        config.platform = Some(platform);
    }

    let events = KeyboardEvents::new();
    let mut registration =
        ShortcutRegistration::register(&events, definitions(&config), config.engine_options());

    let status = registration.status();
    emit_line(&serde_json::json!({
        "type": "registered",
        "isAlternatePlatformFamily": status.is_alternate_platform_family,
        "subscribed": registration.is_subscribed(),
        "shortcuts": hints(&config),
    }))?;

    let commands = stdin_events::start_stdin_listener();
    while let Ok(command) = commands.recv_blocking() {
        if let Some(event) = command.key_event() {
            events.emit(&event);
            continue;
        }
        if let ExternalCommand::SetEnabled { id, enabled } = command {
            if config.set_enabled(&id, enabled) {
                info!(event_type = "registration", id = %id, enabled, "Shortcut toggled");
                registration.set_definitions(definitions(&config));
            } else {
                warn!(event_type = "registration", id = %id, "No shortcut with that id");
            }
        }
    }

    info!(event_type = "app_lifecycle", action = "stopped", "stdin closed");
    Ok(())
}

/// Bind every configured shortcut to an action that reports its id on stdout.
fn definitions(config: &Config) -> Vec<ShortcutDefinition> {
    config
        .shortcuts
        .iter()
        .map(|shortcut| {
            let id = shortcut.id.clone();
            shortcut.to_definition(Arc::new(move || {
                emit_line(&serde_json::json!({ "type": "matched", "id": id })).log_err();
            }))
        })
        .collect()
}

fn hints(config: &Config) -> Vec<serde_json::Value> {
    let platform = config.effective_platform();
    config
        .shortcuts
        .iter()
        .filter(|s| s.enabled)
        .map(|s| serde_json::json!({ "id": s.id, "hint": s.hint(platform) }))
        .collect()
}

fn emit_line(value: &serde_json::Value) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", value).context("writing to stdout")?;
    stdout.flush().context("flushing stdout")
}
