//! Configuration module - engine settings and configured shortcuts
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.chordkit/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, ShortcutConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::DEFAULT_CONFIG_PATH;

pub use types::{Config, ShortcutConfig};

pub use loader::{default_config_path, load_config, load_config_from, parse_config};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
