//! Configuration type definitions
//!
//! This module contains all the struct and enum definitions for configuration.

use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::shortcuts::{
    effective_keys, hint_text, ConsumePolicy, EngineOptions, FingerprintStrategy, Platform,
    ShortcutAction, ShortcutDefinition,
};

// ============================================
// SHORTCUT CONFIG
// ============================================

/// One named shortcut as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutConfig {
    /// Identifier reported when the chord fires (e.g. "duplicate-line")
    pub id: String,
    /// Primary combination, as event codes or `Cmd`/`Alt`/`Ctrl`
    pub keys: Vec<String>,
    /// Combination used instead of `keys` on macOS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_keys: Option<Vec<String>>,
    /// Disabled shortcuts are ignored entirely (default: true)
    #[serde(default = "default_shortcut_enabled")]
    pub enabled: bool,
}

fn default_shortcut_enabled() -> bool {
    DEFAULT_SHORTCUT_ENABLED
}

impl ShortcutConfig {
    /// Bind this entry to an action.
    pub fn to_definition(&self, action: ShortcutAction) -> ShortcutDefinition {
        let definition = ShortcutDefinition::with_action(self.keys.iter().cloned(), action)
            .enabled(self.enabled);
        match &self.alternate_keys {
            Some(alternate) => definition.alternate_keys(alternate.iter().cloned()),
            None => definition,
        }
    }

    /// Hint text for the key set this entry uses on `platform`.
    pub fn hint(&self, platform: Platform) -> String {
        let keys = effective_keys(
            &self.keys,
            self.alternate_keys.as_deref(),
            platform.is_alternate_family(),
        );
        hint_text(keys, platform)
    }
}

// ============================================
// MAIN CONFIG
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Platform family override (default: detected at runtime)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Fingerprint strategy (default: "tokens")
    #[serde(default = "default_fingerprint")]
    pub fingerprint: FingerprintStrategy,
    /// What a match does to held keys (default: "allKeys")
    #[serde(default = "default_consume")]
    pub consume: ConsumePolicy,
    #[serde(default)]
    pub shortcuts: Vec<ShortcutConfig>,
}

fn default_fingerprint() -> FingerprintStrategy {
    DEFAULT_FINGERPRINT
}
fn default_consume() -> ConsumePolicy {
    DEFAULT_CONSUME
}

impl Default for Config {
    fn default() -> Self {
        Config {
            platform: None,
            fingerprint: DEFAULT_FINGERPRINT,
            consume: DEFAULT_CONSUME,
            shortcuts: Vec::new(),
        }
    }
}

impl Config {
    pub fn effective_platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            platform: self.effective_platform(),
            fingerprint: self.fingerprint,
            consume: self.consume,
        }
    }

    pub fn shortcut(&self, id: &str) -> Option<&ShortcutConfig> {
        self.shortcuts.iter().find(|s| s.id == id)
    }

    /// Flip a shortcut on or off. Returns false if no shortcut has that id.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.shortcuts.iter_mut().find(|s| s.id == id) {
            Some(shortcut) => {
                shortcut.enabled = enabled;
                true
            }
            None => false,
        }
    }
}
