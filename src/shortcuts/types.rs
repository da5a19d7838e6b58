//! Core chord types: shortcut definitions, platform family, engine options.
//!
//! This module provides:
//! - `ShortcutDefinition` - A key combination bound to an action
//! - `ShortcutAction` - The zero-argument callback invoked on a match
//! - `Platform` - Host platform family (decides which key set a definition uses)
//! - `EngineOptions` - Fingerprint strategy and consume policy for a registration

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::fingerprint::FingerprintStrategy;
use crate::error::ChordKitError;

/// Callback bound to a shortcut. Invoked synchronously from the key-down path.
pub type ShortcutAction = Arc<dyn Fn() + Send + Sync>;

/// A key combination and the action it triggers.
///
/// `keys` is the primary combination. `alternate_keys`, when present, replaces
/// `keys` on the alternate platform family (macOS) and is ignored elsewhere.
#[derive(Clone)]
pub struct ShortcutDefinition {
    pub keys: Vec<String>,
    pub alternate_keys: Option<Vec<String>>,
    pub enabled: bool,
    pub action: ShortcutAction,
}

impl ShortcutDefinition {
    pub fn new<I, S, F>(keys: I, action: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn() + Send + Sync + 'static,
    {
        Self::with_action(keys, Arc::new(action))
    }

    /// Build a definition around an already shared action.
    pub fn with_action<I, S>(keys: I, action: ShortcutAction) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            alternate_keys: None,
            enabled: true,
            action,
        }
    }

    pub fn alternate_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternate_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn disabled(self) -> Self {
        self.enabled(false)
    }

    /// The raw key set in effect for the given platform family.
    pub fn keys_for(&self, is_alternate_platform: bool) -> &[String] {
        effective_keys(&self.keys, self.alternate_keys.as_deref(), is_alternate_platform)
    }

    /// Identity comparison used to decide whether a re-registration is a no-op.
    ///
    /// Actions compare by pointer: two separately created closures are never the same.
    pub fn same_as(&self, other: &Self) -> bool {
        self.keys == other.keys
            && self.alternate_keys == other.alternate_keys
            && self.enabled == other.enabled
            && Arc::ptr_eq(&self.action, &other.action)
    }
}

/// Pick `alternate` on the alternate platform family when one is given.
pub fn effective_keys<'a>(
    keys: &'a [String],
    alternate: Option<&'a [String]>,
    is_alternate_platform: bool,
) -> &'a [String] {
    match alternate {
        Some(alternate) if is_alternate_platform => alternate,
        _ => keys,
    }
}

impl fmt::Debug for ShortcutDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutDefinition")
            .field("keys", &self.keys)
            .field("alternate_keys", &self.alternate_keys)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// Platform family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(target_os = "linux")]
        {
            Platform::Linux
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Platform::Linux
        }
    }

    /// macOS is the family on which `alternate_keys` take effect.
    pub fn is_alternate_family(&self) -> bool {
        matches!(self, Platform::MacOS)
    }
}

impl FromStr for Platform {
    type Err = ChordKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "macos" | "mac" | "darwin" => Ok(Platform::MacOS),
            "windows" | "win" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => Err(ChordKitError::UnknownPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        };
        f.write_str(name)
    }
}

/// What happens to the press state once a combination fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsumePolicy {
    /// Forget every held key. A held modifier must be pressed again before
    /// the same chord can fire a second time.
    #[default]
    AllKeys,
    /// Forget only the key that completed the chord, so re-tapping it while
    /// the modifiers stay held fires again.
    TriggerKey,
}

/// Per-registration engine settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    pub platform: Platform,
    pub fingerprint: FingerprintStrategy,
    pub consume: ConsumePolicy,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            fingerprint: FingerprintStrategy::default(),
            consume: ConsumePolicy::default(),
        }
    }
}

impl EngineOptions {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    pub fn is_alternate_platform(&self) -> bool {
        self.platform.is_alternate_family()
    }
}

/// Returned to callers on registration so they can render platform-specific hints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatus {
    pub is_alternate_platform_family: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternate_keys_only_apply_on_alternate_family() {
        let def = ShortcutDefinition::new(["Ctrl", "KeyD"], || {}).alternate_keys(["Cmd", "KeyD"]);
        assert_eq!(def.keys_for(true), ["Cmd", "KeyD"]);
        assert_eq!(def.keys_for(false), ["Ctrl", "KeyD"]);
    }

    #[test]
    fn primary_keys_used_when_no_alternate() {
        let def = ShortcutDefinition::new(["Cmd", "Enter"], || {});
        assert_eq!(def.keys_for(true), ["Cmd", "Enter"]);
    }

    #[test]
    fn same_as_compares_action_identity() {
        let action: ShortcutAction = Arc::new(|| {});
        let a = ShortcutDefinition::with_action(["Cmd", "KeyD"], action.clone());
        let b = ShortcutDefinition::with_action(["Cmd", "KeyD"], action);
        let c = ShortcutDefinition::new(["Cmd", "KeyD"], || {});
        assert!(a.same_as(&b));
        assert!(!a.same_as(&c));
        assert!(!a.same_as(&b.clone().disabled()));
    }

    #[test]
    fn platform_parses_common_names() {
        assert_eq!("macOS".parse::<Platform>().unwrap(), Platform::MacOS);
        assert_eq!("win".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Linux);
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn only_macos_is_alternate_family() {
        assert!(Platform::MacOS.is_alternate_family());
        assert!(!Platform::Windows.is_alternate_family());
        assert!(!Platform::Linux.is_alternate_family());
    }
}
