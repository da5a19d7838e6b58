//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

use crate::shortcuts::{ConsumePolicy, FingerprintStrategy};

/// Default config file location (tilde-expanded at load time)
pub const DEFAULT_CONFIG_PATH: &str = "~/.chordkit/config.json";

/// Token-level fingerprints: anagram key sets stay distinct
pub const DEFAULT_FINGERPRINT: FingerprintStrategy = FingerprintStrategy::Tokens;

/// Forget every held key after a match
pub const DEFAULT_CONSUME: ConsumePolicy = ConsumePolicy::AllKeys;

/// Shortcuts are enabled unless the config says otherwise
pub const DEFAULT_SHORTCUT_ENABLED: bool = true;
