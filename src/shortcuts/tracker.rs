//! Press-state tracking for one subscription.
//!
//! The tracker only remembers keys that take part in some registered
//! combination. On every relevant key-down it fingerprints the held keys and
//! looks them up in the index. A hit hands the action back to the caller and
//! consumes the press state according to the `ConsumePolicy`.
//!
//! Actions are returned rather than invoked so the caller can release any lock
//! around the tracker first. An action is then free to re-register its owner.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::events::{KeyEvent, KeyTransition};
use super::index::RegistrationIndex;
use super::normalize::normalize_key;
use super::types::{ConsumePolicy, ShortcutAction};
use crate::logging;

pub struct PressTracker {
    index: Arc<RegistrationIndex>,
    consume: ConsumePolicy,
    pressed: BTreeSet<String>,
}

impl PressTracker {
    pub fn new(index: Arc<RegistrationIndex>, consume: ConsumePolicy) -> Self {
        Self {
            index,
            consume,
            pressed: BTreeSet::new(),
        }
    }

    pub fn handle(&mut self, event: &KeyEvent) -> Option<ShortcutAction> {
        match event.transition {
            KeyTransition::Down => self.key_down(&event.code),
            KeyTransition::Up => {
                self.key_up(&event.code);
                None
            }
        }
    }

    /// Record a key-down and return the action it completes, if any.
    pub fn key_down(&mut self, raw: &str) -> Option<ShortcutAction> {
        let key = normalize_key(raw);
        let tracked = self.index.is_key_of_interest(key);
        logging::log_key_event(raw, KeyTransition::Down, tracked);
        if !tracked {
            return None;
        }

        self.pressed.insert(key.to_string());
        let fingerprint = self.index.strategy().fingerprint(&self.pressed);
        let action = self.index.lookup(&fingerprint)?.clone();

        logging::log_chord_match(&fingerprint);
        match self.consume {
            ConsumePolicy::AllKeys => self.pressed.clear(),
            ConsumePolicy::TriggerKey => {
                self.pressed.remove(key);
            }
        }
        Some(action)
    }

    pub fn key_up(&mut self, raw: &str) {
        let key = normalize_key(raw);
        let was_down = self.pressed.remove(key);
        logging::log_key_event(raw, KeyTransition::Up, was_down);
    }

    pub fn is_pressed(&self, canonical: &str) -> bool {
        self.pressed.contains(canonical)
    }

    /// Canonical tokens currently held, sorted.
    pub fn pressed_keys(&self) -> impl Iterator<Item = &str> {
        self.pressed.iter().map(String::as_str)
    }

    pub fn is_idle(&self) -> bool {
        self.pressed.is_empty()
    }

    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}
