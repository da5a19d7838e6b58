//! Owner-scoped shortcut registration.
//!
//! A `ShortcutRegistration` belongs to one owner (a view, a panel, a mode) and
//! holds at most one subscription to the keyboard hub. Each subscription owns
//! its own press state; nothing is shared across owners or across
//! re-registrations.
//!
//! Lifecycle:
//! - A non-empty set of keys of interest acquires a subscription.
//! - Replacing the definitions with a different list releases the old
//!   subscription (and its press state) before acquiring a new one.
//! - Replacing them with an identical list is a no-op.
//! - An empty or fully disabled list, `clear()`, or drop releases it.

use std::sync::Arc;

use parking_lot::Mutex;

use super::events::{KeyEvent, KeySubscription, KeyboardEvents};
use super::index::RegistrationIndex;
use super::tracker::PressTracker;
use super::types::{EngineOptions, RegistrationStatus, ShortcutDefinition};
use crate::logging;

pub struct ShortcutRegistration {
    events: KeyboardEvents,
    options: EngineOptions,
    definitions: Vec<ShortcutDefinition>,
    index: Arc<RegistrationIndex>,
    subscription: Option<KeySubscription>,
}

impl ShortcutRegistration {
    /// An inert registration with no definitions.
    pub fn new(events: &KeyboardEvents, options: EngineOptions) -> Self {
        Self {
            events: events.clone(),
            options,
            definitions: Vec::new(),
            index: Arc::new(RegistrationIndex::empty(options.fingerprint)),
            subscription: None,
        }
    }

    pub fn register(
        events: &KeyboardEvents,
        definitions: Vec<ShortcutDefinition>,
        options: EngineOptions,
    ) -> Self {
        let mut registration = Self::new(events, options);
        registration.set_definitions(definitions);
        registration
    }

    /// Replace the full definition list for this owner.
    pub fn set_definitions(&mut self, definitions: Vec<ShortcutDefinition>) -> RegistrationStatus {
        if same_definitions(&self.definitions, &definitions) {
            return self.status();
        }

        self.release();
        self.index = Arc::new(RegistrationIndex::build(
            &definitions,
            self.options.is_alternate_platform(),
            self.options.fingerprint,
        ));
        self.definitions = definitions;
        self.acquire();
        self.status()
    }

    /// Drop every definition and release the subscription.
    pub fn clear(&mut self) {
        self.set_definitions(Vec::new());
    }

    pub fn status(&self) -> RegistrationStatus {
        RegistrationStatus {
            is_alternate_platform_family: self.options.is_alternate_platform(),
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn index(&self) -> &RegistrationIndex {
        &self.index
    }

    pub fn definitions(&self) -> &[ShortcutDefinition] {
        &self.definitions
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    fn acquire(&mut self) {
        let key_count = self.index.keys_of_interest().len();
        if key_count == 0 {
            logging::log_registration("inert", key_count, false);
            return;
        }

        let tracker = Mutex::new(PressTracker::new(self.index.clone(), self.options.consume));
        let subscription = self.events.listen(move |event: &KeyEvent| {
            // Lock released before the action runs.
            let action = tracker.lock().handle(event);
            if let Some(action) = action {
                action();
            }
        });
        self.subscription = Some(subscription);
        logging::log_registration("subscribed", key_count, true);
    }

    fn release(&mut self) {
        if self.subscription.take().is_some() {
            logging::log_registration("unsubscribed", self.index.keys_of_interest().len(), false);
        }
    }
}

impl Drop for ShortcutRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

fn same_definitions(current: &[ShortcutDefinition], next: &[ShortcutDefinition]) -> bool {
    current.len() == next.len() && current.iter().zip(next).all(|(a, b)| a.same_as(b))
}
