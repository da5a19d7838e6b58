//! Ambient keyboard event stream.
//!
//! `KeyboardEvents` is a broadcast hub: every event emitted reaches every live
//! listener. Listeners are detached by dropping the `KeySubscription` returned
//! from `listen`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyTransition {
    Down,
    Up,
}

impl KeyTransition {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyTransition::Down => "down",
            KeyTransition::Up => "up",
        }
    }
}

/// One physical key transition, identified by the event source's raw code
/// (e.g. `KeyD`, `MetaLeft`, `Enter`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: String,
    pub transition: KeyTransition,
}

impl KeyEvent {
    pub fn down(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            transition: KeyTransition::Down,
        }
    }

    pub fn up(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            transition: KeyTransition::Up,
        }
    }
}

pub type KeyHandler = Arc<dyn Fn(&KeyEvent) + Send + Sync>;

struct Listener {
    id: u64,
    /// Cleared on detach, so a dispatch already in progress skips it.
    live: Arc<AtomicBool>,
    handler: KeyHandler,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

/// Shared keyboard event hub. Clones refer to the same set of listeners.
#[derive(Clone, Default)]
pub struct KeyboardEvents {
    listeners: Arc<Mutex<Listeners>>,
}

impl KeyboardEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a handler for both key-down and key-up transitions.
    pub fn listen<F>(&self, handler: F) -> KeySubscription
    where
        F: Fn(&KeyEvent) + Send + Sync + 'static,
    {
        let handler: KeyHandler = Arc::new(handler);
        let mut listeners = self.listeners.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push(Listener {
            id,
            live: Arc::new(AtomicBool::new(true)),
            handler,
        });
        debug!(listener_id = id, total = listeners.entries.len(), "Key listener attached");

        KeySubscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Deliver an event to every listener, in attach order.
    ///
    /// Handlers run without the hub lock held, so they may attach or detach
    /// listeners. Listeners attached during the call do not see this event;
    /// listeners detached during the call are skipped if not yet reached.
    pub fn emit(&self, event: &KeyEvent) {
        let recipients: Vec<(Arc<AtomicBool>, KeyHandler)> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|listener| (listener.live.clone(), listener.handler.clone()))
            .collect();

        for (live, handler) in recipients {
            if live.load(Ordering::Acquire) {
                handler(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }
}

/// Keeps a listener attached. Dropping it detaches the listener.
#[must_use = "dropping a KeySubscription detaches its listener immediately"]
pub struct KeySubscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        // The handler is dropped after the lock is released: its captures may
        // own other subscriptions on this hub.
        let removed = {
            let mut listeners = listeners.lock();
            let position = listeners.entries.iter().position(|l| l.id == self.id);
            let removed = position.map(|i| listeners.entries.remove(i));
            if let Some(listener) = &removed {
                listener.live.store(false, Ordering::Release);
            }
            debug!(listener_id = self.id, total = listeners.entries.len(), "Key listener detached");
            removed
        };
        drop(removed);
    }
}
