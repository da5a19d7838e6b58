//! Keyboard chord recognition.
//!
//! This module provides:
//! - Key normalization (left/right modifiers collapse to `Cmd`, `Alt`, `Ctrl`)
//! - Order-independent combination fingerprints
//! - A per-owner registration index (fingerprint -> action, keys of interest)
//! - Press-state tracking that fires an action when its chord is held
//! - A broadcast keyboard event hub with RAII subscriptions
//!
//! # Architecture
//!
//! Data flows one way: definitions -> `RegistrationIndex` -> `PressTracker`.
//! Each `ShortcutRegistration` owns one subscription to `KeyboardEvents`, and
//! each subscription owns its own press state. Every emitted key event reaches
//! every live subscription, so two owners registering the same chord both fire.
//!
//! # Example
//!
//! ```ignore
//! use chord_kit::shortcuts::{
//!     EngineOptions, KeyEvent, KeyboardEvents, ShortcutDefinition, ShortcutRegistration,
//! };
//!
//! let events = KeyboardEvents::new();
//! let registration = ShortcutRegistration::register(
//!     &events,
//!     vec![ShortcutDefinition::new(["Ctrl", "KeyD"], || println!("duplicate"))
//!         .alternate_keys(["Cmd", "KeyD"])],
//!     EngineOptions::default(),
//! );
//!
//! events.emit(&KeyEvent::down("MetaLeft"));
//! events.emit(&KeyEvent::down("KeyD")); // prints "duplicate" on macOS
//! ```

mod display;
mod events;
mod fingerprint;
mod index;
mod normalize;
mod registration;
mod tracker;
mod types;


pub use display::hint_text;
pub use events::{KeyEvent, KeyHandler, KeySubscription, KeyTransition, KeyboardEvents};
pub use fingerprint::{Fingerprint, FingerprintStrategy};
pub use index::RegistrationIndex;
pub use normalize::{normalize_key, ALT, CMD, CTRL};
pub use registration::ShortcutRegistration;
pub use tracker::PressTracker;
pub use types::{
    effective_keys, ConsumePolicy, EngineOptions, Platform, RegistrationStatus, ShortcutAction,
    ShortcutDefinition,
};
