//! Registration index: fingerprint -> action lookup plus the keys worth tracking.
//!
//! Rebuilt from scratch whenever an owner's definition list changes.

use std::collections::{HashMap, HashSet};

use smallvec::SmallVec;
use tracing::debug;

use super::fingerprint::{Fingerprint, FingerprintStrategy};
use super::normalize::normalize_key;
use super::types::{ShortcutAction, ShortcutDefinition};

pub struct RegistrationIndex {
    strategy: FingerprintStrategy,
    by_fingerprint: HashMap<Fingerprint, ShortcutAction>,
    keys_of_interest: HashSet<String>,
}

impl RegistrationIndex {
    /// An index with no combinations. Nothing is of interest.
    pub fn empty(strategy: FingerprintStrategy) -> Self {
        Self {
            strategy,
            by_fingerprint: HashMap::new(),
            keys_of_interest: HashSet::new(),
        }
    }

    /// Build the index from enabled definitions, in order.
    ///
    /// When two enabled definitions share a fingerprint the later one wins.
    pub fn build(
        definitions: &[ShortcutDefinition],
        is_alternate_platform: bool,
        strategy: FingerprintStrategy,
    ) -> Self {
        let mut index = Self::empty(strategy);

        for definition in definitions.iter().filter(|d| d.enabled) {
            let keys: SmallVec<[&str; 4]> = definition
                .keys_for(is_alternate_platform)
                .iter()
                .map(|k| normalize_key(k))
                .collect();

            let fingerprint = strategy.fingerprint(&keys);
            if index
                .by_fingerprint
                .insert(fingerprint.clone(), definition.action.clone())
                .is_some()
            {
                debug!(
                    event_type = "registration",
                    fingerprint = %fingerprint,
                    "Later shortcut definition replaces an earlier one"
                );
            }

            index
                .keys_of_interest
                .extend(keys.iter().map(|k| k.to_string()));
        }

        index
    }

    pub fn strategy(&self) -> FingerprintStrategy {
        self.strategy
    }

    pub fn lookup(&self, fingerprint: &Fingerprint) -> Option<&ShortcutAction> {
        self.by_fingerprint.get(fingerprint)
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.by_fingerprint.contains_key(fingerprint)
    }

    pub fn is_key_of_interest(&self, canonical: &str) -> bool {
        self.keys_of_interest.contains(canonical)
    }

    pub fn keys_of_interest(&self) -> &HashSet<String> {
        &self.keys_of_interest
    }

    /// Number of distinct combinations.
    pub fn len(&self) -> usize {
        self.by_fingerprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_fingerprint.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting(counter: &Arc<AtomicUsize>) -> impl Fn() + Send + Sync + 'static {
        let counter = counter.clone();
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn fp(keys: &[&str]) -> Fingerprint {
        FingerprintStrategy::Tokens.fingerprint(keys)
    }

    #[test]
    fn disabled_definitions_are_skipped_entirely() {
        let defs = vec![
            ShortcutDefinition::new(["Cmd", "KeyD"], || {}).disabled(),
            ShortcutDefinition::new(["Ctrl", "Enter"], || {}),
        ];
        let index = RegistrationIndex::build(&defs, false, FingerprintStrategy::Tokens);

        assert_eq!(index.len(), 1);
        assert!(!index.contains(&fp(&["Cmd", "KeyD"])));
        assert!(!index.is_key_of_interest("Cmd"));
        assert!(!index.is_key_of_interest("KeyD"));
        assert!(index.is_key_of_interest("Ctrl"));
        assert!(index.is_key_of_interest("Enter"));
    }

    #[test]
    fn keys_are_normalized_before_indexing() {
        let defs = vec![ShortcutDefinition::new(["MetaLeft", "KeyD"], || {})];
        let index = RegistrationIndex::build(&defs, false, FingerprintStrategy::Tokens);

        assert!(index.contains(&fp(&["Cmd", "KeyD"])));
        assert!(index.is_key_of_interest("Cmd"));
        assert!(!index.is_key_of_interest("MetaLeft"));
    }

    #[test]
    fn alternate_keys_chosen_only_on_alternate_platform() {
        let defs = vec![
            ShortcutDefinition::new(["Ctrl", "KeyS"], || {}).alternate_keys(["Cmd", "KeyS"]),
        ];

        let mac = RegistrationIndex::build(&defs, true, FingerprintStrategy::Tokens);
        assert!(mac.contains(&fp(&["Cmd", "KeyS"])));
        assert!(!mac.contains(&fp(&["Ctrl", "KeyS"])));
        assert!(!mac.is_key_of_interest("Ctrl"));

        let other = RegistrationIndex::build(&defs, false, FingerprintStrategy::Tokens);
        assert!(other.contains(&fp(&["Ctrl", "KeyS"])));
        assert!(!other.contains(&fp(&["Cmd", "KeyS"])));
        assert!(!other.is_key_of_interest("Cmd"));
    }

    #[test]
    fn duplicate_fingerprint_last_write_wins() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let defs = vec![
            ShortcutDefinition::new(["Cmd", "KeyD"], counting(&first)),
            ShortcutDefinition::new(["KeyD", "MetaRight"], counting(&second)),
        ];
        let index = RegistrationIndex::build(&defs, false, FingerprintStrategy::Tokens);

        assert_eq!(index.len(), 1);
        let action = index.lookup(&fp(&["Cmd", "KeyD"])).unwrap();
        action();
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn separator_bearing_key_keeps_its_own_entry() {
        let joined = Arc::new(AtomicUsize::new(0));
        let split = Arc::new(AtomicUsize::new(0));
        let defs = vec![
            ShortcutDefinition::new(["a\u{1f}b"], counting(&joined)),
            ShortcutDefinition::new(["a", "b"], counting(&split)),
        ];
        let index = RegistrationIndex::build(&defs, false, FingerprintStrategy::Tokens);

        assert_eq!(index.len(), 2);
        index.lookup(&fp(&["a\u{1f}b"])).unwrap()();
        assert_eq!(joined.load(Ordering::SeqCst), 1);
        assert_eq!(split.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn keys_of_interest_is_union_of_enabled_sets() {
        let defs = vec![
            ShortcutDefinition::new(["Cmd", "KeyD"], || {}),
            ShortcutDefinition::new(["Cmd", "Enter"], || {}),
            ShortcutDefinition::new(["Alt", "KeyX"], || {}).disabled(),
        ];
        let index = RegistrationIndex::build(&defs, false, FingerprintStrategy::Tokens);

        let mut keys: Vec<&str> = index.keys_of_interest().iter().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["Cmd", "Enter", "KeyD"]);
    }

    #[test]
    fn empty_or_fully_disabled_list_has_no_keys() {
        let index = RegistrationIndex::build(&[], false, FingerprintStrategy::Tokens);
        assert!(index.is_empty());
        assert!(index.keys_of_interest().is_empty());

        let defs = vec![ShortcutDefinition::new(["Cmd", "KeyD"], || {}).disabled()];
        let index = RegistrationIndex::build(&defs, true, FingerprintStrategy::Tokens);
        assert!(index.is_empty());
        assert!(index.keys_of_interest().is_empty());
    }

    #[test]
    fn character_strategy_is_carried_by_index() {
        let defs = vec![ShortcutDefinition::new(["Cmd", "KeyD"], || {})];
        let index = RegistrationIndex::build(&defs, false, FingerprintStrategy::Characters);
        assert_eq!(index.strategy(), FingerprintStrategy::Characters);
        assert!(index.contains(&FingerprintStrategy::Characters.fingerprint(["KeyD", "Cmd"])));
    }
}
