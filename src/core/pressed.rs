//! src/core/pressed.rs
//!
//! Live tracking of currently-down non-modifier keys
//!
//! The set is built from the hook event stream, in press order, and is the
//! left-hand side of every hotkey match. Key-up events can be lost when a
//! focus change swallows them mid-chord; every key-down therefore sweeps
//! the set against the [`KeyStateProbe`] so a ghost entry cannot stick
//! around past the next press.

use crate::core::modifiers::is_modifier_key;
use crate::core::types::Key;
use crate::hook::KeyStateProbe;

/// Ordered set of currently-down non-modifier keys.
///
/// Insertion order is press order; there are never duplicates. Modifier
/// keys are represented via [`crate::core::types::Modifiers`] only and are
/// never stored here.
#[derive(Debug, Default)]
pub struct PressedKeySet {
    keys: Vec<Key>,
}

impl PressedKeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down.
    ///
    /// Returns false when the key was already present (key repeat); the
    /// set is left untouched in that case. Otherwise stale entries whose
    /// probe state says "released" are swept out, and the key is appended
    /// unless it is a modifier.
    pub fn on_key_down(&mut self, key: Key, probe: &dyn KeyStateProbe) -> bool {
        if self.keys.contains(&key) {
            return false;
        }

        self.keys.retain(|k| probe.is_down(*k));

        if !is_modifier_key(key) {
            self.keys.push(key);
        }

        true
    }

    /// Record a key-up. Idempotent when the key is absent.
    pub fn on_key_up(&mut self, key: Key) {
        self.keys.retain(|k| *k != key);
    }

    /// The pressed keys, in press order.
    pub fn snapshot(&self) -> &[Key] {
        &self.keys
    }

    /// The `+`-joined display form used for matching, e.g. `"A+B"`.
    pub fn joined(&self) -> String {
        self.keys
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join("+")
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
