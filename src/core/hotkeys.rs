// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/hotkeys.rs
//!
//! Hotkey registry: registration, conflict detection and matching
//!
//! A binding's identity is its modifier set plus the `+`-joined key string,
//! in registration order. Two bindings under the same modifiers whose key
//! strings prefix-overlap would shadow one another at dispatch time, so
//! that situation is rejected loudly at registration instead of resolved
//! silently: a load-time failure beats a hotkey that never fires.

use std::sync::Arc;
use thiserror::Error;

use crate::core::types::{Key, Modifiers};

/// Callback invoked when a hotkey fires.
pub type HotKeyCallback = Arc<dyn Fn() + Send + Sync>;

/// Per-binding flags, with the registration defaults of the public API.
#[derive(Clone, Copy, Debug)]
pub struct HotKeyOptions {
    /// Suppress the triggering event from the rest of the system.
    pub handled: bool,
    /// Survive [`HotKeyTable::unregister_transient`].
    pub persistent: bool,
    /// Require the pressed set to equal the registered keys exactly;
    /// when false, extra held keys are tolerated.
    pub exact_match: bool,
}

impl Default for HotKeyOptions {
    fn default() -> Self {
        Self {
            handled: true,
            persistent: false,
            exact_match: true,
        }
    }
}

/// Registration failure: the new combination prefix-overlaps an existing
/// one under the same modifiers. Carries both combinations in
/// human-readable form so the collision can be fixed at the call site.
#[derive(Debug, Error)]
#[error("hotkey `{candidate}` coincides with registered `{existing}`")]
pub struct ConflictError {
    pub candidate: String,
    pub existing: String,
}

/// One registered hotkey binding.
struct HotKey {
    modifiers: Modifiers,
    keys: String,
    callback: HotKeyCallback,
    handled: bool,
    persistent: bool,
    exact_match: bool,
}

impl HotKey {
    /// Whether this binding matches the pressed-keys string.
    ///
    /// Exact bindings compare the joined strings for equality. Loose
    /// bindings only require every registered token to appear somewhere
    /// in the pressed string, tolerating extra held keys.
    fn matches(&self, pressed: &str) -> bool {
        if self.exact_match {
            self.keys == pressed
        } else {
            self.keys.split('+').all(|k| pressed.contains(k))
        }
    }

    fn label(&self) -> String {
        combo_label(self.modifiers, &self.keys)
    }
}

/// Outcome of a match pass: the callbacks to invoke, in table order, and
/// the combined suppression verdict.
#[derive(Default)]
pub struct HotKeyMatches {
    pub callbacks: Vec<HotKeyCallback>,
    pub suppress: bool,
}

/// The hotkey registry.
///
/// Kept as an ordered list: matching walks bindings in registration order,
/// and update-in-place preserves that order for ties.
#[derive(Default)]
pub struct HotKeyTable {
    bindings: Vec<HotKey>,
}

impl HotKeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding, or replace a non-persistent binding with the
    /// same identity in place.
    ///
    /// A persistent binding is never silently overwritten: registering its
    /// identity again inserts a second, independent binding (both fire on
    /// a match). Prefix-overlapping combinations under the same modifiers
    /// are a hard [`ConflictError`].
    pub fn register(
        &mut self,
        modifiers: Modifiers,
        keys: &[Key],
        callback: HotKeyCallback,
        options: HotKeyOptions,
    ) -> Result<(), ConflictError> {
        let joined = join_keys(keys);

        if let Some(existing) = self
            .bindings
            .iter_mut()
            .find(|hk| hk.modifiers == modifiers && hk.keys == joined)
        {
            if !existing.persistent {
                existing.callback = callback;
                existing.handled = options.handled;
                existing.persistent = options.persistent;
                existing.exact_match = options.exact_match;
                return Ok(());
            }
        }

        if let Some(other) = self.bindings.iter().find(|hk| {
            hk.modifiers == modifiers
                && hk.keys != joined
                && (hk.keys.starts_with(&joined) || joined.starts_with(&hk.keys))
        }) {
            return Err(ConflictError {
                candidate: combo_label(modifiers, &joined),
                existing: other.label(),
            });
        }

        self.bindings.push(HotKey {
            modifiers,
            keys: joined,
            callback,
            handled: options.handled,
            persistent: options.persistent,
            exact_match: options.exact_match,
        });

        Ok(())
    }

    /// Remove the binding with the exact identity. Returns whether one
    /// was removed.
    pub fn unregister(&mut self, modifiers: Modifiers, keys: &[Key]) -> bool {
        let joined = join_keys(keys);

        match self
            .bindings
            .iter()
            .position(|hk| hk.modifiers == modifiers && hk.keys == joined)
        {
            Some(index) => {
                self.bindings.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every non-persistent binding.
    pub fn unregister_transient(&mut self) {
        self.bindings.retain(|hk| hk.persistent);
    }

    /// Collect every binding matching the current modifiers and pressed
    /// keys, in table order. Suppression is the OR of the matched
    /// bindings' `handled` flags, so independent listeners can react to
    /// the same chord without one having to win.
    pub fn matches(&self, modifiers: Modifiers, pressed: &str) -> HotKeyMatches {
        let mut result = HotKeyMatches::default();

        for hotkey in self.bindings.iter().filter(|hk| hk.modifiers == modifiers) {
            if hotkey.matches(pressed) {
                result.callbacks.push(Arc::clone(&hotkey.callback));
                result.suppress = result.suppress || hotkey.handled;
            }
        }

        result
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Join keys into the identity/matching string, e.g. `"A+B"`.
pub fn join_keys(keys: &[Key]) -> String {
    keys.iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Human-readable combination text, e.g. `"Ctrl + Shift + A + B"`.
pub fn combo_label(modifiers: Modifiers, joined_keys: &str) -> String {
    let keys = joined_keys.replace('+', " + ");

    if modifiers.is_empty() {
        keys
    } else {
        format!("{} + {}", modifiers, keys)
    }
}
