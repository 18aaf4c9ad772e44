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

//! src/engine/mod.rs
//!
//! The dispatch engine: one registry object wiring hook events to bindings
//!
//! [`Registry`] owns the pressed-key state, both binding tables and the
//! lifecycle of the underlying hooks. Hook implementations feed raw
//! records into [`Registry::dispatch_key`] / [`Registry::dispatch_mouse`]
//! from the OS callback context; application threads register and remove
//! bindings concurrently. A single mutex serialises every mutation, and
//! matched callbacks are invoked only after the lock is released so a
//! callback may itself re-enter registration.
//!
//! Hooks are lazy: the keyboard hook starts with the first hotkey and
//! stops with the last, independently of the mouse hook. A failed hook
//! installation is reported to the registration call that needed it; the
//! binding stays registered (latent) and the next registration retries.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::hotkeys::{ConflictError, HotKeyOptions, HotKeyTable};
use crate::core::modifiers::{current_modifiers, modifier_of};
use crate::core::mouse::{MouseBindingTable, MouseButton, MouseEventKind};
use crate::core::parser::{parse_combo, ParseError};
use crate::core::pressed::PressedKeySet;
use crate::core::types::{Key, Modifiers};
use crate::hook::events::{decode_key, decode_mouse, KeyAction, KeyEvent, RawKeyRecord, RawMouseRecord};
use crate::hook::{HookError, HookKind, HookSource, KeyStateProbe};

/// Errors surfaced by the registration surface.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Hook(#[from] HookError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Everything the mutex guards: binding tables, pressed-key state and the
/// installed-flags of the two hooks. Start/stop decisions are taken under
/// the same lock as registration changes so a stop can never race a fresh
/// first registration.
struct RegistryState {
    pressed: PressedKeySet,
    hotkeys: HotKeyTable,
    mouse: MouseBindingTable,
    keyboard_hook: bool,
    mouse_hook: bool,
}

/// The process-wide binding registry and dispatch engine.
///
/// Construct one per process with the platform's [`HookSource`] and
/// [`KeyStateProbe`]; there is exactly one keyboard and one mouse hook
/// per registry for its whole lifetime.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use input_hook_manager::engine::Registry;
/// use input_hook_manager::core::hotkeys::HotKeyOptions;
/// use input_hook_manager::hook::{NullHookSource, NullKeyProbe};
///
/// let registry = Registry::new(Arc::new(NullHookSource), Arc::new(NullKeyProbe));
/// registry.register_hotkey_str("Ctrl+Shift+K", || {}, HotKeyOptions::default())?;
/// # Ok::<(), input_hook_manager::engine::RegistryError>(())
/// ```
pub struct Registry {
    state: Mutex<RegistryState>,
    hooks: Arc<dyn HookSource + Send + Sync>,
    probe: Arc<dyn KeyStateProbe + Send + Sync>,
}

impl Registry {
    pub fn new(
        hooks: Arc<dyn HookSource + Send + Sync>,
        probe: Arc<dyn KeyStateProbe + Send + Sync>,
    ) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                pressed: PressedKeySet::new(),
                hotkeys: HotKeyTable::new(),
                mouse: MouseBindingTable::new(),
                keyboard_hook: false,
                mouse_hook: false,
            }),
            hooks,
            probe,
        }
    }

    /// Register a hotkey for `modifiers` plus the chord `keys`.
    ///
    /// Defaults in [`HotKeyOptions`]: handled, transient, exact match.
    /// The first hotkey starts the keyboard hook; on installation failure
    /// the binding is kept latent and the error returned once.
    pub fn register_hotkey<F>(
        &self,
        modifiers: Modifiers,
        keys: &[Key],
        callback: F,
        options: HotKeyOptions,
    ) -> Result<(), RegistryError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut state = self.lock();
        state
            .hotkeys
            .register(modifiers, keys, Arc::new(callback), options)?;
        self.ensure_started(&mut state, HookKind::Keyboard)?;
        Ok(())
    }

    /// Register a hotkey from a descriptor such as `"Ctrl+Shift+K"`.
    pub fn register_hotkey_str<F>(
        &self,
        descriptor: &str,
        callback: F,
        options: HotKeyOptions,
    ) -> Result<(), RegistryError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let combo = parse_combo(descriptor)?;
        self.register_hotkey(combo.modifiers, &combo.keys, callback, options)
    }

    /// Remove the hotkey with the exact (modifiers, keys) identity.
    /// Stops the keyboard hook when the table becomes empty.
    pub fn unregister_hotkey(&self, modifiers: Modifiers, keys: &[Key]) -> bool {
        let mut state = self.lock();
        let removed = state.hotkeys.unregister(modifiers, keys);
        if removed {
            self.stop_if_idle(&mut state, HookKind::Keyboard);
        }
        removed
    }

    /// Remove every non-persistent hotkey; persistent bindings survive.
    pub fn unregister_all_transient_hotkeys(&self) {
        let mut state = self.lock();
        state.hotkeys.unregister_transient();
        self.stop_if_idle(&mut state, HookKind::Keyboard);
    }

    /// Bind a mouse (button, event kind) pair, replacing any previous
    /// binding for that pair. `handled` defaults to false at the original
    /// surface; pass it explicitly here.
    pub fn register_mouse_binding<F>(
        &self,
        button: MouseButton,
        kind: MouseEventKind,
        callback: F,
        handled: bool,
    ) -> Result<(), RegistryError>
    where
        F: Fn(i32, i32) + Send + Sync + 'static,
    {
        let mut state = self.lock();
        state.mouse.register(button, kind, Arc::new(callback), handled);
        self.ensure_started(&mut state, HookKind::Mouse)?;
        Ok(())
    }

    /// Remove the binding for (button, kind). Stops the mouse hook when
    /// the table becomes empty.
    pub fn unregister_mouse_binding(&self, button: MouseButton, kind: MouseEventKind) -> bool {
        let mut state = self.lock();
        let removed = state.mouse.unregister(button, kind);
        if removed {
            self.stop_if_idle(&mut state, HookKind::Mouse);
        }
        removed
    }

    /// Drop every mouse binding and stop the mouse hook.
    pub fn clear_mouse_bindings(&self) {
        let mut state = self.lock();
        state.mouse.clear();
        self.stop_if_idle(&mut state, HookKind::Mouse);
    }

    /// Feed a raw keyboard record through the engine. Returns the
    /// suppression verdict the hook must apply: `false` means the event
    /// is forwarded to the rest of the hook chain.
    pub fn dispatch_key(&self, record: &RawKeyRecord) -> bool {
        let Some(event) = decode_key(record) else {
            debug!(
                message = record.message,
                "unrecognised keyboard record passed through"
            );
            return false;
        };

        match event.action {
            KeyAction::Down => self.on_key_down(&event),
            KeyAction::Up => {
                let mut state = self.lock();
                state.pressed.on_key_up(event.key);
                false
            }
        }
    }

    fn on_key_down(&self, event: &KeyEvent) -> bool {
        let mut state = self.lock();

        if !state.pressed.on_key_down(event.key, self.probe.as_ref()) {
            // Key repeat: nothing to dispatch, never suppressed.
            return false;
        }

        let own_flag = modifier_of(event.key);
        if !own_flag.is_empty() {
            // A bare modifier press is tracked and reported with its own
            // flag only; it is not a chord and is never suppressed.
            debug!(key = %event.key, modifiers = %own_flag, "modifier press tracked");
            return false;
        }

        let modifiers = current_modifiers(self.probe.as_ref());
        let pressed = state.pressed.joined();
        let matches = state.hotkeys.matches(modifiers, &pressed);
        drop(state);

        if matches.callbacks.is_empty() {
            debug!(%modifiers, %pressed, system = event.system, "no hotkey match");
            return false;
        }

        debug!(
            %modifiers,
            %pressed,
            count = matches.callbacks.len(),
            suppress = matches.suppress,
            "hotkey matched"
        );

        for callback in &matches.callbacks {
            callback();
        }

        matches.suppress
    }

    /// Feed a raw mouse record through the engine; same contract as
    /// [`Registry::dispatch_key`].
    pub fn dispatch_mouse(&self, record: &RawMouseRecord) -> bool {
        let Some(event) = decode_mouse(record) else {
            return false;
        };

        let state = self.lock();
        let Some((callback, handled)) = state.mouse.lookup(event.button, event.kind) else {
            return false;
        };
        drop(state);

        debug!(
            button = ?event.button,
            kind = ?event.kind,
            x = event.x,
            y = event.y,
            suppress = handled,
            "mouse binding matched"
        );

        callback(event.x, event.y);
        handled
    }

    /// Whether the hook of the given kind is currently installed.
    pub fn hook_started(&self, kind: HookKind) -> bool {
        let state = self.lock();
        match kind {
            HookKind::Keyboard => state.keyboard_hook,
            HookKind::Mouse => state.mouse_hook,
        }
    }

    pub fn hotkey_count(&self) -> usize {
        self.lock().hotkeys.len()
    }

    pub fn mouse_binding_count(&self) -> usize {
        self.lock().mouse.len()
    }

    /// Snapshot of the currently tracked non-modifier keys, in press order.
    pub fn pressed_keys(&self) -> Vec<Key> {
        self.lock().pressed.snapshot().to_vec()
    }

    // The lock is never held across user callbacks, so poison can only
    // come from a panic inside the engine itself; recover instead of
    // unwinding into the OS callback thread.
    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_started(
        &self,
        state: &mut RegistryState,
        kind: HookKind,
    ) -> Result<(), HookError> {
        let installed = match kind {
            HookKind::Keyboard => &mut state.keyboard_hook,
            HookKind::Mouse => &mut state.mouse_hook,
        };

        if *installed {
            return Ok(());
        }

        match self.hooks.start(kind) {
            Ok(()) => {
                *installed = true;
                info!(%kind, "input hook started");
                Ok(())
            }
            Err(e) => {
                warn!(%kind, error = %e, "hook installation failed; bindings stay latent");
                Err(e)
            }
        }
    }

    fn stop_if_idle(&self, state: &mut RegistryState, kind: HookKind) {
        let stop = match kind {
            HookKind::Keyboard => state.keyboard_hook && state.hotkeys.is_empty(),
            HookKind::Mouse => state.mouse_hook && state.mouse.is_empty(),
        };

        if stop {
            self.hooks.stop(kind);
            match kind {
                HookKind::Keyboard => state.keyboard_hook = false,
                HookKind::Mouse => state.mouse_hook = false,
            }
            info!(%kind, "input hook stopped");
        }
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        let state = self.lock();
        if state.keyboard_hook {
            self.hooks.stop(HookKind::Keyboard);
        }
        if state.mouse_hook {
            self.hooks.stop(HookKind::Mouse);
        }
    }
}

#[cfg(test)]
mod tests;
