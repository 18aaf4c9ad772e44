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

//! src/hook/mod.rs
//!
//! The OS boundary: low-level hook installation and keyboard state probing
//!
//! The dispatch engine never touches the OS directly. It is handed two
//! capabilities at construction time:
//!
//! - [`HookSource`]: installs and removes a process-wide low-level keyboard
//!   or mouse hook. The implementation owns the actual hook and feeds raw
//!   records into [`crate::engine::Registry::dispatch_key`] /
//!   [`crate::engine::Registry::dispatch_mouse`], suppressing the event
//!   from the rest of the hook chain only when dispatch returns `true`.
//! - [`KeyStateProbe`]: answers "is this key down system-wide right now",
//!   synchronously and independently of the hook stream.
//!
//! Keeping the boundary behind traits means the engine is driven in tests
//! and dry-run tooling by synthetic event records instead of real hooks.

use std::fmt;
use thiserror::Error;

use crate::core::types::Key;

pub mod events;

/// Which of the two low-level hooks is being referred to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HookKind {
    Keyboard,
    Mouse,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookKind::Keyboard => write!(f, "keyboard"),
            HookKind::Mouse => write!(f, "mouse"),
        }
    }
}

/// Hook installation failure, surfaced once to the registration call that
/// first needed the hook.
#[derive(Debug, Error)]
#[error("failed to install {kind} hook: {reason}")]
pub struct HookError {
    pub kind: HookKind,
    pub reason: String,
}

/// Installer for process-wide low-level input hooks.
///
/// The engine guarantees it never calls `start` for a hook it believes is
/// running, nor `stop` for one it believes is stopped, and that both calls
/// happen while registration changes are serialized.
pub trait HookSource: Send {
    /// Install the hook of the given kind.
    fn start(&self, kind: HookKind) -> Result<(), HookError>;

    /// Remove the hook of the given kind.
    fn stop(&self, kind: HookKind);
}

/// Synchronous system-wide key state query.
pub trait KeyStateProbe: Send {
    /// Whether the key is currently held down anywhere in the session.
    fn is_down(&self, key: Key) -> bool;
}

/// A hook source that installs nothing and succeeds at everything.
///
/// Useful for dry-run tooling (the CLI conflict checker) and for tests
/// that only exercise registration logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHookSource;

impl HookSource for NullHookSource {
    fn start(&self, _kind: HookKind) -> Result<(), HookError> {
        Ok(())
    }

    fn stop(&self, _kind: HookKind) {}
}

/// A probe that reports every key as released.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullKeyProbe;

impl KeyStateProbe for NullKeyProbe {
    fn is_down(&self, _key: Key) -> bool {
        false
    }
}
