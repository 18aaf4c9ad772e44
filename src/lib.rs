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

//! Global Input Hook Manager
//!
//! A global hotkey and mouse binding engine driven by a process-wide
//! low-level input hook, with registration-time conflict detection.
//!
//! # Features
//!
//! - **Hotkey chords:** Modifier flags plus one or more simultaneously
//!   held keys, matched exactly or loosely against the live pressed set
//! - **Conflict Detection:** Prefix-overlapping combinations under the
//!   same modifiers are rejected at registration time, naming both combos
//! - **Mouse Bindings:** Per (button, event kind) callbacks with optional
//!   event suppression
//! - **Self-Healing State:** Pressed-key tracking sweeps out entries whose
//!   key-up was swallowed by a focus change
//! - **Lazy Hooks:** The keyboard/mouse hook is installed with the first
//!   binding of its kind and removed with the last
//! - **Testable OS Boundary:** Hook installation and key-state probing sit
//!   behind traits, so the engine runs on synthetic event records in tests
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, pressed-key tracking, hotkey and
//!   mouse tables, descriptor parsing)
//! - **`hook`:** The OS boundary (hook source and key-state probe traits,
//!   raw record decoding)
//! - **`engine`:** The registry gluing hook events to registered bindings
//!
//! # Examples
//!
//! ## Registering a hotkey
//!
//! ```
//! use std::sync::Arc;
//! use input_hook_manager::{HotKeyOptions, NullHookSource, NullKeyProbe, Registry};
//!
//! let registry = Registry::new(Arc::new(NullHookSource), Arc::new(NullKeyProbe));
//!
//! registry.register_hotkey_str("Ctrl+Shift+K", || println!("fired"), HotKeyOptions::default())?;
//! # Ok::<(), input_hook_manager::RegistryError>(())
//! ```
//!
//! ## Detecting a conflict
//!
//! ```
//! use std::sync::Arc;
//! use input_hook_manager::{HotKeyOptions, NullHookSource, NullKeyProbe, Registry};
//!
//! let registry = Registry::new(Arc::new(NullHookSource), Arc::new(NullKeyProbe));
//!
//! registry.register_hotkey_str("Ctrl+A", || {}, HotKeyOptions::default())?;
//!
//! // `Ctrl+A+B` would shadow `Ctrl+A`: rejected, not silently accepted.
//! assert!(registry
//!     .register_hotkey_str("Ctrl+A+B", || {}, HotKeyOptions::default())
//!     .is_err());
//! # Ok::<(), input_hook_manager::RegistryError>(())
//! ```

pub mod core;
pub mod engine;
pub mod hook;

// Re-export commonly used types for convenience
pub use crate::core::hotkeys::{ConflictError, HotKeyCallback, HotKeyOptions, HotKeyTable};
pub use crate::core::mouse::{MouseBindingTable, MouseButton, MouseCallback, MouseEventKind};
pub use crate::core::parser::{parse_combo, ParseError, ParsedCombo};
pub use crate::core::types::{Key, Modifiers};
pub use crate::engine::{Registry, RegistryError};
pub use crate::hook::events::{RawKeyRecord, RawMouseRecord};
pub use crate::hook::{HookError, HookKind, HookSource, KeyStateProbe, NullHookSource, NullKeyProbe};
