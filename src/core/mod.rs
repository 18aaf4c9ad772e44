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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for input binding management, including:
//! - Type definitions for keys and modifier flags
//! - Pressed-key tracking with self-healing against lost key-ups
//! - Hotkey registration with prefix-overlap conflict detection
//! - Mouse binding registration
//! - Binding descriptor parsing
//!
//! All business logic is isolated from the OS hook boundary so it can be
//! unit tested by feeding synthetic state instead of real input events.

pub mod hotkeys;
pub mod modifiers;
pub mod mouse;
pub mod parser;
pub mod pressed;
pub mod types;

pub use hotkeys::{ConflictError, HotKeyCallback, HotKeyOptions, HotKeyTable};
pub use mouse::{MouseBindingTable, MouseButton, MouseCallback, MouseEventKind};
pub use pressed::PressedKeySet;
pub use types::{Key, Modifiers};

#[cfg(test)]
mod tests;
