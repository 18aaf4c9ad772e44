//! src/core/mouse.rs
//!
//! Mouse button/event binding registry
//!
//! Mouse bindings are a partial function from (button, event kind) to a
//! callback: at most one binding per pair, re-registration replaces it.
//! No conflict detection is needed because the identity is unambiguous.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Callback invoked with the cursor position when a bound mouse event
/// arrives.
pub type MouseCallback = Arc<dyn Fn(i32, i32) + Send + Sync>;

/// Which physical mouse button an event refers to. `None` covers button-less
/// events such as movement and wheel scrolling.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum MouseButton {
    None,
    Left,
    Right,
    Middle,
}

/// The kind of mouse event a binding reacts to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum MouseEventKind {
    MouseDown,
    MouseUp,
    MouseMove,
    MouseWheel,
    DoubleClick,
}

struct MouseBinding {
    callback: MouseCallback,
    handled: bool,
}

/// Registry of mouse bindings keyed by (button, event kind).
#[derive(Default)]
pub struct MouseBindingTable {
    bindings: HashMap<(MouseButton, MouseEventKind), MouseBinding>,
}

impl MouseBindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the binding for (button, kind).
    pub fn register(
        &mut self,
        button: MouseButton,
        kind: MouseEventKind,
        callback: MouseCallback,
        handled: bool,
    ) {
        self.bindings
            .insert((button, kind), MouseBinding { callback, handled });
    }

    /// Remove the binding for (button, kind). Returns whether one existed.
    pub fn unregister(&mut self, button: MouseButton, kind: MouseEventKind) -> bool {
        self.bindings.remove(&(button, kind)).is_some()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// The callback and suppression flag bound to (button, kind), if any.
    pub fn lookup(
        &self,
        button: MouseButton,
        kind: MouseEventKind,
    ) -> Option<(MouseCallback, bool)> {
        self.bindings
            .get(&(button, kind))
            .map(|binding| (Arc::clone(&binding.callback), binding.handled))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
