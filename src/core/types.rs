//! src/core/types.rs
//!
//! Core type definitions for input binding management
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Key`: a virtual-key code with name resolution for display and parsing
//! - `Modifiers`: a combinable flag set over Control/Alt/Shift/Platform
//!
//! Both types implement serialization so callers can keep their own binding
//! configs on disk and re-register them at startup; the engine itself never
//! persists anything.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A physical key, identified by its virtual-key code.
///
/// Equality is by code only; there is no ordering. Most keys are referred
/// to by name (`Key::from_name("F5")`), the modifier keys also have
/// associated constants because the dispatch engine matches on them.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Key(pub u16);

impl Key {
    pub const LEFT_SHIFT: Key = Key(0xA0);
    pub const RIGHT_SHIFT: Key = Key(0xA1);
    pub const LEFT_CONTROL: Key = Key(0xA2);
    pub const RIGHT_CONTROL: Key = Key(0xA3);
    pub const LEFT_ALT: Key = Key(0xA4);
    pub const RIGHT_ALT: Key = Key(0xA5);
    pub const LEFT_WIN: Key = Key(0x5B);
    pub const RIGHT_WIN: Key = Key(0x5C);

    /// Resolve a key from its human-readable name, case-insensitively.
    ///
    /// Accepts single letters and digits ("K", "4"), function keys
    /// ("F1" through "F24") and a set of named keys (Return, Escape,
    /// arrow keys, and so on).
    pub fn from_name(name: &str) -> Option<Key> {
        let trimmed = name.trim();

        if trimmed.len() == 1 {
            let c = trimmed.chars().next()?;
            if c.is_ascii_alphabetic() {
                return Some(Key(c.to_ascii_uppercase() as u16));
            }
            if c.is_ascii_digit() {
                return Some(Key(c as u16));
            }
        }

        if let Some(rest) = trimmed.strip_prefix(['F', 'f']) {
            if let Ok(n) = rest.parse::<u16>() {
                if (1..=24).contains(&n) {
                    return Some(Key(0x6F + n));
                }
            }
        }

        NAMED_KEYS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(trimmed))
            .map(|(_, code)| Key(*code))
    }

    /// The canonical name of this key, if it has one.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            0x30..=0x39 => Some(DIGIT_NAMES[(self.0 - 0x30) as usize]),
            0x41..=0x5A => Some(LETTER_NAMES[(self.0 - 0x41) as usize]),
            0x70..=0x87 => Some(FKEY_NAMES[(self.0 - 0x70) as usize]),
            code => NAMED_KEYS
                .iter()
                .find(|(_, c)| *c == code)
                .map(|(n, _)| *n),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

const LETTER_NAMES: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

const DIGIT_NAMES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

const FKEY_NAMES: [&str; 24] = [
    "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12", "F13", "F14", "F15",
    "F16", "F17", "F18", "F19", "F20", "F21", "F22", "F23", "F24",
];

/// Named keys outside the letter/digit/function-key ranges.
///
/// Canonical names come first; aliases for the same code follow so that
/// `name()` (which takes the first match) stays stable.
const NAMED_KEYS: &[(&str, u16)] = &[
    ("Return", 0x0D),
    ("Enter", 0x0D),
    ("Escape", 0x1B),
    ("Space", 0x20),
    ("Tab", 0x09),
    ("BackSpace", 0x08),
    ("Delete", 0x2E),
    ("Insert", 0x2D),
    ("Home", 0x24),
    ("End", 0x23),
    ("PageUp", 0x21),
    ("Prior", 0x21),
    ("PageDown", 0x22),
    ("Next", 0x22),
    ("Left", 0x25),
    ("Up", 0x26),
    ("Right", 0x27),
    ("Down", 0x28),
    ("Pause", 0x13),
    ("CapsLock", 0x14),
    ("NumLock", 0x90),
    ("ScrollLock", 0x91),
    ("PrintScreen", 0x2C),
    ("LeftCtrl", 0xA2),
    ("RightCtrl", 0xA3),
    ("LeftShift", 0xA0),
    ("RightShift", 0xA1),
    ("LeftAlt", 0xA4),
    ("RightAlt", 0xA5),
    ("LeftWin", 0x5B),
    ("RightWin", 0x5C),
];

/// Combinable modifier flags.
///
/// `Modifiers::NONE` is the empty set. Hotkey matching compares modifier
/// sets for exact equality; there is no subset or superset matching.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const CONTROL: Modifiers = Modifiers { bits: 1 };
    pub const ALT: Modifiers = Modifiers { bits: 1 << 1 };
    pub const SHIFT: Modifiers = Modifiers { bits: 1 << 2 };
    pub const PLATFORM: Modifiers = Modifiers { bits: 1 << 3 };

    pub fn contains(self, other: Modifiers) -> bool {
        self.bits & other.bits == other.bits
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.bits |= rhs.bits;
    }
}

impl fmt::Display for Modifiers {
    /// Renders `"Ctrl + Shift + Alt + Win"` segments in that fixed order,
    /// the same form used in conflict messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.contains(Modifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.contains(Modifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.contains(Modifiers::ALT) {
            parts.push("Alt");
        }
        if self.contains(Modifiers::PLATFORM) {
            parts.push("Win");
        }
        write!(f, "{}", parts.join(" + "))
    }
}
