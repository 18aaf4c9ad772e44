//! src/core/modifiers.rs
//!
//! Modifier key classification and live modifier resolution
//!
//! The eight physical modifier keys never enter the pressed-key tracking;
//! they are folded into [`Modifiers`] flags instead. Resolution of the
//! current modifier state goes through the [`KeyStateProbe`] so that a
//! modifier held before the hook was installed is still seen.

use crate::core::types::{Key, Modifiers};
use crate::hook::KeyStateProbe;

/// Map a modifier key to its flag; any other key maps to `Modifiers::NONE`.
pub fn modifier_of(key: Key) -> Modifiers {
    match key {
        Key::LEFT_CONTROL | Key::RIGHT_CONTROL => Modifiers::CONTROL,
        Key::LEFT_ALT | Key::RIGHT_ALT => Modifiers::ALT,
        Key::LEFT_SHIFT | Key::RIGHT_SHIFT => Modifiers::SHIFT,
        Key::LEFT_WIN | Key::RIGHT_WIN => Modifiers::PLATFORM,
        _ => Modifiers::NONE,
    }
}

/// True for the eight physical modifier keys.
pub fn is_modifier_key(key: Key) -> bool {
    !modifier_of(key).is_empty()
}

/// The modifier pairs checked by [`current_modifiers`], left side first.
const MODIFIER_PAIRS: [(Key, Key, Modifiers); 4] = [
    (Key::LEFT_CONTROL, Key::RIGHT_CONTROL, Modifiers::CONTROL),
    (Key::LEFT_ALT, Key::RIGHT_ALT, Modifiers::ALT),
    (Key::LEFT_SHIFT, Key::RIGHT_SHIFT, Modifiers::SHIFT),
    (Key::LEFT_WIN, Key::RIGHT_WIN, Modifiers::PLATFORM),
];

/// Resolve the modifiers held right now, one flag per pair when either
/// side reports down. Pure function of probe state.
pub fn current_modifiers(probe: &dyn KeyStateProbe) -> Modifiers {
    let mut modifiers = Modifiers::NONE;

    for (left, right, flag) in MODIFIER_PAIRS {
        if probe.is_down(left) || probe.is_down(right) {
            modifiers |= flag;
        }
    }

    modifiers
}
