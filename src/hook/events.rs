//! src/hook/events.rs
//!
//! Raw hook records and their decoding
//!
//! A low-level hook delivers a message identifier plus a per-kind record.
//! Decoding maps those onto semantic events; anything unrecognised decodes
//! to `None` and is passed through untouched - a malformed record must
//! never take the hook chain down.

use crate::core::mouse::{MouseButton, MouseEventKind};
use crate::core::types::Key;

/// Low-level hook message identifiers.
pub mod messages {
    pub const WM_KEYDOWN: u32 = 0x0100;
    pub const WM_KEYUP: u32 = 0x0101;
    pub const WM_SYSKEYDOWN: u32 = 0x0104;
    pub const WM_SYSKEYUP: u32 = 0x0105;

    pub const WM_MOUSEMOVE: u32 = 0x0200;
    pub const WM_LBUTTONDOWN: u32 = 0x0201;
    pub const WM_LBUTTONUP: u32 = 0x0202;
    pub const WM_LBUTTONDBLCLK: u32 = 0x0203;
    pub const WM_RBUTTONDOWN: u32 = 0x0204;
    pub const WM_RBUTTONUP: u32 = 0x0205;
    pub const WM_RBUTTONDBLCLK: u32 = 0x0206;
    pub const WM_MBUTTONDOWN: u32 = 0x0207;
    pub const WM_MBUTTONUP: u32 = 0x0208;
    pub const WM_MBUTTONDBLCLK: u32 = 0x0209;
    pub const WM_MOUSEWHEEL: u32 = 0x020A;
}

use messages::*;

/// Raw keyboard hook record as delivered by the OS.
#[derive(Clone, Copy, Debug)]
pub struct RawKeyRecord {
    pub message: u32,
    pub vk_code: u32,
    pub scan_code: u32,
}

/// Whether a key event is a press or a release.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyAction {
    Down,
    Up,
}

/// A decoded keyboard event.
#[derive(Clone, Copy, Debug)]
pub struct KeyEvent {
    pub key: Key,
    pub scan_code: u32,
    pub action: KeyAction,
    /// Delivered as a system key (Alt held or no window focused).
    pub system: bool,
}

/// Decode a raw keyboard record. Unknown messages and out-of-range
/// virtual-key codes decode to `None`.
pub fn decode_key(record: &RawKeyRecord) -> Option<KeyEvent> {
    let (action, system) = match record.message {
        WM_KEYDOWN => (KeyAction::Down, false),
        WM_SYSKEYDOWN => (KeyAction::Down, true),
        WM_KEYUP => (KeyAction::Up, false),
        WM_SYSKEYUP => (KeyAction::Up, true),
        _ => return None,
    };

    let vk_code = u16::try_from(record.vk_code).ok()?;

    Some(KeyEvent {
        key: Key(vk_code),
        scan_code: record.scan_code,
        action,
        system,
    })
}

/// Raw mouse hook record as delivered by the OS.
#[derive(Clone, Copy, Debug)]
pub struct RawMouseRecord {
    pub message: u32,
    pub x: i32,
    pub y: i32,
    /// Wheel rotation in the high word for wheel messages.
    pub mouse_data: u32,
}

/// A decoded mouse event.
#[derive(Clone, Copy, Debug)]
pub struct MouseEvent {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
    pub kind: MouseEventKind,
    /// Signed wheel rotation; one detent is 120. Zero for non-wheel events.
    pub wheel_delta: i16,
}

/// Decode a raw mouse record. Messages outside the button/move/wheel
/// tables decode to `None`.
pub fn decode_mouse(record: &RawMouseRecord) -> Option<MouseEvent> {
    let button = match record.message {
        WM_LBUTTONDOWN | WM_LBUTTONUP | WM_LBUTTONDBLCLK => MouseButton::Left,
        WM_RBUTTONDOWN | WM_RBUTTONUP | WM_RBUTTONDBLCLK => MouseButton::Right,
        WM_MBUTTONDOWN | WM_MBUTTONUP | WM_MBUTTONDBLCLK => MouseButton::Middle,
        _ => MouseButton::None,
    };

    let kind = match record.message {
        WM_LBUTTONDOWN | WM_RBUTTONDOWN | WM_MBUTTONDOWN => MouseEventKind::MouseDown,
        WM_LBUTTONUP | WM_RBUTTONUP | WM_MBUTTONUP => MouseEventKind::MouseUp,
        WM_MOUSEMOVE => MouseEventKind::MouseMove,
        WM_MOUSEWHEEL => MouseEventKind::MouseWheel,
        WM_LBUTTONDBLCLK | WM_RBUTTONDBLCLK | WM_MBUTTONDBLCLK => MouseEventKind::DoubleClick,
        _ => return None,
    };

    let wheel_delta = if kind == MouseEventKind::MouseWheel {
        (record.mouse_data >> 16) as u16 as i16
    } else {
        0
    };

    Some(MouseEvent {
        x: record.x,
        y: record.y,
        button,
        kind,
        wheel_delta,
    })
}
