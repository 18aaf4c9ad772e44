//! Engine test suite
//!
//! The registry is driven end to end with synthetic raw records; the OS
//! boundary is replaced by a scripted probe and a recording hook source.

use crate::core::types::Key;
use crate::hook::events::{messages, RawKeyRecord, RawMouseRecord};
use crate::hook::{HookError, HookKind, HookSource, KeyStateProbe};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;


/// Probe whose down-set is controlled by the test.
#[derive(Default)]
pub struct FakeProbe {
    down: Mutex<HashSet<Key>>,
}

impl FakeProbe {
    pub fn hold(&self, key: Key) {
        self.down.lock().unwrap().insert(key);
    }

    pub fn release(&self, key: Key) {
        self.down.lock().unwrap().remove(&key);
    }
}

impl KeyStateProbe for FakeProbe {
    fn is_down(&self, key: Key) -> bool {
        self.down.lock().unwrap().contains(&key)
    }
}

/// Hook source that records start/stop calls and can be told to fail.
#[derive(Default)]
pub struct RecordingHooks {
    pub fail_start: AtomicBool,
    log: Mutex<Vec<(HookKind, bool)>>,
}

impl RecordingHooks {
    pub fn starts(&self, kind: HookKind) -> usize {
        self.count(kind, true)
    }

    pub fn stops(&self, kind: HookKind) -> usize {
        self.count(kind, false)
    }

    fn count(&self, kind: HookKind, started: bool) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, s)| *k == kind && *s == started)
            .count()
    }
}

impl HookSource for RecordingHooks {
    fn start(&self, kind: HookKind) -> Result<(), HookError> {
        if self.fail_start.load(Ordering::SeqCst) {
            return Err(HookError {
                kind,
                reason: "denied by test".to_string(),
            });
        }
        self.log.lock().unwrap().push((kind, true));
        Ok(())
    }

    fn stop(&self, kind: HookKind) {
        self.log.lock().unwrap().push((kind, false));
    }
}

pub fn key(name: &str) -> Key {
    Key::from_name(name).unwrap()
}

pub fn key_down(key: Key) -> RawKeyRecord {
    RawKeyRecord {
        message: messages::WM_KEYDOWN,
        vk_code: u32::from(key.0),
        scan_code: 0,
    }
}

pub fn key_up(key: Key) -> RawKeyRecord {
    RawKeyRecord {
        message: messages::WM_KEYUP,
        vk_code: u32::from(key.0),
        scan_code: 0,
    }
}

pub fn mouse(message: u32, x: i32, y: i32) -> RawMouseRecord {
    RawMouseRecord {
        message,
        x,
        y,
        mouse_data: 0,
    }
}
