use crate::core::pressed::PressedKeySet;
use crate::core::types::Key;
use crate::hook::KeyStateProbe;
use std::collections::HashSet;
use std::sync::Mutex;

/// Probe whose down-set is controlled by the test
struct FakeProbe {
    down: Mutex<HashSet<Key>>,
}

impl FakeProbe {
    fn new() -> Self {
        Self {
            down: Mutex::new(HashSet::new()),
        }
    }

    fn hold(&self, key: Key) {
        self.down.lock().unwrap().insert(key);
    }

    fn release(&self, key: Key) {
        self.down.lock().unwrap().remove(&key);
    }
}

impl KeyStateProbe for FakeProbe {
    fn is_down(&self, key: Key) -> bool {
        self.down.lock().unwrap().contains(&key)
    }
}

fn key(name: &str) -> Key {
    Key::from_name(name).unwrap()
}

#[test]
fn test_repeat_key_down_does_not_double_count() {
    let probe = FakeProbe::new();
    let mut pressed = PressedKeySet::new();

    probe.hold(key("A"));
    assert!(pressed.on_key_down(key("A"), &probe));
    assert!(!pressed.on_key_down(key("A"), &probe));
    assert!(!pressed.on_key_down(key("A"), &probe));

    assert_eq!(pressed.snapshot(), &[key("A")]);
}

#[test]
fn test_sweep_drops_keys_without_a_key_up() {
    let probe = FakeProbe::new();
    let mut pressed = PressedKeySet::new();

    probe.hold(key("A"));
    pressed.on_key_down(key("A"), &probe);

    // The key-up for A is swallowed; only the probe knows it was released.
    probe.release(key("A"));

    probe.hold(key("B"));
    assert!(pressed.on_key_down(key("B"), &probe));

    assert_eq!(pressed.snapshot(), &[key("B")]);
}

#[test]
fn test_sweep_keeps_keys_still_down() {
    let probe = FakeProbe::new();
    let mut pressed = PressedKeySet::new();

    probe.hold(key("A"));
    probe.hold(key("B"));
    pressed.on_key_down(key("A"), &probe);
    pressed.on_key_down(key("B"), &probe);

    assert_eq!(pressed.snapshot(), &[key("A"), key("B")]);
    assert_eq!(pressed.joined(), "A+B");
}

#[test]
fn test_modifier_keys_are_not_tracked() {
    let probe = FakeProbe::new();
    let mut pressed = PressedKeySet::new();

    probe.hold(Key::LEFT_CONTROL);
    assert!(pressed.on_key_down(Key::LEFT_CONTROL, &probe));

    assert!(pressed.is_empty());
}

#[test]
fn test_key_up_is_idempotent() {
    let probe = FakeProbe::new();
    let mut pressed = PressedKeySet::new();

    probe.hold(key("A"));
    pressed.on_key_down(key("A"), &probe);

    pressed.on_key_up(key("A"));
    pressed.on_key_up(key("A"));

    assert!(pressed.is_empty());
}

#[test]
fn test_joined_preserves_press_order() {
    let probe = FakeProbe::new();
    let mut pressed = PressedKeySet::new();

    for name in ["C", "A", "B"] {
        probe.hold(key(name));
        pressed.on_key_down(key(name), &probe);
    }

    assert_eq!(pressed.joined(), "C+A+B");
}
