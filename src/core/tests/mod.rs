//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Pressed-key tracking tests
//! - Hotkey registration, conflict and matching tests
//! - Mouse binding table tests
//! - Descriptor parser tests

#[cfg(test)]
mod mouse_tests;
#[cfg(test)]
mod pressed_tests;
