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

//! src/core/parser.rs
//!
//! Binding descriptor parser
//!
//! Parses human-readable hotkey descriptors such as `Ctrl+Shift+K` into
//! modifier flags and keys, either one at a time or as a bindings file
//! with one descriptor per line.
//!
//! # Architecture
//! The descriptor grammar is built from nom combinators. Modifier tokens
//! (`ctrl`, `alt`, `shift`, `win`/`super`) fold into flags regardless of
//! their position; every remaining token must resolve to a named key.
//!
//! # Security
//! The parser only reads and structures data - callbacks are attached
//! separately by the caller, so nothing here ever executes anything.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    multi::separated_list1,
    sequence::delimited,
    IResult, Parser,
};
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::core::hotkeys::{combo_label, join_keys};
use crate::core::types::{Key, Modifiers};

/// Parse errors with context for error reporting
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid binding descriptor `{descriptor}`: {message}")]
    InvalidDescriptor { descriptor: String, message: String },

    #[error("unknown key name `{name}`")]
    UnknownKey { name: String },

    #[error("parse error on line {line}: {message}")]
    InvalidLine { line: usize, message: String },

    #[error("IO error reading bindings: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed descriptor: modifier flags plus the non-modifier keys in the
/// order they were written.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedCombo {
    pub modifiers: Modifiers,
    pub keys: Vec<Key>,
}

impl fmt::Display for ParsedCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", combo_label(self.modifiers, &join_keys(&self.keys)))
    }
}

/// Parse a single descriptor such as `"Ctrl+Alt+K"` or `"Shift + F5"`.
///
/// # Example
/// ```
/// use input_hook_manager::core::parser::parse_combo;
/// use input_hook_manager::core::types::Modifiers;
///
/// let combo = parse_combo("Ctrl+Shift+K")?;
/// assert_eq!(combo.modifiers, Modifiers::CONTROL | Modifiers::SHIFT);
/// assert_eq!(combo.keys.len(), 1);
/// # Ok::<(), input_hook_manager::core::parser::ParseError>(())
/// ```
pub fn parse_combo(input: &str) -> Result<ParsedCombo, ParseError> {
    let descriptor = input.trim();

    let (rest, tokens) = combo_tokens(descriptor).map_err(|e| ParseError::InvalidDescriptor {
        descriptor: descriptor.to_string(),
        message: format!("{:?}", e),
    })?;

    if !rest.is_empty() {
        return Err(ParseError::InvalidDescriptor {
            descriptor: descriptor.to_string(),
            message: format!("unexpected trailing input `{}`", rest),
        });
    }

    let mut modifiers = Modifiers::NONE;
    let mut keys = Vec::new();

    for token in tokens {
        match modifier_token(token) {
            Some(flag) => modifiers |= flag,
            None => match Key::from_name(token) {
                Some(key) => keys.push(key),
                None => {
                    return Err(ParseError::UnknownKey {
                        name: token.to_string(),
                    })
                }
            },
        }
    }

    if keys.is_empty() {
        return Err(ParseError::InvalidDescriptor {
            descriptor: descriptor.to_string(),
            message: "at least one non-modifier key is required".to_string(),
        });
    }

    Ok(ParsedCombo { modifiers, keys })
}

/// Parse a bindings listing: one descriptor per line, blank lines and
/// `#` comments skipped. Errors carry 1-based line numbers.
pub fn parse_bindings(content: &str) -> Result<Vec<ParsedCombo>, ParseError> {
    let mut combos = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        match parse_combo(line_trimmed) {
            Ok(combo) => combos.push(combo),
            Err(e) => {
                return Err(ParseError::InvalidLine {
                    line: line_num,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(combos)
}

/// Read and parse a bindings file from disk.
pub fn load_bindings_file(path: &Path) -> Result<Vec<ParsedCombo>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_bindings(&content)
}

/// Map a modifier token to its flag; non-modifier tokens return None.
fn modifier_token(token: &str) -> Option<Modifiers> {
    match token.to_uppercase().as_str() {
        "CTRL" | "CONTROL" => Some(Modifiers::CONTROL),
        "ALT" => Some(Modifiers::ALT),
        "SHIFT" => Some(Modifiers::SHIFT),
        "WIN" | "SUPER" | "META" | "PLATFORM" => Some(Modifiers::PLATFORM),
        _ => None,
    }
}

/// Split a descriptor into `+`-separated tokens, tolerating spaces
/// around each token.
fn combo_tokens(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('+'), combo_token).parse(input)
}

fn combo_token(input: &str) -> IResult<&str, &str> {
    delimited(
        space0,
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        space0,
    )
    .parse(input)
}
