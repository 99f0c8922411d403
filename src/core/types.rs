// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single code symbol, e.g. ".-" for 'a'.
pub type CodeSymbol = String;

/// The bidirectional alphabet. Both directions are loaded as given; `to_normal`
/// is not derived from `to_morse`, so the two need not be exact inverses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetTable {
    /// Lowercase character (as a one-char string) -> code symbol.
    pub to_morse: HashMap<String, CodeSymbol>,
    /// Code symbol -> character. Usually maps "/" to a single space.
    pub to_normal: HashMap<CodeSymbol, String>,
}

impl AlphabetTable {
    pub fn new(to_morse: HashMap<String, CodeSymbol>, to_normal: HashMap<CodeSymbol, String>) -> Self {
        Self { to_morse, to_normal }
    }

    pub fn code_for(&self, ch: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.to_morse.get(&*ch.encode_utf8(&mut buf)).map(String::as_str)
    }

    pub fn char_for(&self, code: &str) -> Option<&str> {
        self.to_normal.get(code).map(String::as_str)
    }
}

/// Which way a piece of text is being translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToMorse,
    FromMorse,
}

/// Outcome of a single table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(String),
    Missing,
}

impl From<Option<&str>> for Lookup {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(s) => Lookup::Found(s.to_string()),
            None => Lookup::Missing,
        }
    }
}
