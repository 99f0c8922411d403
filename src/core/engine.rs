use crate::core::converter::{decode_token, encode_word, invalid_token_message};
use crate::core::types::{AlphabetTable, Direction, Lookup};
use crate::error::Result;
use crate::persistence::{load_table, parse_table};
use std::path::Path;
use tracing::{debug, trace};

const BUILTIN_ALPHABET: &str = include_str!("../../data/morse_code_alphabet.json");
const WORD_SEPARATOR: &str = " / ";

/// Translates text to and from Morse code using a fixed alphabet table.
///
/// The table is never mutated after construction, so a single engine can be
/// shared between threads behind `&` or `Arc` without locking.
#[derive(Debug, Clone)]
pub struct TranslationEngine {
    table: AlphabetTable,
}

impl TranslationEngine {
    pub fn new(table: AlphabetTable) -> Self {
        debug!(
            to_morse = table.to_morse.len(),
            to_normal = table.to_normal.len(),
            "translation engine ready"
        );
        Self { table }
    }

    /// Loads the alphabet from a JSON file with `to_morse` and `to_normal` keys.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(load_table(path.as_ref())?))
    }

    /// Engine over the standard International Morse table shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(parse_table(BUILTIN_ALPHABET)?))
    }

    pub fn table(&self) -> &AlphabetTable {
        &self.table
    }

    /// Encodes each whitespace-separated word and joins them with " / ".
    /// A word with nothing translatable still leaves an empty slot.
    pub fn encode_to_code(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| encode_word(&self.table, word))
            .collect::<Vec<_>>()
            .join(WORD_SEPARATOR)
    }

    /// Decodes each whitespace-separated token and concatenates the results.
    /// Unknown tokens are replaced by an inline "Invalid morse code letter" line.
    pub fn decode_from_code(&self, text: &str) -> String {
        let mut decoded = String::with_capacity(text.len() / 2);
        for token in text.split_whitespace() {
            match decode_token(&self.table, token) {
                Lookup::Found(ch) => decoded.push_str(&ch),
                Lookup::Missing => {
                    trace!(token, "unrecognized morse token");
                    decoded.push_str(&invalid_token_message(token));
                }
            }
        }
        decoded
    }

    pub fn convert(&self, text: &str, direction: Direction) -> String {
        match direction {
            Direction::ToMorse => self.encode_to_code(text),
            Direction::FromMorse => self.decode_from_code(text),
        }
    }
}
