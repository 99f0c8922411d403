use crate::core::types::{AlphabetTable, Lookup};
use caseless::default_case_fold_str;
use tracing::trace;

const CODE_SEPARATOR: &str = " ";

/// Looks up an already case-folded character.
pub fn encode_char(table: &AlphabetTable, ch: char) -> Lookup {
    table.code_for(ch).into()
}

/// Case-folds and encodes one whitespace-free word, joining the character codes with a space.
/// Characters the table does not know are dropped without a trace in the output.
pub fn encode_word(table: &AlphabetTable, word: &str) -> String {
    let folded = default_case_fold_str(word);
    let mut codes: Vec<String> = Vec::with_capacity(folded.len());
    for ch in folded.chars() {
        match encode_char(table, ch) {
            Lookup::Found(code) => codes.push(code),
            Lookup::Missing => trace!(?ch, "skipping untranslatable character"),
        }
    }
    codes.join(CODE_SEPARATOR)
}

/// Looks up a single code token, e.g. ".-" or "/".
pub fn decode_token(table: &AlphabetTable, token: &str) -> Lookup {
    table.char_for(token).into()
}

/// The inline marker emitted in place of a token the table does not know.
pub fn invalid_token_message(token: &str) -> String {
    format!("\nInvalid morse code letter: {}\n", token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table() -> AlphabetTable {
        let pairs = [("h", "...."), ("e", "."), ("i", ".."), ("1", ".----")];
        let to_morse = pairs
            .iter()
            .map(|(c, m)| (c.to_string(), m.to_string()))
            .collect::<HashMap<_, _>>();
        let mut to_normal = pairs
            .iter()
            .map(|(c, m)| (m.to_string(), c.to_string()))
            .collect::<HashMap<_, _>>();
        to_normal.insert("/".to_string(), " ".to_string());
        AlphabetTable::new(to_morse, to_normal)
    }

    #[test]
    fn encode_word_folds_case() {
        assert_eq!(encode_word(&table(), "HeH"), ".... . ....");
    }

    #[test]
    fn encode_word_applies_full_case_folding() {
        let mut table = table();
        for (c, m) in [("s", "..."), ("t", "-"), ("o", "---")] {
            table.to_morse.insert(c.to_string(), m.to_string());
        }
        assert_eq!(encode_word(&table, "ſos"), "... --- ...");
        assert_eq!(encode_word(&table, "ẞt"), "... ... -");
    }

    #[test]
    fn encode_word_skips_only_the_unknown_character() {
        assert_eq!(encode_word(&table(), "h!e"), ".... .");
        assert_eq!(encode_word(&table(), "!!"), "");
    }

    #[test]
    fn encode_char_reports_missing() {
        assert_eq!(encode_char(&table(), '1'), Lookup::Found(".----".to_string()));
        assert_eq!(encode_char(&table(), 'z'), Lookup::Missing);
    }

    #[test]
    fn decode_token_hits_slash() {
        assert_eq!(decode_token(&table(), "/"), Lookup::Found(" ".to_string()));
        assert_eq!(decode_token(&table(), "...---..."), Lookup::Missing);
    }

    #[test]
    fn invalid_message_is_framed_by_newlines() {
        assert_eq!(
            invalid_token_message("@@@"),
            "\nInvalid morse code letter: @@@\n"
        );
    }
}
