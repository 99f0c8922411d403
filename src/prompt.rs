//! Interactive prompts for the command-line front end.
//!
//! Generic over the reader and writer so the menu loop can be driven from
//! tests with in-memory buffers.

use crate::core::types::Direction;
use crate::error::{MorseError, Result};
use crossterm::style::Stylize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Maps a menu answer to a direction. Surrounding whitespace is ignored.
pub fn parse_choice(input: &str) -> Option<Direction> {
    match input.trim() {
        "1" => Some(Direction::ToMorse),
        "2" => Some(Direction::FromMorse),
        _ => None,
    }
}

/// Shows the two-option menu until the user picks one.
pub fn prompt_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Direction> {
    loop {
        writeln!(output, "1. Translate to morse code")?;
        writeln!(output, "2. Translate from morse code")?;
        write!(output, "{}", "1 or 2: ".bold())?;
        output.flush()?;

        let line = read_line(input)?;
        match parse_choice(&line) {
            Some(direction) => return Ok(direction),
            None => debug!(answer = %line.trim(), "invalid menu choice, asking again"),
        }
    }
}

/// Asks for the text to convert and returns it without the line ending.
pub fn prompt_text<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", "Enter text: ".bold())?;
    output.flush()?;
    read_line(input)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(MorseError::InputClosed);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(line)
}
