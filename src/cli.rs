use crate::core::types::Direction;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Translate text to and from International Morse code
#[derive(Parser, Debug)]
#[command(name = "morse")]
#[command(version)]
#[command(group(ArgGroup::new("direction").args(["to_morse", "from_morse"])))]
pub struct Cli {
    /// Alphabet JSON file with `to_morse` and `to_normal` tables (defaults to the built-in one)
    #[arg(short, long, global = true)]
    pub alphabet: Option<PathBuf>,

    /// Translate TEXT to morse code without prompting
    #[arg(long, requires = "text")]
    pub to_morse: bool,

    /// Translate TEXT from morse code without prompting
    #[arg(long, requires = "text")]
    pub from_morse: bool,

    /// Text to translate; words are joined with single spaces.
    /// Needs --to-morse or --from-morse; without TEXT the menu is shown.
    #[arg(requires = "direction")]
    pub text: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Write the active alphabet table to a JSON file
    ExportAlphabet {
        /// Destination path
        path: PathBuf,
    },
}

impl Cli {
    pub fn direction(&self) -> Option<Direction> {
        if self.to_morse {
            Some(Direction::ToMorse)
        } else if self.from_morse {
            Some(Direction::FromMorse)
        } else {
            None
        }
    }

    /// Direction and text for a non-interactive run, `None` when the prompt is needed.
    pub fn one_shot(&self) -> Option<(Direction, String)> {
        if self.text.is_empty() {
            return None;
        }
        self.direction().map(|direction| (direction, self.text.join(" ")))
    }
}
