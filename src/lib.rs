// src/lib.rs

pub mod cli;
pub mod core;
pub mod error;
pub mod persistence;
pub mod prompt;
pub use crate::core::engine::TranslationEngine;
pub use crate::core::types::{AlphabetTable, Direction};
pub use crate::error::{MorseError, Result};
