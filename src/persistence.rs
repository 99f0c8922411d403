// File: src/persistence.rs
use crate::core::types::AlphabetTable;
use crate::error::{MorseError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Reads and validates an alphabet table from a JSON file.
pub fn load_table(path: &Path) -> Result<AlphabetTable> {
    debug!(path = %path.display(), "loading alphabet table");
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let table: AlphabetTable = serde_json::from_reader(reader)?;
    validate_table(&table)?;
    info!(path = %path.display(), entries = table.to_morse.len(), "alphabet table loaded");
    Ok(table)
}

/// Same as [`load_table`], for a document already in memory.
pub fn parse_table(json: &str) -> Result<AlphabetTable> {
    let table: AlphabetTable = serde_json::from_str(json)?;
    validate_table(&table)?;
    Ok(table)
}

/// Writes the table as pretty JSON, replacing `path` atomically.
pub fn save_table(table: &AlphabetTable, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, table)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), "alphabet table written");
    Ok(())
}

/// Rejects codes containing whitespace, which would split into several
/// tokens when decoding. Entries that can merely never match are logged and kept.
fn validate_table(table: &AlphabetTable) -> Result<()> {
    if table.to_morse.is_empty() {
        warn!("to_morse is empty, encoding will produce no codes");
    }
    for (ch, code) in &table.to_morse {
        if ch.chars().count() != 1 {
            warn!(key = %ch, "to_morse key is not a single character and will never match");
        }
        check_code(code, ch)?;
    }
    for (code, ch) in &table.to_normal {
        if code.is_empty() {
            warn!(value = %ch, "to_normal has an empty code that will never match");
        }
        check_code(code, ch)?;
    }
    Ok(())
}

fn check_code(code: &str, ch: &str) -> Result<()> {
    if code.chars().any(char::is_whitespace) {
        return Err(MorseError::invalid_table(format!(
            "code {:?} for {:?} contains whitespace",
            code, ch
        )));
    }
    Ok(())
}
