//! File and stdout I/O for the CLI
//!
//! - Input: raw text read from a file; JSON parsing belongs to `reshape`
//! - Output: the reshaped document, UTF-8, non-ASCII kept literal
//! - Response: one JSON object on stdout

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::reshape::Document;

use super::commands::ConvertSummary;
use super::errors::{CliError, CliResult};

/// Read the input document as text
pub fn read_input(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|e| {
        CliError::io_error(format!("Failed to read input {}: {}", path.display(), e))
    })
}

/// Serialize a document to bytes
///
/// Compact by default; `pretty` indents with two spaces.
pub fn encode_document(document: &Document, pretty: bool) -> CliResult<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(document)?
    } else {
        serde_json::to_vec(document)?
    };
    Ok(bytes)
}

/// Write the document to `path`
///
/// Serialization finishes before the file is touched, so an encode failure
/// leaves no output behind.
pub fn write_document(path: &Path, document: &Document, pretty: bool) -> CliResult<()> {
    let bytes = encode_document(document, pretty)?;
    fs::write(path, bytes).map_err(|e| {
        CliError::io_error(format!("Failed to write output {}: {}", path.display(), e))
    })
}

/// Build the success response for a finished conversion
pub fn success_response(summary: &ConvertSummary, output: &Path) -> Value {
    json!({
        "status": "ok",
        "data": {
            "books": summary.books,
            "verses": summary.verses,
            "output": output.display().to_string(),
        }
    })
}

/// Write a response object to stdout as one line
pub fn write_response(response: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write plain text (help, version) to stdout
pub fn write_text(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush()?;

    Ok(())
}
