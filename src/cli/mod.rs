//! Command-line interface
//!
//! `bibleshape <INPUT> <OUTPUT>`: read a flat verse document, write the
//! nested book/chapter/verse document, report counts on stdout.

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Parsed};
pub use commands::{convert, run, run_from, Config, ConvertSummary, Options};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{encode_document, read_input, success_response, write_document, write_response};
