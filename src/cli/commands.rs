//! CLI command implementation
//!
//! One command: read a flat verse document, reshape it, write the nested
//! document. Nothing is written unless the whole reshape succeeds.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event, Logger, ObservationScope, Severity};
use crate::reshape::{self, Document};

use super::args::{Cli, Parsed};
use super::errors::{CliError, CliResult};
use super::io::{read_input, success_response, write_document, write_response, write_text};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Indent the output document (optional, default false)
    #[serde(default)]
    pub pretty: bool,

    /// Minimum log level (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.severity().map(|_| ())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error.",
                self.log_level
            ))
        })
    }
}

/// Effective settings for one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub pretty: bool,
    pub log_level: Severity,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pretty: false,
            log_level: Severity::Info,
        }
    }
}

impl Options {
    /// Merge the config file (if any) with command-line flags
    ///
    /// Flags win: `--pretty` forces indentation, `--quiet` forces ERROR.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        let log_level = if cli.quiet {
            Severity::Error
        } else {
            config.severity()?
        };

        Ok(Self {
            pretty: config.pretty || cli.pretty,
            log_level,
        })
    }
}

/// Counts reported after a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub books: usize,
    pub verses: usize,
}

/// Main CLI entry point
///
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    dispatch(Cli::parse_args()?)
}

/// Run against an explicit argument list (first item is the program name)
pub fn run_from<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    dispatch(Cli::parse_from_args(args)?)
}

fn dispatch(parsed: Parsed) -> CliResult<()> {
    match parsed {
        Parsed::Info(text) => write_text(&text),
        Parsed::Run(cli) => {
            let options = Options::resolve(&cli)?;
            let summary = convert(&cli.input, &cli.output, &options)?;
            write_response(&success_response(&summary, &cli.output))
        }
    }
}

/// Convert `input` into `output`
///
/// Sequence:
/// 1. Read the input file and parse it as JSON
/// 2. Decode verse records and reshape
/// 3. Write the output document
///
/// On any failure the output path is not written.
pub fn convert(input: &Path, output: &Path, options: &Options) -> CliResult<ConvertSummary> {
    Logger::set_min_severity(options.log_level);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("log_level", options.log_level.as_str()),
            ("pretty", if options.pretty { "true" } else { "false" }),
        ],
    );

    let input_str = input.display().to_string();
    let output_str = output.display().to_string();
    let scope = ObservationScope::with_fields(
        "CONVERT",
        &[("input", input_str.as_str()), ("output", output_str.as_str())],
    );

    match convert_inner(input, output, options) {
        Ok(summary) => {
            let books = summary.books.to_string();
            let verses = summary.verses.to_string();
            scope.complete_with_fields(&[
                ("books", books.as_str()),
                ("verses", verses.as_str()),
            ]);
            Ok(summary)
        }
        Err(e) => {
            scope.fail(e.code_str(), e.message());
            Err(e)
        }
    }
}

fn convert_inner(input: &Path, output: &Path, options: &Options) -> CliResult<ConvertSummary> {
    let content = read_input(input)?;
    let records = reshape::parse_input(&content)?;
    let record_count = records.len().to_string();
    log_event_with_fields(Event::InputLoaded, &[("records", record_count.as_str())]);

    let document: Document = reshape::reshape(records)?;
    let summary = ConvertSummary {
        books: document.book_count(),
        verses: document.total_verses(),
    };
    log_event_with_fields(
        Event::ReshapeComplete,
        &[
            ("books", summary.books.to_string().as_str()),
            ("verses", summary.verses.to_string().as_str()),
        ],
    );

    write_document(output, &document, options.pretty)?;
    let output_path = output.display().to_string();
    log_event_with_fields(Event::OutputWritten, &[("path", output_path.as_str())]);

    Ok(summary)
}
