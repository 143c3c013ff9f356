//! CLI argument definitions using clap
//!
//! bibleshape <INPUT> <OUTPUT> [--config <path>] [--pretty] [--quiet]

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use super::errors::{CliError, CliResult};

/// bibleshape - reshape flat verse JSON into book/chapter/verse JSON
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bibleshape")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Flat input document with a top-level `verses` array
    pub input: PathBuf,

    /// Destination for the nested document
    pub output: PathBuf,

    /// Optional JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Indent the output document
    #[arg(long)]
    pub pretty: bool,

    /// Only log errors
    #[arg(long, short)]
    pub quiet: bool,
}

/// Outcome of argument parsing
#[derive(Debug)]
pub enum Parsed {
    /// Arguments are valid; run the conversion
    Run(Cli),
    /// `--help` or `--version` was requested; text to print on stdout
    Info(String),
}

impl Cli {
    /// Parse process arguments
    pub fn parse_args() -> CliResult<Parsed> {
        Self::parse_from_args(std::env::args_os())
    }

    /// Parse an explicit argument list (first item is the program name)
    ///
    /// Any parse failure is a usage error. Help and version output are not
    /// failures.
    pub fn parse_from_args<I, T>(args: I) -> CliResult<Parsed>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(Parsed::Run(cli)),
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Ok(Parsed::Info(e.render().to_string()))
                }
                _ => Err(CliError::usage(e.render().to_string())),
            },
        }
    }
}
