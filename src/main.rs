//! bibleshape CLI entry point
//!
//! Parses arguments and runs the conversion via `cli::run`, prints any error
//! to stderr and exits non-zero on failure.

use bibleshape::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
