//! Observable conversion events
//!
//! Events are explicit and typed. Failures are reported by the
//! `CONVERT` observation scope, not by an event.

use std::fmt;

/// Observable events during a conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration resolved
    ConfigLoaded,
    /// Input file read and parsed
    InputLoaded,
    /// Verses grouped into a document
    ReshapeComplete,
    /// Output file written
    OutputWritten,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::InputLoaded => "INPUT_LOADED",
            Event::ReshapeComplete => "RESHAPE_COMPLETE",
            Event::OutputWritten => "OUTPUT_WRITTEN",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
