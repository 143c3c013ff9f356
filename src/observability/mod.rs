//! Observability for bibleshape
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed conversion events
//! - Begin/complete scopes
//!
//! # Usage
//!
//! ```ignore
//! use bibleshape::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Warn);
//! log_event_with_fields(Event::InputLoaded, &[("records", "31102")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::{ObservationScope, Timer};

#[cfg(test)]
pub(crate) use logger::capture_logs;

/// Log a conversion event with fields at INFO level
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::info(event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::InputLoaded, &[("path", "/tmp/kjv_flat.json")]);
    }
}
