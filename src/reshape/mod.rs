//! Flat verse list → book/chapter/verse document
//!
//! Pipeline:
//! 1. `decode_input` validates the raw document into [`VerseRecord`]s
//! 2. `reshape` groups them into a [`Document`]
//!
//! Both steps are pure. Reading and writing files belongs to the CLI.

mod abbrev;
mod decode;
mod errors;
mod lookup;
mod reshaper;
mod types;

pub use abbrev::{abbreviate, ABBREV_LEN};
pub use decode::{decode_input, parse_input};
pub use errors::{ReshapeError, ReshapeResult};
pub use reshaper::{reshape, MAX_CHAPTER};
pub use types::{BookOutput, Document, VerseRecord};

/// Decode a parsed input document and reshape it in one call.
pub fn reshape_value(document: &serde_json::Value) -> ReshapeResult<Document> {
    reshape(decode_input(document)?)
}
