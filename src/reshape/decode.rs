//! Boundary decoding of the flat input document
//!
//! Input shape:
//! - top-level object with a `verses` array
//! - each verse an object with `book_name` (string), `chapter` (integer)
//!   and `text` (string)
//! - other keys tolerated and ignored
//!
//! Decoding is field-by-field so a failure names the record index and the
//! offending field instead of surfacing a generic deserializer message.

use serde_json::{Map, Value};

use super::errors::{ReshapeError, ReshapeResult};
use super::types::VerseRecord;

/// Parse raw JSON text and decode the verse list.
pub fn parse_input(json: &str) -> ReshapeResult<Vec<VerseRecord>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| ReshapeError::InvalidDocument(format!("JSON syntax error: {}", e)))?;
    decode_input(&value)
}

/// Decode a parsed input document into verse records.
///
/// # Errors
///
/// - `InvalidDocument` if the root is not an object or `verses` is not an array
/// - `EmptyInput` if `verses` is missing, null or empty
/// - `MalformedRecord` / `InvalidChapter` for the first bad record
pub fn decode_input(document: &Value) -> ReshapeResult<Vec<VerseRecord>> {
    let root = document.as_object().ok_or_else(|| {
        ReshapeError::InvalidDocument(format!(
            "expected a top-level object, found {}",
            json_type_name(document)
        ))
    })?;

    let verses = match root.get("verses") {
        None | Some(Value::Null) => return Err(ReshapeError::EmptyInput),
        Some(Value::Array(verses)) => verses,
        Some(other) => {
            return Err(ReshapeError::InvalidDocument(format!(
                "'verses' must be an array, found {}",
                json_type_name(other)
            )))
        }
    };

    if verses.is_empty() {
        return Err(ReshapeError::EmptyInput);
    }

    verses
        .iter()
        .enumerate()
        .map(|(index, verse)| decode_record(index, verse))
        .collect()
}

/// Decode a single verse record at `index`.
fn decode_record(index: usize, value: &Value) -> ReshapeResult<VerseRecord> {
    let obj = value
        .as_object()
        .ok_or_else(|| ReshapeError::malformed(index, "$record", "object"))?;

    let book_name = require_string(obj, index, "book_name")?;
    let text = require_string(obj, index, "text")?;

    let chapter = match obj.get("chapter") {
        None | Some(Value::Null) => {
            return Err(ReshapeError::malformed(index, "chapter", "integer"))
        }
        Some(v) => v
            .as_i64()
            .ok_or_else(|| ReshapeError::invalid_chapter(index, v))?,
    };

    // Verse numbers are informational only; a non-integer is dropped, not rejected.
    let verse = obj.get("verse").and_then(Value::as_i64);

    Ok(VerseRecord {
        book_name,
        chapter,
        text,
        verse,
    })
}

fn require_string(
    obj: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> ReshapeResult<String> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ReshapeError::malformed(index, field, "string"))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_valid_records() {
        let doc = json!({
            "verses": [
                {"book_name": "Genesis", "book": 1, "chapter": 1, "verse": 1, "text": "In the beginning"},
                {"book_name": "Genesis", "chapter": 1, "text": "And the earth"}
            ]
        });

        let records = decode_input(&doc).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].verse, Some(1));
        assert_eq!(records[1].verse, None);
        assert_eq!(records[1].text, "And the earth");
    }

    #[test]
    fn test_missing_verses_key_is_empty_input() {
        assert_eq!(decode_input(&json!({})), Err(ReshapeError::EmptyInput));
        assert_eq!(
            decode_input(&json!({"verses": null})),
            Err(ReshapeError::EmptyInput)
        );
        assert_eq!(
            decode_input(&json!({"verses": []})),
            Err(ReshapeError::EmptyInput)
        );
    }

    #[test]
    fn test_non_object_root_rejected() {
        let err = decode_input(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.code(), "BIBLESHAPE_INVALID_DOCUMENT");
    }

    #[test]
    fn test_verses_not_array_rejected() {
        let err = decode_input(&json!({"verses": {"a": 1}})).unwrap_err();
        assert!(matches!(err, ReshapeError::InvalidDocument(_)));
    }

    #[test]
    fn test_missing_field_reports_index_and_field() {
        let doc = json!({
            "verses": [
                {"book_name": "Genesis", "chapter": 1, "text": "ok"},
                {"book_name": "Genesis", "chapter": 1}
            ]
        });

        assert_eq!(
            decode_input(&doc),
            Err(ReshapeError::MalformedRecord {
                index: 1,
                field: "text",
                expected: "string"
            })
        );
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let doc = json!({"verses": [{"book_name": 5, "chapter": 1, "text": "x"}]});
        let err = decode_input(&doc).unwrap_err();
        assert_eq!(err, ReshapeError::malformed(0, "book_name", "string"));
    }

    #[test]
    fn test_missing_chapter_is_malformed() {
        let doc = json!({"verses": [{"book_name": "Job", "text": "x"}]});
        let err = decode_input(&doc).unwrap_err();
        assert_eq!(err, ReshapeError::malformed(0, "chapter", "integer"));
    }

    #[test]
    fn test_non_integer_chapter_is_invalid_chapter() {
        for chapter in [json!(1.5), json!("3"), json!(true)] {
            let doc = json!({"verses": [{"book_name": "Job", "chapter": chapter, "text": "x"}]});
            let err = decode_input(&doc).unwrap_err();
            assert_eq!(err.code(), "BIBLESHAPE_INVALID_CHAPTER");
        }
    }

    #[test]
    fn test_non_object_record_is_malformed() {
        let doc = json!({"verses": ["In the beginning"]});
        let err = decode_input(&doc).unwrap_err();
        assert_eq!(err, ReshapeError::malformed(0, "$record", "object"));
    }

    #[test]
    fn test_parse_input_syntax_error() {
        let err = parse_input("{\"verses\": [").unwrap_err();
        assert!(matches!(err, ReshapeError::InvalidDocument(_)));
    }
}
