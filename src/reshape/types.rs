//! Verse records and the nested output document

use serde::{Deserialize, Serialize};

/// One flat input verse.
///
/// Only `book_name`, `chapter` and `text` drive the reshape. `verse` is
/// carried when present but never consulted; placement within a chapter
/// follows input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub book_name: String,
    /// 1-indexed chapter number
    pub chapter: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse: Option<i64>,
}

impl VerseRecord {
    pub fn new(book_name: impl Into<String>, chapter: i64, text: impl Into<String>) -> Self {
        Self {
            book_name: book_name.into(),
            chapter,
            text: text.into(),
            verse: None,
        }
    }
}

/// One book of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookOutput {
    pub name: String,
    pub abbrev: String,
    /// Dense, zero-indexed. Chapters without verses are empty.
    pub chapters: Vec<Vec<String>>,
}

impl BookOutput {
    /// Total verses across all chapters of this book
    pub fn verse_count(&self) -> usize {
        self.chapters.iter().map(Vec::len).sum()
    }
}

/// The output document: books in first-seen order.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    books: Vec<BookOutput>,
}

impl Document {
    pub fn new(books: Vec<BookOutput>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[BookOutput] {
        &self.books
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Total verses across every book
    pub fn total_verses(&self) -> usize {
        self.books.iter().map(BookOutput::verse_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_serializes_as_array() {
        let doc = Document::new(vec![BookOutput {
            name: "Jude".into(),
            abbrev: "jud".into(),
            chapters: vec![vec!["Jude, the servant".into()]],
        }]);

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!([{"name": "Jude", "abbrev": "jud", "chapters": [["Jude, the servant"]]}])
        );
    }

    #[test]
    fn test_verse_record_ignores_unknown_fields() {
        let record: VerseRecord = serde_json::from_value(json!({
            "book_name": "Ruth",
            "book": 8,
            "chapter": 1,
            "verse": 1,
            "text": "Now it came to pass"
        }))
        .unwrap();

        assert_eq!(record.book_name, "Ruth");
        assert_eq!(record.chapter, 1);
        assert_eq!(record.verse, Some(1));
    }

    #[test]
    fn test_total_verses() {
        let doc = Document::new(vec![
            BookOutput {
                name: "A".into(),
                abbrev: "a".into(),
                chapters: vec![vec!["1".into(), "2".into()], vec![]],
            },
            BookOutput {
                name: "B".into(),
                abbrev: "b".into(),
                chapters: vec![vec!["3".into()]],
            },
        ]);

        assert_eq!(doc.book_count(), 2);
        assert_eq!(doc.total_verses(), 3);
    }
}
