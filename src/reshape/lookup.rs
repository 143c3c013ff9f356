//! Read-side helpers over a reshaped document
//!
//! Readers address books by full name or by derived abbreviation, and
//! passages by zero-indexed chapter plus an optional inclusive verse range.

use super::types::{BookOutput, Document};

impl Document {
    /// Find a book by exact name, falling back to its abbreviation.
    ///
    /// The abbreviation match lowercases the query. With colliding
    /// abbreviations the first book in document order wins.
    pub fn find_book(&self, name_or_abbrev: &str) -> Option<&BookOutput> {
        if let Some(book) = self.books().iter().find(|b| b.name == name_or_abbrev) {
            return Some(book);
        }

        let abbrev = name_or_abbrev.to_lowercase();
        self.books().iter().find(|b| b.abbrev == abbrev)
    }

    /// Join the text of a passage with single spaces.
    ///
    /// `chapter` and the `verses` bounds are zero-indexed; the range is
    /// inclusive and its end is clamped to the chapter length. `None` selects
    /// the whole chapter. Returns `None` for an unknown book or chapter.
    pub fn passage_text(
        &self,
        book: &str,
        chapter: usize,
        verses: Option<(usize, usize)>,
    ) -> Option<String> {
        let chapter = self.find_book(book)?.chapters.get(chapter)?;

        let selected: &[String] = match verses {
            None => &chapter[..],
            Some((start, end)) => {
                let end = end.saturating_add(1).min(chapter.len());
                if start >= end {
                    &[]
                } else {
                    &chapter[start..end]
                }
            }
        };

        Some(selected.join(" "))
    }
}
