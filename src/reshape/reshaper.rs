//! Single-pass grouping of flat verses into books and chapters
//!
//! Books keep first-seen order through an explicit registry (a `Vec` of
//! accumulators plus a name → slot map); no map iteration order is relied on.

use std::collections::{BTreeMap, HashMap};

use super::abbrev::abbreviate;
use super::errors::{ReshapeError, ReshapeResult};
use super::types::{BookOutput, Document, VerseRecord};

/// Highest accepted 1-indexed chapter number.
///
/// Bounds the dense chapter array a single record can force.
pub const MAX_CHAPTER: i64 = 65_535;

/// Per-book verse texts keyed by zero-indexed chapter, build-time only.
#[derive(Debug)]
struct BookAccumulator {
    name: String,
    chapters: BTreeMap<usize, Vec<String>>,
}

impl BookAccumulator {
    fn new(name: String) -> Self {
        Self {
            name,
            chapters: BTreeMap::new(),
        }
    }

    fn push(&mut self, chapter_index: usize, text: String) {
        self.chapters.entry(chapter_index).or_default().push(text);
    }

    fn finish(mut self) -> BookOutput {
        // Largest key + 1; an accumulator with no chapters yields an empty array.
        let len = self
            .chapters
            .keys()
            .next_back()
            .map_or(0, |max_index| max_index + 1);

        let chapters = (0..len)
            .map(|i| self.chapters.remove(&i).unwrap_or_default())
            .collect();

        BookOutput {
            abbrev: abbreviate(&self.name),
            name: self.name,
            chapters,
        }
    }
}

/// Ordered book registry
#[derive(Debug, Default)]
struct BookRegistry {
    books: Vec<BookAccumulator>,
    slots: HashMap<String, usize>,
}

impl BookRegistry {
    fn entry(&mut self, book_name: String) -> &mut BookAccumulator {
        let slot = match self.slots.get(&book_name) {
            Some(&slot) => slot,
            None => {
                let slot = self.books.len();
                self.slots.insert(book_name.clone(), slot);
                self.books.push(BookAccumulator::new(book_name));
                slot
            }
        };
        &mut self.books[slot]
    }

    fn into_document(self) -> Document {
        Document::new(self.books.into_iter().map(BookAccumulator::finish).collect())
    }
}

/// Group flat verse records into a nested document.
///
/// - Books appear in order of first appearance
/// - Each book's `chapters` is dense up to its highest chapter
/// - Verse order within a chapter follows input order
///
/// # Errors
///
/// - `EmptyInput` if `verses` is empty
/// - `InvalidChapter` if any chapter is below 1 or above [`MAX_CHAPTER`]
///
/// Either the whole document is returned or nothing is.
pub fn reshape(verses: Vec<VerseRecord>) -> ReshapeResult<Document> {
    if verses.is_empty() {
        return Err(ReshapeError::EmptyInput);
    }

    let mut registry = BookRegistry::default();

    for (index, verse) in verses.into_iter().enumerate() {
        let chapter_index = chapter_index(index, verse.chapter)?;
        registry.entry(verse.book_name).push(chapter_index, verse.text);
    }

    Ok(registry.into_document())
}

fn chapter_index(index: usize, chapter: i64) -> ReshapeResult<usize> {
    if !(1..=MAX_CHAPTER).contains(&chapter) {
        return Err(ReshapeError::invalid_chapter(index, chapter));
    }
    usize::try_from(chapter - 1).map_err(|_| ReshapeError::invalid_chapter(index, chapter))
}
