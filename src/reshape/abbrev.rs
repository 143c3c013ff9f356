//! Book abbreviation derivation

/// Maximum abbreviation length in characters
pub const ABBREV_LEN: usize = 3;

/// Derive a short code for a book name.
///
/// Lowercase, drop spaces, keep the first three characters. Distinct books
/// may share a code; nothing here tries to disambiguate them.
pub fn abbreviate(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| *c != ' ')
        .take(ABBREV_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_books() {
        assert_eq!(abbreviate("Song of Solomon"), "son");
        assert_eq!(abbreviate("Job"), "job");
        assert_eq!(abbreviate("1 Kings"), "1ki");
    }

    #[test]
    fn test_short_names() {
        assert_eq!(abbreviate("Ox"), "ox");
        assert_eq!(abbreviate(""), "");
        assert_eq!(abbreviate("   "), "");
    }

    #[test]
    fn test_collisions_are_kept() {
        assert_eq!(abbreviate("Judges"), abbreviate("Jude"));
    }

    #[test]
    fn test_non_ascii_counts_characters() {
        assert_eq!(abbreviate("Ésaïe"), "ésa");
        assert_eq!(abbreviate("1 Moïse"), "1mo");
    }
}
