use tracing::info;

use crate::{borrower::Borrower, registry::Registry};

/// Staff member who helps borrowers. Owns no items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Librarian {
    /// Display name
    name: String,
}

impl Librarian {
    /// Create a librarian and record them in `registry`
    #[must_use]
    pub fn new(name: &str, registry: &mut Registry) -> Self {
        registry.register(name);
        info!(librarian = name, total = registry.total(), "Librarian registered");
        Self { name: name.to_string() }
    }

    /// Librarian's display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produce the assistance message for `borrower`
    #[must_use]
    pub fn assist_user(&self, borrower: &Borrower) -> String {
        let message = format!("{} is assisting {}.", self.name, borrower.name());
        info!("{message}");
        message
    }

    /// Librarians constructed against `registry` so far
    #[must_use]
    pub fn total_librarians(registry: &Registry) -> usize {
        registry.total()
    }

    /// Title-case `title`: a letter that follows a non-letter (or starts the
    /// string) is upper-cased, every other letter lower-cased. Non-letters are
    /// kept as is, so `"rock-and-roll"` becomes `"Rock-And-Roll"` and an
    /// apostrophe starts a new word too (`"o'neil's"` → `"O'Neil'S"`).
    #[must_use]
    pub fn format_item_title(title: &str) -> String {
        let mut formatted = String::with_capacity(title.len());
        let mut word_start = true;
        for c in title.chars() {
            if word_start {
                formatted.extend(c.to_uppercase());
            } else {
                formatted.extend(c.to_lowercase());
            }
            word_start = !c.is_alphabetic();
        }
        formatted
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_item_title() {
        assert_eq!(Librarian::format_item_title("to kill a mockingbird"), "To Kill A Mockingbird");
        assert_eq!(Librarian::format_item_title("CLEAN  code"), "Clean  Code");
        assert_eq!(Librarian::format_item_title(""), "");
    }

    #[test]
    fn test_format_item_title_breaks_words_on_any_non_letter() {
        assert_eq!(Librarian::format_item_title("(the hobbit)"), "(The Hobbit)");
        assert_eq!(Librarian::format_item_title("rock-and-roll"), "Rock-And-Roll");
        assert_eq!(Librarian::format_item_title("o'neil's day"), "O'Neil'S Day");
        assert_eq!(Librarian::format_item_title("catch-22 part2x"), "Catch-22 Part2X");
    }

    #[test]
    fn test_each_construction_counts_once() {
        let mut registry = Registry::new();
        for expected in 1..=3 {
            let librarian = Librarian::new("Margaret", &mut registry);
            assert_eq!(librarian.name(), "Margaret");
            assert_eq!(Librarian::total_librarians(&registry), expected);
        }
    }

    #[test]
    fn test_count_outlives_instances() {
        let mut registry = Registry::new();
        {
            let _margaret = Librarian::new("Margaret", &mut registry);
        }
        assert_eq!(Librarian::total_librarians(&registry), 1);
    }

    #[test]
    fn test_assist_user_mentions_both_names() {
        let mut registry = Registry::new();
        let librarian = Librarian::new("Margaret", &mut registry);
        let alice = Borrower::new("Alice");
        assert_eq!(librarian.assist_user(&alice), "Margaret is assisting Alice.");
        assert_eq!(alice.borrow_count(), 0);
    }
}
