use encapsulated_learning::{
    Book, Borrower, ItemState, Librarian, LibraryError, Registry, SharedItem, share,
};
use pretty_assertions::assert_eq;

fn book(title: &str, author: &str, year: i32, genre: &str) -> SharedItem {
    share(Book::new(title, author, year, genre))
}

#[test]
fn test_full_library_session() {
    let gatsby = book("The Great Gatsby", "F. Scott Fitzgerald", 1925, "Fiction");
    let clean_code = book("Clean Code", "Robert C. Martin", 2008, "Programming");
    let nineteen = book("1984", "George Orwell", 1949, "Dystopian");

    let mut registry = Registry::new();
    let librarian = Librarian::new("Margaret", &mut registry);
    let mut alice = Borrower::with_max_items("Alice", 2);

    assert_eq!(Librarian::format_item_title("to kill a mockingbird"), "To Kill A Mockingbird");
    assert_eq!(Librarian::total_librarians(&registry), 1);

    assert_eq!(alice.borrow_item(&gatsby), Ok(()));
    assert_eq!(alice.borrow_item(&clean_code), Ok(()));
    assert!(matches!(
        alice.borrow_item(&nineteen),
        Err(LibraryError::BorrowLimitReached { max_items: 2, .. })
    ));
    assert_eq!(alice.borrow_count(), 2);

    assert_eq!(alice.return_item(&gatsby), Ok(()));
    assert_eq!(alice.borrow_count(), 1);
    assert!(!gatsby.borrow().is_checked_out());

    let report = alice.report();
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items.first().map(|item| item.state), Some(ItemState::CheckedOut));
    assert_eq!(
        report.to_string(),
        "Alice's borrowed items:\n - Clean Code by Robert C. Martin (2008) - Genre: Programming"
    );

    assert_eq!(librarian.assist_user(&alice), "Margaret is assisting Alice.");
}

#[test]
#[allow(clippy::indexing_slicing, clippy::expect_used)]
fn test_report_serializes_to_json() {
    let gatsby = book("The Great Gatsby", "F. Scott Fitzgerald", 1925, "Fiction");
    let mut alice = Borrower::new("Alice");
    assert_eq!(alice.borrow_item(&gatsby), Ok(()));

    let value = serde_json::to_value(alice.report()).expect("report serializes");
    assert_eq!(value["borrower"], "Alice");
    assert_eq!(value["max_items"], 3);
    assert_eq!(value["items"][0]["title"], "The Great Gatsby");
    assert_eq!(value["items"][0]["state"], "CheckedOut");
}

#[test]
fn test_two_borrowers_cannot_share_an_item() {
    let gatsby = book("The Great Gatsby", "F. Scott Fitzgerald", 1925, "Fiction");
    let mut alice = Borrower::new("Alice");
    let mut bob = Borrower::new("Bob");

    assert_eq!(alice.borrow_item(&gatsby), Ok(()));
    assert!(matches!(bob.borrow_item(&gatsby), Err(LibraryError::AlreadyCheckedOut { .. })));
    assert!(matches!(bob.return_item(&gatsby), Err(LibraryError::NotBorrowed { .. })));

    assert_eq!(alice.return_item(&gatsby), Ok(()));
    assert_eq!(bob.borrow_item(&gatsby), Ok(()));
    assert!(bob.holds(&gatsby));
    assert!(!alice.holds(&gatsby));
}
