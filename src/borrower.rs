use std::{fmt, rc::Rc};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    error::LibraryError,
    item::{ItemSummary, SharedItem},
};

/// Number of items a borrower may hold unless told otherwise
pub const DEFAULT_MAX_ITEMS: usize = 3;

/// Someone holding a bounded set of checked-out items
#[derive(Debug)]
pub struct Borrower {
    /// Display name
    name: String,
    /// Upper bound on `borrowed.len()`
    max_items: usize,
    /// Items currently held, in borrowing order
    borrowed: Vec<SharedItem>,
}

impl Borrower {
    /// Create a borrower allowed [`DEFAULT_MAX_ITEMS`] items
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_max_items(name, DEFAULT_MAX_ITEMS)
    }

    /// Create a borrower allowed `max_items` items
    #[must_use]
    pub fn with_max_items(name: &str, max_items: usize) -> Self {
        Self { name: name.to_string(), max_items, borrowed: Vec::new() }
    }

    /// Borrower's display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Most items this borrower may hold at once
    #[must_use]
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Borrow `item`, checking it out
    ///
    /// An item that is already checked out is refused before the borrowing
    /// limit is looked at, so a full borrower asking for a held item hears
    /// about the item, not about their limit.
    ///
    /// # Errors
    ///
    /// - `LibraryError::AlreadyCheckedOut` if someone holds the item
    /// - `LibraryError::BorrowLimitReached` if this borrower is at `max_items`
    ///
    /// An item never appears twice in the borrowed list.
    pub fn borrow_item(&mut self, item: &SharedItem) -> Result<(), LibraryError> {
        let mut held = item.borrow_mut();

        if held.is_checked_out() {
            let err = LibraryError::AlreadyCheckedOut { title: held.title().to_string() };
            warn!(borrower = %self.name, "{err}");
            return Err(err);
        }

        // An available item still in the list was returned behind our back
        if self.holds(item) {
            debug!(borrower = %self.name, title = held.title(), "Dropping stale entry");
            self.borrowed.retain(|entry| !Rc::ptr_eq(entry, item));
        }

        if self.borrowed.len() >= self.max_items {
            let err = LibraryError::BorrowLimitReached {
                borrower: self.name.clone(),
                max_items: self.max_items,
            };
            warn!(title = held.title(), "{err}");
            return Err(err);
        }

        held.checkout()?;
        info!(borrower = %self.name, title = held.title(), "Item borrowed");
        self.borrowed.push(Rc::clone(item));
        Ok(())
    }

    /// Give back `item`, which must be this very item (not merely one with the
    /// same title) borrowed earlier
    ///
    /// The item leaves the borrowed list even if the item itself refuses the
    /// return; that error is passed on.
    ///
    /// # Errors
    ///
    /// - `LibraryError::NotBorrowed` if this borrower does not hold `item`
    /// - `LibraryError::NotCheckedOut` if the item was returned behind the
    ///   borrower's back
    pub fn return_item(&mut self, item: &SharedItem) -> Result<(), LibraryError> {
        let Some(pos) = self.borrowed.iter().position(|held| Rc::ptr_eq(held, item)) else {
            let err = LibraryError::NotBorrowed {
                borrower: self.name.clone(),
                title: item.borrow().title().to_string(),
            };
            warn!("{err}");
            return Err(err);
        };

        let held = self.borrowed.remove(pos);
        let mut held = held.borrow_mut();
        held.return_item()?;
        info!(borrower = %self.name, title = held.title(), "Item returned");
        Ok(())
    }

    /// Human-readable listing of the borrowed items
    #[must_use]
    pub fn list_borrowed_items(&self) -> String {
        self.report().to_string()
    }

    /// Number of items currently held
    #[must_use]
    pub fn borrow_count(&self) -> usize {
        self.borrowed.len()
    }

    /// Whether this borrower holds `item`
    #[must_use]
    pub fn holds(&self, item: &SharedItem) -> bool {
        self.borrowed.iter().any(|held| Rc::ptr_eq(held, item))
    }

    /// Snapshot of the borrower and their items
    #[must_use]
    pub fn report(&self) -> BorrowReport {
        BorrowReport {
            borrower: self.name.clone(),
            max_items: self.max_items,
            items: self.borrowed.iter().map(|item| item.borrow().summary()).collect(),
        }
    }
}

/// Serializable view of a borrower's items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorrowReport {
    /// Borrower's display name
    pub borrower: String,
    /// Borrowing limit
    pub max_items: usize,
    /// Held items, in borrowing order
    pub items: Vec<ItemSummary>,
}

impl fmt::Display for BorrowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "{} has no borrowed items.", self.borrower);
        }

        write!(f, "{}'s borrowed items:", self.borrower)?;
        for item in &self.items {
            write!(f, "\n - {}", item.description)?;
        }
        Ok(())
    }
}
