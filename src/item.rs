//! Checkout-able items and the shared record every item variant is built on.

use std::{cell::RefCell, fmt, rc::Rc};

use serde::Serialize;
use tracing::{info, warn};

use crate::{error::LibraryError, events::ItemEvent, item_state::ItemState};

/// Handle to an item that borrowers and the driver hold at the same time.
///
/// Two handles refer to the same item only if they point at the same allocation
/// (`Rc::ptr_eq`); equal titles do not make items interchangeable.
pub type SharedItem = Rc<RefCell<dyn LibraryItem>>;

/// Wrap a concrete item into a [`SharedItem`]
#[must_use]
pub fn share<I: LibraryItem + 'static>(item: I) -> SharedItem {
    Rc::new(RefCell::new(item))
}

/// Descriptive metadata plus availability, common to every item variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    /// Title as printed on the cover
    title: String,
    /// Author or creator
    author: String,
    /// Publication year
    year: i32,
    /// Current availability
    state: ItemState,
}

impl ItemRecord {
    /// Create a record for an item that starts on the shelf
    #[must_use]
    pub fn new(title: &str, author: &str, year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            state: ItemState::default(),
        }
    }

    /// Title as printed on the cover
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author or creator
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Publication year
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Current availability
    #[must_use]
    pub fn state(&self) -> ItemState {
        self.state
    }

    /// `"{title} by {author} ({year})"`
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} by {} ({})", self.title, self.author, self.year)
    }

    /// Apply a checkout or return event to this record
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::AlreadyCheckedOut` for a checkout of a held item
    /// and `LibraryError::NotCheckedOut` for a return of an available one. The
    /// state is left untouched in both cases.
    pub fn apply(&mut self, event: ItemEvent) -> Result<ItemState, LibraryError> {
        if let Some(next) = self.state.transition(event) {
            self.state = next;
            match next {
                ItemState::CheckedOut => info!("'{}' has been checked out.", self.title),
                ItemState::Available => info!("'{}' has been returned.", self.title),
            }
            return Ok(next);
        }

        let title = self.title.clone();
        let err = match event {
            ItemEvent::Checkout => LibraryError::AlreadyCheckedOut { title },
            ItemEvent::Return => LibraryError::NotCheckedOut { title },
        };
        warn!(%event, "{err}");
        Err(err)
    }
}

/// Serializable snapshot of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    /// Item title
    pub title: String,
    /// Full description, variant details included
    pub description: String,
    /// Availability when the snapshot was taken
    pub state: ItemState,
}

/// Capabilities shared by every kind of library item
pub trait LibraryItem: fmt::Debug {
    /// The record backing this item
    fn record(&self) -> &ItemRecord;

    /// Mark the item as held
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::AlreadyCheckedOut` if the item is already held.
    fn checkout(&mut self) -> Result<(), LibraryError>;

    /// Put the item back on the shelf
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotCheckedOut` if the item was not held.
    fn return_item(&mut self) -> Result<(), LibraryError>;

    /// Human-readable description of the item
    fn description(&self) -> String {
        self.record().description()
    }

    /// Title of the item
    fn title(&self) -> &str {
        self.record().title()
    }

    /// Whether the item is currently held
    fn is_checked_out(&self) -> bool {
        self.record().state().is_checked_out()
    }

    /// Serializable snapshot of the item
    fn summary(&self) -> ItemSummary {
        ItemSummary {
            title: self.title().to_string(),
            description: self.description(),
            state: self.record().state(),
        }
    }
}

/// A book: an item with a genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Shared item data
    record: ItemRecord,
    /// Genre shown in the description
    genre: String,
}

impl Book {
    /// Create a book that starts on the shelf
    #[must_use]
    pub fn new(title: &str, author: &str, year: i32, genre: &str) -> Self {
        Self { record: ItemRecord::new(title, author, year), genre: genre.to_string() }
    }

    /// Genre shown in the description
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }
}

impl LibraryItem for Book {
    fn record(&self) -> &ItemRecord {
        &self.record
    }

    fn checkout(&mut self) -> Result<(), LibraryError> {
        self.record.apply(ItemEvent::Checkout)?;
        Ok(())
    }

    fn return_item(&mut self) -> Result<(), LibraryError> {
        self.record.apply(ItemEvent::Return)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("{} - Genre: {}", self.record.description(), self.genre)
    }
}
