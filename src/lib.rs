//! Encapsulation and polymorphism shown through a small library checkout
//! simulation, a car example and an env-file configuration demo.
//!
//! Items change state only through their own checkout/return operations,
//! borrowers hold a bounded set of shared item handles, and anything that used
//! to be process-wide state lives in an explicit [`Registry`].

pub mod borrower;
pub mod config;
pub mod error;
pub mod events;
pub mod item;
pub mod item_state;
pub mod librarian;
pub mod registry;
pub mod vehicle;

pub use borrower::{BorrowReport, Borrower};
pub use config::{ConnectionSummary, DatabaseConfig};
pub use error::{ConfigError, LibraryError};
pub use events::ItemEvent;
pub use item::{Book, ItemRecord, LibraryItem, SharedItem, share};
pub use item_state::ItemState;
pub use librarian::Librarian;
pub use registry::Registry;
pub use vehicle::{Car, Speed, Transmission, Vehicle, convert_speed_to_mph};
