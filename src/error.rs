use thiserror::Error;

/// Notices raised by library and vehicle operations.
///
/// The `Display` text of each variant is the message shown to the person
/// running the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// The item is already held by someone
    #[error("'{title}' is already checked out.")]
    AlreadyCheckedOut {
        /// Title of the held item
        title: String,
    },
    /// A return was attempted on an item sitting on the shelf
    #[error("'{title}' wasn't checked out.")]
    NotCheckedOut {
        /// Title of the available item
        title: String,
    },
    /// The borrower holds as many items as allowed
    #[error("{borrower} has reached the borrowing limit.")]
    BorrowLimitReached {
        /// Borrower's display name
        borrower: String,
        /// Limit that was hit
        max_items: usize,
    },
    /// The borrower tried to return something they never borrowed
    #[error("{borrower} did not borrow {title}.")]
    NotBorrowed {
        /// Borrower's display name
        borrower: String,
        /// Title of the item they tried to return
        title: String,
    },
    /// A speed below zero was rejected
    #[error("Speed can't be negative (got {kph} km/h).")]
    NegativeSpeed {
        /// Rejected value
        kph: i32,
    },
}

/// Errors produced while loading or using database settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// User and/or password were absent or empty
    #[error("Missing credentials ({}). Please check your .env file.", .missing.join(", "))]
    MissingCredentials {
        /// Keys that were absent or empty
        missing: Vec<&'static str>,
    },
    /// The env file exists but could not be read or parsed
    #[error("Failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}
