use std::fmt;

use serde::{Deserialize, Serialize};

/// Events that can cause an item state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ItemEvent {
    /// Hand the item to a borrower
    Checkout,
    /// Bring the item back to the shelf
    Return,
}

impl fmt::Display for ItemEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkout => write!(f, "checkout"),
            Self::Return => write!(f, "return"),
        }
    }
}
