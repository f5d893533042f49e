use serde::{Deserialize, Serialize};

use crate::events::ItemEvent;

/// Represents the possible states of a library item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ItemState {
    /// Item is on the shelf
    #[default]
    Available,
    /// Item is held by a borrower
    CheckedOut,
}

impl ItemState {
    /// Look up the state reached by applying `event`, if the event is valid here
    #[must_use]
    pub fn transition(self, event: ItemEvent) -> Option<Self> {
        match (self, event) {
            (Self::Available, ItemEvent::Checkout) => Some(Self::CheckedOut),
            (Self::CheckedOut, ItemEvent::Return) => Some(Self::Available),
            _ => None,
        }
    }

    /// Whether the item is currently held
    #[must_use]
    pub fn is_checked_out(self) -> bool {
        matches!(self, Self::CheckedOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_paired_events_are_valid() {
        assert_eq!(ItemState::Available.transition(ItemEvent::Checkout), Some(ItemState::CheckedOut));
        assert_eq!(ItemState::CheckedOut.transition(ItemEvent::Return), Some(ItemState::Available));
        assert_eq!(ItemState::Available.transition(ItemEvent::Return), None);
        assert_eq!(ItemState::CheckedOut.transition(ItemEvent::Checkout), None);
    }

    #[test]
    fn test_default_is_available() {
        assert!(!ItemState::default().is_checked_out());
    }
}
