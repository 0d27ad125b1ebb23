//! Actions accepted by a vending machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer or administrative action routed through the transition table.
///
/// `K` is the catalog key used to name an item: [`ItemId`](crate::catalog::ItemId)
/// for a multi-item inventory, `()` for a single-item slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action<K> {
    /// Add credit to the balance.
    InsertCoin(u64),
    /// Choose the item to buy.
    SelectItem(K),
    /// Release the selected item.
    Dispense,
    /// Refund the whole balance.
    ReturnCoin,
    /// Add stock to an existing item.
    Refill(K, u32),
}

impl<K> Action<K> {
    /// The key-free discriminant of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::InsertCoin(_) => ActionKind::InsertCoin,
            Self::SelectItem(_) => ActionKind::SelectItem,
            Self::Dispense => ActionKind::Dispense,
            Self::ReturnCoin => ActionKind::ReturnCoin,
            Self::Refill(..) => ActionKind::Refill,
        }
    }
}

/// Action discriminant recorded in history and log events.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    InsertCoin,
    SelectItem,
    Dispense,
    ReturnCoin,
    Refill,
    AddItem,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsertCoin => "insert_coin",
            Self::SelectItem => "select_item",
            Self::Dispense => "dispense",
            Self::ReturnCoin => "return_coin",
            Self::Refill => "refill",
            Self::AddItem => "add_item",
        }
    }

    /// Administrative actions restock the machine rather than serve a customer.
    pub fn is_administrative(&self) -> bool {
        matches!(self, Self::Refill | Self::AddItem)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_drops_payload() {
        assert_eq!(Action::<()>::InsertCoin(5).kind(), ActionKind::InsertCoin);
        assert_eq!(Action::SelectItem(()).kind(), ActionKind::SelectItem);
        assert_eq!(Action::<()>::Dispense.kind(), ActionKind::Dispense);
        assert_eq!(Action::<()>::ReturnCoin.kind(), ActionKind::ReturnCoin);
        assert_eq!(Action::Refill((), 3).kind(), ActionKind::Refill);
    }

    #[test]
    fn only_restocking_is_administrative() {
        assert!(ActionKind::Refill.is_administrative());
        assert!(ActionKind::AddItem.is_administrative());
        assert!(!ActionKind::InsertCoin.is_administrative());
        assert!(!ActionKind::Dispense.is_administrative());
    }

    #[test]
    fn display_matches_serialized_name() {
        let json = serde_json::to_string(&ActionKind::ReturnCoin).unwrap();
        assert_eq!(json, format!("\"{}\"", ActionKind::ReturnCoin));
    }
}
