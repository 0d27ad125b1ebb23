//! Read-only machine status for display drivers.

use crate::core::VendingState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a machine at one point in time.
///
/// `V` is the catalog projection: a [`SingleSlot`](crate::catalog::SingleSlot)
/// for single-item machines, an [`Inventory`](crate::catalog::Inventory) for
/// multi-item machines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Status<V> {
    pub state: VendingState,
    pub balance: u64,
    pub catalog: V,
}

impl<V: fmt::Display> fmt::Display for Status<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State: {} | Balance: {}", self.state, self.balance)?;
        let catalog = self.catalog.to_string();
        if !catalog.is_empty() {
            write!(f, "\n{catalog}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Inventory, Item, SingleSlot};

    #[test]
    fn single_slot_status_renders_two_lines() {
        let status = Status {
            state: VendingState::HasCoin,
            balance: 10,
            catalog: SingleSlot::new(20, 2).unwrap(),
        };
        assert_eq!(
            status.to_string(),
            "State: HAS_COIN | Balance: 10\nItems: 2 | Price: 20"
        );
    }

    #[test]
    fn empty_inventory_renders_header_only() {
        let status = Status {
            state: VendingState::SoldOut,
            balance: 0,
            catalog: Inventory::new(),
        };
        assert_eq!(status.to_string(), "State: SOLD_OUT | Balance: 0");
    }

    #[test]
    fn status_exports_as_json() {
        let mut inventory = Inventory::new();
        inventory.insert(Item::new("Water", 20, 1));
        let status = Status {
            state: VendingState::NoCoin,
            balance: 0,
            catalog: inventory,
        };

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["state"], "NO_COIN");
        assert_eq!(json["catalog"]["Water"]["quantity"], 1);
    }
}
