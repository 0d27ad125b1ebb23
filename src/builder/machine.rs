//! Builders for constructing vending machines.

use super::error::BuildError;
use super::validate;
use crate::catalog::{Inventory, Item, ItemId, SingleSlot};
use crate::core::{StateHistory, VendingState};
use crate::engine::{MultiItemMachine, SingleItemMachine, VendingMachine};

fn history(limit: Option<usize>) -> StateHistory<VendingState> {
    match limit {
        Some(limit) => StateHistory::with_limit(limit),
        None => StateHistory::new(),
    }
}

/// Builder for single-item machines with a fluent API.
///
/// # Example
///
/// ```
/// use vendomat::builder::SingleItemBuilder;
/// use vendomat::core::VendingState;
///
/// let machine = SingleItemBuilder::new()
///     .price(20)
///     .stock(2)
///     .history_limit(64)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), VendingState::NoCoin);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SingleItemBuilder {
    price: Option<u64>,
    stock: u32,
    history_limit: Option<usize>,
}

impl SingleItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item price (required, positive).
    pub fn price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the initial stock (defaults to zero, i.e. `SOLD_OUT`).
    pub fn stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Bound the transition history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the machine.
    /// Returns an error listing every invalid setting.
    pub fn build(self) -> Result<SingleItemMachine, BuildError> {
        let price = self.price.ok_or(BuildError::MissingPrice)?;
        validate::into_result(validate::single_item(price, self.history_limit))?;

        let slot = SingleSlot::new(price, self.stock)?;
        Ok(VendingMachine::with_history(slot, history(self.history_limit)))
    }
}

/// Builder for multi-item machines.
///
/// # Example
///
/// ```
/// use vendomat::builder::CatalogBuilder;
/// use vendomat::core::VendingState;
///
/// let machine = CatalogBuilder::new()
///     .item("Water", 20, 1)
///     .item("Coke", 30, 1)
///     .item("Chips", 15, 2)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), VendingState::NoCoin);
/// assert_eq!(machine.catalog().len(), 3);
///
/// let empty = CatalogBuilder::new().build().unwrap();
/// assert_eq!(empty.state(), VendingState::SoldOut);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    items: Vec<Item>,
    history_limit: Option<usize>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one catalog entry.
    pub fn item(mut self, id: impl Into<ItemId>, price: u64, quantity: u32) -> Self {
        self.items.push(Item::new(id, price, quantity));
        self
    }

    /// Add multiple entries at once.
    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    /// Bound the transition history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the machine.
    /// Duplicate ids are a configuration error here, unlike `add_item`.
    pub fn build(self) -> Result<MultiItemMachine, BuildError> {
        validate::into_result(validate::catalog(&self.items, self.history_limit))?;

        let mut inventory = Inventory::new();
        for item in self.items {
            inventory.insert(item);
        }
        Ok(VendingMachine::with_history(
            inventory,
            history(self.history_limit),
        ))
    }
}
