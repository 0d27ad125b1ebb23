//! Multi-item catalog keyed by item id.

use super::{Catalog, Settlement};
use crate::core::Rejection;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub price: u64,
    pub quantity: u32,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, price: u64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            price,
            quantity,
        }
    }
}

/// Items for sale, ordered by id.
///
/// # Example
///
/// ```rust
/// use vendomat::catalog::{Catalog, Inventory, Item, ItemId};
///
/// let mut inventory = Inventory::new();
/// inventory.insert(Item::new("Water", 20, 1));
/// inventory.insert(Item::new("Chips", 15, 2));
///
/// assert_eq!(inventory.total_stock(), 3);
/// assert_eq!(inventory.quote(&ItemId::from("Chips")), Ok(15));
/// assert!(inventory.quote(&ItemId::from("Coke")).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<ItemId, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry, returning the one it replaced.
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.id.clone(), item)
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Aggregate stock of every item except `id`.
    pub fn stock_excluding(&self, id: &str) -> u64 {
        self.items
            .values()
            .filter(|item| item.id.as_str() != id)
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    fn entry_mut(&mut self, id: &ItemId) -> Result<&mut Item, Rejection> {
        self.items
            .get_mut(id.as_str())
            .ok_or_else(|| Rejection::UnknownItem { id: id.to_string() })
    }
}

impl Catalog for Inventory {
    type Key = ItemId;
    type Snapshot = Inventory;

    const SETTLEMENT: Settlement = Settlement::OnDispense;

    fn total_stock(&self) -> u64 {
        self.items.values().map(|item| u64::from(item.quantity)).sum()
    }

    fn quote(&self, key: &ItemId) -> Result<u64, Rejection> {
        let item = self
            .items
            .get(key.as_str())
            .ok_or_else(|| Rejection::UnknownItem { id: key.to_string() })?;
        if item.quantity == 0 {
            return Err(Rejection::OutOfStock);
        }
        Ok(item.price)
    }

    fn take_one(&mut self, key: &ItemId) -> Result<u32, Rejection> {
        let item = self.entry_mut(key)?;
        item.quantity = item.quantity.checked_sub(1).ok_or(Rejection::OutOfStock)?;
        Ok(item.quantity)
    }

    fn restock(&mut self, key: &ItemId, quantity: u32) -> Result<(), Rejection> {
        let item = self.entry_mut(key)?;
        if quantity == 0 {
            return Err(Rejection::ZeroQuantity);
        }
        item.quantity = item
            .quantity
            .checked_add(quantity)
            .ok_or(Rejection::StockOverflow)?;
        Ok(())
    }

    fn label<'a>(&'a self, key: &'a ItemId) -> &'a str {
        key.as_str()
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.clone()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in self.items.values() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(
                f,
                "  {} Qty: {} Price: {}",
                item.id, item.quantity, item.price
            )?;
        }
        Ok(())
    }
}
