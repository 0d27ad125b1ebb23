//! What a machine sells.
//!
//! The transition table is written once against the [`Catalog`] trait. Two
//! catalogs are provided:
//!
//! - [`SingleSlot`]: one item with a fixed price and a stock counter
//! - [`Inventory`]: named items, each with its own price and quantity

mod inventory;
mod single;

pub use inventory::{Inventory, Item, ItemId};
pub use single::SingleSlot;

use crate::core::Rejection;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// When the price of a selection is taken out of the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The balance is cleared as soon as the selection is accepted.
    OnSelect,

    /// The balance is held through `DISPENSING` and cleared by `dispense`.
    OnDispense,
}

/// Stock and pricing behind a vending machine.
///
/// Implementations only answer questions and apply single mutations; the
/// decision of *whether* to mutate belongs to the transition table.
pub trait Catalog {
    /// Names one item for selection and refill.
    type Key: Clone + Debug + PartialEq + Send + Sync;

    /// Read-only projection returned by `status()`.
    type Snapshot: Clone + Debug + Display + Serialize;

    const SETTLEMENT: Settlement;

    /// Aggregate stock across every item.
    fn total_stock(&self) -> u64;

    /// Price of `key` if it is known and in stock.
    fn quote(&self, key: &Self::Key) -> Result<u64, Rejection>;

    /// Remove one unit of `key`, returning the quantity left for that item.
    fn take_one(&mut self, key: &Self::Key) -> Result<u32, Rejection>;

    /// Add `quantity` units of an existing item.
    fn restock(&mut self, key: &Self::Key, quantity: u32) -> Result<(), Rejection>;

    /// Human-readable item name for log events.
    fn label<'a>(&'a self, key: &'a Self::Key) -> &'a str;

    fn snapshot(&self) -> Self::Snapshot;

    fn is_sold_out(&self) -> bool {
        self.total_stock() == 0
    }
}
