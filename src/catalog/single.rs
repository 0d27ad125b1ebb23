//! Single-item catalog: one price, one stock counter.

use super::{Catalog, Settlement};
use crate::core::Rejection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A machine slot selling a single item.
///
/// # Example
///
/// ```rust
/// use vendomat::catalog::{Catalog, SingleSlot};
///
/// let slot = SingleSlot::new(20, 2).unwrap();
/// assert_eq!(slot.total_stock(), 2);
/// assert_eq!(slot.quote(&()), Ok(20));
/// assert!(SingleSlot::new(0, 2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleSlot {
    price: u64,
    stock: u32,
}

impl SingleSlot {
    /// Create a slot; the price must be positive.
    pub fn new(price: u64, stock: u32) -> Result<Self, Rejection> {
        if price == 0 {
            return Err(Rejection::InvalidPrice);
        }
        Ok(Self { price, stock })
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }
}

impl Catalog for SingleSlot {
    type Key = ();
    type Snapshot = SingleSlot;

    const SETTLEMENT: Settlement = Settlement::OnSelect;

    fn total_stock(&self) -> u64 {
        u64::from(self.stock)
    }

    fn quote(&self, _key: &()) -> Result<u64, Rejection> {
        if self.stock == 0 {
            return Err(Rejection::OutOfStock);
        }
        Ok(self.price)
    }

    fn take_one(&mut self, _key: &()) -> Result<u32, Rejection> {
        self.stock = self.stock.checked_sub(1).ok_or(Rejection::OutOfStock)?;
        Ok(self.stock)
    }

    fn restock(&mut self, _key: &(), quantity: u32) -> Result<(), Rejection> {
        if quantity == 0 {
            return Err(Rejection::ZeroQuantity);
        }
        self.stock = self
            .stock
            .checked_add(quantity)
            .ok_or(Rejection::StockOverflow)?;
        Ok(())
    }

    fn label<'a>(&'a self, _key: &'a ()) -> &'a str {
        "item"
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.clone()
    }
}

impl fmt::Display for SingleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Items: {} | Price: {}", self.stock, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_requires_stock() {
        let slot = SingleSlot::new(20, 0).unwrap();
        assert_eq!(slot.quote(&()), Err(Rejection::OutOfStock));
        assert!(slot.is_sold_out());
    }

    #[test]
    fn take_one_decrements_until_empty() {
        let mut slot = SingleSlot::new(20, 1).unwrap();
        assert_eq!(slot.take_one(&()), Ok(0));
        assert_eq!(slot.take_one(&()), Err(Rejection::OutOfStock));
        assert_eq!(slot.stock(), 0);
    }

    #[test]
    fn restock_rejects_zero_and_overflow() {
        let mut slot = SingleSlot::new(20, u32::MAX - 1).unwrap();
        assert_eq!(slot.restock(&(), 0), Err(Rejection::ZeroQuantity));
        assert_eq!(slot.restock(&(), 2), Err(Rejection::StockOverflow));
        assert_eq!(slot.stock(), u32::MAX - 1);
        assert_eq!(slot.restock(&(), 1), Ok(()));
        assert_eq!(slot.stock(), u32::MAX);
    }

    #[test]
    fn settles_on_select() {
        assert_eq!(SingleSlot::SETTLEMENT, Settlement::OnSelect);
    }

    #[test]
    fn display_shows_stock_and_price() {
        let slot = SingleSlot::new(20, 2).unwrap();
        assert_eq!(slot.to_string(), "Items: 2 | Price: 20");
    }
}
