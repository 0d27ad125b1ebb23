//! Vendomat: a state machine engine for coin-operated vending machines
//!
//! A machine is always in one of four states (`NO_COIN`, `HAS_COIN`,
//! `DISPENSING`, `SOLD_OUT`). Every action is routed through a single
//! transition table that covers each (state, action) pair explicitly, so
//! balance and stock stay consistent no matter what order actions arrive in.
//!
//! # Core Concepts
//!
//! - **States & Actions**: `VendingState`, `Action` and the `Outcome` of each action
//! - **Catalogs**: what is for sale, either a `SingleSlot` or an `Inventory`
//! - **Engine**: the transition table and the `VendingMachine` that owns it
//! - **Builders**: validated construction from code or configuration
//!
//! # Example
//!
//! ```rust
//! use vendomat::builder::CatalogBuilder;
//! use vendomat::core::{Outcome, Rejection, VendingState};
//!
//! let mut machine = CatalogBuilder::new()
//!     .item("Water", 20, 1)
//!     .item("Chips", 15, 2)
//!     .build()
//!     .unwrap();
//!
//! machine.insert_coin(10);
//! assert!(matches!(
//!     machine.select_item("Water"),
//!     Outcome::Rejected(Rejection::InsufficientFunds { .. })
//! ));
//!
//! machine.insert_coin(10);
//! machine.select_item("Water");
//! machine.dispense();
//!
//! assert_eq!(machine.state(), VendingState::NoCoin);
//! assert_eq!(machine.catalog().get("Water").unwrap().quantity, 0);
//! println!("{}", machine.status());
//! ```

pub mod builder;
pub mod catalog;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use catalog::{Catalog, Inventory, Item, ItemId, SingleSlot};
pub use crate::core::{Action, Outcome, Rejection, State, VendingState};
pub use engine::{MultiItemMachine, SingleItemMachine, Status, VendingMachine};
