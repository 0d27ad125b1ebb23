//! The vending machine engine.
//!
//! - **Transition table**: one pure function over every (state, action) pair
//! - **Machine**: owns state, ledger and history; routes every action
//! - **Status**: read-only projection for display
//! - **Invariants**: consistency checks asserted after each action

mod invariant;
mod machine;
mod status;
mod transition;

pub use invariant::InvariantViolation;
pub use machine::{MultiItemMachine, SingleItemMachine, VendingMachine};
pub use status::Status;
pub use transition::{register, step, Ledger};
