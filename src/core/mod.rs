//! Core state machine types.
//!
//! This module contains the vocabulary shared by every machine variant:
//! - States via the `State` trait and the `VendingState` enum
//! - Actions and their outcomes
//! - Bounded transition history
//!
//! Nothing in this module mutates a machine; the transition table lives in
//! [`crate::engine`].

mod action;
mod history;
mod outcome;
mod state;

pub use action::{Action, ActionKind};
pub use history::{StateHistory, StateTransition};
pub use outcome::{Outcome, Rejection};
pub use state::{State, VendingState};
