//! The machine context: owns state and ledger, routes every action.

use super::invariant::{self, InvariantViolation};
use super::status::Status;
use super::transition::{self, Ledger};
use crate::catalog::{Catalog, Inventory, Item, ItemId, SingleSlot};
use crate::core::{Action, ActionKind, Outcome, StateHistory, StateTransition, VendingState};
use chrono::Utc;

/// A vending machine selling from catalog `C`.
///
/// Every operation runs to completion and returns an [`Outcome`]. The
/// machine holds no lock; owners sharing it across threads serialize
/// access themselves.
#[derive(Clone, Debug)]
pub struct VendingMachine<C: Catalog> {
    state: VendingState,
    ledger: Ledger<C>,
    history: StateHistory<VendingState>,
}

/// Machine selling one item at a fixed price.
pub type SingleItemMachine = VendingMachine<SingleSlot>;

/// Machine selling named items with individual prices.
pub type MultiItemMachine = VendingMachine<Inventory>;

impl<C: Catalog> VendingMachine<C> {
    /// Create a machine with unbounded history.
    ///
    /// Starts in `NO_COIN` when the catalog has stock, `SOLD_OUT` otherwise.
    pub fn new(catalog: C) -> Self {
        Self::with_history(catalog, StateHistory::new())
    }

    /// Create a machine recording into `history`.
    pub fn with_history(catalog: C, history: StateHistory<VendingState>) -> Self {
        let ledger = Ledger::new(catalog);
        Self {
            state: ledger.resting_state(),
            ledger,
            history,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> VendingState {
        self.state
    }

    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    pub fn catalog(&self) -> &C {
        self.ledger.catalog()
    }

    /// The item paid for and awaiting `dispense`.
    pub fn selection(&self) -> Option<&C::Key> {
        self.ledger.selection()
    }

    pub fn history(&self) -> &StateHistory<VendingState> {
        &self.history
    }

    /// Route `action` through the transition table and adopt the result.
    pub fn dispatch(&mut self, action: Action<C::Key>) -> Outcome {
        let from = self.state;
        let outcome = transition::step(from, &action, &mut self.ledger);
        self.apply(from, action.kind(), outcome)
    }

    pub fn insert_coin(&mut self, amount: u64) -> Outcome {
        self.dispatch(Action::InsertCoin(amount))
    }

    pub fn dispense(&mut self) -> Outcome {
        self.dispatch(Action::Dispense)
    }

    pub fn return_coin(&mut self) -> Outcome {
        self.dispatch(Action::ReturnCoin)
    }

    /// Read-only projection of the machine.
    pub fn status(&self) -> Status<C::Snapshot> {
        Status {
            state: self.state,
            balance: self.ledger.balance(),
            catalog: self.ledger.catalog().snapshot(),
        }
    }

    /// Check every machine invariant.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        invariant::check(self.state, &self.ledger)
    }

    fn apply(&mut self, from: VendingState, action: ActionKind, outcome: Outcome) -> Outcome {
        match &outcome {
            Outcome::Transitioned(to) => {
                let to = *to;
                self.history.record(StateTransition {
                    from,
                    to,
                    action,
                    balance: self.ledger.balance(),
                    timestamp: Utc::now(),
                });
                self.state = to;

                if from != to {
                    tracing::info!(%from, %to, %action, "state changed");
                } else {
                    tracing::debug!(state = %to, %action, balance = self.ledger.balance(), "action applied");
                }
            }
            Outcome::Ignored => {
                tracing::debug!(state = %from, %action, "action ignored");
            }
            Outcome::Rejected(reason) => {
                tracing::debug!(state = %from, %action, %reason, "action rejected");
            }
        }

        debug_assert!(
            self.verify().is_ok(),
            "invariant broken after {action} from {from}: {:?}",
            self.verify()
        );
        outcome
    }
}

impl VendingMachine<SingleSlot> {
    /// Create a single-item machine; the price must be positive.
    pub fn single(price: u64, stock: u32) -> Result<Self, crate::core::Rejection> {
        Ok(Self::new(SingleSlot::new(price, stock)?))
    }

    pub fn select_item(&mut self) -> Outcome {
        self.dispatch(Action::SelectItem(()))
    }

    pub fn refill(&mut self, quantity: u32) -> Outcome {
        self.dispatch(Action::Refill((), quantity))
    }
}

impl VendingMachine<Inventory> {
    pub fn select_item(&mut self, id: impl Into<ItemId>) -> Outcome {
        self.dispatch(Action::SelectItem(id.into()))
    }

    pub fn refill(&mut self, id: impl Into<ItemId>, quantity: u32) -> Outcome {
        self.dispatch(Action::Refill(id.into(), quantity))
    }

    /// Register or overwrite a catalog entry.
    ///
    /// Ignored while a purchase is in progress. Restores service from
    /// `SOLD_OUT` when the new entry carries stock.
    pub fn add_item(&mut self, id: impl Into<ItemId>, price: u64, quantity: u32) -> Outcome {
        let from = self.state;
        let outcome = transition::register(from, Item::new(id, price, quantity), &mut self.ledger);
        self.apply(from, ActionKind::AddItem, outcome)
    }
}

impl Default for VendingMachine<Inventory> {
    fn default() -> Self {
        Self::new(Inventory::new())
    }
}
