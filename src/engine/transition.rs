//! The transition table.
//!
//! [`step`] is the only place a customer action mutates a machine. Every
//! (state, action) pair has an explicit arm, so adding a state or an action
//! fails to compile until the table is completed.

use crate::catalog::{Catalog, Inventory, Item, Settlement};
use crate::core::{Action, ActionKind, Outcome, Rejection, VendingState};

/// Balance, stock and selection owned by a machine.
///
/// The transition table receives it mutably together with the current
/// state and decides what, if anything, changes.
#[derive(Clone, Debug)]
pub struct Ledger<C: Catalog> {
    pub(crate) balance: u64,
    pub(crate) catalog: C,
    pub(crate) selection: Option<C::Key>,
}

impl<C: Catalog> Ledger<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            balance: 0,
            catalog,
            selection: None,
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn selection(&self) -> Option<&C::Key> {
        self.selection.as_ref()
    }

    /// The idle state matching current stock.
    pub fn resting_state(&self) -> VendingState {
        if self.catalog.is_sold_out() {
            VendingState::SoldOut
        } else {
            VendingState::NoCoin
        }
    }
}

/// Apply `action` in `state`, returning the next state.
///
/// Rejected and ignored actions leave `ledger` untouched.
pub fn step<C: Catalog>(
    state: VendingState,
    action: &Action<C::Key>,
    ledger: &mut Ledger<C>,
) -> Outcome {
    use crate::core::VendingState::{Dispensing, HasCoin, NoCoin, SoldOut};

    match (state, action) {
        (NoCoin, Action::InsertCoin(amount)) => credit(ledger, *amount, HasCoin),
        (NoCoin, Action::SelectItem(_) | Action::Dispense | Action::ReturnCoin) => {
            invalid(action.kind(), state)
        }
        (NoCoin, Action::Refill(key, quantity)) => restock(ledger, key, *quantity),

        (HasCoin, Action::InsertCoin(amount)) => credit(ledger, *amount, HasCoin),
        (HasCoin, Action::SelectItem(key)) => select(ledger, key),
        (HasCoin, Action::Dispense) => Outcome::Ignored,
        (HasCoin, Action::ReturnCoin) => {
            ledger.balance = 0;
            Outcome::Transitioned(NoCoin)
        }
        (HasCoin, Action::Refill(..)) => Outcome::Ignored,

        (Dispensing, Action::Dispense) => dispense(ledger),
        (
            Dispensing,
            Action::InsertCoin(_) | Action::SelectItem(_) | Action::ReturnCoin | Action::Refill(..),
        ) => Outcome::Ignored,

        (SoldOut, Action::InsertCoin(_) | Action::SelectItem(_)) => {
            Outcome::Rejected(Rejection::SoldOut)
        }
        (SoldOut, Action::Dispense | Action::ReturnCoin) => Outcome::Ignored,
        (SoldOut, Action::Refill(key, quantity)) => restock(ledger, key, *quantity),
    }
}

/// Register or overwrite an inventory entry.
///
/// Restocking never interrupts a purchase and never moves an idle machine
/// into `SOLD_OUT`.
pub fn register(state: VendingState, item: Item, ledger: &mut Ledger<Inventory>) -> Outcome {
    if state.in_transaction() {
        return Outcome::Ignored;
    }
    if item.price == 0 {
        return Outcome::Rejected(Rejection::InvalidPrice);
    }
    if state == VendingState::NoCoin
        && item.quantity == 0
        && ledger.catalog.stock_excluding(item.id.as_str()) == 0
    {
        return Outcome::Rejected(Rejection::WouldSellOut {
            id: item.id.to_string(),
        });
    }

    ledger.catalog.insert(item);
    Outcome::Transitioned(ledger.resting_state())
}

fn invalid(action: ActionKind, state: VendingState) -> Outcome {
    Outcome::Rejected(Rejection::InvalidAction { action, state })
}

fn credit<C: Catalog>(ledger: &mut Ledger<C>, amount: u64, next: VendingState) -> Outcome {
    if amount == 0 {
        return Outcome::Rejected(Rejection::ZeroAmount);
    }
    match ledger.balance.checked_add(amount) {
        Some(balance) => {
            ledger.balance = balance;
            Outcome::Transitioned(next)
        }
        None => Outcome::Rejected(Rejection::BalanceOverflow),
    }
}

fn select<C: Catalog>(ledger: &mut Ledger<C>, key: &C::Key) -> Outcome {
    let price = match ledger.catalog.quote(key) {
        Ok(price) => price,
        Err(reason) => return Outcome::Rejected(reason),
    };
    if ledger.balance < price {
        return Outcome::Rejected(Rejection::InsufficientFunds {
            balance: ledger.balance,
            price,
        });
    }

    match C::SETTLEMENT {
        Settlement::OnSelect => ledger.balance = 0,
        Settlement::OnDispense => {}
    }
    ledger.selection = Some(key.clone());
    Outcome::Transitioned(VendingState::Dispensing)
}

fn dispense<C: Catalog>(ledger: &mut Ledger<C>) -> Outcome {
    // Dispensing always carries a selection; refuse rather than guess.
    let Some(key) = ledger.selection.clone() else {
        return invalid(ActionKind::Dispense, VendingState::Dispensing);
    };
    let remaining = match ledger.catalog.take_one(&key) {
        Ok(remaining) => remaining,
        Err(reason) => return Outcome::Rejected(reason),
    };

    tracing::info!(
        item = ledger.catalog.label(&key),
        remaining,
        paid = ledger.balance,
        "item dispensed"
    );

    ledger.balance = 0;
    ledger.selection = None;
    Outcome::Transitioned(ledger.resting_state())
}

fn restock<C: Catalog>(ledger: &mut Ledger<C>, key: &C::Key, quantity: u32) -> Outcome {
    match ledger.catalog.restock(key, quantity) {
        Ok(()) => Outcome::Transitioned(ledger.resting_state()),
        Err(reason) => Outcome::Rejected(reason),
    }
}
