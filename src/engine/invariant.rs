//! Consistency checks between state, balance, stock and selection.

use super::transition::Ledger;
use crate::catalog::Catalog;
use crate::core::{State, VendingState};
use thiserror::Error;

/// A broken machine invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("balance {balance} held while {state}")]
    CreditWhileIdle { state: VendingState, balance: u64 },

    #[error("state {state} disagrees with aggregate stock {stock}")]
    StockMismatch { state: VendingState, stock: u64 },

    #[error("selection {} while {state}", presence(.selected))]
    SelectionMismatch { state: VendingState, selected: bool },
}

fn presence(selected: &bool) -> &'static str {
    if *selected {
        "present"
    } else {
        "missing"
    }
}

/// Check every invariant, reporting the first that fails.
pub fn check<C: Catalog>(state: VendingState, ledger: &Ledger<C>) -> Result<(), InvariantViolation> {
    if state.is_idle() && ledger.balance != 0 {
        return Err(InvariantViolation::CreditWhileIdle {
            state,
            balance: ledger.balance,
        });
    }

    let stock = ledger.catalog.total_stock();
    if (state == VendingState::SoldOut) != (stock == 0) {
        return Err(InvariantViolation::StockMismatch { state, stock });
    }

    let selected = ledger.selection.is_some();
    if selected != (state == VendingState::Dispensing) {
        return Err(InvariantViolation::SelectionMismatch { state, selected });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SingleSlot;

    fn ledger(stock: u32) -> Ledger<SingleSlot> {
        Ledger::new(SingleSlot::new(20, stock).unwrap())
    }

    #[test]
    fn consistent_machine_passes() {
        assert_eq!(check(VendingState::NoCoin, &ledger(1)), Ok(()));
        assert_eq!(check(VendingState::SoldOut, &ledger(0)), Ok(()));
    }

    #[test]
    fn idle_credit_is_reported() {
        let mut ledger = ledger(1);
        ledger.balance = 5;

        assert_eq!(
            check(VendingState::NoCoin, &ledger),
            Err(InvariantViolation::CreditWhileIdle {
                state: VendingState::NoCoin,
                balance: 5
            })
        );
        assert_eq!(check(VendingState::HasCoin, &ledger), Ok(()));
    }

    #[test]
    fn sold_out_must_match_stock() {
        assert!(matches!(
            check(VendingState::SoldOut, &ledger(2)),
            Err(InvariantViolation::StockMismatch { stock: 2, .. })
        ));
        assert!(matches!(
            check(VendingState::NoCoin, &ledger(0)),
            Err(InvariantViolation::StockMismatch { stock: 0, .. })
        ));
    }

    #[test]
    fn selection_only_while_dispensing() {
        let mut ledger = ledger(1);
        assert!(matches!(
            check(VendingState::Dispensing, &ledger),
            Err(InvariantViolation::SelectionMismatch { selected: false, .. })
        ));

        ledger.selection = Some(());
        assert_eq!(check(VendingState::Dispensing, &ledger), Ok(()));
        assert_eq!(
            check(VendingState::HasCoin, &ledger),
            Err(InvariantViolation::SelectionMismatch {
                state: VendingState::HasCoin,
                selected: true
            })
        );
    }

    #[test]
    fn violation_messages_are_readable() {
        let violation = InvariantViolation::SelectionMismatch {
            state: VendingState::Dispensing,
            selected: false,
        };
        assert_eq!(violation.to_string(), "selection missing while DISPENSING");
    }
}
