//! Results of dispatching an action.

use super::action::ActionKind;
use super::state::VendingState;
use thiserror::Error;

/// What a single action did to the machine.
///
/// Every action is total: it never fails past this value. Only
/// `Transitioned` mutates the machine.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Action accepted; the machine now sits in the given state.
    /// May equal the previous state (a mutating self-loop).
    Transitioned(VendingState),

    /// Action meaningless in the current state; nothing changed.
    Ignored,

    /// Action refused because a precondition did not hold; nothing changed.
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Transitioned(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Reasons an action was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("cannot {action} while {state}")]
    InvalidAction {
        action: ActionKind,
        state: VendingState,
    },

    #[error("unknown item '{id}'")]
    UnknownItem { id: String },

    #[error("item is out of stock")]
    OutOfStock,

    #[error("insufficient funds: balance {balance}, price {price}")]
    InsufficientFunds { balance: u64, price: u64 },

    #[error("machine is sold out")]
    SoldOut,

    #[error("coin amount must be positive")]
    ZeroAmount,

    #[error("refill quantity must be positive")]
    ZeroQuantity,

    #[error("item price must be positive")]
    InvalidPrice,

    #[error("balance would overflow")]
    BalanceOverflow,

    #[error("stock would overflow")]
    StockOverflow,

    #[error("re-registering '{id}' would leave the machine without stock")]
    WouldSellOut { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transitioned_is_accepted() {
        assert!(Outcome::Transitioned(VendingState::NoCoin).is_accepted());
        assert!(!Outcome::Ignored.is_accepted());
        assert!(!Outcome::Rejected(Rejection::SoldOut).is_accepted());
    }

    #[test]
    fn rejection_is_exposed() {
        let outcome = Outcome::Rejected(Rejection::ZeroAmount);
        assert!(outcome.is_rejected());
        assert_eq!(outcome.rejection(), Some(&Rejection::ZeroAmount));
        assert_eq!(Outcome::Ignored.rejection(), None);
    }

    #[test]
    fn invalid_action_message_names_state() {
        let reason = Rejection::InvalidAction {
            action: ActionKind::Dispense,
            state: VendingState::NoCoin,
        };
        assert_eq!(reason.to_string(), "cannot dispense while NO_COIN");
    }
}
