//! Core State trait and the four vending machine states.
//!
//! All state machine states implement [`State`], which provides pure
//! methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are plain values that
/// describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for export
///
/// # Example
///
/// ```rust
/// use vendomat::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "OPEN",
///             Self::Closed => "CLOSED",
///         }
///     }
///
///     fn is_idle(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is an idle state.
    ///
    /// Idle states are resting points between transactions: nothing is
    /// in flight and no customer credit may be held.
    ///
    /// Default implementation returns `false`.
    fn is_idle(&self) -> bool {
        false
    }
}

/// The four mutually exclusive operating states of a vending machine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VendingState {
    /// Waiting for a customer; balance is zero.
    NoCoin,
    /// Credit inserted, waiting for a selection.
    HasCoin,
    /// A selection has been paid for and awaits `dispense`.
    Dispensing,
    /// Aggregate stock is zero; only restocking leaves this state.
    SoldOut,
}

impl State for VendingState {
    fn name(&self) -> &str {
        match self {
            Self::NoCoin => "NO_COIN",
            Self::HasCoin => "HAS_COIN",
            Self::Dispensing => "DISPENSING",
            Self::SoldOut => "SOLD_OUT",
        }
    }

    fn is_idle(&self) -> bool {
        matches!(self, Self::NoCoin | Self::SoldOut)
    }
}

impl VendingState {
    /// Whether an in-progress purchase occupies the machine.
    ///
    /// Restocking is ignored while this holds.
    pub fn in_transaction(&self) -> bool {
        matches!(self, Self::HasCoin | Self::Dispensing)
    }
}

impl fmt::Display for VendingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(VendingState::NoCoin.name(), "NO_COIN");
        assert_eq!(VendingState::HasCoin.name(), "HAS_COIN");
        assert_eq!(VendingState::Dispensing.name(), "DISPENSING");
        assert_eq!(VendingState::SoldOut.name(), "SOLD_OUT");
    }

    #[test]
    fn is_idle_identifies_resting_states() {
        assert!(VendingState::NoCoin.is_idle());
        assert!(!VendingState::HasCoin.is_idle());
        assert!(!VendingState::Dispensing.is_idle());
        assert!(VendingState::SoldOut.is_idle());
    }

    #[test]
    fn in_transaction_is_the_complement_of_idle() {
        for state in [
            VendingState::NoCoin,
            VendingState::HasCoin,
            VendingState::Dispensing,
            VendingState::SoldOut,
        ] {
            assert_ne!(state.is_idle(), state.in_transaction());
        }
    }

    #[test]
    fn display_uses_state_name() {
        assert_eq!(VendingState::SoldOut.to_string(), "SOLD_OUT");
    }

    #[test]
    fn state_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&VendingState::HasCoin).unwrap();
        assert_eq!(json, "\"HAS_COIN\"");
        let deserialized: VendingState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, VendingState::HasCoin);
    }
}
