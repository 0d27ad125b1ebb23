//! State transition history tracking.
//!
//! Keeps an ordered, optionally bounded record of accepted actions and the
//! states they moved the machine between.

use super::action::ActionKind;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single accepted action.
///
/// # Example
///
/// ```rust
/// use vendomat::core::{ActionKind, StateTransition, VendingState};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: VendingState::NoCoin,
///     to: VendingState::HasCoin,
///     action: ActionKind::InsertCoin,
///     balance: 20,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed_state());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state before the action
    pub from: S,
    /// The state after the action
    pub to: S,
    /// The action that produced this transition
    pub action: ActionKind,
    /// Balance once the action completed
    pub balance: u64,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// False for mutating self-loops such as a second coin in `HAS_COIN`.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of state transitions.
///
/// When built with a limit, the oldest transitions are evicted once the
/// limit is reached.
///
/// # Example
///
/// ```rust
/// use vendomat::core::{ActionKind, StateHistory, StateTransition, VendingState};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(2);
/// for (from, to) in [
///     (VendingState::NoCoin, VendingState::HasCoin),
///     (VendingState::HasCoin, VendingState::Dispensing),
///     (VendingState::Dispensing, VendingState::NoCoin),
/// ] {
///     history.record(StateTransition {
///         from,
///         to,
///         action: ActionKind::Dispense,
///         balance: 0,
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(history.len(), 2);
/// let path = history.get_path();
/// assert_eq!(path, vec![&VendingState::HasCoin, &VendingState::Dispensing, &VendingState::NoCoin]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create a history that retains at most `limit` transitions.
    ///
    /// A limit of zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            transitions: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    /// Append a transition, evicting the oldest one if the limit is reached.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if let Some(limit) = self.limit {
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// oldest retained transition, then the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last retained transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Iterate over retained transitions, oldest first.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &StateTransition<S>> + '_ {
        self.transitions.iter()
    }

    /// The most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VendingState;

    fn transition(from: VendingState, to: VendingState) -> StateTransition<VendingState> {
        StateTransition {
            from,
            to,
            action: ActionKind::InsertCoin,
            balance: 0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<VendingState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_adds_transition() {
        let mut history = StateHistory::new();
        history.record(transition(VendingState::NoCoin, VendingState::HasCoin));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().to, VendingState::HasCoin);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(transition(VendingState::NoCoin, VendingState::HasCoin));
        history.record(transition(VendingState::HasCoin, VendingState::Dispensing));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &VendingState::NoCoin);
        assert_eq!(path[1], &VendingState::HasCoin);
        assert_eq!(path[2], &VendingState::Dispensing);
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut history = StateHistory::with_limit(2);
        history.record(transition(VendingState::NoCoin, VendingState::HasCoin));
        history.record(transition(VendingState::HasCoin, VendingState::Dispensing));
        history.record(transition(VendingState::Dispensing, VendingState::SoldOut));

        assert_eq!(history.len(), 2);
        let first = history.transitions().next().unwrap();
        assert_eq!(first.from, VendingState::HasCoin);
    }

    #[test]
    fn zero_limit_keeps_latest_transition() {
        let mut history = StateHistory::with_limit(0);
        history.record(transition(VendingState::NoCoin, VendingState::HasCoin));
        history.record(transition(VendingState::HasCoin, VendingState::NoCoin));

        assert_eq!(history.limit(), Some(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().to, VendingState::NoCoin);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::new();
        let start = Utc::now();

        history.record(StateTransition {
            timestamp: start,
            ..transition(VendingState::NoCoin, VendingState::HasCoin)
        });
        history.record(StateTransition {
            timestamp: start + chrono::Duration::milliseconds(10),
            ..transition(VendingState::HasCoin, VendingState::NoCoin)
        });

        assert_eq!(history.duration(), Some(Duration::from_millis(10)));
    }

    #[test]
    fn self_loop_does_not_change_state() {
        assert!(!transition(VendingState::HasCoin, VendingState::HasCoin).changed_state());
        assert!(transition(VendingState::HasCoin, VendingState::NoCoin).changed_state());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::with_limit(8);
        history.record(transition(VendingState::NoCoin, VendingState::HasCoin));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<VendingState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.limit(), Some(8));
    }
}
