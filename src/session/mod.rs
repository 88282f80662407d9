//! Imperative shell around the pure transition core.
//!
//! The engine itself never performs I/O; a [`Session`] owns the current
//! state, applies [`transition`] for each dispatched action, and then
//! invokes every registered observer with the new state so the
//! presentation layer can redraw. Dispatch is synchronous and
//! single-threaded: one action completes before the next is accepted.

use crate::core::{transition, Action, CalculatorState};

/// Callback invoked with the new state after every transition.
pub type Observer = Box<dyn Fn(&CalculatorState) + Send>;

/// A running calculator session.
///
/// State lives only for the lifetime of the session; there is no
/// persistence layer.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Action, Operator};
/// use abacus::session::Session;
///
/// let mut session = Session::new();
/// session.dispatch(Action::EnterDigit(8));
/// session.dispatch(Action::SetOperator(Operator::Subtract));
/// session.dispatch(Action::EnterDigit(3));
/// session.dispatch(Action::Calculate);
///
/// assert_eq!(session.state().first_operand, "5");
/// ```
pub struct Session {
    state: CalculatorState,
    observers: Vec<Observer>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Start a session in the all-default state.
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
            observers: Vec::new(),
        }
    }

    /// The current state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Register an observer to be notified after each transition.
    ///
    /// Observers fire in registration order, after the state has been
    /// replaced. They receive every dispatch, including no-op
    /// transitions.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&CalculatorState) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Apply one action, notify observers, and return the new state.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        self.state = transition(&self.state, action);
        for observer in &self.observers {
            observer(&self.state);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;
    use std::sync::{Arc, Mutex};

    #[test]
    fn dispatch_advances_the_state() {
        let mut session = Session::new();
        session.dispatch(Action::EnterDigit(4));
        session.dispatch(Action::EnterDigit(2));
        assert_eq!(session.state().first_operand, "42");
    }

    #[test]
    fn dispatch_returns_the_new_state() {
        let mut session = Session::new();
        let state = session.dispatch(Action::EnterDigit(9));
        assert_eq!(state.first_operand, "9");
    }

    #[test]
    fn observers_see_every_transition_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut session = Session::new();
        session.subscribe(move |state: &CalculatorState| {
            sink.lock().unwrap().push(state.display_text());
        });

        session.dispatch(Action::EnterDigit(1));
        session.dispatch(Action::SetOperator(Operator::Add));
        session.dispatch(Action::EnterDigit(2));
        session.dispatch(Action::Calculate);

        assert_eq!(
            *seen.lock().unwrap(),
            ["1", "1+", "1+2", "3"]
        );
    }

    #[test]
    fn observers_fire_even_for_no_op_transitions() {
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);

        let mut session = Session::new();
        session.subscribe(move |_: &CalculatorState| {
            *sink.lock().unwrap() += 1;
        });

        // SetOperator on a blank first operand is a no-op
        session.dispatch(Action::SetOperator(Operator::Add));
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn memory_survives_across_dispatches() {
        let mut session = Session::new();
        session.dispatch(Action::EnterDigit(5));
        session.dispatch(Action::MemoryAdd);
        session.dispatch(Action::ClearAll);
        session.dispatch(Action::MemoryRecall);
        assert_eq!(session.state().first_operand, "5");
    }
}
