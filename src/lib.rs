//! Abacus: a pure functional pocket-calculator engine
//!
//! Abacus is built on the "pure core, imperative shell" philosophy.
//! The whole calculator is one total transition function over an
//! immutable state record; rendering, input wiring, and every other
//! side effect live outside the core.
//!
//! # Core Concepts
//!
//! - **State**: the immutable [`CalculatorState`] record, replaced
//!   wholesale on every transition
//! - **Actions**: the closed [`Action`] union of user intents
//! - **Transition**: [`transition`], a total function - invalid input
//!   degrades to a no-op, never a panic
//! - **History**: append-only log of completed calculations
//! - **Memory**: a scalar register surviving `ClearAll`
//!
//! # Example
//!
//! ```rust
//! use abacus::{transition, Action, CalculatorState, Operator};
//!
//! let mut state = CalculatorState::new();
//! for action in [
//!     Action::EnterDigit(2),
//!     Action::SetOperator(Operator::Add),
//!     Action::EnterDigit(3),
//!     Action::Calculate,
//! ] {
//!     state = transition(&state, action);
//! }
//!
//! assert_eq!(state.first_operand, "5");
//! assert_eq!(state.history.entries(), ["2.0 + 3.0 = 5"]);
//! ```
//!
//! The [`session`] module provides the imperative shell (owned state
//! plus observer notification), and [`keypad`] the fixed mapping from
//! input labels to actions.

pub mod core;
pub mod keypad;
pub mod session;

// Re-export commonly used types
pub use crate::core::{transition, Action, CalculatorState, History, Operator};
pub use crate::session::Session;
