//! Core calculator types and transition logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The immutable [`CalculatorState`] record and [`Operator`] enum
//! - The [`Action`] tagged union of user intents
//! - The total [`transition`] function dispatching actions to states
//! - Append-only calculation [`History`]
//! - Number formatting rules shared by display and history text
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod action;
mod engine;
mod format;
mod history;
mod state;

pub use action::Action;
pub use engine::{transition, MAX_OPERAND_LEN};
pub use format::{decimal_literal, format_number};
pub use history::History;
pub use state::{CalculatorState, Operator, ERROR_SENTINEL};
