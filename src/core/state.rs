//! The calculator state record and its arithmetic operators.
//!
//! State is an immutable value: every transition replaces it wholesale
//! with a new record derived from the previous one. Nothing here performs
//! arithmetic dispatch - that lives in the engine.

use super::format::format_number;
use super::history::History;
use serde::{Deserialize, Serialize};

/// Text shown in place of the first operand after division by zero.
///
/// This is the only visible error condition the calculator raises; it is
/// cleared only by [`Action::ClearAll`](super::Action::ClearAll).
pub const ERROR_SENTINEL: &str = "Error";

/// A binary operator awaiting its second operand.
///
/// Each operator carries a fixed display symbol used both on the primary
/// display and in history entries.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operator;
///
/// assert_eq!(Operator::Multiply.symbol(), "×");
/// assert_eq!(Operator::Power.apply(2.0, 10.0), 1024.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// The operator's display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Ordinary IEEE-754 double arithmetic; `Power` is exponentiation.
    /// Division by zero is intercepted by the engine before this is
    /// reached.
    pub fn apply(&self, first: f64, second: f64) -> f64 {
        match self {
            Self::Add => first + second,
            Self::Subtract => first - second,
            Self::Multiply => first * second,
            Self::Divide => first / second,
            Self::Power => first.powf(second),
        }
    }
}

/// Immutable calculator state, replaced wholesale on each transition.
///
/// Holds at most two operands and one pending operator - there is no
/// expression tree and no operator precedence. The operand fields are
/// the literal entry text (digits, at most one `.`), which is what the
/// display renders.
///
/// # Example
///
/// ```rust
/// use abacus::core::CalculatorState;
///
/// let state = CalculatorState::new();
/// assert_eq!(state.first_operand, "");
/// assert_eq!(state.operator, None);
/// assert_eq!(state.memory, 0.0);
/// assert!(state.history.is_empty());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Entry text of the first number, or [`ERROR_SENTINEL`].
    pub first_operand: String,
    /// Entry text of the second number; non-empty only while an
    /// operator is pending.
    pub second_operand: String,
    /// The operator selected but not yet applied.
    pub operator: Option<Operator>,
    /// Log of completed calculations, surviving `ClearAll`.
    pub history: History,
    /// Single scalar memory register, surviving `ClearAll`.
    pub memory: f64,
    /// Whether the history panel is visible. No arithmetic effect.
    pub show_history: bool,
}

impl PartialEq for CalculatorState {
    /// The memory register compares bitwise, so a state whose register
    /// overflowed to NaN still equals itself.
    fn eq(&self, other: &Self) -> bool {
        self.first_operand == other.first_operand
            && self.second_operand == other.second_operand
            && self.operator == other.operator
            && self.history == other.history
            && self.memory.to_bits() == other.memory.to_bits()
            && self.show_history == other.show_history
    }
}

impl CalculatorState {
    /// Create the all-default session-start state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose the primary display string:
    /// first operand, pending operator symbol, second operand.
    ///
    /// # Example
    ///
    /// ```rust
    /// use abacus::core::{transition, Action, CalculatorState, Operator};
    ///
    /// let mut state = CalculatorState::new();
    /// for action in [
    ///     Action::EnterDigit(1),
    ///     Action::EnterDigit(2),
    ///     Action::SetOperator(Operator::Add),
    ///     Action::EnterDigit(7),
    /// ] {
    ///     state = transition(&state, action);
    /// }
    /// assert_eq!(state.display_text(), "12+7");
    /// ```
    pub fn display_text(&self) -> String {
        let symbol = self.operator.map(|op| op.symbol()).unwrap_or("");
        format!("{}{}{}", self.first_operand, symbol, self.second_operand)
    }

    /// Formatted memory value, or `None` when the register holds zero.
    ///
    /// The presentation layer shows the memory indicator only for a
    /// non-zero register.
    pub fn memory_display(&self) -> Option<String> {
        if self.memory == 0.0 {
            None
        } else {
            Some(format_number(self.memory))
        }
    }

    /// Whether the division-by-zero sentinel is being displayed.
    pub fn is_error(&self) -> bool {
        self.first_operand == ERROR_SENTINEL
    }

    /// The operand unary and memory operations act on: the second
    /// operand while an operator is pending, the first otherwise.
    pub fn active_operand(&self) -> &str {
        if self.operator.is_none() {
            &self.first_operand
        } else {
            &self.second_operand
        }
    }

    /// Copy of this state with the active operand replaced by `text`.
    pub(crate) fn with_active_operand(&self, text: String) -> Self {
        if self.operator.is_none() {
            Self {
                first_operand: text,
                ..self.clone()
            }
        } else {
            Self {
                second_operand: text,
                ..self.clone()
            }
        }
    }
}
