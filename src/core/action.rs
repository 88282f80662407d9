//! User intents accepted by the calculator engine.

use super::state::Operator;
use serde::{Deserialize, Serialize};

/// A single discrete user intent.
///
/// The presentation layer maps each input gesture (button tap, key
/// press) to exactly one action and feeds it to
/// [`transition`](super::transition). Actions are plain values with no
/// behavior of their own.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Action, Operator};
///
/// let presses = [
///     Action::EnterDigit(4),
///     Action::SetOperator(Operator::Multiply),
///     Action::EnterDigit(2),
///     Action::Calculate,
/// ];
/// assert_eq!(presses[1].name(), "SetOperator");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Action {
    /// Append a digit (0-9) to the active operand.
    EnterDigit(u8),
    /// Append a decimal point to the active operand.
    EnterDecimalPoint,
    /// Reset operands and operator; history and memory survive.
    ClearAll,
    /// Remove the most recently entered element.
    DeleteLast,
    /// Select the pending binary operator.
    SetOperator(Operator),
    /// Evaluate `first <operator> second`.
    Calculate,
    /// Divide the active operand by 100.
    ApplyPercentage,
    /// Replace the active operand with its square root.
    ApplySquareRoot,
    /// Flip the history panel visibility flag.
    ToggleHistoryVisible,
    /// Add the active operand to the memory register.
    MemoryAdd,
    /// Subtract the active operand from the memory register.
    MemorySubtract,
    /// Write the memory register into the active operand.
    MemoryRecall,
    /// Reset the memory register to zero.
    MemoryClear,
}

impl Action {
    /// Get the action's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnterDigit(_) => "EnterDigit",
            Self::EnterDecimalPoint => "EnterDecimalPoint",
            Self::ClearAll => "ClearAll",
            Self::DeleteLast => "DeleteLast",
            Self::SetOperator(_) => "SetOperator",
            Self::Calculate => "Calculate",
            Self::ApplyPercentage => "ApplyPercentage",
            Self::ApplySquareRoot => "ApplySquareRoot",
            Self::ToggleHistoryVisible => "ToggleHistoryVisible",
            Self::MemoryAdd => "MemoryAdd",
            Self::MemorySubtract => "MemorySubtract",
            Self::MemoryRecall => "MemoryRecall",
            Self::MemoryClear => "MemoryClear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_stable_across_payloads() {
        assert_eq!(Action::EnterDigit(0).name(), "EnterDigit");
        assert_eq!(Action::EnterDigit(9).name(), "EnterDigit");
        assert_eq!(
            Action::SetOperator(Operator::Add).name(),
            Action::SetOperator(Operator::Divide).name()
        );
    }

    #[test]
    fn action_serializes_correctly() {
        let action = Action::SetOperator(Operator::Multiply);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
