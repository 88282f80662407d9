//! Mapping from keypad labels to calculator actions.
//!
//! The presentation layer forwards each gesture (button tap, key press)
//! as the label of the control that produced it. This module owns the
//! fixed label-to-action table so the rendering surface never needs to
//! know about [`Action`] construction.

use crate::core::{Action, Operator};
use thiserror::Error;

/// Errors that can occur when mapping keypad input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The label does not correspond to any calculator control.
    #[error("Unrecognized key {0:?}")]
    Unrecognized(String),
}

/// Map a keypad label to its action.
///
/// The table covers digits `0`-`9`, `.`, the operator symbols
/// `+ - × ÷ ^`, `=`, `AC`, the delete glyph `⌫`, `%`, `√`, the memory
/// keys `M+`/`M-`/`MR`/`MC`, and `History`.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Action, Operator};
/// use abacus::keypad::action_for_key;
///
/// assert_eq!(action_for_key("7"), Ok(Action::EnterDigit(7)));
/// assert_eq!(
///     action_for_key("×"),
///     Ok(Action::SetOperator(Operator::Multiply))
/// );
/// assert!(action_for_key("π").is_err());
/// ```
pub fn action_for_key(key: &str) -> Result<Action, KeyError> {
    let action = match key {
        "AC" => Action::ClearAll,
        "⌫" => Action::DeleteLast,
        "÷" => Action::SetOperator(Operator::Divide),
        "×" => Action::SetOperator(Operator::Multiply),
        "-" => Action::SetOperator(Operator::Subtract),
        "+" => Action::SetOperator(Operator::Add),
        "^" => Action::SetOperator(Operator::Power),
        "=" => Action::Calculate,
        "." => Action::EnterDecimalPoint,
        "%" => Action::ApplyPercentage,
        "√" => Action::ApplySquareRoot,
        "M+" => Action::MemoryAdd,
        "M-" => Action::MemorySubtract,
        "MR" => Action::MemoryRecall,
        "MC" => Action::MemoryClear,
        "History" => Action::ToggleHistoryVisible,
        label => match label.parse::<u8>() {
            Ok(digit) if digit <= 9 && label.len() == 1 => Action::EnterDigit(digit),
            _ => return Err(KeyError::Unrecognized(key.to_string())),
        },
    };
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_enter_digit() {
        for d in 0..=9u8 {
            let label = d.to_string();
            assert_eq!(action_for_key(&label), Ok(Action::EnterDigit(d)));
        }
    }

    #[test]
    fn operator_symbols_map_to_set_operator() {
        assert_eq!(
            action_for_key("+"),
            Ok(Action::SetOperator(Operator::Add))
        );
        assert_eq!(
            action_for_key("-"),
            Ok(Action::SetOperator(Operator::Subtract))
        );
        assert_eq!(
            action_for_key("×"),
            Ok(Action::SetOperator(Operator::Multiply))
        );
        assert_eq!(
            action_for_key("÷"),
            Ok(Action::SetOperator(Operator::Divide))
        );
        assert_eq!(
            action_for_key("^"),
            Ok(Action::SetOperator(Operator::Power))
        );
    }

    #[test]
    fn control_keys_map_to_their_actions() {
        assert_eq!(action_for_key("AC"), Ok(Action::ClearAll));
        assert_eq!(action_for_key("⌫"), Ok(Action::DeleteLast));
        assert_eq!(action_for_key("="), Ok(Action::Calculate));
        assert_eq!(action_for_key("."), Ok(Action::EnterDecimalPoint));
        assert_eq!(action_for_key("%"), Ok(Action::ApplyPercentage));
        assert_eq!(action_for_key("√"), Ok(Action::ApplySquareRoot));
        assert_eq!(action_for_key("History"), Ok(Action::ToggleHistoryVisible));
    }

    #[test]
    fn memory_keys_map_to_memory_actions() {
        assert_eq!(action_for_key("M+"), Ok(Action::MemoryAdd));
        assert_eq!(action_for_key("M-"), Ok(Action::MemorySubtract));
        assert_eq!(action_for_key("MR"), Ok(Action::MemoryRecall));
        assert_eq!(action_for_key("MC"), Ok(Action::MemoryClear));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        for key in ["", "π", "12", "m+", "ac", "🙂"] {
            assert_eq!(
                action_for_key(key),
                Err(KeyError::Unrecognized(key.to_string()))
            );
        }
    }

    #[test]
    fn key_error_displays_the_offending_label() {
        let err = action_for_key("??").unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized key \"??\"");
    }
}
