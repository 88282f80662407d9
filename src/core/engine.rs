//! Action dispatch over the calculator state.
//!
//! [`transition`] is the whole engine: a total, pure function from the
//! current state and one action to the next state. Invalid actions and
//! unmet preconditions (blank operand, unparsable text, operator not
//! set, negative square-root input, length cap reached) degrade to a
//! silent no-op - the caller gets the state back unchanged. The single
//! visible failure is division by zero, which stores the
//! [`ERROR_SENTINEL`] in the first operand.

use super::action::Action;
use super::format::{decimal_literal, format_number, parse_operand};
use super::state::{CalculatorState, Operator, ERROR_SENTINEL};

/// Maximum operand length while digits are typed in.
///
/// The cap applies only to direct digit entry. Computed values
/// (percentage, square root, memory recall, calculation results) may
/// exceed it; further digit entry on them is then blocked.
pub const MAX_OPERAND_LEN: usize = 8;

/// Compute the next state for one user action.
///
/// Never fails and never panics; see the module docs for the no-op
/// policy.
///
/// # Example
///
/// ```rust
/// use abacus::core::{transition, Action, CalculatorState, Operator};
///
/// let mut state = CalculatorState::new();
/// for action in [
///     Action::EnterDigit(2),
///     Action::SetOperator(Operator::Add),
///     Action::EnterDigit(3),
///     Action::Calculate,
/// ] {
///     state = transition(&state, action);
/// }
///
/// assert_eq!(state.first_operand, "5");
/// assert_eq!(state.history.entries(), ["2.0 + 3.0 = 5"]);
/// ```
pub fn transition(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::EnterDigit(digit) => enter_digit(state, digit),
        Action::EnterDecimalPoint => enter_decimal_point(state),
        Action::ClearAll => clear_all(state),
        Action::DeleteLast => delete_last(state),
        Action::SetOperator(operator) => set_operator(state, operator),
        Action::Calculate => calculate(state),
        Action::ApplyPercentage => apply_percentage(state),
        Action::ApplySquareRoot => apply_square_root(state),
        Action::ToggleHistoryVisible => CalculatorState {
            show_history: !state.show_history,
            ..state.clone()
        },
        Action::MemoryAdd => memory_add(state),
        Action::MemorySubtract => memory_subtract(state),
        Action::MemoryRecall => memory_recall(state),
        Action::MemoryClear => CalculatorState {
            memory: 0.0,
            ..state.clone()
        },
    }
}

/// Append a digit to the active operand as text, respecting the cap.
fn enter_digit(state: &CalculatorState, digit: u8) -> CalculatorState {
    if digit > 9 {
        return state.clone();
    }
    let active = state.active_operand();
    if active.len() >= MAX_OPERAND_LEN {
        return state.clone();
    }
    let mut text = active.to_string();
    text.push(char::from(b'0' + digit));
    state.with_active_operand(text)
}

/// Append a decimal point, refusing leading dots and duplicates.
fn enter_decimal_point(state: &CalculatorState) -> CalculatorState {
    let active = state.active_operand();
    if active.is_empty() || active.contains('.') {
        return state.clone();
    }
    let mut text = active.to_string();
    text.push('.');
    state.with_active_operand(text)
}

/// Reset the entry fields; history and memory survive.
fn clear_all(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        history: state.history.clone(),
        memory: state.memory,
        ..CalculatorState::default()
    }
}

/// Undo the most recent entry element. First matching branch wins:
/// second-operand character, then pending operator, then
/// first-operand character.
fn delete_last(state: &CalculatorState) -> CalculatorState {
    if !state.second_operand.is_empty() {
        let mut text = state.second_operand.clone();
        text.pop();
        CalculatorState {
            second_operand: text,
            ..state.clone()
        }
    } else if state.operator.is_some() {
        CalculatorState {
            operator: None,
            ..state.clone()
        }
    } else if !state.first_operand.is_empty() {
        let mut text = state.first_operand.clone();
        text.pop();
        CalculatorState {
            first_operand: text,
            ..state.clone()
        }
    } else {
        state.clone()
    }
}

/// Select the pending operator. Requires a first operand; re-selection
/// simply replaces the previous choice.
fn set_operator(state: &CalculatorState, operator: Operator) -> CalculatorState {
    if state.first_operand.is_empty() {
        return state.clone();
    }
    CalculatorState {
        operator: Some(operator),
        ..state.clone()
    }
}

/// Evaluate the pending binary calculation.
///
/// The history entry records the operands as parsed values, not the
/// entry text, so `"2"` appears as `2.0`.
fn calculate(state: &CalculatorState) -> CalculatorState {
    let (Some(operator), Some(first), Some(second)) = (
        state.operator,
        parse_operand(&state.first_operand),
        parse_operand(&state.second_operand),
    ) else {
        return state.clone();
    };

    if operator == Operator::Divide && second == 0.0 {
        return CalculatorState {
            first_operand: ERROR_SENTINEL.to_string(),
            second_operand: String::new(),
            operator: None,
            history: state.history.clone(),
            memory: state.memory,
            show_history: state.show_history,
        };
    }

    let result = operator.apply(first, second);
    let formatted = format_number(result);
    let entry = format!(
        "{} {} {} = {}",
        decimal_literal(first),
        operator.symbol(),
        decimal_literal(second),
        formatted
    );

    CalculatorState {
        first_operand: formatted,
        second_operand: String::new(),
        operator: None,
        history: state.history.record(entry),
        memory: state.memory,
        show_history: state.show_history,
    }
}

/// Replace the active operand with value / 100.
fn apply_percentage(state: &CalculatorState) -> CalculatorState {
    match parse_operand(state.active_operand()) {
        Some(value) => state.with_active_operand(format_number(value / 100.0)),
        None => state.clone(),
    }
}

/// Replace the active operand with its square root.
///
/// Negative input is a silent no-op, not an error state.
fn apply_square_root(state: &CalculatorState) -> CalculatorState {
    match parse_operand(state.active_operand()) {
        Some(value) if value >= 0.0 => state.with_active_operand(format_number(value.sqrt())),
        _ => state.clone(),
    }
}

/// Fold the active operand into the memory register.
fn memory_add(state: &CalculatorState) -> CalculatorState {
    match parse_operand(state.active_operand()) {
        Some(value) => CalculatorState {
            memory: state.memory + value,
            ..state.clone()
        },
        None => state.clone(),
    }
}

fn memory_subtract(state: &CalculatorState) -> CalculatorState {
    match parse_operand(state.active_operand()) {
        Some(value) => CalculatorState {
            memory: state.memory - value,
            ..state.clone()
        },
        None => state.clone(),
    }
}

/// Overwrite the active operand with the formatted memory value.
fn memory_recall(state: &CalculatorState) -> CalculatorState {
    state.with_active_operand(format_number(state.memory))
}
