//! Scripted Calculator Tape
//!
//! This example demonstrates the pure transition core end to end.
//!
//! Key concepts:
//! - Folding a fixed action sequence over the initial state
//! - The display string the presentation layer would render
//! - History and memory surviving ClearAll
//!
//! Run with: cargo run --example tape

use abacus::core::{transition, Action, CalculatorState, Operator};

fn main() {
    println!("=== Calculator Tape ===\n");

    let script = [
        Action::EnterDigit(1),
        Action::EnterDigit(2),
        Action::SetOperator(Operator::Add),
        Action::EnterDigit(7),
        Action::EnterDecimalPoint,
        Action::EnterDigit(5),
        Action::Calculate,
        Action::MemoryAdd,
        Action::SetOperator(Operator::Multiply),
        Action::EnterDigit(2),
        Action::Calculate,
        Action::ApplySquareRoot,
        Action::ClearAll,
        Action::MemoryRecall,
    ];

    let mut state = CalculatorState::new();
    for action in script {
        state = transition(&state, action);
        println!("{:<22} -> {}", action.name(), state.display_text());
    }

    println!("\nHistory:");
    for entry in state.history.entries() {
        println!("  {entry}");
    }

    if let Some(memory) = state.memory_display() {
        println!("\nMemory register: {memory}");
    }

    println!("\n=== Example Complete ===");
}
