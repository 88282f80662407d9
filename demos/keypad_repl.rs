//! Interactive Keypad Session
//!
//! This example wires the imperative shell to stdin: each line is a
//! keypad label (7, +, =, AC, M+, √, History, ...) mapped to one action.
//!
//! Key concepts:
//! - The label-to-action table at the input boundary
//! - Session dispatch with an observer playing the role of the redraw
//! - Unknown keys reported without disturbing the state
//!
//! Run with: cargo run --example keypad_repl

use abacus::keypad::action_for_key;
use abacus::session::Session;
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    println!("=== Keypad Session ===");
    println!("Enter one key per line (digits, . + - × ÷ ^ = AC ⌫ % √ M+ M- MR MC History).");
    println!("Empty line quits.\n");

    let mut session = Session::new();
    session.subscribe(|state| {
        let display = state.display_text();
        println!("  [{}]", if display.is_empty() { " " } else { &display });
        if let Some(memory) = state.memory_display() {
            println!("  M = {memory}");
        }
        if state.show_history {
            for entry in state.history.entries() {
                println!("  | {entry}");
            }
        }
    });

    let stdin = io::stdin();
    loop {
        print!("key> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let key = line.trim();
        if key.is_empty() {
            break;
        }

        match action_for_key(key) {
            Ok(action) => {
                session.dispatch(action);
            }
            Err(err) => println!("  {err}"),
        }
    }

    println!("\n=== Session Complete ===");
    Ok(())
}
