//! Simple interactive CLI mode
//!
//! Line-based hint loop without the TUI: type each guess with its feedback and get
//! suggestions back.

use super::suggest::parse_row_arg;
use crate::engine::{EngineState, Session};
use crate::output::{print_found, print_hints, print_victory};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple(dictionary: &Dictionary, top: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Wordle Hints - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("After each guess, enter the word and its feedback, e.g. 'crane G-Y--':\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)\n");
    println!("Commands: 'undo', 'new', 'find LETTERS', 'quit'\n");

    let stdin = io::stdin();
    run_lines(dictionary, top, stdin.lock(), true)?;
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Drive a session from `input` until `quit` or end of input
///
/// Returns the session as it stood at the end.
///
/// # Errors
///
/// Returns an error if reading `input` fails.
pub fn run_lines<R: BufRead>(
    dictionary: &Dictionary,
    top: usize,
    input: R,
    prompt: bool,
) -> Result<Session<'_>> {
    let mut session = Session::new(dictionary);
    print_hints(&session, top);

    let mut lines = input.lines();
    loop {
        if prompt {
            print!("Row {}: ", session.history().len() + 1);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session.reset();
                println!("\n🔄 New game started!\n");
                print_hints(&session, top);
            }
            "undo" | "u" => match session.undo() {
                Some(row) => {
                    println!("✓ Undone {row}\n");
                    print_hints(&session, top);
                }
                None => println!("Nothing to undo!\n"),
            },
            cmd if cmd.starts_with("find ") => match dictionary.find_containing(&cmd[5..]) {
                Ok(words) => print_found(&words),
                Err(e) => println!("{} {e}", "❌".red()),
            },
            _ => match parse_row_arg(input).and_then(|row| session.submit(row)) {
                Ok(EngineState::Solved) => {
                    print_victory(&session);
                    println!("Type 'new' to start over.\n");
                }
                Ok(EngineState::Exhausted) => {
                    println!(
                        "\n{}",
                        "❌ No candidates remain! Your feedback may be incorrect.".red()
                    );
                    println!("Type 'undo' to go back, or 'new' to start over.\n");
                }
                Ok(EngineState::Collecting) => print_hints(&session, top),
                Err(e) => println!("{} {e}\n", "❌".red()),
            },
        }
    }

    Ok(session)
}
