//! Wordle Hints
//!
//! A Wordle helper engine: accumulate graded rows, narrow the dictionary to the words still
//! consistent with them, and rank suggestions two ways (likely answers by positional letter
//! frequency, and probe words that best split the remaining candidates).
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::core::GuessRow;
//! use wordle_hints::engine::{EngineState, Session};
//! use wordle_hints::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_strs(&["crane", "slate", "plate", "grate"]);
//! let mut session = Session::new(&dictionary);
//!
//! let state = session.submit(GuessRow::parse("crane", "--G-G").unwrap()).unwrap();
//! assert_eq!(state, EngineState::Collecting);
//! assert_eq!(session.candidates().len(), 2);
//! assert_eq!(session.partial_solution().to_string(), "__a_e");
//! ```

// Core domain types
pub mod core;

// History, filtering, scoring and the session
pub mod engine;

// Engine errors
pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
