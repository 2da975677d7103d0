//! Word lists
//!
//! The default dictionary is embedded into the binary; custom lists load from files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};
