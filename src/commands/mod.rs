//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod suggest;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, sample_targets};
pub use simple::{run_lines, run_simple};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{parse_row_arg, session_from_rows};
