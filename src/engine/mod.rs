//! Hint engine: history, filtering, scoring and the session state machine

pub mod elimination;
pub mod filter;
pub mod frequency;
pub mod history;
mod session;

pub use elimination::{probe_letters, rank_probes, score_probe};
pub use filter::{Constraints, Rejection, filter_candidates};
pub use frequency::{FrequencyTable, rank_by_frequency};
pub use history::{History, PartialSolution};
pub use session::{ELIMINATION_THRESHOLD, EngineState, Session};
