//! Search module for the Othello engine
//!
//! Contains:
//! - Shared cancellation flag and best-move record
//! - Alpha-beta minimax with a root driver that publishes improvements

pub mod alphabeta;
pub mod control;

pub use alphabeta::{SearchOutcome, SearchResult, SearchStats, Searcher};
pub use control::{Interrupted, SearchControl};
