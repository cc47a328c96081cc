//! Evaluation module for Othello positions
//!
//! This module provides the leaf scoring function of the search.
//! The evaluation considers:
//! - Coin parity
//! - Mobility
//! - Corner control
//! - Disc stability

pub mod heuristic;
pub mod stability;

pub use heuristic::{coin_score, corner_score, evaluate, mobility_score, stability_score, EvalWeights};
pub use stability::{classify, stability_count, StabilityLabel, StabilityMap};
