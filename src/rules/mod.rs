//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Move legality (flanking an opponent run)
//! - State transition (placing a disc and flipping every flanked run)

pub mod flip;
pub mod moves;

// Re-exports for convenient access
pub use flip::{flipped_positions, perform_move};
pub use moves::{count_legal_moves, has_legal_move, is_legal, legal_moves, Move};
