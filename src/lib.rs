//! Othello decision engine
//!
//! Picks a move for one side of a standard 8x8 Othello game within a fixed
//! per-move time budget:
//! - Two-bitboard position with incremental disc counts
//! - Legal-move generation and pure move application
//! - Weighted heuristic over coin parity, mobility, stability and corners
//! - Depth-limited alpha-beta minimax on a worker thread
//! - Deadline orchestration that always has a move to report
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move legality and flipping
//! - [`eval`]: Position evaluation and stability classification
//! - [`search`]: Alpha-beta search and shared cancellation
//! - [`engine`]: Deadline orchestrator
//! - [`protocol`]: `START` / `MOVE` / `STOP` line protocol
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use othello::{AIEngine, EngineConfig, GameState, Stone};
//! use othello::rules::{is_legal, perform_move};
//!
//! let engine = AIEngine::with_config(EngineConfig::default().with_depth(3));
//! let state = GameState::new(Stone::Black, 2);
//!
//! let result = engine.decide_move_within(&state, Duration::from_millis(200));
//! assert!(is_legal(&state.board, result.best_move.pos, Stone::Black));
//!
//! let next = perform_move(&state, result.best_move, Stone::Black);
//! println!("Engine plays {}\n{}", result.best_move, next.board);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, GameState, Pos, Stone, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{GameError, Result};
pub use rules::Move;
