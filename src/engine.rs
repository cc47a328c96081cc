//! Deadline-bounded move selection
//!
//! The engine runs the root search on a worker thread while the calling
//! thread sleeps through the search window. When the window closes it raises
//! the shared cancellation flag, takes the best move published so far and
//! joins the worker. The per-move budget is `time_budget_secs` from the game
//! state minus the configured safety margin.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use othello::{AIEngine, EngineConfig, GameState, Stone};
//!
//! let engine = AIEngine::with_config(EngineConfig::default().with_depth(3));
//! let state = GameState::new(Stone::Black, 1);
//!
//! let result = engine.decide_move_within(&state, Duration::from_millis(100));
//! println!("Best move: {} (score {})", result.best_move, result.score);
//! println!("Time: {}ms, nodes: {}", result.time_ms, result.nodes);
//! ```

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error, warn};

use crate::board::GameState;
use crate::config::EngineConfig;
use crate::rules::Move;
use crate::search::{SearchControl, SearchResult, Searcher};

/// Result of a move decision with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move published before the deadline, or the placeholder
    pub best_move: Move,
    /// Minimax score of `best_move` (negative infinity for the placeholder)
    pub score: f64,
    /// Time from start to cancellation in milliseconds
    pub time_ms: u64,
    /// Nodes visited by the worker
    pub nodes: u64,
    /// Root moves fully scored before cancellation
    pub root_moves_completed: usize,
    /// Every root move was scored before the deadline
    pub completed: bool,
}

impl MoveResult {
    fn from_search(best_move: Move, time_ms: u64, search: Option<SearchResult>) -> Self {
        let (nodes, root_moves_completed, completed) = search
            .map(|s| (s.nodes, s.root_moves_completed, s.completed))
            .unwrap_or_default();
        Self {
            best_move,
            score: best_move.score,
            time_ms,
            nodes,
            root_moves_completed,
            completed,
        }
    }

    /// True when no root move finished and the placeholder was returned
    pub fn is_placeholder(&self) -> bool {
        self.root_moves_completed == 0 && self.best_move == Move::placeholder()
    }
}

/// Othello move engine.
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with the default configuration (depth 5, 750 ms margin)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pick a move for `state.own_color` within the state's time budget.
    ///
    /// The caller must make sure the agent has a legal move; otherwise the
    /// placeholder comes back.
    #[must_use]
    pub fn decide_move(&self, state: &GameState) -> Move {
        self.decide_move_with_stats(state).best_move
    }

    /// [`decide_move`](Self::decide_move) plus search statistics
    #[must_use]
    pub fn decide_move_with_stats(&self, state: &GameState) -> MoveResult {
        let window = self.config.search_window(state.time_budget_secs);
        self.decide_move_within(state, window)
    }

    /// Search for exactly `window`, then report the best move so far.
    ///
    /// Blocks for the full window even if the worker finishes early.
    #[must_use]
    pub fn decide_move_within(&self, state: &GameState, window: Duration) -> MoveResult {
        let start = Instant::now();
        let control = Arc::new(SearchControl::new());

        let worker_control = Arc::clone(&control);
        let root = *state;
        let max_depth = self.config.max_depth;
        let worker = thread::spawn(move || Searcher::new(worker_control, max_depth).search_root(&root));

        thread::sleep(window.saturating_sub(start.elapsed()));
        let best = control.cancel_and_take();
        let time_ms = start.elapsed().as_millis() as u64;

        let search = match worker.join() {
            Ok(result) => Some(result),
            Err(_) => {
                error!("search worker panicked");
                None
            }
        };

        let result = MoveResult::from_search(best, time_ms, search);
        if result.is_placeholder() {
            warn!(
                window_ms = window.as_millis() as u64,
                "deadline hit before any root move was scored, playing placeholder"
            );
        }
        debug!(
            best = %result.best_move,
            score = result.score,
            nodes = result.nodes,
            root_moves = result.root_moves_completed,
            completed = result.completed,
            time_ms = result.time_ms,
            "move decided"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Stone};
    use crate::rules::{is_legal, legal_moves, perform_move};

    fn midgame(own: Stone) -> GameState {
        let mut state = GameState::new(own, 1);
        let mut color = Stone::Black;
        for ply in 0..12 {
            let moves = legal_moves(&state, color);
            if !moves.is_empty() {
                state = perform_move(&state, moves[ply % moves.len()], color);
            }
            color = color.opponent();
        }
        state
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.config().max_depth, 5);
        assert_eq!(engine.config().safety_margin, Duration::from_millis(750));
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(EngineConfig::default().with_depth(3));
        assert_eq!(engine.config().max_depth, 3);
    }

    #[test]
    fn test_one_second_budget_respects_deadline() {
        let engine = AIEngine::new();
        let state = GameState::new(Stone::Black, 1);

        let start = Instant::now();
        let result = engine.decide_move_with_stats(&state);
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(250), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1000), "{elapsed:?}");
        assert!(result.time_ms >= 250);
    }

    #[test]
    fn test_returns_legal_move() {
        let engine = AIEngine::with_config(EngineConfig::default().with_depth(2));
        for own in [Stone::Black, Stone::White] {
            let state = midgame(own);
            let result = engine.decide_move_within(&state, Duration::from_millis(300));
            assert!(result.completed);
            assert!(is_legal(&state.board, result.best_move.pos, own));
        }
    }

    #[test]
    fn test_shallow_search_matches_searcher() {
        let engine = AIEngine::with_config(EngineConfig::default().with_depth(2));
        let state = GameState::new(Stone::White, 1);
        let result = engine.decide_move_within(&state, Duration::from_millis(300));

        let mut searcher = Searcher::new(Arc::new(SearchControl::new()), 2);
        let expected = searcher.search_root(&state);
        assert!(result.completed);
        assert_eq!(result.best_move, expected.best_move);
        assert_eq!(result.score, expected.best_move.score);
    }

    #[test]
    fn test_zero_window_returns_placeholder() {
        let engine = AIEngine::new();
        let state = midgame(Stone::Black);
        let result = engine.decide_move_within(&state, Duration::ZERO);

        assert!(result.is_placeholder());
        assert_eq!(result.best_move.pos, Pos::new(2, 3));
        assert_eq!(result.best_move.serialize(), "D3");
        assert!(!result.completed);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let engine = AIEngine::with_config(EngineConfig::default().with_depth(1));
        let state = GameState::new(Stone::Black, 1);
        let first = engine.decide_move_within(&state, Duration::from_millis(50));
        let second = engine.decide_move_within(&state, Duration::from_millis(50));
        assert_eq!(first.best_move, second.best_move);
    }
}
