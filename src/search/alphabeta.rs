//! Depth-limited minimax with alpha-beta pruning
//!
//! Values are always from the agent's perspective (`GameState::own_color`):
//! nodes where the agent is to move maximize, the opponent's nodes minimize.
//! A side without legal moves ends the line; passes are not searched.
//!
//! The root scores each of the agent's moves in raster order and publishes
//! every strict improvement to the shared [`SearchControl`], so an
//! interrupted search still leaves the best fully scored move behind.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use othello::board::{GameState, Stone};
//! use othello::search::{SearchControl, Searcher};
//!
//! let control = Arc::new(SearchControl::new());
//! let mut searcher = Searcher::new(Arc::clone(&control), 3);
//! let state = GameState::new(Stone::Black, 2);
//!
//! let result = searcher.search_root(&state);
//! assert!(result.completed);
//! assert_eq!(result.best_move, control.best());
//! ```

use std::sync::Arc;

use tracing::{debug, trace};

use crate::board::{GameState, Stone};
use crate::eval::evaluate;
use crate::rules::{legal_moves, perform_move, Move};

use super::control::{Interrupted, SearchControl};

/// Score of one subtree, or `Interrupted` when the deadline cut it short
pub type SearchOutcome = Result<f64, Interrupted>;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Beta cutoffs at maximizing nodes
    pub beta_cutoffs: u64,
    /// Alpha cutoffs at minimizing nodes
    pub alpha_cutoffs: u64,
    /// Leaves reached because the side to move had no legal move
    pub pass_leaves: u64,
}

impl SearchStats {
    pub fn cutoffs(&self) -> u64 {
        self.beta_cutoffs + self.alpha_cutoffs
    }
}

/// Outcome of one root search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move published before the search ended (placeholder if none)
    pub best_move: Move,
    /// Root moves fully scored
    pub root_moves_completed: usize,
    /// Root moves available
    pub root_moves: usize,
    /// True when every root move was scored before cancellation
    pub completed: bool,
    /// Total nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Single-threaded searcher driven by a shared [`SearchControl`].
pub struct Searcher {
    control: Arc<SearchControl>,
    max_depth: u8,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher that scores root moves `max_depth` plies deep
    #[must_use]
    pub fn new(control: Arc<SearchControl>, max_depth: u8) -> Self {
        Self {
            control,
            max_depth,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score every legal move of the agent and publish improvements.
    ///
    /// Each move is applied and its reply tree searched `max_depth - 1`
    /// plies deep with the opponent to move and a full window. Stops at the
    /// first cancellation check that fails; already published moves stay.
    pub fn search_root(&mut self, state: &GameState) -> SearchResult {
        let own = state.own_color;
        let moves = legal_moves(state, own);
        let child_depth = self.max_depth.saturating_sub(1);
        let mut completed = 0;

        for mov in &moves {
            match self.score_root_move(state, *mov, child_depth) {
                Ok(score) => {
                    completed += 1;
                    trace!(mov = %mov, score, "root move scored");
                }
                Err(Interrupted) => break,
            }
        }

        debug!(
            nodes = self.nodes,
            completed,
            root_moves = moves.len(),
            cutoffs = self.stats.cutoffs(),
            "root search finished"
        );
        SearchResult {
            best_move: self.control.best(),
            root_moves_completed: completed,
            root_moves: moves.len(),
            completed: completed == moves.len(),
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    fn score_root_move(&mut self, state: &GameState, mov: Move, depth: u8) -> SearchOutcome {
        self.control.check()?;
        let child = perform_move(state, mov, state.own_color);
        let score = self.minimax(
            &child,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            state.opponent_color(),
        )?;
        self.control.offer(mov.with_score(score))?;
        Ok(score)
    }

    /// Alpha-beta minimax from `color`'s turn.
    ///
    /// At `depth == 0`, or when `color` has no legal move, returns
    /// [`evaluate`] of the position with `color`'s moves as the move list.
    pub fn minimax(
        &mut self,
        state: &GameState,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        color: Stone,
    ) -> SearchOutcome {
        self.nodes += 1;
        self.control.check()?;

        let moves = legal_moves(state, color);
        if depth == 0 || moves.is_empty() {
            if moves.is_empty() {
                self.stats.pass_leaves += 1;
            }
            return Ok(evaluate(state, &moves));
        }

        let next_color = color.opponent();
        if color == state.own_color {
            let mut value = f64::NEG_INFINITY;
            for mov in moves {
                let child = perform_move(state, mov, color);
                value = value.max(self.minimax(&child, depth - 1, alpha, beta, next_color)?);
                if value >= beta {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
                alpha = alpha.max(value);
            }
            Ok(value)
        } else {
            let mut value = f64::INFINITY;
            for mov in moves {
                let child = perform_move(state, mov, color);
                value = value.min(self.minimax(&child, depth - 1, alpha, beta, next_color)?);
                if value <= alpha {
                    self.stats.alpha_cutoffs += 1;
                    break;
                }
                beta = beta.min(value);
            }
            Ok(value)
        }
    }
}
