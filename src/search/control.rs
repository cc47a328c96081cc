//! Shared search control: cancellation flag plus best-move record
//!
//! Both live behind one lock. The worker takes it to check the flag and to
//! publish an improved root move; the timer takes it once to raise the flag
//! and read the best move, so the reported move is the last improvement
//! published before the flag went up. The lock is never held across a
//! recursive search call.

use parking_lot::Mutex;
use thiserror::Error;

use crate::rules::Move;

/// The deadline fired; the search result must not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search interrupted by deadline")]
pub struct Interrupted;

#[derive(Debug)]
struct ControlState {
    cancelled: bool,
    best: Move,
    improvements: usize,
}

/// Cancellation token and best-so-far cell shared by worker and timer.
#[derive(Debug)]
pub struct SearchControl {
    state: Mutex<ControlState>,
}

impl SearchControl {
    /// Fresh control: not cancelled, best move is the placeholder
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ControlState {
                cancelled: false,
                best: Move::placeholder(),
                improvements: 0,
            }),
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.state.lock().cancelled
    }

    /// Return `Err(Interrupted)` once the flag is up
    #[inline]
    pub fn check(&self) -> Result<(), Interrupted> {
        if self.is_cancelled() {
            Err(Interrupted)
        } else {
            Ok(())
        }
    }

    /// Raise the flag without reading the record
    pub fn cancel(&self) {
        self.state.lock().cancelled = true;
    }

    /// Publish a scored root move.
    ///
    /// Replaces the record only when strictly better, so on ties the
    /// earlier candidate stays. Returns whether it replaced the record, or
    /// `Interrupted` if the flag is already up (the candidate is dropped).
    pub fn offer(&self, candidate: Move) -> Result<bool, Interrupted> {
        let mut state = self.state.lock();
        if state.cancelled {
            return Err(Interrupted);
        }
        if candidate.score > state.best.score {
            state.best = candidate;
            state.improvements += 1;
            return Ok(true);
        }
        Ok(false)
    }

    /// Raise the flag and take the best move, atomically
    pub fn cancel_and_take(&self) -> Move {
        let mut state = self.state.lock();
        state.cancelled = true;
        state.best
    }

    /// Current record
    pub fn best(&self) -> Move {
        self.state.lock().best
    }

    /// How many times the record was replaced
    pub fn improvements(&self) -> usize {
        self.state.lock().improvements
    }
}

impl Default for SearchControl {
    fn default() -> Self {
        Self::new()
    }
}
