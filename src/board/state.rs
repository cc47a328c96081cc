//! Game state: board plus per-color disc counts and session parameters

use super::{Board, Pos, Stone, TOTAL_CELLS};

/// Position value handed to the search.
///
/// Counts are updated on every mutation and must always agree with the
/// board; `is_consistent` checks that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub black_count: u8,
    pub white_count: u8,
    /// Color the agent plays
    pub own_color: Stone,
    /// Per-move time budget in whole seconds
    pub time_budget_secs: u32,
}

impl GameState {
    /// Standard starting position for an agent playing `own_color`
    pub fn new(own_color: Stone, time_budget_secs: u32) -> Self {
        Self::from_board(Board::initial(), own_color, time_budget_secs)
    }

    /// Wrap an arbitrary board, deriving both counts from it
    pub fn from_board(board: Board, own_color: Stone, time_budget_secs: u32) -> Self {
        debug_assert!(own_color != Stone::Empty);
        let mut state = Self {
            board,
            black_count: 0,
            white_count: 0,
            own_color,
            time_budget_secs,
        };
        state.recount();
        state
    }

    /// Replace the whole board and recompute both counts
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.recount();
    }

    fn recount(&mut self) {
        #[allow(clippy::cast_possible_truncation)]
        let (black, white) = (self.board.black.count() as u8, self.board.white.count() as u8);
        self.black_count = black;
        self.white_count = white;
    }

    #[inline]
    pub fn opponent_color(&self) -> Stone {
        self.own_color.opponent()
    }

    /// Disc count for a color; empty squares for `Stone::Empty`
    #[inline]
    pub fn count(&self, stone: Stone) -> u8 {
        match stone {
            Stone::Black => self.black_count,
            Stone::White => self.white_count,
            Stone::Empty => self.empty_count(),
        }
    }

    #[inline]
    pub fn empty_count(&self) -> u8 {
        TOTAL_CELLS as u8 - self.black_count - self.white_count
    }

    /// Put `stone` on `pos`, replacing whatever was there.
    ///
    /// Counts follow the square's old and new contents, so they stay
    /// consistent even when `pos` was already occupied.
    #[inline]
    pub fn place(&mut self, pos: Pos, stone: Stone) {
        match self.board.get(pos) {
            Stone::Black => self.black_count -= 1,
            Stone::White => self.white_count -= 1,
            Stone::Empty => {}
        }
        self.board.place_stone(pos, stone);
        match stone {
            Stone::Black => self.black_count += 1,
            Stone::White => self.white_count += 1,
            Stone::Empty => {}
        }
    }

    /// Toggle the color of an occupied square, moving one unit between counts
    #[inline]
    pub fn flip(&mut self, pos: Pos) {
        match self.board.get(pos) {
            Stone::Black => {
                self.board.place_stone(pos, Stone::White);
                self.black_count -= 1;
                self.white_count += 1;
            }
            Stone::White => {
                self.board.place_stone(pos, Stone::Black);
                self.white_count -= 1;
                self.black_count += 1;
            }
            Stone::Empty => {}
        }
    }

    /// Counts match the board and all three add up to 64
    pub fn is_consistent(&self) -> bool {
        u32::from(self.black_count) == self.board.black.count()
            && u32::from(self.white_count) == self.board.white.count()
            && usize::from(self.black_count) + usize::from(self.white_count) + usize::from(self.empty_count())
                == TOTAL_CELLS
    }
}
