//! Board structure and ray geometry

use std::fmt;

use super::bitboard::Bitboard;
use super::{Direction, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// 8x8 game board.
///
/// Two occupancy masks; a square set in neither is empty. `Copy`, so a
/// search branch that needs its own board just takes a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Empty board (no discs at all)
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Standard starting position: White on D4/E5, Black on E4/D5
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.place_stone(Pos::new(3, 3), Stone::White);
        board.place_stone(Pos::new(4, 4), Stone::White);
        board.place_stone(Pos::new(3, 4), Stone::Black);
        board.place_stone(Pos::new(4, 3), Stone::Black);
        board
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Overwrite a square. Placing `Stone::Empty` clears it.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.remove_stone(pos);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Number of squares holding `stone` (empty squares for `Stone::Empty`)
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        self.stones(stone)
            .map_or(TOTAL_CELLS as u32 - self.stone_count(), Bitboard::count)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Walk `from + k*dir` for k = 1.. while on the board.
    ///
    /// Returns true at the first square holding `target`, provided every
    /// square before it held `skip`. Any other square (including an empty
    /// one when `target`/`skip` are colors) or the edge ends the walk with
    /// false. A ray that starts directly on `target` succeeds with nothing
    /// skipped.
    pub fn scan_for(&self, target: Stone, skip: Stone, from: Pos, dir: Direction) -> bool {
        for k in 1..BOARD_SIZE as i32 {
            let Some(pos) = from.step(dir, k) else {
                return false;
            };
            let cell = self.get(pos);
            if cell == skip {
                continue;
            }
            return cell == target;
        }
        false
    }
}

impl fmt::Display for Board {
    /// Console rendering: column letters on top, one `|`-separated row per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for row in 0..BOARD_SIZE as u8 {
            write!(f, "{}", row + 1)?;
            for col in 0..BOARD_SIZE as u8 {
                write!(f, "|{}", self.get(Pos::new(row, col)).symbol())?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
