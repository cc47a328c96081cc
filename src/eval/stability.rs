//! Disc stability classification
//!
//! Two passes over a fresh label grid:
//! 1. Corner anchoring: from every occupied corner, runs of `color` along both
//!    edges are marked stable.
//! 2. Local classification in raster order: each remaining disc of `color` is
//!    unstable if the opponent can flank it through a neighboring line,
//!    otherwise stable when an L-shaped part of its neighbor ring is stable,
//!    otherwise indifferent.
//!
//! Only discs classified in pass 2 enter the tally (+1 stable or indifferent,
//! -1 unstable). Edge runs anchored in pass 1 are not counted.

use crate::board::{Board, Direction, Pos, Stone, BOARD_SIZE, CORNERS, DIRECTIONS, TOTAL_CELLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilityLabel {
    Stable,
    Unstable,
    Indifferent,
    Unassigned,
}

/// Edge directions walked from a corner (only the two that stay on the board matter)
const EDGE_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(0, 1),
    Direction::new(1, 0),
];

/// L-shape patterns over the neighbor ring (slots index `DIRECTIONS`):
/// a full edge triple plus at least one of the two centers beside it.
const L_PATTERNS: [([usize; 3], [usize; 2]); 4] = [
    ([0, 1, 2], [3, 4]), // top row, left/right centers
    ([5, 6, 7], [3, 4]), // bottom row
    ([0, 3, 5], [1, 6]), // left column, up/down centers
    ([2, 4, 7], [1, 6]), // right column
];

/// Label grid for one color, recomputed from scratch on every call.
#[derive(Debug, Clone)]
pub struct StabilityMap {
    labels: [StabilityLabel; TOTAL_CELLS],
    tally: i32,
}

impl StabilityMap {
    /// Classify every disc of `color` on `board`
    pub fn compute(board: &Board, color: Stone) -> Self {
        let mut map = Self {
            labels: [StabilityLabel::Unassigned; TOTAL_CELLS],
            tally: 0,
        };
        map.anchor_corners(board, color);
        map.classify_local(board, color);
        map
    }

    #[inline]
    pub fn label(&self, pos: Pos) -> StabilityLabel {
        self.labels[pos.to_index()]
    }

    /// Signed tally of the locally classified discs
    #[inline]
    pub fn tally(&self) -> i32 {
        self.tally
    }

    fn anchor_corners(&mut self, board: &Board, color: Stone) {
        for corner in CORNERS {
            if board.is_empty(corner) {
                continue;
            }
            for dir in EDGE_DIRECTIONS {
                for k in 1..BOARD_SIZE as i32 {
                    let Some(pos) = corner.step(dir, k) else {
                        break;
                    };
                    if board.get(pos) != color {
                        break;
                    }
                    self.labels[pos.to_index()] = StabilityLabel::Stable;
                }
            }
        }
    }

    fn classify_local(&mut self, board: &Board, color: Stone) {
        let Some(discs) = board.stones(color) else {
            return;
        };
        for pos in discs.iter_ones() {
            if self.label(pos) != StabilityLabel::Unassigned {
                continue;
            }
            let label = self.classify_square(board, pos, color);
            self.labels[pos.to_index()] = label;
            self.tally += if label == StabilityLabel::Unstable { -1 } else { 1 };
        }
    }

    fn classify_square(&self, board: &Board, pos: Pos, color: Stone) -> StabilityLabel {
        let opponent = color.opponent();
        // Off-board slots stay stable
        let mut ring = [StabilityLabel::Stable; 8];

        for (slot, dir) in DIRECTIONS.into_iter().enumerate() {
            let Some(neighbor) = pos.step(dir, 1) else {
                continue;
            };
            let back = dir.reversed();
            match board.get(neighbor) {
                // Opponent could play here and close a run through `pos`
                Stone::Empty if board.scan_for(opponent, color, neighbor, back) => {
                    return StabilityLabel::Unstable;
                }
                // Opponent already on one side, an empty square on the other
                s if s == opponent && board.scan_for(Stone::Empty, color, neighbor, back) => {
                    return StabilityLabel::Unstable;
                }
                _ => {}
            }
            ring[slot] = self.label(neighbor);
        }

        if is_l_stable(&ring) {
            StabilityLabel::Stable
        } else {
            StabilityLabel::Indifferent
        }
    }
}

fn is_l_stable(ring: &[StabilityLabel; 8]) -> bool {
    let stable = |i: &usize| ring[*i] == StabilityLabel::Stable;
    L_PATTERNS
        .iter()
        .any(|(edge, centers)| edge.iter().all(stable) && centers.iter().any(stable))
}

/// Full label grid for `color`
pub fn classify(board: &Board, color: Stone) -> StabilityMap {
    StabilityMap::compute(board, color)
}

/// Signed stability tally for `color`
pub fn stability_count(board: &Board, color: Stone) -> i32 {
    classify(board, color).tally()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::empty();
        for &(r, c, s) in stones {
            board.place_stone(Pos::new(r, c), s);
        }
        board
    }

    #[test]
    fn test_lone_corner_disc_is_stable() {
        let board = board_with(&[(0, 0, Stone::Black)]);
        let map = StabilityMap::compute(&board, Stone::Black);
        assert_eq!(map.label(Pos::new(0, 0)), StabilityLabel::Stable);
        assert_eq!(map.tally(), 1);
    }

    #[test]
    fn test_corner_anchored_run_excluded_from_tally() {
        let board = board_with(&[
            (0, 0, Stone::Black),
            (0, 1, Stone::Black),
            (0, 2, Stone::Black),
        ]);
        let map = StabilityMap::compute(&board, Stone::Black);
        assert_eq!(map.label(Pos::new(0, 1)), StabilityLabel::Stable);
        assert_eq!(map.label(Pos::new(0, 2)), StabilityLabel::Stable);
        assert_eq!(map.label(Pos::new(0, 3)), StabilityLabel::Unassigned);
        // Three stable discs, but only the corner itself went through the local pass
        assert_eq!(map.tally(), 1);
    }

    #[test]
    fn test_anchoring_from_opponent_corner() {
        // Runs next to any occupied corner are anchored, whoever holds it
        let board = board_with(&[(7, 7, Stone::White), (7, 6, Stone::Black)]);
        let map = StabilityMap::compute(&board, Stone::Black);
        assert_eq!(map.label(Pos::new(7, 6)), StabilityLabel::Stable);
        assert_eq!(map.tally(), 0);
    }

    #[test]
    fn test_flankable_disc_is_unstable() {
        // D4 White, E4 Black, F4 empty: White can play F4 and flip E4
        let board = board_with(&[(3, 3, Stone::White), (3, 4, Stone::Black)]);
        let black = classify(&board, Stone::Black);
        assert_eq!(black.label(Pos::new(3, 4)), StabilityLabel::Unstable);
        assert_eq!(black.tally(), -1);
        assert_eq!(stability_count(&board, Stone::White), -1);
    }

    #[test]
    fn test_initial_position_all_unstable() {
        let board = Board::initial();
        assert_eq!(stability_count(&board, Stone::Black), -2);
        assert_eq!(stability_count(&board, Stone::White), -2);
    }

    #[test]
    fn test_full_board_counts_interior_only() {
        let mut board = Board::empty();
        for pos in Pos::all() {
            board.place_stone(pos, Stone::Black);
        }
        let map = StabilityMap::compute(&board, Stone::Black);
        assert!(Pos::all().all(|p| map.label(p) == StabilityLabel::Stable));
        // The 28 edge squares are anchored from the corners
        assert_eq!(map.tally(), 36);
    }

    #[test]
    fn test_interior_disc_without_threat_is_indifferent() {
        // Isolated disc in the middle: no flank possible, no stable L-shape
        let board = board_with(&[(3, 3, Stone::Black)]);
        let map = StabilityMap::compute(&board, Stone::Black);
        assert_eq!(map.label(Pos::new(3, 3)), StabilityLabel::Indifferent);
        assert_eq!(map.tally(), 1);
    }

    #[test]
    fn test_l_shape_patterns() {
        use super::StabilityLabel::{Indifferent as I, Stable as S, Unassigned as U};
        assert!(is_l_stable(&[S, S, S, S, U, U, U, U]));
        assert!(is_l_stable(&[U, U, U, U, S, S, S, S]));
        assert!(is_l_stable(&[S, S, U, S, U, S, U, U]));
        assert!(is_l_stable(&[U, U, S, U, S, U, S, S]));
        // Edge triple without a center
        assert!(!is_l_stable(&[S, S, S, I, I, U, U, U]));
        // Centers without a full edge
        assert!(!is_l_stable(&[S, U, S, S, S, U, U, U]));
    }
}
