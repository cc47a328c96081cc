//! Move legality for Othello
//!
//! A move is legal on an empty square when, in at least one direction, a
//! contiguous run of opponent discs is closed off by one of the mover's discs.

use std::fmt;

use crate::board::{Board, Direction, GameState, Pos, Stone};

/// Candidate move: a target square plus a score used only during search.
///
/// Equality is by position; the score is scratch data.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub pos: Pos,
    pub score: f64,
}

impl Move {
    /// Square the placeholder move points at (`D3`)
    pub const PLACEHOLDER_POS: Pos = Pos { row: 2, col: 3 };

    #[inline]
    pub fn new(pos: Pos) -> Self {
        Self { pos, score: 0.0 }
    }

    /// Placeholder reported when no candidate was scored before the deadline.
    ///
    /// Scored at negative infinity so any completed candidate beats it.
    #[inline]
    pub fn placeholder() -> Self {
        Self {
            pos: Self::PLACEHOLDER_POS,
            score: f64::NEG_INFINITY,
        }
    }

    #[inline]
    pub fn with_score(self, score: f64) -> Self {
        Self { score, ..self }
    }

    /// Two-character coordinate, column letter then row digit
    pub fn serialize(&self) -> String {
        self.pos.to_coord()
    }

    /// Read a coordinate written by [`serialize`](Self::serialize)
    pub fn parse(text: &str) -> Option<Self> {
        Pos::from_coord(text).map(Self::new)
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Check whether `color` may play at `pos`.
///
/// Some neighbor must hold the opponent and the ray through it must end on
/// one of `color`'s discs.
pub fn is_legal(board: &Board, pos: Pos, color: Stone) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    let opponent = color.opponent();
    pos.neighbors().any(|n| {
        board.get(n) == opponent
            && board.scan_for(color, opponent, pos, Direction::between(pos, n))
    })
}

/// All legal moves for `color`, each square once, in raster order.
///
/// The order is the tie-break order of the root search.
pub fn legal_moves(state: &GameState, color: Stone) -> Vec<Move> {
    legal_positions(&state.board, color).map(Move::new).collect()
}

/// Number of legal moves for `color`
pub fn count_legal_moves(board: &Board, color: Stone) -> usize {
    legal_positions(board, color).count()
}

/// True when `color` has at least one legal move
pub fn has_legal_move(board: &Board, color: Stone) -> bool {
    legal_positions(board, color).next().is_some()
}

fn legal_positions(board: &Board, color: Stone) -> impl Iterator<Item = Pos> + '_ {
    Pos::all().filter(move |&pos| is_legal(board, pos, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves_black() {
        let state = GameState::new(Stone::White, 2);
        let moves: Vec<Pos> = legal_moves(&state, Stone::Black)
            .iter()
            .map(|m| m.pos)
            .collect();
        assert_eq!(
            moves,
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
    }

    #[test]
    fn test_opening_moves_white() {
        let state = GameState::new(Stone::White, 2);
        let moves: Vec<String> = legal_moves(&state, Stone::White)
            .iter()
            .map(Move::serialize)
            .collect();
        assert_eq!(moves, vec!["E3", "F4", "C5", "D6"]);
    }

    #[test]
    fn test_occupied_square_illegal() {
        let board = Board::initial();
        assert!(!is_legal(&board, Pos::new(3, 3), Stone::Black));
    }

    #[test]
    fn test_adjacent_without_flank_illegal() {
        let board = Board::initial();
        // C3 touches D4 (White) diagonally but the ray continues into E5 (White) then empty
        assert!(!is_legal(&board, Pos::new(2, 2), Stone::Black));
    }

    #[test]
    fn test_square_listed_once_with_multiple_flanks() {
        let mut board = Board::empty();
        // Black at C2 would flank B2 against A2 and C3 against C4
        board.place_stone(Pos::new(1, 0), Stone::Black);
        board.place_stone(Pos::new(1, 1), Stone::White);
        board.place_stone(Pos::new(3, 2), Stone::Black);
        board.place_stone(Pos::new(2, 2), Stone::White);
        let state = GameState::from_board(board, Stone::Black, 2);

        let moves = legal_moves(&state, Stone::Black);
        let at_c2 = moves.iter().filter(|m| m.pos == Pos::new(1, 2)).count();
        assert_eq!(at_c2, 1);
    }

    #[test]
    fn test_no_moves_on_one_color_board() {
        let mut board = Board::empty();
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(0, 1), Stone::Black);
        assert!(!has_legal_move(&board, Stone::White));
        assert!(!has_legal_move(&board, Stone::Black));
        assert_eq!(count_legal_moves(&board, Stone::White), 0);
    }

    #[test]
    fn test_move_equality_ignores_score() {
        let a = Move::new(Pos::new(4, 5)).with_score(10.0);
        let b = Move::new(Pos::new(4, 5)).with_score(-3.5);
        assert_eq!(a, b);
        assert_ne!(a, Move::new(Pos::new(5, 4)));
    }

    #[test]
    fn test_parse_reads_serialized_moves() {
        for pos in Pos::all() {
            let m = Move::new(pos);
            assert_eq!(Move::parse(&m.serialize()), Some(m));
        }
        assert_eq!(Move::parse("D3").map(|m| m.pos), Some(Pos::new(2, 3)));
        assert_eq!(Move::parse("H8").map(|m| m.pos), Some(Pos::new(7, 7)));
        for bad in ["", "D", "d3", "I1", "A0", "A9", "D33", "3D"] {
            assert_eq!(Move::parse(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn test_placeholder_move() {
        let m = Move::default();
        assert_eq!(m.pos, Pos::new(2, 3));
        assert_eq!(m.serialize(), "D3");
        assert!(m.score.is_infinite() && m.score < 0.0);
    }
}
