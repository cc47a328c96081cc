//! Heuristic evaluation function for Othello positions
//!
//! Four percentage-scale sub-scores combined with fixed weights:
//! - Coin parity (disc counts)
//! - Mobility (legal move counts)
//! - Stability (see [`super::stability`])
//! - Corner control
//!
//! All scores are from the agent's own perspective (`GameState::own_color`),
//! whichever side is to move.

use crate::board::{GameState, Stone, CORNERS};
use crate::rules::{count_legal_moves, Move};

use super::stability::stability_count;

/// Weights of the four sub-scores
pub struct EvalWeights;

impl EvalWeights {
    pub const COIN: f64 = 20.0;
    pub const MOBILITY: f64 = 5.0;
    pub const STABILITY: f64 = 1.0;
    pub const CORNER: f64 = 40.0;
}

/// Evaluate `state` for the agent.
///
/// `own_moves` are the agent's legal moves in this position, already
/// generated by the caller. Only meaningful for ordering siblings.
#[must_use]
pub fn evaluate(state: &GameState, own_moves: &[Move]) -> f64 {
    EvalWeights::COIN * coin_score(state)
        + EvalWeights::MOBILITY * mobility_score(state, own_moves.len())
        + EvalWeights::STABILITY * stability_score(state)
        + EvalWeights::CORNER * corner_score(state)
}

/// Disc parity, integer percentage of the disc difference
pub fn coin_score(state: &GameState) -> f64 {
    let own = i32::from(state.count(state.own_color));
    let opp = i32::from(state.count(state.opponent_color()));
    percent_diff(own, opp)
}

/// Legal-move parity; `own_moves` is the agent's move count
pub fn mobility_score(state: &GameState, own_moves: usize) -> f64 {
    let opp_moves = count_legal_moves(&state.board, state.opponent_color());
    let (own, opp) = (own_moves as f64, opp_moves as f64);
    if own + opp == 0.0 {
        return 0.0;
    }
    100.0 * (own - opp) / (own + opp)
}

/// Stability parity from the classifier tallies
pub fn stability_score(state: &GameState) -> f64 {
    let own = stability_count(&state.board, state.own_color);
    let opp = stability_count(&state.board, state.opponent_color());
    percent_diff(own, opp)
}

/// Corner control: integer share of corner credit going to the agent.
///
/// Occupied corners credit their owner. For an empty corner, each neighbor
/// holding the opponent's color credits the agent and every other neighbor
/// (the agent's or empty) credits the opponent.
// NOTE: an opponent disc next to an empty corner counts for the agent, not against it
pub fn corner_score(state: &GameState) -> f64 {
    let own_color = state.own_color;
    let opp_color = state.opponent_color();
    let mut own = 0i32;
    let mut opp = 0i32;

    for corner in CORNERS {
        match state.board.get(corner) {
            Stone::Empty => {
                for neighbor in corner.neighbors() {
                    if state.board.get(neighbor) == opp_color {
                        own += 1;
                    } else {
                        opp += 1;
                    }
                }
            }
            s if s == own_color => own += 1,
            _ => opp += 1,
        }
    }

    if own + opp == 0 {
        return 0.0;
    }
    f64::from(100 * own / (own + opp))
}

/// `100 * (a - b) / (a + b)` in integer arithmetic, 0 when the sum is 0
#[inline]
fn percent_diff(a: i32, b: i32) -> f64 {
    if a + b == 0 {
        return 0.0;
    }
    f64::from(100 * (a - b) / (a + b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos};
    use crate::rules::legal_moves;

    fn state_with(stones: &[(u8, u8, Stone)], own: Stone) -> GameState {
        let mut board = Board::empty();
        for &(r, c, s) in stones {
            board.place_stone(Pos::new(r, c), s);
        }
        GameState::from_board(board, own, 2)
    }

    #[test]
    fn test_initial_position_is_balanced() {
        let state = GameState::new(Stone::White, 2);
        let moves = legal_moves(&state, Stone::White);
        assert_eq!(coin_score(&state), 0.0);
        assert_eq!(mobility_score(&state, moves.len()), 0.0);
        assert_eq!(stability_score(&state), 0.0);
        assert_eq!(corner_score(&state), 0.0);
        assert_eq!(evaluate(&state, &moves), 0.0);
    }

    #[test]
    fn test_coin_score_truncates() {
        // 2 own vs 1 opp: 100 * 1 / 3 = 33
        let state = state_with(
            &[(0, 0, Stone::Black), (0, 1, Stone::Black), (5, 5, Stone::White)],
            Stone::Black,
        );
        assert_eq!(coin_score(&state), 33.0);
        let flipped = GameState { own_color: Stone::White, ..state };
        assert_eq!(coin_score(&flipped), -33.0);
    }

    #[test]
    fn test_coin_score_empty_board() {
        let state = GameState::from_board(Board::empty(), Stone::Black, 2);
        assert_eq!(coin_score(&state), 0.0);
    }

    #[test]
    fn test_mobility_score() {
        let state = GameState::new(Stone::Black, 2);
        // Pretend the agent had 12 moves against the opponent's 4
        assert_eq!(mobility_score(&state, 12), 50.0);
        assert_eq!(mobility_score(&state, 0), -100.0);

        let stuck = state_with(&[(0, 0, Stone::Black)], Stone::Black);
        assert_eq!(mobility_score(&stuck, 0), 0.0);
    }

    #[test]
    fn test_corner_owned() {
        // One corner owned, three empty corners with empty neighbors (9 credits to the opponent)
        let state = state_with(&[(0, 0, Stone::Black)], Stone::Black);
        assert_eq!(corner_score(&state), 10.0);

        let other_side = GameState { own_color: Stone::White, ..state };
        assert_eq!(corner_score(&other_side), 0.0);
    }

    #[test]
    fn test_corner_opponent_neighbor_credits_agent() {
        // White on B1 next to the empty A1 corner credits Black (the agent)
        let state = state_with(&[(0, 1, Stone::White)], Stone::Black);
        // own = 1, opp = 2 (A1's other neighbors) + 9 (other corners) => 100 / 12
        assert_eq!(corner_score(&state), 8.0);
    }

    #[test]
    fn test_sub_scores_bounded() {
        let state = state_with(
            &[
                (0, 0, Stone::Black),
                (0, 7, Stone::Black),
                (7, 0, Stone::Black),
                (7, 7, Stone::Black),
                (3, 3, Stone::White),
            ],
            Stone::Black,
        );
        let moves = legal_moves(&state, Stone::Black);
        for score in [
            coin_score(&state),
            mobility_score(&state, moves.len()),
            stability_score(&state),
            corner_score(&state),
        ] {
            assert!((-100.0..=100.0).contains(&score), "{score}");
        }
        assert_eq!(corner_score(&state), 100.0);
    }

    #[test]
    fn test_weighted_sum() {
        let state = state_with(&[(0, 0, Stone::Black)], Stone::Black);
        let moves = legal_moves(&state, Stone::Black);
        let expected = 20.0 * coin_score(&state)
            + 5.0 * mobility_score(&state, moves.len())
            + stability_score(&state)
            + 40.0 * corner_score(&state);
        assert_eq!(evaluate(&state, &moves), expected);
        // 20*100 + 5*0 + 1*100 + 40*10
        assert_eq!(expected, 2500.0);
    }
}
