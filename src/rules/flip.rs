//! State transition: place a disc and flip every flanked run

use crate::board::{Board, GameState, Pos, Stone, BOARD_SIZE, DIRECTIONS};

use super::moves::Move;

/// Squares that `color` playing at `pos` would flip.
///
/// Directions are visited in raster order, squares within a ray nearest
/// first. A ray contributes only when its run of opponent discs ends on a
/// `color` disc; running into an empty square or the edge discards it.
pub fn flipped_positions(board: &Board, pos: Pos, color: Stone) -> Vec<Pos> {
    let opponent = color.opponent();
    let mut flipped = Vec::new();

    for dir in DIRECTIONS {
        let mut iters = 0;
        let mut flank_found = false;
        for k in 1..BOARD_SIZE as i32 {
            let Some(next) = pos.step(dir, k) else {
                break;
            };
            let cell = board.get(next);
            if cell == color {
                flank_found = true;
                break;
            }
            if cell != opponent {
                break;
            }
            iters += 1;
        }
        if flank_found {
            flipped.extend((1..=iters).filter_map(|k| pos.step(dir, k)));
        }
    }

    flipped
}

/// Apply `mov` for `color`, returning the successor state.
///
/// The input is untouched; the result depends only on the arguments.
#[must_use]
pub fn perform_move(state: &GameState, mov: Move, color: Stone) -> GameState {
    let mut next = *state;
    let flipped = flipped_positions(&state.board, mov.pos, color);

    next.place(mov.pos, color);
    for pos in flipped {
        next.flip(pos);
    }

    debug_assert!(next.is_consistent());
    next
}
