//! Exhaustive negamax search with alpha-beta pruning.
//!
//! The tree is searched to the very end of the game, so the value of a
//! position is its exact final margin under best play. A side with no
//! placement passes by recursing for the opponent with the window negated;
//! two passes in a row end the game and the position is scored as it
//! stands.

use crate::game::{score_for, Board, Hand, Side, SIZE};

/// Upper bound of the score range; every value returned by the search
/// lies in `[-MAX_SCORE, MAX_SCORE]`.
pub const MAX_SCORE: i32 = (SIZE * SIZE) as i32;

/// Value of a searched position together with the hand that achieves it.
///
/// `hand` is `None` when the side to move had no legal placement, which
/// covers both pass nodes and terminal double-pass positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub value: i32,
    pub hand: Option<Hand>,
}

/// Search with the full score window, as the driver does each turn.
pub fn best_hand(board: &Board, side: Side) -> SearchOutcome {
    alpha_beta(board, -MAX_SCORE, MAX_SCORE, side, false)
}

/// Negamax alpha-beta over the remaining game.
///
/// `passed` marks that the opponent had no placement immediately before
/// this node; when the current side is also stuck the game is over.
pub fn alpha_beta(
    board: &Board,
    mut alpha: i32,
    beta: i32,
    side: Side,
    passed: bool,
) -> SearchOutcome {
    if !board.has_any_legal_move(side) {
        if passed {
            return SearchOutcome {
                value: score_for(board, side),
                hand: None,
            };
        }
        let reply = alpha_beta(board, -beta, -alpha, side.flip(), true);
        return SearchOutcome {
            value: -reply.value,
            hand: None,
        };
    }

    let mut best = -MAX_SCORE;
    let mut hand = Hand { row: 0, col: 0 };
    for row in 0..SIZE {
        for col in 0..SIZE {
            let next = match board.apply(row, col, side) {
                Ok(Some(next)) => next,
                _ => continue,
            };
            let reply = alpha_beta(&next, -beta, -alpha, side.flip(), false);
            // Strict comparison keeps the first hand in row-major order
            // when several score the same.
            if -reply.value > best {
                best = -reply.value;
                hand = Hand { row, col };
            }
            if best >= beta {
                return SearchOutcome {
                    value: best,
                    hand: Some(hand),
                };
            }
            alpha = alpha.max(best);
        }
    }

    SearchOutcome {
        value: best,
        hand: Some(hand),
    }
}
