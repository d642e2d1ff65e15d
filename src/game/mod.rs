//! Core game rules: board representation, sides, placement legality, and
//! disc-count scoring.

mod board;
mod score;
mod side;

pub use board::{Board, Cell, Hand, SIZE};
pub use score::{outcome, score, score_for, GameOutcome};
pub use side::Side;
