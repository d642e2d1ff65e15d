//! Self-play driver: alternates exhaustive searches for both sides until
//! neither can move, writing the board after every turn.

use std::io::Write;

use crate::error::PlayError;
use crate::game::{outcome, Board, GameOutcome, Side};
use crate::search::best_hand;

/// Record of one completed self-play game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Every position reached, starting with the initial one. Consecutive
    /// entries differ by exactly the one placed disc.
    pub boards: Vec<Board>,
    /// Final standing by disc count.
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Number of discs placed over the course of the game.
    pub fn moves_played(&self) -> usize {
        self.boards.len() - 1
    }
}

/// Play one full game from the starting position, both sides driven by the
/// search, writing each position to `out` followed by a blank line.
///
/// A turn where the side to move has no placement is a pass: nothing is
/// applied and the other side moves next. The game ends when both sides
/// are stuck, and the final position is written once more.
pub fn play_game<W: Write>(out: &mut W) -> Result<GameRecord, PlayError> {
    let mut board = Board::new();
    let mut side = Side::Black;
    let mut boards = vec![board];

    while !board.is_gameover(side) {
        writeln!(out, "{board}")?;
        writeln!(out)?;

        let result = best_hand(&board, side);
        if let Some(hand) = result.hand {
            board = board
                .apply(hand.row, hand.col, side)?
                .expect("search only returns legal hands");
            boards.push(board);
        }
        side = side.flip();
    }
    writeln!(out, "{board}")?;
    writeln!(out)?;

    Ok(GameRecord {
        boards,
        outcome: outcome(&board),
    })
}
