use super::board::{Board, Cell, SIZE};
use super::side::Side;

/// Final standing of a position, decided by disc count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

/// Disc-count margin from Black's point of view.
///
/// The margin is scaled by the board area rather than being a plain
/// difference: the leader's score is the full area minus the trailer's
/// disc count, so winning with fewer enemy discs on the board is worth
/// more. A tied count is exactly zero.
pub fn score(board: &Board) -> i32 {
    let mut black = 0;
    let mut white = 0;
    for row in 0..SIZE {
        for col in 0..SIZE {
            match board.get(row, col) {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty => {}
            }
        }
    }

    let area = (SIZE * SIZE) as i32;
    if black == white {
        0
    } else if black > white {
        area - white
    } else {
        black - area
    }
}

/// [`score`] seen from `side`: positive means `side` is ahead.
pub fn score_for(board: &Board, side: Side) -> i32 {
    match side {
        Side::Black => score(board),
        Side::White => -score(board),
    }
}

/// Classify a position by its disc-count margin.
pub fn outcome(board: &Board) -> GameOutcome {
    let margin = score(board);
    if margin > 0 {
        GameOutcome::Winner(Side::Black)
    } else if margin < 0 {
        GameOutcome::Winner(Side::White)
    } else {
        GameOutcome::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_filled_with(cell: Cell) -> Board {
        Board::from_cells([[cell; SIZE]; SIZE])
    }

    fn board_with(discs: &[(usize, usize, Cell)]) -> Board {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for &(row, col, cell) in discs {
            cells[row][col] = cell;
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_balanced_boards_score_zero() {
        assert_eq!(score(&board_filled_with(Cell::Empty)), 0);
        assert_eq!(score(&Board::new()), 0);
    }

    #[test]
    fn test_score_extremes() {
        assert_eq!(score(&board_filled_with(Cell::Black)), 25);
        assert_eq!(score(&board_filled_with(Cell::White)), -25);
    }

    #[test]
    fn test_score_is_area_scaled() {
        // Three black, one white: 25 - 1, not 3 - 1.
        let board = board_with(&[
            (0, 0, Cell::Black),
            (0, 2, Cell::Black),
            (0, 4, Cell::Black),
            (4, 4, Cell::White),
        ]);
        assert_eq!(score(&board), 24);

        // One black, two white: 1 - 25.
        let board = board_with(&[
            (0, 0, Cell::Black),
            (4, 0, Cell::White),
            (4, 4, Cell::White),
        ]);
        assert_eq!(score(&board), -24);
    }

    #[test]
    fn test_score_for_negates_for_white() {
        let board = board_with(&[(0, 0, Cell::Black), (0, 1, Cell::Black)]);
        assert_eq!(score_for(&board, Side::Black), 25);
        assert_eq!(score_for(&board, Side::White), -25);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(outcome(&Board::new()), GameOutcome::Draw);
        assert_eq!(
            outcome(&board_filled_with(Cell::Black)),
            GameOutcome::Winner(Side::Black)
        );
        assert_eq!(
            outcome(&board_with(&[(0, 0, Cell::White)])),
            GameOutcome::Winner(Side::White)
        );
    }
}
