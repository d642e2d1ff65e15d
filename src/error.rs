use crate::game::Cell;

/// Errors raised by the board rule checks.
///
/// Both variants signal caller misuse rather than recoverable game
/// conditions; the search and the driver never trigger them because they
/// only probe in-range coordinates with a concrete side.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("coordinates ({row}, {col}) are outside the board")]
    OutOfRange { row: usize, col: usize },

    #[error("cell state {0:?} is not a playable side")]
    UnrecognizedSide(Cell),
}

/// Errors that can occur while driving a self-play game.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("rule violation: {0}")]
    Rule(#[from] RuleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = RuleError::OutOfRange { row: 7, col: 0 };
        assert_eq!(err.to_string(), "coordinates (7, 0) are outside the board");
    }

    #[test]
    fn test_unrecognized_side_display() {
        let err = RuleError::UnrecognizedSide(Cell::Empty);
        assert_eq!(err.to_string(), "cell state Empty is not a playable side");
    }

    #[test]
    fn test_play_error_wraps_rule_error() {
        let err = PlayError::from(RuleError::OutOfRange { row: 0, col: 9 });
        assert_eq!(
            err.to_string(),
            "rule violation: coordinates (0, 9) are outside the board"
        );
    }
}
