//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Outcome is computed in one
//! place: a complete line wins, otherwise a full board is a draw.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome derived from a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No complete line and at least one empty square.
    InProgress,
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The three positions of the completed line.
        line: [Position; 3],
    },
    /// Board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True for a win or a draw.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won { mark, .. } => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Computes the outcome of a board snapshot.
///
/// Lines are checked in [`LINES`] order and the first complete one decides
/// the winner, even when several lines are complete.
#[instrument(skip(board))]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        return Outcome::Won { mark, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board_from(cells: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (i, c) in cells.chars().enumerate() {
            squares[i] = match c {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_top_row_win() {
        let outcome = compute_outcome(&board_from("XXX......"));
        assert_eq!(
            outcome,
            Outcome::Won {
                mark: Mark::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(compute_outcome(&board_from("XOXXOOOXX")), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_square_beats_draw() {
        // Full board where X completes the anti-diagonal
        let outcome = compute_outcome(&board_from("XOXOXOXOO"));
        assert_eq!(outcome.winner(), Some(Mark::X));
    }

    #[test]
    fn test_first_declared_line_wins() {
        // Rows 0 and 1 both complete; row 0 is declared first
        let outcome = compute_outcome(&board_from("OOOXXX..."));
        assert_eq!(outcome.winner(), Some(Mark::O));
        assert_eq!(
            outcome.line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_partial_board_in_progress() {
        let outcome = compute_outcome(&board_from("XO..X...."));
        assert_eq!(outcome, Outcome::InProgress);
        assert!(!outcome.is_over());
    }
}
