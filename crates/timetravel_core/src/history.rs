//! History entries and move-list ordering.

use super::{Board, Move};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One history entry: a board snapshot and the move that produced it.
///
/// The initial entry has no move and reports coordinates (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Snapshot after the move.
    board: Board,
    /// Move that produced the snapshot.
    placed: Option<Move>,
}

impl MoveRecord {
    /// The empty-board entry every history starts with.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// Entry for a snapshot produced by `placed`.
    pub fn new(board: Board, placed: Move) -> Self {
        Self {
            board,
            placed: Some(placed),
        }
    }

    /// Column of the placed cell (0 for the initial entry).
    pub fn column(&self) -> u8 {
        self.placed.map_or(0, |mv| mv.position.column())
    }

    /// Row of the placed cell (0 for the initial entry).
    pub fn row(&self) -> u8 {
        self.placed.map_or(0, |mv| mv.position.row())
    }
}

/// Order in which the move list is presented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Game start first.
    #[default]
    #[display("Asc")]
    Ascending,
    /// Latest move first.
    #[display("Desc")]
    Descending,
}

impl DisplayOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_initial_record_reports_origin() {
        let record = MoveRecord::initial();
        assert_eq!((record.column(), record.row()), (0, 0));
        assert!(record.placed().is_none());
        assert_eq!(record.board(), &Board::new());
    }

    #[test]
    fn test_record_coordinates_come_from_move() {
        let record = MoveRecord::new(Board::new(), Move::new(Mark::O, Position::MiddleRight));
        assert_eq!((record.column(), record.row()), (2, 1));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let order = DisplayOrder::default();
        assert_eq!(order.toggle(), DisplayOrder::Descending);
        assert_eq!(order.toggle().toggle(), order);
    }
}
