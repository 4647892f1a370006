//! Monotonic snapshots invariant: each entry adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every snapshot equals its predecessor plus the recorded move.
///
/// Marks never disappear or change between consecutive snapshots, and the
/// recorded move's square was empty before it.
pub struct MonotonicSnapshotsInvariant;

impl Invariant<GameState> for MonotonicSnapshotsInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(mv) = *next.placed() else {
                return false;
            };
            if !prev.board().is_empty(mv.position) {
                return false;
            }
            let mut expected = *prev.board();
            expected.set(mv.position, Square::Occupied(mv.mark));
            expected == *next.board()
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly the recorded mark to its predecessor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, MoveRecord, Position};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            game.apply_move(pos).unwrap();
        }
        assert!(MonotonicSnapshotsInvariant::holds(&game));
    }

    #[test]
    fn test_erased_mark_violates() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        game.apply_move(Position::TopLeft).unwrap();

        // Drop X from the center in the last snapshot
        let mut board = *game.history[2].board();
        board.set(Position::Center, Square::Empty);
        game.history[2] = MoveRecord::new(board, Move::new(Mark::O, Position::TopLeft));

        assert!(!MonotonicSnapshotsInvariant::holds(&game));
    }

    #[test]
    fn test_record_without_move_violates() {
        let mut game = GameState::new();
        game.history.push(MoveRecord::initial());
        assert!(!MonotonicSnapshotsInvariant::holds(&game));
    }
}
