//! History root invariant: history starts with the empty board.

use super::super::{GameState, MoveRecord};
use super::Invariant;

/// Invariant: history is non-empty and entry 0 is the initial empty board.
pub struct HistoryRootedInvariant;

impl Invariant<GameState> for HistoryRootedInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.first() == Some(&MoveRecord::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryRootedInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!HistoryRootedInvariant::holds(&game));
    }

    #[test]
    fn test_marked_root_violates() {
        let mut game = GameState::new();
        let mut board = *game.history[0].board();
        board.set(Position::Center, Square::Occupied(Mark::X));
        game.history[0] = MoveRecord::new(board, crate::Move::new(Mark::X, Position::Center));
        assert!(!HistoryRootedInvariant::holds(&game));
    }
}
