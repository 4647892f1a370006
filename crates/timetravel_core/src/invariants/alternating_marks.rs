//! Alternating marks invariant: X and O take turns, X first.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the move producing snapshot `k` is X for odd `k`, O for even.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, record)| {
                record
                    .placed()
                    .is_some_and(|mv| mv.mark == Mark::to_move_at(step - 1))
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
