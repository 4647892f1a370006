//! Current step invariant: the viewed step exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current_step` indexes an existing history entry.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step < game.history.len()
    }

    fn description() -> &'static str {
        "Current step is within history"
    }
}
