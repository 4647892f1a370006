//! Game state with history and time-travel navigation.
//!
//! [`GameState`] owns the full sequence of board snapshots and the index
//! of the snapshot being viewed. Moves are always made from the viewed
//! snapshot; making one from an earlier step discards the later steps.

use super::action::{JumpError, Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::history::{DisplayOrder, MoveRecord};
use super::rules::{Outcome, compute_outcome};
use super::{Board, Mark, Position, Square};
use tracing::{debug, info, instrument};

/// Authoritative game state.
///
/// Invariants:
/// - history is never empty and starts with the empty board
/// - `current_step < history.len()`
/// - the next player follows `current_step` parity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) current_step: usize,
    display_order: DisplayOrder,
}

impl GameState {
    /// Creates a new game with a single empty-board entry.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(DisplayOrder::default())
    }

    /// Creates a new game listing moves in the given order.
    #[instrument]
    pub fn with_order(display_order: DisplayOrder) -> Self {
        Self {
            history: vec![MoveRecord::initial()],
            current_step: 0,
            display_order,
        }
    }

    /// Places the next player's mark at `position` on the viewed snapshot.
    ///
    /// History after the current step is discarded before the new
    /// snapshot is appended, and the current step moves to it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the viewed snapshot is won or drawn
    /// - [`MoveError::SquareOccupied`] if the square is taken
    ///
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(step = self.current_step, mark = %self.next_player()))]
    pub fn apply_move(&mut self, position: Position) -> Result<Move, MoveError> {
        let action = Move::new(self.next_player(), position);

        if let Err(e) = MoveContract::pre(self, &action) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut board = *self.board();
        board.set(position, Square::Occupied(action.mark));

        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(MoveRecord::new(board, action));
        self.current_step = self.history.len() - 1;

        #[cfg(debug_assertions)]
        self.check_post(before)?;

        info!(%action, discarded, step = self.current_step, "Move applied");
        Ok(action)
    }

    /// Verifies postconditions, rolling back to `before` on violation.
    #[cfg(debug_assertions)]
    fn check_post(&mut self, before: GameState) -> Result<(), MoveError> {
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }
        Ok(())
    }

    /// Places the next player's mark at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices past 8, otherwise as
    /// [`GameState::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, cell: usize) -> Result<Move, MoveError> {
        let position = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        self.apply_move(position)
    }

    /// Views the snapshot at `step` without touching history.
    ///
    /// # Errors
    ///
    /// [`JumpError::OutOfRange`] if `step` is past the latest entry.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            let err = JumpError::OutOfRange {
                step,
                len: self.history.len(),
            };
            debug!(error = %err, "Jump rejected");
            return Err(err);
        }
        self.current_step = step;
        debug!(step, next = %self.next_player(), "Jumped");
        Ok(())
    }

    /// Views the previous step. Stays put at game start.
    pub fn step_back(&mut self) {
        self.current_step = self.current_step.saturating_sub(1);
    }

    /// Views the next step.
    ///
    /// # Errors
    ///
    /// [`JumpError::OutOfRange`] when already at the latest step.
    pub fn step_forward(&mut self) -> Result<(), JumpError> {
        self.jump_to(self.current_step + 1)
    }

    /// Views the latest step.
    pub fn jump_to_latest(&mut self) {
        self.current_step = self.latest_step();
    }

    /// Flips the move-list order. History and current step are untouched.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.display_order = self.display_order.toggle();
        debug!(order = %self.display_order, "Order toggled");
    }

    /// Full history, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the viewed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Index of the newest snapshot.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// History entry at the current step.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.current_step]
    }

    /// Snapshot at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Mark that moves next from the viewed snapshot.
    pub fn next_player(&self) -> Mark {
        Mark::to_move_at(self.current_step)
    }

    /// Outcome of the viewed snapshot.
    pub fn outcome(&self) -> Outcome {
        compute_outcome(self.board())
    }

    /// True when the viewed snapshot is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Move-list order.
    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
    }

    /// Empty positions on the viewed snapshot, or none once it is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::valid_moves(self.board())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
