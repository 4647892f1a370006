//! Derived view state for presentation layers.
//!
//! Everything here is computed from a [`GameState`]; renderers read it and
//! never track highlighting or selection on their own.

use super::game::GameState;
use super::history::DisplayOrder;
use super::rules::Outcome;
use super::{Board, Mark, Position};
use serde::Serialize;

/// Status line for the viewed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// Game continues; this mark moves next.
    #[display("Next player: {}", _0)]
    Next(Mark),
    /// This mark completed a line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Board full with no line.
    #[display("Draw - No Winners.")]
    Draw,
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveListEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// Column of the cell placed at this step.
    pub column: u8,
    /// Row of the cell placed at this step.
    pub row: u8,
    /// True for the game-start entry.
    pub is_first_move: bool,
    /// True for the entry currently viewed.
    pub is_current: bool,
}

impl MoveListEntry {
    /// Button text for this entry.
    pub fn label(&self) -> String {
        if self.is_first_move {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }

    /// `"col, row"`, empty for game start.
    pub fn location(&self) -> String {
        if self.is_first_move {
            String::new()
        } else {
            format!("{}, {}", self.column, self.row)
        }
    }
}

/// Serializable snapshot of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Viewed snapshot.
    pub board: Board,
    /// Viewed step index.
    pub current_step: usize,
    /// Status of the viewed snapshot.
    pub status: Status,
    /// Squares to highlight when the viewed snapshot is won.
    pub winning_line: Option<[Position; 3]>,
    /// Move list order.
    pub display_order: DisplayOrder,
    /// Move list in display order.
    pub moves: Vec<MoveListEntry>,
}

impl GameState {
    /// Status of the viewed snapshot.
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::InProgress => Status::Next(self.next_player()),
            Outcome::Won { mark, .. } => Status::Winner(mark),
            Outcome::Draw => Status::Draw,
        }
    }

    /// Move list in the current display order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let mut entries: Vec<MoveListEntry> = self
            .history()
            .iter()
            .enumerate()
            .map(|(step, record)| MoveListEntry {
                step,
                column: record.column(),
                row: record.row(),
                is_first_move: step == 0,
                is_current: step == self.current_step(),
            })
            .collect();

        if self.display_order() == DisplayOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Line to highlight when the viewed snapshot is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.outcome().line()
    }

    /// True if `position` is part of the winning line.
    pub fn is_winning_square(&self, position: Position) -> bool {
        self.winning_line()
            .is_some_and(|line| line.contains(&position))
    }

    /// Collects the full derived view.
    pub fn view(&self) -> GameView {
        GameView {
            board: *self.board(),
            current_step: self.current_step(),
            status: self.status(),
            winning_line: self.winning_line(),
            display_order: self.display_order(),
            moves: self.move_list(),
        }
    }
}
