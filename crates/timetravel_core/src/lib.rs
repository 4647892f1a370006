//! Tic-tac-toe game state with move history and time travel.
//!
//! [`GameState`] keeps every board snapshot from game start to the latest
//! move, plus the step currently being viewed. Any earlier step can be
//! viewed with [`GameState::jump_to`]; making a move from there discards
//! the later snapshots and continues from the viewed one.
//!
//! # Example
//!
//! ```
//! use timetravel_core::{GameState, Mark, Position, Status};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::Center).unwrap();
//! game.apply_move(Position::TopLeft).unwrap();
//! assert_eq!(game.status(), Status::Next(Mark::X));
//!
//! // Go back one move and play somewhere else instead
//! game.jump_to(1).unwrap();
//! game.apply_move(Position::BottomRight).unwrap();
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
mod position;
mod types;
mod view;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{JumpError, Move, MoveError};
pub use game::GameState;
pub use history::{DisplayOrder, MoveRecord};
pub use position::Position;
pub use rules::{Outcome, compute_outcome};
pub use types::{Board, Mark, Square};
pub use view::{GameView, MoveListEntry, Status};
