//! Non-interactive replay: apply moves, then print the resulting game.

use anyhow::{Result, anyhow};
use timetravel_core::{DisplayOrder, GameState, JumpError, Position};
use tracing::{info, instrument, warn};

/// Parses replay arguments into positions.
///
/// # Errors
///
/// Fails on the first argument that is neither an index 0-8 nor a label.
pub fn parse_cells(cells: &[String]) -> Result<Vec<Position>> {
    cells
        .iter()
        .map(|cell| {
            Position::from_label_or_number(cell)
                .ok_or_else(|| anyhow!("Invalid cell '{}': expected 0-8 or a position label", cell))
        })
        .collect()
}

/// Plays `positions` in order on a fresh game, then optionally jumps.
///
/// Rejected moves are skipped and logged, matching the interactive game
/// where illegal clicks do nothing.
///
/// # Errors
///
/// Returns [`JumpError`] if `jump` is past the end of the history.
#[instrument(skip(positions), fields(moves = positions.len()))]
pub fn replay(
    positions: &[Position],
    jump: Option<usize>,
    order: DisplayOrder,
) -> Result<GameState, JumpError> {
    let mut game = GameState::with_order(order);
    for &position in positions {
        if let Err(e) = game.apply_move(position) {
            warn!(%position, error = %e, "Skipping rejected move");
        }
    }
    if let Some(step) = jump {
        game.jump_to(step)?;
    }
    info!(steps = game.history().len(), current = game.current_step(), "Replay finished");
    Ok(game)
}

/// Renders board, status and move list as plain text.
pub fn render_text(game: &GameState, show_coordinates: bool) -> String {
    let mut out = String::new();
    out.push_str(&game.board().display());
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push_str("\n\n");
    out.push_str(&format!("Moves ({}):\n", game.display_order()));
    for entry in game.move_list() {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}", marker, entry.label()));
        let location = entry.location();
        if show_coordinates && !location.is_empty() {
            out.push_str(&format!("  ({})", location));
        }
        out.push('\n');
    }
    out
}
