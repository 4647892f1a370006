//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use timetravel_core::{DisplayOrder, GameState, MoveListEntry, Position};
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};
use crate::AppConfig;

/// Pane receiving arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the history selection.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
///
/// Owns the game; a reset replaces it with a fresh one.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    initial_order: DisplayOrder,
    show_coordinates: bool,
}

impl App {
    /// Creates a new application from config.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: GameState::with_order(*config.initial_order()),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            initial_order: *config.initial_order(),
            show_coordinates: *config.show_coordinates(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Whether the move list shows coordinates.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected_step = self.game.current_step();
            }
            KeyCode::Char('o') => self.game.toggle_order(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('[') => {
                self.game.step_back();
                self.sync_selection();
            }
            KeyCode::Char(']') => {
                if let Err(e) = self.game.step_forward() {
                    debug!(error = %e, "Already at latest step");
                }
                self.sync_selection();
            }
            KeyCode::Home => self.jump(0),
            KeyCode::End => {
                self.game.jump_to_latest();
                self.sync_selection();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = digit_position(c) {
                    self.place(position);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump(self.selected_step),
            },
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, code),
                    Focus::History => self.move_selection(code),
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Replaces the game with a fresh one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::with_order(self.initial_order);
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected_step = 0;
    }

    fn place(&mut self, position: Position) {
        if let Err(e) = self.game.apply_move(position) {
            debug!(%position, error = %e, "Ignoring rejected move");
        }
        self.sync_selection();
    }

    fn jump(&mut self, step: usize) {
        if let Err(e) = self.game.jump_to(step) {
            debug!(error = %e, "Ignoring rejected jump");
        }
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        self.selected_step = self.game.current_step();
    }

    /// Moves the history selection one entry up or down the displayed list.
    fn move_selection(&mut self, code: KeyCode) {
        let entries: Vec<MoveListEntry> = self.game.move_list();
        let Some(idx) = entries.iter().position(|e| e.step == self.selected_step) else {
            self.sync_selection();
            return;
        };
        let idx = match code {
            KeyCode::Up => idx.saturating_sub(1),
            KeyCode::Down => (idx + 1).min(entries.len() - 1),
            _ => idx,
        };
        self.selected_step = entries[idx].step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use timetravel_core::{Mark, Square, Status};

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn test_digits_place_marks() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.game().board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(app.game().board().get(Position::TopLeft), Square::Occupied(Mark::O));
        assert_eq!(app.selected_step(), 2);
    }

    #[test]
    fn test_occupied_square_is_silent_noop() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let before = app.game().clone();
        assert_eq!(press(&mut app, KeyCode::Enter), AppAction::Continue);
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_cursor_then_place() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.game().board().get(Position::TopLeft), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_history_selection_and_jump() {
        let mut app = app();
        for c in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected_step(), 3);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_step(), 1);
        // Arrows alone don't travel
        assert_eq!(app.game().current_step(), 3);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().current_step(), 1);
        assert_eq!(app.game().status(), Status::Next(Mark::O));
    }

    #[test]
    fn test_history_selection_follows_display_order() {
        let mut app = app();
        for c in ['1', '5'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Tab);
        // Descending: step 2 is at the top, Down goes toward game start
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_step(), 1);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_step(), 2);
    }

    #[test]
    fn test_brackets_step_through_history() {
        let mut app = app();
        for c in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.game().current_step(), 1);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.game().current_step(), 2);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.game().current_step(), 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.game().current_step(), 3);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.game().current_step(), 3);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game(), &GameState::new());
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
    }
}
