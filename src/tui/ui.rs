//! Stateless UI rendering.
//!
//! Everything drawn here is read from [`App`] and the game's derived view;
//! highlighting is never stored anywhere else.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use timetravel_core::{Mark, MoveListEntry, Position, Square, Status};

use super::app::{App, Focus};

const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
];

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + info
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Time Travel Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, main[0], app);
    draw_info(frame, main[1], app);

    let help = Paragraph::new(
        "Arrows/1-9 move | Enter place/jump | Tab focus | [ ] step | o order | r restart | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = focus_style(app.focus() == Focus::Board);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("Board (step {})", app.game().current_step()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], app, &ROWS[0]);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, &ROWS[1]);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, &ROWS[2]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, positions: &[Position; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, positions[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], app, positions[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], app, positions[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();

    let (symbol, mut style) = match game.board().get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if game.is_winning_square(pos) {
        style = style.bg(Color::Green);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the symbol in the 3-line cell
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let game = app.game();
    let status_color = match game.status() {
        Status::Next(_) => Color::Yellow,
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
    };
    let status = Paragraph::new(game.status().to_string())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[0]);

    let items: Vec<ListItem> = game
        .move_list()
        .iter()
        .map(|entry| move_item(app, entry))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(app.focus() == Focus::History))
            .title(format!("History ({})", game.display_order())),
    );
    frame.render_widget(list, chunks[1]);
}

fn move_item<'a>(app: &App, entry: &MoveListEntry) -> ListItem<'a> {
    let mut style = Style::default();
    if entry.is_current {
        style = style.add_modifier(Modifier::BOLD);
    }
    if app.focus() == Focus::History && entry.step == app.selected_step() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let mut spans = vec![Span::styled(entry.label(), style)];
    let location = entry.location();
    if app.show_coordinates() && !location.is_empty() {
        spans.push(Span::styled(
            format!("  {}", location),
            Style::default().fg(Color::DarkGray),
        ));
    }
    ListItem::new(Line::from(spans))
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_history() {
        let mut app = App::new(&AppConfig::default());
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let screen = rendered(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Go to move #5"));
        assert!(screen.contains("History (Asc)"));
    }
}
