//! Tests for the non-interactive replay path.

use timetravel_toe::{DisplayOrder, Mark, Outcome, Status, parse_cells, render_text, replay};

fn cells(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_replay_to_win() {
    let positions = parse_cells(&cells(&["0", "3", "top-center", "4", "2"])).unwrap();
    let game = replay(&positions, None, DisplayOrder::Ascending).unwrap();

    assert_eq!(game.status(), Status::Winner(Mark::X));
    assert!(matches!(game.outcome(), Outcome::Won { mark: Mark::X, .. }));

    let text = render_text(&game, true);
    assert!(text.starts_with("X|X|X\n"));
    assert!(text.contains("Winner: X"));
    assert!(text.ends_with("> Go to move #5  (2, 0)\n"));
}

#[test]
fn test_replay_moves_after_win_are_skipped() {
    let positions = parse_cells(&cells(&["0", "3", "1", "4", "2", "8"])).unwrap();
    let game = replay(&positions, None, DisplayOrder::Ascending).unwrap();
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_replay_jump_shows_earlier_step() {
    let positions = parse_cells(&cells(&["4", "0", "8"])).unwrap();
    let game = replay(&positions, Some(1), DisplayOrder::Ascending).unwrap();

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_step(), 1);
    assert_eq!(game.status(), Status::Next(Mark::O));
    assert!(render_text(&game, true).contains("> Go to move #1  (1, 1)"));
}

#[test]
fn test_replay_draw() {
    let positions = parse_cells(&cells(&["0", "1", "2", "4", "3", "5", "7", "6", "8"])).unwrap();
    let game = replay(&positions, None, DisplayOrder::Descending).unwrap();

    let text = render_text(&game, false);
    assert!(text.contains("Draw - No Winners."));
    assert!(text.contains("Moves (Desc):\n> Go to move #9\n"));
}
