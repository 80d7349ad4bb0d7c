//! Tests for the headless replay driver and its command-line action syntax.

use tictactoe_timeline::cli::ReplayAction;
use tictactoe_timeline::{GameStatus, GameView, Mark, Transition, replay};

fn parse(args: &[&str]) -> Vec<tictactoe_timeline::Action> {
    args.iter()
        .map(|a| a.parse::<ReplayAction>().expect("valid action").0)
        .collect()
}

#[test]
fn test_replay_full_scenario() {
    let (game, transitions) = replay(&parse(&["0", "4", "1", "3", "2", "5", "@2"]));

    assert!(transitions[..5].iter().all(Transition::is_applied));
    assert!(!transitions[5].is_applied());
    assert_eq!(transitions[6], Transition::Jumped { step: 2 });

    let view = GameView::of(&game);
    assert_eq!(view.current_step, 2);
    assert_eq!(view.status_line, "Next player: X");
    assert_eq!(view.moves.len(), 6);
    assert_eq!(view.cells[0], Some(Mark::X));
    assert_eq!(view.cells[4], Some(Mark::O));
    assert_eq!(view.cells[1], None);
}

#[test]
fn test_replay_reports_winner() {
    let (game, _) = replay(&parse(&["2", "0", "4", "1", "6"]));
    let view = GameView::of(&game);
    assert_eq!(view.status, GameStatus::Won(Mark::X));
    assert_eq!(view.status_line, "Winner: X");
}

#[test]
fn test_rendered_text() {
    let (game, _) = replay(&parse(&["4", "0"]));
    let text = GameView::of(&game).render(&game);
    assert_eq!(
        text,
        "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9\n\nNext player: X\n  1. Go to game start\n  2. Go to move #1\n> 3. Go to move #2\n"
    );
}
