//! Tests for the presentation-facing game view.

use tictactoe_core::{CellIndex, GameStatus, GameView, Move, MoveError, Player};

fn mov(player: Player, index: usize) -> Move {
    Move::new(player, CellIndex::new(index).unwrap())
}

fn play(view: &GameView, index: usize) -> GameView {
    let player = view.to_move().expect("game should be in progress");
    view.make_move(mov(player, index)).expect("legal move")
}

#[test]
fn test_fresh_view() {
    let view = GameView::new();
    assert_eq!(view.to_move(), Some(Player::X));
    assert_eq!(view.status(), GameStatus::InProgress);
    assert!(!view.is_over());
    assert_eq!(view.winner(), None);
    assert_eq!(view.valid_moves().len(), 9);
    assert_eq!(view.status_line(), "In progress. Player X to move.");
}

#[test]
fn test_rejected_move_leaves_view_unchanged() {
    let view = play(&GameView::new(), 0);
    let before = view.clone();

    let result = view.make_move(mov(Player::O, 0));
    assert!(matches!(result, Err(MoveError::CellOccupied(_))));
    assert_eq!(view, before);
}

#[test]
fn test_win_is_reported_and_terminal() {
    let mut view = GameView::new();
    for index in [0, 4, 1, 3, 2] {
        view = play(&view, index);
    }

    assert!(view.is_over());
    assert_eq!(view.status(), GameStatus::Won(Player::X));
    assert_eq!(view.winner(), Some(Player::X));
    assert_eq!(view.to_move(), None);
    assert!(view.valid_moves().is_empty());
    assert_eq!(view.status_line(), "Game over. Player X wins!");

    // Any further tap is rejected and the view stays as it was.
    let before = view.clone();
    assert_eq!(view.make_move(mov(Player::O, 8)), Err(MoveError::GameOver));
    assert_eq!(view, before);
}

#[test]
fn test_draw_is_reported() {
    let mut view = GameView::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        view = play(&view, index);
    }

    assert!(view.is_over());
    assert_eq!(view.status(), GameStatus::Draw);
    assert_eq!(view.winner(), None);
    assert_eq!(view.status_line(), "Game over. Draw!");
}

#[test]
fn test_reset_discards_the_game() {
    let mut view = GameView::new();
    for index in [0, 4, 1, 3, 2] {
        view = play(&view, index);
    }
    assert!(view.is_over());

    let fresh = view.reset();
    assert_eq!(fresh, GameView::new());
    assert_eq!(fresh.to_move(), Some(Player::X));
    assert!(fresh.history().is_empty());
}

#[test]
fn test_view_serializes_mid_game() {
    let view = play(&play(&GameView::new(), 4), 0);

    let json = serde_json::to_string(&view).expect("view serializes");
    let restored: GameView = serde_json::from_str(&json).expect("view deserializes");

    assert_eq!(restored, view);
    assert_eq!(restored.to_move(), Some(Player::X));
    assert_eq!(restored.history().len(), 2);
}

#[test]
fn test_malformed_cell_index_rejected_on_deserialize() {
    // A cell address outside 0-8 must not survive deserialization.
    assert!(serde_json::from_str::<CellIndex>("12").is_err());
    assert!(serde_json::from_str::<CellIndex>("8").is_ok());
}
