//! Game state tests - move pipeline, scoring, win/lose, undo/redo

use tui_2048p::core::{Board, GameState, RawGrid};
use tui_2048p::types::{Direction, GameAction, HistoryMode, PlayerStatus, Tile, BOARD_SIZE};

const E: i32 = -1;

fn game(raw: RawGrid) -> GameState {
    GameState::from_board(Board::from_raw(raw).expect("valid fixture"), 12345)
}

fn tile_count(state: &GameState) -> usize {
    BOARD_SIZE * BOARD_SIZE - state.board().empty_cells().len()
}

#[test]
fn test_new_game_has_two_tiles() {
    for seed in [1, 2, 3, 12345, u32::MAX] {
        let state = GameState::new(seed);
        assert_eq!(tile_count(&state), 2, "seed {}", seed);
        for &raw in state.board().to_raw().iter().flatten() {
            assert!(matches!(raw, -1 | 0 | 2 | 4), "unexpected tile {}", raw);
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let actions = [
        GameAction::SlideLeft,
        GameAction::SlideUp,
        GameAction::SlideRight,
        GameAction::SlideDown,
        GameAction::Undo,
        GameAction::SlideLeft,
    ];
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    for action in actions {
        a.apply_action(action);
        b.apply_action(action);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_lose_fixture() {
    let mut state = game([
        [4, 2, 4, 2],
        [8, 16, 128, 8],
        [512, 128, 1024, 32],
        [4, 8, 256, 128],
    ]);
    assert!(!state.is_slidable());
    assert!(!state.check_game_end());
    assert_eq!(state.status(), PlayerStatus::Lost);
}

#[test]
fn test_continue_fixture() {
    let mut state = game([
        [4, 2, 4, 2],
        [4, 16, 128, 8],
        [512, 128, 1024, 32],
        [4, 8, 256, 128],
    ]);
    assert!(state.is_slidable());
    assert!(state.check_game_end());
    assert_eq!(state.status(), PlayerStatus::Playing);
}

#[test]
fn test_special_tile_fixture() {
    let mut state = game([
        [E, 4, 2, 32],
        [E, 2, 0, 0],
        [E, E, 4, 32],
        [E, E, E, 4],
    ]);

    assert!(state.slide_right());
    assert_eq!(state.score(), 0);
    assert_eq!(
        state.board().to_raw(),
        [
            [E, 4, 2, 32],
            [E, E, 2, 1],
            [E, E, 4, 32],
            [E, E, E, 4],
        ]
    );

    assert_eq!(state.clear_ptile(), 72);
    assert_eq!(
        state.board().to_raw(),
        [
            [E, 4, 4, 64],
            [E, E, 4, E],
            [E, E, 8, 64],
            [E, E, E, 4],
        ]
    );
    assert_eq!(state.score(), 72);
    assert_eq!(state.high_score(), 72);
    assert!(state.check_game_end());
    assert_eq!(state.status(), PlayerStatus::Playing);
}

#[test]
fn test_clear_ptile_without_markers_is_noop() {
    let mut state = game([
        [2, 0, E, E],
        [E, E, E, E],
        [E, E, E, E],
        [E, E, E, E],
    ]);
    let before = state.snapshot();
    assert_eq!(state.clear_ptile(), 0);
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_move_spawns_one_tile_and_counts() {
    let mut state = game([
        [2, 2, E, E],
        [E, E, E, E],
        [E, E, E, E],
        [E, E, E, E],
    ]);
    assert!(state.play(Direction::Right));

    assert_eq!(state.score(), 4);
    assert_eq!(state.moves(), 1);
    assert_eq!(state.tile(0, 3), Some(Tile::Value(4)));
    assert_eq!(tile_count(&state), 2);
}

#[test]
fn test_noop_move_leaves_board_but_saves_history() {
    let mut state = game([
        [E, E, E, 2],
        [E, E, E, 4],
        [E, E, E, E],
        [E, E, E, E],
    ]);
    let before = state.snapshot();

    assert!(!state.apply_action(GameAction::SlideRight));
    let after = state.snapshot();
    assert_eq!(after.grid, before.grid);
    assert_eq!(after.score, before.score);
    assert_eq!(after.moves, 0);
    assert_eq!(after.history, HistoryMode::UndoAvailable);

    // Undo swaps in the identical saved state.
    assert!(state.undo());
    assert_eq!(state.snapshot().grid, before.grid);
}

#[test]
fn test_noop_move_after_undo_replaces_redo() {
    let mut state = game([
        [2, 2, E, E],
        [E, E, E, E],
        [E, E, E, E],
        [E, E, E, E],
    ]);
    assert!(state.play(Direction::Right));
    assert!(state.undo());
    assert_eq!(state.history(), HistoryMode::RedoAvailable);

    assert!(!state.play(Direction::Up));
    assert_eq!(state.history(), HistoryMode::UndoAvailable);
    assert!(!state.redo());
    assert_eq!(state.score(), 0);
}

#[test]
fn test_undo_redo_restore_exact_state() {
    let mut state = game([
        [2, 2, E, E],
        [E, 4, E, 4],
        [E, E, E, E],
        [E, E, E, E],
    ]);
    let before = state.snapshot();
    assert!(!state.can_undo());
    assert!(!state.undo());

    assert!(state.apply_action(GameAction::SlideRight));
    let after = state.snapshot();
    assert_eq!(after.score, 12);
    assert_eq!(after.high_score, 12);
    assert_eq!(after.history, HistoryMode::UndoAvailable);
    assert!(!state.can_redo());

    assert!(state.apply_action(GameAction::Undo));
    let undone = state.snapshot();
    assert_eq!(undone.grid, before.grid);
    assert_eq!(undone.score, 0);
    assert_eq!(undone.high_score, 0);
    assert_eq!(undone.moves, 0);
    assert_eq!(undone.history, HistoryMode::RedoAvailable);

    // Only one level of history.
    assert!(!state.undo());

    assert!(state.apply_action(GameAction::Redo));
    let redone = state.snapshot();
    assert_eq!(redone.grid, after.grid);
    assert_eq!(redone.score, after.score);
    assert_eq!(redone.high_score, after.high_score);
    assert_eq!(redone.moves, after.moves);
    assert_eq!(redone.history, HistoryMode::UndoAvailable);
    assert!(!state.redo());
}

#[test]
fn test_new_move_discards_redo() {
    let mut state = game([
        [2, 2, E, E],
        [E, E, E, E],
        [E, E, E, E],
        [E, E, E, E],
    ]);
    assert!(state.play(Direction::Right));
    assert!(state.undo());
    assert!(state.can_redo());

    assert!(state.play(Direction::Left));
    assert_eq!(state.history(), HistoryMode::UndoAvailable);
    assert!(!state.redo());
}

#[test]
fn test_reaching_2048_wins() {
    let mut state = game([
        [E, E, 1024, 1024],
        [E, E, E, E],
        [E, E, E, E],
        [E, E, E, E],
    ]);
    assert!(state.play(Direction::Right));

    assert_eq!(state.status(), PlayerStatus::Won);
    assert_eq!(state.score(), 2048);
    assert!(state.check_game_end());

    // A finished game ignores moves and history.
    let before = state.snapshot();
    assert!(!state.apply_action(GameAction::SlideLeft));
    assert!(!state.apply_action(GameAction::Undo));
    assert!(!state.apply_action(GameAction::Redo));
    assert_eq!(state.snapshot(), before);
    assert!(before.is_over());

    // The snapshot agrees with the engine about history on a finished game.
    assert_eq!(before.history, HistoryMode::UndoAvailable);
    assert!(!state.can_undo());
    assert!(!before.can_undo());
}

#[test]
fn test_tile_above_2048_counts_as_won() {
    let mut state = game([
        [4096, E, E, E],
        [E, E, E, E],
        [E, E, E, E],
        [E, E, E, E],
    ]);
    assert!(state.check_game_end());
    assert_eq!(state.status(), PlayerStatus::Won);
}

#[test]
fn test_special_burst_can_win() {
    let mut state = game([
        [E, E, 0, 0],
        [E, E, E, 1024],
        [E, E, E, E],
        [E, E, E, E],
    ]);
    assert!(state.play(Direction::Right));

    assert_eq!(state.tile(1, 3), Some(Tile::Value(2048)));
    assert!(!state.board().has_triggered());
    assert_eq!(state.score(), 1024);
    assert_eq!(state.status(), PlayerStatus::Won);
}

#[test]
fn test_move_into_dead_end_loses() {
    let mut state = game([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [16, 4, 2, 4],
        [8, 16, 8, E],
    ]);
    assert!(state.play(Direction::Right));

    assert_eq!(
        &state.board().to_raw()[3][1..],
        &[8, 16, 8][..],
        "last row slid right"
    );
    assert!(state.board().is_full());
    assert_eq!(state.status(), PlayerStatus::Lost);
    assert!(!state.check_game_end());
    assert!(!state.can_undo());
    assert!(!state.play(Direction::Left));
}

#[test]
fn test_pop_new_tile_on_full_board() {
    let raw = [
        [4, 2, 4, 2],
        [8, 16, 128, 8],
        [512, 128, 1024, 32],
        [4, 8, 256, 128],
    ];
    let mut state = game(raw);
    assert_eq!(state.pop_new_tile(), None);
    assert_eq!(state.board().to_raw(), raw);
}

#[test]
fn test_pop_new_tile_fills_an_empty_cell() {
    let mut state = game([[E; BOARD_SIZE]; BOARD_SIZE]);
    let (row, col) = state.pop_new_tile().expect("board has room");
    let tile = state.tile(row, col).expect("in bounds");
    assert!(matches!(
        tile,
        Tile::Value(2) | Tile::Value(4) | Tile::Special
    ));
    assert_eq!(tile_count(&state), 1);
}

#[test]
fn test_reset_keeps_high_score() {
    let mut state = game([
        [2, 2, E, E],
        [E, E, E, E],
        [E, E, E, E],
        [E, E, E, E],
    ]);
    assert!(state.play(Direction::Right));
    assert_eq!(state.high_score(), 4);

    state.reset();
    assert_eq!(state.score(), 0);
    assert_eq!(state.high_score(), 4);
    assert_eq!(state.moves(), 0);
    assert_eq!(state.status(), PlayerStatus::Playing);
    assert_eq!(state.history(), HistoryMode::NoHistory);
    assert_eq!(tile_count(&state), 2);
}

#[test]
fn test_reset_after_loss_starts_playing() {
    let mut state = game([
        [4, 2, 4, 2],
        [8, 16, 128, 8],
        [512, 128, 1024, 32],
        [4, 8, 256, 128],
    ]);
    state.check_game_end();
    assert_eq!(state.status(), PlayerStatus::Lost);

    assert!(state.apply_action(GameAction::Reset));
    assert!(state.is_playing());
}
