//! End-to-end scenarios for the board and the turn controller.

use t3::{Board, Cell, Engine, GameOutcome, MoveError, Player, SearchStrategy};
use tracing_subscriber::EnvFilter;

const A: Cell = Cell::Occupied(Player::Circle);
const B: Cell = Cell::Occupied(Player::Cross);
const E: Cell = Cell::Empty;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_opening_move_gets_single_reply() {
    init_tracing();
    let mut engine = Engine::new(Board::new(3), Player::Circle);

    engine.play(0).expect("empty board accepts any cell");

    let occupied = engine.board().cells().iter().filter(|c| !c.is_empty()).count();
    assert_eq!(occupied, 2);
    assert_eq!(engine.board().cell(0), A);
    assert!(!engine.is_finished());
}

#[test]
fn test_human_win_ends_game_without_reply() {
    init_tracing();
    let board = Board::from_cells(3, [A, A, E, B, B, E, E, E, E]);
    let mut engine = Engine::new(board, Player::Circle);

    let report = engine.play(2).expect("cell 2 is empty");

    assert_eq!(report.reply, None);
    assert_eq!(engine.winner(), Some(Player::Circle));
    assert!(engine.is_finished());
    assert_eq!(engine.board().empty_cells().collect::<Vec<_>>(), vec![5, 6, 7, 8]);
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let board = Board::from_cells(3, [A, B, A, A, B, B, B, A, A]);
    assert_eq!(board.winner(), None);
    assert!(board.is_complete());
    assert!(board.is_finished());
    assert_eq!(board.outcome(), GameOutcome::Draw);
}

#[test]
fn test_ai_blocks_immediate_threat() {
    init_tracing();
    // Circle threatens the top row; Cross to move.
    for strategy in [SearchStrategy::Exhaustive, SearchStrategy::AlphaBeta] {
        let mut board = Board::from_cells(3, [A, A, E, E, B, E, E, E, E]);
        assert_eq!(t3::search::best_move(&mut board, Player::Cross, strategy), 2);
    }
}

#[test]
fn test_engine_reply_blocks_threat() {
    let board = Board::from_cells(3, [A, E, E, E, B, E, E, E, E]);
    let mut engine = Engine::new(board, Player::Circle);

    let reply = engine.play(1).unwrap().reply.expect("computer answers");

    assert_eq!(reply.index, 2);
    assert_eq!(engine.board().cell(2), B);
}

#[test]
fn test_rejected_moves_change_nothing() {
    let mut engine = Engine::new(Board::new(3), Player::Circle);
    engine.play(4).unwrap();
    let board = engine.board().clone();
    let player = engine.current_player();

    assert_eq!(engine.play(4), Err(MoveError::SquareOccupied(4)));
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.current_player(), player);
}

#[test]
fn test_finished_game_rejects_moves() {
    let board = Board::from_cells(3, [B, B, B, A, A, E, A, E, E]);
    let mut engine = Engine::new(board.clone(), Player::Circle);

    assert_eq!(engine.play(5), Err(MoveError::GameOver));
    assert_eq!(engine.board(), &board);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_out_of_range_index_is_a_contract_violation() {
    let mut engine = Engine::new(Board::new(3), Player::Circle);
    let _ = engine.play(42);
}

#[test]
fn test_restart_keeps_initial_player() {
    let mut engine = Engine::new(Board::new(3), Player::Circle);
    engine.play(0).unwrap();
    engine.play(8).ok();
    engine.restart();

    assert_eq!(engine.current_player(), Player::Circle);
    assert_eq!(engine.board(), &Board::new(3));
}

#[test]
fn test_restart_lets_computer_open_again() {
    let mut engine = Engine::new(Board::new(3), Player::Cross);
    let opening = engine.board().clone();
    assert_eq!(opening.empty_cells().count(), 8);

    engine.play(opening.empty_cells().next().unwrap()).unwrap();
    engine.restart();

    assert_eq!(engine.board(), &opening);
    assert_eq!(engine.current_player(), Player::Circle);
}

#[test]
fn test_snapshot_serializes_for_renderers() {
    let mut session = t3::BoardSession::from_config(&t3::GameConfig::two_player(3));
    session.on_cell_tap(0, 1);

    let json = serde_json::to_value(session.snapshot()).unwrap();

    assert_eq!(json["rows"], 3);
    assert_eq!(json["cells"][0], "empty");
    assert_eq!(json["cells"][1]["occupied"], "circle");
    assert_eq!(json["outcome"], "in_progress");
    assert_eq!(json["to_move"], "cross");
}
