//! Tests for the capture rule evaluator and its board-level properties.

use nexus_grid::game::rules::{apply_move, capture_count, legal_targets};
use nexus_grid::{Board, Cell, Coord, Game, GameStatus, Move, Player, SIZE};
use strum::IntoEnumIterator;

fn place(board: Board, row: usize, col: usize, player: Player) -> Board {
    board.with_cell(Coord::new(row, col), Cell::Occupied(player))
}

#[test]
fn occupied_cells_are_never_legal_targets() {
    let board = Board::opening(SIZE);
    for player in Player::iter() {
        for at in board.coords() {
            if board.get(at) != Cell::Empty {
                assert_eq!(capture_count(&board, at, player), 0);
            }
        }
        assert!(legal_targets(&board, player)
            .iter()
            .all(|&at| board.get(at) == Cell::Empty));
    }
}

#[test]
fn score_moves_by_one_plus_captures() {
    // Player 1 takes a cell flanked by two opposing pieces: their own
    // count grows by one placed plus two flipped, the opponent loses
    // exactly the two flipped.
    let board = place(Board::empty(SIZE), 1, 1, Player::Two);
    let board = place(board, 1, 2, Player::Two);
    let board = place(board, 4, 4, Player::One);

    let at = Coord::new(2, 2);
    let captures = capture_count(&board, at, Player::One);
    assert_eq!(captures, 2);

    let before = board.scores();
    let after = apply_move(&board, at, Player::One).scores();
    assert_eq!(after.one, before.one + 1 + captures);
    assert_eq!(after.two, before.two - captures);
}

#[test]
fn legal_target_sets_agree_with_adjacency_not_bracketing() {
    // From the opening, every empty cell touching an opposing piece is
    // legal; a bracketing rule would admit only the four line moves.
    let board = Board::opening(SIZE);
    let targets = legal_targets(&board, Player::One);
    assert_eq!(targets.len(), 10);
    for &(row, col) in &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 3), (4, 2), (2, 1), (3, 1)] {
        assert!(targets.contains(&Coord::new(row, col)));
    }
    // The diagonal touches count too.
    assert!(targets.contains(&Coord::new(1, 4)));
    assert!(targets.contains(&Coord::new(4, 1)));
}

#[test]
fn full_playthrough_keeps_derived_quantities_consistent() {
    // Drive a deterministic game (always the first legal target) to
    // its end, checking on every accepted move that exactly one empty
    // cell is consumed and that scores always sum to the occupancy.
    let mut game = Game::new();
    let mut moves = 0;
    while game.status() == GameStatus::Playing {
        let view = game.view();
        let empty_before = view.board.empty_count();
        assert_eq!(view.scores.total(), SIZE * SIZE - empty_before);
        assert!(!view.legal_targets.is_empty());

        let target = view.legal_targets[0];
        let advisory = game.make_move(Move::new(view.current_player, target));
        assert!(advisory.is_accepted());
        assert_eq!(game.board().empty_count(), empty_before - 1);

        moves += 1;
        assert!(moves <= SIZE * SIZE, "game must end within board capacity");
    }

    let view = game.view();
    assert!(view.legal_targets.is_empty());
    assert_eq!(view.scores.total(), SIZE * SIZE - view.board.empty_count());
}
