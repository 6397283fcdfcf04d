//! Adjacency capture rule.
//!
//! A move is legal on an empty cell when at least one of its eight
//! neighbors holds an opposing piece, and it converts every such
//! neighbor. Capture reaches exactly one cell outward; there is no
//! line scan and no bracketing.

use crate::game::board::Board;
use crate::game::types::{Cell, Coord, Player};

/// Counts the opposing pieces adjacent to `at`.
///
/// Returns 0 when the target cell is occupied; occupied cells can
/// never be targeted. A positive count means the move is legal and is
/// also the number of pieces [`apply_move`] will flip.
pub fn capture_count(board: &Board, at: Coord, player: Player) -> usize {
    if board.get(at) != Cell::Empty {
        return 0;
    }
    let opponent = Cell::Occupied(player.opponent());
    board
        .neighbors8(at)
        .into_iter()
        .filter(|&next| board.get(next) == opponent)
        .count()
}

/// Every empty cell where `player` can legally move, in row-major
/// scan order.
pub fn legal_targets(board: &Board, player: Player) -> Vec<Coord> {
    board
        .coords()
        .filter(|&at| capture_count(board, at, player) > 0)
        .collect()
}

/// Applies a legal move, returning the resulting board.
///
/// The target cell becomes `player`'s and every adjacent opposing
/// piece flips. Callers must have checked [`capture_count`] first;
/// applying an illegal target is a caller error.
pub fn apply_move(board: &Board, at: Coord, player: Player) -> Board {
    debug_assert!(
        capture_count(board, at, player) > 0,
        "apply_move on illegal target {at}"
    );
    let opponent = Cell::Occupied(player.opponent());
    let mut next = board.clone();
    next.set_cell(at, Cell::Occupied(player));
    for neighbor in board.neighbors8(at) {
        if board.get(neighbor) == opponent {
            next.set_cell(neighbor, Cell::Occupied(player));
        }
    }
    next
}
