//! Board model: grid storage and read-only queries.

use super::types::{Cell, Coord, Player, Scores};
use serde::{Deserialize, Serialize};

/// Offsets of the eight surrounding cells.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Square game board.
///
/// The board is a value type: every update produces a new board, so
/// the state machine can hand snapshots to observers without aliasing
/// live state. Out-of-range access is a caller contract violation and
/// panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board of `size * size` empty cells.
    pub fn empty(size: usize) -> Self {
        assert!(size >= 2, "board size must be at least 2");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Creates the starting configuration: a 2x2 cluster of alternating
    /// ownership at the board's center, Player 1 on the main diagonal.
    pub fn opening(size: usize) -> Self {
        let mut board = Self::empty(size);
        let mid = size / 2;
        board.set_cell(Coord::new(mid - 1, mid - 1), Cell::Occupied(Player::One));
        board.set_cell(Coord::new(mid, mid), Cell::Occupied(Player::One));
        board.set_cell(Coord::new(mid - 1, mid), Cell::Occupied(Player::Two));
        board.set_cell(Coord::new(mid, mid - 1), Cell::Occupied(Player::Two));
        board
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at the given coordinate.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[self.index(at)]
    }

    /// Returns a new board identical to this one except for the cell
    /// at `at`.
    pub fn with_cell(&self, at: Coord, cell: Cell) -> Board {
        let mut next = self.clone();
        next.set_cell(at, cell);
        next
    }

    pub(crate) fn set_cell(&mut self, at: Coord, cell: Cell) {
        let index = self.index(at);
        self.cells[index] = cell;
    }

    fn index(&self, at: Coord) -> usize {
        assert!(
            at.row < self.size && at.col < self.size,
            "coordinate out of bounds: {at}"
        );
        at.row * self.size + at.col
    }

    /// The up-to-eight in-bounds coordinates surrounding `at`.
    ///
    /// Capture evaluation and capture application both go through this
    /// set, so the two can never disagree on adjacency.
    pub fn neighbors8(&self, at: Coord) -> Vec<Coord> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = at.row as i32 + dr;
                let col = at.col as i32 + dc;
                (row >= 0 && row < self.size as i32 && col >= 0 && col < self.size as i32)
                    .then(|| Coord::new(row as usize, col as usize))
            })
            .collect()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Coord::new(row, col)))
    }

    /// Number of cells held by the given player.
    pub fn score(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }

    /// Both players' cell counts, derived from the board.
    pub fn scores(&self) -> Scores {
        Scores {
            one: self.score(Player::One),
            two: self.score(Player::Two),
        }
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count()
    }

    /// Checks if no empty cells remain.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.get(Coord::new(row, col)) {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::One) => '1',
                    Cell::Occupied(Player::Two) => '2',
                };
                write!(f, "{symbol}")?;
                if col + 1 < self.size {
                    write!(f, " ")?;
                }
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_seeds_center_cluster() {
        let board = Board::opening(6);
        assert_eq!(board.get(Coord::new(2, 2)), Cell::Occupied(Player::One));
        assert_eq!(board.get(Coord::new(3, 3)), Cell::Occupied(Player::One));
        assert_eq!(board.get(Coord::new(2, 3)), Cell::Occupied(Player::Two));
        assert_eq!(board.get(Coord::new(3, 2)), Cell::Occupied(Player::Two));
        assert_eq!(board.empty_count(), 32);
    }

    #[test]
    fn with_cell_leaves_original_untouched() {
        let board = Board::empty(6);
        let updated = board.with_cell(Coord::new(0, 0), Cell::Occupied(Player::One));
        assert_eq!(board.get(Coord::new(0, 0)), Cell::Empty);
        assert_eq!(updated.get(Coord::new(0, 0)), Cell::Occupied(Player::One));
    }

    #[test]
    fn neighbors_clip_to_bounds() {
        let board = Board::empty(6);
        assert_eq!(board.neighbors8(Coord::new(0, 0)).len(), 3);
        assert_eq!(board.neighbors8(Coord::new(0, 3)).len(), 5);
        assert_eq!(board.neighbors8(Coord::new(3, 3)).len(), 8);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_range_access_panics() {
        Board::empty(6).get(Coord::new(6, 0));
    }

    #[test]
    fn display_renders_the_grid() {
        let rendered = Board::opening(6).to_string();
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2], ". . 1 2 . .");
        assert_eq!(rows[3], ". . 2 1 . .");
    }
}
