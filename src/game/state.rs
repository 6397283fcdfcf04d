//! Turn state machine for Nexus Grid.

use super::action::{Advisory, Move, Notice};
use super::board::Board;
use super::rules::{apply_move, capture_count, legal_targets};
use super::types::{Cell, Coord, GameStatus, Outcome, Player, Scores};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Fixed board dimension.
pub const SIZE: usize = 6;

/// The Nexus Grid state machine.
///
/// Owns the board exclusively and mutates it only through accepted
/// moves and resets. Scores and legal targets are derived from the
/// board on every transition, never kept as independently mutable
/// fields, so they cannot drift from the cells they describe.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Player,
    status: GameStatus,
    notice: Option<Notice>,
    legal_targets: Vec<Coord>,
    thinking: bool,
    generation: u64,
}

/// Read-only projection of the game for hosts and controllers.
///
/// A snapshot: the board it carries is a value copy, so holding a view
/// across later transitions cannot observe or corrupt live state. The
/// generation identifies which game instance the snapshot belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board snapshot.
    pub board: Board,
    /// Player whose turn it is.
    pub current_player: Player,
    /// Playing or finished.
    pub status: GameStatus,
    /// Cell counts derived from the board.
    pub scores: Scores,
    /// Where the current player may move, for hinting.
    pub legal_targets: Vec<Coord>,
    /// Pending informational message, if any.
    pub notice: Option<Notice>,
    /// Whether a deferred opponent choice is pending.
    pub thinking: bool,
    /// Identifies the game instance this snapshot was taken from.
    pub generation: u64,
}

impl Game {
    /// Creates a new game in the documented starting configuration.
    #[instrument]
    pub fn new() -> Self {
        let mut game = Self {
            board: Board::opening(SIZE),
            current: Player::One,
            status: GameStatus::Playing,
            notice: None,
            legal_targets: Vec::new(),
            thinking: false,
            generation: 0,
        };
        game.evaluate();
        game
    }

    /// The board as it stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Playing or finished.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Identifies this game instance; bumped by every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the deferred-choice latch is held.
    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    /// Attempts a move.
    ///
    /// Rejections leave the board, turn, and status untouched; they
    /// only record the reason as the pending notice. Coordinates
    /// outside the board are a caller contract violation and panic.
    #[instrument(skip(self), fields(player = %action.player, at = %action.at))]
    pub fn make_move(&mut self, action: Move) -> Advisory {
        let advisory = self.admit(action);
        match advisory {
            Advisory::Accepted => {
                info!(status = ?self.status, "move applied");
            }
            rejected => {
                warn!(advisory = %rejected, "move rejected");
                self.notice = Some(Notice::Rejected(rejected));
            }
        }
        advisory
    }

    fn admit(&mut self, action: Move) -> Advisory {
        if self.status.is_over() {
            return Advisory::GameOver;
        }
        if self.thinking {
            return Advisory::AiBusy;
        }
        if action.player != self.current {
            return Advisory::NotYourTurn;
        }
        if self.board.get(action.at) != Cell::Empty {
            return Advisory::Occupied;
        }
        if capture_count(&self.board, action.at, action.player) == 0 {
            return Advisory::NoCapture;
        }
        self.board = apply_move(&self.board, action.at, action.player);
        self.notice = None;
        self.current = action.player.opponent();
        self.evaluate();
        Advisory::Accepted
    }

    /// Re-derives legal targets, passes, and terminal status from the
    /// board and current player. Idempotent: running it again with no
    /// intervening move changes nothing.
    fn evaluate(&mut self) {
        if self.status.is_over() {
            return;
        }
        let mine = legal_targets(&self.board, self.current);
        let theirs = legal_targets(&self.board, self.current.opponent());

        if self.board.is_full() || (mine.is_empty() && theirs.is_empty()) {
            let scores = self.board.scores();
            let outcome = if scores.one > scores.two {
                Outcome::Win {
                    player: Player::One,
                    score: scores.one,
                }
            } else if scores.two > scores.one {
                Outcome::Win {
                    player: Player::Two,
                    score: scores.two,
                }
            } else {
                Outcome::Draw {
                    one: scores.one,
                    two: scores.two,
                }
            };
            info!(%outcome, "game over");
            self.status = GameStatus::Over(outcome);
            self.legal_targets.clear();
        } else if mine.is_empty() {
            // Automatic pass. The opponent is known to have a move, so
            // no further hand-off can occur.
            debug!(player = %self.current, "no legal targets, passing");
            self.notice = Some(Notice::Passed {
                player: self.current,
            });
            self.current = self.current.opponent();
            self.legal_targets = theirs;
        } else {
            self.legal_targets = mine;
        }
    }

    /// Reinitializes to the starting configuration.
    ///
    /// Bumps the generation so any deferred choice computed against
    /// the previous game can be recognized as stale and discarded.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::opening(SIZE);
        self.current = Player::One;
        self.status = GameStatus::Playing;
        self.notice = None;
        self.legal_targets.clear();
        self.thinking = false;
        self.generation += 1;
        self.evaluate();
        info!(generation = self.generation, "game reset");
    }

    /// Latches the engine busy while a deferred opponent choice is
    /// pending; every move attempt is rejected `AiBusy` until
    /// [`Game::finish_thinking`] releases it.
    pub fn begin_thinking(&mut self) {
        self.thinking = true;
    }

    /// Releases the busy latch.
    pub fn finish_thinking(&mut self) {
        self.thinking = false;
    }

    /// Takes a read-only snapshot for rendering or move selection.
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board.clone(),
            current_player: self.current,
            status: self.status,
            scores: self.board.scores(),
            legal_targets: self.legal_targets.clone(),
            notice: self.notice,
            thinking: self.thinking,
            generation: self.generation,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A game over an arbitrary position, for scenarios the opening
    /// cannot reach directly.
    fn game_with(board: Board, current: Player) -> Game {
        let mut game = Game {
            board,
            current,
            status: GameStatus::Playing,
            notice: None,
            legal_targets: Vec::new(),
            thinking: false,
            generation: 0,
        };
        game.evaluate();
        game
    }

    fn occupied(board: Board, at: (usize, usize), player: Player) -> Board {
        board.with_cell(Coord::new(at.0, at.1), Cell::Occupied(player))
    }

    /// Player 2 walled into the corner: Player 1 has no empty cell
    /// adjacent to an opposing piece, Player 2 does.
    fn corner_wall_board() -> Board {
        let board = occupied(Board::empty(SIZE), (0, 0), Player::Two);
        let board = occupied(board, (0, 1), Player::One);
        let board = occupied(board, (1, 0), Player::One);
        occupied(board, (1, 1), Player::One)
    }

    #[test]
    fn pass_hands_turn_to_opponent_without_terminating() {
        let game = game_with(corner_wall_board(), Player::One);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.current_player(), Player::Two);
        let notice = game.view().notice.expect("pass leaves a notice");
        assert_eq!(
            notice,
            Notice::Passed {
                player: Player::One
            }
        );
        assert_eq!(
            notice.to_string(),
            "Player 1 has no legal move, the turn passes"
        );
        assert!(!game.view().legal_targets.is_empty());
    }

    #[test]
    fn evaluate_is_idempotent() {
        let mut game = game_with(corner_wall_board(), Player::One);
        let first = game.view();
        game.evaluate();
        assert_eq!(game.view(), first);
    }

    #[test]
    fn full_board_terminates_on_occupancy_counts() {
        let mut board = Board::empty(SIZE);
        for (index, at) in board.coords().collect::<Vec<_>>().into_iter().enumerate() {
            let owner = if index < 20 { Player::One } else { Player::Two };
            board = board.with_cell(at, Cell::Occupied(owner));
        }
        let game = game_with(board, Player::One);
        assert_eq!(
            game.status(),
            GameStatus::Over(Outcome::Win {
                player: Player::One,
                score: 20
            })
        );
        assert!(game.view().legal_targets.is_empty());
    }

    #[test]
    fn full_board_with_equal_counts_is_a_draw() {
        let mut board = Board::empty(SIZE);
        for (index, at) in board.coords().collect::<Vec<_>>().into_iter().enumerate() {
            let owner = if index % 2 == 0 { Player::One } else { Player::Two };
            board = board.with_cell(at, Cell::Occupied(owner));
        }
        let game = game_with(board, Player::Two);
        assert_eq!(
            game.status(),
            GameStatus::Over(Outcome::Draw { one: 18, two: 18 })
        );
    }

    #[test]
    fn losing_every_piece_passes_rather_than_ending() {
        // A side with no pieces on the board leaves the opponent
        // nothing adjacent to capture, so the opponent passes; the
        // pieceless side can still capture and play continues.
        let board = occupied(Board::empty(SIZE), (0, 0), Player::One);
        let game = game_with(board, Player::One);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.current_player(), Player::Two);
    }
}
