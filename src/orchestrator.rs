//! Single-actor orchestration of a match.
//!
//! Every transition -- external moves, controller turns, resets -- is
//! serialized through one async loop that owns the [`Game`]
//! exclusively. The controller's thinking delay is the only suspension
//! point: while a choice is pending the engine is latched busy, and a
//! reset bumps the generation so a choice computed against the old
//! game can never land.

use crate::game::{Advisory, Coord, Game, GameStatus, GameView, Move, Outcome, Player};
use crate::players::Controller;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Move source bound to one player.
pub enum Seat {
    /// Moves arrive as [`Command::Move`] from the host.
    External,
    /// Moves are produced by an autonomous controller.
    Auto(Box<dyn Controller>),
}

/// Requests from the host into the match actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Attempt a move on behalf of `player`.
    Move {
        /// The acting player.
        player: Player,
        /// The targeted cell.
        at: Coord,
    },
    /// Start a fresh game, discarding all prior state.
    Reset,
    /// Stop the match loop.
    Shutdown,
}

/// Notifications from the match actor to the host.
#[derive(Debug, Clone)]
pub enum Event {
    /// The observable state changed; render this snapshot.
    View(GameView),
    /// A controller is choosing a move for `player`.
    Thinking {
        /// The player being moved for.
        player: Player,
        /// The controller's display name.
        name: String,
    },
    /// A move was applied.
    Moved(Move),
    /// A move attempt was rejected.
    Rejected {
        /// The player whose attempt was rejected.
        player: Player,
        /// Why it was rejected.
        advisory: Advisory,
    },
    /// The game ended.
    Over(Outcome),
}

/// Owns a [`Game`] and serializes every transition through one task.
pub struct Orchestrator {
    game: Game,
    seat_one: Seat,
    seat_two: Seat,
    commands: mpsc::UnboundedReceiver<Command>,
    events: mpsc::UnboundedSender<Event>,
}

impl Orchestrator {
    /// Creates an orchestrator over a fresh game.
    pub fn new(
        seat_one: Seat,
        seat_two: Seat,
        commands: mpsc::UnboundedReceiver<Command>,
        events: mpsc::UnboundedSender<Event>,
    ) -> Self {
        Self {
            game: Game::new(),
            seat_one,
            seat_two,
            commands,
            events,
        }
    }

    /// Runs the match until a shutdown command arrives or the command
    /// channel closes.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> Result<()> {
        info!("starting match");
        self.events.send(Event::View(self.game.view()))?;
        loop {
            let over = self.game.status().is_over();
            let seat = match self.game.current_player() {
                Player::One => &mut self.seat_one,
                Player::Two => &mut self.seat_two,
            };
            let keep_going = match seat {
                Seat::Auto(controller) if !over => {
                    auto_turn(
                        &mut self.game,
                        controller.as_mut(),
                        &mut self.commands,
                        &self.events,
                    )
                    .await?
                }
                _ => external_turn(&mut self.game, &mut self.commands, &self.events).await?,
            };
            if !keep_going {
                info!("match loop stopped");
                return Ok(());
            }
        }
    }
}

/// Waits for one host command and applies it. Also services terminal
/// states, where only reset and shutdown do anything useful.
async fn external_turn(
    game: &mut Game,
    commands: &mut mpsc::UnboundedReceiver<Command>,
    events: &mpsc::UnboundedSender<Event>,
) -> Result<bool> {
    let Some(command) = commands.recv().await else {
        return Ok(false);
    };
    apply_command(game, command, events)
}

/// Runs one controller turn: latch the engine busy, race the choice
/// against incoming commands, and discard the choice if the game
/// generation moved underneath it.
async fn auto_turn(
    game: &mut Game,
    controller: &mut dyn Controller,
    commands: &mut mpsc::UnboundedReceiver<Command>,
    events: &mpsc::UnboundedSender<Event>,
) -> Result<bool> {
    let generation = game.generation();
    let view = game.view();
    let player = view.current_player;

    game.begin_thinking();
    events.send(Event::Thinking {
        player,
        name: controller.name().to_string(),
    })?;
    events.send(Event::View(game.view()))?;

    let mut choice = std::pin::pin!(controller.choose(&view));
    let at = loop {
        tokio::select! {
            at = &mut choice => break at?,
            command = commands.recv() => {
                let Some(command) = command else {
                    game.finish_thinking();
                    return Ok(false);
                };
                if matches!(command, Command::Reset | Command::Shutdown) {
                    // Dropping the pending choice cancels it; the
                    // generation bump guards any copy already made.
                    game.finish_thinking();
                    return apply_command(game, command, events);
                }
                // Move attempts bounce off the busy latch with AiBusy.
                if !apply_command(game, command, events)? {
                    game.finish_thinking();
                    return Ok(false);
                }
            }
        }
    };
    game.finish_thinking();

    if game.generation() != generation {
        debug!(%player, "discarding stale choice after reset");
        return Ok(true);
    }
    let action = Move::new(player, at);
    debug!(%action, "applying controller choice");
    apply_move_command(game, action, events)
}

fn apply_command(
    game: &mut Game,
    command: Command,
    events: &mpsc::UnboundedSender<Event>,
) -> Result<bool> {
    match command {
        Command::Shutdown => {
            info!("shutdown requested");
            Ok(false)
        }
        Command::Reset => {
            game.reset();
            events.send(Event::View(game.view()))?;
            Ok(true)
        }
        Command::Move { player, at } => apply_move_command(game, Move::new(player, at), events),
    }
}

fn apply_move_command(
    game: &mut Game,
    action: Move,
    events: &mpsc::UnboundedSender<Event>,
) -> Result<bool> {
    let advisory = game.make_move(action);
    if advisory.is_accepted() {
        events.send(Event::Moved(action))?;
    } else {
        events.send(Event::Rejected {
            player: action.player,
            advisory,
        })?;
    }
    events.send(Event::View(game.view()))?;
    if let GameStatus::Over(outcome) = game.status() {
        events.send(Event::Over(outcome))?;
    }
    Ok(true)
}
