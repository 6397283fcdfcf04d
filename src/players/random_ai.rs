//! Uniform-random move selection with a fixed thinking pause.

use super::Controller;
use crate::game::{Coord, GameView};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Duration;
use tracing::debug;

/// Default pause before the opponent commits to a move.
pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_secs(5);

/// Reactive opponent: picks uniformly at random among the legal
/// targets. No search depth, no heuristic weighting, no memory of
/// past games.
pub struct RandomAi {
    name: String,
    delay: Duration,
    rng: StdRng,
}

impl RandomAi {
    /// Creates an opponent with the default thinking delay and an
    /// entropy-seeded RNG.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delay: DEFAULT_THINKING_DELAY,
            rng: StdRng::from_entropy(),
        }
    }

    /// Overrides the thinking delay. Zero suits headless play.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fixes the RNG seed for reproducible games.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

#[async_trait::async_trait]
impl Controller for RandomAi {
    async fn choose(&mut self, view: &GameView) -> Result<Coord> {
        tokio::time::sleep(self.delay).await;
        let at = view
            .legal_targets
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no legal targets for {}", view.current_player))?;
        debug!(
            ai = %self.name,
            target = %at,
            options = view.legal_targets.len(),
            "chose target"
        );
        Ok(at)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
