//! Game rules for Nexus Grid.
//!
//! Pure functions for evaluating moves against board snapshots. Rules
//! are separated from board storage so the state machine, controllers,
//! and tests all consult the same logic.

pub mod capture;

pub use capture::{apply_move, capture_count, legal_targets};
