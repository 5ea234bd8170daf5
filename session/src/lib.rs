//! Scoring sessions backed by a game store.
//!
//! A [`ScoringSession`] wraps a [`TrackedGame`](dugout_scoring::TrackedGame)
//! for one game id: it loads the stored snapshot when the game is opened,
//! applies scorer commands to it and writes the new snapshot back after every
//! change. Storage is pluggable through the [`GameStore`] trait.

mod session;
mod store;

pub use session::{Applied, ScoringSession, SessionSeed};
pub use store::{GameStore, JsonFileStore, MemoryStore, StoreConfig};

pub use dugout_protocol::{GameScoreDetails, Lineups, ScoringCommand};
pub use dugout_scoring::{ScoringError, TrackedGame};
