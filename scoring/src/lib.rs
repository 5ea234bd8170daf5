//! Live scoring engine for baseball and softball games.
//!
//! Turns a stream of scorer inputs (pitches, plate-appearance results, steal
//! attempts, substitutions) into an authoritative game snapshot: count, outs,
//! base occupancy, inning progression, play log, line score and per-player
//! batting lines.
//!
//! # Overview
//!
//! ```text
//! dugout-protocol (commands + snapshot model)
//!        │
//!        ▼
//! dugout-scoring (state machine + aggregation) ← THIS CRATE
//!        │
//!        └─> dugout-session (persistence, scoring sessions)
//! ```
//!
//! # Main Types
//!
//! - [`TrackedGame`] - Owns a [`GameScoreDetails`] snapshot and applies commands to it
//! - [`ScoringError`] - Why a command was refused; a refused command changes nothing
//! - [`LineScore`] - Inning-by-inning runs with R/H/E totals
//! - [`LogGroup`] - Play-log entries for one half-inning
//!
//! # Example Usage
//!
//! ```ignore
//! use dugout_scoring::{parse_command, TrackedGame};
//!
//! let mut game = TrackedGame::new(lineups);
//!
//! game.update(&parse_command("|ball")?)?;
//! game.update(&parse_command("|atbat|double")?)?;
//!
//! println!("{}", game.line_score());
//! for group in game.play_log() {
//!     println!("{}", group.label());
//! }
//! ```

mod error;
pub mod query;
pub mod stats;
pub mod tracking;

pub use error::ScoringError;
pub use query::{LineScore, SideTotals};
pub use stats::{project_log, replay_log, LogGroup};
pub use tracking::{resolve_plate_appearance, PlateOutcome, TrackedGame, UNKNOWN_PLAYER};

// Re-export commonly used protocol types
pub use dugout_protocol::{
    parse_command, parse_commands, AtBatEntry, AtBatResult, Base, Bases, GameScoreDetails,
    GameState, Lineup, LineupPlayer, Lineups, PlayerId, PlayerStatLine, ScoringCommand, Side,
    SideSlots, StealOutcome,
};
