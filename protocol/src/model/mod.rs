//! Scoring data model shared by the engine and its collaborators

mod bases;
mod details;
mod entry;
mod lineup;
mod result;
mod score;
mod state;

pub use bases::{Base, Bases};
pub use details::GameScoreDetails;
pub use entry::{AtBatEntry, BaseStealDetails};
pub use lineup::{Lineup, LineupPlayer, Lineups, PITCHER_POSITION};
pub use result::AtBatResult;
pub use score::{InningScoreRow, PlayerStatLine};
pub use state::{
    half_label, GameState, Side, SideSlots, BALLS_FOR_WALK, OUTS_PER_HALF,
    STRIKES_FOR_STRIKEOUT,
};

/// Player identifier as issued by the roster store
pub type PlayerId = String;
