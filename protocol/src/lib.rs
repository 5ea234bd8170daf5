use thiserror::Error;

pub mod command;
pub mod model;

pub use command::{parse_command, parse_commands, ScoringCommand, StealOutcome};
pub use model::{
    half_label, AtBatEntry, AtBatResult, Base, BaseStealDetails, Bases, GameScoreDetails,
    GameState, InningScoreRow, Lineup, LineupPlayer, Lineups, PlayerId, PlayerStatLine, Side,
    SideSlots, BALLS_FOR_WALK, OUTS_PER_HALF, PITCHER_POSITION, STRIKES_FOR_STRIKEOUT,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid command format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty command")]
    EmptyMessage,
}
