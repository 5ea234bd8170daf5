//! Rejected scoring operations

use dugout_protocol::{AtBatResult, Base};
use thiserror::Error;

/// Why an operation was refused
///
/// Every engine operation that returns one of these has left the game
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("No batter selected")]
    NoBatter,

    #[error("Batter is already on {0}")]
    BatterOnBase(Base),

    #[error("{0} is not a plate-appearance result")]
    NotPlateAppearance(AtBatResult),

    #[error("Cannot start a steal from {0}")]
    InvalidStealOrigin(Base),

    #[error("No runner on {0}")]
    EmptyBase(Base),

    #[error("Runner on {0} must be called safe or out")]
    MissingOriginOutcome(Base),

    #[error("{0} would hold two runners")]
    BaseConflict(Base),
}
