//! Read-only queries over a scored game

mod line_score;

pub use line_score::{LineScore, SideTotals};
