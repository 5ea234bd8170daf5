//! Statistics and play-log aggregation

mod aggregator;
mod log;

pub use aggregator::{credit_runs, fold_batting_line, fold_entry, get_or_create_line, replay_log};
pub use log::{project_log, LogGroup};
