//! Live game tracking from scoring commands

mod count;
mod game;
mod resolution;
mod running;
mod updater;

#[cfg(test)]
pub(crate) mod fixtures;

pub use game::{TrackedGame, UNKNOWN_PLAYER};
pub use resolution::{resolve_plate_appearance, PlateOutcome};
