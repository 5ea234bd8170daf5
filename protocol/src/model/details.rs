//! The scoring document persisted for each game

use serde::{Deserialize, Serialize};

use super::{AtBatEntry, GameState, InningScoreRow, PlayerStatLine, Side};

/// Everything the scorer tracks for one game
///
/// This is the snapshot handed to and received from the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScoreDetails {
    pub game_state: GameState,

    /// Play log, oldest first
    #[serde(default)]
    pub at_bats: Vec<AtBatEntry>,

    /// One row per inning, index 0 = inning 1
    #[serde(default)]
    pub inning_scores: Vec<InningScoreRow>,

    #[serde(default)]
    pub player_stats: Vec<PlayerStatLine>,
}

impl GameScoreDetails {
    /// Zeroed details for a game opened for scoring
    pub fn new() -> Self {
        Self::default()
    }

    /// Score row for an inning (zero if not reached yet)
    pub fn inning_score(&self, inning: u32) -> InningScoreRow {
        inning
            .checked_sub(1)
            .and_then(|idx| self.inning_scores.get(idx as usize))
            .copied()
            .unwrap_or_default()
    }

    /// Total runs for a side
    pub fn runs(&self, side: Side) -> u32 {
        self.inning_scores.iter().map(|row| row.runs(side)).sum()
    }

    /// Find a player's stat line
    pub fn player_stat(&self, player_id: &str) -> Option<&PlayerStatLine> {
        self.player_stats.iter().find(|s| s.player_id == player_id)
    }
}
