//! Inning scores and per-player counting stats

use serde::{Deserialize, Serialize};

use super::{PlayerId, Side};

/// Runs scored by each side in one inning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningScoreRow {
    pub team: u32,
    pub opponent: u32,
}

impl InningScoreRow {
    /// Runs for one side
    pub fn runs(&self, side: Side) -> u32 {
        match side {
            Side::Team => self.team,
            Side::Opponent => self.opponent,
        }
    }

    /// Add runs to one side
    pub fn add_runs(&mut self, side: Side, runs: u32) {
        match side {
            Side::Team => self.team += runs,
            Side::Opponent => self.opponent += runs,
        }
    }
}

/// Counting stats for one player over the game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatLine {
    pub player_id: PlayerId,
    pub player_name: String,
    pub at_bats: u32,
    pub hits: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub homeruns: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub rbi: u32,
    pub runs: u32,
    pub errors: u32,
}

impl PlayerStatLine {
    /// A zeroed line for a player
    pub fn new(player_id: impl Into<PlayerId>, player_name: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    /// Hits per at-bat, `None` before the first official at-bat
    pub fn batting_average(&self) -> Option<f64> {
        if self.at_bats == 0 {
            None
        } else {
            Some(f64::from(self.hits) / f64::from(self.at_bats))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_runs() {
        let mut row = InningScoreRow::default();
        row.add_runs(Side::Team, 2);
        row.add_runs(Side::Opponent, 1);
        row.add_runs(Side::Team, 1);
        assert_eq!(row, InningScoreRow { team: 3, opponent: 1 });
        assert_eq!(row.runs(Side::Opponent), 1);
    }

    #[test]
    fn test_batting_average() {
        let mut line = PlayerStatLine::new("p1", "Casey");
        assert_eq!(line.batting_average(), None);

        line.at_bats = 4;
        line.hits = 1;
        assert_eq!(line.batting_average(), Some(0.25));
    }
}
