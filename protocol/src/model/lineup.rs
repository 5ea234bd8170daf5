//! Lineups supplied by the roster side of the application

use serde::{Deserialize, Serialize};

use super::{PlayerId, Side};

/// Position code used for the pitcher in a lineup
pub const PITCHER_POSITION: &str = "P";

/// One player in a batting order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupPlayer {
    pub player_id: PlayerId,
    pub player_name: String,
    pub position: String,
}

impl LineupPlayer {
    pub fn new(
        player_id: impl Into<PlayerId>,
        player_name: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            player_id: player_id.into(),
            player_name: player_name.into(),
            position: position.into(),
        }
    }
}

/// An ordered batting lineup
///
/// Never mutated while scoring; players are only looked up by index or id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lineup {
    pub players: Vec<LineupPlayer>,
}

impl Lineup {
    pub fn new(players: Vec<LineupPlayer>) -> Self {
        Self { players }
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Leadoff hitter
    pub fn first(&self) -> Option<&LineupPlayer> {
        self.players.first()
    }

    /// Find a player's batting-order index
    pub fn position_of(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.player_id == player_id)
    }

    /// Find a player by id
    pub fn find(&self, player_id: &str) -> Option<&LineupPlayer> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    /// The batter following `player_id`, wrapping to the top of the order
    ///
    /// Falls back to the leadoff hitter when `player_id` isn't in the lineup.
    pub fn next_after(&self, player_id: &str) -> Option<&LineupPlayer> {
        match self.position_of(player_id) {
            Some(idx) => self.players.get((idx + 1) % self.players.len()),
            None => self.first(),
        }
    }

    /// The player listed at the pitcher position
    pub fn pitcher(&self) -> Option<&LineupPlayer> {
        self.players.iter().find(|p| p.position == PITCHER_POSITION)
    }
}

impl FromIterator<LineupPlayer> for Lineup {
    fn from_iter<I: IntoIterator<Item = LineupPlayer>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Both sides' lineups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lineups {
    /// Visiting side, bats in the top half
    pub team: Lineup,

    /// Home side, bats in the bottom half
    pub opponent: Lineup,
}

impl Lineups {
    pub fn new(team: Lineup, opponent: Lineup) -> Self {
        Self { team, opponent }
    }

    /// Get a side's lineup
    pub fn side(&self, side: Side) -> &Lineup {
        match side {
            Side::Team => &self.team,
            Side::Opponent => &self.opponent,
        }
    }

    /// Find a player on either side
    pub fn find(&self, player_id: &str) -> Option<&LineupPlayer> {
        self.team
            .find(player_id)
            .or_else(|| self.opponent.find(player_id))
    }
}
