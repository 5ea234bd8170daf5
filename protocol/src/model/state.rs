//! Live game state (count, outs, bases, inning)

use serde::{Deserialize, Serialize};

use super::{Bases, PlayerId};

/// Outs that end a half-inning
pub const OUTS_PER_HALF: u8 = 3;

/// Balls that award a walk
pub const BALLS_FOR_WALK: u8 = 4;

/// Strikes that retire the batter
pub const STRIKES_FOR_STRIKEOUT: u8 = 3;

/// Which side is at bat
///
/// The top half always belongs to the visiting side ("team"), the bottom half
/// to the home side ("opponent").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Team,
    Opponent,
}

impl Side {
    /// The side batting in the given half
    pub fn batting(is_top_inning: bool) -> Self {
        if is_top_inning {
            Side::Team
        } else {
            Side::Opponent
        }
    }

    /// The other side
    pub fn other(self) -> Self {
        match self {
            Side::Team => Side::Opponent,
            Side::Opponent => Side::Team,
        }
    }
}

/// One optional player per side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSlots {
    pub team: Option<PlayerId>,
    pub opponent: Option<PlayerId>,
}

impl SideSlots {
    pub fn get(&self, side: Side) -> Option<&PlayerId> {
        match side {
            Side::Team => self.team.as_ref(),
            Side::Opponent => self.opponent.as_ref(),
        }
    }

    pub fn set(&mut self, side: Side, player_id: Option<PlayerId>) {
        match side {
            Side::Team => self.team = player_id,
            Side::Opponent => self.opponent = player_id,
        }
    }
}

/// The live state of the game currently being scored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Current inning (1-based)
    pub current_inning: u32,

    /// True while the visiting side bats
    pub is_top_inning: bool,

    /// Outs in the current half (0-2 at rest)
    pub outs: u8,

    /// Balls on the current batter (0-3 at rest)
    pub balls: u8,

    /// Strikes on the current batter (0-2 at rest)
    pub strikes: u8,

    /// Fouls hit by the current batter
    pub fouls: u32,

    /// Runners on base
    pub bases: Bases,

    pub current_batter_id: Option<PlayerId>,

    pub current_pitcher_id: Option<PlayerId>,

    /// Batter each side sends up when it next comes to bat
    #[serde(default)]
    pub due_up: SideSlots,

    /// Pitcher each side last used in the field
    #[serde(default)]
    pub pitchers: SideSlots,
}

impl GameState {
    /// State for a game that hasn't thrown a pitch yet
    pub fn new() -> Self {
        Self {
            current_inning: 1,
            is_top_inning: true,
            outs: 0,
            balls: 0,
            strikes: 0,
            fouls: 0,
            bases: Bases::new(),
            current_batter_id: None,
            current_pitcher_id: None,
            due_up: SideSlots::default(),
            pitchers: SideSlots::default(),
        }
    }

    /// The side currently at bat
    pub fn batting_side(&self) -> Side {
        Side::batting(self.is_top_inning)
    }

    /// The side currently in the field
    pub fn fielding_side(&self) -> Side {
        self.batting_side().other()
    }

    /// Reset balls, strikes and fouls for a new batter
    pub fn reset_count(&mut self) {
        self.balls = 0;
        self.strikes = 0;
        self.fouls = 0;
    }

    /// Short half-inning label, e.g. "Top 3" or "Bot 7"
    pub fn half_label(&self) -> String {
        half_label(self.current_inning, self.is_top_inning)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Label a half-inning, e.g. "Top 3" or "Bot 7"
pub fn half_label(inning: u32, is_top_inning: bool) -> String {
    let half = if is_top_inning { "Top" } else { "Bot" };
    format!("{} {}", half, inning)
}
