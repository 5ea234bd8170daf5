//! TrackedGame - main game scoring struct

use chrono::Utc;
use dugout_protocol::{
    AtBatEntry, AtBatResult, BaseStealDetails, GameScoreDetails, GameState, Lineup, Lineups,
    PlayerId, PlayerStatLine, Side,
};

use crate::query::LineScore;
use crate::stats::{self, LogGroup};

/// Name shown when a player id isn't in either lineup
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// A game being scored live
///
/// Owns the `GameScoreDetails` snapshot and the lineups it was opened with.
/// Every operation mutates the snapshot in place; callers hand
/// [`TrackedGame::details`] (or a clone from [`TrackedGame::snapshot`]) to
/// the persistence layer afterwards.
#[derive(Debug, Clone)]
pub struct TrackedGame {
    pub(crate) details: GameScoreDetails,

    /// Read-only lineups for both sides
    lineups: Lineups,
}

impl TrackedGame {
    /// Open a fresh game
    ///
    /// The top of the first starts with the visiting leadoff hitter up and the
    /// home lineup's pitcher (if one is listed) on the mound.
    pub fn new(lineups: Lineups) -> Self {
        let mut game = Self::from_snapshot(GameScoreDetails::new(), lineups);
        let state = &mut game.details.game_state;
        state.current_batter_id = game.lineups.team.first().map(|p| p.player_id.clone());
        state.current_pitcher_id = game.lineups.opponent.pitcher().map(|p| p.player_id.clone());
        game
    }

    /// Resume scoring from a stored snapshot
    pub fn from_snapshot(details: GameScoreDetails, lineups: Lineups) -> Self {
        Self { details, lineups }
    }

    /// Seed the batter at the plate
    pub fn with_batter(mut self, player_id: impl Into<PlayerId>) -> Self {
        self.select_batter(player_id);
        self
    }

    /// Seed the pitcher on the mound
    pub fn with_pitcher(mut self, player_id: impl Into<PlayerId>) -> Self {
        self.select_pitcher(player_id);
        self
    }

    // === Snapshot access ===

    pub fn details(&self) -> &GameScoreDetails {
        &self.details
    }

    pub fn state(&self) -> &GameState {
        &self.details.game_state
    }

    /// Clone the current snapshot
    pub fn snapshot(&self) -> GameScoreDetails {
        self.details.clone()
    }

    pub fn into_details(self) -> GameScoreDetails {
        self.details
    }

    pub fn lineups(&self) -> &Lineups {
        &self.lineups
    }

    // === Queries ===

    /// The batting team's lineup for the current half
    pub fn batting_lineup(&self) -> &Lineup {
        self.lineups.side(self.state().batting_side())
    }

    /// The fielding team's lineup for the current half
    pub fn fielding_lineup(&self) -> &Lineup {
        self.lineups.side(self.state().fielding_side())
    }

    /// Display name for a player, falling back to a placeholder
    pub fn player_name(&self, player_id: &str) -> String {
        self.lineups
            .find(player_id)
            .map(|p| p.player_name.clone())
            .unwrap_or_else(|| UNKNOWN_PLAYER.to_string())
    }

    pub fn player_stat(&self, player_id: &str) -> Option<&PlayerStatLine> {
        self.details.player_stat(player_id)
    }

    /// Play log grouped by half-inning, newest first
    pub fn play_log(&self) -> Vec<LogGroup<'_>> {
        stats::project_log(&self.details.at_bats)
    }

    pub fn line_score(&self) -> LineScore {
        LineScore::from_details(&self.details)
    }

    // === Selection ===

    /// Put a batter at the plate
    ///
    /// Choosing someone other than the current batter starts a fresh count.
    pub fn select_batter(&mut self, player_id: impl Into<PlayerId>) {
        let player_id = player_id.into();
        let state = &mut self.details.game_state;
        if state.current_batter_id.as_deref() != Some(player_id.as_str()) {
            state.reset_count();
        }
        state.current_batter_id = Some(player_id);
    }

    pub fn select_pitcher(&mut self, player_id: impl Into<PlayerId>) {
        self.details.game_state.current_pitcher_id = Some(player_id.into());
    }

    // === Internal helpers ===

    /// Build a log entry stamped with the current inning, half and count
    pub(crate) fn new_entry(
        &self,
        batter_id: &str,
        result: AtBatResult,
        rbi: u32,
        base_steal_details: Option<BaseStealDetails>,
    ) -> AtBatEntry {
        let state = self.state();
        let pitcher_id = state.current_pitcher_id.clone();
        let pitcher_name = pitcher_id.as_deref().map(|id| self.player_name(id));

        AtBatEntry {
            id: format!("ab-{}", self.details.at_bats.len() + 1),
            batter_id: batter_id.to_string(),
            batter_name: self.player_name(batter_id),
            pitcher_id,
            pitcher_name,
            inning: state.current_inning,
            is_top_inning: state.is_top_inning,
            balls: state.balls,
            strikes: state.strikes,
            fouls: state.fouls,
            result,
            rbi,
            errors: u32::from(result == AtBatResult::Error),
            timestamp: Utc::now(),
            base_steal_details,
        }
    }

    /// Append an entry to the log and fold it into the stats
    pub(crate) fn record_entry(&mut self, entry: AtBatEntry) {
        stats::fold_entry(&mut self.details, &entry);
        self.details.at_bats.push(entry);
    }

    /// Move to the next batter in the current batting order and clear the count
    ///
    /// Leaves the batter unset when the batting lineup is empty.
    pub(crate) fn advance_batter(&mut self, previous: &str) {
        let next = self
            .batting_lineup()
            .next_after(previous)
            .map(|p| p.player_id.clone());
        let state = &mut self.details.game_state;
        state.current_batter_id = next;
        state.reset_count();
    }

    /// Who leads off the next time `side` comes to bat
    ///
    /// Documents saved without due-up slots fall back to the log.
    pub(crate) fn due_up_for(&self, side: Side) -> Option<PlayerId> {
        if let Some(remembered) = self.state().due_up.get(side) {
            return Some(remembered.clone());
        }

        let lineup = self.lineups.side(side);
        let last_batter = self
            .details
            .at_bats
            .iter()
            .rev()
            .filter(|e| !e.is_steal() && Side::batting(e.is_top_inning) == side)
            .map(|e| e.batter_id.as_str())
            .next();

        let next = match last_batter {
            Some(batter) => lineup.next_after(batter),
            None => lineup.first(),
        };
        next.map(|p| p.player_id.clone())
    }

    /// Who pitches for `side` when it takes the field
    pub(crate) fn pitcher_for(&self, side: Side) -> Option<PlayerId> {
        if let Some(remembered) = self.state().pitchers.get(side) {
            return Some(remembered.clone());
        }

        // Entries logged while the other side batted were thrown by this side
        let batting_against = side.other();
        self.details
            .at_bats
            .iter()
            .rev()
            .filter(|e| Side::batting(e.is_top_inning) == batting_against)
            .find_map(|e| e.pitcher_id.clone())
            .or_else(|| self.lineups.side(side).pitcher().map(|p| p.player_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::fixtures::lineups;

    #[test]
    fn test_new_game_seeds_batter_and_pitcher() {
        let game = TrackedGame::new(lineups());
        assert_eq!(game.state().current_batter_id.as_deref(), Some("t1"));
        assert_eq!(game.state().current_pitcher_id.as_deref(), Some("o9"));
        assert!(game.details().at_bats.is_empty());
    }

    #[test]
    fn test_new_game_with_empty_lineups() {
        let game = TrackedGame::new(Lineups::default());
        assert!(game.state().current_batter_id.is_none());
        assert!(game.state().current_pitcher_id.is_none());
    }

    #[test]
    fn test_explicit_seed() {
        let game = TrackedGame::from_snapshot(GameScoreDetails::new(), lineups())
            .with_batter("t3")
            .with_pitcher("o1");
        assert_eq!(game.state().current_batter_id.as_deref(), Some("t3"));
        assert_eq!(game.state().current_pitcher_id.as_deref(), Some("o1"));
    }

    #[test]
    fn test_select_new_batter_resets_count() {
        let mut game = TrackedGame::new(lineups());
        game.details.game_state.balls = 2;
        game.details.game_state.fouls = 1;

        game.select_batter("t1");
        assert_eq!(game.state().balls, 2);

        game.select_batter("t2");
        assert_eq!(game.state().balls, 0);
        assert_eq!(game.state().fouls, 0);
    }

    #[test]
    fn test_player_name_fallback() {
        let game = TrackedGame::new(lineups());
        assert_eq!(game.player_name("o2"), "Emery");
        assert_eq!(game.player_name("ghost"), UNKNOWN_PLAYER);
    }

    #[test]
    fn test_batting_and_fielding_lineups() {
        let mut game = TrackedGame::new(lineups());
        assert_eq!(game.batting_lineup().len(), 4);
        assert_eq!(game.fielding_lineup().len(), 3);

        game.details.game_state.is_top_inning = false;
        assert_eq!(game.batting_lineup().len(), 3);
    }

    #[test]
    fn test_advance_batter_wraps_and_defaults() {
        let mut game = TrackedGame::new(lineups());
        game.advance_batter("t9");
        assert_eq!(game.state().current_batter_id.as_deref(), Some("t1"));

        game.advance_batter("not-in-lineup");
        assert_eq!(game.state().current_batter_id.as_deref(), Some("t1"));
    }

    #[test]
    fn test_new_entry_numbering_and_names() {
        let mut game = TrackedGame::new(lineups());
        let entry = game.new_entry("t1", AtBatResult::Error, 0, None);
        assert_eq!(entry.id, "ab-1");
        assert_eq!(entry.batter_name, "Avery");
        assert_eq!(entry.pitcher_name.as_deref(), Some("Oakley"));
        assert_eq!(entry.errors, 1);

        game.record_entry(entry);
        let next = game.new_entry("t2", AtBatResult::Single, 0, None);
        assert_eq!(next.id, "ab-2");
        assert_eq!(next.errors, 0);
    }
}
