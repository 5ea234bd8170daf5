//! Balls, strikes, fouls, outs and half-inning changes

use dugout_protocol::{
    AtBatEntry, AtBatResult, PlayerId, BALLS_FOR_WALK, OUTS_PER_HALF, STRIKES_FOR_STRIKEOUT,
};

use super::game::TrackedGame;
use crate::error::ScoringError;

impl TrackedGame {
    /// Record a ball; the fourth one walks the batter
    ///
    /// Returns the walk entry when the at-bat ends. With no batter selected
    /// the fourth ball is refused and the count stays at three balls.
    pub fn record_ball(&mut self) -> Result<Option<AtBatEntry>, ScoringError> {
        let balls = self.state().balls + 1;

        if balls >= BALLS_FOR_WALK {
            self.require_batter()?;
            self.details.game_state.balls = balls;
            return self.resolve_at_bat(AtBatResult::Walk).map(Some);
        }

        self.details.game_state.balls = balls;
        tracing::debug!(balls, strikes = self.state().strikes, "ball");
        Ok(None)
    }

    /// Record a strike; the third one strikes the batter out
    pub fn record_strike(&mut self) -> Result<Option<AtBatEntry>, ScoringError> {
        let strikes = self.state().strikes + 1;

        if strikes >= STRIKES_FOR_STRIKEOUT {
            self.require_batter()?;
            self.details.game_state.strikes = strikes;
            return self.resolve_at_bat(AtBatResult::Strikeout).map(Some);
        }

        self.details.game_state.strikes = strikes;
        tracing::debug!(balls = self.state().balls, strikes, "strike");
        Ok(None)
    }

    /// Record a foul ball
    ///
    /// Counts as a strike until the batter has two; never ends the at-bat.
    pub fn record_foul(&mut self) {
        let state = &mut self.details.game_state;
        state.fouls += 1;
        if state.strikes + 1 < STRIKES_FOR_STRIKEOUT {
            state.strikes += 1;
        }
        tracing::debug!(strikes = state.strikes, fouls = state.fouls, "foul");
    }

    /// Record an out outside of a resolved at-bat
    ///
    /// Returns true when this was the third out and the half-inning changed.
    pub fn record_out(&mut self) -> bool {
        let outs = self.state().outs + 1;
        let batter = self.state().current_batter_id.clone();

        if outs >= OUTS_PER_HALF {
            let next_due = batter.and_then(|b| {
                self.batting_lineup()
                    .next_after(&b)
                    .map(|p| p.player_id.clone())
            });
            self.end_half_inning(next_due);
            return true;
        }

        self.details.game_state.outs = outs;
        match batter {
            Some(batter) => self.advance_batter(&batter),
            None => self.details.game_state.reset_count(),
        }
        tracing::debug!(outs, "out recorded");
        false
    }

    /// Switch sides
    ///
    /// The current batter stays due up for their side's next turn at bat.
    pub fn transition_half_inning(&mut self) {
        let next_due = self.state().current_batter_id.clone();
        self.end_half_inning(next_due);
    }

    /// Switch sides, remembering `next_due` as the departing side's next batter
    ///
    /// This is the only place bases are guaranteed to be cleared.
    pub(crate) fn end_half_inning(&mut self, next_due: Option<PlayerId>) {
        let leaving_batting = self.state().batting_side();
        let leaving_fielding = self.state().fielding_side();

        let state = &mut self.details.game_state;
        state.due_up.set(leaving_batting, next_due);
        let pitcher = state.current_pitcher_id.clone();
        state.pitchers.set(leaving_fielding, pitcher);

        if !state.is_top_inning {
            state.current_inning += 1;
        }
        state.is_top_inning = !state.is_top_inning;
        state.outs = 0;
        state.reset_count();
        state.bases.clear();

        let batting = self.state().batting_side();
        let batter = self.due_up_for(batting);
        let pitcher = self.pitcher_for(batting.other());

        let state = &mut self.details.game_state;
        state.current_batter_id = batter;
        state.current_pitcher_id = pitcher;

        tracing::info!(
            inning = state.current_inning,
            top = state.is_top_inning,
            batter = ?state.current_batter_id,
            pitcher = ?state.current_pitcher_id,
            "half-inning change"
        );
    }

    /// The batter at the plate, who can't also be a runner
    pub(crate) fn require_batter(&self) -> Result<PlayerId, ScoringError> {
        let state = self.state();
        let batter = state.current_batter_id.clone().ok_or(ScoringError::NoBatter)?;
        if let Some(base) = state.bases.find_runner(&batter) {
            return Err(ScoringError::BatterOnBase(base));
        }
        Ok(batter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::fixtures::{bases, game_with, lineups};
    use dugout_protocol::{GameScoreDetails, Lineups, SideSlots};

    #[test]
    fn test_balls_accumulate() {
        let mut game = TrackedGame::new(lineups());
        for expected in 1..=3 {
            assert_eq!(game.record_ball(), Ok(None));
            assert_eq!(game.state().balls, expected);
        }
    }

    #[test]
    fn test_fourth_ball_walks() {
        let mut game = TrackedGame::new(lineups());
        for _ in 0..3 {
            game.record_ball().unwrap();
        }

        let entry = game.record_ball().unwrap().unwrap();
        assert_eq!(entry.result, AtBatResult::Walk);
        assert_eq!(entry.balls, 4);
        assert_eq!(entry.batter_id, "t1");

        let state = game.state();
        assert_eq!(state.balls, 0);
        assert_eq!(state.bases.first.as_deref(), Some("t1"));
        assert_eq!(state.current_batter_id.as_deref(), Some("t2"));
    }

    #[test]
    fn test_balls_never_rest_above_three() {
        let mut game = TrackedGame::new(lineups());
        for _ in 0..25 {
            game.record_ball().unwrap();
            assert!(game.state().balls <= 3);
        }
        // 25 balls = 6 walks and one ball on the next batter
        assert_eq!(game.details().at_bats.len(), 6);
        assert_eq!(game.state().balls, 1);
    }

    #[test]
    fn test_fourth_ball_without_batter_is_refused() {
        let mut game = TrackedGame::new(Lineups::default());
        for _ in 0..3 {
            game.record_ball().unwrap();
        }

        let before = game.snapshot();
        assert_eq!(game.record_ball(), Err(ScoringError::NoBatter));
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.state().balls, 3);
    }

    #[test]
    fn test_third_strike_strikes_out() {
        let mut game = TrackedGame::new(lineups());
        assert_eq!(game.record_strike(), Ok(None));
        assert_eq!(game.record_strike(), Ok(None));

        let entry = game.record_strike().unwrap().unwrap();
        assert_eq!(entry.result, AtBatResult::Strikeout);
        assert_eq!(entry.strikes, 3);

        let state = game.state();
        assert_eq!(state.strikes, 0);
        assert_eq!(state.outs, 1);
        assert_eq!(state.current_batter_id.as_deref(), Some("t2"));
    }

    #[test]
    fn test_foul_counts_as_strike_before_two() {
        let mut game = TrackedGame::new(lineups());
        game.record_foul();
        game.record_foul();
        assert_eq!(game.state().strikes, 2);
        assert_eq!(game.state().fouls, 2);
        assert!(game.details().at_bats.is_empty());
    }

    #[test]
    fn test_foul_with_two_strikes_only_counts_foul() {
        let mut game = TrackedGame::new(lineups());
        game.record_strike().unwrap();
        game.record_strike().unwrap();

        for fouls in 1..=5 {
            game.record_foul();
            assert_eq!(game.state().strikes, 2);
            assert_eq!(game.state().fouls, fouls);
        }
        assert!(game.details().at_bats.is_empty());
        assert_eq!(game.state().current_batter_id.as_deref(), Some("t1"));
    }

    #[test]
    fn test_record_out_moves_to_next_batter() {
        let mut game = TrackedGame::new(lineups());
        game.record_ball().unwrap();
        game.record_strike().unwrap();

        assert!(!game.record_out());
        let state = game.state();
        assert_eq!(state.outs, 1);
        assert_eq!((state.balls, state.strikes), (0, 0));
        assert_eq!(state.current_batter_id.as_deref(), Some("t2"));
    }

    #[test]
    fn test_third_out_changes_sides() {
        let mut game = game_with(bases(Some("t2"), Some("t3"), Some("t9")), 2);
        game.record_ball().unwrap();
        game.record_strike().unwrap();

        assert!(game.record_out());

        let state = game.state();
        assert_eq!(state.current_inning, 1);
        assert!(!state.is_top_inning);
        assert_eq!((state.outs, state.balls, state.strikes), (0, 0, 0));
        assert!(state.bases.is_empty());
        assert_eq!(state.current_batter_id.as_deref(), Some("o1"));
        assert_eq!(state.current_pitcher_id.as_deref(), Some("t9"));
    }

    #[test]
    fn test_bottom_to_top_increments_inning() {
        let mut game = TrackedGame::new(lineups());
        game.transition_half_inning();
        assert_eq!(game.state().current_inning, 1);
        assert!(!game.state().is_top_inning);

        game.transition_half_inning();
        assert_eq!(game.state().current_inning, 2);
        assert!(game.state().is_top_inning);
    }

    #[test]
    fn test_batting_order_resumes_next_inning() {
        let mut game = TrackedGame::new(lineups());
        // t1, t2, t3 each make an out
        for _ in 0..3 {
            game.record_out();
        }
        assert_eq!(game.state().current_batter_id.as_deref(), Some("o1"));
        assert_eq!(game.state().current_pitcher_id.as_deref(), Some("t9"));

        game.transition_half_inning();
        assert_eq!(game.state().current_batter_id.as_deref(), Some("t9"));
        assert_eq!(game.state().current_pitcher_id.as_deref(), Some("o9"));
    }

    #[test]
    fn test_resumed_game_brings_up_same_batter() {
        let mut live = TrackedGame::new(lineups());
        // t1, t2, t3 retired without any log entries
        for _ in 0..3 {
            live.record_out();
        }

        let mut resumed = TrackedGame::from_snapshot(live.snapshot(), lineups());
        live.transition_half_inning();
        resumed.transition_half_inning();

        assert_eq!(resumed.state().current_batter_id.as_deref(), Some("t9"));
        assert_eq!(resumed.state().current_pitcher_id.as_deref(), Some("o9"));
        assert_eq!(resumed.snapshot(), live.snapshot());
    }

    #[test]
    fn test_due_up_recovered_from_log_without_slots() {
        let mut game = TrackedGame::new(lineups());
        game.resolve_at_bat(AtBatResult::Single).unwrap();
        game.resolve_at_bat(AtBatResult::Double).unwrap();
        game.transition_half_inning();

        // Document written before due-up slots were stored
        let mut details: GameScoreDetails = game.snapshot();
        details.game_state.due_up = SideSlots::default();
        details.game_state.pitchers = SideSlots::default();
        let mut resumed = TrackedGame::from_snapshot(details, lineups());
        resumed.transition_half_inning();

        assert_eq!(resumed.state().current_batter_id.as_deref(), Some("t3"));
        assert_eq!(resumed.state().current_pitcher_id.as_deref(), Some("o9"));
    }
}
