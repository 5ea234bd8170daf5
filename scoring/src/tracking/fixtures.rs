//! Shared lineups and game setups for engine tests

use dugout_protocol::{Bases, Lineup, LineupPlayer, Lineups};

use super::TrackedGame;

/// Four visiting players (pitcher last) and three home players
pub fn lineups() -> Lineups {
    let team = Lineup::new(vec![
        LineupPlayer::new("t1", "Avery", "SS"),
        LineupPlayer::new("t2", "Blake", "2B"),
        LineupPlayer::new("t3", "Casey", "CF"),
        LineupPlayer::new("t9", "Toby", "P"),
    ]);
    let opponent = Lineup::new(vec![
        LineupPlayer::new("o1", "Drew", "LF"),
        LineupPlayer::new("o2", "Emery", "C"),
        LineupPlayer::new("o9", "Oakley", "P"),
    ]);
    Lineups::new(team, opponent)
}

/// Bases from (first, second, third) runner ids
pub fn bases(first: Option<&str>, second: Option<&str>, third: Option<&str>) -> Bases {
    Bases {
        first: first.map(str::to_string),
        second: second.map(str::to_string),
        third: third.map(str::to_string),
    }
}

/// A new game with the given runners on and outs recorded
pub fn game_with(runners: Bases, outs: u8) -> TrackedGame {
    let mut game = TrackedGame::new(lineups());
    game.details.game_state.bases = runners;
    game.details.game_state.outs = outs;
    game
}
