//! Folding log entries into player stats and inning scores

use dugout_protocol::{
    AtBatEntry, AtBatResult, GameScoreDetails, InningScoreRow, PlayerStatLine, Side,
};

/// Fold one resolved entry into the game's stats
///
/// Plate appearances update the batter's line and credit their RBI to the
/// inning row. Steal entries are log-only here; runs scored on a steal are
/// credited by the caller through [`credit_runs`].
pub fn fold_entry(details: &mut GameScoreDetails, entry: &AtBatEntry) {
    if entry.is_steal() {
        return;
    }

    let line = get_or_create_line(&mut details.player_stats, &entry.batter_id, &entry.batter_name);
    fold_batting_line(line, entry);

    if entry.rbi > 0 {
        credit_runs(
            &mut details.inning_scores,
            entry.inning,
            Side::batting(entry.is_top_inning),
            entry.rbi,
        );
    }
}

/// Apply one plate appearance to a batter's counting stats
pub fn fold_batting_line(line: &mut PlayerStatLine, entry: &AtBatEntry) {
    let result = entry.result;

    if result.counts_as_at_bat() {
        line.at_bats += 1;
    }

    if result.is_hit() {
        line.hits += 1;
    }

    match result {
        AtBatResult::Single => line.singles += 1,
        AtBatResult::Double => line.doubles += 1,
        AtBatResult::Triple => line.triples += 1,
        AtBatResult::Homerun => {
            line.homeruns += 1;
            line.runs += 1;
        }
        AtBatResult::Walk | AtBatResult::HitByPitch => line.walks += 1,
        AtBatResult::Strikeout => line.strikeouts += 1,
        _ => {}
    }

    line.rbi += entry.rbi;
    line.errors += entry.errors;
}

/// Add runs to a side's row for an inning, padding missing rows with zeros
pub fn credit_runs(rows: &mut Vec<InningScoreRow>, inning: u32, side: Side, runs: u32) {
    let Some(idx) = inning.checked_sub(1).map(|i| i as usize) else {
        return;
    };

    if rows.len() <= idx {
        rows.resize(idx + 1, InningScoreRow::default());
    }
    rows[idx].add_runs(side, runs);
}

/// Get or create a player's stat line
pub fn get_or_create_line<'a>(
    stats: &'a mut Vec<PlayerStatLine>,
    player_id: &str,
    player_name: &str,
) -> &'a mut PlayerStatLine {
    let idx = match stats.iter().position(|s| s.player_id == player_id) {
        Some(idx) => idx,
        None => {
            stats.push(PlayerStatLine::new(player_id, player_name));
            stats.len() - 1
        }
    };
    &mut stats[idx]
}

/// Rebuild inning scores and player stats from a play log alone
///
/// Steals of home count one run each, so the result matches what live
/// scoring accumulated for the same log.
pub fn replay_log(entries: &[AtBatEntry]) -> (Vec<InningScoreRow>, Vec<PlayerStatLine>) {
    let mut details = GameScoreDetails::new();

    for entry in entries {
        fold_entry(&mut details, entry);
        if entry.stole_home() {
            credit_runs(
                &mut details.inning_scores,
                entry.inning,
                Side::batting(entry.is_top_inning),
                1,
            );
        }
    }

    (details.inning_scores, details.player_stats)
}
