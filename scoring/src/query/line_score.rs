//! Inning-by-inning line score with R/H/E totals

use std::fmt::{Display, Formatter, Write};

use dugout_protocol::{GameScoreDetails, InningScoreRow, Side};

/// Runs, hits and errors for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideTotals {
    pub runs: u32,
    pub hits: u32,
    /// Errors committed in the field
    pub errors: u32,
}

/// The scoreboard view of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScore {
    /// One row per inning played or in progress
    pub innings: Vec<InningScoreRow>,
    pub team: SideTotals,
    pub opponent: SideTotals,

    /// Whether the home half of the last inning hasn't started yet
    pub home_half_pending: bool,
}

impl LineScore {
    pub fn from_details(details: &GameScoreDetails) -> Self {
        let state = &details.game_state;
        let played = (state.current_inning as usize).max(details.inning_scores.len());

        let innings = (1..=played as u32)
            .map(|inning| details.inning_score(inning))
            .collect();

        let mut team = SideTotals {
            runs: details.runs(Side::Team),
            ..SideTotals::default()
        };
        let mut opponent = SideTotals {
            runs: details.runs(Side::Opponent),
            ..SideTotals::default()
        };

        for entry in &details.at_bats {
            let (batting, fielding) = match Side::batting(entry.is_top_inning) {
                Side::Team => (&mut team, &mut opponent),
                Side::Opponent => (&mut opponent, &mut team),
            };
            if entry.result.is_hit() {
                batting.hits += 1;
            }
            fielding.errors += entry.errors;
        }

        Self {
            innings,
            team,
            opponent,
            home_half_pending: state.is_top_inning,
        }
    }

    pub fn totals(&self, side: Side) -> SideTotals {
        match side {
            Side::Team => self.team,
            Side::Opponent => self.opponent,
        }
    }
}

impl Display for LineScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut header = "    ".to_owned();
        let mut team_line = format!("{: <4}", "TEAM");
        let mut opponent_line = format!("{: <4}", "OPP");

        for (idx, row) in self.innings.iter().enumerate() {
            let last = idx + 1 == self.innings.len();
            write!(&mut header, "|{n: ^3}", n = idx + 1)?;
            write!(&mut team_line, "|{n: ^3}", n = row.team)?;
            if last && self.home_half_pending {
                write!(&mut opponent_line, "|{n: ^3}", n = "-")?;
            } else {
                write!(&mut opponent_line, "|{n: ^3}", n = row.opponent)?;
            }
        }

        let width = |pick: fn(&SideTotals) -> u32| {
            let widest = pick(&self.team).max(pick(&self.opponent));
            widest.checked_ilog10().map_or(1, |x| x + 1) as usize
        };
        let (r_width, h_width, e_width) = (
            width(|t| t.runs),
            width(|t| t.hits),
            width(|t| t.errors),
        );

        write!(
            &mut header,
            "|| {r: >r_width$} | {h: >h_width$} | {e: >e_width$} |",
            r = "R",
            h = "H",
            e = "E",
        )?;
        for (line, totals) in [(&mut team_line, self.team), (&mut opponent_line, self.opponent)] {
            write!(
                line,
                "|| {r: >r_width$} | {h: >h_width$} | {e: >e_width$} |",
                r = totals.runs,
                h = totals.hits,
                e = totals.errors,
            )?;
        }

        writeln!(f, "{header}")?;
        writeln!(f, "{team_line}")?;
        write!(f, "{opponent_line}")
    }
}
