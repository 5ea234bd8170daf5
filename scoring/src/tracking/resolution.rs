//! Plate-appearance resolution: RBI, base advancement and outs

use dugout_protocol::{AtBatEntry, AtBatResult, Bases, OUTS_PER_HALF};

use super::game::TrackedGame;
use crate::error::ScoringError;

/// What a plate appearance does to the bases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateOutcome {
    /// Occupancy after the play (before any half-inning change)
    pub bases: Bases,

    /// Runs driven in, including the batter on a home run
    pub rbi: u32,

    /// Outs recorded on the play
    pub outs: u8,

    /// Whether the batter crossed the plate
    pub batter_scored: bool,
}

impl PlateOutcome {
    fn unchanged(bases: &Bases, outs: u8) -> Self {
        Self {
            bases: bases.clone(),
            rbi: 0,
            outs,
            batter_scored: false,
        }
    }
}

/// Resolve a plate appearance against the current base occupancy
///
/// Returns `None` for base-running results, which never come out of a plate
/// appearance.
pub fn resolve_plate_appearance(
    bases: &Bases,
    batter: &str,
    result: AtBatResult,
) -> Option<PlateOutcome> {
    let batter = Some(batter.to_string());
    let runner_on_third = u32::from(bases.third.is_some());

    let outcome = match result {
        AtBatResult::Homerun => PlateOutcome {
            bases: Bases::new(),
            rbi: bases.runner_count() as u32 + 1,
            outs: 0,
            batter_scored: true,
        },

        AtBatResult::Triple => PlateOutcome {
            bases: Bases {
                first: None,
                second: None,
                third: batter,
            },
            rbi: bases.runner_count() as u32,
            outs: 0,
            batter_scored: false,
        },

        AtBatResult::Double => PlateOutcome {
            bases: Bases {
                first: None,
                second: batter,
                third: bases.first.clone(),
            },
            rbi: u32::from(bases.second.is_some()) + runner_on_third,
            outs: 0,
            batter_scored: false,
        },

        AtBatResult::Single | AtBatResult::Walk | AtBatResult::HitByPitch => PlateOutcome {
            bases: Bases {
                first: batter,
                second: bases.first.clone(),
                third: bases.second.clone(),
            },
            rbi: runner_on_third,
            outs: 0,
            batter_scored: false,
        },

        AtBatResult::Sacrifice => PlateOutcome {
            bases: Bases {
                first: None,
                second: bases.first.clone(),
                third: bases.second.clone(),
            },
            rbi: runner_on_third,
            outs: 1,
            batter_scored: false,
        },

        AtBatResult::StolenBase | AtBatResult::CaughtStealing => return None,

        // Outs, errors and fouls leave the runners where they are
        other => PlateOutcome::unchanged(bases, u8::from(other.is_out())),
    };

    Some(outcome)
}

impl TrackedGame {
    /// Resolve the current batter's plate appearance
    ///
    /// Logs the entry, folds it into the stats, then either changes sides on
    /// the third out or brings up the next batter.
    pub fn resolve_at_bat(&mut self, result: AtBatResult) -> Result<AtBatEntry, ScoringError> {
        let batter = self.require_batter()?;
        let outcome = resolve_plate_appearance(&self.state().bases, &batter, result)
            .ok_or(ScoringError::NotPlateAppearance(result))?;

        let entry = self.new_entry(&batter, result, outcome.rbi, None);

        tracing::debug!(
            batter = %batter,
            result = %result,
            rbi = outcome.rbi,
            outs_added = outcome.outs,
            "at-bat resolved"
        );
        if outcome.rbi > 0 {
            tracing::info!(
                inning = entry.inning,
                top = entry.is_top_inning,
                runs = outcome.rbi,
                "runs scored"
            );
        }

        self.record_entry(entry.clone());

        let outs = self.state().outs + outcome.outs;
        if outs >= OUTS_PER_HALF {
            let next_due = self
                .batting_lineup()
                .next_after(&batter)
                .map(|p| p.player_id.clone());
            self.end_half_inning(next_due);
        } else {
            let state = &mut self.details.game_state;
            state.outs = outs;
            state.bases = outcome.bases;
            self.advance_batter(&batter);
        }

        Ok(entry)
    }
}
