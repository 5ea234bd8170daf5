//! Steal attempts and other runner advancement between pitches

use std::collections::BTreeMap;

use dugout_protocol::{
    AtBatEntry, AtBatResult, Base, BaseStealDetails, PlayerId, StealOutcome, OUTS_PER_HALF,
};

use super::game::TrackedGame;
use crate::error::ScoringError;
use crate::stats;

/// One runner's part in a steal attempt
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunnerMove {
    runner: PlayerId,
    from: Base,
    to: Base,
    safe: bool,
}

impl TrackedGame {
    /// Process a steal attempt started by the runner on `from`
    ///
    /// `outcomes` must call the originating runner safe or out; other occupied
    /// bases may be called safe, out or stays (missing means stays). All
    /// runners move at once. Returns one log entry per runner who ran.
    ///
    /// On a third out the half-inning ends and the new occupancy is dropped,
    /// but runs that crossed the plate still count.
    pub fn record_steal_attempt(
        &mut self,
        from: Base,
        outcomes: &BTreeMap<Base, StealOutcome>,
    ) -> Result<Vec<AtBatEntry>, ScoringError> {
        let moves = self.plan_steal(from, outcomes)?;
        let mut bases = self.state().bases.clone();

        for runner in &moves {
            bases.take(runner.from);
        }

        let mut runs = 0;
        for runner in moves.iter().filter(|m| m.safe) {
            if runner.to == Base::Home {
                runs += 1;
            } else if bases.is_occupied(runner.to) {
                return Err(ScoringError::BaseConflict(runner.to));
            } else {
                bases.set(runner.to, Some(runner.runner.clone()));
            }
        }

        let outs_added = moves.iter().filter(|m| !m.safe).count() as u8;

        let mut logged = Vec::with_capacity(moves.len());
        for m in &moves {
            let result = if m.safe {
                AtBatResult::StolenBase
            } else {
                AtBatResult::CaughtStealing
            };
            let details = BaseStealDetails {
                from: m.from,
                to: m.to,
            };
            tracing::debug!(runner = %m.runner, from = %m.from, to = %m.to, safe = m.safe, "steal attempt");

            let entry = self.new_entry(&m.runner, result, 0, Some(details));
            self.record_entry(entry.clone());
            logged.push(entry);
        }

        if runs > 0 {
            let state = self.state();
            let (inning, side) = (state.current_inning, state.batting_side());
            stats::credit_runs(&mut self.details.inning_scores, inning, side, runs);
            tracing::info!(inning, side = ?side, runs, "runs scored on steal");
        }

        let outs = self.state().outs + outs_added;
        if outs >= OUTS_PER_HALF {
            self.transition_half_inning();
        } else {
            let state = &mut self.details.game_state;
            state.outs = outs;
            state.bases = bases;
        }

        Ok(logged)
    }

    /// Check preconditions and list the runners who run, originating runner first
    fn plan_steal(
        &self,
        from: Base,
        outcomes: &BTreeMap<Base, StealOutcome>,
    ) -> Result<Vec<RunnerMove>, ScoringError> {
        let Some(to) = from.next() else {
            return Err(ScoringError::InvalidStealOrigin(from));
        };

        let bases = &self.state().bases;
        let runner = bases.get(from).ok_or(ScoringError::EmptyBase(from))?;

        let safe = match outcomes.get(&from) {
            Some(StealOutcome::Safe) => true,
            Some(StealOutcome::Out) => false,
            Some(StealOutcome::Stays) | None => {
                return Err(ScoringError::MissingOriginOutcome(from));
            }
        };

        let mut moves = vec![RunnerMove {
            runner: runner.clone(),
            from,
            to,
            safe,
        }];

        for (base, runner) in bases.occupied().filter(|(base, _)| *base != from) {
            let safe = match outcomes.get(&base) {
                Some(StealOutcome::Safe) => true,
                Some(StealOutcome::Out) => false,
                Some(StealOutcome::Stays) | None => continue,
            };
            if let Some(to) = base.next() {
                moves.push(RunnerMove {
                    runner: runner.clone(),
                    from: base,
                    to,
                    safe,
                });
            }
        }

        Ok(moves)
    }
}
