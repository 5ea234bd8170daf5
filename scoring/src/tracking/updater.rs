//! Dispatch of ScoringCommand into game state

use dugout_protocol::{AtBatEntry, ScoringCommand};

use super::game::TrackedGame;
use crate::error::ScoringError;

impl TrackedGame {
    /// Apply one command from the scoring UI
    ///
    /// Returns the log entries the command produced (none for most count
    /// events). On `Err` the game is unchanged.
    pub fn update(&mut self, command: &ScoringCommand) -> Result<Vec<AtBatEntry>, ScoringError> {
        let outcome = match command {
            // === Count ===
            ScoringCommand::Ball => self.record_ball().map(|e| e.into_iter().collect()),

            ScoringCommand::Strike => self.record_strike().map(|e| e.into_iter().collect()),

            ScoringCommand::Foul => {
                self.record_foul();
                Ok(Vec::new())
            }

            ScoringCommand::Out => {
                if self.record_out() {
                    tracing::info!(next_half = %self.state().half_label(), "third out recorded");
                }
                Ok(Vec::new())
            }

            // === Plays ===
            ScoringCommand::AtBat { result } => self.resolve_at_bat(*result).map(|e| vec![e]),

            ScoringCommand::StealAttempt { from, outcomes } => {
                self.record_steal_attempt(*from, outcomes)
            }

            // === Selection ===
            ScoringCommand::SelectBatter { player_id } => {
                self.select_batter(player_id.clone());
                Ok(Vec::new())
            }

            ScoringCommand::SelectPitcher { player_id } => {
                self.select_pitcher(player_id.clone());
                Ok(Vec::new())
            }
        };

        if let Err(err) = &outcome {
            tracing::warn!(command = %command.to_wire_format(), error = %err, "command ignored");
        }

        outcome
    }

    /// Apply a sequence of commands, skipping the ones that are refused
    ///
    /// Returns every entry produced and the refused commands with their reasons.
    pub fn update_all<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a ScoringCommand>,
    ) -> (Vec<AtBatEntry>, Vec<(&'a ScoringCommand, ScoringError)>) {
        let mut entries = Vec::new();
        let mut refused = Vec::new();

        for command in commands {
            match self.update(command) {
                Ok(mut produced) => entries.append(&mut produced),
                Err(err) => refused.push((command, err)),
            }
        }

        (entries, refused)
    }
}
