use anyhow::{Context, Result};
use dugout_protocol::{
    AtBatEntry, GameScoreDetails, Lineups, PlayerId, ScoringCommand, parse_command,
};
use dugout_scoring::{ScoringError, TrackedGame};

use crate::store::GameStore;

/// Batter and pitcher chosen in the scoring UI before the session opened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSeed {
    pub batter_id: Option<PlayerId>,
    pub pitcher_id: Option<PlayerId>,
}

impl SessionSeed {
    pub fn batter(mut self, player_id: impl Into<PlayerId>) -> Self {
        self.batter_id = Some(player_id.into());
        self
    }

    pub fn pitcher(mut self, player_id: impl Into<PlayerId>) -> Self {
        self.pitcher_id = Some(player_id.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.batter_id.is_none() && self.pitcher_id.is_none()
    }
}

/// What applying a command did
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// The snapshot changed and was written; `entries` were appended to the log
    Changed { entries: Vec<AtBatEntry> },
    /// The engine refused the command; nothing changed and nothing was written
    Ignored(ScoringError),
}

impl Applied {
    pub fn is_changed(&self) -> bool {
        matches!(self, Applied::Changed { .. })
    }
}

/// One game being scored, persisted after every change
pub struct ScoringSession<S> {
    game_id: String,
    store: S,
    game: TrackedGame,
    dirty: bool,
}

impl<S: GameStore> ScoringSession<S> {
    /// Open a game, resuming it from `store` if it was saved before
    pub async fn open(game_id: impl Into<String>, store: S, lineups: Lineups) -> Result<Self> {
        Self::open_with(game_id, store, lineups, SessionSeed::default()).await
    }

    /// Open a game and put the seeded batter and pitcher in place
    pub async fn open_with(
        game_id: impl Into<String>,
        store: S,
        lineups: Lineups,
        seed: SessionSeed,
    ) -> Result<Self> {
        let game_id = game_id.into();
        let stored = store
            .load(&game_id)
            .await
            .with_context(|| format!("Failed to load game {game_id}"))?;

        let (mut game, dirty) = match stored {
            Some(details) => {
                tracing::info!(
                    game_id = %game_id,
                    at_bats = details.at_bats.len(),
                    inning = %details.game_state.half_label(),
                    "resuming game"
                );
                (TrackedGame::from_snapshot(details, lineups), false)
            }
            None => {
                tracing::info!(game_id = %game_id, "starting new game");
                (TrackedGame::new(lineups), true)
            }
        };

        let seeded = !seed.is_empty();
        if let Some(batter_id) = seed.batter_id {
            game.select_batter(batter_id);
        }
        if let Some(pitcher_id) = seed.pitcher_id {
            game.select_pitcher(pitcher_id);
        }

        Ok(Self {
            game_id,
            store,
            game,
            dirty: dirty || seeded,
        })
    }

    /// Apply a command and write the new snapshot
    ///
    /// A refused command is reported as [`Applied::Ignored`] and costs no
    /// write. If the write fails the change is kept in memory, the session
    /// stays dirty and the error is returned; [`flush`](Self::flush) retries.
    pub async fn apply(&mut self, command: &ScoringCommand) -> Result<Applied> {
        let entries = match self.game.update(command) {
            Ok(entries) => entries,
            Err(err) => return Ok(Applied::Ignored(err)),
        };

        self.dirty = true;
        self.flush().await?;
        Ok(Applied::Changed { entries })
    }

    /// Parse a pipe or JSON command line and apply it
    pub async fn apply_line(&mut self, line: &str) -> Result<Applied> {
        let command =
            parse_command(line).with_context(|| format!("Failed to parse command {line:?}"))?;
        self.apply(&command).await
    }

    /// Write the snapshot if it has unsaved changes
    pub async fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        if let Err(e) = self.store.save(&self.game_id, self.game.details()).await {
            tracing::warn!(game_id = %self.game_id, error = %e, "failed to save game");
            return Err(e.context(format!("Failed to save game {}", self.game_id)));
        }

        self.dirty = false;
        Ok(())
    }

    /// Flush and hand back the final snapshot
    pub async fn close(mut self) -> Result<GameScoreDetails> {
        self.flush().await?;
        Ok(self.game.into_details())
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn game(&self) -> &TrackedGame {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the snapshot has changes the store hasn't seen
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
