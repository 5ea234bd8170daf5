use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use dugout_protocol::GameScoreDetails;
use tokio::sync::RwLock;

/// Where game snapshots are kept between sessions
///
/// `load` returns `Ok(None)` for a game that has never been saved.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn save(&self, game_id: &str, details: &GameScoreDetails) -> Result<()>;

    async fn load(&self, game_id: &str) -> Result<Option<GameScoreDetails>>;
}

#[async_trait]
impl<S: GameStore + ?Sized> GameStore for Arc<S> {
    async fn save(&self, game_id: &str, details: &GameScoreDetails) -> Result<()> {
        (**self).save(game_id, details).await
    }

    async fn load(&self, game_id: &str) -> Result<Option<GameScoreDetails>> {
        (**self).load(game_id).await
    }
}

/// Keeps snapshots in memory for the life of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: RwLock<HashMap<String, GameScoreDetails>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of games saved so far
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn save(&self, game_id: &str, details: &GameScoreDetails) -> Result<()> {
        self.games
            .write()
            .await
            .insert(game_id.to_string(), details.clone());
        Ok(())
    }

    async fn load(&self, game_id: &str) -> Result<Option<GameScoreDetails>> {
        Ok(self.games.read().await.get(game_id).cloned())
    }
}

/// File store settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one `<game_id>.json` file per game
    pub dir: PathBuf,
    /// Write indented JSON
    pub pretty: bool,
}

impl StoreConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./games"),
            pretty: true,
        }
    }
}

/// Stores each game as a JSON document on disk
#[derive(Debug, Clone, Default)]
pub struct JsonFileStore {
    config: StoreConfig,
}

impl JsonFileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Path of the file backing `game_id`
    pub fn path_for(&self, game_id: &str) -> Result<PathBuf> {
        let valid = !game_id.is_empty()
            && game_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        anyhow::ensure!(valid, "Invalid game id: {:?}", game_id);

        Ok(self.config.dir.join(format!("{game_id}.json")))
    }
}

#[async_trait]
impl GameStore for JsonFileStore {
    async fn save(&self, game_id: &str, details: &GameScoreDetails) -> Result<()> {
        let path = self.path_for(game_id)?;

        let json = if self.config.pretty {
            serde_json::to_string_pretty(details)
        } else {
            serde_json::to_string(details)
        }
        .context("Failed to serialize game")?;

        tokio::fs::create_dir_all(&self.config.dir)
            .await
            .with_context(|| format!("Failed to create {}", self.config.dir.display()))?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::debug!(game_id, path = %path.display(), "game saved");
        Ok(())
    }

    async fn load(&self, game_id: &str) -> Result<Option<GameScoreDetails>> {
        let path = self.path_for(game_id)?;

        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let details = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(details))
    }
}
