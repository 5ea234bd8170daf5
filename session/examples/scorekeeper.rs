//! Score a game from a file of commands
//!
//! ```text
//! cargo run -p dugout-session --example scorekeeper -- <game-id> [commands-file]
//! ```
//!
//! Commands use the pipe form (`|ball`, `|atbat|double`,
//! `|steal|first|first=safe`) one per line; without a file they are read from
//! stdin. Snapshots go to `DUGOUT_GAMES_DIR` (default `./games`), so running
//! again with the same game id picks up where the last run stopped.
//! `DUGOUT_LINEUPS` may point at a JSON file of `{ "team": [...], "opponent": [...] }`.

use anyhow::{Context, Result};
use dugout_protocol::{Lineup, LineupPlayer, Lineups};
use dugout_session::{Applied, JsonFileStore, ScoringSession, StoreConfig};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let game_id = args.next().context("usage: scorekeeper <game-id> [commands-file]")?;
    let input = match args.next() {
        Some(path) if path != "-" => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {path}"))?,
        _ => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read stdin")?;
            input
        }
    };

    let config = match std::env::var("DUGOUT_GAMES_DIR") {
        Ok(dir) => StoreConfig::new(dir),
        Err(_) => StoreConfig::default(),
    };
    let store = JsonFileStore::new(config);
    let mut session = ScoringSession::open(game_id, store, load_lineups().await?).await?;

    for line in input.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Applied::Ignored(err) = session.apply_line(line).await? {
            println!("ignored {line}: {err}");
        }
    }

    let game = session.game();
    println!("{}", game.line_score());
    println!();

    let state = game.state();
    println!(
        "{}, {} out, {}-{} count",
        state.half_label(),
        state.outs,
        state.balls,
        state.strikes
    );
    for (base, runner) in state.bases.occupied() {
        println!("  {base}: {}", game.player_name(runner));
    }
    println!();

    for group in game.play_log() {
        println!("{}", group.label());
        for entry in group.entries {
            println!("  {}", entry.summary());
        }
    }

    session.close().await?;
    Ok(())
}

async fn load_lineups() -> Result<Lineups> {
    let Ok(path) = std::env::var("DUGOUT_LINEUPS") else {
        return Ok(demo_lineups());
    };

    let json = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {path}"))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse lineups in {path}"))
}

fn demo_lineups() -> Lineups {
    let side = |prefix: &str, names: [&str; 9]| -> Lineup {
        const POSITIONS: [&str; 9] = ["CF", "SS", "1B", "LF", "3B", "RF", "C", "2B", "P"];
        names
            .iter()
            .zip(POSITIONS)
            .enumerate()
            .map(|(idx, (name, position))| {
                LineupPlayer::new(format!("{prefix}{}", idx + 1), *name, position)
            })
            .collect()
    };

    Lineups::new(
        side(
            "v",
            ["Avery", "Blake", "Casey", "Dana", "Ellis", "Frankie", "Gray", "Harper", "Indy"],
        ),
        side(
            "h",
            ["Jordan", "Kai", "Logan", "Morgan", "Noel", "Oakley", "Parker", "Quinn", "Reese"],
        ),
    )
}
