//! Reading game snapshots from disk

use anyhow::{Context, Result};
use babybet_domain::{AppError, GameSnapshot};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialization of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Format from the file extension; JSON unless the file ends in `.yaml` or `.yml`
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse a snapshot document
pub fn parse_snapshot(contents: &str, format: SnapshotFormat) -> Result<GameSnapshot, AppError> {
    match format {
        SnapshotFormat::Json => Ok(serde_json::from_str(contents)?),
        SnapshotFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|e| AppError::Serialization(e.to_string()))
        }
    }
}

/// Read and parse a snapshot file
pub fn load_snapshot(path: &Path) -> Result<GameSnapshot> {
    let contents = fs::read_to_string(path)
        .map_err(|e| AppError::Io(e.to_string()))
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let format = SnapshotFormat::from_path(path);

    let game = parse_snapshot(&contents, format)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;

    debug!(
        game_id = %game.id,
        questions = game.questions.len(),
        bets = game.bets.len(),
        ?format,
        "Loaded snapshot"
    );
    Ok(game)
}
