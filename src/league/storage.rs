use super::types::{PlayerRecord, Players};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load player records from a JSON file.
///
/// Unlike optional state files, the roster is required: the names in it are
/// how transcript lines get recognized. A missing or malformed file is an error.
pub fn load_players(path: &Path) -> Result<Players> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open players file at {}", path.display()))?;

    let players: Players = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse players file: invalid JSON in {}", path.display()))?;

    Ok(players)
}

/// Save player records atomically, pretty-printed with 4-space indentation.
pub fn save_players(path: &Path, players: &Players) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut file, formatter);
    players
        .serialize(&mut serializer)
        .context("Failed to serialize players")?;

    file.commit()
        .with_context(|| format!("Failed to save players to {}", path.display()))?;

    Ok(())
}

/// Zero every player's score, wins and guess distribution.
pub fn reset_players(players: &mut Players) {
    for record in players.values_mut() {
        record.reset();
    }
}

/// All players, highest score first. Equal scores fall back to name order.
pub fn standings(players: &Players) -> Vec<(&str, &PlayerRecord)> {
    let mut rows: Vec<_> = players
        .iter()
        .map(|(name, record)| (name.as_str(), record))
        .collect();
    rows.sort_by(|a, b| b.1.score.cmp(&a.1.score).then_with(|| a.0.cmp(b.0)));
    rows
}

/// Standings restricted to players with at least one solve
pub fn active_standings(players: &Players) -> Vec<(&str, &PlayerRecord)> {
    standings(players)
        .into_iter()
        .filter(|(_, record)| record.is_active())
        .collect()
}
