use super::types::{ScoreStore, STORE_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default score store path (~/.config/callaway-scorer/scores.json)
pub fn get_store_path() -> PathBuf {
    crate::config::get_config_dir().join("scores.json")
}

/// Load the score store from a JSON file
///
/// If the file doesn't exist, returns a new empty store.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_store(path: &Path) -> Result<ScoreStore> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no score store yet, starting empty");
        return Ok(ScoreStore::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open score store at {}", path.display()))?;

    let store: ScoreStore = serde_json::from_reader(file)
        .with_context(|| format!("Failed to load score store from {}", path.display()))?;

    if store.version != STORE_VERSION {
        anyhow::bail!("Unsupported score store version: {}", store.version);
    }

    tracing::debug!(
        players = store.players.len(),
        rounds = store.rounds.len(),
        archived = store.archive.len(),
        "loaded score store"
    );
    Ok(store)
}

/// Save the score store to a JSON file atomically
///
/// The file is never left half written. Creates the parent directory if needed.
pub fn save_store(path: &Path, store: &ScoreStore) -> Result<()> {
    crate::config::ensure_parent_dir(path)?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, store).context("Failed to serialize score store")?;

    file.commit().context("Failed to save score store")?;

    tracing::debug!(path = %path.display(), "saved score store");
    Ok(())
}
