use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::scoring::HoleHandicap;

#[derive(Debug, Deserialize)]
struct HandicapRow {
    hole_number: u8,
    handicap_rank: u8,
}

/// Read hole handicap ranks from a CSV file with `hole_number` and
/// `handicap_rank` columns. Extra columns are ignored.
pub fn read_hole_handicaps(path: &Path) -> Result<Vec<HoleHandicap>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open handicap file at {}", path.display()))?;

    let mut ranks = Vec::new();
    for (i, row) in reader.deserialize::<HandicapRow>().enumerate() {
        // Header is line 1
        let row = row.with_context(|| {
            format!("Invalid handicap row on line {} of {}", i + 2, path.display())
        })?;
        ranks.push(HoleHandicap {
            hole: row.hole_number,
            rank: row.handicap_rank,
        });
    }

    tracing::debug!(count = ranks.len(), path = %path.display(), "read hole handicaps");
    Ok(ranks)
}
