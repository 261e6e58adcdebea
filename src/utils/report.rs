use crate::models::{LineQuote, Recommendation, StatObservation};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a game-log snapshot (JSON array of observations) from disk
pub fn load_observations<P: AsRef<Path>>(path: P) -> Result<Vec<StatObservation>> {
    let json = std::fs::read_to_string(path.as_ref()).context("Failed to read snapshot file")?;
    let observations: Vec<StatObservation> =
        serde_json::from_str(&json).context("Failed to deserialize observations")?;
    Ok(observations)
}

/// Save a game-log snapshot as pretty JSON
pub fn save_observations<P: AsRef<Path>>(observations: &[StatObservation], path: P) -> Result<()> {
    let json =
        serde_json::to_string_pretty(observations).context("Failed to serialize observations")?;
    std::fs::write(path.as_ref(), json).context("Failed to write snapshot file")?;
    Ok(())
}

/// Load posted lines (JSON array of quotes) from disk
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<LineQuote>> {
    let json = std::fs::read_to_string(path.as_ref()).context("Failed to read lines file")?;
    let lines: Vec<LineQuote> =
        serde_json::from_str(&json).context("Failed to deserialize line quotes")?;
    Ok(lines)
}

/// Save ranked recommendations to CSV, one flat row per play
pub fn save_recommendations_to_csv<P: AsRef<Path>>(
    recommendations: &[Recommendation],
    path: P,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref()).context("Failed to create CSV file")?;
    for recommendation in recommendations {
        writer
            .serialize(recommendation)
            .context("Failed to write recommendation row")?;
    }
    writer.flush().context("Failed to flush CSV file")?;
    Ok(())
}
