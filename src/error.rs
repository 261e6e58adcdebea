use crate::models::StatType;
use thiserror::Error;

/// Errors the analyzer can produce
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyzerError {
    /// No season observations exist for the requested player/stat, so no
    /// meaningful expected value can be computed. Recoverable: a batch
    /// caller skips the player and continues.
    #[error("insufficient data: no {stat_type} observations for player {player_id}")]
    InsufficientData {
        player_id: String,
        stat_type: StatType,
    },

    /// Invalid tuning parameters (weights not summing to 1.0, bad threshold
    /// ordering). Fails fast before any player is analyzed, since every
    /// subsequent computation would be wrong.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
