//! Analyzer tuning parameters.
//!
//! The blend weights are the primary tuning surface: the default 40/40/20
//! split weighs season form and recent form equally, with opponent defense
//! as a secondary modifier. Everything here is a plain input to the
//! analysis so weighting schemes can be A/B compared without code changes.

use crate::error::AnalyzerError;
use serde::{Deserialize, Serialize};

/// Tolerance for the weights-sum-to-one check
const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// How the three expected-value components are blended
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlendWeights {
    /// Weight on the full-season average
    pub season: f64,
    /// Weight on the recent-window average
    pub recent: f64,
    /// Weight on the opponent defensive adjustment
    pub opponent: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            season: 0.4,
            recent: 0.4,
            opponent: 0.2,
        }
    }
}

impl BlendWeights {
    /// Weights must be finite, non-negative, and sum to 1.0
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if !self.season.is_finite() || !self.recent.is_finite() || !self.opponent.is_finite() {
            return Err(AnalyzerError::Configuration(format!(
                "blend weights must be finite (got {}/{}/{})",
                self.season, self.recent, self.opponent
            )));
        }
        if self.season < 0.0 || self.recent < 0.0 || self.opponent < 0.0 {
            return Err(AnalyzerError::Configuration(format!(
                "blend weights must be non-negative (got {}/{}/{})",
                self.season, self.recent, self.opponent
            )));
        }
        let sum = self.season + self.recent + self.opponent;
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(AnalyzerError::Configuration(format!(
                "blend weights must sum to 1.0 (got {})",
                sum
            )));
        }
        Ok(())
    }
}

/// Z-score cutoffs for the play/no-play decision and confidence tiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZScoreThresholds {
    /// Below this |z|, the edge is too small to act on
    pub no_play: f64,
    /// At or above this |z|, the play is high confidence
    pub high: f64,
}

impl Default for ZScoreThresholds {
    fn default() -> Self {
        Self {
            no_play: 0.5,
            high: 1.0,
        }
    }
}

impl ZScoreThresholds {
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if !self.no_play.is_finite() || !self.high.is_finite() {
            return Err(AnalyzerError::Configuration(format!(
                "z-score thresholds must be finite (got no_play {} / high {})",
                self.no_play, self.high
            )));
        }
        if self.no_play < 0.0 {
            return Err(AnalyzerError::Configuration(format!(
                "no_play threshold must be non-negative (got {})",
                self.no_play
            )));
        }
        if self.no_play >= self.high {
            return Err(AnalyzerError::Configuration(format!(
                "no_play threshold must be below high threshold (got {} >= {})",
                self.no_play, self.high
            )));
        }
        Ok(())
    }
}

/// Full analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub weights: BlendWeights,
    /// Number of most recent games in the recent-form average
    pub recent_window: usize,
    pub thresholds: ZScoreThresholds,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            weights: BlendWeights::default(),
            recent_window: 5,
            thresholds: ZScoreThresholds::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_weights(mut self, weights: BlendWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_recent_window(mut self, window: usize) -> Self {
        self.recent_window = window;
        self
    }

    pub fn with_thresholds(mut self, thresholds: ZScoreThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Check all tuning parameters before any analysis runs
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        self.weights.validate()?;
        self.thresholds.validate()?;
        if self.recent_window == 0 {
            return Err(AnalyzerError::Configuration(
                "recent_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
