use crate::config::BlendWeights;
use crate::models::{StatObservation, StatType};

/// Arithmetic mean of a player's season observations for one stat.
/// Returns the sample size alongside the average: a size of 0 means
/// "unavailable" and the average must not be used as a real value.
pub fn season_average(observations: &[StatObservation], stat_type: StatType) -> (f64, usize) {
    let values: Vec<f64> = observations
        .iter()
        .filter(|obs| obs.stat_type == stat_type)
        .map(|obs| obs.value)
        .collect();

    if values.is_empty() {
        return (0.0, 0);
    }

    let sum: f64 = values.iter().sum();
    (sum / values.len() as f64, values.len())
}

/// Average over the player's most recent `window` games for one stat.
/// Histories shorter than the window are averaged over what exists.
pub fn recent_average(
    observations: &[StatObservation],
    stat_type: StatType,
    window: usize,
) -> (f64, usize) {
    let mut matching: Vec<&StatObservation> = observations
        .iter()
        .filter(|obs| obs.stat_type == stat_type)
        .collect();

    // Most recent first
    matching.sort_by(|a, b| b.game_date.cmp(&a.game_date));

    let recent: Vec<f64> = matching.iter().take(window).map(|obs| obs.value).collect();
    if recent.is_empty() {
        return (0.0, 0);
    }

    let sum: f64 = recent.iter().sum();
    (sum / recent.len() as f64, recent.len())
}

/// Weighted linear blend of the three expected-value components.
///
/// Does not validate the weights itself: the orchestrated paths
/// (`analyze_line`, `find_best_plays`) run `BlendWeights::validate` before
/// any observation is touched. Callers blending directly must do the same,
/// or the result is meaningless.
pub fn expected_value(
    season_avg: f64,
    recent_avg: f64,
    opponent_adj: f64,
    weights: &BlendWeights,
) -> f64 {
    season_avg * weights.season + recent_avg * weights.recent + opponent_adj * weights.opponent
}

/// Population standard deviation over the player's full season sample for
/// one stat. Returns 0.0 for samples of size <= 1 so downstream z-score
/// math never divides by zero.
pub fn standard_deviation(observations: &[StatObservation], stat_type: StatType) -> f64 {
    let values: Vec<f64> = observations
        .iter()
        .filter(|obs| obs.stat_type == stat_type)
        .map(|obs| obs.value)
        .collect();

    if values.len() <= 1 {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}
