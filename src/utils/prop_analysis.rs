use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::models::{
    Confidence, DefenseBaselines, ExpectedStats, HistoryProvider, LeagueAverages, LineQuote,
    Recommendation, Side, StatObservation, StatType,
};
use crate::utils::deviation::{expected_value, recent_average, season_average, standard_deviation};
use std::cmp::Ordering;
use tracing::warn;

/// Compute the blended expected value and its component averages for one
/// player/stat. Fails when the player has no season observations for the
/// stat: a missing average is never silently replaced with a default.
pub fn expected_stats(
    player_id: &str,
    stat_type: StatType,
    opponent: &str,
    history: &[StatObservation],
    defense: &DefenseBaselines,
    league_baseline: f64,
    config: &AnalyzerConfig,
) -> Result<ExpectedStats, AnalyzerError> {
    let (season_avg, season_games) = season_average(history, stat_type);
    if season_games == 0 {
        return Err(AnalyzerError::InsufficientData {
            player_id: player_id.to_string(),
            stat_type,
        });
    }

    let (recent_avg, recent_games) = recent_average(history, stat_type, config.recent_window);
    let opponent_adj = defense.opponent_adjustment(opponent, stat_type, league_baseline);
    let expected = expected_value(season_avg, recent_avg, opponent_adj, &config.weights);

    Ok(ExpectedStats {
        season_avg,
        season_games,
        recent_avg,
        recent_games,
        opponent_adj,
        expected,
    })
}

/// Analyze one posted line against a player's history.
///
/// The line-setter is assumed better informed than the naive projection, so
/// large deviations are followed, not faded: a line set above expectation is
/// an OVER, a line set below is an UNDER, and small deviations are no play.
#[allow(clippy::too_many_arguments)]
pub fn analyze_line(
    player_id: &str,
    stat_type: StatType,
    line_value: f64,
    opponent: &str,
    history: &[StatObservation],
    defense: &DefenseBaselines,
    league_baseline: f64,
    config: &AnalyzerConfig,
) -> Result<Recommendation, AnalyzerError> {
    // Configuration errors halt everything before any data is touched
    config.validate()?;

    let stats = expected_stats(
        player_id,
        stat_type,
        opponent,
        history,
        defense,
        league_baseline,
        config,
    )?;

    let deviation = line_value - stats.expected;
    let std_dev = standard_deviation(history, stat_type);

    // Zero variance is not an error: z-score is defined as 0 (no play)
    let z_score = if std_dev > 0.0 { deviation / std_dev } else { 0.0 };
    let abs_z = z_score.abs();

    // A z of exactly 0 (zero variance or line == expected) is never a play,
    // even when the no-play floor is set to 0
    let thresholds = &config.thresholds;
    let (side, confidence) = if z_score == 0.0 || abs_z < thresholds.no_play {
        (Side::NoPlay, Confidence::Low)
    } else {
        let side = if z_score > 0.0 { Side::Over } else { Side::Under };
        let confidence = if abs_z >= thresholds.high {
            Confidence::High
        } else {
            Confidence::Medium
        };
        (side, confidence)
    };

    let reasoning = build_reasoning(deviation, side, &stats);

    Ok(Recommendation {
        player_id: player_id.to_string(),
        stat_type,
        line_value,
        season_avg: stats.season_avg,
        recent_avg: stats.recent_avg,
        opponent_adj: stats.opponent_adj,
        expected: stats.expected,
        deviation,
        std_dev,
        z_score,
        side,
        confidence,
        reasoning,
    })
}

/// Human-readable explanation for a recommendation
fn build_reasoning(deviation: f64, side: Side, stats: &ExpectedStats) -> String {
    match side {
        Side::NoPlay => "Line is close to expected - no edge".to_string(),
        Side::Under => {
            if stats.recent_avg < stats.season_avg {
                format!(
                    "Line set LOW ({:.1} below expected) with the player trending down (recent {:.1} vs season {:.1}). Follow the book: UNDER",
                    deviation.abs(),
                    stats.recent_avg,
                    stats.season_avg
                )
            } else {
                format!(
                    "Line set LOW ({:.1} below expected) despite good recent form. The book knows something: UNDER",
                    deviation.abs()
                )
            }
        }
        Side::Over => {
            if stats.recent_avg > stats.season_avg {
                format!(
                    "Line set HIGH (+{:.1} above expected) with the player trending up (recent {:.1} vs season {:.1}). Follow the book: OVER",
                    deviation,
                    stats.recent_avg,
                    stats.season_avg
                )
            } else {
                format!(
                    "Line set HIGH (+{:.1} above expected) despite down recent form. The book knows something: OVER",
                    deviation
                )
            }
        }
    }
}

/// Filter and order recommendations: drop NO PLAY and anything below the
/// minimum |z-score|, biggest deviations first. Ties break by player id,
/// then stat type, so equal inputs always rank identically.
pub fn rank_plays(mut recommendations: Vec<Recommendation>, min_z_score: f64) -> Vec<Recommendation> {
    recommendations.retain(|rec| rec.side != Side::NoPlay && rec.z_score.abs() >= min_z_score);

    recommendations.sort_by(|a, b| {
        b.z_score
            .abs()
            .partial_cmp(&a.z_score.abs())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.player_id.cmp(&b.player_id))
            .then_with(|| a.stat_type.cmp(&b.stat_type))
    });

    recommendations
}

/// Analyze a slate of posted lines (each paired with the player's opponent)
/// and return the ranked plays.
///
/// Configuration is validated once up front; a bad config fails the whole
/// batch. Per-player data problems do not: players with no usable history
/// are logged and skipped, as are quotes for stats with no league baseline.
pub fn find_best_plays<H: HistoryProvider>(
    slate: &[(LineQuote, String)],
    provider: &H,
    defense: &DefenseBaselines,
    league: &LeagueAverages,
    config: &AnalyzerConfig,
    min_z_score: f64,
) -> Result<Vec<Recommendation>, AnalyzerError> {
    config.validate()?;

    let mut plays = Vec::new();

    for (quote, opponent) in slate {
        let league_baseline = match league.get(quote.stat_type) {
            Some(baseline) => baseline,
            None => {
                warn!(
                    stat_type = %quote.stat_type,
                    player_id = %quote.player_id,
                    "no league baseline for stat, skipping quote"
                );
                continue;
            }
        };

        let history = provider.game_log(&quote.player_id);

        match analyze_line(
            &quote.player_id,
            quote.stat_type,
            quote.line_value,
            opponent,
            &history,
            defense,
            league_baseline,
            config,
        ) {
            Ok(recommendation) => plays.push(recommendation),
            Err(AnalyzerError::InsufficientData { .. }) => {
                warn!(
                    player_id = %quote.player_id,
                    stat_type = %quote.stat_type,
                    "no season history, skipping player"
                );
            }
            Err(err) => return Err(err),
        }
    }

    Ok(rank_plays(plays, min_z_score))
}
