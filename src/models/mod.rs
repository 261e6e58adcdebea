use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A statistic a sportsbook posts player props on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatType {
    Points,
    Rebounds,
    Assists,
    Threes,
    Steals,
    Blocks,
    Turnovers,
    // Composite markets (e.g., "pts+reb+ast 38.5")
    PointsRebounds,
    PointsAssists,
    ReboundsAssists,
    PointsReboundsAssists,
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatType::Points => "points",
            StatType::Rebounds => "rebounds",
            StatType::Assists => "assists",
            StatType::Threes => "threes",
            StatType::Steals => "steals",
            StatType::Blocks => "blocks",
            StatType::Turnovers => "turnovers",
            StatType::PointsRebounds => "pts+reb",
            StatType::PointsAssists => "pts+ast",
            StatType::ReboundsAssists => "reb+ast",
            StatType::PointsReboundsAssists => "pts+reb+ast",
        };
        write!(f, "{}", name)
    }
}

/// One player's recorded value for one stat in one completed game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatObservation {
    pub player_id: String,
    pub stat_type: StatType,
    pub value: f64, // non-negative
    pub game_date: NaiveDate,
    pub home: bool,
    pub opponent: String, // team abbreviation (e.g., "BOS")
}

/// A sportsbook's posted over/under number for one player/stat/game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineQuote {
    pub player_id: String,
    pub stat_type: StatType,
    pub line_value: f64,
    pub bookmaker: String,
    pub last_update: DateTime<Utc>,
    pub over_price: Option<i32>, // American odds, not used by the analysis
    pub under_price: Option<i32>,
}

/// Component averages behind a blended expected value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedStats {
    pub season_avg: f64,
    pub season_games: usize,
    pub recent_avg: f64,
    pub recent_games: usize,
    pub opponent_adj: f64,
    pub expected: f64,
}

/// Which side of the line to take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Over,
    Under,
    NoPlay,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Over => write!(f, "OVER"),
            Side::Under => write!(f, "UNDER"),
            Side::NoPlay => write!(f, "NO PLAY"),
        }
    }
}

/// Confidence tier derived from |z-score| against the configured thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::Low => write!(f, "Low"),
        }
    }
}

/// A scored prop play: how far the posted line sits from the blended
/// expectation, and which side to follow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub player_id: String,
    pub stat_type: StatType,
    pub line_value: f64,
    pub season_avg: f64,
    pub recent_avg: f64,
    pub opponent_adj: f64,
    pub expected: f64,
    pub deviation: f64, // line - expected
    pub std_dev: f64,
    pub z_score: f64,
    pub side: Side,
    pub confidence: Confidence,
    pub reasoning: String,
}

impl Recommendation {
    /// Format the recommendation as a readable string
    pub fn format(&self) -> String {
        format!(
            "{} {} O/U {:.1} | Exp: {:.1} (szn {:.1} / L5 {:.1} / opp {:.1}) | Dev: {:+.1} | Z: {:+.2} | {} ({})",
            self.player_id,
            self.stat_type,
            self.line_value,
            self.expected,
            self.season_avg,
            self.recent_avg,
            self.opponent_adj,
            self.deviation,
            self.z_score,
            self.side,
            self.confidence
        )
    }
}

/// League-wide per-stat averages, used as the mandatory fallback when no
/// opponent-specific defensive number is known
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueAverages {
    averages: HashMap<StatType, f64>,
}

impl LeagueAverages {
    pub fn new(averages: HashMap<StatType, f64>) -> Self {
        Self { averages }
    }

    /// League averages allowed per starter-level player, per game (NBA)
    pub fn nba_defaults() -> Self {
        let averages = HashMap::from([
            (StatType::Points, 25.0),
            (StatType::Rebounds, 8.5),
            (StatType::Assists, 6.0),
            (StatType::Threes, 2.2),
            (StatType::Steals, 1.2),
            (StatType::Blocks, 0.8),
            (StatType::Turnovers, 2.5),
        ]);
        Self { averages }
    }

    pub fn get(&self, stat_type: StatType) -> Option<f64> {
        self.averages.get(&stat_type).copied()
    }

    pub fn set(&mut self, stat_type: StatType, average: f64) {
        self.averages.insert(stat_type, average);
    }
}

/// Per-team defensive baselines: how much each team allows per game for a
/// stat. Lookups that miss fall back to a league-wide average so a thin
/// defensive table never aborts an analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefenseBaselines {
    allowed: HashMap<String, HashMap<StatType, f64>>,
}

impl DefenseBaselines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_allowed(&mut self, team: &str, stat_type: StatType, value: f64) {
        self.allowed
            .entry(team.to_string())
            .or_default()
            .insert(stat_type, value);
    }

    pub fn allowed(&self, team: &str, stat_type: StatType) -> Option<f64> {
        self.allowed.get(team).and_then(|m| m.get(&stat_type)).copied()
    }

    /// Opponent's average allowed value for the stat, or the league baseline
    /// when the opponent is unknown. The fallback is mandatory: missing
    /// opponent data must never abort a computation.
    pub fn opponent_adjustment(&self, team: &str, stat_type: StatType, league_baseline: f64) -> f64 {
        self.allowed(team, stat_type).unwrap_or(league_baseline)
    }
}

/// Supplies a player's materialized game log. Keeps the analysis decoupled
/// from wherever the observations actually live (database, API snapshot,
/// test fixture).
pub trait HistoryProvider {
    fn game_log(&self, player_id: &str) -> Vec<StatObservation>;
}

/// Game logs held in memory, keyed by player id. Backs tests and
/// snapshot-file callers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    logs: HashMap<String, Vec<StatObservation>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a flat list of observations, grouping by player id
    pub fn from_observations(observations: Vec<StatObservation>) -> Self {
        let mut logs: HashMap<String, Vec<StatObservation>> = HashMap::new();
        for obs in observations {
            logs.entry(obs.player_id.clone()).or_default().push(obs);
        }
        Self { logs }
    }

    pub fn insert(&mut self, observation: StatObservation) {
        self.logs
            .entry(observation.player_id.clone())
            .or_default()
            .push(observation);
    }
}

impl HistoryProvider for InMemoryHistory {
    fn game_log(&self, player_id: &str) -> Vec<StatObservation> {
        self.logs.get(player_id).cloned().unwrap_or_default()
    }
}
