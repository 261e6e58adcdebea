pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use config::*;
pub use error::*;
pub use models::*;
pub use utils::*;

pub use utils::deviation::{expected_value, recent_average, season_average, standard_deviation};
pub use utils::prop_analysis::{analyze_line, expected_stats, find_best_plays, rank_plays};
